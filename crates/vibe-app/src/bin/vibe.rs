//! VIBE application using egui/eframe.
//!
//! This is the entry point for both the desktop and the web build.

use vibe_app::VibeApp;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    const APP_ID: &str = "io.github.vibe-workspace.vibe";

    better_panic::install();
    env_logger::init();

    log::info!(
        "Starting VIBE native application, version={}",
        vibe_app::version::build_version()
    );

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_resizable(true)
            .with_inner_size((1100.0, 720.0))
            .with_min_inner_size((640.0, 480.0)),
        ..Default::default()
    };
    eframe::run_native(
        "VIBE",
        options,
        Box::new(|cc| Ok(Box::new(VibeApp::new(cc, None)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn install_panic_alert_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        previous(panic_info);

        let message = panic_info.to_string();
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&format!(
                "VIBE has crashed.\n\n{message}\n\nReloading the page may fix the issue.\n\nSee the developer console for details."
            ));
        }
    }));
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    install_panic_alert_hook();

    // Redirect `log` message to `console.log` and friends:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let window = web_sys::window().expect("No window");
    let document = window.document().expect("No document");
    // The page is served below the deployment base path; the app maps the
    // rest of the path to its start page.
    let location = window.location().pathname().ok();

    log::info!(
        "Starting VIBE WASM application, version={}, base_path={:?}, location={location:?}",
        vibe_app::version::build_version(),
        vibe_app::deploy::base_path(),
    );

    let canvas = document
        .get_element_by_id("the_canvas_id")
        .expect("Failed to find the_canvas_id")
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .expect("the_canvas_id was not a HtmlCanvasElement");

    wasm_bindgen_futures::spawn_local(async move {
        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(move |cc| Ok(Box::new(VibeApp::new(cc, location.as_deref())))),
            )
            .await;

        let Some(loading_text) = document.get_element_by_id("loading_text") else {
            return;
        };
        if let Err(e) = start_result {
            loading_text.set_inner_html(
                "<p> VIBE failed to start. See the developer console for details. </p>",
            );
            panic!("Failed to start eframe: {e:?}");
        }
        loading_text.remove();
    });
}
