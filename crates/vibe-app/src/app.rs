//! VIBE application shell.
//!
//! # Design Notes
//! - `AppState` owns the preference editor and the current route; `UiState`
//!   owns the toast queue and chrome toggles.
//! - Every frame builds view models, renders the panels, then applies the
//!   requested actions in order.
//! - Toast expiry follows the frame clock. A repaint is scheduled at the next
//!   expiry so toasts disappear without user input.
//! - On the web the browser location mirrors the current route.

use std::{mem, time::Duration};

use eframe::{
    App, CreationContext, Frame,
    egui::{CentralPanel, Context, ScrollArea, SidePanel, TopBottomPanel},
};

use crate::{
    action::{self, ActionRequestQueue},
    deploy,
    state::{AppState, Route, UiState},
    ui, view_model_builder,
};

const SIDEBAR_WIDTH: f32 = 220.0;
const SIDEBAR_COLLAPSED_WIDTH: f32 = 56.0;

#[derive(Debug)]
pub struct VibeApp {
    app_state: AppState,
    ui_state: UiState,
}

impl VibeApp {
    /// Creates the app, starting on the page named by `location` if any.
    ///
    /// `location` is a browser location path including the deployment base
    /// path. Unknown paths start on the home page.
    #[must_use]
    pub fn new(_cc: &CreationContext<'_>, location: Option<&str>) -> Self {
        let mut app_state = AppState::new();
        app_state.navigate(start_route(location));
        Self {
            app_state,
            ui_state: UiState::new(),
        }
    }

    fn sync_location(&mut self) {
        if mem::take(&mut self.ui_state.location_changed) {
            location::replace(&deploy::href(self.app_state.route.path()));
        }
    }
}

fn start_route(location: Option<&str>) -> Route {
    let Some(location) = location else {
        return Route::Companies;
    };
    deploy::app_path(location)
        .and_then(Route::from_path)
        .unwrap_or_else(|| {
            log::warn!("unknown location, showing the home page: {location}");
            Route::Companies
        })
}

impl App for VibeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let now = Duration::from_secs_f64(ctx.input(|i| i.time).max(0.0));
        self.ui_state.tick(now);

        let mut action_queue = ActionRequestQueue::default();

        let header_vm = view_model_builder::build_header_vm(&self.app_state);
        let footer_vm = view_model_builder::build_footer_vm();
        let sidebar_vm = view_model_builder::build_sidebar_vm(&self.app_state, &self.ui_state);
        let page_vm = view_model_builder::build_page_vm(&self.app_state, &self.ui_state);
        let toasts_vm = view_model_builder::build_toasts_vm(&self.ui_state);

        TopBottomPanel::top("header").show(ctx, |ui| {
            ui::header::show(ui, &header_vm, &mut action_queue);
        });
        TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui::footer::show(ui, &footer_vm);
        });
        let sidebar_width = if sidebar_vm.collapsed() {
            SIDEBAR_COLLAPSED_WIDTH
        } else {
            SIDEBAR_WIDTH
        };
        SidePanel::left("sidebar")
            .resizable(false)
            .exact_width(sidebar_width)
            .show(ctx, |ui| {
                ui::sidebar::show(ui, &sidebar_vm, &mut action_queue);
            });
        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                ui::page::show(ui, &page_vm, &mut action_queue);
            });
        });
        ui::toasts::show(ctx, &toasts_vm, &mut action_queue);

        action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);
        self.sync_location();

        if let Some(delay) = self.ui_state.next_repaint() {
            ctx.request_repaint_after(delay);
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod location {
    pub(super) fn replace(href: &str) {
        let Some(history) = web_sys::window().and_then(|window| window.history().ok()) else {
            return;
        };
        if let Err(err) =
            history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(href))
        {
            log::warn!("failed to update location to {href}: {err:?}");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod location {
    pub(super) fn replace(href: &str) {
        log::debug!("location: {href}");
    }
}
