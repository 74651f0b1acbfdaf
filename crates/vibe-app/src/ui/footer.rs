use eframe::egui::{Align, Layout, Ui};

#[derive(Debug, Clone)]
pub(crate) struct FooterViewModel {
    version: String,
}

impl FooterViewModel {
    #[must_use]
    pub(crate) fn new(version: String) -> Self {
        Self { version }
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &FooterViewModel) {
    ui.horizontal(|ui| {
        ui.small("© VIBE");
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.small(format!("Built with eframe & egui · {}", vm.version));
        });
    });
}
