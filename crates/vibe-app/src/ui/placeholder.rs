use eframe::egui::{Frame, RichText, Ui};

/// A card for a page or tab whose content does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlaceholderViewModel {
    title: &'static str,
    body: &'static str,
}

impl PlaceholderViewModel {
    #[must_use]
    pub(crate) fn new(title: &'static str, body: &'static str) -> Self {
        Self { title, body }
    }

    #[must_use]
    pub(crate) fn title(&self) -> &'static str {
        self.title
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &PlaceholderViewModel) {
    card(ui, |ui| {
        ui.label(RichText::new(vm.title).strong());
        ui.add_space(4.0);
        ui.label(RichText::new(vm.body).weak());
    });
}

pub(crate) fn card(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui)) {
    Frame::group(ui.style()).inner_margin(16.0).show(ui, |ui| {
        ui.set_max_width(640.0);
        ui.set_min_width(ui.available_width().min(640.0));
        add_contents(ui);
    });
}
