use eframe::egui::Ui;

use crate::{
    action::ActionRequestQueue,
    ui::{
        home_screen::{self, HomeScreenViewModel},
        placeholder::{self, PlaceholderViewModel},
        settings_screen::{self, SettingsScreenViewModel},
    },
};

/// Content of the central panel for the current route.
#[derive(Debug, Clone)]
pub(crate) enum PageViewModel<'a> {
    Home(HomeScreenViewModel<'a>),
    Settings(SettingsScreenViewModel<'a>),
    Placeholder(PlaceholderViewModel),
}

pub(crate) fn show(ui: &mut Ui, vm: &PageViewModel, action_queue: &mut ActionRequestQueue) {
    ui.add_space(12.0);
    match vm {
        PageViewModel::Home(vm) => home_screen::show(ui, vm, action_queue),
        PageViewModel::Settings(vm) => settings_screen::show(ui, vm, action_queue),
        PageViewModel::Placeholder(vm) => {
            ui.heading(vm.title());
            ui.add_space(12.0);
            placeholder::show(ui, vm);
        }
    }
}
