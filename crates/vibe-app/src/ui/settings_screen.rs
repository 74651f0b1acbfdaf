use eframe::egui::{Button, RichText, Ui};

use crate::{
    action::{ActionRequestQueue, NavigationAction},
    state::SettingsTab,
    ui::{
        notification_settings::{self, NotificationSettingsViewModel},
        placeholder::{self, PlaceholderViewModel},
    },
};

#[derive(Debug, Clone)]
pub(crate) struct SettingsScreenViewModel<'a> {
    pub(crate) tab: SettingsTab,
    pub(crate) content: SettingsContent<'a>,
}

#[derive(Debug, Clone)]
pub(crate) enum SettingsContent<'a> {
    Notifications(NotificationSettingsViewModel<'a>),
    Placeholder(PlaceholderViewModel),
}

pub(crate) fn show(
    ui: &mut Ui,
    vm: &SettingsScreenViewModel,
    action_queue: &mut ActionRequestQueue,
) {
    ui.heading("Settings");
    ui.label(
        RichText::new(
            "Configure your profile, security, and notification preferences for this workspace.",
        )
        .weak(),
    );
    ui.add_space(12.0);

    ui.horizontal(|ui| {
        for tab in SettingsTab::ALL {
            let selected = vm.tab == tab;
            if ui.add(Button::selectable(selected, tab.title())).clicked() && !selected {
                action_queue.request(NavigationAction::OpenSettingsTab(tab).into());
            }
        }
    });
    ui.add_space(8.0);

    match &vm.content {
        SettingsContent::Notifications(vm) => notification_settings::show(ui, vm, action_queue),
        SettingsContent::Placeholder(vm) => placeholder::show(ui, vm),
    }
}
