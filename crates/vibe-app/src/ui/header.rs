use eframe::egui::{Align, Button, Layout, RichText, Ui, widgets};

use crate::{
    action::{ActionRequestQueue, NavigationAction},
    state::{Route, SettingsTab},
    ui::icon,
};

#[derive(Debug, Clone)]
pub(crate) struct HeaderViewModel {
    active: Route,
}

impl HeaderViewModel {
    #[must_use]
    pub(crate) fn new(active: Route) -> Self {
        Self { active }
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &HeaderViewModel, action_queue: &mut ActionRequestQueue) {
    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.label(RichText::new("VIBE").heading().strong());

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.menu_button(icon::USER, |ui| {
                let items = [
                    (icon::USER, "My Account", NavigationAction::Navigate(Route::Account)),
                    (icon::GEAR, "Settings", NavigationAction::Navigate(Route::Settings)),
                ];
                for (glyph, label, action) in items {
                    if ui.button(format!("{glyph} {label}")).clicked() {
                        action_queue.request(action.into());
                        ui.close();
                    }
                }
                ui.separator();
                if ui.button(format!("{} Log Out", icon::LOG_OUT)).clicked() {
                    action_queue.request(NavigationAction::LogOut.into());
                    ui.close();
                }
            });

            link(ui, vm, Route::Docs, "Docs", action_queue);
            link(ui, vm, Route::Companies, "Home", action_queue);
            ui.separator();

            icon_button(
                ui,
                (icon::MESSAGE, "In-app messages"),
                vm.active == Route::Messages,
                NavigationAction::Navigate(Route::Messages),
                action_queue,
            );
            icon_button(
                ui,
                (icon::BELL, "Notifications"),
                false,
                NavigationAction::OpenSettingsTab(SettingsTab::Notifications),
                action_queue,
            );
            widgets::global_theme_preference_switch(ui);
        });
    });
    ui.add_space(6.0);
}

fn link(
    ui: &mut Ui,
    vm: &HeaderViewModel,
    route: Route,
    label: &str,
    action_queue: &mut ActionRequestQueue,
) {
    if ui.add(Button::selectable(vm.active == route, label)).clicked() {
        action_queue.request(NavigationAction::Navigate(route).into());
    }
}

fn icon_button(
    ui: &mut Ui,
    (glyph, hover): (&str, &str),
    selected: bool,
    action: NavigationAction,
    action_queue: &mut ActionRequestQueue,
) {
    if ui
        .add(Button::selectable(selected, glyph))
        .on_hover_text(hover)
        .clicked()
    {
        action_queue.request(action.into());
    }
}
