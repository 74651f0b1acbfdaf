//! Notification preferences editor.
//!
//! One collapsible section per category, open by default. The header carries
//! the category switch, the delivery selector and the save/reset buttons; the
//! body is a table of events by channel with aggregate checkboxes in its header
//! row.
//!
//! A disabled category keeps its values but renders every control below the
//! switch disabled. A disabled event hides its channel checkboxes.

use eframe::egui::{
    Align, Button, Checkbox, ComboBox, Layout, RichText, Ui, collapsing_header::CollapsingState,
};
use egui_extras::{Column, TableBuilder};
use vibe_prefs::{Channel, DeliveryOption, NotificationCategory, TriState};

use crate::{
    action::{ActionRequestQueue, PreferenceAction},
    ui::{icon, placeholder},
};

const CHANNEL_COLUMN_WIDTH: f32 = 96.0;
const ROW_HEIGHT: f32 = 26.0;

#[derive(Debug, Clone)]
pub(crate) struct NotificationSettingsViewModel<'a> {
    pub(crate) categories: Vec<CategoryViewModel<'a>>,
}

#[derive(Debug, Clone)]
pub(crate) struct CategoryViewModel<'a> {
    pub(crate) category: &'a NotificationCategory,
    pub(crate) can_save: bool,
    pub(crate) can_reset: bool,
    pub(crate) events_state: TriState,
    pub(crate) channel_states: [(Channel, TriState); Channel::ALL.len()],
}

pub(crate) fn show(
    ui: &mut Ui,
    vm: &NotificationSettingsViewModel,
    action_queue: &mut ActionRequestQueue,
) {
    placeholder::card(ui, |ui| {
        ui.label(RichText::new("Notification settings").strong().size(18.0));
        for category_vm in &vm.categories {
            ui.separator();
            show_category(ui, category_vm, action_queue);
        }
    });
}

fn show_category(ui: &mut Ui, vm: &CategoryViewModel, action_queue: &mut ActionRequestQueue) {
    let key = vm.category.key();
    let id = ui.make_persistent_id(("notification_category", key));
    CollapsingState::load_with_default_open(ui.ctx(), id, true)
        .show_header(ui, |ui| show_category_header(ui, vm, action_queue))
        .body(|ui| {
            ui.label(RichText::new(vm.category.description()).weak());
            ui.add_space(4.0);
            show_event_table(ui, vm, action_queue);
        });
}

fn show_category_header(
    ui: &mut Ui,
    vm: &CategoryViewModel,
    action_queue: &mut ActionRequestQueue,
) {
    let category = vm.category;
    let key = category.key();

    ui.label(RichText::new(category.label()).strong());

    let mut enabled = category.enabled;
    let switch_label = if enabled { "Enabled" } else { "Disabled" };
    if ui.checkbox(&mut enabled, switch_label).changed() {
        action_queue.request(
            PreferenceAction::ToggleCategory {
                category: key,
                value: enabled,
            }
            .into(),
        );
    }

    ui.label("Delivery");
    let mut delivery = category.delivery;
    ui.add_enabled_ui(category.enabled, |ui| {
        ComboBox::from_id_salt(("delivery", key))
            .selected_text(delivery.label())
            .width(200.0)
            .show_ui(ui, |ui| {
                for option in DeliveryOption::ALL {
                    ui.selectable_value(&mut delivery, option, option.label());
                }
            });
    });
    if delivery != category.delivery {
        action_queue.request(
            PreferenceAction::SetDelivery {
                category: key,
                value: delivery,
            }
            .into(),
        );
    }

    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
        let save = ui.add_enabled(
            vm.can_save,
            Button::new(format!("{} Save changes", icon::CHECK)),
        );
        if save.clicked() {
            action_queue.request(PreferenceAction::Commit { category: key }.into());
        }
        let reset = ui.add_enabled(
            vm.can_reset,
            Button::new(format!("{} Reset to defaults", icon::RESET)).frame(false),
        );
        if reset.clicked() {
            action_queue.request(PreferenceAction::Reset { category: key }.into());
        }
    });
}

fn show_event_table(ui: &mut Ui, vm: &CategoryViewModel, action_queue: &mut ActionRequestQueue) {
    let category = vm.category;
    let key = category.key();
    let editable = category.enabled;

    TableBuilder::new(ui)
        .id_salt(("events", key))
        .striped(true)
        .vscroll(false)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::remainder().at_least(200.0))
        .columns(Column::exact(CHANNEL_COLUMN_WIDTH), Channel::ALL.len())
        .header(ROW_HEIGHT, |mut header| {
            header.col(|ui| {
                if let Some(value) = tri_state_checkbox(ui, editable, vm.events_state, "All events")
                {
                    action_queue.request(
                        PreferenceAction::ToggleAllEvents {
                            category: key,
                            value,
                        }
                        .into(),
                    );
                }
            });
            for (channel, state) in vm.channel_states {
                header.col(|ui| {
                    if let Some(value) = tri_state_checkbox(ui, editable, state, channel.label()) {
                        action_queue.request(
                            PreferenceAction::ToggleAllChannels {
                                category: key,
                                channel,
                                value,
                            }
                            .into(),
                        );
                    }
                });
            }
        })
        .body(|mut body| {
            for (definition, config) in category.iter_events() {
                body.row(ROW_HEIGHT, |mut row| {
                    row.col(|ui| {
                        let mut enabled = config.enabled;
                        let response =
                            ui.add_enabled(editable, Checkbox::new(&mut enabled, definition.label));
                        if response.changed() {
                            action_queue.request(
                                PreferenceAction::ToggleEvent {
                                    category: key,
                                    event_id: definition.id,
                                    value: enabled,
                                }
                                .into(),
                            );
                        }
                    });
                    for channel in Channel::ALL {
                        row.col(|ui| {
                            if !config.enabled {
                                return;
                            }
                            let mut checked = config.channels.has(channel);
                            let response = ui
                                .add_enabled(editable, Checkbox::without_text(&mut checked))
                                .on_hover_text(channel.label());
                            if response.changed() {
                                action_queue.request(
                                    PreferenceAction::ToggleEventChannel {
                                        category: key,
                                        event_id: definition.id,
                                        channel,
                                        value: checked,
                                    }
                                    .into(),
                                );
                            }
                        });
                    }
                });
            }
        });
}

// Returns the new value when the user clicks the checkbox. A mixed state turns
// into checked.
fn tri_state_checkbox(ui: &mut Ui, enabled: bool, state: TriState, text: &str) -> Option<bool> {
    let mut checked = state.is_on();
    let checkbox = Checkbox::new(&mut checked, text).indeterminate(state.is_mixed());
    ui.add_enabled(enabled, checkbox)
        .changed()
        .then_some(checked)
}
