use vibe_prefs::PrefsError;
use vibe_toast::{ToastOptions, ToastVariant};

use crate::{
    action::{Action, ActionRequestQueue, AppAction, NavigationAction, PreferenceAction, UiAction},
    state::{AppState, Route, UiState},
};

#[derive(Debug)]
struct ActionContext<'a> {
    app_state: &'a mut AppState,
    ui_state: &'a mut UiState,
}

pub(crate) fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
) {
    for action in action_queue.take_all() {
        handle(app_state, ui_state, action);
    }
}

pub(crate) fn handle(app_state: &mut AppState, ui_state: &mut UiState, action: Action) {
    log::debug!("handle action: {action:?}");

    let mut ctx = ActionContext {
        app_state,
        ui_state,
    };

    match action {
        Action::App(AppAction::Navigation(action)) => ctx.handle_navigation(action),
        Action::App(AppAction::Preferences(action)) => {
            if let Err(err) = ctx.handle_preference(action) {
                log::warn!("dropping preference action {action:?}: {err}");
            }
        }
        Action::Ui(action) => ctx.handle_ui(action),
    }
}

impl ActionContext<'_> {
    fn navigate(&mut self, route: Route) {
        if self.app_state.navigate(route) {
            self.ui_state.location_changed = true;
        }
    }

    fn handle_navigation(&mut self, action: NavigationAction) {
        match action {
            NavigationAction::Navigate(route) => self.navigate(route),
            NavigationAction::OpenSettingsTab(tab) => {
                self.app_state.settings_tab = tab;
                self.navigate(Route::Settings);
            }
            NavigationAction::LogOut => {
                log::info!("log out requested");
                self.navigate(Route::Companies);
            }
        }
    }

    fn handle_preference(&mut self, action: PreferenceAction) -> Result<(), PrefsError> {
        let editor = &mut self.app_state.editor;
        match action {
            PreferenceAction::ToggleCategory { category, value } => {
                editor.toggle_category(category, value);
            }
            PreferenceAction::SetDelivery { category, value } => {
                editor.set_delivery(category, value);
            }
            PreferenceAction::ToggleEvent {
                category,
                event_id,
                value,
            } => editor.toggle_event(category, event_id, value)?,
            PreferenceAction::ToggleEventChannel {
                category,
                event_id,
                channel,
                value,
            } => editor.toggle_event_channel(category, event_id, channel, value)?,
            PreferenceAction::ToggleAllEvents { category, value } => {
                editor.toggle_all_events(category, value);
            }
            PreferenceAction::ToggleAllChannels {
                category,
                channel,
                value,
            } => editor.toggle_all_channels(category, channel, value),
            PreferenceAction::Commit { category } => {
                editor.commit(category, &mut self.ui_state.toasts);
            }
            PreferenceAction::Reset { category } => {
                editor.reset(category, &mut self.ui_state.toasts);
            }
        }
        Ok(())
    }

    fn handle_ui(&mut self, action: UiAction) {
        let ui_state = &mut *self.ui_state;
        match action {
            UiAction::ToggleSidebar => ui_state.sidebar_collapsed = !ui_state.sidebar_collapsed,
            UiAction::UpdateWaitlistEmail(email) => ui_state.waitlist_email = email,
            UiAction::JoinWaitlist => {
                let email = ui_state.waitlist_email.trim().to_owned();
                if email.is_empty() {
                    return;
                }
                log::info!("waitlist signup requested");
                ui_state.toasts.push(
                    ToastOptions::new("You're on the list")
                        .description(format!("We'll send updates to {email}."))
                        .variant(ToastVariant::Success),
                );
                ui_state.waitlist_email.clear();
            }
            UiAction::DismissToast(id) => {
                ui_state.toasts.dismiss(id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use vibe_prefs::{CategoryKey, Channel, DeliveryOption};
    use vibe_toast::{ToastOptions, ToastVariant};

    use super::handle;
    use crate::{
        action::{NavigationAction, PreferenceAction, UiAction},
        state::{AppState, Route, SettingsTab, UiState},
    };

    #[test]
    fn commit_saves_category_and_shows_success_toast() {
        let mut app_state = AppState::new();
        let mut ui_state = UiState::new();
        let category = CategoryKey::Services;

        handle(
            &mut app_state,
            &mut ui_state,
            PreferenceAction::ToggleCategory {
                category,
                value: false,
            }
            .into(),
        );
        assert!(app_state.editor.is_dirty(category));

        handle(
            &mut app_state,
            &mut ui_state,
            PreferenceAction::Commit { category }.into(),
        );

        assert!(!app_state.editor.is_dirty(category));
        assert!(!app_state.editor.saved()[category].enabled);
        assert_eq!(ui_state.toasts.len(), 1);
        assert_eq!(ui_state.toasts.toasts()[0].variant, ToastVariant::Success);
    }

    #[test]
    fn reset_restores_defaults_and_shows_info_toast() {
        let mut app_state = AppState::new();
        let mut ui_state = UiState::new();
        let category = CategoryKey::Maintenance;

        for action in [
            PreferenceAction::SetDelivery {
                category,
                value: DeliveryOption::EndOfDay,
            },
            PreferenceAction::ToggleAllChannels {
                category,
                channel: Channel::Sms,
                value: true,
            },
            PreferenceAction::Commit { category },
            PreferenceAction::ToggleAllEvents {
                category,
                value: false,
            },
            PreferenceAction::Reset { category },
        ] {
            handle(&mut app_state, &mut ui_state, action.into());
        }

        assert!(app_state.editor.is_at_defaults(category));
        assert!(!app_state.editor.is_dirty(category));
        let toast = ui_state.toasts.toasts().last().unwrap();
        assert_eq!(toast.title, "Defaults restored");
        assert_eq!(toast.variant, ToastVariant::Info);
    }

    #[test]
    fn unknown_event_is_dropped_without_changes() {
        let mut app_state = AppState::new();
        let mut ui_state = UiState::new();

        handle(
            &mut app_state,
            &mut ui_state,
            PreferenceAction::ToggleEventChannel {
                category: CategoryKey::Purchases,
                event_id: "incident_opened",
                channel: Channel::Email,
                value: false,
            }
            .into(),
        );

        assert!(!app_state.editor.has_unsaved_changes());
        assert!(ui_state.toasts.is_empty());
    }

    #[test]
    fn open_settings_tab_navigates_to_settings() {
        let mut app_state = AppState::new();
        let mut ui_state = UiState::new();

        handle(
            &mut app_state,
            &mut ui_state,
            NavigationAction::OpenSettingsTab(SettingsTab::Security).into(),
        );

        assert_eq!(app_state.route, Route::Settings);
        assert_eq!(app_state.settings_tab, SettingsTab::Security);
        assert!(ui_state.location_changed);
    }

    #[test]
    fn navigating_to_current_route_does_not_flag_location() {
        let mut app_state = AppState::new();
        let mut ui_state = UiState::new();

        handle(
            &mut app_state,
            &mut ui_state,
            NavigationAction::Navigate(Route::Companies).into(),
        );

        assert!(!ui_state.location_changed);
    }

    #[test]
    fn join_waitlist_requires_email_and_clears_it() {
        let mut app_state = AppState::new();
        let mut ui_state = UiState::new();

        handle(&mut app_state, &mut ui_state, UiAction::JoinWaitlist.into());
        assert!(ui_state.toasts.is_empty());

        handle(
            &mut app_state,
            &mut ui_state,
            UiAction::UpdateWaitlistEmail("you@example.com".to_owned()).into(),
        );
        handle(&mut app_state, &mut ui_state, UiAction::JoinWaitlist.into());

        assert_eq!(ui_state.toasts.len(), 1);
        assert!(ui_state.waitlist_email.is_empty());
        assert_eq!(
            ui_state.toasts.toasts()[0].description.as_deref(),
            Some("We'll send updates to you@example.com.")
        );
    }

    #[test]
    fn dismiss_toast_is_idempotent() {
        let mut app_state = AppState::new();
        let mut ui_state = UiState::new();
        let id = ui_state.toasts.push(ToastOptions::new("Hello"));

        handle(&mut app_state, &mut ui_state, UiAction::DismissToast(id).into());
        handle(&mut app_state, &mut ui_state, UiAction::DismissToast(id).into());

        assert!(ui_state.toasts.is_empty());
    }

    #[test]
    fn toggle_sidebar_flips_collapsed() {
        let mut app_state = AppState::new();
        let mut ui_state = UiState::new();

        handle(&mut app_state, &mut ui_state, UiAction::ToggleSidebar.into());
        assert!(ui_state.sidebar_collapsed);
        handle(&mut app_state, &mut ui_state, UiAction::ToggleSidebar.into());
        assert!(!ui_state.sidebar_collapsed);
    }
}
