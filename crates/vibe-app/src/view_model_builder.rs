use vibe_prefs::{CategoryKey, Channel, PreferenceEditor};

use crate::{
    state::{AppState, Route, SettingsTab, UiState},
    ui::{
        footer::FooterViewModel,
        header::HeaderViewModel,
        home_screen::HomeScreenViewModel,
        notification_settings::{CategoryViewModel, NotificationSettingsViewModel},
        page::PageViewModel,
        placeholder::PlaceholderViewModel,
        settings_screen::{SettingsContent, SettingsScreenViewModel},
        sidebar::SidebarViewModel,
        toasts::ToastsViewModel,
    },
    version,
};

#[must_use]
pub(crate) fn build_header_vm(app_state: &AppState) -> HeaderViewModel {
    HeaderViewModel::new(app_state.route)
}

#[must_use]
pub(crate) fn build_footer_vm() -> FooterViewModel {
    FooterViewModel::new(version::build_version())
}

#[must_use]
pub(crate) fn build_sidebar_vm(app_state: &AppState, ui_state: &UiState) -> SidebarViewModel {
    SidebarViewModel::new(
        app_state.route,
        ui_state.sidebar_collapsed,
        version::build_version(),
    )
}

#[must_use]
pub(crate) fn build_toasts_vm(ui_state: &UiState) -> ToastsViewModel<'_> {
    ToastsViewModel {
        toasts: ui_state.toasts.toasts(),
    }
}

#[must_use]
pub(crate) fn build_page_vm<'a>(
    app_state: &'a AppState,
    ui_state: &'a UiState,
) -> PageViewModel<'a> {
    match app_state.route {
        Route::Companies => {
            PageViewModel::Home(HomeScreenViewModel::new(&ui_state.waitlist_email))
        }
        Route::Settings => PageViewModel::Settings(build_settings_screen_vm(app_state)),
        route => PageViewModel::Placeholder(PlaceholderViewModel::new(
            route.title(),
            "This page is not available yet.",
        )),
    }
}

#[must_use]
pub(crate) fn build_settings_screen_vm(app_state: &AppState) -> SettingsScreenViewModel<'_> {
    let tab = app_state.settings_tab;
    let content = match tab {
        SettingsTab::Notifications => {
            SettingsContent::Notifications(build_notification_settings_vm(&app_state.editor))
        }
        SettingsTab::Profile => SettingsContent::Placeholder(PlaceholderViewModel::new(
            "Profile",
            "Profile settings will live here (name, contact details, and preferences).",
        )),
        SettingsTab::Security => SettingsContent::Placeholder(PlaceholderViewModel::new(
            "Security",
            "Security controls such as MFA, session management, and API keys will be configured here.",
        )),
        SettingsTab::Billing => SettingsContent::Placeholder(PlaceholderViewModel::new(
            "Billing",
            "Billing contacts, invoice delivery, and payment methods will be managed here.",
        )),
    };
    SettingsScreenViewModel { tab, content }
}

#[must_use]
pub(crate) fn build_notification_settings_vm(
    editor: &PreferenceEditor,
) -> NotificationSettingsViewModel<'_> {
    let categories = CategoryKey::ALL
        .into_iter()
        .map(|key| build_category_vm(editor, key))
        .collect();
    NotificationSettingsViewModel { categories }
}

fn build_category_vm(editor: &PreferenceEditor, key: CategoryKey) -> CategoryViewModel<'_> {
    CategoryViewModel {
        category: editor.category(key),
        can_save: editor.is_dirty(key),
        can_reset: !editor.is_at_defaults(key),
        events_state: editor.events_tri_state(key),
        channel_states: Channel::ALL
            .map(|channel| (channel, editor.channel_tri_state(key, channel))),
    }
}

#[cfg(test)]
mod tests {
    use vibe_prefs::{CategoryKey, Channel, PreferenceEditor, TriState};
    use vibe_toast::NoopNotifier;

    use super::*;

    fn category_vm(editor: &PreferenceEditor, key: CategoryKey) -> CategoryViewModel<'_> {
        build_notification_settings_vm(editor)
            .categories
            .into_iter()
            .find(|vm| vm.category.key() == key)
            .unwrap()
    }

    fn channel_state(vm: &CategoryViewModel, channel: Channel) -> TriState {
        vm.channel_states
            .iter()
            .find(|(c, _)| *c == channel)
            .map(|(_, state)| *state)
            .unwrap()
    }

    #[test]
    fn notification_settings_lists_categories_in_order() {
        let editor = PreferenceEditor::new();
        let vm = build_notification_settings_vm(&editor);
        let keys: Vec<_> = vm.categories.iter().map(|vm| vm.category.key()).collect();
        assert_eq!(keys, CategoryKey::ALL);
    }

    #[test]
    fn defaults_cannot_be_saved_or_reset() {
        let editor = PreferenceEditor::new();
        for vm in build_notification_settings_vm(&editor).categories {
            assert!(!vm.can_save);
            assert!(!vm.can_reset);
            assert_eq!(vm.events_state, TriState::Checked);
            assert_eq!(channel_state(&vm, Channel::Email), TriState::Checked);
        }
    }

    #[test]
    fn edits_enable_save_and_reset_for_that_category_only() {
        let mut editor = PreferenceEditor::new();
        editor
            .toggle_event(CategoryKey::Purchases, "quote_accepted", false)
            .unwrap();

        let purchases = category_vm(&editor, CategoryKey::Purchases);
        assert!(purchases.can_save);
        assert!(purchases.can_reset);
        assert_eq!(purchases.events_state, TriState::Mixed);

        let services = category_vm(&editor, CategoryKey::Services);
        assert!(!services.can_save);
        assert!(!services.can_reset);
    }

    #[test]
    fn committed_edits_can_still_be_reset() {
        let mut editor = PreferenceEditor::new();
        editor.toggle_all_channels(CategoryKey::Provisioning, Channel::Sms, true);
        editor.commit(CategoryKey::Provisioning, &mut NoopNotifier);

        let vm = category_vm(&editor, CategoryKey::Provisioning);
        assert!(!vm.can_save);
        assert!(vm.can_reset);
        assert_eq!(channel_state(&vm, Channel::Sms), TriState::Checked);
    }

    #[test]
    fn default_sms_channel_is_mixed_where_some_events_use_it() {
        let editor = PreferenceEditor::new();
        assert_eq!(
            channel_state(&category_vm(&editor, CategoryKey::Maintenance), Channel::Sms),
            TriState::Mixed
        );
        assert_eq!(
            channel_state(&category_vm(&editor, CategoryKey::Purchases), Channel::Sms),
            TriState::Unchecked
        );
    }

    #[test]
    fn page_follows_route() {
        let mut app_state = AppState::new();
        let ui_state = UiState::new();
        assert!(matches!(
            build_page_vm(&app_state, &ui_state),
            PageViewModel::Home(_)
        ));

        app_state.navigate(Route::Reports);
        let PageViewModel::Placeholder(vm) = build_page_vm(&app_state, &ui_state) else {
            panic!("expected a placeholder page");
        };
        assert_eq!(vm.title(), "Reports");

        app_state.navigate(Route::Settings);
        let PageViewModel::Settings(vm) = build_page_vm(&app_state, &ui_state) else {
            panic!("expected the settings page");
        };
        assert_eq!(vm.tab, SettingsTab::Notifications);
        assert!(matches!(vm.content, SettingsContent::Notifications(_)));
    }

    #[test]
    fn settings_tabs_other_than_notifications_are_placeholders() {
        let mut app_state = AppState::new();
        app_state.settings_tab = SettingsTab::Billing;

        let vm = build_settings_screen_vm(&app_state);
        let SettingsContent::Placeholder(placeholder) = vm.content else {
            panic!("expected a placeholder tab");
        };
        assert_eq!(
            placeholder,
            PlaceholderViewModel::new(
                "Billing",
                "Billing contacts, invoice delivery, and payment methods will be managed here.",
            )
        );
    }

    #[test]
    fn sidebar_reflects_route_and_collapse() {
        let mut app_state = AppState::new();
        let mut ui_state = UiState::new();
        app_state.navigate(Route::MyCompany);
        ui_state.sidebar_collapsed = true;

        let vm = build_sidebar_vm(&app_state, &ui_state);
        assert_eq!(vm.active(), Route::MyCompany);
        assert!(vm.collapsed());

        ui_state.sidebar_collapsed = false;
        app_state.navigate(Route::Catalog);
        let vm = build_sidebar_vm(&app_state, &ui_state);
        assert_eq!(vm.active(), Route::Catalog);
        assert!(!vm.collapsed());
    }
}
