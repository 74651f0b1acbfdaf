use vibe_prefs::PreferenceEditor;

use crate::state::{Route, SettingsTab};

// AppState holds the session's domain state: the preference editor and where the user is.
// Nothing here outlives the session.
#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) editor: PreferenceEditor,
    pub(crate) route: Route,
    pub(crate) settings_tab: SettingsTab,
}

impl AppState {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            editor: PreferenceEditor::new(),
            route: Route::Companies,
            settings_tab: SettingsTab::default(),
        }
    }

    pub(crate) fn navigate(&mut self, route: Route) -> bool {
        if self.route == route {
            return false;
        }
        log::debug!("navigate: {:?} -> {route:?}", self.route);
        self.route = route;
        true
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
