use std::mem;

use vibe_prefs::{CategoryKey, Channel, DeliveryOption};
use vibe_toast::ToastId;

use crate::state::{Route, SettingsTab};

pub(crate) mod handler;

#[derive(Debug, derive_more::From)]
pub(crate) enum Action {
    App(AppAction),
    Ui(UiAction),
}

#[derive(Debug, derive_more::From)]
pub(crate) enum AppAction {
    Navigation(NavigationAction),
    Preferences(PreferenceAction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NavigationAction {
    Navigate(Route),
    OpenSettingsTab(SettingsTab),
    LogOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PreferenceAction {
    ToggleCategory {
        category: CategoryKey,
        value: bool,
    },
    SetDelivery {
        category: CategoryKey,
        value: DeliveryOption,
    },
    ToggleEvent {
        category: CategoryKey,
        event_id: &'static str,
        value: bool,
    },
    ToggleEventChannel {
        category: CategoryKey,
        event_id: &'static str,
        channel: Channel,
        value: bool,
    },
    ToggleAllEvents {
        category: CategoryKey,
        value: bool,
    },
    ToggleAllChannels {
        category: CategoryKey,
        channel: Channel,
        value: bool,
    },
    Commit {
        category: CategoryKey,
    },
    Reset {
        category: CategoryKey,
    },
}

#[derive(Debug)]
pub(crate) enum UiAction {
    ToggleSidebar,
    UpdateWaitlistEmail(String),
    JoinWaitlist,
    DismissToast(ToastId),
}

impl From<NavigationAction> for Action {
    fn from(action: NavigationAction) -> Self {
        Action::App(action.into())
    }
}

impl From<PreferenceAction> for Action {
    fn from(action: PreferenceAction) -> Self {
        Action::App(action.into())
    }
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}
