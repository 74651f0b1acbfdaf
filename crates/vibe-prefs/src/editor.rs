use vibe_toast::{Notifier, ToastOptions, ToastVariant};

use crate::{
    CategoryKey, Channel, DeliveryOption, EventChannelConfig, NotificationCategory,
    NotificationState, PrefsError, TriState,
};

/// Editor for notification preferences.
///
/// Keeps three independent copies of the preferences:
///
/// - **defaults**: the recommended baseline, never modified,
/// - **saved**: the last committed values,
/// - **working**: the values currently being edited.
///
/// Every edit goes to the working copy. [`commit`](Self::commit) copies a
/// category from working to saved, and [`reset`](Self::reset) copies it from
/// the defaults to both. Derived flags such as [`is_dirty`](Self::is_dirty)
/// are computed from the current values on every call.
///
/// # Example
///
/// ```
/// use vibe_prefs::{CategoryKey, PreferenceEditor};
/// use vibe_toast::ToastQueue;
///
/// let mut editor = PreferenceEditor::new();
/// let mut toasts = ToastQueue::new();
///
/// editor.toggle_category(CategoryKey::Services, false);
/// assert!(editor.is_dirty(CategoryKey::Services));
///
/// editor.commit(CategoryKey::Services, &mut toasts);
/// assert!(!editor.is_dirty(CategoryKey::Services));
/// assert!(!editor.saved()[CategoryKey::Services].enabled);
/// assert_eq!(toasts.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct PreferenceEditor {
    defaults: NotificationState,
    saved: NotificationState,
    working: NotificationState,
}

impl Default for PreferenceEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceEditor {
    /// Creates an editor whose saved and working copies equal the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::with_defaults(NotificationState::defaults())
    }

    /// Creates an editor around a custom baseline.
    #[must_use]
    pub fn with_defaults(defaults: NotificationState) -> Self {
        Self {
            saved: defaults.clone(),
            working: defaults.clone(),
            defaults,
        }
    }

    /// Returns the baseline preferences.
    #[must_use]
    pub fn defaults(&self) -> &NotificationState {
        &self.defaults
    }

    /// Returns the last committed preferences.
    #[must_use]
    pub fn saved(&self) -> &NotificationState {
        &self.saved
    }

    /// Returns the preferences being edited.
    #[must_use]
    pub fn working(&self) -> &NotificationState {
        &self.working
    }

    /// Returns the working copy of one category.
    #[must_use]
    pub fn category(&self, category: CategoryKey) -> &NotificationCategory {
        &self.working[category]
    }

    /// Enables or disables a whole category.
    ///
    /// Events keep their own values.
    pub fn toggle_category(&mut self, category: CategoryKey, value: bool) {
        self.working[category].enabled = value;
    }

    /// Changes the delivery timing of a category.
    pub fn set_delivery(&mut self, category: CategoryKey, value: DeliveryOption) {
        self.working[category].delivery = value;
    }

    /// Enables or disables one event.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError::UnknownEvent`] if `event_id` is not in the
    /// category's catalog. Nothing is changed in that case.
    pub fn toggle_event(
        &mut self,
        category: CategoryKey,
        event_id: &str,
        value: bool,
    ) -> Result<(), PrefsError> {
        self.event_mut(category, event_id)?.enabled = value;
        Ok(())
    }

    /// Enables or disables one channel of one event.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError::UnknownEvent`] if `event_id` is not in the
    /// category's catalog. Nothing is changed in that case.
    pub fn toggle_event_channel(
        &mut self,
        category: CategoryKey,
        event_id: &str,
        channel: Channel,
        value: bool,
    ) -> Result<(), PrefsError> {
        self.event_mut(category, event_id)?
            .channels
            .set_channel(channel, value);
        Ok(())
    }

    /// Sets every event of a category, and the category itself, to `value`.
    pub fn toggle_all_events(&mut self, category: CategoryKey, value: bool) {
        let working = &mut self.working[category];
        working.enabled = value;
        for config in working.event_configs_mut() {
            config.enabled = value;
        }
    }

    /// Sets one channel to `value` on every event of a category.
    pub fn toggle_all_channels(&mut self, category: CategoryKey, channel: Channel, value: bool) {
        for config in self.working[category].event_configs_mut() {
            config.channels.set_channel(channel, value);
        }
    }

    /// Returns `true` if the working copy of a category differs from the saved one.
    #[must_use]
    pub fn is_dirty(&self, category: CategoryKey) -> bool {
        !self.working[category].same_settings(&self.saved[category])
    }

    /// Returns `true` if any category has uncommitted edits.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        CategoryKey::ALL.into_iter().any(|key| self.is_dirty(key))
    }

    /// Returns `true` if the working copy of a category equals the defaults.
    #[must_use]
    pub fn is_at_defaults(&self, category: CategoryKey) -> bool {
        self.working[category].same_settings(&self.defaults[category])
    }

    /// Returns `true` if the category and every one of its events are enabled.
    #[must_use]
    pub fn are_all_events_enabled(&self, category: CategoryKey) -> bool {
        let working = &self.working[category];
        working.enabled && working.events().values().all(|config| config.enabled)
    }

    /// Returns `true` if at least one event of the category is enabled.
    #[must_use]
    pub fn are_some_events_enabled(&self, category: CategoryKey) -> bool {
        self.working[category]
            .events()
            .values()
            .any(|config| config.enabled)
    }

    /// Returns the state of the "all events" checkbox.
    #[must_use]
    pub fn events_tri_state(&self, category: CategoryKey) -> TriState {
        TriState::from_flags(
            self.are_all_events_enabled(category),
            self.are_some_events_enabled(category),
        )
    }

    /// Returns `true` if `channel` is on for every enabled event.
    ///
    /// Disabled events are ignored. A disabled category, or one without any
    /// enabled event, never counts as "all".
    #[must_use]
    pub fn are_all_channels_enabled(&self, category: CategoryKey, channel: Channel) -> bool {
        let working = &self.working[category];
        let mut enabled = enabled_events(working).peekable();
        working.enabled
            && enabled.peek().is_some()
            && enabled.all(|config| config.channels.has(channel))
    }

    /// Returns `true` if `channel` is on for at least one enabled event.
    #[must_use]
    pub fn are_some_channels_enabled(&self, category: CategoryKey, channel: Channel) -> bool {
        enabled_events(&self.working[category]).any(|config| config.channels.has(channel))
    }

    /// Returns the state of a channel's "all" checkbox.
    #[must_use]
    pub fn channel_tri_state(&self, category: CategoryKey, channel: Channel) -> TriState {
        TriState::from_flags(
            self.are_all_channels_enabled(category, channel),
            self.are_some_channels_enabled(category, channel),
        )
    }

    /// Saves the working copy of a category and confirms with a toast.
    ///
    /// Committing a category without edits leaves the saved copy unchanged.
    pub fn commit<N>(&mut self, category: CategoryKey, notifier: &mut N)
    where
        N: Notifier + ?Sized,
    {
        self.saved[category] = self.working[category].clone();
        log::info!("committed notification preferences: category={category}");
        notifier.show_toast(
            ToastOptions::new("Notification preferences saved")
                .description("Your changes have been applied for this workspace.")
                .variant(ToastVariant::Success),
        );
    }

    /// Restores the defaults of a category in both the working and saved
    /// copies, and confirms with a toast.
    pub fn reset<N>(&mut self, category: CategoryKey, notifier: &mut N)
    where
        N: Notifier + ?Sized,
    {
        self.working[category] = self.defaults[category].clone();
        self.saved[category] = self.defaults[category].clone();
        log::info!("restored default notification preferences: category={category}");
        notifier.show_toast(
            ToastOptions::new("Defaults restored")
                .description("Notification settings have been reset to recommended defaults.")
                .variant(ToastVariant::Info),
        );
    }

    fn event_mut(
        &mut self,
        category: CategoryKey,
        event_id: &str,
    ) -> Result<&mut EventChannelConfig, PrefsError> {
        self.working[category]
            .event_mut(event_id)
            .ok_or_else(|| PrefsError::UnknownEvent {
                category,
                event: event_id.to_owned(),
            })
    }
}

fn enabled_events(category: &NotificationCategory) -> impl Iterator<Item = &EventChannelConfig> {
    category.events().values().filter(|config| config.enabled)
}
