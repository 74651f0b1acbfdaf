use std::time::Duration;

use vibe_toast::ToastQueue;

// UiState holds ephemeral presentation state (toasts, chrome toggles, form drafts).
#[derive(Debug, Default)]
pub(crate) struct UiState {
    pub(crate) toasts: ToastQueue,
    pub(crate) sidebar_collapsed: bool,
    pub(crate) waitlist_email: String,
    pub(crate) location_changed: bool,
}

impl UiState {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Advances toast expiry to the frame time.
    pub(crate) fn tick(&mut self, now: Duration) {
        self.toasts.advance_to(now);
    }

    /// Delay until the next frame must be drawn without user input.
    #[must_use]
    pub(crate) fn next_repaint(&self) -> Option<Duration> {
        self.toasts.next_deadline()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use vibe_toast::ToastOptions;

    use super::UiState;

    #[test]
    fn tick_expires_toasts_and_reports_next_repaint() {
        let mut ui_state = UiState::new();
        assert_eq!(ui_state.next_repaint(), None);

        ui_state
            .toasts
            .push(ToastOptions::new("Saved").duration(Duration::from_millis(100)));
        assert_eq!(ui_state.next_repaint(), Some(Duration::from_millis(100)));

        ui_state.tick(Duration::from_millis(60));
        assert_eq!(ui_state.next_repaint(), Some(Duration::from_millis(40)));

        ui_state.tick(Duration::from_millis(100));
        assert!(ui_state.toasts.is_empty());
        assert_eq!(ui_state.next_repaint(), None);
    }
}
