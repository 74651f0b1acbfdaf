use std::{mem, time::Duration};

use crate::{Toast, ToastId, ToastOptions};

/// Session-wide queue of active toasts.
///
/// The queue keeps toasts in insertion order and tracks a scheduled expiry for
/// every toast with a non-zero duration. Time is supplied by the host through
/// [`advance_to`](Self::advance_to), measured from an arbitrary origin that only
/// has to be monotonic (e.g. seconds since the UI started).
///
/// An expiry that fires after its toast was dismissed manually does nothing.
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    timers: Vec<ExpiryTimer>,
    now: Duration,
    last_id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ExpiryTimer {
    id: ToastId,
    at: Duration,
}

impl ToastQueue {
    /// Creates an empty queue whose clock starts at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current queue time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Returns the active toasts in insertion order.
    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Returns the number of active toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Returns `true` if no toast is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Appends a toast and schedules its expiry relative to the current queue time.
    pub fn push(&mut self, options: ToastOptions) -> ToastId {
        self.last_id += 1;
        let id = ToastId::new(self.last_id);
        let toast = Toast::from_options(id, options);

        log::debug!(
            "show toast: id={id}, variant={}, title={:?}",
            toast.variant,
            toast.title
        );

        if !toast.is_persistent() {
            self.timers.push(ExpiryTimer {
                id,
                at: self.now + toast.duration,
            });
        }
        self.toasts.push(toast);
        id
    }

    /// Removes the toast with the given id.
    ///
    /// Returns `false` if the toast is not active anymore.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let removed = self.remove(id);
        if removed {
            log::debug!("dismiss toast: id={id}");
        }
        removed
    }

    /// Moves the queue clock to `now` and removes every toast whose expiry has
    /// been reached.
    ///
    /// The clock never goes backwards; an earlier `now` only fires timers that
    /// are already due. Returns the number of toasts removed.
    pub fn advance_to(&mut self, now: Duration) -> usize {
        self.now = self.now.max(now);

        let (due, pending): (Vec<_>, Vec<_>) = mem::take(&mut self.timers)
            .into_iter()
            .partition(|timer| timer.at <= self.now);
        self.timers = pending;

        let mut removed = 0;
        for timer in due {
            if self.remove(timer.id) {
                log::debug!("expire toast: id={}", timer.id);
                removed += 1;
            }
        }
        removed
    }

    /// Returns the time left until the next scheduled expiry, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers
            .iter()
            .map(|timer| timer.at.saturating_sub(self.now))
            .min()
    }

    fn remove(&mut self, id: ToastId) -> bool {
        if let Some(index) = self.toasts.iter().position(|toast| toast.id == id) {
            self.toasts.remove(index);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::ToastQueue;
    use crate::{ToastOptions, ToastVariant};

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn push_appends_in_insertion_order_with_fresh_ids() {
        let mut queue = ToastQueue::new();
        let first = queue.push(ToastOptions::new("first"));
        let second = queue.push(ToastOptions::new("second"));
        let duplicate = queue.push(ToastOptions::new("first"));

        assert!(first < second && second < duplicate);
        let titles: Vec<_> = queue.toasts().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["first", "second", "first"]);
    }

    #[test]
    fn toast_expires_after_its_duration() {
        let mut queue = ToastQueue::new();
        queue.push(ToastOptions::new("X").duration(ms(100)));
        assert_eq!(queue.len(), 1);

        assert_eq!(queue.advance_to(ms(99)), 0);
        assert_eq!(queue.len(), 1);

        assert_eq!(queue.advance_to(ms(116)), 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn expiry_is_measured_from_enqueue_time() {
        let mut queue = ToastQueue::new();
        queue.advance_to(ms(1_000));
        queue.push(ToastOptions::new("late").duration(ms(100)));

        queue.advance_to(ms(1_050));
        assert_eq!(queue.len(), 1);
        queue.advance_to(ms(1_100));
        assert!(queue.is_empty());
    }

    #[test]
    fn manual_dismiss_before_expiry_makes_expiry_a_noop() {
        let mut queue = ToastQueue::new();
        let id = queue.push(ToastOptions::new("X").duration(ms(100)));
        let other = queue.push(ToastOptions::new("Y").duration(ms(500)));

        assert!(queue.dismiss(id));
        assert_eq!(queue.len(), 1);

        assert_eq!(queue.advance_to(ms(200)), 0);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.toasts()[0].id, other);

        assert!(!queue.dismiss(id));
    }

    #[test]
    fn dismiss_after_expiry_is_a_noop() {
        let mut queue = ToastQueue::new();
        let id = queue.push(ToastOptions::new("X").duration(ms(10)));
        queue.advance_to(ms(10));

        assert!(!queue.dismiss(id));
        assert!(queue.is_empty());
    }

    #[test]
    fn zero_duration_persists_until_dismissed() {
        let mut queue = ToastQueue::new();
        let id = queue.push(
            ToastOptions::new("sticky")
                .variant(ToastVariant::Error)
                .persistent(),
        );

        queue.advance_to(Duration::from_secs(3_600));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.next_deadline(), None);

        assert!(queue.dismiss(id));
        assert!(queue.is_empty());
    }

    #[test]
    fn default_duration_is_four_seconds() {
        let mut queue = ToastQueue::new();
        queue.push(ToastOptions::new("default"));

        assert_eq!(queue.next_deadline(), Some(ms(4_000)));
        queue.advance_to(ms(3_999));
        assert_eq!(queue.len(), 1);
        queue.advance_to(ms(4_000));
        assert!(queue.is_empty());
    }

    #[test]
    fn clock_never_goes_backwards() {
        let mut queue = ToastQueue::new();
        queue.advance_to(ms(500));
        queue.advance_to(ms(100));
        assert_eq!(queue.now(), ms(500));

        queue.push(ToastOptions::new("X").duration(ms(100)));
        assert_eq!(queue.next_deadline(), Some(ms(100)));
    }

    #[test]
    fn next_deadline_reports_earliest_pending_expiry() {
        let mut queue = ToastQueue::new();
        assert_eq!(queue.next_deadline(), None);

        queue.push(ToastOptions::new("slow").duration(ms(300)));
        queue.push(ToastOptions::new("fast").duration(ms(100)));
        queue.advance_to(ms(40));

        assert_eq!(queue.next_deadline(), Some(ms(60)));
    }
}
