use std::time::Duration;

/// Visual intent of a toast.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant,
)]
pub enum ToastVariant {
    /// Neutral message.
    #[default]
    #[display("default")]
    Default,
    /// Confirms that an operation succeeded.
    #[display("success")]
    Success,
    /// Informational message.
    #[display("info")]
    Info,
    /// Reports a failure.
    #[display("error")]
    Error,
}

/// Identifier of a toast within a [`ToastQueue`](crate::ToastQueue).
///
/// Identifiers are handed out in increasing order and are never reused by the
/// queue that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub struct ToastId(u64);

impl ToastId {
    #[must_use]
    pub(crate) const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Request for a new toast.
///
/// Only the title is required. Unset fields fall back to
/// [`ToastVariant::Default`] and [`ToastOptions::DEFAULT_DURATION`].
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use vibe_toast::{ToastOptions, ToastVariant};
///
/// let options = ToastOptions::new("Defaults restored")
///     .description("Notification settings have been reset.")
///     .variant(ToastVariant::Info);
/// assert_eq!(options.resolved_duration(), Duration::from_millis(4000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastOptions {
    /// Headline text.
    pub title: String,
    /// Optional secondary text shown under the title.
    pub description: Option<String>,
    /// Visual intent; `None` means [`ToastVariant::Default`].
    pub variant: Option<ToastVariant>,
    /// Time until automatic dismissal; `None` means
    /// [`ToastOptions::DEFAULT_DURATION`], zero means the toast stays until dismissed.
    pub duration: Option<Duration>,
}

impl ToastOptions {
    /// Duration used when none is given.
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(4000);

    /// Creates options with the given title and every other field unset.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            variant: None,
            duration: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the variant.
    #[must_use]
    pub fn variant(mut self, variant: ToastVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Sets the auto-dismiss duration.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Keeps the toast until it is dismissed manually.
    #[must_use]
    pub fn persistent(self) -> Self {
        self.duration(Duration::ZERO)
    }

    /// Returns the variant with the default applied.
    #[must_use]
    pub fn resolved_variant(&self) -> ToastVariant {
        self.variant.unwrap_or_default()
    }

    /// Returns the duration with the default applied.
    #[must_use]
    pub fn resolved_duration(&self) -> Duration {
        self.duration.unwrap_or(Self::DEFAULT_DURATION)
    }
}

/// An active toast record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Identifier used for dismissal.
    pub id: ToastId,
    /// Headline text.
    pub title: String,
    /// Optional secondary text.
    pub description: Option<String>,
    /// Visual intent.
    pub variant: ToastVariant,
    /// Auto-dismiss duration, zero for persistent toasts.
    pub duration: Duration,
}

impl Toast {
    #[must_use]
    pub(crate) fn from_options(id: ToastId, options: ToastOptions) -> Self {
        let variant = options.resolved_variant();
        let duration = options.resolved_duration();
        let ToastOptions {
            title,
            description,
            variant: _,
            duration: _,
        } = options;
        Self {
            id,
            title,
            description,
            variant,
            duration,
        }
    }

    /// Returns `true` if the toast is only removed by a manual dismissal.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.duration.is_zero()
    }
}
