use crate::CategoryKey;

/// Errors returned by [`PreferenceEditor`](crate::PreferenceEditor) operations.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PrefsError {
    /// The event id is not part of the category's event catalog.
    #[display("unknown event `{event}` in category `{category}`")]
    UnknownEvent {
        /// Category that was addressed.
        category: CategoryKey,
        /// Event id that was not found.
        event: String,
    },
}

/// Error returned when parsing an identifier that is not in a closed set.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown {kind} id: {value:?}")]
pub struct ParseIdError {
    kind: &'static str,
    value: String,
}

impl ParseIdError {
    #[must_use]
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }

    /// Returns the rejected input.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}
