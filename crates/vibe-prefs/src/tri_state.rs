/// State of an aggregate checkbox that summarises several checkboxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum TriState {
    /// None of the summarised values is set.
    Unchecked,
    /// Some but not all values are set.
    Mixed,
    /// All values are set.
    Checked,
}

impl TriState {
    /// Combines an "all set" and a "some set" flag.
    ///
    /// `all` wins over `some`, so an aggregate that requires extra conditions
    /// for "all" (such as the category being enabled) shows as mixed when only
    /// those conditions fail.
    #[must_use]
    pub const fn from_flags(all: bool, some: bool) -> Self {
        match (all, some) {
            (true, _) => Self::Checked,
            (false, true) => Self::Mixed,
            (false, false) => Self::Unchecked,
        }
    }

    /// Returns the value a plain checkbox should display.
    #[must_use]
    pub const fn is_on(self) -> bool {
        matches!(self, Self::Checked)
    }
}
