use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseIdError;

/// Timing policy for sending a category's notifications.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryOption {
    /// Sent as soon as the event happens.
    #[default]
    #[display("instant")]
    Instant,
    /// Held for 15 minutes.
    #[display("delayed")]
    Delayed,
    /// Batched until 17:00.
    #[display("end_of_day")]
    EndOfDay,
    /// Batched into a digest on Friday 17:00.
    #[display("weekly_digest")]
    WeeklyDigest,
}

impl DeliveryOption {
    /// All delivery options in display order.
    pub const ALL: [Self; 4] = [
        Self::Instant,
        Self::Delayed,
        Self::EndOfDay,
        Self::WeeklyDigest,
    ];

    /// Returns the human readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Instant => "Instant",
            Self::Delayed => "Delayed · 15 minutes",
            Self::EndOfDay => "End of day · 17:00",
            Self::WeeklyDigest => "Weekly digest · Friday 17:00",
        }
    }
}

impl FromStr for DeliveryOption {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|option| option.to_string() == s)
            .ok_or_else(|| ParseIdError::new("delivery option", s))
    }
}

#[cfg(test)]
mod tests {
    use super::DeliveryOption;

    #[test]
    fn ids_parse_back() {
        for option in DeliveryOption::ALL {
            assert_eq!(option.to_string().parse::<DeliveryOption>(), Ok(option));
        }
        assert_eq!(
            "end_of_day".parse::<DeliveryOption>(),
            Ok(DeliveryOption::EndOfDay)
        );

        let err = "hourly".parse::<DeliveryOption>().unwrap_err();
        assert_eq!(err.value(), "hourly");
    }
}
