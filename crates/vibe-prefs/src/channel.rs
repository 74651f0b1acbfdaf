use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ParseIdError;

/// A delivery medium for a notification.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "camelCase")]
pub enum Channel {
    /// E-mail.
    #[display("email")]
    Email,
    /// In-app notification center.
    #[display("inApp")]
    InApp,
    /// Text message.
    #[display("sms")]
    Sms,
}

impl Channel {
    /// All channels in display order.
    pub const ALL: [Self; 3] = [Self::Email, Self::InApp, Self::Sms];

    /// Returns the human readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::InApp => "In-app",
            Self::Sms => "Text (SMS)",
        }
    }

    #[must_use]
    const fn flag(self) -> ChannelSet {
        match self {
            Self::Email => ChannelSet::EMAIL,
            Self::InApp => ChannelSet::IN_APP,
            Self::Sms => ChannelSet::SMS,
        }
    }
}

impl FromStr for Channel {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|channel| channel.to_string() == s)
            .ok_or_else(|| ParseIdError::new("channel", s))
    }
}

bitflags::bitflags! {
    /// Per-channel enablement of a single event.
    ///
    /// Each [`Channel`] maps to exactly one bit, so toggling one channel never
    /// touches another. Serializes as `{"email": bool, "inApp": bool, "sms": bool}`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ChannelSet: u8 {
        /// E-mail enabled.
        const EMAIL = 1 << 0;
        /// In-app enabled.
        const IN_APP = 1 << 1;
        /// Text message enabled.
        const SMS = 1 << 2;
    }
}

impl ChannelSet {
    /// Returns `true` if the given channel is enabled.
    #[must_use]
    pub const fn has(self, channel: Channel) -> bool {
        self.contains(channel.flag())
    }

    /// Enables or disables a single channel.
    pub fn set_channel(&mut self, channel: Channel, value: bool) {
        self.set(channel.flag(), value);
    }
}

// Wire shape of `ChannelSet`: one boolean per channel.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelFlags {
    email: bool,
    in_app: bool,
    sms: bool,
}

impl Serialize for ChannelSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        ChannelFlags {
            email: self.has(Channel::Email),
            in_app: self.has(Channel::InApp),
            sms: self.has(Channel::Sms),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ChannelSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ChannelFlags { email, in_app, sms } = ChannelFlags::deserialize(deserializer)?;
        let mut set = Self::empty();
        set.set_channel(Channel::Email, email);
        set.set_channel(Channel::InApp, in_app);
        set.set_channel(Channel::Sms, sms);
        Ok(set)
    }
}

impl From<Channel> for ChannelSet {
    fn from(channel: Channel) -> Self {
        channel.flag()
    }
}
