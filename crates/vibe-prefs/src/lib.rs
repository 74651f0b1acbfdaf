//! Notification preferences for VIBE.
//!
//! This crate holds the data model of the notification settings screen and the
//! editor that drives it, independent of any UI toolkit.
//!
//! # Overview
//!
//! - **Model**: [`NotificationState`] holds one [`NotificationCategory`] per
//!   [`CategoryKey`]. A category has an enabled flag, a [`DeliveryOption`], and
//!   an [`EventChannelConfig`] for each event in its fixed catalog
//!   ([`EventDefinition`]). Channels are stored as a [`ChannelSet`].
//! - **Editor**: [`PreferenceEditor`] keeps the defaults, the last saved
//!   values and the working values apart, applies edits to the working copy,
//!   answers derived questions (dirty, at defaults, aggregate [`TriState`]s),
//!   and commits or resets a category, confirming through a
//!   [`Notifier`](vibe_toast::Notifier).
//!
//! # Examples
//!
//! ```
//! use vibe_prefs::{CategoryKey, Channel, PreferenceEditor, TriState};
//! use vibe_toast::NoopNotifier;
//!
//! let mut editor = PreferenceEditor::new();
//! editor
//!     .toggle_event_channel(CategoryKey::Maintenance, "incident_opened", Channel::Sms, false)
//!     .unwrap();
//! assert!(editor.is_dirty(CategoryKey::Maintenance));
//! assert_eq!(
//!     editor.channel_tri_state(CategoryKey::Maintenance, Channel::Sms),
//!     TriState::Mixed
//! );
//!
//! editor.reset(CategoryKey::Maintenance, &mut NoopNotifier);
//! assert!(editor.is_at_defaults(CategoryKey::Maintenance));
//! ```

pub use self::{
    category::*, channel::*, delivery::*, editor::*, error::*, state::*, tri_state::*,
};

mod catalog;
mod category;
mod channel;
mod delivery;
mod editor;
mod error;
mod state;
mod tri_state;
