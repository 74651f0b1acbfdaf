//! Toast notifications for VIBE.
//!
//! A toast is a short-lived message shown on top of the application, usually to
//! confirm that an action went through. This crate provides:
//!
//! - [`ToastQueue`]: the provider. One instance lives for the whole application
//!   session and keeps the active toasts in insertion order, removing each one when
//!   its duration has elapsed.
//! - [`Notifier`]: the capability handed to code that wants to raise a toast. It is
//!   implemented by [`ToastQueue`], by [`NoopNotifier`], and by `Option<N>` so that
//!   callers without a provider degrade to a no-op instead of failing.
//!
//! The queue has no clock of its own. The host advances it explicitly with
//! [`ToastQueue::advance_to`], which keeps expiry deterministic under test and works
//! the same on native and web targets.
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//!
//! use vibe_toast::{Notifier, ToastOptions, ToastQueue, ToastVariant};
//!
//! let mut queue = ToastQueue::new();
//! queue.show_toast(
//!     ToastOptions::new("Saved")
//!         .variant(ToastVariant::Success)
//!         .duration(Duration::from_millis(100)),
//! );
//! assert_eq!(queue.len(), 1);
//!
//! queue.advance_to(Duration::from_millis(100));
//! assert!(queue.is_empty());
//! ```

pub use self::{notifier::*, queue::*, toast::*};

mod notifier;
mod queue;
mod toast;
