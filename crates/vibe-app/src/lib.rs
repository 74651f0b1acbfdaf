//! Shared library module for the VIBE app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub use self::app::VibeApp;

pub mod action;
pub mod app;
pub mod deploy;
pub mod state;
pub mod ui;
pub mod version;
pub mod view_model_builder;
