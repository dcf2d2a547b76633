//! Quiz GUI Client Library
//!
//! Welcome and language settings screens of a quiz application, built on
//! GPUI. All logic lives here; `main.rs` only installs logging and runs
//! the app.

// Initialize translations from `locales/`
rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod assets;
pub mod constants;
pub mod error;
pub mod eventing;
pub mod features;
pub mod helpers;
pub mod i18n;
pub mod logging;
pub mod states;
pub mod theme;
