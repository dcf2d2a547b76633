//! Internationalization Helpers
//!
//! Translate strings with the active language held by the global store.

use super::{LocalizationProvider, QuizGlobalStore};
use gpui::{App, SharedString};

/// Get a translated string in the active language
pub fn i18n(cx: &App, key: &str) -> SharedString {
    cx.global::<QuizGlobalStore>().read(cx).localized_string(key)
}
