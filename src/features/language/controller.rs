//! Language Controller
//!
//! Row model and selection handling for the language list.

use gpui::SharedString;
use tracing::debug;

use crate::error::{Error, Result};
use crate::eventing::app_event::AppEvent;
use crate::i18n::{LANGUAGE_OPTIONS, LanguageOption};
use crate::states::LocalizationProvider;

/// A rendered language row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageRow {
    pub index: usize,
    pub code: &'static str,
    pub label: SharedString,
    /// Whether the row carries the checkmark
    pub checked: bool,
}

/// Language list controller
#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageController;

impl LanguageController {
    /// Create a new controller
    pub fn new() -> Self {
        Self
    }

    /// Screen title
    pub fn title(&self, provider: &impl LocalizationProvider) -> SharedString {
        provider.localized_string("language")
    }

    /// Number of supported languages
    pub fn row_count(&self) -> usize {
        LANGUAGE_OPTIONS.len()
    }

    fn option(&self, index: usize) -> Result<LanguageOption> {
        LANGUAGE_OPTIONS
            .get(index)
            .copied()
            .ok_or(Error::RowOutOfRange {
                index,
                count: self.row_count(),
            })
    }

    /// Label and checkmark state for one row
    pub fn render_row(
        &self,
        provider: &impl LocalizationProvider,
        index: usize,
    ) -> Result<LanguageRow> {
        let option = self.option(index)?;
        Ok(LanguageRow {
            index,
            code: option.code(),
            label: provider.localized_string(option.display_key),
            checked: option.code() == provider.current_language_code(),
        })
    }

    /// All rows in display order
    pub fn rows(&self, provider: &impl LocalizationProvider) -> Vec<LanguageRow> {
        (0..self.row_count())
            .filter_map(|index| self.render_row(provider, index).ok())
            .collect()
    }

    /// Make the row's language active and return the event that rebuilds the app
    ///
    /// Selecting the already active row still writes the code and still
    /// asks for a rebuild.
    pub fn select_row(
        &self,
        provider: &mut impl LocalizationProvider,
        index: usize,
    ) -> Result<AppEvent> {
        let option = self.option(index)?;
        debug!(index, code = option.code(), "Language row selected");
        provider.set_current_language_code(option.code())?;
        Ok(AppEvent::LocaleChanged {
            language: option.language,
        })
    }
}
