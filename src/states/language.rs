//! Language State
//!
//! The process-wide active language and the localization lookups the
//! screens draw their strings from.

use crate::error::{Error, Result};
use crate::i18n::{Language, translate};
use crate::states::QuizAppState;
use gpui::SharedString;
use std::path::PathBuf;
use tracing::{info, warn};

/// Localized strings plus the active language code
pub trait LocalizationProvider {
    /// Look up a string in the active language
    fn localized_string(&self, key: &str) -> SharedString;

    /// Code of the active language, always one of the option codes
    fn current_language_code(&self) -> &'static str;

    /// Switch the active language by code
    fn set_current_language_code(&mut self, code: &str) -> Result<()>;
}

/// Owns the active language and persists changes to the settings file
#[derive(Debug, Clone)]
pub struct LanguageManager {
    language: Language,
    state: QuizAppState,
    /// Settings file; `None` keeps changes in memory only
    path: Option<PathBuf>,
}

impl LanguageManager {
    /// In-memory manager
    pub fn new(language: Language) -> Self {
        let mut state = QuizAppState::new();
        state.set_language(language);
        Self {
            language,
            state,
            path: None,
        }
    }

    /// Load the active language from a settings file
    pub fn load(path: PathBuf) -> Result<Self> {
        let state = QuizAppState::load_from(&path)?;
        Ok(Self::with_state(path, state))
    }

    /// Manager that persists to `path`, starting from `state`
    pub fn with_state(path: PathBuf, state: QuizAppState) -> Self {
        Self {
            language: state.language(),
            state,
            path: Some(path),
        }
    }

    /// Like [`LanguageManager::load`], but an unparsable settings file is
    /// replaced with defaults so the next selection overwrites it
    pub fn load_or_reset(path: PathBuf) -> Result<Self> {
        match Self::load(path.clone()) {
            Err(Error::TomlDe { source }) => {
                warn!(
                    error = %source,
                    path = ?path,
                    "Settings file unreadable, starting from defaults"
                );
                Ok(Self::with_state(path, QuizAppState::new()))
            }
            result => result,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Persist first, then commit, so a failed write leaves the language unchanged
    pub fn set_language(&mut self, language: Language) -> Result<()> {
        let mut state = self.state.clone();
        state.set_language(language);

        if let Some(path) = &self.path {
            state.save_to(path)?;
        }

        info!(from = self.language.code(), to = language.code(), "Language changed");
        self.state = state;
        self.language = language;
        Ok(())
    }
}

impl LocalizationProvider for LanguageManager {
    fn localized_string(&self, key: &str) -> SharedString {
        translate(self.language, key)
    }

    fn current_language_code(&self) -> &'static str {
        self.language.code()
    }

    fn set_current_language_code(&mut self, code: &str) -> Result<()> {
        let language = Language::from_code(code).ok_or_else(|| Error::UnknownLanguage {
            code: code.to_string(),
        })?;
        self.set_language(language)
    }
}
