//! Application State
//!
//! Persisted application settings and the global store that hands out the
//! shared state entities.

use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use crate::i18n::Language;
use crate::states::LanguageManager;
use gpui::{App, AppContext, Entity, Global};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

const CONFIG_FILE_NAME: &str = "quiz-gui.toml";

/// Path of the settings file, created empty when missing
pub fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        std::fs::write(&path, "")?;
    }
    Ok(path)
}

// ==================== Persisted State ====================

/// Persisted application state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAppState {
    language: Option<String>,
}

impl QuizAppState {
    /// Create new default state
    pub fn new() -> Self {
        Self::default()
    }

    /// Load state from a settings file; a missing or empty file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        info!(path = ?path, "Loading config file");
        if !path.exists() {
            return Ok(Self::new());
        }

        let value = std::fs::read_to_string(path)?;
        if value.trim().is_empty() {
            return Ok(Self::new());
        }

        let state: Self = toml::from_str(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
            e
        })?;

        Ok(state)
    }

    /// Write state to a settings file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let value = toml::to_string(self)?;
        std::fs::write(path, value)?;
        Ok(())
    }

    /// Persisted language code, if any
    pub fn language_code(&self) -> Option<&str> {
        self.language.as_deref().filter(|code| !code.is_empty())
    }

    /// Resolve the persisted language, falling back to the system locale
    pub fn language(&self) -> Language {
        match self.language_code() {
            Some(code) => Language::from_code(code).unwrap_or_else(|| {
                warn!(code, "Unknown persisted language, using system default");
                detect_system_language()
            }),
            None => detect_system_language(),
        }
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = Some(language.code().to_string());
    }
}

/// Pick the first supported language from the system locale
pub fn detect_system_language() -> Language {
    let current = locale_config::Locale::current().to_string();
    language_from_system_locale(&current).unwrap_or_default()
}

/// Parse a locale_config locale string such as `en-US,messages=tr-TR`
fn language_from_system_locale(locale: &str) -> Option<Language> {
    locale
        .split(',')
        .map(|tag| tag.rsplit_once('=').map_or(tag, |(_, tag)| tag))
        .find_map(Language::from_locale_tag)
}

// ==================== Global Store ====================

/// Global store accessible via `cx.global::<QuizGlobalStore>()`
#[derive(Clone)]
pub struct QuizGlobalStore {
    language: Entity<LanguageManager>,
}

impl QuizGlobalStore {
    /// Create a new global store
    pub fn new(language: Entity<LanguageManager>) -> Self {
        Self { language }
    }

    /// Load persisted settings and install the store as a global
    pub fn init(cx: &mut App) {
        // In-memory only when there is no usable settings path at all
        let manager = match get_config_path().and_then(LanguageManager::load_or_reset) {
            Ok(manager) => manager,
            Err(e) => {
                error!(error = %e, "Failed to load settings, language changes will not persist");
                LanguageManager::new(detect_system_language())
            }
        };
        info!(language = manager.language().code(), "Active language");

        let language = cx.new(|_| manager);
        cx.set_global(Self::new(language));
    }

    /// Get the language manager entity
    pub fn language(&self) -> Entity<LanguageManager> {
        self.language.clone()
    }

    /// Read the language manager
    pub fn read<'a>(&self, cx: &'a App) -> &'a LanguageManager {
        self.language.read(cx)
    }
}

impl Global for QuizGlobalStore {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_locale_parsing_skips_unsupported_tags() {
        assert_eq!(language_from_system_locale("tr-TR"), Some(Language::Turkish));
        assert_eq!(
            language_from_system_locale("de-DE,messages=tr-TR"),
            Some(Language::Turkish)
        );
        assert_eq!(language_from_system_locale("fr-FR,de-DE"), None);
        assert_eq!(language_from_system_locale(""), None);
    }

    #[test]
    fn missing_file_yields_default_state() {
        let dir = tempfile::tempdir().expect("tempdir");
        let state = QuizAppState::load_from(&dir.path().join("absent.toml")).expect("load");
        assert_eq!(state, QuizAppState::new());
        assert_eq!(state.language_code(), None);
    }

    #[test]
    fn empty_file_yields_default_state() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "  \n").expect("write");
        assert_eq!(QuizAppState::load_from(&path).expect("load"), QuizAppState::new());
    }

    #[test]
    fn language_round_trips_through_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);

        let mut state = QuizAppState::new();
        state.set_language(Language::Turkish);
        state.save_to(&path).expect("save");

        let contents = std::fs::read_to_string(&path).expect("read");
        assert!(contents.contains("language = \"turkish\""));

        let loaded = QuizAppState::load_from(&path).expect("load");
        assert_eq!(loaded.language_code(), Some("turkish"));
        assert_eq!(loaded.language(), Language::Turkish);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "language = [").expect("write");
        assert!(matches!(
            QuizAppState::load_from(&path),
            Err(crate::error::Error::TomlDe { .. })
        ));
    }
}
