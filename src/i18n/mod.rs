//! i18n - Internationalization Module
//!
//! Supported languages, the fixed language option list, and translation
//! lookups backed by the rust-i18n catalogs in `locales/`.

use gpui::SharedString;
use rust_i18n::t;

/// Supported display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// English
    #[default]
    English,
    /// Turkish
    Turkish,
}

impl Language {
    /// Persisted language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Turkish => "turkish",
        }
    }

    /// rust-i18n locale tag
    pub fn locale(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Turkish => "tr",
        }
    }

    /// Parse a persisted language code
    pub fn from_code(code: &str) -> Option<Self> {
        LANGUAGE_OPTIONS
            .iter()
            .map(|option| option.language)
            .find(|language| language.code() == code)
    }

    /// Match a system locale tag such as `tr-TR` or `en_US.UTF-8`
    pub fn from_locale_tag(tag: &str) -> Option<Self> {
        let primary = tag
            .split(['-', '_', '.'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match primary.as_str() {
            "en" => Some(Language::English),
            "tr" => Some(Language::Turkish),
            _ => None,
        }
    }
}

/// One selectable row of the language list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageOption {
    pub language: Language,
    /// Key used to look up the row label
    pub display_key: &'static str,
}

impl LanguageOption {
    pub fn code(&self) -> &'static str {
        self.language.code()
    }
}

/// The languages offered in settings, in display order
pub const LANGUAGE_OPTIONS: [LanguageOption; 2] = [
    LanguageOption {
        language: Language::English,
        display_key: "english",
    },
    LanguageOption {
        language: Language::Turkish,
        display_key: "turkish",
    },
];

/// Translate a key for the given language
pub fn translate(language: Language, key: &str) -> SharedString {
    t!(key, locale = language.locale()).to_string().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every key the screens look up
    const KEYS: &[&str] = &[
        "app.title",
        "language",
        "english",
        "turkish",
        "welcome.title",
        "welcome.subtitle",
        "welcome.get_started",
        "login.title",
        "login.subtitle",
        "login.language",
        "login.back",
    ];

    #[test]
    fn option_codes_are_unique() {
        let mut codes: Vec<_> = LANGUAGE_OPTIONS.iter().map(|o| o.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), LANGUAGE_OPTIONS.len());
    }

    #[test]
    fn from_code_round_trips_every_option() {
        for option in LANGUAGE_OPTIONS {
            assert_eq!(Language::from_code(option.code()), Some(option.language));
        }
        assert_eq!(Language::from_code("german"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn from_locale_tag_uses_primary_subtag() {
        assert_eq!(Language::from_locale_tag("tr-TR"), Some(Language::Turkish));
        assert_eq!(Language::from_locale_tag("en_US.UTF-8"), Some(Language::English));
        assert_eq!(Language::from_locale_tag("TR"), Some(Language::Turkish));
        assert_eq!(Language::from_locale_tag("de-DE"), None);
        assert_eq!(Language::from_locale_tag(""), None);
    }

    #[test]
    fn every_key_resolves_in_every_locale() {
        for option in LANGUAGE_OPTIONS {
            for key in KEYS {
                let value = translate(option.language, key);
                assert!(
                    !value.is_empty() && value.as_ref() != *key && !value.contains(key),
                    "missing translation for {key} in {}",
                    option.language.locale()
                );
            }
        }
    }

    #[test]
    fn language_names_are_native() {
        for language in [Language::English, Language::Turkish] {
            assert_eq!(translate(language, "english").as_ref(), "English");
            assert_eq!(translate(language, "turkish").as_ref(), "Türkçe");
        }
    }

    #[test]
    fn settings_title_follows_language() {
        assert_eq!(translate(Language::English, "language").as_ref(), "Language");
        assert_eq!(translate(Language::Turkish, "language").as_ref(), "Dil");
    }
}
