//! Display languages

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when parsing a language code
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LanguageError {
    #[error("Unsupported language code: {0:?} (expected \"cn\" or \"en\")")]
    Unsupported(String),
}

/// The two display languages of the portal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Chinese, the canonical language and fallback for missing translations
    #[default]
    Cn,
    /// English
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Cn, Language::En];

    /// The code used as key in localized content maps
    pub fn code(self) -> &'static str {
        match self {
            Language::Cn => "cn",
            Language::En => "en",
        }
    }

    /// The language a toggle switches to
    pub fn other(self) -> Language {
        match self {
            Language::Cn => Language::En,
            Language::En => Language::Cn,
        }
    }

    /// Value for the `lang` attribute of a page in this language
    pub fn html_lang(self) -> &'static str {
        match self {
            Language::Cn => "zh",
            Language::En => "en",
        }
    }

    /// Label of the toggle control; the non-active language is listed first
    pub fn toggle_label(self) -> &'static str {
        match self {
            Language::Cn => "EN / 中文",
            Language::En => "中文 / EN",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cn" => Ok(Language::Cn),
            "en" => Ok(Language::En),
            _ => Err(LanguageError::Unsupported(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language() {
        assert_eq!("cn".parse::<Language>(), Ok(Language::Cn));
        assert_eq!("EN".parse::<Language>(), Ok(Language::En));
        assert_eq!(
            "fr".parse::<Language>(),
            Err(LanguageError::Unsupported("fr".to_string()))
        );
    }

    #[test]
    fn test_toggle_is_an_involution() {
        for lang in Language::ALL {
            assert_eq!(lang.other().other(), lang);
            assert_ne!(lang.other(), lang);
        }
        assert_eq!(Language::default(), Language::Cn);
    }

    #[test]
    fn test_toggle_label_offers_other_language_first() {
        assert_eq!(Language::Cn.toggle_label(), "EN / 中文");
        assert_eq!(Language::En.toggle_label(), "中文 / EN");
    }
}
