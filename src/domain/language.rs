// SPDX-License-Identifier: MPL-2.0
//! Languages offered by the tour.

use std::fmt;
use std::str::FromStr;

/// A site language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// French, the site default and translation fallback.
    #[default]
    French,
    Arabic,
    Wolof,
    English,
}

impl Language {
    /// All languages in switcher order.
    pub const ALL: [Language; 4] = [
        Language::French,
        Language::Arabic,
        Language::Wolof,
        Language::English,
    ];

    /// Language used when a string is missing in the requested one.
    pub const FALLBACK: Language = Language::French;

    /// Short code used in config files, CLI flags and translation file names.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::French => "fr",
            Language::Arabic => "ar",
            Language::Wolof => "wo",
            Language::English => "en",
        }
    }

    /// Native name shown in the language switcher.
    #[must_use]
    pub fn native_name(self) -> &'static str {
        match self {
            Language::French => "Français",
            Language::Arabic => "العربية",
            Language::Wolof => "Wolof",
            Language::English => "English",
        }
    }

    /// Whether text in this language is laid out right-to-left.
    #[must_use]
    pub fn is_rtl(self) -> bool {
        matches!(self, Language::Arabic)
    }

    /// Parses a language code, ignoring region subtags (`fr-SN` → French).
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        Self::ALL.into_iter().find(|lang| lang.code() == primary)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a language code is not supported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl fmt::Display for UnknownLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported language: {}", self.0)
    }
}

impl std::error::Error for UnknownLanguage {}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}
