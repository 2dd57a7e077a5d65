// SPDX-License-Identifier: MPL-2.0
//! Strings that are either plain or translated per language.

use super::language::Language;

/// Per-language variants of a string. Missing entries resolve through the
/// fallback language, then through the first present variant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocalizedText {
    pub fr: Option<String>,
    pub ar: Option<String>,
    pub wo: Option<String>,
    pub en: Option<String>,
}

impl LocalizedText {
    /// Builds a fully populated text.
    pub fn new(
        fr: impl Into<String>,
        ar: impl Into<String>,
        wo: impl Into<String>,
        en: impl Into<String>,
    ) -> Self {
        Self {
            fr: Some(fr.into()),
            ar: Some(ar.into()),
            wo: Some(wo.into()),
            en: Some(en.into()),
        }
    }

    /// The variant for exactly this language, if present and non-empty.
    #[must_use]
    pub fn exact(&self, language: Language) -> Option<&str> {
        let value = match language {
            Language::French => &self.fr,
            Language::Arabic => &self.ar,
            Language::Wolof => &self.wo,
            Language::English => &self.en,
        };
        value.as_deref().filter(|s| !s.is_empty())
    }

    /// Resolves the best variant for `language`.
    #[must_use]
    pub fn get(&self, language: Language) -> &str {
        self.exact(language)
            .or_else(|| self.exact(Language::FALLBACK))
            .or_else(|| Language::ALL.into_iter().find_map(|lang| self.exact(lang)))
            .unwrap_or_default()
    }
}

/// A display string coming from the backend or the static catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Text {
    Plain(String),
    Localized(LocalizedText),
}

impl Text {
    #[must_use]
    pub fn get(&self, language: Language) -> &str {
        match self {
            Text::Plain(value) => value,
            Text::Localized(localized) => localized.get(language),
        }
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Text::Plain(value.to_string())
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Text::Plain(value)
    }
}

impl From<LocalizedText> for Text {
    fn from(value: LocalizedText) -> Self {
        Text::Localized(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_ignores_language() {
        let text = Text::from("Mihrab");
        for lang in Language::ALL {
            assert_eq!(text.get(lang), "Mihrab");
        }
    }

    #[test]
    fn missing_variant_uses_french() {
        let text = LocalizedText {
            fr: Some("Minaret".into()),
            en: Some("Minaret tower".into()),
            ..LocalizedText::default()
        };
        assert_eq!(text.get(Language::Wolof), "Minaret");
        assert_eq!(text.get(Language::English), "Minaret tower");
    }

    #[test]
    fn without_french_uses_first_present_variant() {
        let text = LocalizedText {
            wo: Some("Biiblioteek".into()),
            ..LocalizedText::default()
        };
        assert_eq!(text.get(Language::English), "Biiblioteek");
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let text = LocalizedText {
            fr: Some("Cour".into()),
            ar: Some(String::new()),
            ..LocalizedText::default()
        };
        assert_eq!(text.get(Language::Arabic), "Cour");
        assert_eq!(LocalizedText::default().get(Language::Arabic), "");
    }
}
