// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use crate::domain::Language;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<Language, FluentBundle<FluentResource>>,
    current: Language,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("current", &self.current)
            .field("languages", &self.available_languages())
            .finish()
    }
}

impl I18n {
    /// Loads the embedded translations, then any `.ftl` files found in
    /// `i18n_dir` (which override embedded messages with the same id), and
    /// resolves the starting language.
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<String>, config: &Config) -> Self {
        let mut sources: Vec<(Language, String)> = Asset::iter()
            .filter_map(|file| {
                let language = language_from_filename(file.as_ref())?;
                let content = Asset::get(file.as_ref())?;
                Some((
                    language,
                    String::from_utf8_lossy(content.data.as_ref()).into_owned(),
                ))
            })
            .collect();

        if let Some(dir) = i18n_dir {
            sources.extend(read_translation_dir(Path::new(&dir)));
        }

        let mut i18n = Self::from_sources(sources);
        let available = i18n.available_languages();
        i18n.current = resolve_language(cli_lang, config, &available).unwrap_or_default();
        i18n
    }

    /// Builds bundles from raw FTL sources. Later sources for the same
    /// language override earlier messages.
    pub fn from_sources(sources: impl IntoIterator<Item = (Language, String)>) -> Self {
        let mut bundles: HashMap<Language, FluentBundle<FluentResource>> = HashMap::new();

        for (language, source) in sources {
            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((resource, errors)) => {
                    eprintln!(
                        "[panotour] {} syntax error(s) in {} translations, keeping valid entries",
                        errors.len(),
                        language
                    );
                    resource
                }
            };

            let bundle = bundles.entry(language).or_insert_with(|| {
                let langid: LanguageIdentifier =
                    language.code().parse().unwrap_or_default();
                let mut bundle = FluentBundle::new(vec![langid]);
                bundle.set_use_isolating(false);
                bundle
            });
            bundle.add_resource_overriding(resource);
        }

        Self {
            bundles,
            current: Language::default(),
        }
    }

    #[must_use]
    pub fn current_language(&self) -> Language {
        self.current
    }

    /// Switches language if translations for it are loaded.
    pub fn set_language(&mut self, language: Language) {
        if self.bundles.contains_key(&language) {
            self.current = language;
        }
    }

    /// Languages with a loaded bundle, in switcher order.
    #[must_use]
    pub fn available_languages(&self) -> Vec<Language> {
        Language::ALL
            .into_iter()
            .filter(|lang| self.bundles.contains_key(lang))
            .collect()
    }

    #[must_use]
    pub fn is_rtl(&self) -> bool {
        self.current.is_rtl()
    }

    pub fn tr(&self, key: &str) -> String {
        self.tr_in(self.current, key)
    }

    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        self.tr_in_with_args(self.current, key, args)
    }

    /// Looks `key` up for `language`, falling back to French and finally to
    /// the key itself.
    pub fn tr_in(&self, language: Language, key: &str) -> String {
        self.tr_in_with_args(language, key, &[])
    }

    pub fn tr_in_with_args(&self, language: Language, key: &str, args: &[(&str, &str)]) -> String {
        let fluent_args = (!args.is_empty()).then(|| {
            let mut fluent_args = FluentArgs::new();
            for (name, value) in args {
                // Numeric arguments drive plural selection
                match value.parse::<f64>() {
                    Ok(number) => fluent_args.set(*name, FluentValue::from(number)),
                    Err(_) => fluent_args.set(*name, value.to_string()),
                }
            }
            fluent_args
        });

        [language, Language::FALLBACK]
            .into_iter()
            .find_map(|lang| self.format(lang, key, fluent_args.as_ref()))
            .unwrap_or_else(|| key.to_string())
    }

    fn format(&self, language: Language, key: &str, args: Option<&FluentArgs>) -> Option<String> {
        let bundle = self.bundles.get(&language)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, args, &mut errors);
        errors.is_empty().then(|| value.into_owned())
    }
}

fn language_from_filename(filename: &str) -> Option<Language> {
    filename.strip_suffix(".ftl").and_then(Language::from_code)
}

fn read_translation_dir(dir: &Path) -> Vec<(Language, String)> {
    let Ok(entries) = fs::read_dir(dir) else {
        eprintln!("[panotour] cannot read translation directory {}", dir.display());
        return Vec::new();
    };

    entries
        .flatten()
        .filter_map(|entry| {
            let path = entry.path();
            let language = language_from_filename(path.file_name()?.to_str()?)?;
            let content = fs::read_to_string(&path).ok()?;
            Some((language, content))
        })
        .collect()
}

fn resolve_language(
    cli_lang: Option<String>,
    config: &Config,
    available: &[Language],
) -> Option<Language> {
    // 1. CLI argument, 2. config file, 3. OS locale
    let candidates = [
        cli_lang,
        config.general.language.clone(),
        sys_locale::get_locale(),
    ];

    candidates
        .into_iter()
        .flatten()
        .filter_map(|code| Language::from_code(&code))
        .find(|lang| available.contains(lang))
}
