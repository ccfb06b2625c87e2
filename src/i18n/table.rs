// SPDX-License-Identifier: MPL-2.0
//! The static translation table.

use super::keys::{Dictionary, Key};
use super::locale::Locale;
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use std::collections::HashMap;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Display strings for every supported locale.
///
/// Built once at startup and never modified. Construction guarantees that
/// the default locale's dictionary has a string for every [`Key`].
#[derive(Debug, Clone)]
pub struct TranslationTable {
    dictionaries: HashMap<Locale, Dictionary>,
}

impl TranslationTable {
    /// Builds the table from the translation files compiled into the binary.
    pub fn embedded() -> Result<Self> {
        let mut sources = Vec::new();
        for locale in Locale::ALL {
            let filename = format!("{}.toml", locale.code());
            if let Some(file) = Asset::get(&filename) {
                let text = String::from_utf8(file.data.into_owned())
                    .map_err(|err| Error::Translations(format!("{filename}: {err}")))?;
                sources.push((*locale, text));
            }
        }
        Self::from_sources(sources.iter().map(|(locale, text)| (*locale, text.as_str())))
    }

    /// Builds the table from TOML sources, one per locale.
    ///
    /// Locales without a source are allowed and resolve entirely through the
    /// default locale.
    pub fn from_sources<'a>(sources: impl IntoIterator<Item = (Locale, &'a str)>) -> Result<Self> {
        let mut dictionaries = HashMap::new();
        for (locale, text) in sources {
            let dictionary: Dictionary = toml::from_str(text)
                .map_err(|err| Error::Translations(format!("{locale}: {err}")))?;
            dictionaries.insert(locale, dictionary);
        }
        Self::from_dictionaries(dictionaries)
    }

    pub fn from_dictionaries(dictionaries: HashMap<Locale, Dictionary>) -> Result<Self> {
        let missing = dictionaries
            .get(&Locale::DEFAULT)
            .map(Dictionary::missing_keys)
            .unwrap_or_else(|| Key::ALL.to_vec());
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(|key| key.as_str()).collect();
            return Err(Error::Translations(format!(
                "default locale `{}` is missing: {}",
                Locale::DEFAULT,
                names.join(", ")
            )));
        }

        for (locale, dictionary) in &dictionaries {
            let missing = dictionary.missing_keys();
            if !missing.is_empty() {
                tracing::debug!(
                    %locale,
                    missing = missing.len(),
                    "locale will fall back to {} for some keys",
                    Locale::DEFAULT
                );
            }
        }

        Ok(Self { dictionaries })
    }

    pub fn dictionary(&self, locale: Locale) -> Option<&Dictionary> {
        self.dictionaries.get(&locale)
    }

    /// Looks `key` up for `locale`, then for the default locale.
    ///
    /// `None` only for keys the default dictionary lacks, which construction
    /// rules out.
    pub fn lookup(&self, locale: Locale, key: Key) -> Option<&str> {
        self.dictionary(locale)
            .and_then(|dictionary| dictionary.get(key))
            .or_else(|| {
                self.dictionary(Locale::DEFAULT)
                    .and_then(|dictionary| dictionary.get(key))
            })
    }
}
