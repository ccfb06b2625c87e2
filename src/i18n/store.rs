// SPDX-License-Identifier: MPL-2.0
//! The locale store: which locale is active and how keys become text.

use super::keys::Key;
use super::locale::{Locale, LocaleDescriptor, DESCRIPTORS};
use super::table::TranslationTable;
use crate::storage::{MemoryStorage, Storage};
use std::borrow::Cow;
use std::sync::Arc;

/// Storage key under which the selected locale code is saved.
pub const STORAGE_KEY: &str = "language";

/// Owns the active locale for one session.
///
/// A store only exists in the ready state: [`LocaleStore::init`] reads the
/// saved preference exactly once and the store serves lookups from then on.
/// Pass it down to whatever renders text instead of keeping it in a global,
/// so tests and sessions each get their own.
///
/// Changing the locale takes `&mut self`, so no lookup can observe a
/// half-applied switch.
#[derive(Debug)]
pub struct LocaleStore<S: Storage> {
    table: Arc<TranslationTable>,
    storage: S,
    active: Locale,
}

impl<S: Storage> LocaleStore<S> {
    /// Starts a session, restoring the locale saved by a previous one.
    ///
    /// A missing, unreadable or unsupported saved value is discarded in
    /// favour of [`Locale::DEFAULT`].
    pub fn init(table: Arc<TranslationTable>, storage: S) -> Self {
        let active = match storage.get(STORAGE_KEY) {
            Ok(Some(saved)) => Locale::from_code(&saved).unwrap_or_else(|| {
                tracing::debug!(saved = %saved, "ignoring unsupported saved locale");
                Locale::DEFAULT
            }),
            Ok(None) => Locale::DEFAULT,
            Err(err) => {
                tracing::debug!(error = %err, "discarding unreadable saved locale");
                Locale::DEFAULT
            }
        };
        tracing::debug!(locale = %active, "locale store ready");

        Self {
            table,
            storage,
            active,
        }
    }

    pub fn locale(&self) -> Locale {
        self.active
    }

    pub fn descriptor(&self) -> &'static LocaleDescriptor {
        self.active.descriptor()
    }

    pub fn table(&self) -> &Arc<TranslationTable> {
        &self.table
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns display text for `key` in the active locale.
    ///
    /// Falls back to the default locale, and as a last resort to the key's
    /// own name. Never empty.
    pub fn resolve(&self, key: Key) -> &str {
        self.table.lookup(self.active, key).unwrap_or_else(|| {
            tracing::warn!(key = key.as_str(), "no translation in any locale");
            key.as_str()
        })
    }

    /// Resolves a key given by name. Unknown names come back unchanged.
    pub fn resolve_name<'a>(&'a self, name: &'a str) -> Cow<'a, str> {
        match name.parse::<Key>() {
            Ok(key) => Cow::Borrowed(self.resolve(key)),
            Err(_) => {
                tracing::debug!(name, "unknown translation key");
                Cow::Borrowed(name)
            }
        }
    }

    /// Makes `locale` active and remembers it for future sessions.
    ///
    /// The switch always takes effect; failing to persist it is only logged.
    pub fn set_locale(&mut self, locale: Locale) {
        if self.active != locale {
            tracing::debug!(from = %self.active, to = %locale, "switching locale");
        }
        self.active = locale;

        if let Err(err) = self.storage.set(STORAGE_KEY, locale.code()) {
            tracing::warn!(error = %err, %locale, "could not save selected locale");
        }
    }

    /// Selects a locale by code, as a language picker would.
    ///
    /// Returns `false` and leaves everything untouched when `code` is not a
    /// supported locale.
    pub fn select(&mut self, code: &str) -> bool {
        match Locale::from_code(code) {
            Some(locale) => {
                self.set_locale(locale);
                true
            }
            None => {
                tracing::debug!(code, "rejected unsupported locale");
                false
            }
        }
    }

    /// Picker entries for every supported locale, in display order.
    pub fn list_locales(&self) -> &'static [LocaleDescriptor] {
        &DESCRIPTORS
    }

    /// A store showing `locale` that shares this store's table but keeps its
    /// own scratch storage, so nothing it does is remembered.
    pub fn preview(&self, locale: Locale) -> LocaleStore<MemoryStorage> {
        LocaleStore {
            table: Arc::clone(&self.table),
            storage: MemoryStorage::new(),
            active: locale,
        }
    }

    /// Gives the storage backend back, ending the session.
    pub fn into_storage(self) -> S {
        self.storage
    }
}
