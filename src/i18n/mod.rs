// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support.
//!
//! Display strings are resolved through a [`LocaleStore`], which pairs the
//! static [`TranslationTable`] with the active [`Locale`] and remembers the
//! visitor's choice in durable [`Storage`](crate::storage::Storage).
//!
//! # Features
//!
//! - Closed, strongly typed key set ([`Key`]) shared by every locale
//! - Translation files embedded at compile time from `assets/i18n/`
//! - Runtime language switching, persisted across sessions
//! - Fallback to the default locale when a translation is missing

pub mod keys;
pub mod locale;
pub mod store;
pub mod table;

pub use keys::{Dictionary, Key, UnknownKey};
pub use locale::{Locale, LocaleDescriptor, DESCRIPTORS};
pub use store::{LocaleStore, STORAGE_KEY};
pub use table::TranslationTable;
