// SPDX-License-Identifier: MPL-2.0
use folio::i18n::{Key, Locale, LocaleStore, TranslationTable, STORAGE_KEY};
use folio::storage::{FileStorage, MemoryStorage, Storage};
use std::sync::Arc;
use tempfile::tempdir;

fn table() -> Arc<TranslationTable> {
    Arc::new(TranslationTable::embedded().expect("embedded translations must load"))
}

#[test]
fn fallback_completeness_for_every_locale_and_key() {
    let table = table();
    let default = table.dictionary(Locale::DEFAULT).unwrap();
    let mut store = LocaleStore::init(table.clone(), MemoryStorage::new());

    for locale in Locale::ALL {
        store.set_locale(*locale);
        let own = table.dictionary(*locale);
        for key in Key::ALL {
            let text = store.resolve(*key);
            assert!(!text.is_empty(), "{locale}/{key} resolved to empty text");
            let from_own = own.and_then(|dictionary| dictionary.get(*key)) == Some(text);
            let from_default = default.get(*key) == Some(text);
            assert!(from_own || from_default, "{locale}/{key} resolved to {text:?}");
        }
    }
}

#[test]
fn setting_same_locale_twice_is_idempotent() {
    let mut store = LocaleStore::init(table(), MemoryStorage::new());

    store.set_locale(Locale::Nl);
    let first: Vec<String> = Key::ALL.iter().map(|k| store.resolve(*k).to_string()).collect();
    store.set_locale(Locale::Nl);
    let second: Vec<String> = Key::ALL.iter().map(|k| store.resolve(*k).to_string()).collect();

    assert_eq!(first, second);
    assert_eq!(store.locale(), Locale::Nl);
}

#[test]
fn selected_locale_survives_reload() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let storage = FileStorage::open_in(Some(dir.path().to_path_buf())).unwrap();
    let mut store = LocaleStore::init(table(), storage);
    assert!(store.select("de"));
    drop(store);

    // A new session reads the same directory.
    let storage = FileStorage::open_in(Some(dir.path().to_path_buf())).unwrap();
    let reloaded = LocaleStore::init(table(), storage);
    assert_eq!(reloaded.locale(), Locale::De);
    assert_eq!(reloaded.resolve(Key::NavContact), "Kontakt");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn first_run_defaults_to_english_and_lists_all_locales() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let storage = FileStorage::open_in(Some(dir.path().to_path_buf())).unwrap();
    let store = LocaleStore::init(table(), storage);

    assert_eq!(store.locale().code(), "en");
    let codes: Vec<&str> = store
        .list_locales()
        .iter()
        .map(|descriptor| descriptor.code.code())
        .collect();
    assert_eq!(codes, ["en", "de", "nl", "sv"]);
}

#[test]
fn unsupported_code_leaves_locale_unchanged() {
    let mut store = LocaleStore::init(table(), MemoryStorage::new());
    store.set_locale(Locale::Sv);

    assert!(!store.select("xx"));

    assert_eq!(store.locale(), Locale::Sv);
    assert_eq!(
        store.storage().get(STORAGE_KEY).unwrap().as_deref(),
        Some("sv")
    );
}

#[test]
fn key_missing_from_locale_uses_default_text_not_key_name() {
    let english = TranslationTable::embedded()
        .unwrap()
        .dictionary(Locale::En)
        .cloned()
        .unwrap();
    let mut partial_swedish = english.clone();
    partial_swedish.hero_cta = None;
    partial_swedish.nav_home = Some("Hem".to_string());

    let table = TranslationTable::from_dictionaries(
        [(Locale::En, english), (Locale::Sv, partial_swedish)]
            .into_iter()
            .collect(),
    )
    .unwrap();
    let mut store = LocaleStore::init(Arc::new(table), MemoryStorage::new());
    store.set_locale(Locale::Sv);

    assert_eq!(store.resolve(Key::NavHome), "Hem");
    assert_eq!(store.resolve(Key::HeroCta), "Get in Touch");
    assert_ne!(store.resolve(Key::HeroCta), Key::HeroCta.as_str());
}

#[test]
fn corrupt_storage_file_falls_back_to_default() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let storage = FileStorage::open_in(Some(dir.path().to_path_buf())).unwrap();
    std::fs::write(storage.path(), "language = [").unwrap();

    let mut store = LocaleStore::init(table(), storage);
    assert_eq!(store.locale(), Locale::DEFAULT);

    // Selecting a language repairs the file.
    store.set_locale(Locale::Nl);
    let storage = store.into_storage();
    assert_eq!(storage.get(STORAGE_KEY).unwrap().as_deref(), Some("nl"));
}

#[test]
fn storage_value_is_the_raw_code() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let storage = FileStorage::open_in(Some(dir.path().to_path_buf())).unwrap();
    let path = storage.path().to_path_buf();

    let mut store = LocaleStore::init(table(), storage);
    store.set_locale(Locale::Sv);

    let written = std::fs::read_to_string(path).unwrap();
    assert_eq!(written.trim(), "language = \"sv\"");
}
