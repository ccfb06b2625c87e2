// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for translation lookups.
//!
//! Measures:
//! - Resolving every key in a fully translated locale
//! - Resolving through the default-locale fallback
//! - Rendering the whole page

use criterion::{criterion_group, criterion_main, Criterion};
use folio::content::Portfolio;
use folio::i18n::{Key, Locale, LocaleStore, TranslationTable};
use folio::page;
use folio::storage::MemoryStorage;
use std::hint::black_box;
use std::sync::Arc;

fn embedded_store(locale: Locale) -> LocaleStore<MemoryStorage> {
    let table = Arc::new(TranslationTable::embedded().unwrap());
    let mut store = LocaleStore::init(table, MemoryStorage::new());
    store.set_locale(locale);
    store
}

fn bench_resolve_all_keys(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    let store = embedded_store(Locale::Sv);

    group.bench_function("all_keys", |b| {
        b.iter(|| {
            for key in Key::ALL {
                black_box(store.resolve(black_box(*key)));
            }
        });
    });

    group.finish();
}

/// Every lookup misses in the active locale and lands in the default one.
fn bench_resolve_fallback(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    let english = TranslationTable::embedded()
        .unwrap()
        .dictionary(Locale::En)
        .cloned()
        .unwrap();
    let table = TranslationTable::from_dictionaries([(Locale::En, english)].into_iter().collect())
        .unwrap();
    let mut store = LocaleStore::init(Arc::new(table), MemoryStorage::new());
    store.set_locale(Locale::Nl);

    group.bench_function("fallback", |b| {
        b.iter(|| {
            for key in Key::ALL {
                black_box(store.resolve(black_box(*key)));
            }
        });
    });

    group.finish();
}

fn bench_render_page(c: &mut Criterion) {
    let mut group = c.benchmark_group("page");
    let store = embedded_store(Locale::De);
    let portfolio = Portfolio::embedded().unwrap();

    group.bench_function("render", |b| {
        b.iter(|| black_box(page::render(&store, &portfolio)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_resolve_all_keys,
    bench_resolve_fallback,
    bench_render_page
);
criterion_main!(benches);
