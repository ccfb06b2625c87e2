// SPDX-License-Identifier: MPL-2.0
//! `folio` is an internationalized single-page portfolio.
//!
//! The heart of the crate is the [`i18n::LocaleStore`]: a strongly typed
//! translation table with default-locale fallback and a locale choice that
//! persists across sessions. Around it sit the static portfolio content,
//! contact-form validation and a plain-text page renderer.

#![doc(html_root_url = "https://docs.rs/folio/0.1.0")]

pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod i18n;
pub mod page;
pub mod paths;
pub mod storage;
