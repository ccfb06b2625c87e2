// SPDX-License-Identifier: MPL-2.0
//! Supported locales and their picker metadata.

use std::fmt;
use unic_langid::LanguageIdentifier;

/// A language the page can be shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    De,
    Nl,
    Sv,
}

impl Locale {
    /// The locale whose dictionary covers every key.
    pub const DEFAULT: Locale = Locale::En;

    /// Every supported locale, in picker order.
    pub const ALL: &'static [Locale] = &[Locale::En, Locale::De, Locale::Nl, Locale::Sv];

    pub const fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::De => "de",
            Locale::Nl => "nl",
            Locale::Sv => "sv",
        }
    }

    /// Matches an exact locale code such as `"de"`.
    ///
    /// This is the check applied to persisted values: anything that is not
    /// byte-for-byte one of our codes is rejected.
    pub fn from_code(code: &str) -> Option<Locale> {
        Self::ALL.iter().copied().find(|locale| locale.code() == code)
    }

    /// Maps an arbitrary language tag (`de-AT`, `sv_SE`, `NL`) onto a
    /// supported locale by its language subtag.
    pub fn negotiate(tag: &str) -> Option<Locale> {
        let normalized = tag.trim().replace('_', "-");
        let langid: LanguageIdentifier = normalized.parse().ok()?;
        Self::from_code(langid.language.as_str())
    }

    pub fn descriptor(self) -> &'static LocaleDescriptor {
        match self {
            Locale::En => &DESCRIPTORS[0],
            Locale::De => &DESCRIPTORS[1],
            Locale::Nl => &DESCRIPTORS[2],
            Locale::Sv => &DESCRIPTORS[3],
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// How a locale is shown in the language picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleDescriptor {
    pub code: Locale,
    /// Language name in that language.
    pub label: &'static str,
    /// Flag emoji.
    pub flag: &'static str,
}

/// Picker entries in display order.
pub const DESCRIPTORS: [LocaleDescriptor; 4] = [
    LocaleDescriptor {
        code: Locale::En,
        label: "English",
        flag: "🇬🇧",
    },
    LocaleDescriptor {
        code: Locale::De,
        label: "Deutsch",
        flag: "🇩🇪",
    },
    LocaleDescriptor {
        code: Locale::Nl,
        label: "Nederlands",
        flag: "🇳🇱",
    },
    LocaleDescriptor {
        code: Locale::Sv,
        label: "Svenska",
        flag: "🇸🇪",
    },
];
