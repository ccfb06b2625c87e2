// SPDX-License-Identifier: MPL-2.0
//! The closed set of display-string keys and the per-locale dictionary.
//!
//! Both are generated by one macro invocation so that adding a key adds the
//! enum variant and the dictionary field together.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

macro_rules! translation_keys {
    ($($variant:ident => $field:ident),+ $(,)?) => {
        /// A display string the page can ask for.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Key {
            $($variant),+
        }

        impl Key {
            /// Every key, in declaration order.
            pub const ALL: &'static [Key] = &[$(Key::$variant),+];

            /// The key's name as written in the translation sources.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Key::$variant => stringify!($field)),+
                }
            }
        }

        /// Display strings for one locale.
        ///
        /// Every field is optional: a locale may leave keys out and rely on
        /// the default locale to fill them in.
        #[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
        #[serde(deny_unknown_fields)]
        pub struct Dictionary {
            $(#[serde(default)] pub $field: Option<String>,)+
        }

        impl Dictionary {
            /// Returns the string for `key`, treating an empty string as absent.
            pub fn get(&self, key: Key) -> Option<&str> {
                let value = match key {
                    $(Key::$variant => self.$field.as_deref()),+
                };
                value.filter(|text| !text.is_empty())
            }
        }
    };
}

translation_keys! {
    NavHome => nav_home,
    NavAbout => nav_about,
    NavSkills => nav_skills,
    NavWriting => nav_writing,
    NavContact => nav_contact,
    NavCerts => nav_certs,
    NavProjects => nav_projects,
    HeroGreeting => hero_greeting,
    HeroName => hero_name,
    HeroTitle => hero_title,
    HeroDescription => hero_description,
    HeroCta => hero_cta,
    HeroResume => hero_resume,
    AboutTitle => about_title,
    AboutP1 => about_p1,
    AboutP2 => about_p2,
    AboutYears => about_years,
    AboutYearsLabel => about_years_label,
    AboutProjects => about_projects,
    AboutProjectsLabel => about_projects_label,
    AboutCerts => about_certs,
    AboutCertsLabel => about_certs_label,
    SkillsTitle => skills_title,
    SkillsSubtitle => skills_subtitle,
    WritingTitle => writing_title,
    WritingSubtitle => writing_subtitle,
    WritingReadMore => writing_read_more,
    WritingBlog => writing_blog,
    WritingWhitepaper => writing_whitepaper,
    WritingLeetcode => writing_leetcode,
    ContactTitle => contact_title,
    ContactSubtitle => contact_subtitle,
    ContactName => contact_name,
    ContactEmail => contact_email,
    ContactMessage => contact_message,
    ContactSend => contact_send,
    ContactSuccess => contact_success,
    ContactNameRequired => contact_name_required,
    ContactEmailInvalid => contact_email_invalid,
    ContactMessageRequired => contact_message_required,
    ContactTooLong => contact_too_long,
    ContactSendFailed => contact_send_failed,
    FooterRights => footer_rights,
    FooterBuiltWith => footer_built_with,
    ResumeDownload => resume_download,
    ResumeOpenNew => resume_open_new,
    ResumeNotFound => resume_not_found,
    ResumeNotFoundDesc => resume_not_found_desc,
    BlogPlatformsTag => blog_platforms_tag,
    BlogPlatformsTitle => blog_platforms_title,
    BlogPlatformsSubtitle => blog_platforms_subtitle,
    CertsTag => certs_tag,
    CertsTitle => certs_title,
    CertsSubtitle => certs_subtitle,
    CertsVerify => certs_verify,
    CertsViewAll => certs_view_all,
    ProjTag => proj_tag,
    ProjTitle => proj_title,
    ProjSubtitle => proj_subtitle,
    ProjViewAll => proj_view_all,
}

impl Dictionary {
    /// Keys this dictionary has no usable string for.
    pub fn missing_keys(&self) -> Vec<Key> {
        Key::ALL
            .iter()
            .copied()
            .filter(|key| self.get(*key).is_none())
            .collect()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKey(pub String);

impl fmt::Display for UnknownKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown translation key `{}`", self.0)
    }
}

impl std::error::Error for UnknownKey {}

impl FromStr for Key {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Key::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownKey(s.to_string()))
    }
}
