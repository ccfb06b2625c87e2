// SPDX-License-Identifier: MPL-2.0
//! Static portfolio content: skills, certificates, projects, writing and
//! blog platforms.
//!
//! The records are authored in `assets/content/portfolio.toml`, embedded at
//! compile time and only ever read.

use crate::config::FEATURED_PROJECT_COUNT;
use crate::error::{Error, Result};
use crate::i18n::Key;
use rust_embed::RustEmbed;
use serde::Deserialize;

#[derive(RustEmbed)]
#[folder = "assets/content/"]
struct Asset;

const PORTFOLIO_FILE: &str = "portfolio.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Certificate {
    pub id: u32,
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub image: String,
    pub verify_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub id: u32,
    pub name: String,
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub github_url: String,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    Blog,
    Whitepaper,
    Leetcode,
}

impl PostKind {
    /// Key of the localized badge shown on the post card.
    pub fn label_key(self) -> Key {
        match self {
            PostKind::Blog => Key::WritingBlog,
            PostKind::Whitepaper => Key::WritingWhitepaper,
            PostKind::Leetcode => Key::WritingLeetcode,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Post {
    pub title: String,
    pub excerpt: String,
    pub kind: PostKind,
    /// ISO-8601 date (`YYYY-MM-DD`), so string order is date order.
    pub date: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Platform {
    pub name: String,
    pub url: String,
    pub description: String,
    pub icon: String,
}

/// Everything the page shows besides translated labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Portfolio {
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub platforms: Vec<Platform>,
}

impl Portfolio {
    /// Loads the content compiled into the binary.
    pub fn embedded() -> Result<Self> {
        let file = Asset::get(PORTFOLIO_FILE)
            .ok_or_else(|| Error::Content(format!("{PORTFOLIO_FILE} is not embedded")))?;
        let text = std::str::from_utf8(file.data.as_ref())
            .map_err(|err| Error::Content(format!("{PORTFOLIO_FILE}: {err}")))?;
        Self::from_toml(text)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|err| Error::Content(err.to_string()))
    }

    /// Projects previewed on the home page.
    pub fn featured_projects(&self) -> &[Project] {
        let end = self.projects.len().min(FEATURED_PROJECT_COUNT);
        &self.projects[..end]
    }

    /// Distinct skill categories, in the order they first appear.
    pub fn skill_categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for skill in &self.skills {
            if !categories.contains(&skill.category.as_str()) {
                categories.push(&skill.category);
            }
        }
        categories
    }

    pub fn posts_newest_first(&self) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self.posts.iter().collect();
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        posts
    }
}
