// SPDX-License-Identifier: MPL-2.0
//! Plain-text rendering of the portfolio page in the active locale.
//!
//! Every label goes through [`LocaleStore::resolve`]; the content records
//! themselves are shown as authored.

use crate::content::Portfolio;
use crate::i18n::{Key, LocaleStore};
use crate::storage::Storage;
use std::fmt::Write;

/// Navigation entries as (anchor, label key), in menu order.
pub const NAV_ITEMS: [(&str, Key); 5] = [
    ("#home", Key::NavHome),
    ("#about", Key::NavAbout),
    ("#skills", Key::NavSkills),
    ("#writing", Key::NavWriting),
    ("#contact", Key::NavContact),
];

const ABOUT_STATS: [(Key, Key); 3] = [
    (Key::AboutYears, Key::AboutYearsLabel),
    (Key::AboutProjects, Key::AboutProjectsLabel),
    (Key::AboutCerts, Key::AboutCertsLabel),
];

/// Renders the whole page, section by section.
pub fn render<S: Storage>(store: &LocaleStore<S>, portfolio: &Portfolio) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_page(&mut out, store, portfolio);
    out
}

fn write_page<S: Storage>(
    out: &mut String,
    store: &LocaleStore<S>,
    portfolio: &Portfolio,
) -> std::fmt::Result {
    let t = move |key: Key| store.resolve(key);
    let descriptor = store.descriptor();

    let nav: Vec<&str> = NAV_ITEMS.iter().map(|(_, key)| t(*key)).collect();
    writeln!(out, "{} {} | {}", descriptor.flag, descriptor.label, nav.join(" · "))?;
    writeln!(out)?;

    writeln!(out, "{}", t(Key::HeroTitle))?;
    writeln!(out, "{} {}", t(Key::HeroGreeting), t(Key::HeroName))?;
    writeln!(out, "{}", t(Key::HeroDescription))?;
    writeln!(out, "[{}] [{}]", t(Key::HeroCta), t(Key::HeroResume))?;

    section_heading(out, &t(Key::NavAbout).to_lowercase(), t(Key::AboutTitle), None)?;
    writeln!(out, "{}", t(Key::AboutP1))?;
    writeln!(out, "{}", t(Key::AboutP2))?;
    for (value, label) in ABOUT_STATS {
        writeln!(out, "  {} {}", t(value), t(label))?;
    }

    section_heading(
        out,
        &t(Key::NavSkills).to_lowercase(),
        t(Key::SkillsTitle),
        Some(t(Key::SkillsSubtitle)),
    )?;
    for category in portfolio.skill_categories() {
        let names: Vec<&str> = portfolio
            .skills
            .iter()
            .filter(|skill| skill.category == category)
            .map(|skill| skill.name.as_str())
            .collect();
        writeln!(out, "  {category}: {}", names.join(", "))?;
    }

    section_heading(
        out,
        t(Key::CertsTag),
        t(Key::CertsTitle),
        Some(t(Key::CertsSubtitle)),
    )?;
    for cert in &portfolio.certificates {
        writeln!(
            out,
            "  {} ({}, {}) [{}: {}]",
            cert.name,
            cert.issuer,
            cert.date,
            t(Key::CertsVerify),
            cert.verify_url
        )?;
    }
    writeln!(out, "  → {} (folio certificates)", t(Key::CertsViewAll))?;

    section_heading(
        out,
        t(Key::ProjTag),
        t(Key::ProjTitle),
        Some(t(Key::ProjSubtitle)),
    )?;
    for project in portfolio.featured_projects() {
        writeln!(out, "  {} [{}]", project.name, project.tags.join(", "))?;
        writeln!(out, "    {}", project.summary)?;
    }
    writeln!(out, "  → {} (folio projects)", t(Key::ProjViewAll))?;

    section_heading(
        out,
        &t(Key::NavWriting).to_lowercase(),
        t(Key::WritingTitle),
        Some(t(Key::WritingSubtitle)),
    )?;
    for post in portfolio.posts_newest_first() {
        writeln!(out, "  [{}] {} ({})", t(post.kind.label_key()), post.title, post.date)?;
        writeln!(out, "    {} {}", post.excerpt, t(Key::WritingReadMore))?;
    }

    section_heading(
        out,
        t(Key::BlogPlatformsTag),
        t(Key::BlogPlatformsTitle),
        Some(t(Key::BlogPlatformsSubtitle)),
    )?;
    for platform in &portfolio.platforms {
        writeln!(out, "  {} {}: {}", platform.icon, platform.name, platform.url)?;
    }

    section_heading(
        out,
        &t(Key::NavContact).to_lowercase(),
        t(Key::ContactTitle),
        Some(t(Key::ContactSubtitle)),
    )?;
    writeln!(
        out,
        "  <{}> <{}> <{}> [{}]",
        t(Key::ContactName),
        t(Key::ContactEmail),
        t(Key::ContactMessage),
        t(Key::ContactSend)
    )?;

    writeln!(out)?;
    writeln!(out, "© {} · {}", t(Key::FooterRights), t(Key::FooterBuiltWith))?;
    Ok(())
}

/// Renders the page listing every project, with repository and demo links.
pub fn render_projects<S: Storage>(store: &LocaleStore<S>, portfolio: &Portfolio) -> String {
    let mut out = String::new();
    let _ = write_projects(&mut out, store, portfolio);
    out
}

fn write_projects<S: Storage>(
    out: &mut String,
    store: &LocaleStore<S>,
    portfolio: &Portfolio,
) -> std::fmt::Result {
    writeln!(out, "← {}", store.resolve(Key::NavHome))?;
    writeln!(out)?;
    writeln!(out, "{}", store.resolve(Key::ProjTitle))?;
    writeln!(out, "{}", store.resolve(Key::ProjSubtitle))?;
    for project in &portfolio.projects {
        writeln!(out)?;
        writeln!(out, "  {} [{}]", project.name, project.tags.join(", "))?;
        writeln!(out, "    {}", project.summary)?;
        writeln!(out, "    GitHub: {}", project.github_url)?;
        if let Some(live_url) = &project.live_url {
            writeln!(out, "    Live: {live_url}")?;
        }
    }
    Ok(())
}

/// Renders the page listing every certificate with its verification link.
pub fn render_certificates<S: Storage>(store: &LocaleStore<S>, portfolio: &Portfolio) -> String {
    let mut out = String::new();
    let _ = write_certificates(&mut out, store, portfolio);
    out
}

fn write_certificates<S: Storage>(
    out: &mut String,
    store: &LocaleStore<S>,
    portfolio: &Portfolio,
) -> std::fmt::Result {
    writeln!(out, "← {}", store.resolve(Key::NavHome))?;
    writeln!(out)?;
    writeln!(out, "{}", store.resolve(Key::CertsTitle))?;
    writeln!(out, "{}", store.resolve(Key::CertsSubtitle))?;
    for cert in &portfolio.certificates {
        writeln!(out)?;
        writeln!(out, "  {}", cert.name)?;
        writeln!(out, "    {} · {}", cert.issuer, cert.date)?;
        writeln!(out, "    {}: {}", store.resolve(Key::CertsVerify), cert.verify_url)?;
    }
    Ok(())
}

fn section_heading(
    out: &mut String,
    tag: &str,
    title: &str,
    subtitle: Option<&str>,
) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "// {tag}")?;
    writeln!(out, "{title}")?;
    if let Some(subtitle) = subtitle {
        writeln!(out, "{subtitle}")?;
    }
    Ok(())
}
