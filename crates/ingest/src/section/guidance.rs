//! Section parsing for firm guidance documents.
//!
//! Guidance documents mix markdown headings (level = hash run length
//! minus one) with all-uppercase headings. Uppercase headings are
//! always top-level and reset the ancestor stack: they never nest
//! under prior sections. Identifiers are slugs derived from titles.

use once_cell::sync::Lazy;
use regex::Regex;

use super::SectionArena;
use crate::enrich::title_case;
use crate::types::Section;

static MD_HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(#+)\s+(.*)$").unwrap());

static UPPERCASE_HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][A-Z ]{3,}$").unwrap());

static SLUG_SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9]+").unwrap());

/// Collapse non-alphanumeric runs into single dashes.
fn slugify(title: &str) -> String {
    SLUG_SEPARATORS
        .replace_all(&title.to_lowercase(), "-")
        .trim_matches('-')
        .to_string()
}

pub(super) fn parse(content: &str) -> Vec<Section> {
    let mut arena = SectionArena::new();

    for raw_line in content.lines() {
        let line = raw_line.trim_end();

        if let Some(caps) = MD_HEADING.captures(line) {
            let level = caps[1].len() - 1;
            let title = caps[2].trim().to_string();
            let slug = slugify(&title);

            let ordinal = arena.len() + 1;
            let identifier = if slug.is_empty() {
                format!("section-{}", ordinal)
            } else {
                slug
            };
            let title = if title.is_empty() {
                format!("Section {}", ordinal)
            } else {
                title
            };

            arena.open_section(identifier, title, level);
        } else if UPPERCASE_HEADING.is_match(line) {
            let title = title_case(line);
            let slug = slugify(&title);
            let identifier = if slug.is_empty() {
                format!("section-{}", arena.len() + 1)
            } else {
                slug
            };

            // Level 0 closes every open section, so the new heading
            // starts with an empty ancestor chain
            arena.open_section(identifier, title, 0);
        } else {
            if arena.is_empty() {
                arena.open_section("guidance_overview", "Guidance Overview", 0);
            }
            arena.append_line(line);
        }
    }

    arena.into_sections()
}
