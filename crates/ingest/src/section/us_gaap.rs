//! Section parsing for US GAAP codification texts.
//!
//! Headings are codification references ("ASC 606", "ASC 606-10-25")
//! with an optional ":" or "-" separated title. The nesting level is
//! the number of dash segments beyond the base topic.

use once_cell::sync::Lazy;
use regex::Regex;

use super::SectionArena;
use crate::types::Section;

static HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(?P<id>ASC\s*\d{3}(?:-\d{2})*)(?:[:\-]\s*(?P<title>.*))?$").unwrap()
});

pub(super) fn parse(content: &str) -> Vec<Section> {
    let mut arena = SectionArena::new();

    for raw_line in content.lines() {
        let line = raw_line.trim_end();

        if let Some(caps) = HEADING.captures(line) {
            let identifier = caps["id"].to_uppercase().replace(' ', "");
            let level = identifier.matches('-').count();
            let title = caps
                .name("title")
                .map(|m| m.as_str().trim())
                .filter(|title| !title.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| identifier.clone());

            arena.open_section(identifier, title, level);
        } else {
            if arena.is_empty() {
                arena.open_section("asc_overview", "Overview", 0);
            }
            arena.append_line(line);
        }
    }

    arena.into_sections()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_normalized_and_leveled() {
        let content = "asc 606-10: Overall\nThe entity shall recognise revenue.";
        let sections = parse(content);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].identifier, "ASC606-10");
        assert_eq!(sections[0].level, 1);
        assert_eq!(sections[0].title, "Overall");
    }

    #[test]
    fn test_subtopic_nests_under_topic() {
        let content = "ASC 606: Revenue\ntopic text\nASC 606-10: Overall\nsubtopic text";
        let sections = parse(content);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[1].parent_titles, vec!["Revenue".to_string()]);
    }

    #[test]
    fn test_bare_reference_uses_identifier_as_title() {
        let content = "ASC 842\nLeases are recognised on balance sheet.";
        let sections = parse(content);
        assert_eq!(sections[0].title, "ASC842");
    }

    #[test]
    fn test_fallback_overview_section() {
        let content = "General discussion of the codification structure.";
        let sections = parse(content);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].identifier, "asc_overview");
        assert_eq!(sections[0].title, "Overview");
    }

    #[test]
    fn test_inline_reference_is_content() {
        let content = "ASC 606: Revenue\nSee ASC 842 for lease guidance today.";
        let sections = parse(content);
        // The second line does not end after the reference, so it stays content
        assert_eq!(sections.len(), 1);
        assert!(sections[0].text().contains("lease guidance"));
    }
}
