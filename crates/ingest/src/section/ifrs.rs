//! Section parsing for IFRS / IAS standard texts.
//!
//! Headings are either a standard number ("IAS 16", "IFRS 15"), always
//! top-level, or a paragraph numeral ("16.3.2", "1.") whose level is
//! the dot count of the numeral. Bare numerals must carry a trailing
//! dot so that ordinary lines starting with a number stay content.

use once_cell::sync::Lazy;
use regex::Regex;

use super::SectionArena;
use crate::types::Section;

static HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\s*(?:(?P<kind>IAS|IFRS)\s*(?P<stdnum>\d+)|(?P<para>\d+(?:\.\d+)+)\.?|(?P<num>\d+)\.)\s*(?P<title>.*)$",
    )
    .unwrap()
});

pub(super) fn parse(content: &str) -> Vec<Section> {
    let mut arena = SectionArena::new();

    for raw_line in content.lines() {
        let line = raw_line.trim_end();

        if let Some(caps) = HEADING.captures(line) {
            let rest = caps.name("title").map(|m| m.as_str().trim()).unwrap_or("");

            let (identifier, title, level) = if let (Some(kind), Some(stdnum)) =
                (caps.name("kind"), caps.name("stdnum"))
            {
                let identifier = format!("{} {}", kind.as_str(), stdnum.as_str());
                let title = if rest.is_empty() {
                    identifier.clone()
                } else {
                    rest.to_string()
                };
                (identifier, title, 0)
            } else {
                let numeral = caps
                    .name("para")
                    .or_else(|| caps.name("num"))
                    .map(|m| m.as_str())
                    .unwrap_or_default();
                let level = numeral.matches('.').count();
                let title = if rest.is_empty() {
                    format!("Paragraph {}", numeral)
                } else {
                    rest.to_string()
                };
                (numeral.to_string(), title, level)
            };

            arena.open_section(identifier, title, level);
        } else {
            if arena.is_empty() {
                arena.open_section("introduction", "Introduction", 0);
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
    fn test_standard_heading_is_top_level() {
        let content = "IAS 16 Property, Plant and Equipment\nAssets shall be measured.";
        let sections = parse(content);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].identifier, "IAS 16");
        assert_eq!(sections[0].title, "Property, Plant and Equipment");
        assert_eq!(sections[0].level, 0);
    }

    #[test]
    fn test_ifrs_heading_keeps_prefix() {
        let content = "IFRS 15 Revenue from Contracts\nRevenue recognition.";
        let sections = parse(content);
        assert_eq!(sections[0].identifier, "IFRS 15");
    }

    #[test]
    fn test_paragraph_level_equals_dot_count() {
        let content = "16.3.2 Depreciation\nDepreciation is systematic allocation.";
        let sections = parse(content);
        assert_eq!(sections[0].identifier, "16.3.2");
        assert_eq!(sections[0].level, 2);
    }

    #[test]
    fn test_sibling_numerals_nest_and_unnest() {
        let content = "1. A\ntext1\n1.1 B\ntext2\n1.2 C\ntext3\n2. D\ntext4";
        let sections = parse(content);
        assert_eq!(sections.len(), 4);

        assert_eq!(sections[1].title, "B");
        assert_eq!(sections[1].parent_titles, vec!["A".to_string()]);
        assert_eq!(sections[2].title, "C");
        assert_eq!(sections[2].parent_titles, vec!["A".to_string()]);

        // "2. D" is a sibling of "1. A", not its child
        assert_eq!(sections[3].title, "D");
        assert!(sections[3].parent_titles.is_empty());
    }

    #[test]
    fn test_content_before_heading_goes_to_introduction() {
        let content = "Preamble text.\n\n1. Scope\nThis standard applies broadly.";
        let sections = parse(content);
        assert_eq!(sections[0].identifier, "introduction");
        assert_eq!(sections[0].title, "Introduction");
        assert_eq!(sections[0].text(), "Preamble text.");
    }

    #[test]
    fn test_numeric_content_line_is_not_a_heading() {
        let content = "1. Scope\nIn 2023 the standard changed.";
        let sections = parse(content);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].text(), "In 2023 the standard changed.");
    }

    #[test]
    fn test_blank_document_yields_no_sections() {
        assert!(parse("").is_empty());
        assert!(parse("\n  \n").is_empty());
    }
}
