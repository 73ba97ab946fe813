//! Section parsing for pipeline diagram specs.
//!
//! Diagrams carry no heading hierarchy; the whole document becomes one
//! section whose content is the natural-language rendering of the
//! diagram's edges.

use crate::mermaid;
use crate::types::Section;

pub(super) fn parse(content: &str) -> Vec<Section> {
    let narrative = mermaid::parse(content).to_narrative();

    let mut section = Section::new("pipeline", "Standards Ingestion Pipeline", 0, Vec::new());
    for line in narrative.lines() {
        section.add_line(line);
    }

    if section.text().is_empty() {
        return Vec::new();
    }
    vec![section]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagram_becomes_single_section() {
        let content = "graph TB\nA[Extract]\nB[Index]\nA --> |chunks| B\n";
        let sections = parse(content);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].identifier, "pipeline");
        assert_eq!(sections[0].title, "Standards Ingestion Pipeline");
        assert_eq!(sections[0].text(), "Extract -- chunks --> Index");
    }

    #[test]
    fn test_empty_diagram_yields_no_sections() {
        assert!(parse("graph TB\n").is_empty());
    }
}
