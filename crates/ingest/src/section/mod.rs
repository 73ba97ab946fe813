//! Family-specific structural section parsing.
//!
//! All families except pipeline diagrams share the same mechanic: scan
//! lines top-to-bottom, open a new section on a heading match, and
//! append everything else to the current section. Hierarchy is tracked
//! with an arena of sections plus a transient stack of open handles
//! (indices into the arena); popping the stack removes handles only and
//! never mutates already-closed sections.

mod guidance;
mod ifrs;
mod pipeline;
mod us_gaap;

use crate::types::{DocumentFamily, Section};

/// Parse raw content into an ordered section list for a family.
///
/// An empty result means "no structured sections found" and signals the
/// caller to fall back to generic handling; it is not an error.
pub fn parse_sections(content: &str, family: DocumentFamily) -> Vec<Section> {
    match family {
        DocumentFamily::Ifrs => ifrs::parse(content),
        DocumentFamily::UsGaap => us_gaap::parse(content),
        DocumentFamily::FirmGuidance => guidance::parse(content),
        DocumentFamily::Pipeline => pipeline::parse(content),
        DocumentFamily::Generic => Vec::new(),
    }
}

/// Arena of sections with a stack of open handles.
///
/// Invariant: a new section at level L closes (pops) all open sections
/// whose level >= L before capturing the remaining open titles as its
/// parent chain. Content lines only ever reach the most recently
/// opened section.
pub(crate) struct SectionArena {
    sections: Vec<Section>,
    open: Vec<usize>,
}

impl SectionArena {
    pub(crate) fn new() -> Self {
        Self {
            sections: Vec::new(),
            open: Vec::new(),
        }
    }

    /// Whether any section has been opened yet.
    pub(crate) fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Number of sections opened so far.
    pub(crate) fn len(&self) -> usize {
        self.sections.len()
    }

    /// Open a new section at `level`, closing deeper or sibling open
    /// sections first.
    pub(crate) fn open_section(
        &mut self,
        identifier: impl Into<String>,
        title: impl Into<String>,
        level: usize,
    ) {
        while self
            .open
            .last()
            .is_some_and(|&index| self.sections[index].level >= level)
        {
            self.open.pop();
        }

        let parent_titles = self
            .open
            .iter()
            .map(|&index| self.sections[index].title.clone())
            .collect();

        let section = Section::new(identifier, title, level, parent_titles);
        self.sections.push(section);
        self.open.push(self.sections.len() - 1);
    }

    /// Append a content line to the current section.
    ///
    /// Callers must have opened a section (possibly the family's
    /// fallback) before appending.
    pub(crate) fn append_line(&mut self, line: &str) {
        if let Some(section) = self.sections.last_mut() {
            section.add_line(line);
        }
    }

    /// Consume the arena, keeping only sections with non-empty text.
    pub(crate) fn into_sections(self) -> Vec<Section> {
        self.sections
            .into_iter()
            .filter(|section| !section.text().is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_pops_siblings_and_children() {
        let mut arena = SectionArena::new();
        arena.open_section("a", "A", 0);
        arena.append_line("alpha");
        arena.open_section("a1", "A1", 1);
        arena.append_line("beta");
        arena.open_section("a2", "A2", 1);
        arena.append_line("gamma");
        arena.open_section("b", "B", 0);
        arena.append_line("delta");

        let sections = arena.into_sections();
        assert_eq!(sections.len(), 4);
        assert!(sections[1].parent_titles == vec!["A".to_string()]);
        assert!(sections[2].parent_titles == vec!["A".to_string()]);
        assert!(sections[3].parent_titles.is_empty());
    }

    #[test]
    fn test_arena_closed_sections_keep_content() {
        let mut arena = SectionArena::new();
        arena.open_section("a", "A", 0);
        arena.append_line("kept");
        arena.open_section("b", "B", 0);
        arena.append_line("other");

        let sections = arena.into_sections();
        assert_eq!(sections[0].text(), "kept");
        assert_eq!(sections[1].text(), "other");
    }

    #[test]
    fn test_arena_drops_empty_sections() {
        let mut arena = SectionArena::new();
        arena.open_section("a", "A", 0);
        arena.open_section("b", "B", 0);
        arena.append_line("content");

        let sections = arena.into_sections();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].identifier, "b");
    }
}
