//! Document family classification.
//!
//! Rule-based detection over lowercased content plus an optional
//! filename hint. Rules are evaluated top-to-bottom and the first match
//! wins: the order matters because guidance vocabulary overlaps with
//! standard texts.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::DocumentFamily;

/// File extension of pipeline diagram sources.
const DIAGRAM_EXTENSION: &str = ".mermaid";

/// Flowchart declaration token found in diagram bodies.
const DIAGRAM_DECLARATION: &str = "graph tb";

/// Vocabulary that identifies IFRS / IAS standard texts.
const IFRS_KEYWORDS: &[&str] = &["ifrs", "iasb", "international accounting standard"];

/// Phrase naming the US GAAP codification.
const US_GAAP_PHRASE: &str = "accounting standards codification";

/// Vocabulary that identifies internal firm guidance.
const FIRM_GUIDANCE_KEYWORDS: &[&str] = &["firm guidance", "methodology", "playbook", "procedure"];

/// Codification reference, e.g. "ASC 606" or "asc 606-10".
static US_GAAP_REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"asc\s*\d{3}(?:-\d{2})*").unwrap());

/// Assign a document family to raw content.
///
/// Pure and case-insensitive. Returns [`DocumentFamily::Generic`] when
/// the document should be handled by the generic ingestion path
/// instead of this engine.
pub fn classify_document(content: &str, file_hint: Option<&str>) -> DocumentFamily {
    let lowered = content.to_lowercase();
    let hint = file_hint.unwrap_or("").to_lowercase();

    if hint.ends_with(DIAGRAM_EXTENSION) || lowered.contains(DIAGRAM_DECLARATION) {
        return DocumentFamily::Pipeline;
    }

    if IFRS_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
    {
        return DocumentFamily::Ifrs;
    }

    if US_GAAP_REFERENCE.is_match(&lowered) || lowered.contains(US_GAAP_PHRASE) {
        return DocumentFamily::UsGaap;
    }

    if FIRM_GUIDANCE_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
    {
        return DocumentFamily::FirmGuidance;
    }

    DocumentFamily::Generic
}
