//! Chunk-level metadata enrichment.
//!
//! Pure lexical analysis over a finalized chunk: normative labels,
//! frequency-ranked keywords, family-specific citation extraction,
//! derived topics, and the hierarchical header prepended to the chunk
//! before its final token count is measured.

use std::collections::{BTreeSet, HashMap};

use once_cell::sync::Lazy;
use regex::Regex;
use sha2::{Digest, Sha256};
use standards_core::IngestResult;

use crate::tokenizer::Tokenizer;
use crate::types::{ChunkMetadata, DocumentFamily, ProcessedChunk, Section};

/// Ordered label rules: the first keyword hit per row adds the label.
const LABEL_RULES: &[(&[&str], &str)] = &[
    (&["shall", "must", "require"], "Requirement"),
    (&["objective", "principle", "purpose"], "Principle"),
    (&["disclosure"], "Disclosure"),
    (&["example"], "Example"),
    (&["procedure", "step", "workflow"], "Procedure"),
    (&["guidance"], "Guidance"),
];

/// Label applied when no rule matches.
const DEFAULT_LABEL: &str = "General";

/// Common terms excluded from keyword ranking.
const STOPWORDS: &[&str] = &[
    "the", "and", "for", "with", "that", "from", "this", "shall", "should", "will", "would",
    "into", "each", "when", "more", "than", "such", "have", "been", "within", "where", "which",
    "their", "they", "there", "here", "after", "before", "during", "including", "include",
    "among", "other", "others", "per", "its", "those", "also", "must", "may", "might",
];

/// Candidate keyword: alphabetic run of length >= 4, hyphens allowed.
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z][A-Za-z-]{3,}").unwrap());

static IFRS_REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:IAS|IFRS)\s?\d+(?:\.\d+)*").unwrap());

static US_GAAP_REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)ASC\s*\d{3}(?:-\d{2})*").unwrap());

static GUIDANCE_REFERENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"FG-\d+").unwrap());

/// Rule-based classification of a chunk's normative nature.
///
/// Returns the sorted, deduplicated set of matching labels, or
/// `["General"]` when nothing matches. A chunk may carry several
/// labels.
pub fn classify_chunk_labels(content: &str) -> Vec<String> {
    let lowered = content.to_lowercase();

    let labels: BTreeSet<&str> = LABEL_RULES
        .iter()
        .filter(|(keywords, _)| keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map(|(_, label)| *label)
        .collect();

    if labels.is_empty() {
        return vec![DEFAULT_LABEL.to_string()];
    }
    labels.into_iter().map(str::to_string).collect()
}

/// Frequency-ranked keyword extraction.
///
/// Alphabetic runs are lowercased and stop-word filtered, then ranked
/// by descending frequency with ties broken by first appearance.
pub fn extract_keywords(content: &str, top_k: usize) -> Vec<String> {
    // (frequency, first-seen rank) per word
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();

    for word in WORD.find_iter(content) {
        let normalized = word.as_str().to_lowercase();
        if STOPWORDS.contains(&normalized.as_str()) {
            continue;
        }
        let first_seen = counts.len();
        let entry = counts.entry(normalized).or_insert((0, first_seen));
        entry.0 += 1;
    }

    let mut ranked: Vec<(String, (usize, usize))> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));
    ranked
        .into_iter()
        .take(top_k)
        .map(|(word, _)| word)
        .collect()
}

/// Family-specific citation extraction, sorted and deduplicated.
pub fn extract_references(content: &str, family: DocumentFamily) -> Vec<String> {
    let mut references = BTreeSet::new();

    match family {
        DocumentFamily::Ifrs => {
            for found in IFRS_REFERENCE.find_iter(content) {
                references.insert(found.as_str().trim().to_string());
            }
        }
        DocumentFamily::UsGaap => {
            for found in US_GAAP_REFERENCE.find_iter(content) {
                references.insert(found.as_str().to_uppercase().replace(' ', ""));
            }
        }
        DocumentFamily::FirmGuidance | DocumentFamily::Pipeline => {
            for found in GUIDANCE_REFERENCE.find_iter(content) {
                references.insert(found.as_str().to_string());
            }
        }
        DocumentFamily::Generic => {}
    }

    references.into_iter().collect()
}

/// Topics: section title, first two labels, and the title-cased first
/// two keywords; deduplicated, sorted, empty strings dropped.
pub fn derive_topics(section: &Section, labels: &[String], keywords: &[String]) -> Vec<String> {
    let mut topics = BTreeSet::new();

    if !section.title.is_empty() {
        topics.insert(section.title.clone());
    }
    for label in labels.iter().take(2) {
        topics.insert(label.clone());
    }
    for keyword in keywords.iter().take(2) {
        topics.insert(title_case(keyword));
    }

    topics.into_iter().filter(|topic| !topic.is_empty()).collect()
}

/// Capitalize the first letter of each alphabetic run, lowering the
/// rest ("cash-flow" -> "Cash-Flow").
pub(crate) fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alphabetic = false;

    for ch in text.chars() {
        if ch.is_alphabetic() {
            if prev_alphabetic {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            out.push(ch);
            prev_alphabetic = false;
        }
    }

    out
}

/// SHA-256 hex digest of chunk content.
fn content_hash(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Synthesize the hierarchical chunk header.
///
/// `<FAMILY_UPPER> | <section path>`, or just the family when the path
/// is empty.
fn chunk_header(family: DocumentFamily, section: &Section) -> String {
    let family_tag = family.as_str().to_uppercase();
    let path = section.path();
    if path.is_empty() {
        family_tag
    } else {
        format!("{} | {}", family_tag, path)
    }
}

/// Enrich a finalized raw chunk into a [`ProcessedChunk`].
///
/// The header is prepended before the final token count is measured;
/// that enriched count is compared against `min_tokens` and stored.
/// Returns `Ok(None)` when the chunk fails the quality floor.
#[allow(clippy::too_many_arguments)]
pub(crate) fn build_chunk(
    section: &Section,
    chunk_content: &str,
    order_index: usize,
    family: DocumentFamily,
    tokenizer: &dyn Tokenizer,
    min_tokens: usize,
    keyword_top_k: usize,
) -> IngestResult<Option<ProcessedChunk>> {
    let header = chunk_header(family, section);
    let enriched_content = format!("{}\n\n{}", header, chunk_content)
        .trim()
        .to_string();
    let enriched_tokens = tokenizer.count(&enriched_content)?;

    if enriched_tokens < min_tokens {
        tracing::debug!(
            "Dropping chunk below quality floor ({} < {} tokens) in section '{}'",
            enriched_tokens,
            min_tokens,
            section.identifier
        );
        return Ok(None);
    }

    let chunk_labels = classify_chunk_labels(chunk_content);
    let keywords = extract_keywords(chunk_content, keyword_top_k);
    let references = extract_references(chunk_content, family);
    let topics = derive_topics(section, &chunk_labels, &keywords);
    let content_hash = content_hash(&enriched_content);

    Ok(Some(ProcessedChunk {
        tokens: enriched_tokens,
        chunk_order_index: order_index,
        metadata: ChunkMetadata {
            document_type: family.as_str().to_string(),
            section_id: section.identifier.clone(),
            section_title: section.title.clone(),
            section_path: section.path(),
            section_level: section.level,
            chunk_labels,
            topics,
            keywords,
            references,
            content_hash,
        },
        content: enriched_content,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::WhitespaceTokenizer;

    #[test]
    fn test_labels_sorted_and_deduplicated() {
        let labels = classify_chunk_labels(
            "The entity shall provide disclosure of the objective of this procedure.",
        );
        assert_eq!(
            labels,
            vec![
                "Disclosure".to_string(),
                "Principle".to_string(),
                "Procedure".to_string(),
                "Requirement".to_string(),
            ]
        );
    }

    #[test]
    fn test_labels_default_to_general() {
        assert_eq!(
            classify_chunk_labels("nothing normative in here"),
            vec!["General".to_string()]
        );
    }

    #[test]
    fn test_keywords_ranked_by_frequency() {
        let content = "asset asset asset liability liability equity";
        let keywords = extract_keywords(content, 8);
        assert_eq!(keywords, vec!["asset", "liability", "equity"]);
    }

    #[test]
    fn test_keyword_ties_break_by_first_seen() {
        let content = "zebra apple zebra apple";
        let keywords = extract_keywords(content, 8);
        assert_eq!(keywords, vec!["zebra", "apple"]);
    }

    #[test]
    fn test_keywords_filter_stopwords_and_short_words() {
        let content = "the entity and its cash flows within depreciation";
        let keywords = extract_keywords(content, 8);
        assert!(!keywords.contains(&"the".to_string()));
        assert!(!keywords.contains(&"and".to_string()));
        // "its" is both short and a stopword
        assert!(!keywords.contains(&"its".to_string()));
        assert!(keywords.contains(&"entity".to_string()));
        assert!(keywords.contains(&"depreciation".to_string()));
    }

    #[test]
    fn test_keywords_bounded_by_top_k() {
        let content = "alpha bravo charlie delta echo foxtrot golf hotel india juliett";
        let keywords = extract_keywords(content, 3);
        assert_eq!(keywords.len(), 3);
    }

    #[test]
    fn test_ifrs_references() {
        let content = "See IAS 16.30 and IFRS 15 for details. IAS 16.30 repeats.";
        let references = extract_references(content, DocumentFamily::Ifrs);
        assert_eq!(references, vec!["IAS 16.30".to_string(), "IFRS 15".to_string()]);
    }

    #[test]
    fn test_us_gaap_references_normalized() {
        let content = "Refer to asc 606-10 and ASC 842.";
        let references = extract_references(content, DocumentFamily::UsGaap);
        assert_eq!(references, vec!["ASC606-10".to_string(), "ASC842".to_string()]);
    }

    #[test]
    fn test_guidance_references() {
        let content = "Follow FG-123 then FG-7.";
        let references = extract_references(content, DocumentFamily::FirmGuidance);
        assert_eq!(references, vec!["FG-123".to_string(), "FG-7".to_string()]);
    }

    #[test]
    fn test_topics_combine_title_labels_keywords() {
        let section = Section::new("1.1", "Recognition", 1, vec![]);
        let labels = vec!["Principle".to_string(), "Requirement".to_string()];
        let keywords = vec!["asset".to_string(), "cash-flow".to_string()];
        let topics = derive_topics(&section, &labels, &keywords);
        assert_eq!(
            topics,
            vec![
                "Asset".to_string(),
                "Cash-Flow".to_string(),
                "Principle".to_string(),
                "Recognition".to_string(),
                "Requirement".to_string(),
            ]
        );
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("cash-flow"), "Cash-Flow");
        assert_eq!(title_case("FIELD WORK"), "Field Work");
    }

    #[test]
    fn test_build_chunk_header_and_threshold() {
        let section = Section::new("1.1", "Recognition", 1, vec!["IAS 16".to_string()]);
        let tokenizer = WhitespaceTokenizer;

        let chunk = build_chunk(
            &section,
            "An asset shall be recognised when future benefits are probable.",
            0,
            DocumentFamily::Ifrs,
            &tokenizer,
            5,
            8,
        )
        .unwrap()
        .expect("chunk should pass the floor");

        assert!(chunk
            .content
            .starts_with("IFRS_IAS | IAS 16 > Recognition\n\n"));
        assert_eq!(chunk.tokens, tokenizer.count(&chunk.content).unwrap());
        assert_eq!(chunk.metadata.section_path, "IAS 16 > Recognition");
        assert_eq!(chunk.metadata.content_hash.len(), 64);
    }

    #[test]
    fn test_build_chunk_rejects_below_floor() {
        let section = Section::new("intro", "Introduction", 0, vec![]);
        let tokenizer = WhitespaceTokenizer;

        let rejected = build_chunk(
            &section,
            "too small",
            0,
            DocumentFamily::Ifrs,
            &tokenizer,
            40,
            8,
        )
        .unwrap();
        assert!(rejected.is_none());
    }
}
