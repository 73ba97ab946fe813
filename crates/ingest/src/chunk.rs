//! Greedy token-budgeted chunk building.
//!
//! Walks sections in order and accumulates paragraphs per section
//! until the token budget is met or the section ends. Sections are
//! never merged across boundaries, so no chunk crosses a section —
//! the chunk header stays accurate for the whole chunk. The greedy
//! accumulation has no lookahead and produces no overlap.

use standards_core::IngestResult;

use crate::enrich;
use crate::paragraphs::split_paragraphs;
use crate::tokenizer::Tokenizer;
use crate::types::{DocumentFamily, ProcessedChunk, Section};

/// Quality floor for pipeline diagram chunks. Diagram narratives are
/// short by nature, so they get a lower floor than prose documents.
const PIPELINE_MIN_CHUNK_TOKENS: usize = 10;

/// Build enriched chunks from parsed sections.
///
/// Order indices are monotonic across the whole document, not reset
/// per section. Candidates failing the quality floor are silently
/// dropped and consume no index.
pub fn build_chunks(
    sections: &[Section],
    family: DocumentFamily,
    tokenizer: &dyn Tokenizer,
    chunk_token_size: usize,
    min_chunk_tokens: usize,
    keyword_top_k: usize,
) -> IngestResult<Vec<ProcessedChunk>> {
    let min_tokens = if family == DocumentFamily::Pipeline {
        PIPELINE_MIN_CHUNK_TOKENS
    } else {
        min_chunk_tokens
    };

    let mut chunks = Vec::new();
    let mut order_index = 0;

    for section in sections {
        let mut buffer: Vec<String> = Vec::new();

        for paragraph in split_paragraphs(&section.text()) {
            if paragraph.is_empty() {
                continue;
            }
            buffer.push(paragraph);

            let candidate = buffer.join("\n\n");
            if tokenizer.count(&candidate)? >= chunk_token_size {
                if let Some(chunk) = enrich::build_chunk(
                    section,
                    &candidate,
                    order_index,
                    family,
                    tokenizer,
                    min_tokens,
                    keyword_top_k,
                )? {
                    chunks.push(chunk);
                    order_index += 1;
                }
                buffer.clear();
            }
        }

        // Flush the remainder; sections never merge into each other
        if !buffer.is_empty() {
            let candidate = buffer.join("\n\n");
            if let Some(chunk) = enrich::build_chunk(
                section,
                &candidate,
                order_index,
                family,
                tokenizer,
                min_tokens,
                keyword_top_k,
            )? {
                chunks.push(chunk);
                order_index += 1;
            }
        }
    }

    Ok(chunks)
}
