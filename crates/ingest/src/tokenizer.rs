//! Tokenizer capability seam.
//!
//! The engine never tokenizes text itself; it measures chunk sizes
//! through this trait. Real deployments wrap their embedding model's
//! tokenizer; tests use the deterministic [`WhitespaceTokenizer`].

use standards_core::IngestResult;

/// External tokenizer capability.
///
/// Only the length of the encoding is used by the engine. Failures
/// propagate unmodified to the caller, who owns retry policy for this
/// dependency.
pub trait Tokenizer {
    /// Encode text into an ordered token sequence.
    fn encode(&self, text: &str) -> IngestResult<Vec<String>>;

    /// Number of tokens in `text`.
    fn count(&self, text: &str) -> IngestResult<usize> {
        Ok(self.encode(text)?.len())
    }
}

/// Whitespace-splitting tokenizer.
///
/// Deterministic and dependency-free; suitable for tests and for
/// callers that only need approximate token budgets.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn encode(&self, text: &str) -> IngestResult<Vec<String>> {
        Ok(text.split_whitespace().map(str::to_string).collect())
    }
}
