//! Configuration management for the standards ingestion engine.
//!
//! This module handles loading and merging configuration from multiple
//! sources: config files (YAML), environment variables, and built-in
//! defaults. All chunking tunables live here so that embedding callers
//! can construct the engine from a single struct.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{IngestError, IngestResult};

/// Tunables for the segmentation and chunking engine.
///
/// The defaults mirror the generic ingestion pipeline this engine is
/// substituted into: 1200-token chunks with a 40-token quality floor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Target chunk size in tokens
    #[serde(default = "default_chunk_token_size")]
    pub chunk_token_size: usize,

    /// Overlap between chunks in tokens.
    ///
    /// Accepted for drop-in parity with a generic chunker; the
    /// section-respecting algorithm never produces overlapping chunks,
    /// so this value is not read by it.
    #[serde(default = "default_chunk_overlap_token_size")]
    pub chunk_overlap_token_size: usize,

    /// Minimum enriched token count for a chunk to be kept
    #[serde(default = "default_min_chunk_tokens")]
    pub min_chunk_tokens: usize,

    /// Number of keywords extracted per chunk
    #[serde(default = "default_keyword_top_k")]
    pub keyword_top_k: usize,

    /// Log level override (e.g., "debug", "info")
    #[serde(default)]
    pub log_level: Option<String>,

    /// Disable colored log output
    #[serde(default)]
    pub no_color: bool,
}

fn default_chunk_token_size() -> usize {
    1200
}

fn default_chunk_overlap_token_size() -> usize {
    100
}

fn default_min_chunk_tokens() -> usize {
    40
}

fn default_keyword_top_k() -> usize {
    8
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            chunk_token_size: default_chunk_token_size(),
            chunk_overlap_token_size: default_chunk_overlap_token_size(),
            min_chunk_tokens: default_min_chunk_tokens(),
            keyword_top_k: default_keyword_top_k(),
            log_level: None,
            no_color: false,
        }
    }
}

impl IngestConfig {
    /// Load configuration from a YAML file, then apply environment
    /// variable overrides.
    ///
    /// Missing files are not an error: defaults are used so embedding
    /// callers can run without any config on disk.
    pub fn load(path: &Path) -> IngestResult<Self> {
        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(path)?;
            serde_yaml::from_str(&raw)?
        } else {
            Self::default()
        };

        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply `STANDARDS_*` environment variable overrides in place.
    fn apply_env_overrides(&mut self) -> IngestResult<()> {
        if let Some(value) = read_env_usize("STANDARDS_CHUNK_TOKEN_SIZE")? {
            self.chunk_token_size = value;
        }
        if let Some(value) = read_env_usize("STANDARDS_CHUNK_OVERLAP_TOKEN_SIZE")? {
            self.chunk_overlap_token_size = value;
        }
        if let Some(value) = read_env_usize("STANDARDS_MIN_CHUNK_TOKENS")? {
            self.min_chunk_tokens = value;
        }
        if let Ok(level) = std::env::var("STANDARDS_LOG_LEVEL") {
            self.log_level = Some(level);
        }
        Ok(())
    }
}

fn read_env_usize(name: &str) -> IngestResult<Option<usize>> {
    match std::env::var(name) {
        Ok(raw) => {
            let parsed = raw
                .parse::<usize>()
                .map_err(|e| IngestError::Config(format!("Invalid {}: {}", name, e)))?;
            Ok(Some(parsed))
        }
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = IngestConfig::default();
        assert_eq!(config.chunk_token_size, 1200);
        assert_eq!(config.chunk_overlap_token_size, 100);
        assert_eq!(config.min_chunk_tokens, 40);
        assert_eq!(config.keyword_top_k, 8);
    }

    #[test]
    fn test_parse_partial_yaml() {
        let yaml = "chunk_token_size: 512\nmin_chunk_tokens: 20\n";
        let config: IngestConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.chunk_token_size, 512);
        assert_eq!(config.min_chunk_tokens, 20);
        // Unspecified fields fall back to defaults
        assert_eq!(config.keyword_top_k, 8);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = IngestConfig::load(Path::new("/nonexistent/standards.yaml")).unwrap();
        assert_eq!(config.chunk_token_size, 1200);
    }
}
