//! Standards Ingest Core Library
//!
//! This crate provides the foundational utilities for the standards
//! ingestion engine:
//! - Error handling (`IngestError`, `IngestResult`)
//! - Logging infrastructure
//! - Configuration management

pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use config::IngestConfig;
pub use error::{IngestError, IngestResult};
