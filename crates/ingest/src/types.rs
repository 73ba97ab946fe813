//! Segmentation engine type definitions.

use serde::{Deserialize, Serialize};

/// Document families handled by the specialised ingestion pipeline.
///
/// `Generic` is a sentinel meaning "not handled by this engine"; the
/// caller is expected to fall back to its generic chunking path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFamily {
    /// IFRS / IAS international accounting standards
    #[serde(rename = "ifrs_ias")]
    Ifrs,

    /// US GAAP accounting standards codification
    UsGaap,

    /// Internal firm guidance and methodology documents
    FirmGuidance,

    /// Ingestion pipeline diagram specs (mermaid)
    #[serde(rename = "standards_pipeline")]
    Pipeline,

    /// Not recognised; handled by the generic pipeline instead
    Generic,
}

impl DocumentFamily {
    /// Stable wire value used in metadata and chunk headers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ifrs => "ifrs_ias",
            Self::UsGaap => "us_gaap",
            Self::FirmGuidance => "firm_guidance",
            Self::Pipeline => "standards_pipeline",
            Self::Generic => "generic",
        }
    }
}

/// A logical section extracted from a source document.
///
/// Sections form an implicit tree: each node stores its own level and
/// the titles of its ancestors (top-down). Content lines are appended
/// only while the section is the parser's current one; once a later
/// section starts, the node is never mutated again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Identifier, unique within a document (e.g. "IAS 16", "606-10")
    pub identifier: String,

    /// Human-readable heading
    pub title: String,

    /// Nesting depth, 0 = top-level
    pub level: usize,

    /// Raw content lines in document order
    pub content: Vec<String>,

    /// Ancestor titles, top-down
    pub parent_titles: Vec<String>,
}

impl Section {
    /// Create an empty section.
    pub fn new(
        identifier: impl Into<String>,
        title: impl Into<String>,
        level: usize,
        parent_titles: Vec<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            title: title.into(),
            level,
            content: Vec::new(),
            parent_titles,
        }
    }

    /// Append a content line, dropping trailing whitespace and blanks.
    pub fn add_line(&mut self, line: &str) {
        let line = line.trim_end();
        if !line.is_empty() {
            self.content.push(line.to_string());
        }
    }

    /// Content lines joined and trimmed.
    pub fn text(&self) -> String {
        self.content.join("\n").trim().to_string()
    }

    /// Ancestor titles plus own title joined by " > ", empty segments
    /// dropped.
    pub fn path(&self) -> String {
        self.parent_titles
            .iter()
            .chain(std::iter::once(&self.title))
            .map(|title| title.trim())
            .filter(|title| !title.is_empty())
            .collect::<Vec<_>>()
            .join(" > ")
    }
}

/// Metadata attached to every processed chunk, exposed to the
/// downstream index as filterable attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkMetadata {
    /// Document family wire value
    pub document_type: String,

    /// Owning section identifier
    pub section_id: String,

    /// Owning section title
    pub section_title: String,

    /// Hierarchical section path ("Parent > Child")
    pub section_path: String,

    /// Owning section nesting level
    pub section_level: usize,

    /// Normative labels (never empty; defaults to ["General"])
    pub chunk_labels: Vec<String>,

    /// Derived topics, sorted
    pub topics: Vec<String>,

    /// Extracted keywords, most frequent first
    pub keywords: Vec<String>,

    /// Family-specific citations, sorted and deduplicated
    pub references: Vec<String>,

    /// SHA-256 hex digest of the enriched content
    pub content_hash: String,
}

/// Structured representation of a processed chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedChunk {
    /// Enriched content (hierarchical header + raw chunk text)
    pub content: String,

    /// Token count of the enriched content
    pub tokens: usize,

    /// Position within the document (0-indexed, no gaps)
    pub chunk_order_index: usize,

    /// Chunk-level metadata
    pub metadata: ChunkMetadata,
}

/// An edge of a pipeline diagram, resolved to node labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    /// Source node label
    pub source: String,

    /// Target node label
    pub target: String,

    /// Edge label (empty string when the edge is unlabeled)
    pub label: String,
}

/// Document-level metadata recorded alongside the chunks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Document family wire value
    pub document_type: String,

    /// Number of structured sections found
    pub section_count: usize,

    /// Ingestion strategy tag for downstream filtering
    pub ingestion_strategy: String,

    /// Source identifier (filename), when provided
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,

    /// Distinct diagram node labels, sorted (Pipeline documents only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph_nodes: Option<Vec<String>>,

    /// Diagram edges (Pipeline documents only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph_edges: Option<Vec<GraphEdge>>,
}

/// Return payload for a fully processed document.
///
/// Constructed once per input as an atomic value; the engine retains no
/// state between documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedDocument {
    /// Document family
    pub document_type: DocumentFamily,

    /// Chunks in document order
    pub chunks: Vec<ProcessedChunk>,

    /// Document-level metadata
    pub document_metadata: DocumentMetadata,
}
