//! Diagram adapter for mermaid pipeline specs.
//!
//! Understands two line shapes: node declarations `id[Label]` and edge
//! declarations `src --> dst` with an optional `|label|` after the
//! arrow. Produces a natural-language edge list for chunking and a
//! light graph summary for document-level metadata.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::GraphEdge;

static NODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*([A-Za-z0-9_]+)\[(.+?)\]").unwrap());

static EDGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([A-Za-z0-9_]+)\s*-+>\s*(?:\|([^|]+)\|\s*)?([A-Za-z0-9_]+)").unwrap()
});

/// A raw edge between node ids, before label resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RawEdge {
    source: String,
    label: Option<String>,
    target: String,
}

/// Parsed mermaid diagram: declared nodes (in declaration order) and
/// edges (in document order).
#[derive(Debug, Clone, Default)]
pub struct MermaidGraph {
    nodes: Vec<(String, String)>,
    edges: Vec<RawEdge>,
}

/// Parse the node and edge declarations of a diagram.
///
/// Lines matching neither shape (e.g. the `graph TB` preamble) are
/// ignored.
pub fn parse(content: &str) -> MermaidGraph {
    let mut graph = MermaidGraph::default();

    for line in content.lines() {
        if let Some(caps) = NODE.captures(line) {
            graph
                .nodes
                .push((caps[1].trim().to_string(), caps[2].trim().to_string()));
            continue;
        }

        if let Some(caps) = EDGE.captures(line) {
            graph.edges.push(RawEdge {
                source: caps[1].trim().to_string(),
                label: caps.get(2).map(|m| m.as_str().trim().to_string()),
                target: caps[3].trim().to_string(),
            });
        }
    }

    graph
}

impl MermaidGraph {
    /// Resolve a node id to its declared label, or the id itself.
    fn label_for<'a>(&'a self, id: &'a str) -> &'a str {
        self.nodes
            .iter()
            .find(|(node_id, _)| node_id == id)
            .map(|(_, label)| label.as_str())
            .unwrap_or(id)
    }

    /// Natural-language rendering of the diagram.
    ///
    /// One line per edge (`Start -- go --> End`, or `Start --> End`
    /// when unlabeled), followed by any declared node that appears in
    /// no edge, rendered as its bare label.
    pub fn to_narrative(&self) -> String {
        let mut lines: Vec<String> = Vec::new();

        for edge in &self.edges {
            let source = self.label_for(&edge.source);
            let target = self.label_for(&edge.target);
            match &edge.label {
                Some(label) => lines.push(format!("{} -- {} --> {}", source, label, target)),
                None => lines.push(format!("{} --> {}", source, target)),
            }
        }

        for (node_id, node_label) in &self.nodes {
            let connected = self
                .edges
                .iter()
                .any(|edge| &edge.source == node_id || &edge.target == node_id);
            if !connected {
                lines.push(node_label.clone());
            }
        }

        lines.join("\n")
    }

    /// Sorted distinct node labels, if any nodes were declared.
    pub fn node_labels(&self) -> Option<Vec<String>> {
        if self.nodes.is_empty() {
            return None;
        }
        let mut labels: Vec<String> = self.nodes.iter().map(|(_, label)| label.clone()).collect();
        labels.sort();
        labels.dedup();
        Some(labels)
    }

    /// Edges with ids resolved to labels, if any edges were declared.
    /// Unlabeled edges carry an empty label string.
    pub fn resolved_edges(&self) -> Option<Vec<GraphEdge>> {
        if self.edges.is_empty() {
            return None;
        }
        Some(
            self.edges
                .iter()
                .map(|edge| GraphEdge {
                    source: self.label_for(&edge.source).to_string(),
                    target: self.label_for(&edge.target).to_string(),
                    label: edge.label.clone().unwrap_or_default(),
                })
                .collect(),
        )
    }
}
