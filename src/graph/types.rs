//! Element data and the serialized graph document.
//!
//! Nodes and edges carry only what the filter needs: an id for reporting,
//! the edge's `type` attribute, and the visibility flag the engine writes.

use serde::{Deserialize, Serialize};

/// Data stored in a graph node.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// Stable identifier within the document.
    pub id: String,
    /// Whether the node is currently shown.
    pub visible: bool,
}

impl NodeData {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            visible: true,
        }
    }
}

/// Data stored on a graph edge.
#[derive(Debug, Clone)]
pub struct EdgeData {
    /// Stable identifier within the document.
    pub id: String,
    /// The relation kind, e.g. "parent" or "child". May be absent.
    pub edge_type: Option<String>,
    /// Whether the edge is currently shown.
    pub visible: bool,
}

impl EdgeData {
    pub fn new(id: impl Into<String>, edge_type: Option<String>) -> Self {
        Self {
            id: id.into(),
            edge_type,
            visible: true,
        }
    }
}

/// Wire form of a graph snapshot: a flat node list plus an edge list
/// referencing nodes by id. This is what the CLI reads and writes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphDocument {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub id: String,
    pub source: String,
    pub target: String,
    /// The edge's type attribute. Omitted entirely when absent.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub edge_type: Option<String>,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}
