//! Graph access seams and the in-memory view.
//!
//! The engine never sees a concrete graph type. It works against
//! [`GraphView`], the visibility surface of one rendered snapshot, and the
//! session enumerates snapshots through [`GraphProvider`].
//! [`MemoryGraphView`] is the petgraph-backed implementation used by the
//! CLI and by tests.

use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

use super::types::{EdgeData, EdgeRecord, GraphDocument, NodeData, NodeRecord};
use crate::error::{EdgeLensError, Result};

/// Opaque handle to a node within one graph view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

/// Opaque handle to an edge within one graph view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeId(u32);

/// The visibility surface of one rendered graph snapshot.
///
/// The filter only reads edge types and incident-edge structure, and only
/// writes visibility flags. It never mutates topology.
pub trait GraphView {
    fn node_ids(&self) -> Vec<NodeId>;
    fn edge_ids(&self) -> Vec<EdgeId>;

    /// The edge's type attribute, exactly as stored (no trimming).
    fn edge_type(&self, edge: EdgeId) -> Option<&str>;
    fn edge_visible(&self, edge: EdgeId) -> bool;
    fn set_edge_visible(&mut self, edge: EdgeId, visible: bool);

    fn node_visible(&self, node: NodeId) -> bool;
    fn set_node_visible(&mut self, node: NodeId, visible: bool);

    /// Edges incident to `node`, regardless of their current visibility.
    fn connected_edges(&self, node: NodeId) -> Vec<EdgeId>;
}

/// Source of the currently active graph snapshots.
pub trait GraphProvider {
    /// Whether the provider's visualization surface is reachable at all.
    fn is_available(&self) -> bool {
        true
    }

    /// The active snapshots. Entries may be `None` when a snapshot exists
    /// in the provider's bookkeeping but has no accessible surface; such
    /// entries are skipped without aborting the rest.
    fn active_graphs(&mut self) -> Vec<Option<&mut dyn GraphView>>;
}

/// In-memory graph view backed by an undirected petgraph.
pub struct MemoryGraphView {
    graph: UnGraph<NodeData, EdgeData>,
    /// Index: node id string -> node index.
    node_index: HashMap<String, NodeIndex>,
}

impl MemoryGraphView {
    pub fn new() -> Self {
        Self {
            graph: UnGraph::new_undirected(),
            node_index: HashMap::new(),
        }
    }

    /// Add a node. Adding an id twice returns the existing handle.
    pub fn add_node(&mut self, id: impl Into<String>) -> NodeId {
        let id = id.into();
        if let Some(&idx) = self.node_index.get(&id) {
            return NodeId(idx.index() as u32);
        }
        let idx = self.graph.add_node(NodeData::new(id.clone()));
        self.node_index.insert(id, idx);
        NodeId(idx.index() as u32)
    }

    /// Add an edge between two existing nodes.
    pub fn add_edge(
        &mut self,
        id: impl Into<String>,
        source: NodeId,
        target: NodeId,
        edge_type: Option<&str>,
    ) -> EdgeId {
        let data = EdgeData::new(id, edge_type.map(str::to_string));
        let idx = self
            .graph
            .add_edge(NodeIndex::new(source.0 as usize), NodeIndex::new(target.0 as usize), data);
        EdgeId(idx.index() as u32)
    }

    /// Look up a node handle by document id.
    pub fn node(&self, id: &str) -> Option<NodeId> {
        self.node_index.get(id).map(|idx| NodeId(idx.index() as u32))
    }

    /// Look up an edge handle by document id.
    pub fn edge(&self, id: &str) -> Option<EdgeId> {
        self.graph
            .edge_indices()
            .find(|&idx| self.graph[idx].id == id)
            .map(|idx| EdgeId(idx.index() as u32))
    }

    /// Build a view from its wire form. Fails on duplicate node ids and on
    /// edges referencing undeclared nodes; those are document defects, not
    /// filterable states.
    pub fn from_document(doc: &GraphDocument) -> Result<Self> {
        let mut view = Self::new();
        for node in &doc.nodes {
            if view.node_index.contains_key(&node.id) {
                return Err(EdgeLensError::DuplicateNode(node.id.clone()));
            }
            let handle = view.add_node(node.id.clone());
            view.set_node_visible(handle, node.visible);
        }
        for edge in &doc.edges {
            let source = view.node(&edge.source).ok_or_else(|| EdgeLensError::UnknownNode {
                edge: edge.id.clone(),
                node: edge.source.clone(),
            })?;
            let target = view.node(&edge.target).ok_or_else(|| EdgeLensError::UnknownNode {
                edge: edge.id.clone(),
                node: edge.target.clone(),
            })?;
            let handle = view.add_edge(edge.id.clone(), source, target, edge.edge_type.as_deref());
            view.set_edge_visible(handle, edge.visible);
        }
        Ok(view)
    }

    /// Dump the view back to its wire form, visibility flags included.
    pub fn to_document(&self) -> GraphDocument {
        let nodes = self
            .graph
            .node_indices()
            .map(|idx| {
                let data = &self.graph[idx];
                NodeRecord {
                    id: data.id.clone(),
                    visible: data.visible,
                }
            })
            .collect();
        let edges = self
            .graph
            .edge_indices()
            .map(|idx| {
                let data = &self.graph[idx];
                let (a, b) = self
                    .graph
                    .edge_endpoints(idx)
                    .expect("edge index from edge_indices");
                EdgeRecord {
                    id: data.id.clone(),
                    source: self.graph[a].id.clone(),
                    target: self.graph[b].id.clone(),
                    edge_type: data.edge_type.clone(),
                    visible: data.visible,
                }
            })
            .collect();
        GraphDocument { nodes, edges }
    }
}

impl Default for MemoryGraphView {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphView for MemoryGraphView {
    fn node_ids(&self) -> Vec<NodeId> {
        self.graph
            .node_indices()
            .map(|idx| NodeId(idx.index() as u32))
            .collect()
    }

    fn edge_ids(&self) -> Vec<EdgeId> {
        self.graph
            .edge_indices()
            .map(|idx| EdgeId(idx.index() as u32))
            .collect()
    }

    fn edge_type(&self, edge: EdgeId) -> Option<&str> {
        self.graph[EdgeIndex::new(edge.0 as usize)].edge_type.as_deref()
    }

    fn edge_visible(&self, edge: EdgeId) -> bool {
        self.graph[EdgeIndex::new(edge.0 as usize)].visible
    }

    fn set_edge_visible(&mut self, edge: EdgeId, visible: bool) {
        self.graph[EdgeIndex::new(edge.0 as usize)].visible = visible;
    }

    fn node_visible(&self, node: NodeId) -> bool {
        self.graph[NodeIndex::new(node.0 as usize)].visible
    }

    fn set_node_visible(&mut self, node: NodeId, visible: bool) {
        self.graph[NodeIndex::new(node.0 as usize)].visible = visible;
    }

    fn connected_edges(&self, node: NodeId) -> Vec<EdgeId> {
        self.graph
            .edges(NodeIndex::new(node.0 as usize))
            .map(|edge| EdgeId(edge.id().index() as u32))
            .collect()
    }
}
