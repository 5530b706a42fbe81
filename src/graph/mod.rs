//! Graph module: element types, access seams, and the filter engine.

pub mod engine;
pub mod types;
pub mod view;

pub use engine::{apply_filter, apply_filter_all, reset};
pub use types::{EdgeData, EdgeRecord, GraphDocument, NodeData, NodeRecord};
pub use view::{EdgeId, GraphProvider, GraphView, MemoryGraphView, NodeId};
