//! # edgelens
//!
//! Edge-type visibility filtering for node-link graph views.
//!
//! Given graph snapshots whose edges carry a `type` attribute, edgelens
//! decides which edges and nodes should be shown according to a small
//! persisted configuration: a whitelist/blacklist of edge types plus an
//! optional isolated-node pass that hides nodes left with no visible
//! connections.
//!
//! The filter runs in two strict phases — edges first, then node
//! visibility derived from the *post-filter* edge state — and recomputes
//! everything from scratch on each invocation, so it stays correct no
//! matter how the host mutates the graph between runs.
//!
//! ## Quick Start
//!
//! ```rust
//! use edgelens::{apply_filter, FilterConfig, FilterMode, GraphView, MemoryGraphView};
//!
//! let mut view = MemoryGraphView::new();
//! let a = view.add_node("a");
//! let b = view.add_node("b");
//! view.add_edge("e1", a, b, Some("parent"));
//!
//! let config = FilterConfig {
//!     mode: FilterMode::Exclude,
//!     edge_types: "parent".to_string(),
//!     filter_enabled: true,
//!     hide_isolated: true,
//! };
//! apply_filter(&config, &mut view);
//!
//! let e1 = view.edge("e1").unwrap();
//! assert!(!view.edge_visible(e1));
//! assert!(!view.node_visible(a)); // no visible edges left
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod session;
pub mod storage;
pub mod surface;

// Re-exports for convenience
pub use error::{EdgeLensError, Result};

pub use config::{FilterConfig, FilterMode};
pub use graph::{
    apply_filter, apply_filter_all, reset, EdgeId, GraphDocument, GraphProvider, GraphView,
    MemoryGraphView, NodeId,
};
pub use session::FilterSession;
pub use storage::{JsonSettingsStore, MemorySettingsStore, SettingsStore};
pub use surface::{NoPrompt, Notifier, NullNotifier, PromptSurface};

#[cfg(test)]
mod tests {
    use super::*;

    struct VecProvider {
        views: Vec<MemoryGraphView>,
    }

    impl GraphProvider for VecProvider {
        fn active_graphs(&mut self) -> Vec<Option<&mut dyn GraphView>> {
            self.views
                .iter_mut()
                .map(|v| Some(v as &mut dyn GraphView))
                .collect()
        }
    }

    struct OnePrompt(Option<String>);

    impl PromptSurface for OnePrompt {
        fn prompt_for_text(&mut self, _label: &str) -> Option<String> {
            self.0.take()
        }
    }

    /// A small family tree: root connects to two children via "parent"
    /// edges, the children to each other via "sibling", and one note node
    /// hangs off a child via a typeless edge.
    fn family_graph() -> MemoryGraphView {
        let mut view = MemoryGraphView::new();
        let root = view.add_node("root");
        let left = view.add_node("left");
        let right = view.add_node("right");
        let note = view.add_node("note");
        view.add_edge("p1", root, left, Some("parent"));
        view.add_edge("p2", root, right, Some("parent"));
        view.add_edge("s1", left, right, Some("sibling"));
        view.add_edge("n1", right, note, None);
        view
    }

    fn edge_visible(view: &MemoryGraphView, id: &str) -> bool {
        view.edge_visible(view.edge(id).unwrap())
    }

    fn node_visible(view: &MemoryGraphView, id: &str) -> bool {
        view.node_visible(view.node(id).unwrap())
    }

    #[test]
    fn full_command_cycle_over_multiple_graphs() {
        let mut store = MemorySettingsStore::new();
        let mut provider = VecProvider {
            views: vec![family_graph(), family_graph()],
        };
        let mut notifier = NullNotifier;

        // Hide "parent" edges everywhere and collapse isolated nodes.
        let mut prompt = OnePrompt(Some("parent".to_string()));
        let mut session =
            FilterSession::start(&mut store, &mut provider, &mut prompt, &mut notifier).unwrap();
        session.hide_types().unwrap();
        session.hide_isolated_nodes().unwrap();
        drop(session);

        for view in &provider.views {
            assert!(!edge_visible(view, "p1"));
            assert!(!edge_visible(view, "p2"));
            assert!(edge_visible(view, "s1"));
            assert!(edge_visible(view, "n1"));
            // root lost both of its edges; everyone else kept one.
            assert!(!node_visible(view, "root"));
            assert!(node_visible(view, "left"));
            assert!(node_visible(view, "right"));
            assert!(node_visible(view, "note"));
        }

        // Flip to whitelist mode via a fresh session over the same store:
        // show only "parent", which isolates the note node instead.
        let mut prompt = OnePrompt(Some("parent".to_string()));
        let mut session =
            FilterSession::start(&mut store, &mut provider, &mut prompt, &mut notifier).unwrap();
        session.show_only_types().unwrap();
        drop(session);

        for view in &provider.views {
            assert!(edge_visible(view, "p1"));
            assert!(!edge_visible(view, "s1"));
            assert!(!edge_visible(view, "n1"));
            // root came back even though the previous run hid it.
            assert!(node_visible(view, "root"));
            assert!(!node_visible(view, "note"));
        }

        // Back to showing everything.
        let mut prompt = OnePrompt(None);
        let mut session =
            FilterSession::start(&mut store, &mut provider, &mut prompt, &mut notifier).unwrap();
        session.show_all_edges().unwrap();
        session.show_all_nodes().unwrap();
        drop(session);

        for view in &provider.views {
            for id in ["p1", "p2", "s1", "n1"] {
                assert!(edge_visible(view, id));
            }
            for id in ["root", "left", "right", "note"] {
                assert!(node_visible(view, id));
            }
        }
    }

    #[test]
    fn settings_persist_across_sessions_via_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        {
            let mut store = JsonSettingsStore::new(path.clone());
            let mut provider = VecProvider {
                views: vec![family_graph()],
            };
            let mut prompt = OnePrompt(Some("sibling".to_string()));
            let mut notifier = NullNotifier;
            let mut session =
                FilterSession::start(&mut store, &mut provider, &mut prompt, &mut notifier)
                    .unwrap();
            session.hide_types().unwrap();
        }

        // A brand new session over a pristine graph picks the filter up
        // from disk during start.
        let mut store = JsonSettingsStore::new(path);
        let mut provider = VecProvider {
            views: vec![family_graph()],
        };
        let mut prompt = OnePrompt(None);
        let mut notifier = NullNotifier;
        let session =
            FilterSession::start(&mut store, &mut provider, &mut prompt, &mut notifier).unwrap();
        assert_eq!(session.config().edge_types, "sibling");
        assert_eq!(session.config().mode, FilterMode::Exclude);
        drop(session);

        assert!(!edge_visible(&provider.views[0], "s1"));
        assert!(edge_visible(&provider.views[0], "p1"));
    }

    #[test]
    fn document_round_trip_through_engine() {
        let json = r#"{
            "nodes": [{"id": "a"}, {"id": "b"}, {"id": "c"}],
            "edges": [
                {"id": "e1", "source": "a", "target": "b", "type": "ref"},
                {"id": "e2", "source": "b", "target": "c", "type": "link"}
            ]
        }"#;
        let doc: GraphDocument = serde_json::from_str(json).unwrap();
        let mut view = MemoryGraphView::from_document(&doc).unwrap();

        let config = FilterConfig {
            mode: FilterMode::Include,
            edge_types: "ref".to_string(),
            filter_enabled: true,
            hide_isolated: true,
        };
        apply_filter(&config, &mut view);

        let out = view.to_document();
        let e1 = out.edges.iter().find(|e| e.id == "e1").unwrap();
        let e2 = out.edges.iter().find(|e| e.id == "e2").unwrap();
        assert!(e1.visible);
        assert!(!e2.visible);
        let c = out.nodes.iter().find(|n| n.id == "c").unwrap();
        assert!(!c.visible);
    }
}
