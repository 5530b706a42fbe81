//! The visibility filter engine.
//!
//! Two strict phases per snapshot: edge visibility is decided first from
//! the configuration alone, then node visibility is derived from the
//! post-filter edge state. The engine keeps no state between calls; every
//! invocation recomputes both phases from scratch, which makes it correct
//! under arbitrary external graph mutation and idempotent for an unchanged
//! configuration.

use std::collections::HashSet;
use tracing::debug;

use super::view::GraphView;
use crate::config::{FilterConfig, FilterMode};

/// Apply the configured filter to one snapshot, mutating visibility flags
/// in place.
pub fn apply_filter(config: &FilterConfig, view: &mut dyn GraphView) {
    apply_edge_phase(config, view);
    apply_node_phase(config, view);
}

/// Apply the filter to every snapshot in `graphs`.
///
/// `None` entries are snapshots with no accessible surface; they are
/// skipped without aborting the rest. Returns the number of snapshots
/// actually processed.
pub fn apply_filter_all<'a, I>(config: &FilterConfig, graphs: I) -> usize
where
    I: IntoIterator<Item = Option<&'a mut dyn GraphView>>,
{
    let mut processed = 0;
    for slot in graphs {
        match slot {
            Some(view) => {
                apply_filter(config, view);
                processed += 1;
            }
            None => debug!("skipping detached graph snapshot"),
        }
    }
    debug!(processed, "filter applied");
    processed
}

/// Force every edge and node in the snapshot visible, unconditionally.
///
/// Teardown path: when the filter feature is deactivated the host graph
/// must be left in a neutral, fully visible state.
pub fn reset(view: &mut dyn GraphView) {
    for edge in view.edge_ids() {
        view.set_edge_visible(edge, true);
    }
    for node in view.node_ids() {
        view.set_node_visible(node, true);
    }
}

/// Phase 1: decide each edge's visibility from the configuration and the
/// edge's own type attribute, nothing else.
fn apply_edge_phase(config: &FilterConfig, view: &mut dyn GraphView) {
    let edges = view.edge_ids();

    if !config.filter_enabled {
        for edge in edges {
            view.set_edge_visible(edge, true);
        }
        return;
    }

    let types = config.normalized_types();
    if types.is_empty() {
        // An active filter with an empty effective list is not a real
        // filter; treat it as "show everything".
        debug!("filter enabled but type list is empty, showing all edges");
        for edge in edges {
            view.set_edge_visible(edge, true);
        }
        return;
    }

    let listed: HashSet<&str> = types.iter().map(String::as_str).collect();
    for edge in edges {
        // Exact, case-sensitive match of the untrimmed attribute. An
        // absent or empty type never matches a non-empty token.
        let matched = view.edge_type(edge).is_some_and(|t| listed.contains(t));
        let visible = match config.mode {
            FilterMode::Include => matched,
            FilterMode::Exclude => !matched,
        };
        view.set_edge_visible(edge, visible);
    }
}

/// Phase 2: derive node visibility from the post-phase-1 edge state.
fn apply_node_phase(config: &FilterConfig, view: &mut dyn GraphView) {
    let nodes = view.node_ids();

    // Everything visible first. A node hidden by a previous run whose
    // edges are visible again must come back before re-evaluation; the
    // graph state is never assumed to be monotonic.
    for &node in &nodes {
        view.set_node_visible(node, true);
    }

    if !config.hide_isolated {
        return;
    }

    for &node in &nodes {
        let has_visible_edge = view
            .connected_edges(node)
            .into_iter()
            .any(|edge| view.edge_visible(edge));
        if !has_visible_edge {
            view.set_node_visible(node, false);
        }
    }
}
