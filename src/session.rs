//! The filter session: configuration lifecycle plus the command surface.
//!
//! A session is the explicit context object tying the pieces together —
//! the configuration, the settings store, the graph provider, and the two
//! UI seams. Every command follows the same shape: mutate the
//! configuration, persist it, echo a notice, re-run the engine. That
//! sequence is one atomic logical step; the engine never runs against a
//! half-mutated configuration.

use tracing::{debug, warn};

use crate::config::{FilterConfig, FilterMode};
use crate::error::Result;
use crate::graph::engine;
use crate::graph::view::GraphProvider;
use crate::storage::SettingsStore;
use crate::surface::{Notifier, PromptSurface};

/// One live filtering session over a set of graph snapshots.
pub struct FilterSession<'a> {
    config: FilterConfig,
    store: &'a mut dyn SettingsStore,
    provider: &'a mut dyn GraphProvider,
    prompt: &'a mut dyn PromptSurface,
    notifier: &'a mut dyn Notifier,
}

impl<'a> FilterSession<'a> {
    /// Load persisted settings (merged over defaults), then run the engine
    /// once so the graphs reflect the stored configuration immediately.
    pub fn start(
        store: &'a mut dyn SettingsStore,
        provider: &'a mut dyn GraphProvider,
        prompt: &'a mut dyn PromptSurface,
        notifier: &'a mut dyn Notifier,
    ) -> Result<Self> {
        let config = store.load()?.unwrap_or_default();
        debug!(?config, "session starting");
        let mut session = Self {
            config,
            store,
            provider,
            prompt,
            notifier,
        };
        session.run_engine();
        Ok(session)
    }

    /// The current configuration.
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    // ─── Commands ───────────────────────────────────────────────

    /// Disable filtering; every edge becomes visible.
    pub fn show_all_edges(&mut self) -> Result<()> {
        self.config.filter_enabled = false;
        self.persist_and_apply("Showing all edges")
    }

    /// Prompt for a type list and show only those types. A cancelled or
    /// blank prompt leaves configuration and graphs untouched.
    pub fn show_only_types(&mut self) -> Result<()> {
        let Some(input) = self.prompt_types("Enter edge types to show (comma-separated)") else {
            return Ok(());
        };
        self.config.mode = FilterMode::Include;
        self.config.edge_types = input.clone();
        self.config.filter_enabled = true;
        self.persist_and_apply(&format!("Showing only: {input}"))
    }

    /// Prompt for a type list and hide those types. A cancelled or blank
    /// prompt leaves configuration and graphs untouched.
    pub fn hide_types(&mut self) -> Result<()> {
        let Some(input) = self.prompt_types("Enter edge types to hide (comma-separated)") else {
            return Ok(());
        };
        self.config.mode = FilterMode::Exclude;
        self.config.edge_types = input.clone();
        self.config.filter_enabled = true;
        self.persist_and_apply(&format!("Hiding: {input}"))
    }

    /// Hide nodes with no visible connections.
    pub fn hide_isolated_nodes(&mut self) -> Result<()> {
        self.config.hide_isolated = true;
        self.persist_and_apply("Hiding isolated nodes")
    }

    /// Show all nodes again.
    pub fn show_all_nodes(&mut self) -> Result<()> {
        self.config.hide_isolated = false;
        self.persist_and_apply("Showing all nodes")
    }

    // ─── Settings-panel edits ───────────────────────────────────

    /// Set the filter mode directly.
    pub fn set_mode(&mut self, mode: FilterMode) -> Result<()> {
        self.config.mode = mode;
        self.persist_quietly()
    }

    /// Set the raw type list directly. A non-blank value switches
    /// filtering on, matching the settings-panel behavior.
    pub fn set_edge_types(&mut self, raw: &str) -> Result<()> {
        self.config.edge_types = raw.to_string();
        if !raw.trim().is_empty() {
            self.config.filter_enabled = true;
        }
        self.persist_quietly()
    }

    /// Human-readable summary of the current filter state.
    pub fn status(&self) -> String {
        if !self.config.filter_enabled {
            return "Inactive (showing all edges)".to_string();
        }
        let verb = match self.config.mode {
            FilterMode::Include => "Showing only",
            FilterMode::Exclude => "Hiding",
        };
        format!("Active: {verb} \"{}\"", self.config.edge_types)
    }

    /// Re-run the engine with the current configuration, no mutation.
    pub fn refresh(&mut self) {
        self.run_engine();
    }

    /// Teardown: leave every reachable snapshot fully visible, regardless
    /// of the configuration. No notices, no persistence.
    pub fn shutdown(&mut self) {
        if !self.provider.is_available() {
            return;
        }
        for view in self.provider.active_graphs().into_iter().flatten() {
            engine::reset(view);
        }
        debug!("session shut down, graphs reset to fully visible");
    }

    // ─── Internals ──────────────────────────────────────────────

    /// Prompt for a type list. `None` means "no change": the user
    /// cancelled, or submitted nothing but whitespace.
    fn prompt_types(&mut self, label: &str) -> Option<String> {
        let input = self.prompt.prompt_for_text(label)?;
        let input = input.trim();
        if input.is_empty() {
            debug!("prompt returned blank input, treating as cancel");
            return None;
        }
        Some(input.to_string())
    }

    fn persist_and_apply(&mut self, notice: &str) -> Result<()> {
        self.store.save(&self.config)?;
        self.notifier.notify(notice);
        self.run_engine();
        Ok(())
    }

    fn persist_quietly(&mut self) -> Result<()> {
        self.store.save(&self.config)?;
        self.run_engine();
        Ok(())
    }

    fn run_engine(&mut self) {
        if !self.provider.is_available() {
            warn!("graph provider not found, skipping filter run");
            self.notifier.notify("Graph provider not found");
            return;
        }
        let graphs = self.provider.active_graphs();
        if graphs.is_empty() {
            self.notifier.notify("No active graphs found");
            return;
        }
        engine::apply_filter_all(&self.config, graphs);
    }
}
