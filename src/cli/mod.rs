//! CLI for edgelens.
//!
//! Operates on a graph document (JSON nodes + typed edges) on disk: each
//! command loads the document, runs the corresponding session operation,
//! and writes the updated visibility flags back. Settings persist in a
//! JSON file next to the graph unless `--settings` points elsewhere.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::config::FilterMode;
use crate::graph::types::GraphDocument;
use crate::graph::view::{GraphProvider, GraphView, MemoryGraphView};
use crate::session::FilterSession;
use crate::storage::JsonSettingsStore;
use crate::surface::{Notifier, PromptSurface};

#[derive(Parser)]
#[command(name = "edgelens")]
#[command(about = "Edge-type visibility filtering for node-link graph views")]
pub struct Cli {
    /// Graph document to filter (JSON)
    #[arg(short, long)]
    pub graph: PathBuf,

    /// Settings file (default: edgelens.json next to the graph)
    #[arg(short, long)]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Disable filtering and show every edge
    ShowAllEdges,

    /// Show only the listed edge types (prompts when TYPES is omitted)
    ShowOnly {
        /// Comma-separated edge types, e.g. "parent, child"
        types: Option<String>,
    },

    /// Hide the listed edge types (prompts when TYPES is omitted)
    Hide {
        /// Comma-separated edge types, e.g. "parent, child"
        types: Option<String>,
    },

    /// Hide nodes with no visible connections
    HideIsolated,

    /// Show all nodes again
    ShowAllNodes,

    /// Set the raw edge type list (non-blank values enable filtering)
    SetTypes { types: String },

    /// Set the filter mode
    SetMode { mode: ModeArg },

    /// Print the current filter status
    Status,

    /// Re-run the filter with the stored settings
    Apply,

    /// Make every edge and node visible again
    Reset,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    /// Show only the listed types
    Whitelist,
    /// Hide the listed types
    Blacklist,
}

impl From<ModeArg> for FilterMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Whitelist => FilterMode::Include,
            ModeArg::Blacklist => FilterMode::Exclude,
        }
    }
}

/// Provider over the single document loaded from disk.
struct DocumentProvider {
    view: MemoryGraphView,
}

impl GraphProvider for DocumentProvider {
    fn active_graphs(&mut self) -> Vec<Option<&mut dyn GraphView>> {
        vec![Some(&mut self.view as &mut dyn GraphView)]
    }
}

/// Prompt seam for the terminal: uses the preset argument when the user
/// passed one, otherwise reads a line from stdin. EOF means cancel.
struct TerminalPrompt {
    preset: Option<String>,
}

impl PromptSurface for TerminalPrompt {
    fn prompt_for_text(&mut self, label: &str) -> Option<String> {
        if let Some(preset) = self.preset.take() {
            return Some(preset);
        }
        eprint!("{label}: ");
        io::stderr().flush().ok();
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}

/// Notices go to stderr so stdout stays clean for document output.
struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&mut self, message: &str) {
        eprintln!("{message}");
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let settings_path = cli.settings.clone().unwrap_or_else(|| {
        cli.graph
            .parent()
            .map(|dir| dir.join("edgelens.json"))
            .unwrap_or_else(|| PathBuf::from("edgelens.json"))
    });

    let raw = fs::read_to_string(&cli.graph)
        .with_context(|| format!("reading graph document {}", cli.graph.display()))?;
    let doc: GraphDocument = serde_json::from_str(&raw)
        .with_context(|| format!("parsing graph document {}", cli.graph.display()))?;

    let mut store = JsonSettingsStore::new(settings_path);
    let mut provider = DocumentProvider {
        view: MemoryGraphView::from_document(&doc)?,
    };
    let preset = match &cli.command {
        Commands::ShowOnly { types } | Commands::Hide { types } => types.clone(),
        _ => None,
    };
    let mut prompt = TerminalPrompt { preset };
    let mut notifier = StderrNotifier;

    let mut session =
        FilterSession::start(&mut store, &mut provider, &mut prompt, &mut notifier)?;

    let mut write_back = true;
    match cli.command {
        Commands::ShowAllEdges => session.show_all_edges()?,
        Commands::ShowOnly { .. } => session.show_only_types()?,
        Commands::Hide { .. } => session.hide_types()?,
        Commands::HideIsolated => session.hide_isolated_nodes()?,
        Commands::ShowAllNodes => session.show_all_nodes()?,
        Commands::SetTypes { types } => session.set_edge_types(&types)?,
        Commands::SetMode { mode } => session.set_mode(mode.into())?,
        Commands::Status => {
            println!("{}", session.status());
            write_back = false;
        }
        Commands::Apply => session.refresh(),
        Commands::Reset => session.shutdown(),
    }
    drop(session);

    if write_back {
        let out = serde_json::to_string_pretty(&provider.view.to_document())?;
        fs::write(&cli.graph, out)
            .with_context(|| format!("writing graph document {}", cli.graph.display()))?;
    }
    Ok(())
}
