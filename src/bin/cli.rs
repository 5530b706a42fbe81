//! edgelens CLI - edge-type visibility filtering for graph documents.
//!
//! Usage:
//!   edgelens -g graph.json show-only "parent, child"
//!   edgelens -g graph.json hide "sibling"
//!   edgelens -g graph.json hide-isolated
//!   edgelens -g graph.json status
//!   edgelens -g graph.json reset

use clap::Parser;
use edgelens::cli::{run, Cli};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
