//! Error types for edgelens.
//!
//! The filter engine itself is infallible by design: a missing provider,
//! an empty graph list, or a malformed type list all degrade to a no-op or
//! to "show everything" and are surfaced through the notification seam.
//! Hard errors exist only at the edges — the settings store and the graph
//! document loader.

use std::path::PathBuf;
use thiserror::Error;

/// All errors the edgelens library can produce.
#[derive(Debug, Error)]
pub enum EdgeLensError {
    /// Reading or writing the settings file failed.
    #[error("settings store I/O at {path}: {source}")]
    SettingsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The persisted settings record could not be parsed.
    #[error("invalid settings data: {0}")]
    SettingsFormat(#[from] serde_json::Error),

    /// A graph document referenced a node id that was never declared.
    #[error("edge '{edge}' references unknown node '{node}'")]
    UnknownNode { edge: String, node: String },

    /// A graph document declared the same node id twice.
    #[error("duplicate node id '{0}' in graph document")]
    DuplicateNode(String),
}

/// Convenience result type used throughout the crate.
pub type Result<T> = std::result::Result<T, EdgeLensError>;
