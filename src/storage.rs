//! Settings persistence.
//!
//! The host application owns where settings live; the library only needs
//! `load` and `save`. [`JsonSettingsStore`] is the file-backed
//! implementation used by the CLI; tests use [`MemorySettingsStore`].

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::config::FilterConfig;
use crate::error::{EdgeLensError, Result};

/// Where the filter configuration is loaded from and saved to.
pub trait SettingsStore {
    /// Load the persisted configuration, if any exists.
    ///
    /// Partial records are fine — missing fields merge over defaults
    /// during deserialization. `Ok(None)` means nothing was persisted yet.
    fn load(&self) -> Result<Option<FilterConfig>>;

    /// Persist the configuration, replacing whatever was stored before.
    fn save(&mut self, config: &FilterConfig) -> Result<()>;
}

/// Settings stored as a flat JSON record in a single file.
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn io_err(&self, source: std::io::Error) -> EdgeLensError {
        EdgeLensError::SettingsIo {
            path: self.path.clone(),
            source,
        }
    }
}

impl SettingsStore for JsonSettingsStore {
    fn load(&self) -> Result<Option<FilterConfig>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no settings file, using defaults");
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path).map_err(|e| self.io_err(e))?;
        let config = serde_json::from_str(&raw)?;
        Ok(Some(config))
    }

    fn save(&mut self, config: &FilterConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_err(e))?;
            }
        }
        let json = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, json).map_err(|e| self.io_err(e))?;
        debug!(path = %self.path.display(), "settings saved");
        Ok(())
    }
}

/// In-memory store for tests and embedders that persist elsewhere.
#[derive(Default)]
pub struct MemorySettingsStore {
    stored: Option<FilterConfig>,
    /// Number of successful saves, so tests can assert persistence happened.
    pub save_count: usize,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: FilterConfig) -> Self {
        Self {
            stored: Some(config),
            save_count: 0,
        }
    }

    pub fn stored(&self) -> Option<&FilterConfig> {
        self.stored.as_ref()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Result<Option<FilterConfig>> {
        Ok(self.stored.clone())
    }

    fn save(&mut self, config: &FilterConfig) -> Result<()> {
        self.stored = Some(config.clone());
        self.save_count += 1;
        Ok(())
    }
}
