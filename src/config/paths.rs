//! Path resolution for focusflow configuration and data files.
//!
//! All focusflow data is stored in `~/.focusflow/`:
//! - `config.yaml` - Main configuration file
//! - `focusflow.db` - SQLite local store (auth token, last focus session)

use std::path::PathBuf;

use crate::error::FlowError;

/// Paths to focusflow configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.focusflow/`
    pub root: PathBuf,
    /// Config file: `~/.focusflow/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.focusflow/focusflow.db`
    pub database: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, FlowError> {
        let home = std::env::var("HOME")
            .map_err(|_| FlowError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".focusflow")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("focusflow.db"),
            root,
        }
    }

    /// Ensure the root directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), FlowError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                FlowError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }

        Ok(())
    }
}
