//! Builder for creating and configuring TripPlanner instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::TripPlanner;
use crate::{
    error::{NomadError, Result},
    store::{MemoryStore, SqliteStore},
};

/// Builder for creating and configuring TripPlanner instances.
#[derive(Debug, Clone, Default)]
pub struct TripPlannerBuilder {
    database_path: Option<PathBuf>,
    in_memory: bool,
}

impl TripPlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/nomad/nomad.db` or `~/.local/share/nomad/nomad.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.database_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Keeps all documents in memory; nothing is written to disk.
    pub fn in_memory(mut self) -> Self {
        self.in_memory = true;
        self
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns `NomadError::FileSystem` if the database directory cannot be
    /// created, `NomadError::XdgDirectory` if no default location exists and
    /// `NomadError::Database` if the database cannot be opened.
    pub async fn build(self) -> Result<TripPlanner> {
        if self.in_memory {
            debug!("Using in-memory document store");
            return Ok(TripPlanner::new(MemoryStore::new()));
        }

        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| NomadError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!("Opening document store at {}", db_path.display());
        let store = task::spawn_blocking(move || SqliteStore::open(&db_path))
            .await
            .map_err(|e| NomadError::Configuration {
                message: format!("Task join error: {e}"),
            })??;

        Ok(TripPlanner::new(store))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("nomad")
            .place_data_file("nomad.db")
            .map_err(|e| NomadError::XdgDirectory(e.to_string()))
    }
}
