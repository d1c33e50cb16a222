//! Builder for creating and configuring Office instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::Office;
use crate::{
    db::Database,
    error::{OfficeError, Result},
};

/// Builder for creating and configuring Office instances.
#[derive(Debug, Clone)]
pub struct OfficeBuilder {
    database_path: Option<PathBuf>,
}

impl OfficeBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/verdant/verdant.db` or `~/.local/share/verdant/verdant.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured office, creating the database file and schema
    /// if needed.
    ///
    /// # Errors
    ///
    /// Returns `OfficeError::FileSystem` if the database directory can't be created
    /// Returns `OfficeError::Database` if database initialization fails
    pub async fn build(self) -> Result<Office> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| OfficeError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!("Opening database at {}", db_path.display());
        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), OfficeError>(())
        })
        .await
        .map_err(|e| OfficeError::join(&e))??;

        Ok(Office::new(db_path))
    }

    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("verdant")
            .place_data_file("verdant.db")
            .map_err(|e| OfficeError::XdgDirectory(e.to_string()))
    }
}

impl Default for OfficeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
