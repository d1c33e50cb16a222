//! Async back-office API over the SQLite store.
//!
//! [`Office`] is the entry point used by the CLI. Every call opens its own
//! connection and runs the blocking rusqlite work on tokio's blocking pool.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │ (display-ready  │───▶│ (client_ops,    │───▶│   (via db/)     │
//! │  results)       │    │  plan_ops, ...) │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: resolves the database path and prepares the schema
//! - [`client_ops`], [`plan_ops`], [`job_ops`]: record keeping
//! - [`generation_ops`]: the job generation trigger
//! - [`handlers`]: results wrapped for display
//!
//! # Examples
//!
//! ```rust,no_run
//! use verdant_core::{params::GenerateJobs, OfficeBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let office = OfficeBuilder::new()
//!     .with_database_path(Some("/tmp/verdant.db"))
//!     .build()
//!     .await?;
//!
//! let summary = office.generate_upcoming_jobs(&GenerateJobs::default()).await?;
//! println!("{summary}");
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use tokio::task;

use crate::{
    db::Database,
    error::{OfficeError, Result},
};

pub mod builder;
pub mod client_ops;
pub mod generation_ops;
pub mod handlers;
pub mod job_ops;
pub mod plan_ops;

#[cfg(test)]
mod tests;

pub use builder::OfficeBuilder;

/// Main interface for managing clients, plans and jobs.
pub struct Office {
    pub(crate) db_path: PathBuf,
}

impl Office {
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the SQLite file this office works on.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }

    /// Run `operation` against a fresh connection on the blocking pool.
    pub(crate) async fn with_database<T, F>(&self, operation: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            operation(&mut db)
        })
        .await
        .map_err(|e| OfficeError::join(&e))?
    }
}
