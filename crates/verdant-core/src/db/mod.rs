//! Database operations and SQLite management for clients, plans and jobs.
//!
//! This module provides low-level database operations for the back office.
//! It handles SQLite connections and schema management, and splits its
//! queries by record type. [`Database`] also implements
//! [`GenerationStore`](crate::schedule::GenerationStore), which is how the
//! job generation engine reaches persistence.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod client_queries;
pub mod generation_store;
pub mod job_queries;
pub mod migrations;
pub mod plan_queries;
pub mod utils;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
