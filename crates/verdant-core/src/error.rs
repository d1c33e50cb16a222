//! Error types for the back-office library.

use std::path::PathBuf;

use jiff::Timestamp;
use rusqlite::{ffi, ErrorCode};
use thiserror::Error;

/// Comprehensive error type for all office operations.
#[derive(Error, Debug)]
pub enum OfficeError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// A job already exists for this plan at this scheduled start
    #[error("Job for plan {plan_id} at {scheduled_start} already exists")]
    DuplicateJob {
        plan_id: u64,
        scheduled_start: Timestamp,
    },
    /// Service plan not found for the given ID
    #[error("Service plan with ID {id} not found")]
    PlanNotFound { id: u64 },
    /// Client not found for the given ID
    #[error("Client with ID {id} not found")]
    ClientNotFound { id: u64 },
    /// Job not found for the given ID
    #[error("Job with ID {id} not found")]
    JobNotFound { id: u64 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Calendar arithmetic left the supported date range
    #[error("Calendar error: {0}")]
    Calendar(#[from] jiff::Error),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> OfficeError {
        OfficeError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> OfficeError {
        OfficeError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl OfficeError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Wraps a tokio join failure from a blocking database task.
    pub fn join(error: &tokio::task::JoinError) -> Self {
        Self::Configuration {
            message: format!("Task join error: {error}"),
        }
    }

    /// True when this error is the expected "occurrence already materialized"
    /// signal rather than a real failure.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateJob { .. })
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| OfficeError::database(message).with_source(e))
    }
}

/// Returns true if the SQLite error is a UNIQUE (or primary key) constraint
/// violation. Foreign key and CHECK violations share the primary result code,
/// so the extended code is what tells them apart.
pub(crate) fn is_unique_violation(error: &rusqlite::Error) -> bool {
    match error {
        rusqlite::Error::SqliteFailure(err, _) => {
            err.code == ErrorCode::ConstraintViolation
                && matches!(
                    err.extended_code,
                    ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                )
        }
        _ => false,
    }
}

/// Result type alias for office operations
pub type Result<T> = std::result::Result<T, OfficeError>;
