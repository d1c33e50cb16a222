//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Enable foreign keys for this connection
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        // Apply migrations for existing databases
        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // Plans created before job generation existed have no watermark column
        let has_watermark_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('service_plans') WHERE name = 'last_generated_at'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .db_context("Failed to inspect service_plans columns")?;

        if !has_watermark_column {
            self.connection
                .execute(
                    "ALTER TABLE service_plans ADD COLUMN last_generated_at TEXT",
                    [],
                )
                .db_context("Failed to add last_generated_at column to service_plans table")?;
        }

        Ok(())
    }
}
