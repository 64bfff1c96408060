//! Database schema initialization and migrations.

use log::info;

use crate::error::{DatabaseResultExt, Result};

/// Plans written by the first-generation service carry SQLite's
/// `CURRENT_TIMESTAMP` text (`YYYY-MM-DD HH:MM:SS`, UTC) instead of RFC 3339.
const NORMALIZE_LEGACY_TIMESTAMPS_SQL: &str = "UPDATE plans \
     SET created_at = strftime('%Y-%m-%dT%H:%M:%SZ', created_at) \
     WHERE created_at GLOB '[0-9][0-9][0-9][0-9]-[0-9][0-9]-[0-9][0-9] [0-9][0-9]:[0-9][0-9]:[0-9][0-9]*'";

/// The same databases allowed NULL step notes.
const BACKFILL_NOTES_SQL: &str = "UPDATE plan_steps SET note = '' WHERE note IS NULL";

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()
    }

    /// Brings plan rows written by earlier releases up to date. Both updates
    /// are no-ops once applied.
    fn apply_migrations(&self) -> Result<()> {
        let timestamps = self
            .connection
            .execute(NORMALIZE_LEGACY_TIMESTAMPS_SQL, [])
            .db_context("Failed to normalize legacy plan timestamps")?;
        let notes = self
            .connection
            .execute(BACKFILL_NOTES_SQL, [])
            .db_context("Failed to backfill plan step notes")?;

        if timestamps + notes > 0 {
            info!("Migrated {timestamps} plan timestamps and {notes} plan step notes");
        }
        Ok(())
    }
}
