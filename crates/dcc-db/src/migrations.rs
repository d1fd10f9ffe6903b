//! Local schema runner.
//!
//! Embeds the SQL file at compile time and executes it when a local database
//! is opened. All statements use `IF NOT EXISTS` for idempotent re-running.
//! Remote databases own their schema and are never migrated from here.

use crate::DccDb;
use crate::error::DatabaseError;

/// Companies plus nine 1:1 satellite tables.
const MIGRATION_001: &str = include_str!("../migrations/001_initial.sql");

impl DccDb {
    /// Run all embedded migrations in sequence.
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| DatabaseError::Migration(format!("001_initial: {e}")))?;
        Ok(())
    }
}
