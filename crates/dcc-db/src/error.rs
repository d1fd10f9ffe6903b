//! Database error types for dcc-db.

use thiserror::Error;

/// Errors from data source operations.
///
/// A zero-row lookup is never an error here; repos return `Ok(None)`.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A row could not be decoded into its entity.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Invalid state encountered (e.g., two rows for a 1:1 satellite).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}

impl DatabaseError {
    /// Whether retrying the same read may succeed.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::LibSql(e) => crate::retry::is_transient_libsql_error(e),
            _ => false,
        }
    }
}
