//! # dcc-db
//!
//! libSQL data source for Digital Career Compass.
//!
//! The backend is an external collaborator: companies and their satellites
//! are administered elsewhere and this crate only reads them. It supports the
//! four query shapes the dashboard needs:
//! - select all columns of one row by id
//! - select specific columns with ordering and an optional limit
//! - count-only queries
//! - equality-filtered single-row lookups keyed by `company_id`
//!
//! Zero rows from a single-row lookup is `Ok(None)`, never an error.
//! Uses the `libsql` crate for both local files and remote Turso databases.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod retry;
pub mod service;
#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Database handle for company profile reads.
pub struct DccDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    remote: bool,
}

impl DccDb {
    /// Open a local database file, creating the development schema if needed.
    ///
    /// Pass `":memory:"` for an ephemeral database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let dcc_db = Self {
            db,
            conn,
            remote: false,
        };
        dcc_db.run_migrations().await?;
        tracing::debug!(path, "opened local database");
        Ok(dcc_db)
    }

    /// Connect to a remote libSQL database. The remote owns its schema.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection cannot be established.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        let conn = db.connect()?;
        tracing::debug!(url, "connected to remote database");
        Ok(Self {
            db,
            conn,
            remote: true,
        })
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Returns whether this handle talks to a remote database.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        self.remote
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> DccDb {
        DccDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;
        assert!(!db.is_remote());

        let mut tables = vec!["companies"];
        tables.extend(
            dcc_core::enums::Satellite::ALL
                .into_iter()
                .map(helpers::satellite_table),
        );
        for table in &tables {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [*table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn satellite_is_unique_per_company() {
        let db = test_db().await;
        db.conn()
            .execute("INSERT INTO companies (id, name) VALUES ('c-1', 'Acme')", ())
            .await
            .unwrap();
        db.conn()
            .execute(
                "INSERT INTO company_culture (id, company_id) VALUES ('cul-1', 'c-1')",
                (),
            )
            .await
            .unwrap();

        let dup = db
            .conn()
            .execute(
                "INSERT INTO company_culture (id, company_id) VALUES ('cul-2', 'c-1')",
                (),
            )
            .await;
        assert!(dup.is_err(), "second culture row should be rejected");
    }

    #[tokio::test]
    async fn satellite_requires_existing_company() {
        let db = test_db().await;
        let orphan = db
            .conn()
            .execute(
                "INSERT INTO company_financials (id, company_id) VALUES ('fin-1', 'c-missing')",
                (),
            )
            .await;
        assert!(orphan.is_err(), "foreign key should reject orphan satellite");
    }
}
