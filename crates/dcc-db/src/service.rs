//! Service layer wrapping the database handle with the read retry policy.
//!
//! `DccService` owns a `DccDb` and a `RetryConfig`. All repo methods are
//! implemented as `impl DccService` blocks under `repos/`.

use std::future::Future;

use dcc_config::DatabaseConfig;

use crate::DccDb;
use crate::error::DatabaseError;
use crate::retry::{self, RetryConfig};

/// Read-only access to company profiles.
pub struct DccService {
    db: DccDb,
    retry: RetryConfig,
}

impl DccService {
    /// Open a service over a local database file.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str, retry: RetryConfig) -> Result<Self, DatabaseError> {
        let db = DccDb::open_local(db_path).await?;
        Ok(Self { db, retry })
    }

    /// Open a service over a remote database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection cannot be established.
    pub async fn new_remote(
        url: &str,
        auth_token: &str,
        retry: RetryConfig,
    ) -> Result<Self, DatabaseError> {
        let db = DccDb::open_remote(url, auth_token).await?;
        Ok(Self { db, retry })
    }

    /// Pick remote or local from configuration.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the selected backend cannot be opened.
    pub async fn from_config(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let retry = RetryConfig::from_config(config);
        if config.is_remote() {
            Self::new_remote(&config.url, &config.auth_token, retry).await
        } else {
            Self::new_local(&config.path, retry).await
        }
    }

    /// Create from an existing `DccDb` (for testing).
    #[must_use]
    pub const fn from_db(db: DccDb, retry: RetryConfig) -> Self {
        Self { db, retry }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &DccDb {
        &self.db
    }

    /// Run an idempotent read under the retry policy.
    pub(crate) async fn read<T, F, Fut>(&self, what: &str, op: F) -> Result<T, DatabaseError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, DatabaseError>>,
    {
        retry::with_retry(&self.retry, what, op).await
    }
}
