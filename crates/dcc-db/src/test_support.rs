//! Shared test utilities for dcc-db tests.

#[cfg(test)]
pub(crate) mod helpers {
    use crate::DccDb;
    use crate::retry::RetryConfig;
    use crate::service::DccService;

    /// Create an in-memory `DccService` that never retries.
    pub async fn test_service() -> DccService {
        let db = DccDb::open_local(":memory:").await.unwrap();
        DccService::from_db(db, RetryConfig::none())
    }

    /// Insert a bare company row with the filterable attributes set.
    pub async fn insert_company(
        svc: &DccService,
        id: &str,
        name: &str,
        company_type: Option<&str>,
        category: Option<&str>,
    ) {
        svc.db()
            .conn()
            .execute(
                "INSERT INTO companies (id, name, company_type, category) VALUES (?1, ?2, ?3, ?4)",
                libsql::params![id, name, company_type, category],
            )
            .await
            .unwrap();
    }
}
