//! Seeded application contexts for command tests.

use dcc_config::DccConfig;

use crate::context::AppContext;

pub async fn empty_context() -> AppContext {
    let mut config = DccConfig::default();
    config.database.path = ":memory:".to_string();
    config.database.retry_attempts = 1;
    AppContext::init(config).await.expect("in-memory context")
}

/// Four companies: two startups, one MNC, one without type or category.
pub async fn seeded_context() -> AppContext {
    let ctx = empty_context().await;
    ctx.service
        .db()
        .conn()
        .execute_batch(
            "INSERT INTO companies (id, name, company_type, category, employee_size, created_at)
                 VALUES ('c-1', 'Acme Pay', 'Startup', 'Fintech', '51-200', '2026-01-01 09:00:00');
             INSERT INTO companies (id, name, company_type, category, employee_size, created_at)
                 VALUES ('c-2', 'Blue Retail', 'MNC', 'Retail', '1000+', '2026-01-02 09:00:00');
             INSERT INTO companies (id, name, company_type, category, created_at)
                 VALUES ('c-3', 'Cobalt Labs', 'Startup', 'AI', '2026-01-03 09:00:00');
             INSERT INTO companies (id, name, created_at)
                 VALUES ('c-4', 'Initech', '2026-01-04 09:00:00');
             INSERT INTO company_technologies (id, company_id, tech_stack)
                 VALUES ('t-1', 'c-1', '[\"Rust\",\"Go\"]');
             INSERT INTO company_technologies (id, company_id, tech_stack)
                 VALUES ('t-3', 'c-3', '[\"Rust\",\"Postgres\"]');
             INSERT INTO company_culture (id, company_id, remote_policy)
                 VALUES ('cu-1', 'c-1', 'Hybrid');
             INSERT INTO company_culture (id, company_id, remote_policy)
                 VALUES ('cu-2', 'c-2', NULL);
             INSERT INTO company_financials (id, company_id, funding_stage)
                 VALUES ('f-1', 'c-1', 'Series A');",
        )
        .await
        .expect("seed companies");
    ctx
}
