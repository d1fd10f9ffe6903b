//! End-to-end reads against a local libSQL file.

use dcc_core::fetch::SectionState;
use dcc_db::repos::{ListColumn, ScalarColumn};
use dcc_db::retry::RetryConfig;
use dcc_db::service::DccService;
use pretty_assertions::assert_eq;

async fn seed(svc: &DccService) {
    let conn = svc.db().conn();
    conn.execute_batch(
        "INSERT INTO companies (id, name, company_type, category, operating_countries, created_at)
             VALUES ('c-1', 'Acme', 'Startup', 'Fintech', '[\"IN\",\"US\"]', '2026-01-01 10:00:00');
         INSERT INTO companies (id, name, company_type, created_at)
             VALUES ('c-2', 'Globex', 'Startup', '2026-02-01 10:00:00');
         INSERT INTO companies (id, name, created_at)
             VALUES ('c-3', 'Initech', '2026-03-01 10:00:00');
         INSERT INTO company_technologies (id, company_id, tech_stack)
             VALUES ('t-1', 'c-1', '[\"Rust\",\"Postgres\"]');
         INSERT INTO company_culture (id, company_id, remote_policy)
             VALUES ('cu-1', 'c-1', 'Hybrid');",
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn file_database_survives_reopen() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("dcc.db");
    let path = path.to_string_lossy();

    {
        let svc = DccService::new_local(&path, RetryConfig::none()).await.unwrap();
        seed(&svc).await;
    }

    // Reopening reruns the idempotent schema and keeps the rows.
    let svc = DccService::new_local(&path, RetryConfig::none()).await.unwrap();
    assert_eq!(svc.count_companies().await.unwrap(), 3);

    let recent = svc.list_recent_companies(2).await.unwrap();
    let ids: Vec<&str> = recent.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c-3", "c-2"]);
}

#[tokio::test]
async fn columns_feed_distributions() {
    let svc = DccService::new_local(":memory:", RetryConfig::none()).await.unwrap();
    seed(&svc).await;

    let types = svc.select_scalar_column(ScalarColumn::CompanyType).await.unwrap();
    assert_eq!(types, vec![Some("Startup".into()), Some("Startup".into()), None]);

    let stacks = svc.select_list_column(ListColumn::TechStack).await.unwrap();
    assert_eq!(
        stacks,
        vec![Some(vec!["Rust".to_string(), "Postgres".to_string()])]
    );

    let remote = svc.select_scalar_column(ScalarColumn::RemotePolicy).await.unwrap();
    assert_eq!(remote, vec![Some("Hybrid".to_string())]);
}

#[tokio::test]
async fn profile_bundle_marks_profiled_satellites() {
    let svc = DccService::new_local(":memory:", RetryConfig::none()).await.unwrap();
    seed(&svc).await;

    let bundle = svc.fetch_profile("c-1").await.unwrap().expect("company exists");
    assert_eq!(bundle.company.name, "Acme");
    assert_eq!(
        bundle.company.operating_countries,
        Some(vec!["IN".to_string(), "US".to_string()])
    );

    let tech = bundle.technology.row().expect("technology row");
    assert_eq!(
        tech.tech_stack,
        Some(vec!["Rust".to_string(), "Postgres".to_string()])
    );
    assert!(matches!(bundle.financials, SectionState::Loaded(None)));
    assert!(!bundle.people.is_failed());
    assert!(!bundle.brand_reputation.is_failed());
}

#[tokio::test]
async fn unknown_company_has_no_bundle() {
    let svc = DccService::new_local(":memory:", RetryConfig::none()).await.unwrap();
    seed(&svc).await;
    assert!(svc.fetch_profile("c-404").await.unwrap().is_none());
}
