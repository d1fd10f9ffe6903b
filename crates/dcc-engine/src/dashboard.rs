//! System overview: headline counts, top distributions, and recent additions.

use dcc_core::entities::RecentCompany;
use dcc_core::responses::{DashboardResponse, EmptyState, RecentCompanyLine, StatCard};

use crate::aggregate::{UNSPECIFIED, aggregate, distribution_card};

pub const NO_COMPANIES_ADDED: &str = "No companies added yet";

const MISSING_PART: &str = "—";

/// Rows the dashboard is computed from, one fetch each.
#[derive(Debug, Clone, Default)]
pub struct DashboardRows {
    pub total_companies: u64,
    pub company_types: Vec<Option<String>>,
    pub categories: Vec<Option<String>>,
    /// Already ordered newest first and limited by the fetch.
    pub recent: Vec<RecentCompany>,
}

/// `"{type} · {category}"` with a dash for each missing side.
#[must_use]
pub fn recent_subtitle(company_type: Option<&str>, category: Option<&str>) -> String {
    let part = |v: Option<&str>| match v {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => MISSING_PART.to_string(),
    };
    format!("{} · {}", part(company_type), part(category))
}

#[must_use]
pub fn dashboard(rows: DashboardRows, top: usize) -> DashboardResponse {
    let by_type = aggregate(&rows.company_types, |v| v.as_deref(), UNSPECIFIED);
    let by_category = aggregate(&rows.categories, |v| v.as_deref(), UNSPECIFIED);

    let stats = vec![
        StatCard {
            label: "Total Companies".to_string(),
            value: rows.total_companies,
        },
        StatCard {
            label: "Company Types".to_string(),
            value: by_type.len() as u64,
        },
        StatCard {
            label: "Categories".to_string(),
            value: by_category.len() as u64,
        },
    ];

    let recent: Vec<RecentCompanyLine> = rows
        .recent
        .into_iter()
        .map(|c| RecentCompanyLine {
            subtitle: recent_subtitle(c.company_type.as_deref(), c.category.as_deref()),
            id: c.id,
            name: c.name,
            logo_url: c.logo_url,
        })
        .collect();

    DashboardResponse {
        stats,
        by_type: distribution_card("Companies by Type", by_type, Some(top)),
        by_category: distribution_card("Companies by Category", by_category, Some(top)),
        recent_empty_state: recent
            .is_empty()
            .then(|| EmptyState::titled(NO_COMPANIES_ADDED)),
        recent,
    }
}
