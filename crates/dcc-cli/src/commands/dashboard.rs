use dcc_core::responses::DashboardResponse;
use dcc_db::repos::ScalarColumn;
use dcc_engine::dashboard::{DashboardRows, dashboard};

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::as_len;
use crate::context::AppContext;
use crate::output::output;

/// Build the dashboard from four independent reads.
pub async fn build(ctx: &AppContext) -> anyhow::Result<DashboardResponse> {
    let svc = &ctx.service;
    let general = &ctx.config.general;

    let (total_companies, company_types, categories, recent) = tokio::try_join!(
        svc.count_companies(),
        svc.select_scalar_column(ScalarColumn::CompanyType),
        svc.select_scalar_column(ScalarColumn::Category),
        svc.list_recent_companies(general.recent_limit),
    )?;

    Ok(dashboard(
        DashboardRows {
            total_companies,
            company_types,
            categories,
            recent,
        },
        as_len(general.dashboard_top)?,
    ))
}

/// Handle `dcc dashboard`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&build(ctx).await?, flags.format)
}
