use dcc_core::responses::AnalyticsResponse;
use dcc_db::repos::{ListColumn, ScalarColumn};
use dcc_engine::analytics::{AnalyticsRows, analytics};

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::as_len;
use crate::context::AppContext;
use crate::output::output;

pub async fn build(ctx: &AppContext) -> anyhow::Result<AnalyticsResponse> {
    let svc = &ctx.service;
    let (company_types, tech_stacks, remote_policies, work_environments) = tokio::try_join!(
        svc.select_scalar_column(ScalarColumn::CompanyType),
        svc.select_list_column(ListColumn::TechStack),
        svc.select_scalar_column(ScalarColumn::RemotePolicy),
        svc.select_scalar_column(ScalarColumn::WorkEnvironment),
    )?;

    let rows = AnalyticsRows {
        company_types,
        tech_stacks,
        remote_policies,
        work_environments,
    };
    Ok(analytics(&rows, as_len(ctx.config.general.tech_stack_top)?))
}

/// Handle `dcc analytics`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&build(ctx).await?, flags.format)
}
