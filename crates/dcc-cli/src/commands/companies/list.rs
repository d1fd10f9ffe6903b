use dcc_core::enums::FilterField;
use dcc_core::responses::CompanyListResponse;
use dcc_engine::FilterState;
use dcc_engine::filter::company_list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ListArgs;
use crate::commands::shared::limit::{as_len, effective_limit};
use crate::context::AppContext;
use crate::output::output;

/// Filter state described by the command-line arguments.
pub fn filter_state(args: &ListArgs) -> FilterState {
    let mut state = FilterState::new();
    if let Some(search) = &args.search {
        state.set_search(search.as_str());
    }
    for (field, value) in [
        (FilterField::CompanyType, &args.company_type),
        (FilterField::Category, &args.category),
        (FilterField::EmployeeSize, &args.size),
    ] {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            state.select(field, value);
        }
    }
    state
}

/// Fetch every company, apply the filters, and cut the display to `limit`.
///
/// The result label keeps counting every match.
pub async fn build(
    state: &FilterState,
    limit: u32,
    ctx: &AppContext,
) -> anyhow::Result<CompanyListResponse> {
    let companies = ctx.service.list_company_summaries().await?;
    let mut view = company_list(
        &companies,
        state,
        as_len(ctx.config.general.category_chip_limit)?,
    );
    view.companies.truncate(as_len(limit)?);
    Ok(view)
}

pub async fn run(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
    let view = build(&filter_state(args), limit, ctx).await?;
    output(&view, flags.format)
}
