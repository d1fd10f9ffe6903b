use anyhow::bail;
use dcc_core::enums::ProfileTab;
use dcc_core::responses::CompanyProfileResponse;
use dcc_engine::profile::{company_profile, not_found};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ShowArgs;
use crate::commands::shared::parse::parse_tabs;
use crate::context::AppContext;
use crate::output::output;

/// Fetch the company and its satellites, then render the requested tabs.
///
/// `None` when no company has this id.
pub async fn build(
    id: &str,
    tabs: &[ProfileTab],
    ctx: &AppContext,
) -> anyhow::Result<Option<CompanyProfileResponse>> {
    let Some(bundle) = ctx.service.fetch_profile(id).await? else {
        return Ok(None);
    };
    Ok(Some(company_profile(&bundle, tabs)))
}

pub async fn run(args: &ShowArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let tabs = parse_tabs(&args.tab)?;
    match build(&args.id, &tabs, ctx).await? {
        Some(view) => output(&view, flags.format),
        None => {
            output(&not_found(), flags.format)?;
            bail!("company '{}' not found", args.id)
        }
    }
}
