mod browse;
mod list;
mod show;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CompanyCommands;
use crate::context::AppContext;

/// Handle `dcc companies`.
pub async fn handle(
    action: &CompanyCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CompanyCommands::List(args) => list::run(args, ctx, flags).await,
        CompanyCommands::Show(args) => show::run(args, ctx, flags).await,
        CompanyCommands::Browse => browse::run(ctx, flags).await,
    }
}
