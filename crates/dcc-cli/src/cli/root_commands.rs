use clap::{Args, Subcommand};

use crate::cli::subcommands::CompanyCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// System overview: counts, top types and categories, recent additions.
    Dashboard,
    /// Distributions by type, tech stack, remote policy, and work environment.
    Analytics,
    /// Browse, filter, and inspect companies.
    Companies {
        #[command(subcommand)]
        action: CompanyCommands,
    },
    /// Dump JSON schema for an entity or response type.
    Schema(SchemaArgs),
}

/// Arguments for `dcc schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    pub type_name: String,
}
