use clap::{Args, Subcommand};

/// Company list and profile commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CompanyCommands {
    /// List companies, optionally searched and filtered.
    List(ListArgs),
    /// Show a company profile.
    Show(ShowArgs),
    /// Interactive list session with toggleable filters.
    Browse,
}

/// Arguments for `dcc companies list`.
#[derive(Clone, Debug, Default, Args)]
pub struct ListArgs {
    /// Case-insensitive match on name or category.
    #[arg(long)]
    pub search: Option<String>,
    /// Exact company type.
    #[arg(long = "type")]
    pub company_type: Option<String>,
    /// Exact category.
    #[arg(long)]
    pub category: Option<String>,
    /// Exact employee size.
    #[arg(long)]
    pub size: Option<String>,
}

/// Arguments for `dcc companies show`.
#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    pub id: String,
    /// Tab to render, or `all`.
    #[arg(long, default_value = "overview")]
    pub tab: String,
}
