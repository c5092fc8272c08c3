use std::path::PathBuf;

use clap::Args;

#[derive(Args)]
pub(crate) struct InitArgs {
    /// REST prefix of the i18n server (e.g. http://localhost:8080/seed-i18n)
    #[arg(long)]
    pub(crate) url: String,

    /// Bearer token sent with every request
    #[arg(long)]
    pub(crate) token: Option<String>,

    /// Default page size for listings
    #[arg(long)]
    pub(crate) page_size: Option<u64>,

    /// Operator name
    #[arg(long)]
    pub(crate) user: Option<String>,

    /// Re-initialize if the home already exists
    #[arg(long)]
    pub(crate) force: bool,
}

#[derive(Args)]
pub(crate) struct TargetArgs {
    /// Locale code to translate into
    pub(crate) code: Option<String>,

    /// Forget the current target
    #[arg(long, conflicts_with = "code")]
    pub(crate) clear: bool,
}

#[derive(Args)]
pub(crate) struct StatsArgs {
    /// Only this locale (all locales by default)
    #[arg(long)]
    pub(crate) lang: Option<String>,

    /// Print the chart series instead of the table
    #[arg(long)]
    pub(crate) chart: bool,

    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct ImportArgs {
    /// CSV files to upload
    #[arg(required = true)]
    pub(crate) files: Vec<PathBuf>,
}

#[derive(Args)]
pub(crate) struct ExportArgs {
    /// Write to this file instead of stdout
    #[arg(short = 'o', long)]
    pub(crate) output: Option<PathBuf>,
}
