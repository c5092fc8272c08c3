use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum ConfigCommands {
    /// Show the configuration (the token is never printed)
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Change configuration values
    Set {
        #[arg(long)]
        url: Option<String>,
        #[arg(long, conflicts_with = "clear_token")]
        token: Option<String>,
        /// Remove the stored token
        #[arg(long)]
        clear_token: bool,
        #[arg(long)]
        page_size: Option<u64>,
        #[arg(long)]
        user: Option<String>,
        /// Granted permissions, comma separated (e.g. seed:i18n:key:read,seed:i18n:translation:*)
        #[arg(long, value_delimiter = ',')]
        permissions: Option<Vec<String>>,
    },
}
