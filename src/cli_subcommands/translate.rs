use clap::Subcommand;

use crate::ListArgs;

#[derive(Subcommand)]
pub(crate) enum TranslateCommands {
    /// List translations into the target locale
    List {
        #[command(flatten)]
        list: ListArgs,
        /// Only approximate translations
        #[arg(long)]
        approx: bool,
        /// Locale to list (defaults to the target locale)
        #[arg(long)]
        locale: Option<String>,
    },
    /// Show one translation
    Show {
        name: String,
        #[arg(long)]
        locale: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Set the translation of a key
    Set {
        name: String,
        text: String,
        #[arg(long)]
        locale: Option<String>,
    },
}
