use clap::Subcommand;

use crate::ListArgs;

#[derive(Subcommand)]
pub(crate) enum KeyCommands {
    /// List keys
    List(ListArgs),
    /// Show one key
    Show {
        name: String,
        #[arg(long)]
        json: bool,
    },
    /// Create a key in the default locale
    Add {
        /// Key name (lowercased, whitespace removed)
        name: String,
        #[arg(long, default_value = "")]
        translation: String,
        #[arg(long, default_value = "")]
        comment: String,
    },
    /// Change a key's translation or comment
    Edit {
        name: String,
        #[arg(long)]
        translation: Option<String>,
        #[arg(long)]
        comment: Option<String>,
    },
    /// Delete one key
    Delete { name: String },
    /// Delete every key matching the filters
    DeleteFiltered {
        #[arg(long)]
        missing: bool,
        #[arg(long)]
        outdated: bool,
        #[arg(long)]
        search: Option<String>,
    },
}
