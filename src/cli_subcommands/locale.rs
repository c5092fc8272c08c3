use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum LocaleCommands {
    /// Application locales, the default one, and the ones left to add
    List {
        #[arg(long)]
        json: bool,
    },
    /// Every locale the server knows
    All {
        #[arg(long)]
        json: bool,
    },
    /// Show one locale
    Show {
        code: String,
        #[arg(long)]
        json: bool,
    },
    /// Add locales to the application
    Add {
        #[arg(required = true)]
        codes: Vec<String>,
    },
    /// Remove locales from the application
    Remove {
        #[arg(required = true)]
        codes: Vec<String>,
    },
    /// Show or change the default locale
    Default { code: Option<String> },
}
