use clap::Subcommand;

use crate::{ConfigCommands, KeyCommands, LocaleCommands, ShellCommands, TranslateCommands};

pub(crate) mod admin;
pub(crate) mod listing;

pub(crate) use self::listing::ListArgs;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Create the admin home (.i18n-admin) for a server
    Init(admin::InitArgs),

    /// Show or change the configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Application locales and the default locale
    Locales {
        #[command(subcommand)]
        command: LocaleCommands,
    },

    /// Translation keys in the default locale
    Keys {
        #[command(subcommand)]
        command: KeyCommands,
    },

    /// Translations into the target locale
    Translate {
        #[command(subcommand)]
        command: TranslateCommands,
    },

    /// Show or change the locale being translated into
    Target(admin::TargetArgs),

    /// Translation progress per locale
    Stats(admin::StatsArgs),

    /// Upload CSV files of keys and translations
    Import(admin::ImportArgs),

    /// Download every key with its translations as CSV
    Export(admin::ExportArgs),

    /// Interactive session over keys or translations
    Shell {
        #[command(subcommand)]
        command: ShellCommands,
    },
}
