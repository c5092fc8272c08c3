use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum ShellCommands {
    /// Browse and edit keys
    Keys,
    /// Translate into the target locale
    Translate,
}
