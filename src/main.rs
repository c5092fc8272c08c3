mod cli_commands;
mod cli_exec;
mod cli_runtime;
mod cli_subcommands;

pub(crate) use cli_commands::{Commands, ListArgs};
pub(crate) use cli_subcommands::{
    ConfigCommands, KeyCommands, LocaleCommands, ShellCommands, TranslateCommands,
};

#[tokio::main]
async fn main() {
    if let Err(err) = cli_runtime::run().await {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
