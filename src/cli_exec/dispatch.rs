use super::config::{handle_config_command, handle_init_command};
use super::keys::handle_keys_command;
use super::locales::handle_locales_command;
use super::reports::{
    handle_export_command, handle_import_command, handle_stats_command, handle_target_command,
};
use super::shell::handle_shell_command;
use super::translate::handle_translate_command;
use super::*;

pub(super) async fn handle_command(env: &Env, command: Commands) -> Result<()> {
    match command {
        Commands::Init(args) => handle_init_command(env, args)?,
        Commands::Config { command } => handle_config_command(env, command)?,
        Commands::Locales { command } => handle_locales_command(env, command).await?,
        Commands::Keys { command } => handle_keys_command(env, command).await?,
        Commands::Translate { command } => handle_translate_command(env, command).await?,
        Commands::Target(args) => handle_target_command(env, args).await?,
        Commands::Stats(args) => handle_stats_command(env, args).await?,
        Commands::Import(args) => handle_import_command(env, args).await?,
        Commands::Export(args) => handle_export_command(env, args).await?,
        Commands::Shell { command } => handle_shell_command(env, command).await?,
    }

    Ok(())
}
