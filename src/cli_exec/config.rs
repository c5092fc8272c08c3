use i18n_admin::model::{AdminConfig, RemoteConfig};
use i18n_admin::remote::RemoteClient;
use i18n_admin::store::LocalStore;

use crate::cli_commands::admin::InitArgs;

use super::*;

pub(super) fn handle_init_command(env: &Env, args: InitArgs) -> Result<()> {
    let remote = RemoteConfig {
        base_url: args.url,
        token: args.token,
    };
    RemoteClient::new(&remote).with_context(|| format!("check server url {}", remote.base_url))?;

    let mut cfg = AdminConfig {
        remote: Some(remote),
        user: args.user,
        ..AdminConfig::default()
    };
    if let Some(size) = args.page_size {
        cfg.page_size = size.max(1);
    }
    LocalStore::init(&env.home, &cfg, args.force)?;
    println!("Initialized i18n-admin home at {}", env.home.display());
    Ok(())
}

pub(super) fn handle_config_command(env: &Env, command: ConfigCommands) -> Result<()> {
    let store = env.store()?;
    let mut cfg = store.read_config()?;

    match command {
        ConfigCommands::Show { json } => {
            if json {
                let mut value = serde_json::to_value(&cfg).context("serialize config")?;
                if let Some(token) = value.pointer_mut("/remote/token") {
                    *token = serde_json::Value::String("<redacted>".to_string());
                }
                print_json(&value, "config")?;
            } else {
                match &cfg.remote {
                    Some(remote) => {
                        println!("url: {}", remote.base_url);
                        println!(
                            "token: {}",
                            if remote.token.is_some() { "set" } else { "none" }
                        );
                    }
                    None => println!("url: none"),
                }
                println!("page_size: {}", cfg.page_size);
                if let Some(user) = &cfg.user {
                    println!("user: {}", user);
                }
                println!("permissions: {}", cfg.permissions.join(","));
            }
        }
        ConfigCommands::Set {
            url,
            token,
            clear_token,
            page_size,
            user,
            permissions,
        } => {
            let changes_remote = url.is_some() || token.is_some() || clear_token;
            if !changes_remote && page_size.is_none() && user.is_none() && permissions.is_none() {
                bail!("nothing to set (see `i18n-admin config set --help`)");
            }

            if changes_remote {
                let mut remote = match (cfg.remote.take(), url) {
                    (Some(mut remote), Some(url)) => {
                        remote.base_url = url;
                        remote
                    }
                    (Some(remote), None) => remote,
                    (None, Some(url)) => RemoteConfig {
                        base_url: url,
                        token: None,
                    },
                    (None, None) => bail!("no server configured (pass --url)"),
                };
                if clear_token {
                    remote.token = None;
                } else if token.is_some() {
                    remote.token = token;
                }
                RemoteClient::new(&remote)
                    .with_context(|| format!("check server url {}", remote.base_url))?;
                cfg.remote = Some(remote);
            }
            if let Some(size) = page_size {
                cfg.page_size = size.max(1);
            }
            if user.is_some() {
                cfg.user = user;
            }
            if let Some(permissions) = permissions {
                cfg.permissions = permissions
                    .into_iter()
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect();
            }
            store.write_config(&cfg)?;
            println!("Configuration updated");
        }
    }

    Ok(())
}
