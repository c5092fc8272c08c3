use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use i18n_admin::interact::{
    Confirm, ConsoleNotifier, Grants, StaticConfirm, StdinConfirm,
};
use i18n_admin::model::{AdminConfig, RemoteConfig};
use i18n_admin::remote::RemoteClient;
use i18n_admin::session::{FileStore, KeyValueStore, MemoryStore, SessionState};
use i18n_admin::store::LocalStore;
use i18n_admin::views::ViewContext;

use crate::Commands;

#[derive(Parser)]
#[command(name = "i18n-admin")]
#[command(about = "Manage the locales, keys and translations of an i18n server", long_about = None)]
pub(crate) struct Cli {
    /// Admin home directory (defaults to ./.i18n-admin)
    #[arg(long, global = true, env = "I18N_ADMIN_HOME", value_name = "PATH")]
    home: Option<PathBuf>,

    /// Server REST prefix, overriding the configured one
    #[arg(long, global = true, env = "I18N_ADMIN_URL", value_name = "URL")]
    url: Option<String>,

    /// Answer yes to every confirmation
    #[arg(short = 'y', long, global = true)]
    yes: bool,

    /// Debug logging on stderr
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

pub(crate) async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = std::env::current_dir().context("get current dir")?;
    let env = Env {
        home: LocalStore::resolve_home(cli.home.as_deref(), &cwd),
        url: cli.url,
        yes: cli.yes,
    };
    crate::cli_exec::handle_command(&env, cli.command).await
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Global options every command sees.
pub(crate) struct Env {
    pub(crate) home: PathBuf,
    url: Option<String>,
    yes: bool,
}

/// Everything a server command needs.
pub(crate) struct Connected {
    pub(crate) config: AdminConfig,
    pub(crate) ctx: ViewContext,
    pub(crate) session: SessionState,
}

impl Env {
    pub(crate) fn store(&self) -> Result<LocalStore> {
        LocalStore::open(&self.home)
    }

    /// Opens the home when there is one. With `--url` the tool also runs
    /// without a home, on default settings and an in-memory session.
    pub(crate) fn connect(&self) -> Result<Connected> {
        let (config, kv): (AdminConfig, Arc<dyn KeyValueStore>) =
            match (self.store(), self.url.is_some()) {
                (Ok(store), _) => (store.read_config()?, Arc::new(FileStore::new(store))),
                (Err(_), true) => (AdminConfig::default(), Arc::new(MemoryStore::new())),
                (Err(err), false) => return Err(err),
            };

        let remote = self.remote_config(&config)?;
        let client = RemoteClient::new(&remote)
            .with_context(|| format!("connect to {}", remote.base_url))?;
        tracing::debug!(url = %client.base_url(), "using server");

        let auth = Grants::new(config.user.clone(), config.permissions.clone());
        let ctx = ViewContext::new(client, Arc::new(ConsoleNotifier), Arc::new(auth));
        Ok(Connected {
            config,
            ctx,
            session: SessionState::new(kv),
        })
    }

    fn remote_config(&self, config: &AdminConfig) -> Result<RemoteConfig> {
        match (&self.url, &config.remote) {
            (Some(url), remote) => Ok(RemoteConfig {
                base_url: url.clone(),
                token: remote.as_ref().and_then(|r| r.token.clone()),
            }),
            (None, Some(remote)) => Ok(remote.clone()),
            (None, None) => anyhow::bail!("no server configured (run `i18n-admin init --url ...`)"),
        }
    }

    pub(crate) fn confirm(&self) -> Box<dyn Confirm> {
        if self.yes {
            Box::new(StaticConfirm(true))
        } else {
            Box::new(StdinConfirm)
        }
    }
}
