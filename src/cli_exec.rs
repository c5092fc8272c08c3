use anyhow::{Context, Result, bail};
use serde::Serialize;

use i18n_admin::interact::Permission;
use i18n_admin::model::Page;
use i18n_admin::shell::Row;
use i18n_admin::views::ViewContext;

use crate::cli_runtime::Env;
use crate::{Commands, ConfigCommands, KeyCommands, LocaleCommands, ShellCommands, TranslateCommands};

mod config;
mod dispatch;
mod keys;
mod locales;
mod reports;
mod shell;
mod translate;

pub(super) async fn handle_command(env: &Env, command: Commands) -> Result<()> {
    dispatch::handle_command(env, command).await
}

fn print_json<T: Serialize + ?Sized>(value: &T, what: &str) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).with_context(|| format!("serialize {} json", what))?
    );
    Ok(())
}

fn print_page<T: Row>(page: &Page<T>) {
    println!(
        "page {}/{} ({} results)",
        page.page_index + 1,
        page.pages_count.max(1),
        page.total_count
    );
    for item in &page.items {
        println!("  {}", item.row());
    }
}

/// Views report their own failures; this only turns them into an exit code.
fn succeeded(ok: bool, what: &str) -> Result<()> {
    if !ok {
        bail!("{} failed", what);
    }
    Ok(())
}

fn require(ctx: &ViewContext, permission: Permission) -> Result<()> {
    if !ctx.permitted(permission) {
        bail!("missing permission {}", permission);
    }
    Ok(())
}
