use i18n_admin::editor::CurrentItem;

use crate::cli_runtime::Connected;

use super::*;

pub(super) async fn handle_translate_command(env: &Env, command: TranslateCommands) -> Result<()> {
    let mut conn = env.connect()?;

    match command {
        TranslateCommands::List {
            list,
            approx,
            locale,
        } => {
            let locale = target_code(&mut conn, locale)?;
            let query = list.query(conn.config.page_size, approx);
            let page = conn.ctx.remote.list_translations(&locale, &query).await?;
            if list.json {
                print_json(&page, "translations")?;
            } else {
                print_page(&page);
            }
        }
        TranslateCommands::Show { name, locale, json } => {
            let locale = target_code(&mut conn, locale)?;
            let translation = conn.ctx.remote.get_translation(&locale, &name).await?;
            if json {
                print_json(&translation, "translation")?;
            } else {
                println!("{}", translation.detail());
            }
        }
        TranslateCommands::Set { name, text, locale } => {
            let locale = target_code(&mut conn, locale)?;
            let ctx = &conn.ctx;
            require(ctx, Permission::TranslationWrite)?;

            let fetched = ctx.remote.get_translation(&locale, &name).await?;
            let mut current = CurrentItem::new();
            current.set_current(fetched.clone(), fetched);
            current.set_translation(&text);
            let (Some(translation), Some(state)) = (current.item(), current.state()) else {
                bail!("translation {} not loaded", name);
            };

            match ctx.remote.update_translation(&locale, translation).await {
                Ok(()) => {
                    ctx.notify("Save success");
                    println!("state: {}", state);
                }
                Err(err) => {
                    ctx.notify("Failed to save");
                    return Err(err).context("update translation");
                }
            }
        }
    }

    Ok(())
}

fn target_code(conn: &mut Connected, explicit: Option<String>) -> Result<String> {
    if let Some(code) = explicit {
        return Ok(code);
    }
    conn.session
        .load()?
        .map(|l| l.code.clone())
        .context("no target locale (run `i18n-admin target <code>` or pass --locale)")
}
