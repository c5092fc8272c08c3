use i18n_admin::editor::CurrentItem;
use i18n_admin::model::{ListFilter, ListQuery, NewKey};
use i18n_admin::views::{DELETE_FILTERED_PROMPT, DELETE_KEY_PROMPT, submit_key};

use super::*;

pub(super) async fn handle_keys_command(env: &Env, command: KeyCommands) -> Result<()> {
    let conn = env.connect()?;
    let ctx = &conn.ctx;

    match command {
        KeyCommands::List(args) => {
            let query = args.query(conn.config.page_size, false);
            let page = ctx.remote.list_keys(&query).await?;
            if args.json {
                print_json(&page, "keys")?;
            } else {
                print_page(&page);
            }
        }
        KeyCommands::Show { name, json } => {
            let key = ctx.remote.get_key(&name).await?;
            if json {
                print_json(&key, "key")?;
            } else {
                println!("{}", key.detail());
            }
        }
        KeyCommands::Add {
            name,
            translation,
            comment,
        } => {
            let Some(default_locale) = ctx.remote.get_default_locale().await? else {
                bail!("no default locale (set one with `i18n-admin locales default <code>`)");
            };
            let key = NewKey::new(&name)
                .with_translation(translation)
                .with_comment(comment);
            let created = submit_key(ctx, Some(&default_locale), key).await;
            succeeded(created.is_some(), "creating the key")?;
        }
        KeyCommands::Edit {
            name,
            translation,
            comment,
        } => {
            if translation.is_none() && comment.is_none() {
                bail!("nothing to change (use --translation or --comment)");
            }
            require(ctx, Permission::KeyWrite)?;

            let fetched = ctx.remote.get_key(&name).await?;
            let mut current = CurrentItem::new();
            current.set_current(fetched.clone(), fetched);
            if let Some(text) = &translation {
                current.set_translation(text);
            }
            if let Some(text) = &comment {
                current.set_comment(text);
            }
            let (Some(key), Some(state)) = (current.item(), current.state()) else {
                bail!("key {} not loaded", name);
            };

            match ctx.remote.update_key(key).await {
                Ok(()) => {
                    ctx.notify("key saved");
                    println!("state: {}", state);
                }
                Err(err) => {
                    ctx.notify("key failed to save");
                    return Err(err).context("update key");
                }
            }
        }
        KeyCommands::Delete { name } => {
            require(ctx, Permission::KeyDelete)?;
            if !env.confirm().confirm(DELETE_KEY_PROMPT) {
                bail!("not deleted");
            }
            ctx.remote
                .delete_key(&name)
                .await
                .with_context(|| format!("delete key {}", name))?;
            ctx.notify(&format!("Key deleted : {}", name));
        }
        KeyCommands::DeleteFiltered {
            missing,
            outdated,
            search,
        } => {
            let filter = ListFilter {
                missing,
                outdated,
                approx: false,
                search_name: search.unwrap_or_default(),
            };
            let probe = ctx
                .remote
                .list_keys(&ListQuery::first_page(1, filter.clone()))
                .await?;
            if probe.is_empty() {
                ctx.notify("There is no filtered keys.");
                return Ok(());
            }
            require(ctx, Permission::KeyDelete)?;
            if !env.confirm().confirm(DELETE_FILTERED_PROMPT) {
                bail!("not deleted");
            }
            let summary = ctx.remote.delete_keys(&filter).await.context("delete keys")?;
            ctx.notify(&summary);
        }
    }

    Ok(())
}
