use i18n_admin::views::DashboardView;

use super::*;

pub(super) async fn handle_locales_command(env: &Env, command: LocaleCommands) -> Result<()> {
    let conn = env.connect()?;
    let ctx = &conn.ctx;

    match command {
        LocaleCommands::List { json } => {
            let view = DashboardView::open(ctx.clone(), conn.session.clone()).await?;
            let sets = view.sets();
            if json {
                let out = serde_json::json!({
                    "applicationLocales": sets.active(),
                    "availableLocales": sets.available(),
                    "defaultLocale": sets.default_locale(),
                    "allowTranslate": sets.allow_translate(),
                });
                print_json(&out, "locales")?;
            } else {
                if view.hidden() {
                    println!("warning: the default locale could not be read");
                }
                println!("application locales:");
                for locale in sets.active() {
                    let marker = if Some(locale) == sets.default_locale() {
                        '*'
                    } else {
                        ' '
                    };
                    println!("{} {}", marker, locale.label());
                }
                println!("available locales:");
                for locale in sets.available() {
                    println!("  {}", locale.label());
                }
            }
        }
        LocaleCommands::All { json } => {
            let all = ctx.remote.list_locales().await?;
            if json {
                print_json(&all, "locales")?;
            } else {
                for locale in all {
                    println!("{}", locale.label());
                }
            }
        }
        LocaleCommands::Show { code, json } => {
            let locale = ctx.remote.get_locale(&code).await?;
            if json {
                print_json(&locale, "locale")?;
            } else {
                println!("code: {}", locale.code);
                println!("language: {}", locale.language);
                println!("english_language: {}", locale.english_language);
            }
        }
        LocaleCommands::Add { codes } => {
            let mut view = DashboardView::open(ctx.clone(), conn.session.clone()).await?;
            succeeded(view.add(&codes).await, "adding locales")?;
        }
        LocaleCommands::Remove { codes } => {
            let mut view = DashboardView::open(ctx.clone(), conn.session.clone()).await?;
            let removal = view.remove(&codes).await;
            succeeded(!removal.removed.is_empty(), "removing locales")?;
            if removal.default_cleared {
                println!(
                    "the default locale was removed; choose another with `i18n-admin locales default <code>`"
                );
            }
        }
        LocaleCommands::Default { code: None } => match ctx.remote.get_default_locale().await? {
            Some(locale) => println!("{}", locale.label()),
            None => println!("no default locale"),
        },
        LocaleCommands::Default { code: Some(code) } => {
            let mut view = DashboardView::open(ctx.clone(), conn.session.clone()).await?;
            succeeded(view.update_default(&code).await, "updating the default locale")?;
        }
    }

    Ok(())
}
