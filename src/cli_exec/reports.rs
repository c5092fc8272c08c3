use std::io::Write;

use i18n_admin::import::ImportQueue;
use i18n_admin::statistics::completion;
use i18n_admin::views::StatisticsView;

use crate::cli_commands::admin::{ExportArgs, ImportArgs, StatsArgs, TargetArgs};

use super::*;

pub(super) async fn handle_target_command(env: &Env, args: TargetArgs) -> Result<()> {
    let mut conn = env.connect()?;

    if args.clear {
        conn.session.clear_target()?;
        println!("Target cleared");
        return Ok(());
    }
    let Some(code) = args.code else {
        match conn.session.load()? {
            Some(target) => println!("{}", target.label()),
            None => println!("no target locale"),
        }
        return Ok(());
    };

    let default_locale = conn.ctx.remote.get_default_locale().await?;
    let active = conn.ctx.remote.list_available_locales().await?;
    let Some(target) = active.into_iter().find(|l| l.code == code) else {
        bail!("{} is not an application locale", code);
    };
    if let Some(default_locale) = default_locale.filter(|d| d.same_locale(&target)) {
        conn.ctx.notify(&format!(
            "default locale is already {}",
            default_locale.english_language
        ));
        bail!("target not changed");
    }

    conn.session.set_target(Some(target.clone()))?;
    println!("Translating into {}", target.label());
    Ok(())
}

pub(super) async fn handle_stats_command(env: &Env, args: StatsArgs) -> Result<()> {
    let conn = env.connect()?;
    let mut view = StatisticsView::open(conn.ctx.clone()).await?;
    if let Some(lang) = &args.lang {
        view.set_select_lang(lang).await?;
    }

    if args.json {
        let out = serde_json::json!({
            "selectLang": view.select_lang(),
            "rows": view.rows(),
            "chart": view.chart(),
        });
        return print_json(&out, "statistics");
    }

    if args.chart {
        let Some(chart) = view.chart() else {
            println!("no data");
            return Ok(());
        };
        println!("{} / {}", chart.x_axis_label, chart.y_axis_label);
        for series in &chart.series {
            println!("{}:", series.key);
            for (locale, count) in &series.values {
                println!("  {:<8} {}", locale, count);
            }
        }
        return Ok(());
    }

    if view.rows().is_empty() {
        println!("no data");
        return Ok(());
    }
    println!(
        "{:<8} {:<20} {:>10} {:>12} {:>5}",
        "LOCALE", "LANGUAGE", "TRANSLATED", "TO TRANSLATE", "DONE"
    );
    for stat in view.rows() {
        println!(
            "{:<8} {:<20} {:>10} {:>12} {:>4}%",
            stat.locale,
            stat.english_language,
            stat.translated,
            stat.totranslate,
            completion(stat)
        );
    }
    Ok(())
}

pub(super) async fn handle_import_command(env: &Env, args: ImportArgs) -> Result<()> {
    let conn = env.connect()?;
    require(&conn.ctx, Permission::KeyWrite)?;

    let mut queue = ImportQueue::new();
    for path in &args.files {
        queue.add(path)?;
    }
    let outcome = queue.process(&conn.ctx.remote).await;
    for file in queue.files() {
        println!("{:<32} {:>3}% {}", file.name, file.progress, file.status);
    }

    match outcome? {
        Some(report) => conn.ctx.notify(&report.summary),
        None => bail!("nothing was uploaded"),
    }
    Ok(())
}

pub(super) async fn handle_export_command(env: &Env, args: ExportArgs) -> Result<()> {
    let conn = env.connect()?;
    let bytes = conn.ctx.remote.export_keys().await.context("export keys")?;

    match args.output {
        Some(path) => {
            tokio::fs::write(&path, &bytes)
                .await
                .with_context(|| format!("write {}", path.display()))?;
            println!("Exported {} bytes to {}", bytes.len(), path.display());
        }
        None => {
            let mut out = std::io::stdout().lock();
            out.write_all(&bytes).context("write export")?;
            out.flush().context("flush export")?;
        }
    }
    Ok(())
}
