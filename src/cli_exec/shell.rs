use i18n_admin::shell::{Shell, ShellView};
use i18n_admin::views::{KeysView, TranslateView};

use super::*;

pub(super) async fn handle_shell_command(env: &Env, command: ShellCommands) -> Result<()> {
    let conn = env.connect()?;
    let page_size = conn.config.page_size;

    let view = match command {
        ShellCommands::Keys => {
            let view = KeysView::open(conn.ctx.clone(), conn.session.clone(), page_size).await?;
            if !view.can_add_keys() {
                println!("no default locale: keys cannot be created");
            }
            ShellView::Keys(view)
        }
        ShellCommands::Translate => {
            let view = TranslateView::open(conn.ctx.clone(), conn.session.clone(), page_size).await?;
            if let Some(target) = view.target() {
                println!("translating into {}", target.label());
            }
            ShellView::Translate(view)
        }
    };

    println!("type `help` for commands");
    let mut shell = Shell::new(view, std::io::stdout());
    shell
        .run(tokio::io::BufReader::new(tokio::io::stdin()))
        .await
}
