//! Interactive line-oriented session over the keys or translate view.
//!
//! One command runs at a time. The search debounce deadline is raced against
//! the next input line, so typing `search` repeatedly within 500ms only
//! queries once.

use std::io::Write;
use std::time::Instant;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::interact::StaticConfirm;
use crate::list::Direction;
use crate::model::{Key, Translation};
use crate::remote::ApiResult;
use crate::views::{KeysView, ListSource, Listing, TranslateView};

mod command;

pub use self::command::{Command, HELP, parse_command};

/// One line per listed record.
pub trait Row {
    fn row(&self) -> String;
    fn detail(&self) -> String;
}

fn flags(missing: bool, outdated: bool, approx: bool) -> String {
    let mut out = Vec::new();
    if missing {
        out.push("missing");
    }
    if outdated {
        out.push("outdated");
    }
    if approx {
        out.push("approx");
    }
    if out.is_empty() {
        String::new()
    } else {
        format!(" [{}]", out.join(","))
    }
}

impl Row for Key {
    fn row(&self) -> String {
        format!(
            "{}{}  {}",
            self.name,
            flags(self.missing, self.outdated, self.approx),
            self.translation
        )
    }

    fn detail(&self) -> String {
        format!(
            "key: {}\ncomment: {}\ntranslation: {}",
            self.name, self.comment, self.translation
        )
    }
}

impl Row for Translation {
    fn row(&self) -> String {
        format!(
            "{}{}  {}",
            self.name,
            flags(self.missing, self.target.outdated, self.target.approx),
            self.target.translation
        )
    }

    fn detail(&self) -> String {
        format!(
            "key: {}\ncomment: {}\nsource ({}): {}\ntarget ({}): {}",
            self.name,
            self.comment,
            self.source.locale,
            self.source.translation,
            self.target.locale,
            self.target.translation
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub enum ShellView {
    Keys(KeysView),
    Translate(TranslateView),
}

pub struct Shell<W> {
    view: ShellView,
    out: W,
}

impl<W: Write> Shell<W> {
    pub fn new(view: ShellView, out: W) -> Self {
        Self { view, out }
    }

    pub fn view(&self) -> &ShellView {
        &self.view
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub fn search_deadline(&self) -> Option<Instant> {
        match &self.view {
            ShellView::Keys(v) => v.listing().search_deadline(),
            ShellView::Translate(v) => v.listing().and_then(|l| l.search_deadline()),
        }
    }

    /// Reads commands until `quit`, end of input or Ctrl-C.
    pub async fn run<R>(&mut self, input: R) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        self.render_page()?;
        loop {
            let deadline = self.search_deadline();
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line.context("read command")? else {
                        break;
                    };
                    match parse_command(&line) {
                        Ok(Some(cmd)) => {
                            if self.execute(cmd, Instant::now()).await? == Flow::Quit {
                                break;
                            }
                        }
                        Ok(None) => {}
                        Err(err) => writeln!(self.out, "{:#}", err).context("write output")?,
                    }
                }
                _ = wait_until(deadline) => {
                    self.poll_search(Instant::now()).await?;
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::debug!("interrupted");
                    break;
                }
            }
        }
        self.out.flush().context("flush output")?;
        Ok(())
    }

    /// Runs the debounced search if it is due.
    pub async fn poll_search(&mut self, now: Instant) -> Result<()> {
        let ran = match &mut self.view {
            ShellView::Keys(v) => v.listing_mut().poll_search(now).await,
            ShellView::Translate(v) => match v.listing_mut() {
                Some(l) => l.poll_search(now).await,
                None => Ok(false),
            },
        };
        match ran {
            Ok(true) => self.render_page(),
            Ok(false) => Ok(()),
            Err(err) => self.failed(&err.to_string()),
        }
    }

    pub async fn execute(&mut self, cmd: Command, now: Instant) -> Result<Flow> {
        match cmd {
            Command::Help => {
                writeln!(self.out, "{}", HELP).context("write output")?;
                return Ok(Flow::Continue);
            }
            Command::Quit => return Ok(Flow::Quit),
            _ => {}
        }

        let outcome = match &mut self.view {
            ShellView::Keys(view) => keys_command(view, cmd, now).await,
            ShellView::Translate(view) if view.no_target() => Outcome::Message(
                "nothing to translate: a default locale and a second application locale are needed"
                    .to_string(),
            ),
            ShellView::Translate(view) => translate_command(view, cmd, now).await,
        };

        match outcome {
            Outcome::Nothing => Ok(()),
            Outcome::Page => self.render_page(),
            Outcome::Current => self.render_current(),
            Outcome::Message(msg) => writeln!(self.out, "{}", msg).context("write output"),
            Outcome::Failed(msg) => self.failed(&msg),
        }?;
        Ok(Flow::Continue)
    }

    fn failed(&mut self, message: &str) -> Result<()> {
        tracing::warn!(error = %message, "request failed");
        writeln!(self.out, "request failed: {}", message).context("write output")
    }

    pub fn render_page(&mut self) -> Result<()> {
        match &self.view {
            ShellView::Keys(v) => write_page(&mut self.out, v.listing()),
            ShellView::Translate(v) => match v.listing() {
                Some(l) => write_page(&mut self.out, l),
                None => writeln!(self.out, "no target locale").context("write output"),
            },
        }
    }

    pub fn render_current(&mut self) -> Result<()> {
        let (detail, state) = match &self.view {
            ShellView::Keys(v) => (
                v.listing().current().item().map(Row::detail),
                v.listing().current().state(),
            ),
            ShellView::Translate(v) => match v.listing() {
                Some(l) => (l.current().item().map(Row::detail), l.current().state()),
                None => (None, None),
            },
        };
        match (detail, state) {
            (Some(detail), Some(state)) => {
                writeln!(self.out, "{}\nstate: {}", detail, state).context("write output")
            }
            _ => writeln!(self.out, "nothing selected").context("write output"),
        }
    }
}

enum Outcome {
    Nothing,
    Page,
    Current,
    Message(String),
    Failed(String),
}

impl From<ApiResult<Outcome>> for Outcome {
    fn from(result: ApiResult<Outcome>) -> Self {
        result.unwrap_or_else(|err| Outcome::Failed(err.to_string()))
    }
}

/// Commands shared by both views; `None` when the command is view-specific.
async fn listing_command<S>(listing: &mut Listing<S>, cmd: &Command, now: Instant) -> Option<Outcome>
where
    S: ListSource,
{
    let reloaded = |r: ApiResult<bool>| -> Outcome {
        match r {
            Ok(true) => Outcome::Page,
            Ok(false) => Outcome::Nothing,
            Err(err) => Outcome::Failed(err.to_string()),
        }
    };
    let moved = |r: ApiResult<()>| -> Outcome { r.map(|_| Outcome::Current).into() };

    Some(match cmd {
        Command::List => Outcome::Page,
        Command::Page(n) => reloaded(listing.set_page_index(*n).await),
        Command::Size(n) => reloaded(listing.set_page_size(*n).await),
        Command::Missing(on) => reloaded(listing.set_missing(*on).await),
        Command::Outdated(on) => reloaded(listing.set_outdated(*on).await),
        Command::Approx(on) => reloaded(listing.set_approx(*on).await),
        Command::Search(text) => {
            listing.search_input(text, now);
            Outcome::Nothing
        }
        Command::Next => moved(listing.navigate(Direction::Forward).await),
        Command::Prev => moved(listing.navigate(Direction::Backward).await),
        Command::Select(n) => {
            if *n == 0 || *n > listing.list().items().len() {
                Outcome::Message(format!("no item {} on this page", n))
            } else {
                moved(listing.select(n - 1).await)
            }
        }
        Command::Edit(text) => match listing.set_translation(text) {
            Some(state) => Outcome::Message(format!("state: {}", state)),
            None => Outcome::Message("nothing selected".to_string()),
        },
        _ => return None,
    })
}

async fn keys_command(view: &mut KeysView, cmd: Command, now: Instant) -> Outcome {
    if let Some(outcome) = listing_command(view.listing_mut(), &cmd, now).await {
        return outcome;
    }
    match cmd {
        Command::Comment(text) => match view.listing_mut().set_comment(&text) {
            Some(state) => Outcome::Message(format!("state: {}", state)),
            None => Outcome::Message("nothing selected".to_string()),
        },
        Command::Save => {
            view.save().await;
            Outcome::Nothing
        }
        Command::SaveNext => {
            if view.save().await {
                view.listing_mut()
                    .navigate(Direction::Forward)
                    .await
                    .map(|_| Outcome::Current)
                    .into()
            } else {
                Outcome::Nothing
            }
        }
        Command::Clear { confirmed } => cleared(view.clear(&StaticConfirm(confirmed)), "clear"),
        Command::Delete { confirmed } => {
            if view.current().is_none() {
                Outcome::Message("nothing selected".to_string())
            } else if view.delete_current(&StaticConfirm(confirmed)).await {
                Outcome::Page
            } else if !confirmed {
                Outcome::Message("Delete Key ? (confirm with `delete yes`)".to_string())
            } else {
                Outcome::Nothing
            }
        }
        _ => Outcome::Nothing,
    }
}

async fn translate_command(view: &mut TranslateView, cmd: Command, now: Instant) -> Outcome {
    if let Some(listing) = view.listing_mut() {
        if let Some(outcome) = listing_command(listing, &cmd, now).await {
            return outcome;
        }
    }
    match cmd {
        Command::Save => {
            view.save(false).await;
            Outcome::Nothing
        }
        Command::SaveNext => {
            if view.save(true).await {
                Outcome::Current
            } else {
                Outcome::Nothing
            }
        }
        Command::Clear { confirmed } => cleared(view.reset(&StaticConfirm(confirmed)), "clear"),
        Command::Comment(_) | Command::Delete { .. } => {
            Outcome::Message("not available while translating".to_string())
        }
        _ => Outcome::Nothing,
    }
}

fn cleared(done: bool, word: &str) -> Outcome {
    if done {
        Outcome::Current
    } else {
        Outcome::Message(format!("Clear form ? (confirm with `{} yes`)", word))
    }
}

fn write_page<W, S>(out: &mut W, listing: &Listing<S>) -> Result<()>
where
    W: Write,
    S: ListSource,
    S::Item: Row,
{
    let list = listing.list();
    writeln!(
        out,
        "page {}/{} ({} results)",
        list.page_index(),
        list.pages_count().max(1),
        list.total_count()
    )
    .context("write output")?;
    let current = list.current_index();
    for (i, item) in list.items().iter().enumerate() {
        let marker = if Some(i) == current { '*' } else { ' ' };
        writeln!(out, "{} {:>3} {}", marker, i + 1, item.row()).context("write output")?;
    }
    Ok(())
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(tokio::time::Instant::from_std(at)).await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
#[path = "tests/shell_tests.rs"]
mod tests;
