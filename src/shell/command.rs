use anyhow::{Context, Result, bail};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    List,
    Page(u64),
    Size(u64),
    Missing(bool),
    Outdated(bool),
    Approx(bool),
    Search(String),
    Next,
    Prev,
    /// 1-based position on the loaded page.
    Select(usize),
    Edit(String),
    Comment(String),
    Save,
    SaveNext,
    Clear { confirmed: bool },
    Delete { confirmed: bool },
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  list                     show the loaded page
  page <n> | size <n>      change page or page size
  missing on|off           only empty translations
  outdated on|off          only outdated translations
  approx on|off            only approximate translations (translate)
  search <text>            filter by name (runs after 500ms of quiet)
  next | prev              move the selection
  select <n>               select the n-th item of the page
  edit <text>              set the translation of the selection
  comment <text>           set the comment of the selection (keys)
  save | save-next         save the selection (and move to the next)
  clear [yes]              empty the form
  delete [yes]             delete the selected key (keys)
  help | quit";

/// Parses one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let cmd = match word {
        "list" | "ls" => Command::List,
        "page" => Command::Page(number(word, rest)?),
        "size" => Command::Size(number(word, rest)?),
        "missing" => Command::Missing(switch(word, rest)?),
        "outdated" => Command::Outdated(switch(word, rest)?),
        "approx" => Command::Approx(switch(word, rest)?),
        "search" => Command::Search(rest.to_string()),
        "next" | "n" => Command::Next,
        "prev" | "p" => Command::Prev,
        "select" => {
            let n: usize = rest
                .parse()
                .with_context(|| format!("select: not a position: {:?}", rest))?;
            if n == 0 {
                bail!("select: positions start at 1");
            }
            Command::Select(n)
        }
        "edit" => Command::Edit(rest.to_string()),
        "comment" => Command::Comment(rest.to_string()),
        "save" => Command::Save,
        "save-next" => Command::SaveNext,
        "clear" => Command::Clear {
            confirmed: rest == "yes",
        },
        "delete" => Command::Delete {
            confirmed: rest == "yes",
        },
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => bail!("unknown command: {} (try `help`)", other),
    };
    Ok(Some(cmd))
}

fn number(word: &str, rest: &str) -> Result<u64> {
    rest.parse()
        .with_context(|| format!("{}: not a number: {:?}", word, rest))
}

fn switch(word: &str, rest: &str) -> Result<bool> {
    match rest {
        "on" | "true" | "yes" | "" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        other => bail!("{}: expected on|off, got {:?}", word, other),
    }
}
