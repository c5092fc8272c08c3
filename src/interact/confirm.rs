use std::io::{self, BufRead, IsTerminal, Write};

/// Asks the operator before something destructive happens.
pub trait Confirm: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

/// A fixed answer: `--yes` on the command line, or tests.
#[derive(Clone, Copy, Debug)]
pub struct StaticConfirm(pub bool);

impl Confirm for StaticConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        tracing::debug!(prompt, answer = self.0, "confirmation");
        self.0
    }
}

/// Prompts on the terminal; declines when stdin is not interactive.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        let stdin = io::stdin();
        if !stdin.is_terminal() {
            eprintln!("{} (not a terminal; pass --yes to confirm)", prompt);
            return false;
        }
        eprint!("{} [y/N] ", prompt);
        io::stderr().flush().ok();
        let mut line = String::new();
        if stdin.lock().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim(), "y" | "Y" | "yes" | "YES")
    }
}
