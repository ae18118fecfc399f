//! User-facing console
//!
//! Everything the launch flow says to the user, and every yes/no question it
//! asks, goes through the [`Console`] trait so the negotiation can be driven
//! by a script in tests.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use colored::*;

/// Line-oriented console with yes/no prompts
pub trait Console {
    /// Plain informational text (tables included)
    fn info(&mut self, message: &str);

    /// Something the user should look at, but the flow continues
    fn warn(&mut self, message: &str);

    /// A failure report
    fn error(&mut self, message: &str);

    /// A positive confirmation
    fn success(&mut self, message: &str);

    /// Ask a yes/no question; declining is the default
    fn confirm(&mut self, question: &str) -> Result<bool>;
}

/// Console bound to the process's stdin and stdout
pub struct TerminalConsole<R = io::StdinLock<'static>> {
    input: R,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self {
            input: io::stdin().lock(),
        }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl<R: BufRead> TerminalConsole<R> {
    /// Console that reads answers from an arbitrary reader
    pub fn with_input(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> Console for TerminalConsole<R> {
    fn info(&mut self, message: &str) {
        println!("{}", message);
    }

    fn warn(&mut self, message: &str) {
        println!("{}", message.yellow());
    }

    fn error(&mut self, message: &str) {
        println!("{}", message.red());
    }

    fn success(&mut self, message: &str) {
        println!("{}", message.green());
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        print!("{} [y/N]: ", question);
        io::stdout().flush().context("Failed to flush stdout")?;

        let mut answer = String::new();
        self.input
            .read_line(&mut answer)
            .context("Failed to read answer from stdin")?;

        Ok(is_yes(&answer))
    }
}

/// `y` and `yes` accept, in any case; everything else declines
fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
