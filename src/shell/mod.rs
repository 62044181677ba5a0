// Interactive cart shell
//
// The shell is the caller that pairs every cart mutation with a history
// record. It reads one command per line and writes plain text replies.

pub mod command;

pub use command::{HELP_TEXT, ParseError, ShellCommand};

use crate::cart::aggregate::{AddOutcome, RemoveOutcome};
use crate::config::SessionConfig;
use crate::history::manager::{RedoOutcome, UndoOutcome};
use crate::session::{Session, SessionError};
use std::fmt::Write as _;
use std::io::{BufRead, Write};

/// Reply to one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub quit: bool,
}

impl Reply {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quit: false,
        }
    }
}

/// A session driven by text commands
pub struct Shell {
    session: Session,
    show_totals: bool,
}

impl Shell {
    pub fn new(config: &SessionConfig) -> Result<Self, SessionError> {
        Ok(Self {
            session: Session::from_config(config)?,
            show_totals: config.show_totals,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Parse and execute one line
    ///
    /// Returns `None` for blank lines.
    pub fn handle_line(&mut self, line: &str) -> Option<Reply> {
        match ShellCommand::parse(line) {
            Ok(Some(command)) => Some(self.execute(command)),
            Ok(None) => None,
            Err(e) => {
                tracing::debug!(error = %e, "rejected input");
                Some(Reply::text(format!("error: {}", e)))
            }
        }
    }

    pub fn execute(&mut self, command: ShellCommand) -> Reply {
        let mut reply = match command {
            ShellCommand::Add {
                id,
                quantity,
                unit_price,
                label,
            } => {
                let outcome = self.session.apply_if_changed(
                    |cart| cart.add_or_increment(id, label, quantity, unit_price),
                    |outcome: &AddOutcome| *outcome != AddOutcome::Ignored,
                );
                match outcome {
                    AddOutcome::Inserted => Reply::text(format!("added #{}", id)),
                    AddOutcome::Incremented { quantity } => {
                        Reply::text(format!("#{} now x{}", id, quantity))
                    }
                    AddOutcome::Ignored => Reply::text("nothing to add"),
                }
            }
            ShellCommand::Remove { id, amount } => {
                let outcome = self.session.apply_if_changed(
                    |cart| cart.remove_or_decrement(id, amount.unwrap_or(0)),
                    |outcome: &RemoveOutcome| *outcome != RemoveOutcome::NotFound,
                );
                match outcome {
                    RemoveOutcome::Removed => Reply::text(format!("removed #{}", id)),
                    RemoveOutcome::Decremented { remaining } => {
                        Reply::text(format!("#{} now x{}", id, remaining))
                    }
                    RemoveOutcome::NotFound => Reply::text(format!("#{} not found", id)),
                }
            }
            ShellCommand::Clear => {
                let cleared = self.session.apply_if_changed(
                    |cart| {
                        let had_items = !cart.is_empty();
                        cart.clear();
                        had_items
                    },
                    |had_items: &bool| *had_items,
                );
                if cleared {
                    Reply::text("cart cleared")
                } else {
                    Reply::text("cart already empty")
                }
            }
            ShellCommand::Undo => match self.session.undo() {
                UndoOutcome::Applied => Reply::text("undone"),
                UndoOutcome::NothingToUndo => Reply::text("nothing to undo"),
            },
            ShellCommand::Redo => match self.session.redo() {
                RedoOutcome::Applied => Reply::text("redone"),
                RedoOutcome::NothingToRedo => Reply::text("nothing to redo"),
            },
            ShellCommand::Show => return Reply::text(self.render_cart()),
            ShellCommand::History => {
                let history = self.session.history();
                let mut text = format!(
                    "history {}/{}, redo {}",
                    history.history_depth(),
                    history.capacity(),
                    history.redo_depth()
                );
                for (index, snapshot) in history.past().enumerate() {
                    let _ = write!(
                        text,
                        "\n  {} {} lines={} total={}",
                        index,
                        snapshot.created_at().format("%H:%M:%S%.3f"),
                        snapshot.len(),
                        snapshot.total()
                    );
                }
                return Reply::text(text);
            }
            ShellCommand::Json => {
                let text = match self.session.history().current() {
                    Some(snapshot) => serde_json::to_string_pretty(snapshot)
                        .unwrap_or_else(|e| format!("error: {}", e)),
                    None => "null".to_string(),
                };
                return Reply::text(text);
            }
            ShellCommand::Help => return Reply::text(HELP_TEXT),
            ShellCommand::Quit => {
                return Reply {
                    text: "bye".to_string(),
                    quit: true,
                };
            }
        };

        if self.show_totals {
            let cart = self.session.cart();
            let _ = write!(
                reply.text,
                " (lines={}, total={})",
                cart.len(),
                cart.total()
            );
        }
        reply
    }

    fn render_cart(&self) -> String {
        let cart = self.session.cart();
        if cart.is_empty() {
            return "cart is empty".to_string();
        }
        let mut text = String::new();
        for item in cart.items() {
            let _ = writeln!(text, "{}", item);
        }
        let _ = write!(text, "total: {}", cart.total());
        text
    }

    /// Run until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> std::io::Result<()> {
        for line in input.lines() {
            let line = line?;
            let Some(reply) = self.handle_line(&line) else {
                continue;
            };
            writeln!(output, "{}", reply.text)?;
            output.flush()?;
            if reply.quit {
                break;
            }
        }
        Ok(())
    }
}
