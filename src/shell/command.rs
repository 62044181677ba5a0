// Shell command types - Parsing of one input line

use crate::cart::item::ItemId;
use crate::cart::money::{Money, MoneyParseError};

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Add {
        id: ItemId,
        quantity: u32,
        unit_price: Money,
        label: String,
    },
    /// `amount: None` removes the whole line
    Remove {
        id: ItemId,
        amount: Option<i64>,
    },
    Clear,
    Undo,
    Redo,
    Show,
    History,
    Json,
    Help,
    Quit,
}

/// Errors produced while parsing an input line
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("invalid {name}: {value}")]
    InvalidArgument { name: &'static str, value: String },

    #[error("invalid price: {0}")]
    InvalidPrice(#[from] MoneyParseError),
}

pub const HELP_TEXT: &str = "\
commands:
  add <id> <qty> <price> <label...>   add units of a line (merges by id)
  remove <id> [amount]                remove units, or the whole line
  clear                               empty the cart
  undo | redo                         step through recorded states
  show                                print the cart
  history                             print history and redo depth
  json                                print the current cart as JSON
  help                                show this text
  quit                                leave";

impl ShellCommand {
    /// Parse one input line
    ///
    /// Returns `Ok(None)` for blank lines.
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(None);
        };

        let command = match head.to_ascii_lowercase().as_str() {
            "add" | "a" => {
                let id = parse_arg(words.next(), "id")?;
                let quantity = parse_arg(words.next(), "quantity")?;
                let unit_price: Money = words
                    .next()
                    .ok_or(ParseError::MissingArgument("price"))?
                    .parse()?;
                let label = words.collect::<Vec<_>>().join(" ");
                if label.is_empty() {
                    return Err(ParseError::MissingArgument("label"));
                }
                ShellCommand::Add {
                    id,
                    quantity,
                    unit_price,
                    label,
                }
            }
            "remove" | "rm" | "r" => {
                let id = parse_arg(words.next(), "id")?;
                let amount = match words.next() {
                    Some(word) => Some(parse_arg(Some(word), "amount")?),
                    None => None,
                };
                ShellCommand::Remove { id, amount }
            }
            "clear" => ShellCommand::Clear,
            "undo" | "u" => ShellCommand::Undo,
            "redo" => ShellCommand::Redo,
            "show" | "ls" => ShellCommand::Show,
            "history" | "h" => ShellCommand::History,
            "json" => ShellCommand::Json,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" | "q" => ShellCommand::Quit,
            other => return Err(ParseError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }
}

fn parse_arg<T: std::str::FromStr>(
    word: Option<&str>,
    name: &'static str,
) -> Result<T, ParseError> {
    let word = word.ok_or(ParseError::MissingArgument(name))?;
    word.parse().map_err(|_| ParseError::InvalidArgument {
        name,
        value: word.to_string(),
    })
}
