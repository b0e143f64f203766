//! Operator command parsing.

use aerodesk_types::{ParseQueryContextError, QueryContext};
use thiserror::Error;

/// One line of operator input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Ask the assistant. Without a context the session's pending context is
    /// used.
    Ask {
        context: Option<QueryContext>,
        question: String,
    },
    /// Change the pending context for later questions.
    Context(QueryContext),
    /// Print the whole transcript.
    History,
    /// Clear the transcript.
    Reset,
    /// Show flights matching a term (empty shows all).
    Flights(String),
    /// Show cargo matching a term, with totals.
    Cargo(String),
    /// Reload both record collections.
    Refresh,
    /// Cargo manifest of one flight.
    Manifest(String),
    Health,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),

    #[error("`{command}` needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error(transparent)]
    Context(#[from] ParseQueryContextError),
}

pub const HELP: &str = "\
commands:
  ask [general|cargo|maintenance|regulations] <question>
  context <general|cargo|maintenance|regulations>
  history | reset
  flights [term] | cargo [term] | refresh
  manifest <flight number>
  health | help | quit";

impl Command {
    /// Parses one input line. Returns `None` for a blank line.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError`] for unknown verbs or missing arguments.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim_start()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "ask" => parse_ask(rest)?,
            "context" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "context",
                        what: "a context name",
                    });
                }
                Command::Context(rest.parse()?)
            }
            "history" => Command::History,
            "reset" => Command::Reset,
            // Search terms keep their spacing; only the blank check trims.
            "flights" => Command::Flights(rest.to_string()),
            "cargo" => Command::Cargo(rest.to_string()),
            "refresh" => Command::Refresh,
            "manifest" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "manifest",
                        what: "a flight number",
                    });
                }
                Command::Manifest(rest.to_string())
            }
            "health" => Command::Health,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

/// A leading context name is taken as the context only when a question
/// follows it.
fn parse_ask(rest: &str) -> Result<Command, CommandError> {
    if let Some((first, question)) = rest.split_once(char::is_whitespace) {
        if let Ok(context) = first.parse::<QueryContext>() {
            return Ok(Command::Ask {
                context: Some(context),
                question: question.trim_start().to_string(),
            });
        }
    }
    Ok(Command::Ask {
        context: None,
        question: rest.to_string(),
    })
}
