//! Error type shared by every command handler.
//!
//! Each error carries two messages for two audiences: the `Display` text
//! (via `thiserror`) is the technical message for the operator log, and
//! [`BotError::user_message`] renders the friendly text for the reply
//! channel. The two are never conflated.

use crate::lookup::title_case;
use crate::record::Category;
use thiserror::Error;

/// Error type for command parsing and execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BotError {
    /// The input's command token is not in the registry. Always surfaced
    /// back to the caller as a reply, never fatal.
    #[error("unrecognized command '{0}'")]
    UnknownCommand(String),

    /// Malformed dice notation.
    #[error("failed to parse roll input: {0}")]
    ParseError(String),

    /// A reference lookup matched nothing.
    #[error("failed to find {category}-type entry for '{query}'")]
    NotFound { category: Category, query: String },

    /// A random draw hit an empty category. Registry gating guarantees the
    /// reference categories are non-empty whenever the drawing commands are
    /// registered, so reaching this is a programming error, not bad input.
    #[error("no {0} records available for random selection")]
    EmptyCategory(Category),

    /// The registry ended up with no commands at all. Startup-fatal.
    #[error("no commands available to run")]
    EmptyRegistry,
}

impl BotError {
    /// The friendly error message, for response purposes.
    pub fn user_message(&self) -> String {
        match self {
            BotError::UnknownCommand(token) => {
                format!(":grey_question: Sorry, I don't know how to '{token}'. Try 'help'!")
            }
            BotError::ParseError(_) => concat!(
                "Oops! To roll, ask me like this: (X)YdZ\n",
                "  X: The number of times you want to roll (optional)\n",
                "  Y: The number of dice to roll\n",
                "  Z: The type of dice to roll (doesn't have to be a real die)"
            )
            .to_string(),
            BotError::NotFound { category, query } => format!(
                ":x: Sorry! I couldn't find a {category} called '{}'...",
                title_case(query)
            ),
            // Internal faults get a generic apology; details stay in the log.
            BotError::EmptyCategory(_) | BotError::EmptyRegistry => {
                ":x: Sorry! Something went wrong on my end...".to_string()
            }
        }
    }
}
