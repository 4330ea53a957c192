//! Result types for command execution

use crate::contacts::Contact;
use thiserror::Error;

/// What a successfully executed command has to tell the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Greeting,
    Added {
        name: String,
        phone: String,
    },
    AlreadyExists {
        name: String,
        phone: String,
    },
    AddConflict {
        name: String,
        current_phone: String,
    },
    Changed {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    Unchanged {
        name: String,
        phone: String,
    },
    Phone {
        name: String,
        phone: String,
    },
    Listing(Vec<Contact>),
    Help,
    /// Ends the session; no further input is read
    Farewell,
}

impl Reply {
    pub fn ends_session(&self) -> bool {
        matches!(self, Reply::Farewell)
    }
}

/// Recoverable failures reported by the bot loop
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    #[error("Usage: {usage}")]
    InvalidArguments { usage: String, given: usize },

    #[error("Name '{0}' not found.")]
    NotFound(String),

    #[error("No contacts available.")]
    Empty,
}

impl CommandError {
    /// Short heading printed above the error details
    pub fn heading(&self) -> &'static str {
        match self {
            CommandError::UnknownCommand(_) => "Incorrect command.",
            CommandError::InvalidArguments { .. } => "Incorrect arguments.",
            CommandError::NotFound(_) => "Contact not found.",
            CommandError::Empty => "Nothing to show.",
        }
    }

    /// Whether the help text should follow the error report
    pub fn shows_help(&self) -> bool {
        matches!(self, CommandError::UnknownCommand(_))
    }
}

/// Type alias for handler results
pub type CommandResult = Result<Reply, CommandError>;
