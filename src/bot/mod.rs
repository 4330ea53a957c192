//! Command dispatch for the interactive assistant bot
//!
//! Each keyword the bot understands is backed by a type implementing
//! `CommandHandler`. Handlers receive an explicit `BotContext` holding the
//! contact book instead of capturing shared state, and report failures as
//! `CommandError` values that the loop renders without stopping.

pub mod context;
pub mod display;
pub mod handlers;
pub mod parser;
pub mod registry;
pub mod repl;
pub mod result;

pub use context::BotContext;
pub use parser::{parse_input, ParsedInput};
pub use registry::CommandRegistry;
pub use repl::{run, ReplOptions};
pub use result::{CommandError, CommandResult, Reply};

/// Core trait that all command handlers must implement
pub trait CommandHandler {
    /// Returns the primary keyword for this handler
    fn name(&self) -> &str;

    /// Additional keywords dispatching to the same handler
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// Usage line shown in help and argument errors
    fn usage(&self) -> &str;

    /// Returns a description of what this handler does
    fn description(&self) -> &str;

    /// Exact number of positional arguments, `None` when arguments are ignored
    fn arity(&self) -> Option<usize> {
        None
    }

    /// Validates the argument count before execution
    fn validate(&self, args: &[String]) -> Result<(), CommandError> {
        match self.arity() {
            Some(expected) if args.len() != expected => Err(CommandError::InvalidArguments {
                usage: self.usage().to_string(),
                given: args.len(),
            }),
            _ => Ok(()),
        }
    }

    /// Executes the command against the bot state
    ///
    /// The registry runs `validate` first, so `args` matches `arity`.
    fn execute(&self, context: &mut BotContext, args: &[String]) -> CommandResult;
}
