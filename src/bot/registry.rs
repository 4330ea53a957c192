//! Command registry mapping keywords to handlers

use super::handlers::{
    AddHandler, AllHandler, ChangeHandler, ExitHandler, HelloHandler, HelpHandler, PhoneHandler,
};
use super::{BotContext, CommandError, CommandHandler, CommandResult};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// One line of the help listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEntry {
    pub usage: String,
    pub description: String,
}

/// Registry that manages all available command handlers
pub struct CommandRegistry {
    handlers: HashMap<String, Arc<dyn CommandHandler>>,
    order: Vec<Arc<dyn CommandHandler>>,
}

impl CommandRegistry {
    /// Creates a new empty registry
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Creates a registry with the built-in contact commands
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(HelloHandler));
        registry.register(Box::new(AddHandler));
        registry.register(Box::new(ChangeHandler));
        registry.register(Box::new(PhoneHandler));
        registry.register(Box::new(AllHandler));
        registry.register(Box::new(ExitHandler));
        registry.register(Box::new(HelpHandler));
        registry
    }

    /// Registers a handler under its name and every alias
    pub fn register(&mut self, handler: Box<dyn CommandHandler>) {
        let handler: Arc<dyn CommandHandler> = Arc::from(handler);
        let keywords = std::iter::once(handler.name()).chain(handler.aliases().iter().copied());
        for keyword in keywords {
            self.handlers.insert(keyword.to_lowercase(), Arc::clone(&handler));
        }
        self.order.push(handler);
    }

    /// Gets a handler by keyword
    pub fn get(&self, keyword: &str) -> Option<Arc<dyn CommandHandler>> {
        self.handlers.get(keyword).cloned()
    }

    /// Lists all registered keywords, aliases included
    pub fn keywords(&self) -> Vec<String> {
        let mut keywords: Vec<String> = self.handlers.keys().cloned().collect();
        keywords.sort();
        keywords
    }

    /// Help lines in registration order
    pub fn help_entries(&self) -> Vec<HelpEntry> {
        self.order
            .iter()
            .map(|h| HelpEntry {
                usage: h.usage().to_string(),
                description: h.description().to_string(),
            })
            .collect()
    }

    /// Routes a command to its handler after checking its argument count
    pub fn dispatch(
        &self,
        context: &mut BotContext,
        command: &str,
        args: &[String],
    ) -> CommandResult {
        let Some(handler) = self.get(command) else {
            debug!(command, "no handler registered");
            return Err(CommandError::UnknownCommand(command.to_string()));
        };

        debug!(command, handler = handler.name(), args = args.len(), "dispatching");
        handler.validate(args)?;
        handler.execute(context, args)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::Reply;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_default_keywords() {
        let registry = CommandRegistry::with_defaults();
        assert_eq!(
            registry.keywords(),
            vec!["add", "all", "change", "close", "exit", "hello", "help", "phone", "quit"]
        );
    }

    #[test]
    fn test_aliases_share_handler() {
        let registry = CommandRegistry::with_defaults();
        let mut ctx = BotContext::new();
        for keyword in ["close", "exit", "quit"] {
            let reply = registry.dispatch(&mut ctx, keyword, &[]).unwrap();
            assert_eq!(reply, Reply::Farewell);
        }
    }

    #[test]
    fn test_unknown_command() {
        let registry = CommandRegistry::with_defaults();
        let mut ctx = BotContext::new();
        assert_eq!(
            registry.dispatch(&mut ctx, "fly", &args(&["away"])),
            Err(CommandError::UnknownCommand("fly".into()))
        );
    }

    #[test]
    fn test_dispatch_mutates_context() {
        let registry = CommandRegistry::with_defaults();
        let mut ctx = BotContext::new();
        registry
            .dispatch(&mut ctx, "add", &args(&["John", "123"]))
            .unwrap();
        registry
            .dispatch(&mut ctx, "change", &args(&["John", "456"]))
            .unwrap();
        assert_eq!(ctx.contacts.phone("John"), Some("456"));
    }

    #[test]
    fn test_invalid_arguments_are_reported() {
        let registry = CommandRegistry::with_defaults();
        let mut ctx = BotContext::new();
        let err = registry.dispatch(&mut ctx, "phone", &[]).unwrap_err();
        assert_eq!(
            err,
            CommandError::InvalidArguments {
                usage: "phone [name]".into(),
                given: 0
            }
        );
    }

    #[test]
    fn test_wrong_argument_count_leaves_book_untouched() {
        let registry = CommandRegistry::with_defaults();
        let mut ctx = BotContext::new();

        let err = registry
            .dispatch(&mut ctx, "add", &args(&["John"]))
            .unwrap_err();
        assert!(matches!(err, CommandError::InvalidArguments { given: 1, .. }));

        let err = registry
            .dispatch(&mut ctx, "add", &args(&["John", "1", "2"]))
            .unwrap_err();
        assert!(matches!(err, CommandError::InvalidArguments { given: 3, .. }));

        let err = registry
            .dispatch(&mut ctx, "change", &args(&["John"]))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Usage: change [name] [new phone number]"
        );
        assert!(ctx.contacts.is_empty());
    }

    #[test]
    fn test_registered_handler_is_validated_before_execution() {
        struct Strict;

        impl CommandHandler for Strict {
            fn name(&self) -> &str {
                "strict"
            }

            fn usage(&self) -> &str {
                "strict [one]"
            }

            fn description(&self) -> &str {
                "Needs exactly one argument"
            }

            fn arity(&self) -> Option<usize> {
                Some(1)
            }

            fn execute(&self, _context: &mut BotContext, args: &[String]) -> CommandResult {
                assert_eq!(args.len(), 1);
                Ok(Reply::Greeting)
            }
        }

        let mut registry = CommandRegistry::new();
        registry.register(Box::new(Strict));
        let mut ctx = BotContext::new();

        assert!(registry.dispatch(&mut ctx, "strict", &[]).is_err());
        assert_eq!(
            registry.dispatch(&mut ctx, "strict", &args(&["x"])),
            Ok(Reply::Greeting)
        );
        assert!(registry.get("strict").is_some());
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_help_entries_follow_registration_order() {
        let registry = CommandRegistry::with_defaults();
        let usages: Vec<String> = registry
            .help_entries()
            .into_iter()
            .map(|e| e.usage)
            .collect();
        assert_eq!(usages.first().map(String::as_str), Some("hello"));
        assert!(usages.contains(&"close, exit, quit".to_string()));
        assert_eq!(usages.len(), 7);
    }
}
