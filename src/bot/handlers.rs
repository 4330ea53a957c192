//! Built-in command handlers of the assistant bot

use super::{BotContext, CommandError, CommandHandler, CommandResult, Reply};
use crate::contacts::{AddOutcome, ChangeOutcome};

/// `hello` - greets the user
pub struct HelloHandler;

impl CommandHandler for HelloHandler {
    fn name(&self) -> &str {
        "hello"
    }

    fn usage(&self) -> &str {
        "hello"
    }

    fn description(&self) -> &str {
        "Greets the user."
    }

    fn execute(&self, _context: &mut BotContext, _args: &[String]) -> CommandResult {
        Ok(Reply::Greeting)
    }
}

/// `add <name> <phone>` - stores a new contact, never overwrites
pub struct AddHandler;

impl CommandHandler for AddHandler {
    fn name(&self) -> &str {
        "add"
    }

    fn usage(&self) -> &str {
        "add [name] [phone number]"
    }

    fn description(&self) -> &str {
        "Adds a new contact."
    }

    fn arity(&self) -> Option<usize> {
        Some(2)
    }

    fn execute(&self, context: &mut BotContext, args: &[String]) -> CommandResult {
        let (name, phone) = (&args[0], &args[1]);

        let reply = match context.contacts.add(name, phone) {
            AddOutcome::Added => Reply::Added {
                name: name.clone(),
                phone: phone.clone(),
            },
            AddOutcome::AlreadyExists => Reply::AlreadyExists {
                name: name.clone(),
                phone: phone.clone(),
            },
            AddOutcome::Conflict { current_phone } => Reply::AddConflict {
                name: name.clone(),
                current_phone,
            },
        };
        Ok(reply)
    }
}

/// `change <name> <phone>` - replaces the phone of a known contact
pub struct ChangeHandler;

impl CommandHandler for ChangeHandler {
    fn name(&self) -> &str {
        "change"
    }

    fn usage(&self) -> &str {
        "change [name] [new phone number]"
    }

    fn description(&self) -> &str {
        "Changes the phone number of an existing contact."
    }

    fn arity(&self) -> Option<usize> {
        Some(2)
    }

    fn execute(&self, context: &mut BotContext, args: &[String]) -> CommandResult {
        let (name, new_phone) = (&args[0], &args[1]);

        match context.contacts.change(name, new_phone) {
            ChangeOutcome::Changed { old_phone } => Ok(Reply::Changed {
                name: name.clone(),
                old_phone,
                new_phone: new_phone.clone(),
            }),
            ChangeOutcome::Unchanged => Ok(Reply::Unchanged {
                name: name.clone(),
                phone: new_phone.clone(),
            }),
            ChangeOutcome::NotFound => Err(CommandError::NotFound(name.clone())),
        }
    }
}

/// `phone <name>` - shows one contact's phone
pub struct PhoneHandler;

impl CommandHandler for PhoneHandler {
    fn name(&self) -> &str {
        "phone"
    }

    fn usage(&self) -> &str {
        "phone [name]"
    }

    fn description(&self) -> &str {
        "Shows the phone number of a contact."
    }

    fn arity(&self) -> Option<usize> {
        Some(1)
    }

    fn execute(&self, context: &mut BotContext, args: &[String]) -> CommandResult {
        let name = &args[0];

        context
            .contacts
            .phone(name)
            .map(|phone| Reply::Phone {
                name: name.clone(),
                phone: phone.to_string(),
            })
            .ok_or_else(|| CommandError::NotFound(name.clone()))
    }
}

/// `all` - lists every contact
pub struct AllHandler;

impl CommandHandler for AllHandler {
    fn name(&self) -> &str {
        "all"
    }

    fn usage(&self) -> &str {
        "all"
    }

    fn description(&self) -> &str {
        "Shows all contacts."
    }

    fn execute(&self, context: &mut BotContext, _args: &[String]) -> CommandResult {
        if context.contacts.is_empty() {
            return Err(CommandError::Empty);
        }
        Ok(Reply::Listing(context.contacts.iter().cloned().collect()))
    }
}

/// `close` / `exit` / `quit` - ends the session
pub struct ExitHandler;

impl CommandHandler for ExitHandler {
    fn name(&self) -> &str {
        "close"
    }

    fn aliases(&self) -> &[&str] {
        &["exit", "quit"]
    }

    fn usage(&self) -> &str {
        "close, exit, quit"
    }

    fn description(&self) -> &str {
        "Exits the program."
    }

    fn execute(&self, _context: &mut BotContext, _args: &[String]) -> CommandResult {
        Ok(Reply::Farewell)
    }
}

/// `help` - shows the command list
pub struct HelpHandler;

impl CommandHandler for HelpHandler {
    fn name(&self) -> &str {
        "help"
    }

    fn usage(&self) -> &str {
        "help"
    }

    fn description(&self) -> &str {
        "Displays a list of available commands."
    }

    fn execute(&self, _context: &mut BotContext, _args: &[String]) -> CommandResult {
        Ok(Reply::Help)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_add_three_way_outcomes() {
        let mut ctx = BotContext::new();

        assert_eq!(
            AddHandler.execute(&mut ctx, &args(&["John", "123"])),
            Ok(Reply::Added {
                name: "John".into(),
                phone: "123".into()
            })
        );
        assert_eq!(
            AddHandler.execute(&mut ctx, &args(&["John", "123"])),
            Ok(Reply::AlreadyExists {
                name: "John".into(),
                phone: "123".into()
            })
        );
        assert_eq!(
            AddHandler.execute(&mut ctx, &args(&["John", "456"])),
            Ok(Reply::AddConflict {
                name: "John".into(),
                current_phone: "123".into()
            })
        );
        assert_eq!(ctx.contacts.phone("John"), Some("123"));
    }

    #[test]
    fn test_change_handler() {
        let mut ctx = BotContext::new();
        ctx.contacts.add("John", "123");

        assert_eq!(
            ChangeHandler.execute(&mut ctx, &args(&["John", "456"])),
            Ok(Reply::Changed {
                name: "John".into(),
                old_phone: "123".into(),
                new_phone: "456".into()
            })
        );
        assert_eq!(
            ChangeHandler.execute(&mut ctx, &args(&["John", "456"])),
            Ok(Reply::Unchanged {
                name: "John".into(),
                phone: "456".into()
            })
        );
        assert_eq!(
            ChangeHandler.execute(&mut ctx, &args(&["Ann", "1"])),
            Err(CommandError::NotFound("Ann".into()))
        );
    }

    #[test]
    fn test_phone_handler() {
        let mut ctx = BotContext::new();
        ctx.contacts.add("John", "123");

        assert_eq!(
            PhoneHandler.execute(&mut ctx, &args(&["John"])),
            Ok(Reply::Phone {
                name: "John".into(),
                phone: "123".into()
            })
        );
        assert_eq!(
            PhoneHandler.execute(&mut ctx, &args(&["Ann"])),
            Err(CommandError::NotFound("Ann".into()))
        );
    }

    #[test]
    fn test_all_handler_empty_and_listing() {
        let mut ctx = BotContext::new();
        assert_eq!(AllHandler.execute(&mut ctx, &[]), Err(CommandError::Empty));

        ctx.contacts.add("John", "123");
        ctx.contacts.add("Ann", "456");
        match AllHandler.execute(&mut ctx, &[]) {
            Ok(Reply::Listing(contacts)) => {
                assert_eq!(contacts.len(), 2);
                assert_eq!(contacts[0].name, "John");
                assert_eq!(contacts[1].name, "Ann");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_argument_free_handlers_ignore_arguments() {
        let mut ctx = BotContext::new();
        assert_eq!(
            HelloHandler.execute(&mut ctx, &args(&["there"])),
            Ok(Reply::Greeting)
        );
        assert_eq!(HelpHandler.execute(&mut ctx, &[]), Ok(Reply::Help));
        assert!(ExitHandler.execute(&mut ctx, &[]).unwrap().ends_session());
    }
}
