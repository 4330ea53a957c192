//! Colored rendering of bot replies, errors and help

use super::registry::HelpEntry;
use super::{CommandError, Reply};
use colored::*;

const BANNER: &str = r#"
     _            _     _              _     ____        _
    / \   ___ ___(_)___| |_ __ _ _ __ | |_  | __ )  ___ | |_
   / _ \ / __/ __| / __| __/ _` | '_ \| __| |  _ \ / _ \| __|
  / ___ \\__ \__ \ \__ \ || (_| | | | | |_  | |_) | (_) | |_
 /_/   \_\___/___/_|___/\__\__,_|_| |_|\__| |____/ \___/ \__|
"#;

/// Startup banner and welcome line
pub fn banner() -> String {
    format!(
        "{}\n\n{}\n",
        BANNER.green(),
        "Welcome to the Assistant Bot!".cyan().bold()
    )
}

pub fn prompt() -> String {
    "Enter a command: ".yellow().to_string()
}

/// Render the outcome of a successful command
pub fn render_reply(reply: &Reply) -> String {
    match reply {
        Reply::Greeting => "How can I help you?".cyan().to_string(),
        Reply::Added { name, phone } => format!(
            "{}{}{}{}{}",
            "Contact \"".green(),
            name.cyan(),
            "\" added with phone number \"".green(),
            phone.cyan(),
            "\".".green()
        ),
        Reply::AlreadyExists { name, phone } => format!(
            "{}{}{}{}{}",
            "Contact \"".yellow(),
            name.cyan(),
            "\" with phone number \"".yellow(),
            phone.cyan(),
            "\" already exists.".yellow()
        ),
        Reply::AddConflict {
            name,
            current_phone,
        } => format!(
            "{}{}{}{}{}\n{}{}{}",
            "Contact \"".yellow(),
            name.cyan(),
            "\" is already added with the number \"".yellow(),
            current_phone.cyan(),
            "\".".yellow(),
            "To change the number, use the \"".yellow(),
            "change",
            "\" command.".yellow()
        ),
        Reply::Changed {
            name,
            old_phone,
            new_phone,
        } => format!(
            "{}{}{}{}{}{}{}",
            "For user ".green(),
            format!("\"{}\"", name).cyan(),
            ", the phone has been changed from \"".green(),
            old_phone.cyan(),
            "\" to \"".green(),
            new_phone.cyan(),
            "\".".green()
        ),
        Reply::Unchanged { name, phone } => format!(
            "{}{}{}{}{}",
            "Contact \"".yellow(),
            name.cyan(),
            "\" already has this phone number: \"".yellow(),
            phone.cyan(),
            "\". No changes were made.".yellow()
        ),
        Reply::Phone { name, phone } => format!(
            "{}{}{}{}",
            "Phone number of \"".green(),
            name.cyan(),
            "\": ".green(),
            phone.cyan()
        ),
        Reply::Listing(contacts) => contacts
            .iter()
            .map(|c| format!("{}{}", format!("{}: ", c.name).green(), c.phone.cyan()))
            .collect::<Vec<_>>()
            .join("\n"),
        Reply::Help => String::new(),
        Reply::Farewell => "Good bye!".green().bold().to_string(),
    }
}

/// Render a recoverable command failure
pub fn render_error(err: &CommandError) -> String {
    format!(
        "{}\n{}",
        format!("Error: {}", err.heading()).red(),
        err.to_string().magenta()
    )
}

/// Render the command overview with usage examples
pub fn render_help(entries: &[HelpEntry]) -> String {
    let mut lines = vec![
        "This bot helps you manage your contacts.".green().to_string(),
        "You can use the following commands:".green().to_string(),
    ];

    for entry in entries {
        lines.push(format!(
            "{}{}",
            entry.usage,
            format!(" - {}", entry.description).green()
        ));
    }

    lines.push(String::new());
    lines.push("Example usage:".cyan().to_string());
    lines.push(format!(
        "add John 1234567890{}{}{}{}",
        " - Adds a contact named ".green(),
        "John".cyan(),
        " with phone number ".green(),
        "1234567890.".cyan()
    ));
    lines.push(format!(
        "phone John{}{}\n",
        " - Shows the phone number of ".green(),
        "John.".cyan()
    ));
    lines.join("\n")
}
