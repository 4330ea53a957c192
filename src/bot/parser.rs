//! Splitting a line of user input into a command keyword and arguments

/// A command keyword plus its positional arguments
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedInput {
    /// Lowercased keyword, empty for a blank line
    pub command: String,
    pub args: Vec<String>,
}

impl ParsedInput {
    pub fn is_blank(&self) -> bool {
        self.command.is_empty()
    }
}

/// Parse a line into a lowercase keyword and whitespace-separated arguments
///
/// Only the keyword is case-folded; arguments keep their spelling so names
/// are stored as typed.
pub fn parse_input(line: &str) -> ParsedInput {
    let mut parts = line.split_whitespace();
    let command = parts.next().map(str::to_lowercase).unwrap_or_default();
    let args = parts.map(str::to_string).collect();
    ParsedInput { command, args }
}
