//! State handed to every command handler

use crate::contacts::ContactBook;

/// Mutable state of one bot session
#[derive(Debug, Default)]
pub struct BotContext {
    pub contacts: ContactBook,
}

impl BotContext {
    pub fn new() -> Self {
        Self::default()
    }
}
