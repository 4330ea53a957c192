//! In-memory contact book
//!
//! Contacts live only for the lifetime of the process. Names are unique and
//! iteration follows insertion order. Mutations report what actually
//! happened so callers can tell an insert from a duplicate or a conflict.

use serde::Serialize;

/// A single name / phone pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
}

/// Outcome of [`ContactBook::add`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The name was new and has been stored
    Added,
    /// The name already exists with the very same phone
    AlreadyExists,
    /// The name exists with a different phone; nothing was overwritten
    Conflict { current_phone: String },
}

/// Outcome of [`ContactBook::change`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeOutcome {
    /// The phone was replaced
    Changed { old_phone: String },
    /// The new phone equals the stored one
    Unchanged,
    /// No contact with that name
    NotFound,
}

/// Ordered name to phone mapping
#[derive(Debug, Clone, Default)]
pub struct ContactBook {
    entries: Vec<Contact>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|c| c.name == name)
    }

    /// Insert a contact unless the name is already taken
    pub fn add(&mut self, name: &str, phone: &str) -> AddOutcome {
        match self.position(name) {
            Some(idx) if self.entries[idx].phone == phone => AddOutcome::AlreadyExists,
            Some(idx) => AddOutcome::Conflict {
                current_phone: self.entries[idx].phone.clone(),
            },
            None => {
                self.entries.push(Contact {
                    name: name.to_string(),
                    phone: phone.to_string(),
                });
                AddOutcome::Added
            }
        }
    }

    /// Replace the phone of an existing contact
    pub fn change(&mut self, name: &str, new_phone: &str) -> ChangeOutcome {
        let Some(idx) = self.position(name) else {
            return ChangeOutcome::NotFound;
        };

        let contact = &mut self.entries[idx];
        if contact.phone == new_phone {
            return ChangeOutcome::Unchanged;
        }

        let old_phone = std::mem::replace(&mut contact.phone, new_phone.to_string());
        ChangeOutcome::Changed { old_phone }
    }

    pub fn phone(&self, name: &str) -> Option<&str> {
        self.position(name).map(|idx| self.entries[idx].phone.as_str())
    }

    /// All contacts in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
