use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::db::contact_store::{self, SkippedRow};
use crate::error::BookResult;
use crate::model::Contact;

pub const EMPTY_BOOK: &str = "No contacts yet.";
pub const CONTACT_NOT_FOUND: &str = "Contact doesn't exist.";

/// Summary of a `load_from_file` call.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub file_found: bool,
    pub loaded: usize,
    pub skipped: Vec<SkippedRow>,
}

/// Contacts keyed by name, kept in insertion order.
///
/// Replacing an existing name keeps its position; deleting shifts the
/// entries after it up by one.
#[derive(Debug, Default, Clone)]
pub struct ContactBook {
    entries: Vec<Contact>,
    index: HashMap<String, usize>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a contact under `name`, returning the one it replaced, if any.
    pub fn add_contact(&mut self, name: &str, phone: &str, email: &str) -> Option<Contact> {
        let contact = Contact::create(name.to_string(), phone.to_string(), email.to_string());
        self.insert(contact)
    }

    pub fn insert(&mut self, contact: Contact) -> Option<Contact> {
        match self.index.get(&contact.name) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos], contact)),
            None => {
                self.index.insert(contact.name.clone(), self.entries.len());
                self.entries.push(contact);
                None
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Contact> {
        self.index.get(name).map(|&pos| &self.entries[pos])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.entries.iter()
    }

    pub fn view_content(&self) -> String {
        self.to_string()
    }

    pub fn search_contact(&self, name: &str) -> String {
        match self.get(name) {
            Some(contact) => contact.to_string(),
            None => CONTACT_NOT_FOUND.to_string(),
        }
    }

    /// Removes the contact stored under `name`. `None` means nothing was there.
    pub fn delete_contact(&mut self, name: &str) -> Option<Contact> {
        let pos = self.index.remove(name)?;
        let removed = self.entries.remove(pos);
        for contact in &self.entries[pos..] {
            if let Some(slot) = self.index.get_mut(&contact.name) {
                *slot -= 1;
            }
        }
        Some(removed)
    }

    /// Merges the records stored at `path` into the book. Later duplicates win.
    /// A missing file is not an error: the report just says it wasn't found.
    pub fn load_from_file(&mut self, path: &Path) -> BookResult<LoadReport> {
        let outcome = match contact_store::read_all(path)? {
            Some(outcome) => outcome,
            None => return Ok(LoadReport::default()),
        };

        let loaded = outcome.contacts.len();
        for contact in outcome.contacts {
            self.insert(contact);
        }
        debug!(loaded, total = self.len(), "loaded contacts");

        Ok(LoadReport {
            file_found: true,
            loaded,
            skipped: outcome.skipped,
        })
    }

    /// Overwrites `path` with the current contents of the book.
    pub fn save_to_file(&self, path: &Path) -> BookResult<()> {
        contact_store::write_all(path, &self.entries)?;
        Ok(())
    }
}

impl fmt::Display for ContactBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return f.write_str(EMPTY_BOOK);
        }
        for (i, contact) in self.entries.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, contact)?;
        }
        Ok(())
    }
}
