use std::fmt;

use serde::{Deserialize, Serialize};

/// One person's entry in the book. The name doubles as the lookup key.
///
/// Field order matches the on-disk record layout: name, phone, email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Contact {
    pub fn create(name: String, phone: String, email: String) -> Self {
        Self { name, phone, email }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Phone: {}, Email: {}.",
            self.name, self.phone, self.email
        )
    }
}
