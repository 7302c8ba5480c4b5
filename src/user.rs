//! User records and editable drafts

use serde::{Deserialize, Serialize};
use std::fmt;

/// A user as stored by the directory API.
///
/// The email is the natural key: update and delete requests address a user by it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    /// Display name
    pub name: String,
    /// Email address (also the record key)
    pub email: String,
}

impl User {
    /// Create a new user record
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

/// Editable fields of a user form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    /// The name input
    #[default]
    Name,
    /// The email input
    Email,
}

impl Field {
    /// The other field (forms only have two)
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Name,
        }
    }

    /// Label shown next to the input
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
        }
    }
}

/// Not-yet-persisted copy of a user's editable fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    /// Name as typed
    pub name: String,
    /// Email as typed
    pub email: String,
}

impl UserDraft {
    /// Seed a draft from an existing user
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }

    /// Read one field
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
        }
    }

    /// Mutable access to one field
    pub const fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
        }
    }
}
