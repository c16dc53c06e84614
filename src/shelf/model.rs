use serde::{Deserialize, Serialize};

/// A registered account. Only the digest of the password is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub password_hash: String,
}

impl User {
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }

    /// Case-insensitive username comparison used for uniqueness checks.
    pub fn is_named(&self, username: &str) -> bool {
        self.username.to_lowercase() == username.to_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub year_of_publication: u32,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year_of_publication: u32,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year_of_publication,
        }
    }

    /// True when `needle` (already lowercased) occurs in the title or author.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.author.to_lowercase().contains(needle)
    }
}
