//! # Credential Store
//!
//! Owns the registered users and answers login queries. Passwords are hashed
//! with [`hash_password`] before they are stored or compared; the plaintext is
//! never kept or logged.
//!
//! Registration compares usernames case-insensitively after trimming, while
//! login matches the stored username exactly. Domain failures (mismatched
//! confirmation, taken username, bad credentials) are reported as `false`;
//! only storage problems come back as errors.

use crate::config::ShelfConfig;
use crate::error::Result;
use crate::model::User;
use crate::password::{hash_password, verify_password};
use crate::store::{load_or_empty, StorageBackend};
use tracing::{info, warn};

pub const USERS_COLLECTION: &str = "users";

pub struct CredentialStore<B: StorageBackend> {
    backend: B,
    users: Vec<User>,
}

impl<B: StorageBackend> CredentialStore<B> {
    pub fn open(backend: B) -> Result<Self> {
        Self::open_with_config(backend, &ShelfConfig::default())
    }

    pub fn open_with_config(backend: B, config: &ShelfConfig) -> Result<Self> {
        let users = load_or_empty(&backend, USERS_COLLECTION, config)?;
        Ok(Self { backend, users })
    }

    /// Register a new user.
    ///
    /// Returns `Ok(false)` without touching storage when the passwords differ
    /// or the trimmed username is already taken.
    pub fn register(
        &mut self,
        username: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<bool> {
        if password != confirm_password {
            return Ok(false);
        }

        let username = username.trim();
        if self.is_username_taken(username) {
            return Ok(false);
        }

        self.users.push(User::new(username, hash_password(password)));
        if let Err(e) = self.persist() {
            self.users.pop();
            return Err(e);
        }

        info!(username, "registered user");
        Ok(true)
    }

    /// Whether `username` collides with a registered user, ignoring case and
    /// surrounding whitespace.
    pub fn is_username_taken(&self, username: &str) -> bool {
        let username = username.trim();
        self.users.iter().any(|u| u.is_named(username))
    }

    pub fn login(&self, username: &str, password: &str) -> bool {
        let ok = self
            .users
            .iter()
            .find(|u| u.username == username)
            .is_some_and(|u| verify_password(password, &u.password_hash));
        if !ok {
            warn!(username, "login failed");
        }
        ok
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    fn persist(&self) -> Result<()> {
        self.backend.save_collection(USERS_COLLECTION, &self.users)
    }
}
