//! # Storage Layer
//!
//! Both stores persist a flat, ordered collection of records. The
//! [`StorageBackend`] trait handles the "how" of getting a collection on and
//! off storage, while [`CredentialStore`](crate::credentials::CredentialStore)
//! and [`CatalogStore`](crate::catalog::CatalogStore) handle the "what".
//!
//! ## Write-Through Discipline
//!
//! A store loads its whole collection once when opened, mutates it in memory
//! and hands the entire collection back to the backend after every mutation.
//! There is no incremental update and no journal: each save overwrites the
//! previous one.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one JSON file per collection in a directory.
//! - [`mem_backend::MemBackend`]: JSON text held in memory, for tests.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── users.json     # [{ "username", "password_hash" }, ...]
//! ├── books.json     # [{ "title", "author", "year_of_publication" }, ...]
//! └── config.json    # Optional settings
//! ```

use crate::config::ShelfConfig;
use crate::error::{Result, ShelfError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub mod fs_backend;
pub mod mem_backend;

/// Abstract interface for collection I/O.
pub trait StorageBackend {
    /// Load a named collection.
    /// Returns Ok(None) if it was never written.
    /// Returns Err on I/O failure or when the stored text does not parse.
    fn load_collection<T: DeserializeOwned>(&self, name: &str) -> Result<Option<Vec<T>>>;

    /// Replace the stored collection with `records`.
    fn save_collection<T: Serialize>(&self, name: &str, records: &[T]) -> Result<()>;

    /// Where the collection lives. Virtual for non-filesystem backends.
    fn collection_path(&self, name: &str) -> PathBuf;
}

pub(crate) fn corrupt(name: &str, path: &Path, reason: impl ToString) -> ShelfError {
    ShelfError::Corrupt {
        collection: name.to_string(),
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

/// Parse stored collection bytes. Blank text and `null` are an empty
/// collection; bytes that are not UTF-8 JSON are corrupt.
pub(crate) fn decode_collection<T: DeserializeOwned>(
    name: &str,
    path: &Path,
    bytes: &[u8],
) -> Result<Vec<T>> {
    let text = std::str::from_utf8(bytes).map_err(|e| corrupt(name, path, e))?;
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let parsed: Option<Vec<T>> =
        serde_json::from_str(text).map_err(|e| corrupt(name, path, e))?;
    Ok(parsed.unwrap_or_default())
}

pub(crate) fn encode_collection<T: Serialize>(records: &[T]) -> Result<String> {
    serde_json::to_string_pretty(records).map_err(ShelfError::Serialization)
}

/// Load a collection for a store that is being opened.
///
/// A missing collection is empty. A corrupt one is an error unless the
/// config asks to recover, in which case the store starts empty.
pub(crate) fn load_or_empty<B, T>(backend: &B, name: &str, config: &ShelfConfig) -> Result<Vec<T>>
where
    B: StorageBackend,
    T: DeserializeOwned,
{
    match backend.load_collection(name) {
        Ok(Some(records)) => {
            debug!(collection = name, count = records.len(), "loaded collection");
            Ok(records)
        }
        Ok(None) => {
            debug!(collection = name, "no stored collection, starting empty");
            Ok(Vec::new())
        }
        Err(ShelfError::Corrupt {
            collection,
            path,
            reason,
        }) if config.recover_corrupt => {
            warn!(
                collection = %collection,
                path = %path.display(),
                error = %reason,
                "stored collection is corrupt, starting empty"
            );
            Ok(Vec::new())
        }
        Err(e) => Err(e),
    }
}
