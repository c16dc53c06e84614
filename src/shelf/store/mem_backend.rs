use super::{decode_collection, encode_collection, StorageBackend};
use crate::error::{Result, ShelfError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Collections are kept as the same JSON text `FsBackend` would write, so
/// encoding and decoding are exercised without touching the filesystem.
#[derive(Default)]
pub struct MemBackend {
    collections: RefCell<HashMap<String, String>>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Test helper to plant raw stored text, e.g. a corrupt collection.
    pub fn set_raw(&self, name: &str, text: &str) {
        self.collections
            .borrow_mut()
            .insert(name.to_string(), text.to_string());
    }

    pub fn raw(&self, name: &str) -> Option<String> {
        self.collections.borrow().get(name).cloned()
    }
}

impl StorageBackend for MemBackend {
    fn load_collection<T: DeserializeOwned>(&self, name: &str) -> Result<Option<Vec<T>>> {
        match self.collections.borrow().get(name) {
            Some(text) => {
                decode_collection(name, &self.collection_path(name), text.as_bytes()).map(Some)
            }
            None => Ok(None),
        }
    }

    fn save_collection<T: Serialize>(&self, name: &str, records: &[T]) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(ShelfError::Store("Simulated write error".to_string()));
        }
        let text = encode_collection(records)?;
        self.collections.borrow_mut().insert(name.to_string(), text);
        Ok(())
    }

    fn collection_path(&self, name: &str) -> PathBuf {
        PathBuf::from(format!("memory://{}.json", name))
    }
}
