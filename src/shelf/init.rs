use crate::catalog::{CatalogStore, BOOKS_COLLECTION};
use crate::config::ShelfConfig;
use crate::credentials::{CredentialStore, USERS_COLLECTION};
use crate::error::{Result, ShelfError};
use crate::store::fs_backend::FsBackend;
use crate::store::StorageBackend;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;

/// Environment variable overriding the default data directory.
pub const DATA_DIR_ENV: &str = "SHELF_DATA_DIR";

/// Both stores, opened against the same data directory.
pub struct ShelfContext {
    pub credentials: CredentialStore<FsBackend>,
    pub catalog: CatalogStore<FsBackend>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShelfPaths {
    pub data_dir: PathBuf,
    pub users_file: PathBuf,
    pub books_file: PathBuf,
}

/// Pick the data directory:
/// 1. an explicit override (the `--data-dir` flag),
/// 2. `SHELF_DATA_DIR`,
/// 3. the OS-appropriate data directory.
pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = data_override {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    ProjectDirs::from("com", "shelf", "shelf")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ShelfError::Store("Could not determine data directory".to_string()))
}

pub fn paths_for(data_dir: PathBuf) -> ShelfPaths {
    let backend = FsBackend::new(data_dir);
    ShelfPaths {
        users_file: backend.collection_path(USERS_COLLECTION),
        books_file: backend.collection_path(BOOKS_COLLECTION),
        data_dir: backend.root().to_path_buf(),
    }
}

impl ShelfContext {
    /// Load the config and both collections from `data_dir`.
    pub fn open(data_dir: PathBuf) -> Result<Self> {
        let config = ShelfConfig::load(&data_dir)?;
        debug!(data_dir = %data_dir.display(), ?config, "opening shelf");

        let credentials =
            CredentialStore::open_with_config(FsBackend::new(data_dir.clone()), &config)?;
        let catalog = CatalogStore::open_with_config(FsBackend::new(data_dir), &config)?;

        Ok(Self { credentials, catalog })
    }
}
