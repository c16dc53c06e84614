use super::{decode_collection, encode_collection, StorageBackend};
use crate::error::{Result, ShelfError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Stores each collection as `<name>.json` inside a single directory.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ShelfError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load_collection<T: DeserializeOwned>(&self, name: &str) -> Result<Option<Vec<T>>> {
        let path = self.collection_path(name);
        if !path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&path).map_err(ShelfError::Io)?;
        decode_collection(name, &path, &bytes).map(Some)
    }

    fn save_collection<T: Serialize>(&self, name: &str, records: &[T]) -> Result<()> {
        self.ensure_dir()?;
        let content = encode_collection(records)?;
        fs::write(self.collection_path(name), content).map_err(ShelfError::Io)?;
        Ok(())
    }

    fn collection_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.json", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogStore;
    use crate::config::ShelfConfig;
    use crate::model::User;
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_as_none() {
        let dir = TempDir::new().unwrap();
        let backend = FsBackend::new(dir.path().to_path_buf());
        let loaded: Option<Vec<User>> = backend.load_collection("users").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn save_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("nested").join("data");
        let backend = FsBackend::new(root.clone());

        backend
            .save_collection("users", &[User::new("ann", "abc")])
            .unwrap();

        assert!(root.join("users.json").exists());
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let dir = TempDir::new().unwrap();
        let backend = FsBackend::new(dir.path().to_path_buf());

        backend
            .save_collection("users", &[User::new("a", "1"), User::new("b", "2")])
            .unwrap();
        backend
            .save_collection("users", &[User::new("c", "3")])
            .unwrap();

        let loaded: Vec<User> = backend.load_collection("users").unwrap().unwrap();
        assert_eq!(loaded, vec![User::new("c", "3")]);
    }

    #[test]
    fn written_file_is_indented_json() {
        let dir = TempDir::new().unwrap();
        let backend = FsBackend::new(dir.path().to_path_buf());
        backend
            .save_collection("users", &[User::new("ann", "abc")])
            .unwrap();

        let on_disk = fs::read_to_string(dir.path().join("users.json")).unwrap();
        assert!(on_disk.contains("\n  {"));
        assert!(on_disk.contains("\"password_hash\": \"abc\""));
    }

    #[test]
    fn non_utf8_file_is_corrupt_and_names_the_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("users.json"), [0xff, 0xfe, b'[', b']']).unwrap();
        let backend = FsBackend::new(dir.path().to_path_buf());

        let err = backend.load_collection::<User>("users").unwrap_err();
        match &err {
            ShelfError::Corrupt { path, .. } => {
                assert_eq!(path, &dir.path().join("users.json"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("users.json"));
    }

    #[test]
    fn non_utf8_catalog_recovers_when_configured() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("books.json"), [0xff, 0xfe, b'[', b']']).unwrap();
        let config = ShelfConfig {
            recover_corrupt: true,
        };

        let backend = FsBackend::new(dir.path().to_path_buf());

        let store = CatalogStore::open_with_config(backend, &config).unwrap();
        assert!(store.list_all().is_empty());
    }
}
