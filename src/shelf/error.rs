use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Collection '{collection}' ({}) is corrupt: {reason}", .path.display())]
    Corrupt {
        collection: String,
        path: PathBuf,
        reason: String,
    },

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, ShelfError>;
