//! Storage-specific error types for the file store.
//!
//! These errors are internal to the storage layer and are converted to
//! `gaman_core::Error` before being returned to callers.

use gaman_core::errors::Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to read store file: {0}")]
    Read(#[source] std::io::Error),

    #[error("Failed to write store file: {0}")]
    Write(#[source] std::io::Error),

    #[error("Store file is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("Unsupported store file version {0}")]
    UnsupportedVersion(u32),

    #[error("Store lock poisoned")]
    LockPoisoned,
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Write(_) => Error::StorageWrite(err.to_string()),
            StorageError::LockPoisoned => Error::StorageWrite(err.to_string()),
            StorageError::Read(_)
            | StorageError::Corrupt(_)
            | StorageError::UnsupportedVersion(_) => Error::StorageRead(err.to_string()),
        }
    }
}
