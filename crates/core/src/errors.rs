//! Core error types for the gaman savings tracker.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! (file system, serialization) are converted to these types by the storage layer.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the tracker.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Goal not found: {0}")]
    GoalNotFound(String),

    /// The stored goal blob could not be read or parsed.
    #[error("Failed to read stored goals: {0}")]
    StorageRead(String),

    /// The goal blob could not be written.
    #[error("Failed to write goals: {0}")]
    StorageWrite(String),

    /// An uploaded image could not be turned into an image reference.
    #[error("Failed to read image: {0}")]
    ImageDecode(String),

    #[error("Invalid configuration value: {0}")]
    Config(String),
}

/// Validation errors for user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Goal name must not be empty")]
    EmptyName,

    #[error("Target amount must be a positive integer, got '{0}'")]
    InvalidTarget(String),

    #[error("Amount must be a positive integer, got '{0}'")]
    InvalidAmount(String),

    #[error("Saved amount would overflow")]
    AmountOverflow,
}

impl Error {
    /// Text shown to the user in a blocking prompt.
    pub fn user_message(&self) -> String {
        match self {
            Error::Validation(ValidationError::EmptyName)
            | Error::Validation(ValidationError::InvalidTarget(_)) => {
                "「欲しいもの」と「目標金額（正の数）」を入力してください。".to_string()
            }
            Error::Validation(ValidationError::InvalidAmount(_)) => {
                "正の金額を入力してください。".to_string()
            }
            Error::Validation(ValidationError::AmountOverflow) => {
                "金額が大きすぎます。".to_string()
            }
            Error::ImageDecode(_) => "画像を読み込めませんでした。".to_string(),
            Error::GoalNotFound(_) => "目標が見つかりません。".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::StorageRead(err.to_string())
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
