//! Error types for Restoration Core

use thiserror::Error;

/// Result type alias using RestorationError
pub type Result<T> = std::result::Result<T, RestorationError>;

/// Top-level error type for all Restoration operations
#[derive(Debug, Error)]
pub enum RestorationError {
    #[error("Schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("Language error: {0}")]
    Language(#[from] LanguageError),

    #[error("Reflection error: {0}")]
    Reflection(#[from] ReflectionError),

    #[error("Journal error: {0}")]
    Journal(#[from] JournalError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Integrity failures of the static book table
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Book table is empty")]
    EmptyBookTable,

    #[error("Book has no chapters: {0}")]
    EmptyBook(String),
}

/// Rejected locale tags
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LanguageError {
    #[error("Unsupported language: {0}")]
    Unsupported(String),
}

/// Errors from the generative text collaborator
#[derive(Debug, Error)]
pub enum ReflectionError {
    #[error("API quota exceeded")]
    QuotaExceeded,

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Response contained no text")]
    EmptyResponse,

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unknown reflection kind: {0}")]
    UnknownKind(String),
}

/// Errors from diary and mission persistence
#[derive(Debug, Error)]
pub enum JournalError {
    #[error("Entry has no content")]
    EmptyEntry,

    #[error("Corrupt journal record: {key}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize journal record: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Errors that occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Backend error: {0}")]
    BackendError(String),
}
