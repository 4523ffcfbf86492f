//! Error types for document model operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocModelError {
    #[error("Unknown document type: {0}")]
    UnknownDocumentType(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DocModelError>;
