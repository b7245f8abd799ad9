// src/error.rs

use crate::validate::ValidationErrors;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JournalError {
    #[error("{0}")]
    Fetch(String),

    #[error("{0}")]
    Creation(String),

    #[error("Entry is invalid:\n{0}")]
    Validation(ValidationErrors),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Editor exited with a non-zero status")]
    EditorError,
}

pub type Result<T> = std::result::Result<T, JournalError>;
