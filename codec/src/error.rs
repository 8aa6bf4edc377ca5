//! Codec error types.

use arbor_core::{ErrorKind, TreeError};
use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur loading or serializing a tree.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Empty document")]
    EmptyInput,

    #[error("Invalid JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("Document nests deeper than {limit} levels")]
    TooDeep { limit: usize },

    #[error("Unsupported value: {message}")]
    Unsupported { message: String },

    #[error(transparent)]
    Tree(#[from] TreeError),
}

impl CodecError {
    pub fn too_deep(limit: usize) -> Self {
        Self::TooDeep { limit }
    }

    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::EmptyInput | CodecError::TooDeep { .. } => ErrorKind::Argument,
            CodecError::Syntax(_) => ErrorKind::Syntax,
            CodecError::Unsupported { .. } => ErrorKind::Internal,
            // Reached only through parent references.
            CodecError::Tree(_) => ErrorKind::Internal,
        }
    }
}
