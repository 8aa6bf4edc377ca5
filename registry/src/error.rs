//! Registry error types.

use arbor_core::ErrorKind;
use thiserror::Error;

/// Result type for registry lookups.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors that can occur resolving a handle.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Unknown handle: {handle}")]
    HandleNotFound { handle: String },
}

impl RegistryError {
    pub fn handle_not_found(handle: impl Into<String>) -> Self {
        Self::HandleNotFound {
            handle: handle.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        ErrorKind::NotFound
    }
}
