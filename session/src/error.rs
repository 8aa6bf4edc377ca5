//! Engine error types.

use arbor_core::ErrorKind;
use thiserror::Error;

/// Engine errors.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Handle lookup failure.
    #[error("registry error: {0}")]
    Registry(#[from] arbor_registry::RegistryError),

    /// Load or serialize failure.
    #[error("codec error: {0}")]
    Codec(#[from] arbor_codec::CodecError),

    /// Navigation or search failure.
    #[error("query error: {0}")]
    Query(#[from] arbor_query::QueryError),

    /// Mutation failure.
    #[error("mutation error: {0}")]
    Mutation(#[from] arbor_mutation::MutationError),

    /// Broken tree invariant.
    #[error("integrity error: {0}")]
    Integrity(#[from] arbor_core::TreeError),

    /// Malformed configuration document.
    #[error("config error: {0}")]
    ConfigSyntax(#[from] serde_json::Error),

    /// Configuration value out of range.
    #[error("invalid config: {message}")]
    InvalidConfig { message: String },
}

impl EngineError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Category of this failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::Registry(err) => err.kind(),
            EngineError::Codec(err) => err.kind(),
            EngineError::Query(err) => err.kind(),
            EngineError::Mutation(err) => err.kind(),
            EngineError::Integrity(err) => err.kind(),
            EngineError::ConfigSyntax(_) => ErrorKind::Syntax,
            EngineError::InvalidConfig { .. } => ErrorKind::Argument,
        }
    }
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
