//! Mutation error types.

use arbor_core::{ErrorKind, NodeType, TreeError};
use thiserror::Error;

/// Result type for mutation operations.
pub type MutationResult<T> = Result<T, MutationError>;

/// Errors that can occur during mutation execution.
#[derive(Debug, Error)]
pub enum MutationError {
    #[error("Node not found: {id}")]
    NodeNotFound { id: String },

    #[error("Unknown node type: {name}")]
    UnknownType { name: String },

    #[error("A non-empty key is required on node {id}")]
    MissingKey { id: String },

    #[error("Cannot {operation} on {node_type} node {id}")]
    WrongType {
        id: String,
        node_type: NodeType,
        operation: String,
    },

    #[error("Duplicate node id: {id}")]
    DuplicateId { id: String },

    #[error("Key '{key}' is already bound on object {parent}")]
    DuplicateKey { parent: String, key: String },

    #[error("Cannot remove the root node {id}")]
    RootRemoval { id: String },

    #[error("Attaching {child} under {parent} would create a cycle")]
    WouldCycle { parent: String, child: String },

    #[error("Key '{key}' on node {id} is a structural binding, not metadata")]
    StructuralKey { id: String, key: String },

    #[error("Attribute '{key}' on node {id} already holds the serialized {key} member")]
    WireCollision { id: String, key: String },

    #[error("Attaching under node {id} would nest deeper than {limit} levels")]
    TooDeep { id: String, limit: usize },

    #[error("Attribute not found: {key} on node {id}")]
    AttributeNotFound { id: String, key: String },

    #[error(transparent)]
    Tree(#[from] TreeError),
}

impl MutationError {
    pub fn node_not_found(id: impl Into<String>) -> Self {
        Self::NodeNotFound { id: id.into() }
    }

    pub fn unknown_type(name: impl Into<String>) -> Self {
        Self::UnknownType { name: name.into() }
    }

    pub fn missing_key(id: impl Into<String>) -> Self {
        Self::MissingKey { id: id.into() }
    }

    pub fn wrong_type(
        id: impl Into<String>,
        node_type: NodeType,
        operation: impl Into<String>,
    ) -> Self {
        Self::WrongType {
            id: id.into(),
            node_type,
            operation: operation.into(),
        }
    }

    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId { id: id.into() }
    }

    pub fn duplicate_key(parent: impl Into<String>, key: impl Into<String>) -> Self {
        Self::DuplicateKey {
            parent: parent.into(),
            key: key.into(),
        }
    }

    pub fn root_removal(id: impl Into<String>) -> Self {
        Self::RootRemoval { id: id.into() }
    }

    pub fn would_cycle(parent: impl Into<String>, child: impl Into<String>) -> Self {
        Self::WouldCycle {
            parent: parent.into(),
            child: child.into(),
        }
    }

    pub fn structural_key(id: impl Into<String>, key: impl Into<String>) -> Self {
        Self::StructuralKey {
            id: id.into(),
            key: key.into(),
        }
    }

    pub fn wire_collision(id: impl Into<String>, key: impl Into<String>) -> Self {
        Self::WireCollision {
            id: id.into(),
            key: key.into(),
        }
    }

    pub fn too_deep(id: impl Into<String>, limit: usize) -> Self {
        Self::TooDeep {
            id: id.into(),
            limit,
        }
    }

    pub fn attribute_not_found(id: impl Into<String>, key: impl Into<String>) -> Self {
        Self::AttributeNotFound {
            id: id.into(),
            key: key.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            MutationError::NodeNotFound { .. } => ErrorKind::NotFound,
            MutationError::UnknownType { .. } | MutationError::MissingKey { .. } => {
                ErrorKind::Argument
            }
            MutationError::WrongType { .. } => ErrorKind::WrongType,
            MutationError::DuplicateId { .. }
            | MutationError::DuplicateKey { .. }
            | MutationError::RootRemoval { .. }
            | MutationError::WouldCycle { .. }
            | MutationError::StructuralKey { .. }
            | MutationError::WireCollision { .. }
            | MutationError::TooDeep { .. } => ErrorKind::ConstraintViolation,
            MutationError::AttributeNotFound { .. } => ErrorKind::AttributeNotFound,
            MutationError::Tree(err) => err.kind(),
        }
    }
}
