//! Common error types for Arbor.

use crate::NodeId;
use std::fmt;
use thiserror::Error;

/// Caller-facing error category. Every error type in the workspace maps
/// onto exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Wrong argument shape at the interface boundary.
    Argument,
    /// Malformed JSON input.
    Syntax,
    /// Unknown handle, node id, or path segment.
    NotFound,
    /// Operation not valid for the node's type.
    WrongType,
    /// Duplicate id, root removal, structural collision.
    ConstraintViolation,
    /// Attribute or metadata key absent on removal.
    AttributeNotFound,
    /// Malformed query predicate.
    InvalidQuery,
    /// Broken tree invariant.
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Argument => "argument",
            ErrorKind::Syntax => "syntax",
            ErrorKind::NotFound => "not_found",
            ErrorKind::WrongType => "wrong_type",
            ErrorKind::ConstraintViolation => "constraint_violation",
            ErrorKind::AttributeNotFound => "attribute_not_found",
            ErrorKind::InvalidQuery => "invalid_query",
            ErrorKind::Internal => "internal",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by tree storage and traversal.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Node not found.
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    /// A parent refers to a node missing from the node map.
    #[error("Dangling reference: {parent} -> {child}")]
    DanglingReference { parent: NodeId, child: NodeId },

    /// Traversal reached a node twice.
    #[error("Cycle detected at node {0}")]
    Cycle(NodeId),

    /// A child's back-reference disagrees with the parent holding it.
    #[error("Parent mismatch: {child} is held by {holder} but points to {recorded}")]
    ParentMismatch {
        child: NodeId,
        holder: NodeId,
        recorded: String,
    },

    /// A node cannot be reached from the root.
    #[error("Unreachable node: {0}")]
    Unreachable(NodeId),

    /// An extension node and one of its attributes claim the same wire member.
    #[error("Attribute '{key}' on node {id} collides with its serialized {key} member")]
    WireCollision { id: NodeId, key: String },

    /// A node sits below the maximum depth.
    #[error("Node {id} is nested deeper than {limit} levels")]
    TooDeep { id: NodeId, limit: usize },

    /// Tree has no root.
    #[error("Tree has no root")]
    MissingRoot,
}

impl TreeError {
    pub fn dangling(parent: &NodeId, child: &NodeId) -> Self {
        Self::DanglingReference {
            parent: parent.clone(),
            child: child.clone(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            TreeError::NodeNotFound(_) => ErrorKind::NotFound,
            _ => ErrorKind::Internal,
        }
    }
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, TreeError>;
