//! Query error types.

use arbor_core::{ErrorKind, NodeType, TreeError};
use thiserror::Error;

/// Result type for query operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors that can occur during navigation or search.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Node not found: {id}")]
    NodeNotFound { id: String },

    #[error("Path segment '{segment}' not found in '{path}'")]
    SegmentNotFound { path: String, segment: String },

    #[error("Path segment '{segment}' is not an array index")]
    InvalidIndex { segment: String },

    #[error("Index {index} out of range (length {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Cannot {operation} on {node_type} node {id}")]
    WrongType {
        id: String,
        node_type: NodeType,
        operation: String,
    },

    #[error("Invalid query: {message}")]
    InvalidQuery { message: String },

    #[error("Invalid {name}: {value} (expected -1 or a non-negative number)")]
    InvalidBound { name: String, value: i64 },

    #[error(transparent)]
    Tree(#[from] TreeError),
}

impl QueryError {
    pub fn node_not_found(id: impl Into<String>) -> Self {
        Self::NodeNotFound { id: id.into() }
    }

    pub fn segment_not_found(path: impl Into<String>, segment: impl Into<String>) -> Self {
        Self::SegmentNotFound {
            path: path.into(),
            segment: segment.into(),
        }
    }

    pub fn invalid_index(segment: impl Into<String>) -> Self {
        Self::InvalidIndex {
            segment: segment.into(),
        }
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

    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::InvalidQuery {
            message: message.into(),
        }
    }

    pub fn invalid_bound(name: impl Into<String>, value: i64) -> Self {
        Self::InvalidBound {
            name: name.into(),
            value,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            QueryError::NodeNotFound { .. }
            | QueryError::SegmentNotFound { .. }
            | QueryError::IndexOutOfRange { .. } => ErrorKind::NotFound,
            QueryError::InvalidIndex { .. } | QueryError::InvalidBound { .. } => {
                ErrorKind::Argument
            }
            QueryError::WrongType { .. } => ErrorKind::WrongType,
            QueryError::InvalidQuery { .. } => ErrorKind::InvalidQuery,
            QueryError::Tree(err) => err.kind(),
        }
    }
}
