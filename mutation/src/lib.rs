//! Arbor Mutation
//!
//! Execute write operations against a tree.
//!
//! Responsibilities:
//! - Validate every request before touching the tree
//! - Keep parent and child references consistent after each operation
//! - Delete whole subtrees when a node is detached
//!
//! # Module Structure
//!
//! - `executor` - Main MutationExecutor that coordinates operations
//! - `ops/` - Individual operation implementations
//! - `validation` - Shared lookup and detach helpers
//! - `result` - Outcome of an operation (created or removed ids)
//! - `error` - Error types for mutation failures

mod error;
mod executor;
mod ops;
mod result;
mod validation;

pub use error::{MutationError, MutationResult};
pub use executor::MutationExecutor;
pub use ops::{node_metadata, NewChild};
pub use result::MutationOutcome;
