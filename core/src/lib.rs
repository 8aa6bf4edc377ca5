//! Arbor Core Types
//!
//! This crate provides the foundational types used throughout Arbor:
//! - Identity types (NodeId, Handle)
//! - The scalar Value carried by leaf nodes
//! - Node structure and the NodeType tag set
//! - The shared error taxonomy (ErrorKind) and tree integrity errors

mod error;
mod id;
mod node;
mod value;

pub use error::*;
pub use id::*;
pub use node::*;
pub use value::*;
