//! Arbor Session
//!
//! External interface for hosts (bindings, services, tests).
//!
//! Responsibilities:
//! - Own the handle registry and route each call to the right tree
//! - Expose the full operation surface over handles and node ids
//! - Flatten nodes into serializable views
//! - Map every failure onto one error taxonomy

mod config;
mod engine;
mod error;
mod view;

pub use arbor_core::{ErrorKind, Handle, NodeId, NodeType, Value};
pub use arbor_mutation::NewChild;
pub use config::EngineConfig;
pub use engine::Engine;
pub use error::{EngineError, EngineResult};
pub use view::NodeView;
