//! Mutation operation implementations.
//!
//! Each operation (SPAWN, KILL, LINK, UNLINK, SET, METADATA) is implemented
//! in its own module for better organization and testability.

mod kill;
mod link;
mod metadata;
mod set;
mod spawn;
mod unlink;

pub use kill::execute_kill;
pub use link::execute_link;
pub use metadata::{execute_remove_metadata, execute_set_metadata, node_metadata};
pub use set::execute_set;
pub use spawn::{execute_spawn, NewChild};
pub use unlink::execute_unlink;
