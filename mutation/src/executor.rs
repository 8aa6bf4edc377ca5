//! Mutation executor - coordinates mutation operations.
//!
//! The executor delegates to specialized operation modules in `ops/`:
//! - `ops/spawn.rs` - SPAWN (child creation)
//! - `ops/kill.rs` - KILL (subtree deletion)
//! - `ops/link.rs` - LINK (bind a node under an object key)
//! - `ops/unlink.rs` - UNLINK (drop an object key and its subtree)
//! - `ops/set.rs` - SET (scalar value updates)
//! - `ops/metadata.rs` - METADATA (string annotations)

use arbor_core::{NodeId, Value};
use arbor_tree::Tree;

use crate::error::MutationResult;
use crate::ops::{self, NewChild};
use crate::result::MutationOutcome;

/// Mutation executor over one tree.
pub struct MutationExecutor<'t> {
    tree: &'t mut Tree,
}

impl<'t> MutationExecutor<'t> {
    /// Create a new executor.
    pub fn new(tree: &'t mut Tree) -> Self {
        Self { tree }
    }

    /// Create and attach a child node, returning its id.
    pub fn execute_spawn(&mut self, request: &NewChild) -> MutationResult<NodeId> {
        ops::execute_spawn(self.tree, request)
    }

    /// Delete a non-root node and its subtree.
    pub fn execute_kill(&mut self, id: &str) -> MutationResult<MutationOutcome> {
        ops::execute_kill(self.tree, id)
    }

    /// Bind `child_id` under `key` on an object node.
    pub fn execute_link(
        &mut self,
        object_id: &str,
        key: &str,
        child_id: &str,
    ) -> MutationResult<MutationOutcome> {
        ops::execute_link(self.tree, object_id, key, child_id)
    }

    /// Remove `key` from an object node.
    pub fn execute_unlink(&mut self, object_id: &str, key: &str) -> MutationResult<MutationOutcome> {
        ops::execute_unlink(self.tree, object_id, key)
    }

    /// Overwrite a scalar value.
    pub fn execute_set(&mut self, id: &str, value: Value) -> MutationResult<MutationOutcome> {
        ops::execute_set(self.tree, id, value)
    }

    pub fn execute_set_metadata(
        &mut self,
        id: &str,
        key: &str,
        value: &str,
    ) -> MutationResult<MutationOutcome> {
        ops::execute_set_metadata(self.tree, id, key, value)
    }

    pub fn execute_remove_metadata(&mut self, id: &str, key: &str) -> MutationResult<MutationOutcome> {
        ops::execute_remove_metadata(self.tree, id, key)
    }
}
