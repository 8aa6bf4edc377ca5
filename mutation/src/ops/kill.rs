//! KILL operation - deletes a node and everything below it.

use arbor_tree::Tree;
use tracing::debug;

use crate::error::{MutationError, MutationResult};
use crate::result::MutationOutcome;
use crate::validation::{delete_subtree, detach_from_parent, require_node};

/// Execute a KILL. The root can never be removed.
pub fn execute_kill(tree: &mut Tree, id: &str) -> MutationResult<MutationOutcome> {
    let node = require_node(tree, id)?;
    if tree.is_root(id) || node.parent_id.is_none() {
        return Err(MutationError::root_removal(id));
    }
    let target = node.id.clone();

    detach_from_parent(tree, &target)?;
    let removed = delete_subtree(tree, &target);

    debug!(id = %target, removed = removed.len(), "killed subtree");
    Ok(MutationOutcome::Deleted(removed))
}
