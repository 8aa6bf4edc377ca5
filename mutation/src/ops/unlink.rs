//! UNLINK operation - removes an object key and the subtree bound to it.

use arbor_tree::Tree;
use tracing::debug;

use crate::error::{MutationError, MutationResult};
use crate::result::MutationOutcome;
use crate::validation::{delete_subtree, require_object};

/// Execute an UNLINK.
pub fn execute_unlink(tree: &mut Tree, object_id: &str, key: &str) -> MutationResult<MutationOutcome> {
    let object = require_object(tree, object_id, "remove an attribute")?;
    let object_id = object.id.clone();
    let child_id = object
        .attributes
        .get(key)
        .cloned()
        .ok_or_else(|| MutationError::attribute_not_found(object_id.as_str(), key))?;

    tree.node_mut(object_id.as_str())?.attributes.remove(key);
    let removed = delete_subtree(tree, &child_id);

    debug!(object = %object_id, key, removed = removed.len(), "unlinked attribute");
    Ok(MutationOutcome::Deleted(removed))
}
