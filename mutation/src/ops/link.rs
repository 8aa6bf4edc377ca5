//! LINK operation - binds an existing node under an object key.

use arbor_tree::Tree;
use tracing::debug;

use crate::error::{MutationError, MutationResult};
use crate::result::MutationOutcome;
use crate::validation::{
    delete_subtree, detach_from_parent, require_node, require_object, require_room,
};

/// Execute a LINK. The child moves: it is detached from its old parent,
/// and any different node already bound under `key` is deleted along with
/// its subtree.
pub fn execute_link(
    tree: &mut Tree,
    object_id: &str,
    key: &str,
    child_id: &str,
) -> MutationResult<MutationOutcome> {
    let object = require_object(tree, object_id, "set an attribute")?;
    if key.is_empty() {
        return Err(MutationError::missing_key(object_id));
    }
    let object_id = object.id.clone();
    let previous = object.attributes.get(key).cloned();

    let child = require_node(tree, child_id)?;
    let child_id = child.id.clone();
    if tree.is_root(&child_id) || tree.is_ancestor_or_self(&child_id, &object_id) {
        return Err(MutationError::would_cycle(object_id.as_str(), child_id.as_str()));
    }

    if previous.as_ref() == Some(&child_id) {
        return Ok(MutationOutcome::updated(object_id));
    }
    require_room(tree, &object_id, tree.height(&child_id))?;
    if let Some(previous) = &previous {
        if !tree.contains(previous) {
            return Err(arbor_core::TreeError::dangling(&object_id, previous).into());
        }
    }

    detach_from_parent(tree, &child_id)?;
    let displaced = match previous {
        Some(previous) => {
            tree.node_mut(object_id.as_str())?.detach_child(&previous);
            delete_subtree(tree, &previous)
        }
        None => Vec::new(),
    };

    let object = tree.node_mut(object_id.as_str())?;
    object.metadata.remove(key);
    object.attributes.insert(key.to_string(), child_id.clone());

    let child = tree.node_mut(child_id.as_str())?;
    child.parent_id = Some(object_id.clone());
    child.parent_attribute_key = Some(key.to_string());

    debug!(object = %object_id, key, child = %child_id, displaced = displaced.len(), "linked attribute");
    Ok(MutationOutcome::Updated {
        id: object_id,
        displaced,
    })
}
