//! Lookups and guards shared by the mutation operations.

use arbor_core::{Node, NodeId, NodeType, MAX_DEPTH};
use arbor_tree::Tree;

use crate::error::{MutationError, MutationResult};

/// Look up a node the caller named.
pub(crate) fn require_node<'t>(tree: &'t Tree, id: &str) -> MutationResult<&'t Node> {
    tree.get(id).ok_or_else(|| MutationError::node_not_found(id))
}

/// Look up a node the caller named and require it to be an object.
pub(crate) fn require_object<'t>(
    tree: &'t Tree,
    id: &str,
    operation: &str,
) -> MutationResult<&'t Node> {
    let node = require_node(tree, id)?;
    if node.node_type != NodeType::Object {
        return Err(MutationError::wrong_type(id, node.node_type, operation));
    }
    Ok(node)
}

/// Require room to hang a subtree of `height` directly below `parent`.
pub(crate) fn require_room(tree: &Tree, parent: &NodeId, height: usize) -> MutationResult<()> {
    if tree.depth(parent) + 1 + height > MAX_DEPTH {
        return Err(MutationError::too_deep(parent.as_str(), MAX_DEPTH));
    }
    Ok(())
}

/// Treat an empty optional string as absent.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Remove every reference to `child` from its recorded parent. A recorded
/// parent that no longer exists is an integrity failure.
pub(crate) fn detach_from_parent(tree: &mut Tree, child: &NodeId) -> MutationResult<()> {
    let parent_id = match tree.get(child).and_then(|n| n.parent_id.clone()) {
        Some(parent_id) => parent_id,
        None => return Ok(()),
    };
    let parent = tree
        .get_mut(&parent_id)
        .ok_or_else(|| arbor_core::TreeError::dangling(&parent_id, child))?;
    parent.detach_child(child);
    Ok(())
}

/// Delete `id` and all of its descendants. The caller detaches it first.
pub(crate) fn delete_subtree(tree: &mut Tree, id: &NodeId) -> Vec<NodeId> {
    let removed = tree.subtree_ids(id);
    for node_id in &removed {
        tree.remove(node_id);
    }
    removed
}
