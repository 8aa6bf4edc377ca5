//! METADATA operations - free-form string annotations on any node.
//!
//! Metadata lives beside structural object keys. Reads return both merged;
//! writes refuse keys that are structural bindings so an annotation can
//! never overwrite a child reference.

use arbor_tree::Tree;
use std::collections::HashMap;
use tracing::debug;

use crate::error::{MutationError, MutationResult};
use crate::result::MutationOutcome;
use crate::validation::require_node;

/// Metadata merged with structural bindings (key -> child id).
pub fn node_metadata(tree: &Tree, id: &str) -> MutationResult<HashMap<String, String>> {
    Ok(require_node(tree, id)?.merged_attributes())
}

/// Set or overwrite one metadata entry.
pub fn execute_set_metadata(
    tree: &mut Tree,
    id: &str,
    key: &str,
    value: &str,
) -> MutationResult<MutationOutcome> {
    let node = require_node(tree, id)?;
    if key.is_empty() {
        return Err(MutationError::missing_key(id));
    }
    if node.attributes.contains_key(key) {
        return Err(MutationError::structural_key(id, key));
    }

    let node = tree.node_mut(id)?;
    node.metadata.insert(key.to_string(), value.to_string());
    debug!(id, key, "set metadata");
    Ok(MutationOutcome::updated(node.id.clone()))
}

/// Remove one metadata entry.
pub fn execute_remove_metadata(
    tree: &mut Tree,
    id: &str,
    key: &str,
) -> MutationResult<MutationOutcome> {
    let node = require_node(tree, id)?;
    if node.attributes.contains_key(key) {
        return Err(MutationError::structural_key(id, key));
    }
    if !node.metadata.contains_key(key) {
        return Err(MutationError::attribute_not_found(id, key));
    }

    let node = tree.node_mut(id)?;
    node.metadata.remove(key);
    debug!(id, key, "removed metadata");
    Ok(MutationOutcome::updated(node.id.clone()))
}
