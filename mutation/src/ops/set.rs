//! SET operation - overwrites the scalar value of a node.

use arbor_core::{Value, VALUE_KEY};
use arbor_tree::Tree;
use tracing::debug;

use crate::error::{MutationError, MutationResult};
use crate::result::MutationOutcome;
use crate::validation::require_node;

/// Execute a SET. Containers have no value of their own.
pub fn execute_set(tree: &mut Tree, id: &str, value: Value) -> MutationResult<MutationOutcome> {
    let node = require_node(tree, id)?;
    let node_type = node.node_type;
    if !node_type.holds_value() {
        return Err(MutationError::wrong_type(id, node_type, "set a value"));
    }
    // The "value" member of an extension node is taken by an attribute.
    if node_type.is_extension() && !value.is_null() && node.attributes.contains_key(VALUE_KEY) {
        return Err(MutationError::wire_collision(id, VALUE_KEY));
    }

    let node = tree.node_mut(id)?;
    debug!(id, from = %node.value, to = %value, "set value");
    node.value = value;
    Ok(MutationOutcome::updated(node.id.clone()))
}
