//! SPAWN operation - creates a node and attaches it to a parent.

use arbor_core::{Node, NodeId, NodeType, Value, ITEMS_KEY};
use arbor_tree::Tree;
use tracing::{debug, warn};

use crate::error::{MutationError, MutationResult};
use crate::validation::{non_empty, require_node, require_room};

/// A request to create one child node.
#[derive(Debug, Clone, PartialEq)]
pub struct NewChild {
    pub parent_id: String,
    pub node_type: String,
    pub id: Option<String>,
    pub value: Option<Value>,
    pub key: Option<String>,
}

impl NewChild {
    pub fn new(parent_id: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self {
            parent_id: parent_id.into(),
            node_type: node_type.into(),
            id: None,
            value: None,
            key: None,
        }
    }

    /// Suggest an id. An empty suggestion means "allocate one".
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Key for an object parent. An empty key counts as no key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
}

enum Slot {
    Key(String),
    Append,
}

/// Execute a SPAWN. Every check runs before the tree is touched.
pub fn execute_spawn(tree: &mut Tree, request: &NewChild) -> MutationResult<NodeId> {
    let parent = require_node(tree, &request.parent_id)?;

    let node_type = NodeType::parse(&request.node_type)
        .ok_or_else(|| MutationError::unknown_type(&request.node_type))?;

    let suggested = non_empty(request.id.as_deref());
    if let Some(id) = suggested {
        if tree.contains(id) {
            return Err(MutationError::duplicate_id(id));
        }
    }

    let key = non_empty(request.key.as_deref());
    let slot = match parent.node_type {
        NodeType::Object => {
            let key = key.ok_or_else(|| MutationError::missing_key(&request.parent_id))?;
            if parent.attributes.contains_key(key) {
                return Err(MutationError::duplicate_key(&request.parent_id, key));
            }
            Slot::Key(key.to_string())
        }
        t if t.is_list_like() => {
            if t.is_extension() && parent.attributes.contains_key(ITEMS_KEY) {
                return Err(MutationError::wire_collision(&request.parent_id, ITEMS_KEY));
            }
            if let Some(key) = key {
                warn!(parent = %request.parent_id, key, "ignoring key for list parent");
            }
            Slot::Append
        }
        other => {
            return Err(MutationError::wrong_type(
                &request.parent_id,
                other,
                "add a child",
            ))
        }
    };

    require_room(tree, &parent.id, 0)?;

    let value = if node_type.holds_value() {
        request
            .value
            .clone()
            .unwrap_or_else(|| node_type.default_value())
    } else {
        if request.value.is_some() {
            warn!(node_type = %node_type, "ignoring value for container node");
        }
        Value::Null
    };

    let parent_id = parent.id.clone();
    let id = match suggested {
        Some(id) => NodeId::new(id),
        None => tree.alloc_id(),
    };

    let (attach_key, node) = match slot {
        Slot::Key(key) => (
            Some(key.clone()),
            Node::new(id.clone(), node_type, value).with_parent(parent_id.clone(), Some(key)),
        ),
        Slot::Append => (
            None,
            Node::new(id.clone(), node_type, value).with_parent(parent_id.clone(), None),
        ),
    };
    tree.insert(node);

    let parent = tree.node_mut(parent_id.as_str())?;
    match attach_key {
        Some(key) => {
            parent.metadata.remove(&key);
            parent.attributes.insert(key, id.clone());
        }
        None => parent.child_ids.push(id.clone()),
    }

    debug!(id = %id, parent = %parent_id, node_type = %node_type, "spawned node");
    Ok(id)
}
