//! Node structure for Arbor trees.
//!
//! A single node type represents scalars, ordered lists and keyed objects.
//! Which fields are meaningful depends on the node's `NodeType`.

use crate::{NodeId, Value};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Reserved object member naming an extension node type.
pub const TYPE_KEY: &str = "type";
/// Member of an extension object holding its scalar value.
pub const VALUE_KEY: &str = "value";
/// Member of an extension object holding its ordered children.
pub const ITEMS_KEY: &str = "items";

/// Deepest level a node may sit at; the root is level 0.
pub const MAX_DEPTH: usize = 128;

/// Type tag of a node. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    Object,
    Array,
    String,
    Number,
    Boolean,
    Null,
    /// Scalar-with-children hybrid. Carries a value and accepts children
    /// the same way an array does.
    ChecklistItem,
}

impl NodeType {
    pub const ALL: [NodeType; 7] = [
        NodeType::Object,
        NodeType::Array,
        NodeType::String,
        NodeType::Number,
        NodeType::Boolean,
        NodeType::Null,
        NodeType::ChecklistItem,
    ];

    /// Parse a type name as used on the wire.
    pub fn parse(name: &str) -> Option<NodeType> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }

    /// Parse a name from the reserved `"type"` member of a JSON object.
    /// Only extension types override the inferred `object` type.
    pub fn parse_extension(name: &str) -> Option<NodeType> {
        Self::parse(name).filter(|t| t.is_extension())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Object => "object",
            NodeType::Array => "array",
            NodeType::String => "string",
            NodeType::Number => "number",
            NodeType::Boolean => "boolean",
            NodeType::Null => "null",
            NodeType::ChecklistItem => "checklist_item",
        }
    }

    /// Returns true for types that are not native JSON kinds.
    pub fn is_extension(&self) -> bool {
        matches!(self, NodeType::ChecklistItem)
    }

    /// Returns true if children attach by appending to `child_ids`.
    pub fn is_list_like(&self) -> bool {
        matches!(self, NodeType::Array | NodeType::ChecklistItem)
    }

    /// Returns true if the node's `value` is meaningful.
    pub fn holds_value(&self) -> bool {
        !matches!(self, NodeType::Object | NodeType::Array)
    }

    /// Value given to a freshly created node when the caller supplies none.
    pub fn default_value(&self) -> Value {
        match self {
            NodeType::String => Value::String(String::new()),
            NodeType::Number => Value::Number(0.0),
            NodeType::Boolean => Value::Bool(false),
            _ => Value::Null,
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position of a child under its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildSlot {
    /// Index into the parent's `child_ids`.
    Index(usize),
    /// Key in the parent's structural attributes.
    Key(String),
}

impl fmt::Display for ChildSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildSlot::Index(i) => write!(f, "[{}]", i),
            ChildSlot::Key(k) => write!(f, "{}", k),
        }
    }
}

/// A node in a tree.
#[derive(Debug, Clone)]
pub struct Node {
    /// Unique identifier within the tree.
    pub id: NodeId,
    /// Type tag.
    pub node_type: NodeType,
    /// Scalar payload.
    pub value: Value,
    /// Structural object key -> child id bindings.
    pub attributes: HashMap<String, NodeId>,
    /// Free-form string annotations, any node type.
    pub metadata: HashMap<String, String>,
    /// Ordered children of list-like nodes.
    pub child_ids: Vec<NodeId>,
    /// Parent id; `None` for the root.
    pub parent_id: Option<NodeId>,
    /// Key under which this node hangs from an object-like parent.
    pub parent_attribute_key: Option<String>,
}

impl Node {
    /// Create a detached node with no children.
    pub fn new(id: NodeId, node_type: NodeType, value: Value) -> Self {
        Self {
            id,
            node_type,
            value,
            attributes: HashMap::new(),
            metadata: HashMap::new(),
            child_ids: Vec::new(),
            parent_id: None,
            parent_attribute_key: None,
        }
    }

    /// Attach this node under a parent.
    pub fn with_parent(mut self, parent_id: NodeId, key: Option<String>) -> Self {
        self.parent_id = Some(parent_id);
        self.parent_attribute_key = key;
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Structural attribute keys in sorted order.
    pub fn sorted_attribute_keys(&self) -> Vec<&String> {
        let mut keys: Vec<&String> = self.attributes.keys().collect();
        keys.sort();
        keys
    }

    /// All children: `child_ids` in order, then structural attributes by
    /// sorted key.
    pub fn child_links(&self) -> Vec<(ChildSlot, &NodeId)> {
        let indexed = self
            .child_ids
            .iter()
            .enumerate()
            .map(|(i, id)| (ChildSlot::Index(i), id));
        let keyed = self
            .sorted_attribute_keys()
            .into_iter()
            .map(|k| (ChildSlot::Key(k.clone()), &self.attributes[k]));
        indexed.chain(keyed).collect()
    }

    /// Remove every reference to `child` from this node's children.
    /// Returns true if anything was removed.
    pub fn detach_child(&mut self, child: &NodeId) -> bool {
        let before = self.child_ids.len() + self.attributes.len();
        self.child_ids.retain(|id| id != child);
        self.attributes.retain(|_, id| id != child);
        before != self.child_ids.len() + self.attributes.len()
    }

    /// For an extension node, the first wire member claimed both by a
    /// structural attribute and by the node's own type, value or items.
    pub fn wire_collision(&self) -> Option<&'static str> {
        if !self.node_type.is_extension() {
            return None;
        }
        let claimed = [
            (TYPE_KEY, true),
            (VALUE_KEY, !self.value.is_null()),
            (ITEMS_KEY, !self.child_ids.is_empty()),
        ];
        claimed
            .into_iter()
            .find(|(key, used)| *used && self.attributes.contains_key(*key))
            .map(|(key, _)| key)
    }

    /// Structural bindings and metadata merged into one string map.
    /// Structural keys win on collision.
    pub fn merged_attributes(&self) -> HashMap<String, String> {
        let mut merged = self.metadata.clone();
        for (key, id) in &self.attributes {
            merged.insert(key.clone(), id.to_string());
        }
        merged
    }
}
