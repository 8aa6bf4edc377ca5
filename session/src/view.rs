//! Flattened node records handed to hosts.

use arbor_core::{Node, NodeType, Value};
use serde::Serialize;
use std::collections::BTreeMap;

/// A detached, serializable snapshot of one node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeView {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub value: Value,
    /// Structural object keys mapped to child ids.
    pub attributes: BTreeMap<String, String>,
    pub metadata: BTreeMap<String, String>,
    /// Ordered children of list-like nodes.
    pub children: Vec<String>,
    /// Empty for the root.
    pub parent_id: String,
    pub parent_attribute_key: Option<String>,
}

impl NodeView {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_empty()
    }
}

impl From<&Node> for NodeView {
    fn from(node: &Node) -> Self {
        Self {
            id: node.id.to_string(),
            node_type: node.node_type,
            value: node.value.clone(),
            attributes: node
                .attributes
                .iter()
                .map(|(k, id)| (k.clone(), id.to_string()))
                .collect(),
            metadata: node
                .metadata
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            children: node.child_ids.iter().map(|id| id.to_string()).collect(),
            parent_id: node
                .parent_id
                .as_ref()
                .map(|id| id.to_string())
                .unwrap_or_default(),
            parent_attribute_key: node.parent_attribute_key.clone(),
        }
    }
}
