//! Tree to JSON serialization.

use arbor_core::{Node, NodeId, NodeType, TreeError, ITEMS_KEY, TYPE_KEY, VALUE_KEY};
use arbor_tree::Tree;
use serde_json::Map;
use std::collections::HashSet;

use crate::error::CodecResult;

/// Rebuild the JSON document a tree represents. Metadata is not part of
/// the document and is left out.
pub fn to_json_value(tree: &Tree) -> CodecResult<serde_json::Value> {
    let root_id = tree.root_id()?;
    let root = tree.node(root_id.as_str())?;
    let mut visited = HashSet::new();
    Serializer { tree }.node_to_json(root, &mut visited)
}

/// Serialize a tree to JSON text. Keys come out sorted in both modes.
pub fn to_json_string(tree: &Tree, pretty: bool) -> CodecResult<String> {
    let json = to_json_value(tree)?;
    let text = if pretty {
        serde_json::to_string_pretty(&json)?
    } else {
        serde_json::to_string(&json)?
    };
    Ok(text)
}

struct Serializer<'t> {
    tree: &'t Tree,
}

impl<'t> Serializer<'t> {
    fn node_to_json(
        &self,
        node: &'t Node,
        visited: &mut HashSet<&'t NodeId>,
    ) -> CodecResult<serde_json::Value> {
        if !visited.insert(&node.id) {
            return Err(TreeError::Cycle(node.id.clone()).into());
        }

        let json = match node.node_type {
            NodeType::Object => serde_json::Value::Object(self.attributes_to_json(node, visited)?),
            NodeType::Array => serde_json::Value::Array(self.items_to_json(node, visited)?),
            NodeType::ChecklistItem => {
                if let Some(key) = node.wire_collision() {
                    return Err(TreeError::WireCollision {
                        id: node.id.clone(),
                        key: key.to_string(),
                    }
                    .into());
                }
                let mut members = self.attributes_to_json(node, visited)?;
                members.insert(
                    TYPE_KEY.to_string(),
                    serde_json::Value::String(node.node_type.as_str().to_string()),
                );
                if !node.value.is_null() {
                    members.insert(VALUE_KEY.to_string(), node.value.to_json());
                }
                if !node.child_ids.is_empty() {
                    members.insert(
                        ITEMS_KEY.to_string(),
                        serde_json::Value::Array(self.items_to_json(node, visited)?),
                    );
                }
                serde_json::Value::Object(members)
            }
            NodeType::String | NodeType::Number | NodeType::Boolean | NodeType::Null => {
                node.value.to_json()
            }
        };
        Ok(json)
    }

    fn attributes_to_json(
        &self,
        node: &'t Node,
        visited: &mut HashSet<&'t NodeId>,
    ) -> CodecResult<Map<String, serde_json::Value>> {
        let mut members = Map::new();
        for key in node.sorted_attribute_keys() {
            let child = self.tree.child(&node.id, &node.attributes[key])?;
            members.insert(key.clone(), self.node_to_json(child, visited)?);
        }
        Ok(members)
    }

    fn items_to_json(
        &self,
        node: &'t Node,
        visited: &mut HashSet<&'t NodeId>,
    ) -> CodecResult<Vec<serde_json::Value>> {
        node.child_ids
            .iter()
            .map(|child_id| {
                let child = self.tree.child(&node.id, child_id)?;
                self.node_to_json(child, visited)
            })
            .collect()
    }
}
