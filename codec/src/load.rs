//! JSON to tree loading.
//!
//! Nodes are created depth-first in pre-order, object members in sorted
//! key order, so loading the same document twice yields the same ids.

use arbor_core::{Node, NodeId, NodeType, Value, ITEMS_KEY, MAX_DEPTH, TYPE_KEY, VALUE_KEY};
use arbor_tree::Tree;
use serde::Deserialize;
use serde_json::Map;
use tracing::debug;

use crate::error::{CodecError, CodecResult};

/// Bracket nesting a document within `MAX_DEPTH` can reach. A checklist
/// item spends one level on its object and one on its `items` array.
const MAX_NESTING: usize = 2 * MAX_DEPTH + 1;

/// Parse JSON text and build a tree from it. Documents nested deeper than
/// `MAX_DEPTH` are rejected before parsing.
pub fn load_str(text: &str) -> CodecResult<Tree> {
    if text.trim().is_empty() {
        return Err(CodecError::EmptyInput);
    }
    check_nesting(text)?;

    let mut deserializer = serde_json::Deserializer::from_str(text);
    deserializer.disable_recursion_limit();
    let json = serde_json::Value::deserialize(&mut deserializer)?;
    deserializer.end()?;
    load_value(&json)
}

/// Count bracket nesting outside string literals.
fn check_nesting(text: &str) -> CodecResult<()> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for byte in text.bytes() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                if depth > MAX_NESTING {
                    return Err(CodecError::too_deep(MAX_DEPTH));
                }
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    Ok(())
}

/// Build a tree from an already parsed JSON value.
pub fn load_value(json: &serde_json::Value) -> CodecResult<Tree> {
    let mut builder = TreeBuilder::new();
    let root_id = builder.build(json, None)?;
    let mut tree = builder.finish();
    tree.set_root(root_id);
    debug!(nodes = tree.node_count(), "loaded tree");
    Ok(tree)
}

/// Where a node being built hangs from.
struct Attachment {
    parent: NodeId,
    key: Option<String>,
    depth: usize,
}

struct TreeBuilder {
    tree: Tree,
}

impl TreeBuilder {
    fn new() -> Self {
        Self { tree: Tree::new() }
    }

    fn finish(self) -> Tree {
        self.tree
    }

    fn build(
        &mut self,
        json: &serde_json::Value,
        attachment: Option<Attachment>,
    ) -> CodecResult<NodeId> {
        let depth = attachment.as_ref().map_or(0, |a| a.depth);
        if depth > MAX_DEPTH {
            return Err(CodecError::too_deep(MAX_DEPTH));
        }
        let id = self.tree.alloc_id();

        let node = match json {
            serde_json::Value::Object(members) => {
                self.build_object(id.clone(), members, depth)?
            }
            serde_json::Value::Array(items) => {
                let mut node = Node::new(id.clone(), NodeType::Array, Value::Null);
                node.child_ids = self.build_items(&id, items, depth)?;
                node
            }
            scalar => {
                let value = Value::from_json(scalar)
                    .ok_or_else(|| CodecError::unsupported(scalar.to_string()))?;
                Node::new(id.clone(), scalar_type(scalar), value)
            }
        };

        let node = match attachment {
            Some(Attachment { parent, key, .. }) => node.with_parent(parent, key),
            None => node,
        };
        self.tree.insert(node);
        Ok(id)
    }

    fn build_object(
        &mut self,
        id: NodeId,
        members: &Map<String, serde_json::Value>,
        depth: usize,
    ) -> CodecResult<Node> {
        let node_type = members
            .get(TYPE_KEY)
            .and_then(serde_json::Value::as_str)
            .and_then(NodeType::parse_extension)
            .unwrap_or(NodeType::Object);
        let mut node = Node::new(id.clone(), node_type, Value::Null);

        let mut keys: Vec<&String> = members.keys().collect();
        keys.sort();

        for key in keys {
            let member = &members[key];
            if node_type.is_extension() {
                match (key.as_str(), member) {
                    (TYPE_KEY, _) => continue,
                    // Null values and empty item lists stay ordinary members
                    // so they survive serialization unchanged.
                    (VALUE_KEY, scalar) if !scalar.is_null() => {
                        if let Some(value) = Value::from_json(scalar) {
                            node.value = value;
                            continue;
                        }
                    }
                    (ITEMS_KEY, serde_json::Value::Array(items)) if !items.is_empty() => {
                        node.child_ids = self.build_items(&id, items, depth)?;
                        continue;
                    }
                    _ => {}
                }
            }
            let child = self.build(
                member,
                Some(Attachment {
                    parent: id.clone(),
                    key: Some(key.clone()),
                    depth: depth + 1,
                }),
            )?;
            node.attributes.insert(key.clone(), child);
        }
        Ok(node)
    }

    fn build_items(
        &mut self,
        parent: &NodeId,
        items: &[serde_json::Value],
        depth: usize,
    ) -> CodecResult<Vec<NodeId>> {
        items
            .iter()
            .map(|item| {
                self.build(
                    item,
                    Some(Attachment {
                        parent: parent.clone(),
                        key: None,
                        depth: depth + 1,
                    }),
                )
            })
            .collect()
    }
}

fn scalar_type(json: &serde_json::Value) -> NodeType {
    match json {
        serde_json::Value::Bool(_) => NodeType::Boolean,
        serde_json::Value::Number(_) => NodeType::Number,
        serde_json::Value::String(_) => NodeType::String,
        _ => NodeType::Null,
    }
}
