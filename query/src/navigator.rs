//! Id, parent/child and dotted-path lookups.

use arbor_core::{Node, NodeId, NodeType};
use arbor_tree::Tree;

use crate::{QueryError, QueryResult};

const PATH_SEPARATOR: char = '.';

/// Read-only lookups against one tree.
pub struct Navigator<'t> {
    tree: &'t Tree,
}

impl<'t> Navigator<'t> {
    /// Create a navigator.
    pub fn new(tree: &'t Tree) -> Self {
        Self { tree }
    }

    /// Get a node by id.
    pub fn node(&self, id: &str) -> QueryResult<&'t Node> {
        self.tree
            .get(id)
            .ok_or_else(|| QueryError::node_not_found(id))
    }

    /// Get the root node.
    pub fn root(&self) -> QueryResult<&'t Node> {
        let root_id = self.tree.root_id()?;
        Ok(self.tree.node(root_id.as_str())?)
    }

    /// Get the parent of a node; `None` for the root.
    pub fn parent(&self, id: &str) -> QueryResult<Option<&'t Node>> {
        let node = self.node(id)?;
        match &node.parent_id {
            None => Ok(None),
            Some(parent_id) => {
                let parent = self.tree.get(parent_id).ok_or_else(|| {
                    arbor_core::TreeError::dangling(parent_id, &node.id)
                })?;
                Ok(Some(parent))
            }
        }
    }

    /// Get the ordered children of an array node.
    pub fn children(&self, id: &str) -> QueryResult<&'t [NodeId]> {
        let node = self.node(id)?;
        if node.node_type != NodeType::Array {
            return Err(QueryError::wrong_type(id, node.node_type, "list children"));
        }
        Ok(&node.child_ids)
    }

    /// Resolve a dotted path from the root. Object segments are keys, array
    /// segments are indices; an empty path is the root.
    pub fn by_path(&self, path: &str) -> QueryResult<&'t Node> {
        let mut current = self.root()?;
        if path.is_empty() {
            return Ok(current);
        }

        for segment in path.split(PATH_SEPARATOR) {
            let child_id = match current.node_type {
                NodeType::Object => current
                    .attributes
                    .get(segment)
                    .ok_or_else(|| QueryError::segment_not_found(path, segment))?,
                NodeType::Array => {
                    let index = parse_index(segment)?;
                    current
                        .child_ids
                        .get(index)
                        .ok_or(QueryError::IndexOutOfRange {
                            index,
                            len: current.child_ids.len(),
                        })?
                }
                other => {
                    return Err(QueryError::wrong_type(
                        current.id.as_str(),
                        other,
                        format!("descend into '{}'", segment),
                    ))
                }
            };
            current = self.tree.child(&current.id, child_id)?;
        }
        Ok(current)
    }
}

/// Array segments are plain decimal digits; signs and spaces are rejected.
fn parse_index(segment: &str) -> QueryResult<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(QueryError::invalid_index(segment));
    }
    segment
        .parse()
        .map_err(|_| QueryError::invalid_index(segment))
}
