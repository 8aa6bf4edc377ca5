//! Tree integrity checking.
//!
//! Walks from the root and verifies that every reference resolves, every
//! child points back at the parent holding it, every stored node is
//! reachable, no node is deeper than `MAX_DEPTH`, and no extension node
//! would write two values into one JSON member.

use crate::Tree;
use arbor_core::{ChildSlot, NodeId, TreeError, TreeResult, MAX_DEPTH};
use std::collections::HashSet;

impl Tree {
    /// Verify the structural invariants, returning the first violation.
    pub fn check_integrity(&self) -> TreeResult<()> {
        let root_id = self.root_id()?;
        let root = self.node(root_id.as_str())?;
        if root.parent_id.is_some() {
            return Err(TreeError::ParentMismatch {
                child: root_id.clone(),
                holder: root_id.clone(),
                recorded: root.parent_id.as_ref().map(NodeId::to_string).unwrap_or_default(),
            });
        }

        let mut visited: HashSet<&NodeId> = HashSet::new();
        let mut stack = vec![(root_id, 0)];
        while let Some((current, depth)) = stack.pop() {
            if !visited.insert(current) {
                return Err(TreeError::Cycle(current.clone()));
            }
            if depth > MAX_DEPTH {
                return Err(TreeError::TooDeep {
                    id: current.clone(),
                    limit: MAX_DEPTH,
                });
            }
            let node = self.node(current.as_str())?;
            if let Some(key) = node.wire_collision() {
                return Err(TreeError::WireCollision {
                    id: current.clone(),
                    key: key.to_string(),
                });
            }
            for (slot, child_id) in node.child_links() {
                let child = self.child(current, child_id)?;
                let key_matches = match &slot {
                    ChildSlot::Key(key) => child.parent_attribute_key.as_ref() == Some(key),
                    ChildSlot::Index(_) => true,
                };
                if child.parent_id.as_ref() != Some(current) || !key_matches {
                    return Err(TreeError::ParentMismatch {
                        child: child_id.clone(),
                        holder: current.clone(),
                        recorded: child
                            .parent_id
                            .as_ref()
                            .map(NodeId::to_string)
                            .unwrap_or_default(),
                    });
                }
                stack.push((child_id, depth + 1));
            }
        }

        if let Some(orphan) = self.node_ids().find(|id| !visited.contains(id)) {
            return Err(TreeError::Unreachable(orphan.clone()));
        }
        Ok(())
    }
}
