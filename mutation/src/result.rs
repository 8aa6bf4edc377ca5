//! Mutation result types.

use arbor_core::NodeId;

/// Outcome of a mutation operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// Deleted a subtree, listed in pre-order.
    Deleted(Vec<NodeId>),
    /// Updated a node in place. `displaced` holds any subtree removed as a
    /// side effect, e.g. a node replaced under an object key.
    Updated { id: NodeId, displaced: Vec<NodeId> },
}

impl MutationOutcome {
    pub fn updated(id: NodeId) -> Self {
        MutationOutcome::Updated {
            id,
            displaced: Vec::new(),
        }
    }

    /// Ids removed from the tree by this mutation.
    pub fn deleted_nodes(&self) -> &[NodeId] {
        match self {
            MutationOutcome::Deleted(ids) => ids,
            MutationOutcome::Updated { displaced, .. } => displaced,
        }
    }
}
