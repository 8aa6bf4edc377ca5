//! Bounded depth-first search for nodes matching a query.

use arbor_core::{Node, NodeId};
use arbor_tree::Tree;
use std::collections::HashSet;
use tracing::debug;

use crate::{Query, QueryError, QueryResult};

/// Sentinel for "no bound" in caller-facing limits.
pub const UNBOUNDED: i64 = -1;

/// Depth and result limits for a search. `None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchBounds {
    /// Deepest level to examine; the start node is depth 0.
    pub max_depth: Option<usize>,
    /// Stop once this many matches have been collected.
    pub max_results: Option<usize>,
}

impl SearchBounds {
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Convert caller limits where `-1` means unbounded.
    pub fn from_limits(max_depth: i64, max_results: i64) -> QueryResult<Self> {
        Ok(Self {
            max_depth: limit("max_depth", max_depth)?,
            max_results: limit("max_results", max_results)?,
        })
    }
}

fn limit(name: &str, value: i64) -> QueryResult<Option<usize>> {
    match value {
        UNBOUNDED => Ok(None),
        v if v >= 0 => Ok(Some(v as usize)),
        v => Err(QueryError::invalid_bound(name, v)),
    }
}

/// Find nodes at or below `start_id` matching `query`, in pre-order.
pub fn find_nodes(
    tree: &Tree,
    start_id: &str,
    query: &Query,
    bounds: SearchBounds,
) -> QueryResult<Vec<NodeId>> {
    let start = tree
        .get(start_id)
        .ok_or_else(|| QueryError::node_not_found(start_id))?;

    let mut search = Search {
        tree,
        query,
        bounds,
        visited: HashSet::new(),
        results: Vec::new(),
    };
    search.visit(start, 0)?;

    debug!(
        start = %start_id,
        matches = search.results.len(),
        visited = search.visited.len(),
        "find_nodes completed"
    );
    Ok(search.results)
}

struct Search<'t, 'q> {
    tree: &'t Tree,
    query: &'q Query,
    bounds: SearchBounds,
    visited: HashSet<&'t NodeId>,
    results: Vec<NodeId>,
}

impl<'t, 'q> Search<'t, 'q> {
    fn is_full(&self) -> bool {
        self.bounds
            .max_results
            .is_some_and(|max| self.results.len() >= max)
    }

    fn visit(&mut self, node: &'t Node, depth: usize) -> QueryResult<()> {
        if self.is_full() || !self.visited.insert(&node.id) {
            return Ok(());
        }

        if self.query.matches(self.tree, node)? {
            self.results.push(node.id.clone());
        }

        if self.bounds.max_depth.is_some_and(|max| depth >= max) {
            return Ok(());
        }

        for (_, child_id) in node.child_links() {
            if self.is_full() {
                break;
            }
            let child = self.tree.child(&node.id, child_id)?;
            self.visit(child, depth + 1)?;
        }
        Ok(())
    }
}
