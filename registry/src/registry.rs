//! The HandleRegistry - handle to tree lookup.

use crate::{RegistryError, RegistryResult};
use arbor_core::Handle;
use arbor_tree::Tree;
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

const HANDLE_PREFIX: &str = "tree-";

/// Owns every loaded tree and hands out handles to them.
///
/// Handles are never reused and never released; the map grows for the
/// registry's lifetime.
#[derive(Debug, Default)]
pub struct HandleRegistry {
    trees: HashMap<Handle, Tree>,
}

impl HandleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a tree under a fresh handle.
    pub fn register(&mut self, tree: Tree) -> Handle {
        let handle = loop {
            let candidate = Handle::new(format!("{}{}", HANDLE_PREFIX, Uuid::new_v4()));
            if !self.trees.contains_key(&candidate) {
                break candidate;
            }
        };
        debug!(handle = %handle, nodes = tree.node_count(), "registered tree");
        self.trees.insert(handle.clone(), tree);
        handle
    }

    /// Look up the tree behind a handle.
    pub fn resolve(&self, handle: &str) -> RegistryResult<&Tree> {
        self.trees
            .get(handle)
            .ok_or_else(|| RegistryError::handle_not_found(handle))
    }

    /// Look up the tree behind a handle for mutation.
    pub fn resolve_mut(&mut self, handle: &str) -> RegistryResult<&mut Tree> {
        self.trees
            .get_mut(handle)
            .ok_or_else(|| RegistryError::handle_not_found(handle))
    }

    pub fn contains(&self, handle: &str) -> bool {
        self.trees.contains_key(handle)
    }

    /// All registered handles, sorted.
    pub fn handles(&self) -> Vec<&Handle> {
        let mut handles: Vec<&Handle> = self.trees.keys().collect();
        handles.sort();
        handles
    }

    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }
}
