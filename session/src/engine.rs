//! Engine facade.
//!
//! Every operation takes a handle first; the engine resolves it against its
//! own registry and delegates to the codec, query or mutation crates.

use arbor_codec::{load_str, render_text, to_json_string};
use arbor_core::{Handle, NodeId, Value};
use arbor_mutation::{node_metadata, MutationExecutor, NewChild};
use arbor_query::{find_nodes, Navigator, Query, SearchBounds};
use arbor_registry::HandleRegistry;
use arbor_tree::Tree;
use std::collections::BTreeMap;
use tracing::debug;

use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::view::NodeView;

/// Handle-addressed tree engine.
#[derive(Debug, Default)]
pub struct Engine {
    registry: HandleRegistry,
    config: EngineConfig,
}

impl Engine {
    /// Create an engine with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with the given configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            registry: HandleRegistry::new(),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Registered handles in sorted order.
    pub fn handles(&self) -> Vec<Handle> {
        self.registry.handles().into_iter().cloned().collect()
    }

    /// Number of nodes in a tree.
    pub fn node_count(&self, handle: &str) -> EngineResult<usize> {
        Ok(self.tree(handle)?.node_count())
    }

    /// Verify parent and child references of a tree.
    pub fn check_integrity(&self, handle: &str) -> EngineResult<()> {
        Ok(self.tree(handle)?.check_integrity()?)
    }

    fn tree(&self, handle: &str) -> EngineResult<&Tree> {
        Ok(self.registry.resolve(handle)?)
    }

    fn executor(&mut self, handle: &str) -> EngineResult<MutationExecutor<'_>> {
        Ok(MutationExecutor::new(self.registry.resolve_mut(handle)?))
    }

    // ==================== Load / Serialize ====================

    /// Parse a JSON document into a new tree and register it.
    pub fn load_json(&mut self, text: &str) -> EngineResult<Handle> {
        let tree = load_str(text)?;
        Ok(self.registry.register(tree))
    }

    /// Serialize a tree back to JSON text.
    pub fn to_json(&self, handle: &str) -> EngineResult<String> {
        Ok(to_json_string(self.tree(handle)?, self.config.pretty_json)?)
    }

    /// Indented diagnostic outline of a tree. Never fails on a corrupt tree.
    pub fn render_text(&self, handle: &str) -> EngineResult<String> {
        Ok(render_text(self.tree(handle)?, self.config.render_indent))
    }

    // ==================== Navigation ====================

    pub fn get_root(&self, handle: &str) -> EngineResult<NodeView> {
        let nav = Navigator::new(self.tree(handle)?);
        Ok(NodeView::from(nav.root()?))
    }

    pub fn get_node(&self, handle: &str, id: &str) -> EngineResult<NodeView> {
        let nav = Navigator::new(self.tree(handle)?);
        Ok(NodeView::from(nav.node(id)?))
    }

    /// Resolve a dotted path such as `items.0.name` from the root.
    pub fn get_node_by_path(&self, handle: &str, path: &str) -> EngineResult<NodeView> {
        let nav = Navigator::new(self.tree(handle)?);
        Ok(NodeView::from(nav.by_path(path)?))
    }

    /// Parent of a node, or `None` for the root.
    pub fn get_parent(&self, handle: &str, id: &str) -> EngineResult<Option<NodeView>> {
        let nav = Navigator::new(self.tree(handle)?);
        Ok(nav.parent(id)?.map(NodeView::from))
    }

    /// Ordered child ids of an array node.
    pub fn get_children(&self, handle: &str, id: &str) -> EngineResult<Vec<NodeId>> {
        let nav = Navigator::new(self.tree(handle)?);
        Ok(nav.children(id)?.to_vec())
    }

    // ==================== Mutation ====================

    pub fn set_value(&mut self, handle: &str, id: &str, value: Value) -> EngineResult<()> {
        self.executor(handle)?.execute_set(id, value)?;
        Ok(())
    }

    /// Create a node under `request.parent_id` and return its id.
    pub fn add_child_node(&mut self, handle: &str, request: &NewChild) -> EngineResult<NodeId> {
        let id = self.executor(handle)?.execute_spawn(request)?;
        debug!(handle, id = %id, "added child node");
        Ok(id)
    }

    /// Remove a non-root node and its subtree. Returns the removed ids.
    pub fn remove_node(&mut self, handle: &str, id: &str) -> EngineResult<Vec<NodeId>> {
        let outcome = self.executor(handle)?.execute_kill(id)?;
        Ok(outcome.deleted_nodes().to_vec())
    }

    /// Bind an existing node under `key` on an object node.
    pub fn set_object_attribute(
        &mut self,
        handle: &str,
        object_id: &str,
        key: &str,
        child_id: &str,
    ) -> EngineResult<()> {
        self.executor(handle)?.execute_link(object_id, key, child_id)?;
        Ok(())
    }

    /// Drop `key` from an object node, deleting the subtree it pointed to.
    pub fn remove_object_attribute(
        &mut self,
        handle: &str,
        object_id: &str,
        key: &str,
    ) -> EngineResult<()> {
        self.executor(handle)?.execute_unlink(object_id, key)?;
        Ok(())
    }

    /// Metadata merged with structural keys (key -> child id).
    pub fn get_node_metadata(
        &self,
        handle: &str,
        id: &str,
    ) -> EngineResult<BTreeMap<String, String>> {
        let merged = node_metadata(self.tree(handle)?, id)?;
        Ok(merged.into_iter().collect())
    }

    pub fn set_node_metadata(
        &mut self,
        handle: &str,
        id: &str,
        key: &str,
        value: &str,
    ) -> EngineResult<()> {
        self.executor(handle)?.execute_set_metadata(id, key, value)?;
        Ok(())
    }

    pub fn remove_node_metadata(&mut self, handle: &str, id: &str, key: &str) -> EngineResult<()> {
        self.executor(handle)?.execute_remove_metadata(id, key)?;
        Ok(())
    }

    // ==================== Search ====================

    /// Find nodes at or below `start_id` matching a JSON predicate map.
    /// Bounds left as `None` fall back to the configured defaults.
    pub fn find_nodes(
        &self,
        handle: &str,
        start_id: &str,
        query: &serde_json::Value,
        max_depth: Option<i64>,
        max_results: Option<i64>,
    ) -> EngineResult<Vec<NodeId>> {
        let tree = self.tree(handle)?;
        let query = Query::from_json(query)?;
        let bounds = SearchBounds::from_limits(
            max_depth.unwrap_or(self.config.default_max_depth),
            max_results.unwrap_or(self.config.default_max_results),
        )?;
        Ok(find_nodes(tree, start_id, &query, bounds)?)
    }
}
