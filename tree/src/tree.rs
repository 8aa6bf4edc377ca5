//! Core tree storage implementation.

use arbor_core::{Node, NodeId, TreeError, TreeResult};
use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// ID allocator for nodes.
#[derive(Debug)]
struct IdAllocator {
    next_node_id: u64,
}

impl IdAllocator {
    fn new() -> Self {
        Self { next_node_id: 1 }
    }

    fn alloc_node_id(&mut self) -> NodeId {
        let id = NodeId::sequential(self.next_node_id);
        self.next_node_id += 1;
        id
    }
}

/// The in-memory tree storage.
#[derive(Debug)]
pub struct Tree {
    /// Root node id; unset until the first node is placed.
    root_id: Option<NodeId>,
    /// Node storage
    nodes: HashMap<NodeId, Node>,
    /// ID allocator
    id_alloc: IdAllocator,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self {
            root_id: None,
            nodes: HashMap::new(),
            id_alloc: IdAllocator::new(),
        }
    }

    // ==================== Root ====================

    /// Get the root id, failing on an empty tree.
    pub fn root_id(&self) -> TreeResult<&NodeId> {
        self.root_id.as_ref().ok_or(TreeError::MissingRoot)
    }

    /// Returns true if `id` is the root.
    pub fn is_root<Q>(&self, id: &Q) -> bool
    where
        NodeId: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.root_id
            .as_ref()
            .is_some_and(|root| <NodeId as Borrow<Q>>::borrow(root) == id)
    }

    /// Set the root id. The node itself is inserted separately.
    pub fn set_root(&mut self, id: NodeId) {
        self.root_id = Some(id);
    }

    // ==================== Node Operations ====================

    /// Allocate a fresh id. Ids already present (e.g. caller suggestions)
    /// are skipped, so the result is never a live id.
    pub fn alloc_id(&mut self) -> NodeId {
        loop {
            let id = self.id_alloc.alloc_node_id();
            if !self.nodes.contains_key(&id) {
                return id;
            }
        }
    }

    /// Returns true if a node with this id exists.
    pub fn contains<Q>(&self, id: &Q) -> bool
    where
        NodeId: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.nodes.contains_key(id)
    }

    /// Get a node by ID.
    pub fn get<Q>(&self, id: &Q) -> Option<&Node>
    where
        NodeId: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.nodes.get(id)
    }

    /// Get a mutable reference to a node by ID.
    pub fn get_mut<Q>(&mut self, id: &Q) -> Option<&mut Node>
    where
        NodeId: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.nodes.get_mut(id)
    }

    /// Get a node by ID, failing with `NodeNotFound`.
    pub fn node(&self, id: &str) -> TreeResult<&Node> {
        self.nodes
            .get(id)
            .ok_or_else(|| TreeError::NodeNotFound(NodeId::new(id)))
    }

    /// Get a mutable node by ID, failing with `NodeNotFound`.
    pub fn node_mut(&mut self, id: &str) -> TreeResult<&mut Node> {
        self.nodes
            .get_mut(id)
            .ok_or_else(|| TreeError::NodeNotFound(NodeId::new(id)))
    }

    /// Get a child referenced by `parent`, treating absence as a dangling
    /// reference rather than a lookup miss.
    pub fn child(&self, parent: &NodeId, child: &NodeId) -> TreeResult<&Node> {
        self.nodes
            .get(child)
            .ok_or_else(|| TreeError::dangling(parent, child))
    }

    /// Insert a node, replacing any node with the same id.
    pub fn insert(&mut self, node: Node) {
        self.nodes.insert(node.id.clone(), node);
    }

    /// Remove a single node without touching its relatives.
    pub fn remove<Q>(&mut self, id: &Q) -> Option<Node>
    where
        NodeId: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.nodes.remove(id)
    }

    // ==================== Walks ====================

    /// Collect `id` and all of its descendants in pre-order. Each node is
    /// visited at most once; ids missing from storage are skipped.
    pub fn subtree_ids(&self, id: &NodeId) -> Vec<NodeId> {
        let mut visited = HashSet::new();
        let mut order = Vec::new();
        let mut stack = vec![id.clone()];

        while let Some(current) = stack.pop() {
            if !visited.insert(current.clone()) {
                continue;
            }
            let Some(node) = self.nodes.get(&current) else {
                continue;
            };
            let links = node.child_links();
            for (_, child) in links.into_iter().rev() {
                stack.push(child.clone());
            }
            order.push(current);
        }
        order
    }

    /// Returns true if `ancestor` is `id` or lies on its parent chain.
    pub fn is_ancestor_or_self(&self, ancestor: &NodeId, id: &NodeId) -> bool {
        let mut visited = HashSet::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            if !visited.insert(current) {
                return false;
            }
            cursor = self
                .nodes
                .get(current)
                .and_then(|node| node.parent_id.as_ref());
        }
        false
    }

    /// Number of parent links between `id` and the root.
    pub fn depth(&self, id: &NodeId) -> usize {
        let mut visited = HashSet::new();
        let mut depth = 0;
        let mut cursor = self.nodes.get(id).and_then(|node| node.parent_id.as_ref());
        while let Some(parent) = cursor {
            if !visited.insert(parent) {
                break;
            }
            depth += 1;
            cursor = self
                .nodes
                .get(parent)
                .and_then(|node| node.parent_id.as_ref());
        }
        depth
    }

    /// Longest downward path below `id`, in links. A leaf has height 0.
    pub fn height(&self, id: &NodeId) -> usize {
        let mut visited = HashSet::new();
        let mut height = 0;
        let mut stack = vec![(id, 0)];
        while let Some((current, level)) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            height = height.max(level);
            if let Some(node) = self.nodes.get(current) {
                for (_, child) in node.child_links() {
                    stack.push((child, level + 1));
                }
            }
        }
        height
    }

    // ==================== Statistics ====================

    /// Get the number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get all node IDs.
    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> + '_ {
        self.nodes.keys()
    }

    /// Iterate over all nodes.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.values()
    }
}
