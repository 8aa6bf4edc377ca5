//! Indented text outline of a tree, for diagnostics.
//!
//! Unlike serialization, rendering never fails: broken references and
//! revisits are printed as inline `<error: ...>` markers so the rest of
//! the tree stays inspectable.

use arbor_core::{ChildSlot, Node, NodeId, NodeType};
use arbor_tree::Tree;
use std::collections::HashSet;
use std::fmt::Write;
use tracing::warn;

/// Render the tree as an outline, `indent` spaces per level.
pub fn render_text(tree: &Tree, indent: usize) -> String {
    let mut renderer = Renderer {
        tree,
        indent,
        out: String::new(),
        visited: HashSet::new(),
    };
    match tree.root_id() {
        Ok(root_id) => renderer.render(root_id, None, 0),
        Err(err) => renderer.error_line(0, None, &err.to_string()),
    }
    renderer.out
}

struct Renderer<'t> {
    tree: &'t Tree,
    indent: usize,
    out: String,
    visited: HashSet<&'t NodeId>,
}

impl<'t> Renderer<'t> {
    fn render(&mut self, id: &'t NodeId, slot: Option<&ChildSlot>, depth: usize) {
        let Some(node) = self.tree.get(id) else {
            warn!(node = %id, "rendering dangling reference");
            self.error_line(depth, slot, &format!("dangling reference {}", id));
            return;
        };
        if !self.visited.insert(id) {
            warn!(node = %id, "rendering revisited node");
            self.error_line(depth, slot, &format!("cycle at {}", id));
            return;
        }

        let line = format!(
            "{}({}){}{}",
            label(slot),
            node.node_type,
            summary(node),
            metadata_suffix(node)
        );
        self.push_line(depth, &line);

        for (child_slot, child_id) in node.child_links() {
            self.render(child_id, Some(&child_slot), depth + 1);
        }
    }

    fn error_line(&mut self, depth: usize, slot: Option<&ChildSlot>, message: &str) {
        let line = format!("{}<error: {}>", label(slot), message);
        self.push_line(depth, &line);
    }

    fn push_line(&mut self, depth: usize, line: &str) {
        let _ = writeln!(self.out, "{:width$}- {}", "", line, width = depth * self.indent);
    }
}

fn label(slot: Option<&ChildSlot>) -> String {
    match slot {
        Some(ChildSlot::Key(key)) => format!("{}: ", key),
        Some(index) => format!("{} ", index),
        None => String::new(),
    }
}

fn summary(node: &Node) -> String {
    match node.node_type {
        NodeType::Object => format!(" {{{} attributes}}", node.attributes.len()),
        NodeType::Array => format!(" [{} children]", node.child_ids.len()),
        NodeType::ChecklistItem => {
            let mut text = format!(" {} [{} children]", node.value, node.child_ids.len());
            if !node.attributes.is_empty() {
                let _ = write!(text, " {{{} attributes}}", node.attributes.len());
            }
            text
        }
        NodeType::String | NodeType::Number | NodeType::Boolean | NodeType::Null => {
            format!(" {}", node.value)
        }
    }
}

fn metadata_suffix(node: &Node) -> String {
    if node.metadata.is_empty() {
        return String::new();
    }
    let mut keys: Vec<&String> = node.metadata.keys().collect();
    keys.sort();
    let pairs: Vec<String> = keys
        .into_iter()
        .map(|key| format!("{}={}", key, node.metadata[key]))
        .collect();
    format!(" meta{{{}}}", pairs.join(", "))
}
