//! An arena view hierarchy.
//!
//! Views are plain ids into the tree. The tree records names, parent/child
//! links and the autoresizing flag; it has no geometry.

use std::collections::HashMap;
use std::fmt;

use crate::hierarchy::ViewHierarchy;

/// Unique identifier for a view in a [`ViewTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(pub u64);

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A view in the tree.
#[derive(Debug, Clone)]
pub struct ViewNode {
    pub id: ViewId,
    /// Name for debugging
    pub name: String,
    /// Parent view (None for roots and detached views)
    pub parent: Option<ViewId>,
    /// Subviews in attach order
    pub children: Vec<ViewId>,
    /// Whether the frame is turned into implicit constraints
    pub translates_autoresizing: bool,
}

impl ViewNode {
    pub fn new(id: ViewId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            parent: None,
            children: Vec::new(),
            translates_autoresizing: true,
        }
    }
}

/// A forest of views.
#[derive(Debug, Clone, Default)]
pub struct ViewTree {
    nodes: HashMap<ViewId, ViewNode>,
    roots: Vec<ViewId>,
    next_id: u64,
}

impl ViewTree {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> ViewId {
        let id = ViewId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add a top-level view.
    pub fn add_root(&mut self, name: impl Into<String>) -> ViewId {
        let id = self.add_view(name);
        self.roots.push(id);
        id
    }

    /// Add a view that has no parent yet.
    pub fn add_view(&mut self, name: impl Into<String>) -> ViewId {
        let id = self.next_id();
        self.nodes.insert(id, ViewNode::new(id, name));
        id
    }

    /// Move `child` under `parent`. Unknown ids are ignored.
    pub fn attach(&mut self, parent: ViewId, child: ViewId) {
        if parent == child || !self.nodes.contains_key(&parent) {
            return;
        }
        let Some(previous) = self.nodes.get(&child).map(|node| node.parent) else {
            return;
        };

        if let Some(old_parent) = previous.and_then(|id| self.nodes.get_mut(&id)) {
            old_parent.children.retain(|id| *id != child);
        }
        self.roots.retain(|id| *id != child);

        if let Some(node) = self.nodes.get_mut(&child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.nodes.get_mut(&parent) {
            node.children.push(child);
        }
    }

    pub fn get(&self, id: ViewId) -> Option<&ViewNode> {
        self.nodes.get(&id)
    }

    pub fn name(&self, id: ViewId) -> Option<&str> {
        self.nodes.get(&id).map(|node| node.name.as_str())
    }

    pub fn parent(&self, id: ViewId) -> Option<ViewId> {
        self.nodes.get(&id).and_then(|node| node.parent)
    }

    pub fn children(&self, id: ViewId) -> &[ViewId] {
        self.nodes
            .get(&id)
            .map(|node| node.children.as_slice())
            .unwrap_or_default()
    }

    pub fn roots(&self) -> &[ViewId] {
        &self.roots
    }

    pub fn translates_autoresizing(&self, id: ViewId) -> bool {
        self.nodes
            .get(&id)
            .map_or(false, |node| node.translates_autoresizing)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl ViewHierarchy<ViewId> for ViewTree {
    fn contains(&self, container: &ViewId, child: &ViewId) -> bool {
        self.parent(*child) == Some(*container)
    }

    fn add_child(&mut self, container: &ViewId, child: &ViewId) {
        self.attach(*container, *child);
    }

    fn set_translates_autoresizing(&mut self, view: &ViewId, enabled: bool) {
        if let Some(node) = self.nodes.get_mut(view) {
            node.translates_autoresizing = enabled;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_tree() {
        let mut tree = ViewTree::new();
        let root = tree.add_root("root");
        let child = tree.add_view("child");

        assert_eq!(tree.parent(child), None);
        assert!(tree.translates_autoresizing(child));

        tree.attach(root, child);
        assert_eq!(tree.parent(child), Some(root));
        assert_eq!(tree.children(root), [child]);
        assert_eq!(tree.name(child), Some("child"));
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_reparenting_moves_the_view() {
        let mut tree = ViewTree::new();
        let first = tree.add_root("first");
        let second = tree.add_root("second");
        let child = tree.add_view("child");

        tree.attach(first, child);
        tree.attach(second, child);

        assert!(tree.children(first).is_empty());
        assert_eq!(tree.children(second), [child]);
    }

    #[test]
    fn test_attaching_a_root_removes_it_from_roots() {
        let mut tree = ViewTree::new();
        let outer = tree.add_root("outer");
        let inner = tree.add_root("inner");

        tree.attach(outer, inner);
        assert_eq!(tree.roots(), [outer]);
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let mut tree = ViewTree::new();
        let root = tree.add_root("root");
        tree.attach(root, ViewId(42));
        tree.attach(root, root);
        assert!(tree.children(root).is_empty());
        assert!(tree.children(ViewId(42)).is_empty());
    }

    #[test]
    fn test_hierarchy_contract() {
        let mut tree = ViewTree::new();
        let root = tree.add_root("root");
        let child = tree.add_view("child");

        assert!(!tree.contains(&root, &child));
        tree.add_child(&root, &child);
        assert!(tree.contains(&root, &child));

        tree.set_translates_autoresizing(&child, false);
        assert!(!tree.translates_autoresizing(child));
    }
}
