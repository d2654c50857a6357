use std::fmt;

use super::RBTree;

/// Stable handle to a node in an [`RBTree`].
///
/// Nodes are never removed, so a `NodeId` handed out by a tree stays valid for
/// as long as that tree lives. Using it with a different tree is not unsound,
/// just meaningless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(super) fn new(index: usize) -> Self {
        Self(index)
    }

    pub(super) const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub const fn is_red(self) -> bool {
        matches!(self, Color::Red)
    }

    pub const fn is_black(self) -> bool {
        matches!(self, Color::Black)
    }
}

// a node "owns" whatever its `left`/`right` point at, `parent` is only a back-link
#[derive(Debug, Clone)]
pub(super) struct Node<K> {
    pub(super) key: K,
    pub(super) color: Color,
    pub(super) parent: Option<NodeId>,
    pub(super) left: Option<NodeId>,
    pub(super) right: Option<NodeId>,
}

impl<K> Node<K> {
    /// Fresh nodes are always red; the tree recolors them afterwards if needed.
    pub(super) const fn new(key: K, parent: Option<NodeId>) -> Self {
        Self {
            key,
            color: Color::Red,
            parent,
            left: None,
            right: None,
        }
    }
}

/// Read-only view of one node, borrowed from its tree.
pub struct NodeRef<'a, K> {
    pub(super) tree: &'a RBTree<K>,
    pub(super) id: NodeId,
}

impl<K> Clone for NodeRef<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for NodeRef<'_, K> {}

impl<'a, K> NodeRef<'a, K> {
    fn raw(&self) -> &'a Node<K> {
        &self.tree.nodes[self.id.index()]
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn key(&self) -> &'a K {
        &self.raw().key
    }

    pub fn color(&self) -> Color {
        self.raw().color
    }

    /// `None` for the root.
    pub fn parent(&self) -> Option<NodeRef<'a, K>> {
        self.raw().parent.map(|id| NodeRef { tree: self.tree, id })
    }

    pub fn left(&self) -> Option<NodeRef<'a, K>> {
        self.raw().left.map(|id| NodeRef { tree: self.tree, id })
    }

    pub fn right(&self) -> Option<NodeRef<'a, K>> {
        self.raw().right.map(|id| NodeRef { tree: self.tree, id })
    }

    /// True when this node has a parent and is that parent's left child.
    pub fn is_left_child(&self) -> bool {
        self.tree.is_left_child(self.id)
    }

    pub fn is_root(&self) -> bool {
        self.raw().parent.is_none()
    }
}

impl<K: fmt::Debug> fmt::Debug for NodeRef<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.raw();
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("key", &node.key)
            .field("color", &node.color)
            .field("parent", &node.parent)
            .field("left", &node.left)
            .field("right", &node.right)
            .finish()
    }
}
