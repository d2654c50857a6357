use std::collections::VecDeque;
use std::fmt::{self, Display};

use super::{NodeId, NodeRef, RBTree};

/// In-order (ascending) iterator over the keys of an [`RBTree`].
pub struct Iter<'a, K> {
    tree: &'a RBTree<K>,
    // nodes whose left subtree is done but which haven't been yielded yet
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    fn new(tree: &'a RBTree<K>) -> Self {
        let mut iter = Self { tree, stack: Vec::new(), remaining: tree.len() };
        iter.push_left_spine(tree.root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<NodeId>) {
        while let Some(id) = current {
            self.stack.push(id);
            current = self.tree.at(id).left;
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.tree.at(id);
        self.push_left_spine(node.right);
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

/// Breadth-first iterator over the nodes of an [`RBTree`], starting at the root.
pub struct LevelOrder<'a, K> {
    tree: &'a RBTree<K>,
    queue: VecDeque<NodeId>,
}

impl<'a, K> Iterator for LevelOrder<'a, K> {
    type Item = NodeRef<'a, K>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.queue.pop_front()?;
        let node = self.tree.at(id);
        self.queue.extend(node.left);
        self.queue.extend(node.right);
        Some(NodeRef { tree: self.tree, id })
    }
}

impl<K> RBTree<K> {
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self)
    }

    pub fn level_order(&self) -> LevelOrder<'_, K> {
        LevelOrder { tree: self, queue: self.root.into_iter().collect() }
    }
}

impl<'a, K> IntoIterator for &'a RBTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Writes `[ a, b, c ]`, or `[  ]` for no items.
fn bracketed<T: Display>(items: impl Iterator<Item = T>) -> String {
    let mut out = String::from("[ ");
    for (i, item) in items.enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&item.to_string());
    }
    out.push_str(" ]");
    out
}

impl<K: Display> RBTree<K> {
    /// The keys in ascending order, e.g. `[ 1, 2, 3 ]`.
    pub fn to_in_order_string(&self) -> String {
        bracketed(self.iter())
    }

    /// The keys in breadth-first order from the root, e.g. `[ 2, 1, 3 ]`.
    pub fn to_level_order_string(&self) -> String {
        bracketed(self.level_order().map(|node| node.key()))
    }
}

impl<K: Display> Display for RBTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "level order: {}\nin order: {}",
            self.to_level_order_string(),
            self.to_in_order_string()
        )
    }
}

impl<K: fmt::Debug> fmt::Debug for RBTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
