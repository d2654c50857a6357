//! An ordered set kept balanced with the red-black discipline.
//!
//! Nodes live in an arena and refer to each other by [`NodeId`]. Child links
//! express ownership (every node is reachable from the root through exactly
//! one of them), the parent link is a plain back-reference used while walking
//! upwards during rebalancing.

use std::borrow::Borrow;
use std::cmp::Ordering;

use log::debug;

mod error;
mod fixup;
mod node;
mod rotate;
mod traversal;
mod validate;

pub use error::{InsertError, InvariantViolation, RotateError};
pub use node::{Color, NodeId, NodeRef};
pub use traversal::{Iter, LevelOrder};

use node::Node;

// PROVE: any node with height `h` has black height at least `h/2`
// PROVE: the subtree located at any node `x` contains at least `2^bh(x) - 1` nodes (use induction)
// LEMMA: An RBTree with `n` internal nodes has height at most `2*log₂(n+1)`

pub struct RBTree<K> {
    nodes: Vec<Node<K>>,
    root: Option<NodeId>,
}

impl<K> RBTree<K> {
    pub const fn new() -> Self {
        Self { nodes: Vec::new(), root: None }
    }

    /// The amount of keys in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn root(&self) -> Option<NodeRef<'_, K>> {
        self.root.map(|id| NodeRef { tree: self, id })
    }

    /// Looks up a node by id. Returns `None` for ids this tree never handed out.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, K>> {
        self.contains_id(id).then_some(NodeRef { tree: self, id })
    }

    /// Number of nodes on the longest path from the root down to a leaf.
    ///
    /// Bounded by `2*log₂(len+1)` as long as the red-black properties hold.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = Vec::from_iter(self.root.map(|id| (id, 1)));
        while let Some((id, depth)) = stack.pop() {
            height = height.max(depth);
            let node = self.at(id);
            stack.extend(node.left.map(|l| (l, depth + 1)));
            stack.extend(node.right.map(|r| (r, depth + 1)));
        }
        height
    }

    fn contains_id(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    fn at(&self, id: NodeId) -> &Node<K> {
        &self.nodes[id.index()]
    }

    fn at_mut(&mut self, id: NodeId) -> &mut Node<K> {
        &mut self.nodes[id.index()]
    }

    fn is_left_child(&self, id: NodeId) -> bool {
        self.at(id)
            .parent
            .is_some_and(|parent| self.at(parent).left == Some(id))
    }

    fn blacken_root(&mut self) {
        if let Some(root) = self.root {
            self.at_mut(root).color = Color::Black;
        }
    }
}

impl<K: Ord> RBTree<K> {
    /// Inserts `key`, rebalancing the tree afterwards.
    ///
    /// Fails with [`InsertError::DuplicateKey`] if an equal key is already
    /// present, in which case the tree is left exactly as it was.
    pub fn insert(&mut self, key: K) -> Result<(), InsertError> {
        self.insert_opt(Some(key))
    }

    /// Like [`insert`](Self::insert), but accepts a possibly absent key.
    /// `None` is rejected with [`InsertError::InvalidInput`].
    pub fn insert_opt(&mut self, key: Option<K>) -> Result<(), InsertError> {
        let Some(key) = key else {
            debug!("Rejected insertion of an absent key");
            return Err(InsertError::InvalidInput);
        };

        let Some(mut current) = self.root else {
            let id = NodeId::new(self.nodes.len());
            self.nodes.push(Node::new(key, None));
            self.root = Some(id);
            self.blacken_root();
            return Ok(());
        };

        // walk down to the empty slot the key belongs in
        let goes_left = loop {
            let node = self.at(current);
            let next = match key.cmp(&node.key) {
                Ordering::Less => node.left.ok_or(true),
                Ordering::Greater => node.right.ok_or(false),
                Ordering::Equal => {
                    debug!("Rejected duplicate key (already stored at {current})");
                    return Err(InsertError::DuplicateKey);
                }
            };
            match next {
                Ok(child) => current = child,
                Err(goes_left) => break goes_left,
            }
        };

        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node::new(key, Some(current)));
        let parent = self.at_mut(current);
        if goes_left {
            parent.left = Some(id);
        } else {
            parent.right = Some(id);
        }

        self.fix_after_insert(id);
        self.blacken_root();
        Ok(())
    }

    /// Finds the node holding a key equal to `key`.
    pub fn find<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.at(id);
            current = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).is_some()
    }
}

impl<K> Default for RBTree<K> {
    fn default() -> Self {
        Self::new()
    }
}
