use std::fmt;

use super::NodeId;

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertError {
    /// No key was supplied. The tree is untouched.
    InvalidInput,
    /// An equal key is already stored. The tree is untouched.
    DuplicateKey,
}

impl fmt::Display for InsertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsertError::InvalidInput => f.write_str("this RBTree cannot store absent keys"),
            InsertError::DuplicateKey => f.write_str("this RBTree already contains that key"),
        }
    }
}

impl std::error::Error for InsertError {}

/// Returned by [`RBTree::rotate`](super::RBTree::rotate) when asked to rotate
/// two nodes that are not a direct child/parent pair.
///
/// This is always a bug at the call site, not something to retry.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateError {
    InvalidRelationship { child: NodeId, parent: NodeId },
}

impl fmt::Display for RotateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RotateError::InvalidRelationship { child, parent } => write!(
                f,
                "cannot rotate {child} with {parent}: {parent} is not the parent of {child}"
            ),
        }
    }
}

impl std::error::Error for RotateError {}

/// The first broken property found by [`RBTree::check_invariants`](super::RBTree::check_invariants).
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    RedRoot,
    /// `node` and its parent are both red.
    RedRedEdge { node: NodeId },
    /// The two subtrees of `node` have different black-heights.
    BlackHeightMismatch { node: NodeId, left: usize, right: usize },
    /// `node`'s parent link does not point back at the node that links to it.
    BrokenParentLink { node: NodeId },
    /// `node`'s key is not strictly between the bounds set by its ancestors.
    OutOfOrder { node: NodeId },
    /// The stored count disagrees with the number of reachable nodes.
    SizeMismatch { expected: usize, reachable: usize },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::RedRoot => f.write_str("root is red"),
            InvariantViolation::RedRedEdge { node } => {
                write!(f, "red node {node} has a red parent")
            }
            InvariantViolation::BlackHeightMismatch { node, left, right } => write!(
                f,
                "black-height differs below {node} (left {left}, right {right})"
            ),
            InvariantViolation::BrokenParentLink { node } => {
                write!(f, "parent link of {node} does not match its owner")
            }
            InvariantViolation::OutOfOrder { node } => {
                write!(f, "key of {node} breaks search order")
            }
            InvariantViolation::SizeMismatch { expected, reachable } => write!(
                f,
                "tree claims {expected} nodes but {reachable} are reachable"
            ),
        }
    }
}

impl std::error::Error for InvariantViolation {}
