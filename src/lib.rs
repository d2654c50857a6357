#![deny(unsafe_op_in_unsafe_fn)]

// not concurrent
pub mod non_concurrent;

// log setup shared by binaries and tests
pub mod logging;

pub use non_concurrent::rbtree::{
    Color, InsertError, InvariantViolation, NodeId, NodeRef, RBTree, RotateError,
};
