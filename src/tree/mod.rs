//! Ordered multiway tree
//!
//! A generic first-child / next-sibling tree stored in an index arena. Nodes are
//! addressed by [`NodeId`] and never move, so navigation handles stay valid for
//! the whole life of the tree.

mod arena;
mod preorder;

pub use arena::{Children, NodeId, OrderedTree};
pub use preorder::Preorder;
