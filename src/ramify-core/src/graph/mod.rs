//! Graph model.
//!
//! This module provides the node primitives every algorithm works through:
//! - `Node` for the capability interface of a representation
//! - `NodeRef` for shared, identity-carrying handles with derived operations
//! - `PlainNode` for the owned, mutable representation
//! - `AutoNode` for nodes that create children on first access
//! - structural equality and the cycle-safe subgraph/copy algorithm

mod auto;
mod equality;
mod node;
mod plain;
mod subgraph;

pub use auto::AutoNode;
pub use node::{Edge, Key, Node, NodeId, NodeRef, Path};
pub use plain::PlainNode;
pub use subgraph::{Selector, materialize, plain_copy};
