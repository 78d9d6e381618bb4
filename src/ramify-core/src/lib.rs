//! Core graph model and algorithms for ramify.
//!
//! This crate provides directed, edge-labeled graphs behind one interface
//! and the structural algorithms over them:
//! - `Node`/`NodeRef` for the interface and its derived operations
//! - `PlainNode` and `AutoNode` for stored, mutable graphs
//! - structural equality and cycle-safe subgraph/copy
//! - a depth-first `walker`
//! - the `zip` engine for zipping, merging and overlaying graphs
//! - `adapters` for lazy views and `convert` for other encodings

pub mod adapters;
pub mod convert;
mod display;
pub mod graph;
pub mod types;
pub mod walker;
pub mod zip;

#[cfg(test)]
mod proptest_utils;
#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use graph::{
    AutoNode, Edge, Key, Node, NodeId, NodeRef, Path, PlainNode, Selector, materialize, plain_copy,
};
pub use types::{Nullable, Slot, Value};
pub use walker::{ChildResults, Visitor, bottom_up, top_down, walk};
pub use zip::{Join, SelectKeys, izip, merge, overlay, unzip, zip};
