//! Display and visualization utilities for ramify.
//!
//! Provides a box-drawing renderer for edge-labeled graphs that stops at
//! re-visited ancestors instead of looping.

mod tree;

pub use tree::{DisplayTree, TreeNode};
