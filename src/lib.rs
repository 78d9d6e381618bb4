//! Ramify - directed, edge-labeled graphs with structural algorithms
//!
//! Ramify treats any tree-like data with possible sharing and cycles as a
//! graph behind one interface, and provides equality, cycle-safe copy,
//! traversal and multi-graph zip/merge over it.

#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

// Re-export core crates
pub use common_config as config;
pub use common_display as display;
pub use common_error as error;
pub use ramify_core as core;

pub use common_error::{RamifyError, RamifyResult};
pub use ramify_core::{Node, NodeRef, PlainNode, Value};

/// Ramify version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
