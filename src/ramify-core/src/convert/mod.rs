//! Conversions between graphs and other shapes.
//!
//! - mapping literals (`serde_json::Value` objects with a reserved `_self` key)
//! - flat path-to-value listings
//! - eager whole-graph transforms

mod dict;
mod flat;
mod transform;

pub use dict::{SELF_KEY, from_json, to_json};
pub use flat::{FlatKey, from_flat, to_flat};
pub use transform::{fill_nones, make_path_graph, map, pick, replace};
