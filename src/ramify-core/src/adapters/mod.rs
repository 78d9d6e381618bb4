//! Lazy views over existing graphs.
//!
//! Adapters implement [`Node`](crate::graph::Node) by wrapping another node
//! and computing values and children on demand. They hold no state of their
//! own, so every child lookup builds a fresh view: use
//! [`plain_copy`](crate::graph::plain_copy) to turn a view into a graph with
//! stable node identities.

mod applied;
mod default;
mod map;
mod object;
mod path;
mod sorted;
mod star;

pub use applied::{AppliedNode, Transform, apply, transform};
pub use default::{DefaultNode, with_default};
pub use map::{MapNode, imap};
pub use object::ObjectNode;
pub use path::{PathNode, path_graph};
pub use sorted::{SortedNode, sorted};
pub use star::{STAR_KEY, StarNode, with_star};
