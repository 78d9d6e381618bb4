//! Zip/merge engine.
//!
//! Zipping aligns N graphs node by node: each zipped node carries the N
//! corresponding values, and a key policy decides which edges it has.
//! Merging reduces those N values to one with a [`Join`].

mod keys;
mod merge;
mod zipped;

pub use keys::{KeyFn, SelectKeys};
pub use merge::{Join, imerge, merge, overlay, overlay_with};
pub use zipped::{ZippedNode, izip, izip_slots, unzip, zip, zip_with};
