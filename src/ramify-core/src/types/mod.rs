//! Payload types for graph values.
//!
//! Graph algorithms work over any `V: Clone + 'static`. Merge policies also
//! need to recognise null and omission markers, which is what [`Nullable`]
//! provides; [`Slot`] marks the difference between "this graph has no node
//! here" and "this graph has a node whose value is null".

mod slot;
mod value;

pub use slot::{Nullable, Slot};
pub use value::Value;
