//! Structural equality.
//!
//! Both comparisons recurse through the graph without tracking visited
//! nodes, so comparing a cyclic graph does not terminate. Equality of two
//! cyclic structures is deliberately left undefined.

use std::collections::HashSet;

use common_error::RamifyResult;

use super::NodeRef;

impl<V: PartialEq> NodeRef<V> {
    /// Ordered structural equality.
    ///
    /// Values must be equal, and the edge sequences must have the same
    /// length with equal keys and ordered-equal children at each position.
    pub fn ordered_eq(&self, other: &Self) -> RamifyResult<bool> {
        if self.value() != other.value() {
            return Ok(false);
        }
        let (ours, theirs) = (self.edges()?, other.edges()?);
        if ours.len() != theirs.len() {
            return Ok(false);
        }
        for ((key_a, a), (key_b, b)) in ours.iter().zip(&theirs) {
            if key_a != key_b || !a.ordered_eq(b)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Unordered structural equality.
    ///
    /// Values must be equal, both nodes must declare the same key set, and
    /// the children under every key must be unordered-equal.
    pub fn unordered_eq(&self, other: &Self) -> RamifyResult<bool> {
        if self.value() != other.value() {
            return Ok(false);
        }
        let ours = self.keys()?;
        let theirs = other.keys()?;
        if ours.len() != theirs.len() {
            return Ok(false);
        }
        let their_set: HashSet<&str> = theirs.iter().map(String::as_str).collect();
        if !ours.iter().all(|key| their_set.contains(key.as_str())) {
            return Ok(false);
        }
        for key in &ours {
            if !self.get_child(key)?.unordered_eq(&other.get_child(key)?)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
