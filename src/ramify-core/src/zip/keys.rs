//! Key selection for zipped graphs.

use std::collections::HashSet;

use common_config::KeyPolicy;
use common_error::{RamifyError, RamifyResult};

use crate::graph::{Key, NodeRef};

/// Chooses the edges of a zipped node from the nodes being zipped.
///
/// `nodes` holds one entry per input graph, `None` where that graph has no
/// node at the current position.
pub trait SelectKeys<V> {
    /// Keys of the zipped node, in order and without duplicates.
    fn select(&self, nodes: &[Option<NodeRef<V>>]) -> RamifyResult<Vec<Key>>;
}

impl<V> SelectKeys<V> for KeyPolicy {
    fn select(&self, nodes: &[Option<NodeRef<V>>]) -> RamifyResult<Vec<Key>> {
        match self {
            Self::Union => union(nodes),
            Self::Intersection => {
                let mut keys = union(nodes)?;
                keys.retain(|key| nodes.iter().flatten().all(|n| n.child(key).is_some()));
                Ok(keys)
            }
            Self::First => own_keys(nodes.first()),
            Self::Last => own_keys(nodes.last()),
            Self::Strict => {
                let keys = union(nodes)?;
                for key in &keys {
                    let everywhere = nodes
                        .iter()
                        .all(|n| n.as_ref().is_some_and(|n| n.child(key).is_some()));
                    if !everywhere {
                        log::debug!("strict key policy: '{key}' is missing from some input");
                        return Err(RamifyError::structure_mismatch(key.clone()));
                    }
                }
                Ok(keys)
            }
        }
    }
}

fn union<V>(nodes: &[Option<NodeRef<V>>]) -> RamifyResult<Vec<Key>> {
    let mut seen = HashSet::new();
    let mut keys = Vec::new();
    for node in nodes.iter().flatten() {
        for key in node.keys()? {
            if seen.insert(key.clone()) {
                keys.push(key);
            }
        }
    }
    Ok(keys)
}

fn own_keys<V>(node: Option<&Option<NodeRef<V>>>) -> RamifyResult<Vec<Key>> {
    match node {
        Some(Some(node)) => node.keys(),
        _ => Ok(Vec::new()),
    }
}

/// Key selection from a closure.
pub struct KeyFn<F>(pub F);

impl<V, F> SelectKeys<V> for KeyFn<F>
where
    F: Fn(&[Option<NodeRef<V>>]) -> RamifyResult<Vec<Key>>,
{
    fn select(&self, nodes: &[Option<NodeRef<V>>]) -> RamifyResult<Vec<Key>> {
        (self.0)(nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{branch, leaf};

    fn inputs() -> Vec<Option<NodeRef<i64>>> {
        vec![
            Some(branch(0, vec![("a", leaf(1)), ("b", leaf(2))])),
            None,
            Some(branch(0, vec![("c", leaf(3)), ("a", leaf(4))])),
        ]
    }

    fn select(policy: KeyPolicy, nodes: &[Option<NodeRef<i64>>]) -> RamifyResult<Vec<Key>> {
        policy.select(nodes)
    }

    #[test]
    fn test_union_is_first_seen() {
        let keys = select(KeyPolicy::Union, &inputs()).unwrap();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_intersection_skips_absent_inputs() {
        let keys = select(KeyPolicy::Intersection, &inputs()).unwrap();
        assert_eq!(keys, vec!["a"]);
        let none = select(KeyPolicy::Intersection, &[None, None]).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_first_and_last() {
        let nodes = inputs();
        assert_eq!(select(KeyPolicy::First, &nodes).unwrap(), vec!["a", "b"]);
        assert_eq!(select(KeyPolicy::Last, &nodes).unwrap(), vec!["c", "a"]);
        assert!(select(KeyPolicy::First, &nodes[1..]).unwrap().is_empty());
        assert!(select(KeyPolicy::Last, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_strict_names_first_mismatch() {
        let nodes = vec![
            Some(branch(0, vec![("a", leaf(1)), ("b", leaf(2))])),
            Some(branch(0, vec![("a", leaf(1)), ("c", leaf(3))])),
        ];
        let err = select(KeyPolicy::Strict, &nodes).unwrap_err();
        assert_eq!(err.to_string(), "StructureMismatch: b");

        let same = vec![
            Some(branch(0, vec![("a", leaf(1))])),
            Some(branch(0, vec![("a", leaf(2))])),
        ];
        assert_eq!(select(KeyPolicy::Strict, &same).unwrap(), vec!["a"]);
    }

    #[test]
    fn test_key_fn() {
        let sorted = KeyFn(|nodes: &[Option<NodeRef<i64>>]| -> RamifyResult<Vec<Key>> {
            let mut keys = KeyPolicy::Union.select(nodes)?;
            keys.sort();
            Ok(keys)
        });
        assert_eq!(sorted.select(&inputs()).unwrap(), vec!["a", "b", "c"]);
    }
}
