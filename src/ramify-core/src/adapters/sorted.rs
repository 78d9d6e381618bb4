//! Sorted-key view.

use common_error::RamifyResult;

use crate::graph::{Key, Node, NodeRef};

/// View whose keys are always enumerated in sorted order.
pub struct SortedNode<V> {
    inner: NodeRef<V>,
}

impl<V: 'static> Node<V> for SortedNode<V> {
    fn value(&self) -> V {
        self.inner.value()
    }

    fn keys(&self) -> RamifyResult<Vec<Key>> {
        let mut keys = self.inner.keys()?;
        keys.sort();
        Ok(keys)
    }

    fn child(&self, key: &str) -> Option<NodeRef<V>> {
        let inner = self.inner.child(key)?;
        Some(NodeRef::new(Self { inner }))
    }

    fn kind(&self) -> &'static str {
        "sorted"
    }
}

/// Wrap a graph so that keys enumerate in sorted order at every level.
pub fn sorted<V: 'static>(node: &NodeRef<V>) -> NodeRef<V> {
    NodeRef::new(SortedNode {
        inner: node.clone(),
    })
}
