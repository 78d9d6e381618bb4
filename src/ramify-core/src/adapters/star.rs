//! Wildcard-edge view.

use common_error::RamifyResult;

use crate::graph::{Key, Node, NodeRef};

/// Edge label that matches any key a node does not have.
pub const STAR_KEY: &str = "*";

/// View that follows the `*` edge for keys the wrapped node lacks.
pub struct StarNode<V> {
    inner: NodeRef<V>,
}

impl<V: 'static> StarNode<V> {
    /// Wrap `inner`.
    pub const fn new(inner: NodeRef<V>) -> Self {
        Self { inner }
    }
}

impl<V: 'static> Node<V> for StarNode<V> {
    fn value(&self) -> V {
        self.inner.value()
    }

    fn keys(&self) -> RamifyResult<Vec<Key>> {
        self.inner.keys()
    }

    fn child(&self, key: &str) -> Option<NodeRef<V>> {
        let child = self
            .inner
            .child(key)
            .or_else(|| self.inner.child(STAR_KEY))?;
        Some(NodeRef::new(Self::new(child)))
    }

    fn kind(&self) -> &'static str {
        "star"
    }
}

/// Wrap a graph so that `*` edges match every missing key.
pub fn with_star<V: 'static>(node: &NodeRef<V>) -> NodeRef<V> {
    NodeRef::new(StarNode::new(node.clone()))
}
