//! View in which every key resolves.

use common_error::RamifyResult;

use crate::graph::{Key, Node, NodeRef};

/// View that fills the gaps of a graph with a default value.
///
/// Keys missing from the wrapped graph still resolve, to virtual nodes with
/// the default value whose own children are virtual too. Only the wrapped
/// graph's keys are enumerated.
pub struct DefaultNode<V> {
    inner: Option<NodeRef<V>>,
    default: V,
}

impl<V: Clone + 'static> DefaultNode<V> {
    /// Wrap `inner`, reporting `default` wherever it has no node.
    pub fn new(inner: Option<NodeRef<V>>, default: V) -> Self {
        Self { inner, default }
    }
}

impl<V: Clone + 'static> Node<V> for DefaultNode<V> {
    fn value(&self) -> V {
        self.inner
            .as_ref()
            .map_or_else(|| self.default.clone(), NodeRef::value)
    }

    fn keys(&self) -> RamifyResult<Vec<Key>> {
        self.inner
            .as_ref()
            .map_or_else(|| Ok(Vec::new()), NodeRef::keys)
    }

    fn child(&self, key: &str) -> Option<NodeRef<V>> {
        let inner = self.inner.as_ref().and_then(|n| n.child(key));
        Some(NodeRef::new(Self::new(inner, self.default.clone())))
    }

    fn kind(&self) -> &'static str {
        "default"
    }
}

/// Wrap a graph so that every path resolves.
pub fn with_default<V: Clone + 'static>(node: &NodeRef<V>, default: V) -> NodeRef<V> {
    NodeRef::new(DefaultNode::new(Some(node.clone()), default))
}
