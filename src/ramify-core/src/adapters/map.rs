//! Value-mapping view.

use std::rc::Rc;

use common_error::RamifyResult;

use crate::graph::{Key, Node, NodeRef};

/// View with the structure of `inner` and every value passed through a function.
pub struct MapNode<V, W> {
    inner: NodeRef<V>,
    f: Rc<dyn Fn(V) -> W>,
}

impl<V: 'static, W: 'static> MapNode<V, W> {
    /// Wrap `inner`, mapping values with `f`.
    pub fn new(inner: NodeRef<V>, f: Rc<dyn Fn(V) -> W>) -> Self {
        Self { inner, f }
    }
}

impl<V: 'static, W: 'static> Node<W> for MapNode<V, W> {
    fn value(&self) -> W {
        (self.f)(self.inner.value())
    }

    fn keys(&self) -> RamifyResult<Vec<Key>> {
        self.inner.keys()
    }

    fn child(&self, key: &str) -> Option<NodeRef<W>> {
        let child = self.inner.child(key)?;
        Some(NodeRef::new(Self::new(child, Rc::clone(&self.f))))
    }

    fn kind(&self) -> &'static str {
        "map"
    }
}

/// Lazily map every value of a graph.
pub fn imap<V, W, F>(node: &NodeRef<V>, f: F) -> NodeRef<W>
where
    V: 'static,
    W: 'static,
    F: Fn(V) -> W + 'static,
{
    NodeRef::new(MapNode::new(node.clone(), Rc::new(f)))
}
