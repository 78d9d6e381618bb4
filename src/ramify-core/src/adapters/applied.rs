//! Applying a graph of functions to a graph of values.

use std::rc::Rc;

use common_error::RamifyResult;

use crate::graph::{Key, Node, NodeRef};

/// Optional value transformation stored in a function graph.
pub type Transform<V> = Option<Rc<dyn Fn(V) -> V>>;

/// Wrap a closure as a [`Transform`].
pub fn transform<V>(f: impl Fn(V) -> V + 'static) -> Transform<V> {
    Some(Rc::new(f))
}

/// View of `source` with each value passed through the function at the
/// same path of a function graph.
///
/// Nodes whose function is `None` keep their value. Where the function
/// graph has no node, the source node itself is returned.
pub struct AppliedNode<V> {
    source: NodeRef<V>,
    fns: NodeRef<Transform<V>>,
}

impl<V: 'static> AppliedNode<V> {
    /// Apply `fns` to `source`.
    pub const fn new(source: NodeRef<V>, fns: NodeRef<Transform<V>>) -> Self {
        Self { source, fns }
    }
}

impl<V: 'static> Node<V> for AppliedNode<V> {
    fn value(&self) -> V {
        let value = self.source.value();
        match self.fns.value() {
            Some(f) => f(value),
            None => value,
        }
    }

    fn keys(&self) -> RamifyResult<Vec<Key>> {
        self.source.keys()
    }

    fn child(&self, key: &str) -> Option<NodeRef<V>> {
        let source = self.source.child(key)?;
        match self.fns.child(key) {
            Some(fns) => Some(NodeRef::new(Self::new(source, fns))),
            None => Some(source),
        }
    }

    fn kind(&self) -> &'static str {
        "applied"
    }
}

/// Apply a graph of functions to the values of `source`.
pub fn apply<V: 'static>(source: &NodeRef<V>, fns: &NodeRef<Transform<V>>) -> NodeRef<V> {
    NodeRef::new(AppliedNode::new(source.clone(), fns.clone()))
}
