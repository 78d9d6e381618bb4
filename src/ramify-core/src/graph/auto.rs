//! Nodes that create their children on first access.

use std::rc::Rc;

use common_error::RamifyResult;

use super::{Edge, Key, Node, NodeRef, PlainNode};

/// Mutable node whose missing children are created on demand.
///
/// **Reading has a side effect.** Resolving a key that has no edge yet calls
/// the factory for a fresh value, attaches a new `AutoNode` under that key
/// and returns it. Every key therefore resolves, and a lookup made only to
/// test membership leaves the created child behind. Use [`AutoNode::peek`]
/// to look without creating.
///
/// Created children share the factory, so whole paths can be built with
/// plain path resolution followed by `set_value`.
pub struct AutoNode<V> {
    inner: PlainNode<V>,
    factory: Rc<dyn Fn() -> V>,
}

impl<V: Clone + 'static> AutoNode<V> {
    /// Create a node whose missing children get values from `factory`.
    pub fn new(value: V, factory: impl Fn() -> V + 'static) -> Self {
        Self {
            inner: PlainNode::new(value),
            factory: Rc::new(factory),
        }
    }

    /// Create a root node whose own value also comes from `factory`.
    pub fn from_factory(factory: impl Fn() -> V + 'static) -> Self {
        let value = factory();
        Self::new(value, factory)
    }

    fn sibling(&self, value: V) -> Self {
        Self {
            inner: PlainNode::new(value),
            factory: Rc::clone(&self.factory),
        }
    }

    /// Resolve an existing edge without creating one.
    pub fn peek(&self, key: &str) -> Option<NodeRef<V>> {
        self.inner.child(key)
    }

    /// Move this node into a shared handle.
    pub fn into_ref(self) -> NodeRef<V> {
        NodeRef::new(self)
    }
}

impl<V: Clone + 'static> Node<V> for AutoNode<V> {
    fn value(&self) -> V {
        self.inner.value()
    }

    fn keys(&self) -> RamifyResult<Vec<Key>> {
        self.inner.keys()
    }

    fn child(&self, key: &str) -> Option<NodeRef<V>> {
        if let Some(child) = self.inner.child(key) {
            return Some(child);
        }
        log::trace!("auto-creating child '{key}'");
        let child = self.sibling((self.factory)()).into_ref();
        self.inner.set_edge(key, child.clone());
        Some(child)
    }

    fn clone_with(&self, edges: Vec<Edge<V>>) -> RamifyResult<NodeRef<V>> {
        let node = self.sibling(self.value());
        for (key, child) in edges {
            node.inner.add_edge(key, child)?;
        }
        Ok(node.into_ref())
    }

    fn as_plain(&self) -> Option<&PlainNode<V>> {
        Some(&self.inner)
    }

    fn kind(&self) -> &'static str {
        "auto"
    }
}
