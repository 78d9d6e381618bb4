//! Owned, mutable node representation.

use std::cell::RefCell;

use common_error::{RamifyError, RamifyResult};

use super::{Edge, Key, Node, NodeRef};

/// Materialized node: a value slot plus insertion-ordered, uniquely keyed edges.
///
/// Mutation goes through `&self` so that nodes stay mutable while shared by
/// several parents. Callers must not mutate a node while an algorithm is
/// traversing it.
///
/// Edges hold strong references, so a cycle of `PlainNode`s keeps itself
/// alive until one of its edges is popped.
pub struct PlainNode<V> {
    value: RefCell<V>,
    edges: RefCell<Vec<Edge<V>>>,
}

impl<V> PlainNode<V> {
    /// Create a node with no edges.
    pub fn new(value: V) -> Self {
        Self {
            value: RefCell::new(value),
            edges: RefCell::new(Vec::new()),
        }
    }

    /// Create a node with the given edges.
    ///
    /// Fails with `DuplicateKey` if a key repeats.
    pub fn with_edges<K: Into<Key>>(
        value: V,
        edges: impl IntoIterator<Item = (K, NodeRef<V>)>,
    ) -> RamifyResult<Self> {
        let node = Self::new(value);
        for (key, child) in edges {
            node.add_edge(key, child)?;
        }
        Ok(node)
    }

    /// Replace the value, returning the previous one.
    pub fn set_value(&self, value: V) -> V {
        self.value.replace(value)
    }

    /// Add a new edge.
    ///
    /// Fails with `DuplicateKey` if the key is already used.
    pub fn add_edge(&self, key: impl Into<Key>, child: NodeRef<V>) -> RamifyResult<()> {
        let key = key.into();
        if self.contains_key(&key) {
            return Err(RamifyError::duplicate_key(key));
        }
        self.edges.borrow_mut().push((key, child));
        Ok(())
    }

    /// Insert or overwrite an edge, returning the child it replaced.
    ///
    /// An overwritten edge keeps its position.
    pub fn set_edge(&self, key: impl Into<Key>, child: NodeRef<V>) -> Option<NodeRef<V>> {
        let key = key.into();
        let mut edges = self.edges.borrow_mut();
        match edges.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, child)),
            None => {
                edges.push((key, child));
                None
            }
        }
    }

    /// Remove an edge and return its child.
    ///
    /// Fails with `NotFound` if the key is absent.
    pub fn pop_edge(&self, key: &str) -> RamifyResult<NodeRef<V>> {
        let mut edges = self.edges.borrow_mut();
        let index = edges
            .iter()
            .position(|(k, _)| k == key)
            .ok_or_else(|| RamifyError::not_found([key]))?;
        Ok(edges.remove(index).1)
    }

    /// Remove an edge, returning `default` if the key is absent.
    pub fn pop_edge_or(&self, key: &str, default: NodeRef<V>) -> NodeRef<V> {
        self.pop_edge(key).unwrap_or(default)
    }

    /// Check whether an edge with this key exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.edges.borrow().iter().any(|(k, _)| k == key)
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.borrow().len()
    }

    /// Check whether the node has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.borrow().is_empty()
    }
}

impl<V: Clone + 'static> PlainNode<V> {
    /// Move this node into a shared handle.
    pub fn into_ref(self) -> NodeRef<V> {
        NodeRef::new(self)
    }
}

impl<V: Clone + 'static> Node<V> for PlainNode<V> {
    fn value(&self) -> V {
        self.value.borrow().clone()
    }

    fn keys(&self) -> RamifyResult<Vec<Key>> {
        Ok(self.edges.borrow().iter().map(|(k, _)| k.clone()).collect())
    }

    fn child(&self, key: &str) -> Option<NodeRef<V>> {
        self.edges
            .borrow()
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, child)| child.clone())
    }

    fn clone_with(&self, edges: Vec<Edge<V>>) -> RamifyResult<NodeRef<V>> {
        Ok(Self::with_edges(self.value(), edges)?.into_ref())
    }

    fn as_plain(&self) -> Option<&PlainNode<V>> {
        Some(self)
    }

    fn kind(&self) -> &'static str {
        "plain"
    }
}

impl<V> NodeRef<V> {
    /// Replace the value of a mutable node, returning the previous one.
    pub fn set_value(&self, value: V) -> RamifyResult<V> {
        Ok(self.plain()?.set_value(value))
    }

    /// Add a new edge to a mutable node; see [`PlainNode::add_edge`].
    pub fn add_edge(&self, key: impl Into<Key>, child: Self) -> RamifyResult<()> {
        self.plain()?.add_edge(key, child)
    }

    /// Insert or overwrite an edge of a mutable node.
    pub fn set_edge(&self, key: impl Into<Key>, child: Self) -> RamifyResult<Option<Self>> {
        Ok(self.plain()?.set_edge(key, child))
    }

    /// Remove an edge of a mutable node; see [`PlainNode::pop_edge`].
    pub fn pop_edge(&self, key: &str) -> RamifyResult<Self> {
        self.plain()?.pop_edge(key)
    }

    /// Remove an edge of a mutable node, returning `default` if absent.
    pub fn pop_edge_or(&self, key: &str, default: Self) -> RamifyResult<Self> {
        Ok(self.plain()?.pop_edge_or(key, default))
    }

    /// Set the edge at the end of `path`.
    ///
    /// Walks to the parent of the last key without creating anything on the
    /// way. Fails with `EmptyPath` for the empty path, `NotFound` if the
    /// parent does not resolve, and `Unsupported` if the parent is not mutable.
    pub fn set_path<S: AsRef<str>>(&self, path: &[S], child: Self) -> RamifyResult<Option<Self>> {
        let Some((last, parents)) = path.split_last() else {
            return Err(RamifyError::empty_path("cannot set the value of an empty path"));
        };
        let parent = self.get_path(parents)?;
        parent.set_edge(last.as_ref(), child)
    }
}
