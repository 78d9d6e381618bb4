//! Node interface and shared node handles.

use std::fmt;
use std::rc::Rc;

use common_error::{RamifyError, RamifyResult};

use super::PlainNode;

/// Edge label.
pub type Key = String;

/// Sequence of keys resolved left to right from a starting node.
pub type Path = Vec<Key>;

/// A labeled edge to a child node.
pub type Edge<V> = (Key, NodeRef<V>);

/// Capability interface of a graph representation.
///
/// Implementors provide the primitives; every derived operation (edge
/// enumeration, path resolution, equality, copy) lives on [`NodeRef`] and
/// works for any representation.
///
/// `keys` need not be exhaustive: a node may resolve children for keys it
/// never enumerates. Every key it does enumerate must resolve through
/// `child`, and no key may be enumerated twice.
pub trait Node<V> {
    /// Current payload of this node.
    fn value(&self) -> V;

    /// Declared outgoing edge labels, in representation order.
    fn keys(&self) -> RamifyResult<Vec<Key>>;

    /// Resolve one outgoing edge.
    fn child(&self, key: &str) -> Option<NodeRef<V>>;

    /// Build a node of the same kind with this node's own data and a new
    /// edge set.
    ///
    /// Representations that cannot rebuild themselves keep the default,
    /// which fails with `Unsupported`.
    fn clone_with(&self, _edges: Vec<Edge<V>>) -> RamifyResult<NodeRef<V>> {
        common_error::unsupported!("clone_with is not available on {}", self.kind())
    }

    /// The mutable representation behind this node, if it has one.
    fn as_plain(&self) -> Option<&PlainNode<V>> {
        None
    }

    /// Short name of the representation, used in error messages and debug output.
    fn kind(&self) -> &'static str {
        "node"
    }
}

/// Stable identity of a node, independent of its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Raw address backing this identity.
    pub const fn as_usize(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Shared handle to a node of any representation.
///
/// Cloning a `NodeRef` shares the node; two handles are the same node when
/// their [`NodeId`]s match.
pub struct NodeRef<V>(Rc<dyn Node<V>>);

impl<V> Clone for NodeRef<V> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<V> fmt::Debug for NodeRef<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeRef")
            .field(&self.0.kind())
            .field(&format_args!("{}", self.id()))
            .finish()
    }
}

impl<V, N: Node<V> + 'static> From<Rc<N>> for NodeRef<V> {
    fn from(node: Rc<N>) -> Self {
        Self(node)
    }
}

impl<V> NodeRef<V> {
    /// Wrap a representation in a new shared handle.
    pub fn new<N: Node<V> + 'static>(node: N) -> Self {
        Self(Rc::new(node))
    }

    /// Identity of the underlying node.
    pub fn id(&self) -> NodeId {
        NodeId(Rc::as_ptr(&self.0).cast::<()>() as usize)
    }

    /// Check whether both handles point at the same node.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }

    /// Current payload.
    pub fn value(&self) -> V {
        self.0.value()
    }

    /// Declared outgoing edge labels.
    pub fn keys(&self) -> RamifyResult<Vec<Key>> {
        self.0.keys()
    }

    /// Resolve one edge, `None` if the key is unresolvable.
    pub fn child(&self, key: &str) -> Option<Self> {
        self.0.child(key)
    }

    /// Representation name.
    pub fn kind(&self) -> &'static str {
        self.0.kind()
    }

    /// Declared edges as `(key, child)` pairs.
    ///
    /// Fails with `NotFound` if a declared key does not resolve.
    pub fn edges(&self) -> RamifyResult<Vec<Edge<V>>> {
        self.keys()?
            .into_iter()
            .map(|key| {
                let child = self.get_child(&key)?;
                Ok((key, child))
            })
            .collect()
    }

    /// Children of the declared edges, in key order.
    pub fn children(&self) -> RamifyResult<Vec<Self>> {
        Ok(self.edges()?.into_iter().map(|(_, child)| child).collect())
    }

    /// Resolve one edge, failing with `NotFound` if it does not exist.
    pub fn get_child(&self, key: &str) -> RamifyResult<Self> {
        self.child(key)
            .ok_or_else(|| RamifyError::not_found([key]))
    }

    /// Resolve one edge, falling back to `default`.
    pub fn get_child_or(&self, key: &str, default: Self) -> Self {
        self.child(key).unwrap_or(default)
    }

    /// Resolve a path; the empty path resolves to this node.
    ///
    /// A miss reports every key consumed up to and including the one that
    /// failed.
    pub fn get_path<I, S>(&self, path: I) -> RamifyResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut consumed: Vec<String> = Vec::new();
        let mut node = self.clone();
        for key in path {
            let key = key.as_ref();
            consumed.push(key.to_string());
            node = match node.child(key) {
                Some(child) => child,
                None => return Err(RamifyError::NotFound { path: consumed }),
            };
        }
        Ok(node)
    }

    /// Resolve a path, falling back to `default` on any miss.
    pub fn get_path_or<I, S>(&self, path: I, default: Self) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.get_path(path).unwrap_or(default)
    }

    /// Check whether a path resolves from this node.
    pub fn contains<I, S>(&self, path: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.get_path(path).is_ok()
    }

    /// Same-kind node with a new edge set; see [`Node::clone_with`].
    pub fn clone_with(&self, edges: Vec<Edge<V>>) -> RamifyResult<Self> {
        self.0.clone_with(edges)
    }

    /// The mutable representation behind this node, if any.
    pub fn as_plain(&self) -> Option<&PlainNode<V>> {
        self.0.as_plain()
    }

    /// The mutable representation behind this node.
    ///
    /// Fails with `Unsupported` for views and computed nodes.
    pub fn plain(&self) -> RamifyResult<&PlainNode<V>> {
        self.as_plain().ok_or_else(|| {
            RamifyError::unsupported(format!("{} nodes cannot be mutated", self.kind()))
        })
    }
}
