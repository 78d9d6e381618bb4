//! Path-identity view.

use common_error::RamifyResult;

use crate::graph::{Key, Node, NodeRef, Path};

/// View with the structure of `inner` whose values are the paths from the
/// view's root.
pub struct PathNode<V> {
    inner: NodeRef<V>,
    path: Path,
}

impl<V: 'static> Node<Path> for PathNode<V> {
    fn value(&self) -> Path {
        self.path.clone()
    }

    fn keys(&self) -> RamifyResult<Vec<Key>> {
        self.inner.keys()
    }

    fn child(&self, key: &str) -> Option<NodeRef<Path>> {
        let inner = self.inner.child(key)?;
        let mut path = self.path.clone();
        path.push(key.to_string());
        Some(NodeRef::new(Self { inner, path }))
    }

    fn kind(&self) -> &'static str {
        "path"
    }
}

/// Lazily replace every value of a graph with its path.
pub fn path_graph<V: 'static>(node: &NodeRef<V>) -> NodeRef<Path> {
    NodeRef::new(PathNode {
        inner: node.clone(),
        path: Path::new(),
    })
}
