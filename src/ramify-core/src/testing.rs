//! Testing utilities and fixtures for ramify-core.
//!
//! Small builders for common graph shapes, plus an infinite graph for
//! exercising lazy algorithms.

use common_error::RamifyResult;

use crate::graph::{Key, Node, NodeRef, PlainNode};
use crate::types::Value;

/// Childless stored node.
pub fn leaf<V: Clone + 'static>(value: V) -> NodeRef<V> {
    PlainNode::new(value).into_ref()
}

/// Stored node with the given edges, in order.
pub fn branch<V: Clone + 'static>(value: V, edges: Vec<(&str, NodeRef<V>)>) -> NodeRef<V> {
    PlainNode::with_edges(value, edges)
        .expect("fixture keys are unique")
        .into_ref()
}

/// Childless node holding optional text.
pub fn text(value: &str) -> NodeRef<Option<String>> {
    leaf(Some(value.to_string()))
}

/// Node holding optional text, with edges.
pub fn text_branch(
    value: Option<&str>,
    edges: Vec<(&str, NodeRef<Option<String>>)>,
) -> NodeRef<Option<String>> {
    branch(value.map(str::to_string), edges)
}

/// Node holding a dynamic value, with edges.
pub fn value_tree(value: impl Into<Value>, edges: Vec<(&str, NodeRef<Value>)>) -> NodeRef<Value> {
    branch(value.into(), edges)
}

/// Infinite graph: every key resolves, and each node's value is its depth.
///
/// No keys are enumerated, so walks and copies stop at the root unless a
/// selector names keys explicitly.
pub struct DepthGraph {
    depth: i64,
}

impl DepthGraph {
    pub const fn new(depth: i64) -> Self {
        Self { depth }
    }
}

impl Node<i64> for DepthGraph {
    fn value(&self) -> i64 {
        self.depth
    }

    fn keys(&self) -> RamifyResult<Vec<Key>> {
        Ok(Vec::new())
    }

    fn child(&self, _key: &str) -> Option<NodeRef<i64>> {
        Some(NodeRef::new(Self::new(self.depth + 1)))
    }

    fn kind(&self) -> &'static str {
        "depth"
    }
}

/// Diamond `root(0) -> {left(1), right(2)} -> bottom(3)` sharing one bottom node.
///
/// Returns the root and the shared node.
pub fn shared_diamond() -> (NodeRef<i64>, NodeRef<i64>) {
    let bottom = leaf(3);
    let root = branch(
        0,
        vec![
            ("left", branch(1, vec![("bottom", bottom.clone())])),
            ("right", branch(2, vec![("bottom", bottom.clone())])),
        ],
    );
    (root, bottom)
}

/// Node whose `self` edge points back at itself.
///
/// Callers should pop the edge when done so the node is freed.
pub fn self_loop<V: Clone + 'static>(value: V) -> NodeRef<V> {
    let node = leaf(value);
    node.add_edge("self", node.clone())
        .expect("fresh node has no edges");
    node
}

/// Two layers for merge and overlay tests.
///
/// The upper layer has `a` (with child `a-1`), `b` and `d`; the lower layer
/// has a null `a`, a `c`, and an omitted `d`.
pub fn merge_layers() -> (NodeRef<Value>, NodeRef<Value>) {
    let upper = value_tree(
        "R",
        vec![
            ("a", value_tree("A", vec![("a-1", value_tree("A-1", vec![]))])),
            ("b", value_tree("B", vec![])),
            ("d", value_tree("D", vec![])),
        ],
    );
    let lower = value_tree(
        "R.2",
        vec![
            ("a", value_tree(Value::Null, vec![])),
            ("c", value_tree("C.2", vec![])),
            ("d", value_tree(Value::Omit, vec![])),
        ],
    );
    (upper, lower)
}
