//! Eager whole-graph transforms.
//!
//! Walker-based transforms rebuild the graph as a tree: shared nodes are
//! duplicated and cyclic input does not terminate.

use common_error::RamifyResult;

use crate::adapters::imap;
use crate::graph::{NodeRef, Path, PlainNode, plain_copy};
use crate::types::Nullable;
use crate::walker::{ChildResults, bottom_up};

/// Copy of `node` with every value replaced by `f(value)`.
pub fn map<V, W, F>(node: &NodeRef<V>, f: F) -> RamifyResult<NodeRef<W>>
where
    V: 'static,
    W: Clone + 'static,
    F: Fn(V) -> W + 'static,
{
    plain_copy(&imap(node, f))
}

/// Copy of `node` with every null value replaced by `value`.
pub fn fill_nones<V>(node: &NodeRef<V>, value: V) -> RamifyResult<NodeRef<V>>
where
    V: Clone + Nullable + 'static,
{
    let fill = move |v: V| if v.is_null() { value.clone() } else { v };
    map(node, fill)
}

/// Graph with the structure of `node` and the values of `source` at the
/// same paths.
///
/// Paths missing from `source` take `default`; without one they fail with
/// `NotFound`.
pub fn replace<V, W>(
    node: &NodeRef<V>,
    source: &NodeRef<W>,
    default: Option<W>,
) -> RamifyResult<NodeRef<W>>
where
    W: Clone + 'static,
{
    bottom_up(node, |_: V, path, children: ChildResults<NodeRef<W>>| {
        let value = match (source.get_path(path), &default) {
            (Ok(found), _) => found.value(),
            (Err(e), None) => return Err(e),
            (Err(_), Some(default)) => default.clone(),
        };
        Ok(PlainNode::with_edges(value, children)?.into_ref())
    })
}

/// Replace every path in `paths` with the value of `source` at that path.
///
/// `None` entries stay `None`.
pub fn pick<V>(
    paths: &NodeRef<Option<Path>>,
    source: &NodeRef<V>,
) -> RamifyResult<NodeRef<Option<V>>>
where
    V: Clone + 'static,
{
    bottom_up(paths, |target: Option<Path>, _, children: ChildResults<NodeRef<Option<V>>>| {
        let value = target
            .map(|path| source.get_path(&path).map(|found| found.value()))
            .transpose()?;
        Ok(PlainNode::with_edges(value, children)?.into_ref())
    })
}

/// Copy of `node` whose values are their paths from `node`.
pub fn make_path_graph<V>(node: &NodeRef<V>) -> RamifyResult<NodeRef<Path>> {
    bottom_up(node, |_: V, path, children: ChildResults<NodeRef<Path>>| {
        Ok(PlainNode::with_edges(path.to_vec(), children)?.into_ref())
    })
}
