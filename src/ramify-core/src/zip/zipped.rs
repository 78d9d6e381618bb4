//! Lazy and eager zipping of several graphs.

use std::rc::Rc;

use common_config::ZipConfig;
use common_error::RamifyResult;

use super::SelectKeys;
use crate::adapters::imap;
use crate::graph::{Key, Node, NodeRef, PlainNode, plain_copy};
use crate::types::Slot;
use crate::walker::{ChildResults, bottom_up};

/// Virtual node aligning the nodes of several graphs at one path.
///
/// Its value holds one [`Slot`] per input: `Absent` where that graph has no
/// node here. Children are computed on every lookup, so infinite inputs can
/// be zipped.
pub struct ZippedNode<V> {
    inputs: Vec<Option<NodeRef<V>>>,
    policy: Rc<dyn SelectKeys<V>>,
}

impl<V: Clone + 'static> ZippedNode<V> {
    /// Zip the given inputs, choosing edges with `policy`.
    pub fn new(inputs: Vec<Option<NodeRef<V>>>, policy: Rc<dyn SelectKeys<V>>) -> Self {
        Self { inputs, policy }
    }

    /// Number of zipped inputs.
    pub fn arity(&self) -> usize {
        self.inputs.len()
    }
}

impl<V: Clone + 'static> Node<Vec<Slot<V>>> for ZippedNode<V> {
    fn value(&self) -> Vec<Slot<V>> {
        self.inputs
            .iter()
            .map(|n| Slot::from(n.as_ref().map(NodeRef::value)))
            .collect()
    }

    fn keys(&self) -> RamifyResult<Vec<Key>> {
        self.policy.select(&self.inputs)
    }

    fn child(&self, key: &str) -> Option<NodeRef<Vec<Slot<V>>>> {
        let inputs: Vec<_> = self
            .inputs
            .iter()
            .map(|n| n.as_ref().and_then(|n| n.child(key)))
            .collect();
        if inputs.iter().all(Option::is_none) {
            return None;
        }
        Some(NodeRef::new(Self::new(inputs, Rc::clone(&self.policy))))
    }

    fn kind(&self) -> &'static str {
        "zipped"
    }
}

/// Zip graphs lazily, keeping absent inputs distinguishable.
pub fn izip_slots<V, I, P>(graphs: I, policy: P) -> NodeRef<Vec<Slot<V>>>
where
    V: Clone + 'static,
    I: IntoIterator<Item = NodeRef<V>>,
    P: SelectKeys<V> + 'static,
{
    let inputs = graphs.into_iter().map(Some).collect();
    NodeRef::new(ZippedNode::new(inputs, Rc::new(policy)))
}

/// Zip graphs lazily; each value holds one entry per input, with `default`
/// standing in for inputs that have no node at that path.
pub fn izip<V, I, P>(graphs: I, policy: P, default: V) -> NodeRef<Vec<V>>
where
    V: Clone + 'static,
    I: IntoIterator<Item = NodeRef<V>>,
    P: SelectKeys<V> + 'static,
{
    imap(&izip_slots(graphs, policy), move |slots: Vec<Slot<V>>| {
        slots
            .into_iter()
            .map(|slot| slot.unwrap_or(default.clone()))
            .collect()
    })
}

/// Zip graphs into a materialized graph.
pub fn zip<V, I, P>(graphs: I, policy: P, default: V) -> RamifyResult<NodeRef<Vec<V>>>
where
    V: Clone + 'static,
    I: IntoIterator<Item = NodeRef<V>>,
    P: SelectKeys<V> + 'static,
{
    plain_copy(&izip(graphs, policy, default))
}

/// Zip graphs into a materialized graph using a configured key policy.
pub fn zip_with<V, I>(graphs: I, config: &ZipConfig, default: V) -> RamifyResult<NodeRef<Vec<V>>>
where
    V: Clone + 'static,
    I: IntoIterator<Item = NodeRef<V>>,
{
    zip(graphs, config.key_policy, default)
}

/// Split a graph of tuples into one graph per tuple slot.
///
/// Every value must have as many entries as the root's. Fails with
/// `InvalidValue` naming the offending path otherwise.
pub fn unzip<V: Clone + 'static>(node: &NodeRef<Vec<V>>) -> RamifyResult<Vec<NodeRef<V>>> {
    let arity = node.value().len();
    bottom_up(
        node,
        |values: Vec<V>, path: &[Key], children: ChildResults<Vec<NodeRef<V>>>| {
            common_error::ensure!(
                values.len() == arity,
                InvalidValue: "expected a tuple of {arity} values at '{}', found {}",
                path.join("/"),
                values.len()
            );
            let children: Vec<(Key, Vec<NodeRef<V>>)> = children.into_iter().collect();
            values
                .into_iter()
                .enumerate()
                .map(|(i, value)| -> RamifyResult<NodeRef<V>> {
                    let edges = children
                        .iter()
                        .map(|(key, parts)| (key.clone(), parts[i].clone()));
                    Ok(PlainNode::with_edges(value, edges)?.into_ref())
                })
                .collect()
        },
    )
}
