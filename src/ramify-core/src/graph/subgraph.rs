//! Cycle-safe subgraph selection and copy.
//!
//! Every algorithm here memoizes on node identity for the duration of one
//! call: a source node reached along several paths maps to one result node,
//! and a path that leads back to an ancestor reuses the ancestor's result.

use std::collections::HashMap;

use common_error::{RamifyError, RamifyResult};

use super::{Edge, Key, NodeId, NodeRef, PlainNode};

/// Which part of a graph to take.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selector {
    /// This node and everything reachable through its declared edges.
    #[default]
    All,
    /// Exactly these children, each taken whole.
    Keys(Vec<Key>),
    /// These children, each with its own sub-selector.
    Map(Vec<(Key, Selector)>),
}

impl Selector {
    /// Select exactly these children, each taken whole.
    pub fn keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Key>,
    {
        Self::Keys(keys.into_iter().map(Into::into).collect())
    }

    /// Select these children with per-key sub-selectors.
    pub fn map<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Selector)>,
        S: Into<Key>,
    {
        Self::Map(entries.into_iter().map(|(k, s)| (k.into(), s)).collect())
    }

    fn resolve<V>(&self, node: &NodeRef<V>) -> RamifyResult<Vec<(Key, Selector)>> {
        Ok(match self {
            Self::All => node.keys()?.into_iter().map(|k| (k, Self::All)).collect(),
            Self::Keys(keys) => keys.iter().map(|k| (k.clone(), Self::All)).collect(),
            Self::Map(entries) => entries.clone(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Reuse source nodes wherever the selector takes them whole.
    Select,
    /// Rebuild every visited node through `clone_with`.
    Copy,
    /// Rebuild every visited node as a `PlainNode`.
    Materialize,
}

struct Entry<V> {
    // Held so the source address cannot be reused by another node mid-call.
    _source: NodeRef<V>,
    // `None` while the node's children are still being built.
    result: Option<NodeRef<V>>,
}

struct Copier<V> {
    mode: Mode,
    memo: HashMap<NodeId, Entry<V>>,
}

impl<V: Clone + 'static> Copier<V> {
    fn new(mode: Mode) -> Self {
        Self {
            mode,
            memo: HashMap::new(),
        }
    }

    fn remember(&mut self, source: &NodeRef<V>, result: Option<NodeRef<V>>) {
        self.memo.insert(
            source.id(),
            Entry {
                _source: source.clone(),
                result,
            },
        );
    }

    fn visit(&mut self, node: &NodeRef<V>, selector: &Selector) -> RamifyResult<NodeRef<V>> {
        if let Some(entry) = self.memo.get(&node.id()) {
            log::trace!("subgraph memo hit for {} node {}", node.kind(), node.id());
            return entry.result.clone().ok_or_else(|| {
                RamifyError::unsupported(format!(
                    "cannot copy a cycle through a {} node without a plain clone",
                    node.kind()
                ))
            });
        }
        if self.mode == Mode::Select && *selector == Selector::All {
            self.remember(node, Some(node.clone()));
            return Ok(node.clone());
        }

        let selected = selector.resolve(node)?;
        match self.mode {
            Mode::Materialize => {
                let result = PlainNode::new(node.value()).into_ref();
                self.remember(node, Some(result.clone()));
                self.fill(node, &result, selected)?;
                Ok(result)
            }
            Mode::Select | Mode::Copy => {
                // A plain clone can take its edges after the fact, which lets
                // cycles through it close on the memoized result.
                if node.as_plain().is_some() {
                    let shell = node.clone_with(Vec::new())?;
                    self.remember(node, Some(shell.clone()));
                    self.fill(node, &shell, selected)?;
                    return Ok(shell);
                }
                self.remember(node, None);
                let edges = self.build_edges(node, selected)?;
                let result = node.clone_with(edges)?;
                self.remember(node, Some(result.clone()));
                Ok(result)
            }
        }
    }

    fn build_edges(
        &mut self,
        node: &NodeRef<V>,
        selected: Vec<(Key, Selector)>,
    ) -> RamifyResult<Vec<Edge<V>>> {
        let mut edges = Vec::with_capacity(selected.len());
        for (key, sub) in selected {
            let Some(child) = node.child(&key) else {
                return Err(RamifyError::not_found([key]));
            };
            let built = self
                .visit(&child, &sub)
                .map_err(|e| e.within(std::slice::from_ref(&key)))?;
            edges.push((key, built));
        }
        Ok(edges)
    }

    fn fill(
        &mut self,
        node: &NodeRef<V>,
        target: &NodeRef<V>,
        selected: Vec<(Key, Selector)>,
    ) -> RamifyResult<()> {
        let plain = target.plain()?;
        for (key, child) in self.build_edges(node, selected)? {
            plain.add_edge(key, child)?;
        }
        Ok(())
    }
}

impl<V: Clone + 'static> NodeRef<V> {
    /// Select part of this graph.
    ///
    /// Nodes the selector takes whole are reused as they are; nodes whose
    /// edge set is restricted are rebuilt through `clone_with`. Fails with
    /// `Unsupported` if a node that must be rebuilt cannot be.
    pub fn subgraph(&self, selector: &Selector) -> RamifyResult<Self> {
        Copier::new(Mode::Select).visit(self, selector)
    }

    /// Copy part of this graph, rebuilding every visited node through
    /// `clone_with`.
    ///
    /// Shared nodes stay shared in the copy and cycles are reproduced.
    /// Fails with `Unsupported` if any visited node lacks `clone_with`.
    pub fn copy_subgraph(&self, selector: &Selector) -> RamifyResult<Self> {
        Copier::new(Mode::Copy).visit(self, selector)
    }

    /// Copy everything reachable from this node.
    pub fn deep_copy(&self) -> RamifyResult<Self> {
        self.copy_subgraph(&Selector::All)
    }
}

/// Materialize part of any graph into `PlainNode`s.
///
/// Works on representations without `clone_with`, such as lazy views.
/// Shared nodes stay shared and cycles are reproduced.
pub fn materialize<V: Clone + 'static>(
    node: &NodeRef<V>,
    selector: &Selector,
) -> RamifyResult<NodeRef<V>> {
    Copier::new(Mode::Materialize).visit(node, selector)
}

/// Materialize everything reachable from `node` into `PlainNode`s.
pub fn plain_copy<V: Clone + 'static>(node: &NodeRef<V>) -> RamifyResult<NodeRef<V>> {
    materialize(node, &Selector::All)
}
