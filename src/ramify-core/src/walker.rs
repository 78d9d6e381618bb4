//! Depth-first graph traversal.
//!
//! A walk calls [`Visitor::pre_children`] on entering each node, recurses
//! into the node's declared edges in order, then calls
//! [`Visitor::post_children`] with the results collected from the children.
//! The walker keeps no visited set: walking a cyclic graph does not
//! terminate. Use the memoized copy in `graph` when cycles are possible.

use std::marker::PhantomData;

use common_error::RamifyResult;

use crate::graph::{Key, NodeRef};

/// Results of the walked children of one node, in edge order.
#[derive(Debug, Clone, PartialEq)]
pub struct ChildResults<R> {
    entries: Vec<(Key, R)>,
}

impl<R> ChildResults<R> {
    /// Result for one child key.
    pub fn get(&self, key: &str) -> Option<&R> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, r)| r)
    }

    /// `(key, result)` pairs in edge order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &R)> {
        self.entries.iter().map(|(k, r)| (k.as_str(), r))
    }

    /// Child keys in edge order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Results in edge order.
    pub fn values(&self) -> impl Iterator<Item = &R> {
        self.entries.iter().map(|(_, r)| r)
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the node had no children.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<R> IntoIterator for ChildResults<R> {
    type Item = (Key, R);
    type IntoIter = std::vec::IntoIter<(Key, R)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<R> FromIterator<(Key, R)> for ChildResults<R> {
    fn from_iter<T: IntoIterator<Item = (Key, R)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Hooks invoked by a depth-first walk.
///
/// `path` is the sequence of keys from the walk's root to the current node.
pub trait Visitor<V> {
    /// Result of entering a node, handed back to `post_children`.
    type Pre;
    /// Result of a finished node, collected by its parent.
    type Output;

    /// Called before the node's children are walked.
    fn pre_children(&mut self, value: &V, path: &[Key]) -> RamifyResult<Self::Pre>;

    /// Called after all children have been walked.
    fn post_children(
        &mut self,
        value: V,
        path: &[Key],
        children: ChildResults<Self::Output>,
        pre: Self::Pre,
    ) -> RamifyResult<Self::Output>;
}

/// Visitor built from a pre hook and a post hook.
pub struct FnVisitor<P, Q, Pre, Out> {
    pre: P,
    post: Q,
    _marker: PhantomData<fn() -> (Pre, Out)>,
}

impl<P, Q, Pre, Out> FnVisitor<P, Q, Pre, Out> {
    /// Create a visitor from both hooks.
    pub const fn new(pre: P, post: Q) -> Self {
        Self {
            pre,
            post,
            _marker: PhantomData,
        }
    }
}

impl<V, P, Q, Pre, Out> Visitor<V> for FnVisitor<P, Q, Pre, Out>
where
    P: FnMut(&V, &[Key]) -> RamifyResult<Pre>,
    Q: FnMut(V, &[Key], ChildResults<Out>, Pre) -> RamifyResult<Out>,
{
    type Pre = Pre;
    type Output = Out;

    fn pre_children(&mut self, value: &V, path: &[Key]) -> RamifyResult<Pre> {
        (self.pre)(value, path)
    }

    fn post_children(
        &mut self,
        value: V,
        path: &[Key],
        children: ChildResults<Out>,
        pre: Pre,
    ) -> RamifyResult<Out> {
        (self.post)(value, path, children, pre)
    }
}

/// Visitor with only a pre hook; the walk returns the root's pre result.
pub struct TopDown<F, R> {
    f: F,
    _marker: PhantomData<fn() -> R>,
}

impl<F, R> TopDown<F, R> {
    /// Wrap a pre hook.
    pub const fn new(f: F) -> Self {
        Self {
            f,
            _marker: PhantomData,
        }
    }
}

impl<V, F, R> Visitor<V> for TopDown<F, R>
where
    F: FnMut(&V, &[Key]) -> RamifyResult<R>,
{
    type Pre = R;
    type Output = R;

    fn pre_children(&mut self, value: &V, path: &[Key]) -> RamifyResult<R> {
        (self.f)(value, path)
    }

    fn post_children(
        &mut self,
        _value: V,
        _path: &[Key],
        _children: ChildResults<R>,
        pre: R,
    ) -> RamifyResult<R> {
        Ok(pre)
    }
}

/// Visitor with only a post hook.
pub struct BottomUp<F, R> {
    f: F,
    _marker: PhantomData<fn() -> R>,
}

impl<F, R> BottomUp<F, R> {
    /// Wrap a post hook.
    pub const fn new(f: F) -> Self {
        Self {
            f,
            _marker: PhantomData,
        }
    }
}

impl<V, F, R> Visitor<V> for BottomUp<F, R>
where
    F: FnMut(V, &[Key], ChildResults<R>) -> RamifyResult<R>,
{
    type Pre = ();
    type Output = R;

    fn pre_children(&mut self, _value: &V, _path: &[Key]) -> RamifyResult<()> {
        Ok(())
    }

    fn post_children(
        &mut self,
        value: V,
        path: &[Key],
        children: ChildResults<R>,
        _pre: (),
    ) -> RamifyResult<R> {
        (self.f)(value, path, children)
    }
}

/// Walk the graph below `node`.
pub fn walk<V, W: Visitor<V>>(node: &NodeRef<V>, visitor: &mut W) -> RamifyResult<W::Output> {
    walk_from(node, &[], visitor)
}

/// Walk the graph below `node`, reporting paths relative to `root_path`.
pub fn walk_from<V, W: Visitor<V>>(
    node: &NodeRef<V>,
    root_path: &[Key],
    visitor: &mut W,
) -> RamifyResult<W::Output> {
    let mut path = root_path.to_vec();
    walk_node(node, &mut path, visitor)
}

fn walk_node<V, W: Visitor<V>>(
    node: &NodeRef<V>,
    path: &mut Vec<Key>,
    visitor: &mut W,
) -> RamifyResult<W::Output> {
    let value = node.value();
    let pre = visitor.pre_children(&value, path)?;
    let edges = node.edges().map_err(|e| e.within(path))?;
    let mut children = Vec::with_capacity(edges.len());
    for (key, child) in edges {
        path.push(key.clone());
        let result = walk_node(&child, path, visitor)?;
        path.pop();
        children.push((key, result));
    }
    visitor.post_children(value, path, ChildResults { entries: children }, pre)
}

/// Walk with a pre hook only, returning the root's result.
pub fn top_down<V, R, F>(node: &NodeRef<V>, f: F) -> RamifyResult<R>
where
    F: FnMut(&V, &[Key]) -> RamifyResult<R>,
{
    walk(node, &mut TopDown::new(f))
}

/// Walk with a post hook only, returning the root's result.
pub fn bottom_up<V, R, F>(node: &NodeRef<V>, f: F) -> RamifyResult<R>
where
    F: FnMut(V, &[Key], ChildResults<R>) -> RamifyResult<R>,
{
    walk(node, &mut BottomUp::new(f))
}
