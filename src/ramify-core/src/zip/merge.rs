//! Merging several graphs into one with a join function.

use std::fmt;
use std::rc::Rc;

use common_config::OverlayConfig;
use common_error::RamifyResult;

use super::{SelectKeys, izip_slots};
use crate::adapters::imap;
use crate::graph::{NodeRef, plain_copy};
use crate::types::{Nullable, Slot};

/// Reduces the per-input values of a zipped node to one merged value.
///
/// Every predefined join returns the null value when nothing qualifies.
pub enum Join<V> {
    /// First value whose graph has this node.
    FirstDefined,
    /// Last value whose graph has this node.
    LastDefined,
    /// First present, non-null value.
    FirstNotNone,
    /// Last present, non-null value.
    LastNotNone,
    /// First present, non-null value, unless an omission marker comes first,
    /// which forces null.
    Overlay,
    /// `Overlay` searching from the last input backwards.
    OverlayReverse,
    /// Caller-supplied reduction.
    Custom(Rc<dyn Fn(Vec<Slot<V>>) -> V>),
}

impl<V> Clone for Join<V> {
    fn clone(&self) -> Self {
        match self {
            Self::FirstDefined => Self::FirstDefined,
            Self::LastDefined => Self::LastDefined,
            Self::FirstNotNone => Self::FirstNotNone,
            Self::LastNotNone => Self::LastNotNone,
            Self::Overlay => Self::Overlay,
            Self::OverlayReverse => Self::OverlayReverse,
            Self::Custom(f) => Self::Custom(Rc::clone(f)),
        }
    }
}

impl<V> fmt::Debug for Join<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl<V> Join<V> {
    /// Wrap a closure as a join.
    pub fn custom(f: impl Fn(Vec<Slot<V>>) -> V + 'static) -> Self {
        Self::Custom(Rc::new(f))
    }

    /// Name of the join, `custom` for closures.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::FirstDefined => "first_defined",
            Self::LastDefined => "last_defined",
            Self::FirstNotNone => "first_not_none",
            Self::LastNotNone => "last_not_none",
            Self::Overlay => "overlay",
            Self::OverlayReverse => "overlay_reverse",
            Self::Custom(_) => "custom",
        }
    }
}

impl<V: Clone + Nullable> Join<V> {
    /// Reduce one node's slots.
    pub fn apply(&self, slots: Vec<Slot<V>>) -> V {
        if let Self::Custom(f) = self {
            return f(slots);
        }
        let mut present = slots.iter().filter_map(Slot::as_present);
        let value = match self {
            Self::FirstDefined => present.next(),
            Self::LastDefined => present.last(),
            Self::FirstNotNone => present.find(|v| !v.is_null()),
            Self::LastNotNone => present.filter(|v| !v.is_null()).last(),
            Self::Overlay => return overlay_value(present),
            Self::OverlayReverse => return overlay_value(present.rev()),
            Self::Custom(_) => None,
        };
        value.cloned().unwrap_or_else(V::null)
    }
}

fn overlay_value<'a, V: Clone + Nullable + 'a>(values: impl Iterator<Item = &'a V>) -> V {
    for value in values {
        if value.is_omit() {
            return V::null();
        }
        if !value.is_null() {
            return value.clone();
        }
    }
    V::null()
}

/// Merge graphs lazily.
pub fn imerge<V, I, P>(graphs: I, policy: P, join: Join<V>) -> NodeRef<V>
where
    V: Clone + Nullable + 'static,
    I: IntoIterator<Item = NodeRef<V>>,
    P: SelectKeys<V> + 'static,
{
    imap(&izip_slots(graphs, policy), move |slots| join.apply(slots))
}

/// Merge graphs into a materialized graph.
pub fn merge<V, I, P>(graphs: I, policy: P, join: Join<V>) -> RamifyResult<NodeRef<V>>
where
    V: Clone + Nullable + 'static,
    I: IntoIterator<Item = NodeRef<V>>,
    P: SelectKeys<V> + 'static,
{
    plain_copy(&imerge(graphs, policy, join))
}

/// Layer graphs so that earlier graphs take precedence per node.
///
/// Uses the `first` key policy: the result has the first graph's structure.
pub fn overlay<V, I>(graphs: I) -> RamifyResult<NodeRef<V>>
where
    V: Clone + Nullable + 'static,
    I: IntoIterator<Item = NodeRef<V>>,
{
    overlay_with(graphs, &OverlayConfig::default())
}

/// Layer graphs with a configured key policy and precedence direction.
pub fn overlay_with<V, I>(graphs: I, config: &OverlayConfig) -> RamifyResult<NodeRef<V>>
where
    V: Clone + Nullable + 'static,
    I: IntoIterator<Item = NodeRef<V>>,
{
    let join = if config.reversed {
        Join::OverlayReverse
    } else {
        Join::Overlay
    };
    merge(graphs, config.key_policy, join)
}
