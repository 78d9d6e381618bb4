//! Flat path-to-value encoding.

use std::collections::HashSet;
use std::fmt;

use common_config::FlatConfig;
use common_error::{RamifyError, RamifyResult};

use crate::graph::{NodeRef, Path, PlainNode};
use crate::types::Nullable;
use crate::walker::{ChildResults, bottom_up};

/// Key of one flat entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FlatKey {
    /// Separator-delimited path; empty segments are ignored.
    Text(String),
    /// Explicit key sequence.
    Path(Path),
}

impl FlatKey {
    /// Resolve to a key sequence.
    ///
    /// Fails with `InvalidValue` for a text key when no separator is configured.
    pub fn to_path(&self, separator: Option<&str>) -> RamifyResult<Path> {
        match (self, separator) {
            (Self::Path(path), _) => Ok(path.clone()),
            (Self::Text(text), Some(sep)) => Ok(text
                .split(sep)
                .filter(|bit| !bit.is_empty())
                .map(str::to_string)
                .collect()),
            (Self::Text(text), None) => Err(RamifyError::invalid_value(format!(
                "text key '{text}' needs a separator"
            ))),
        }
    }
}

impl fmt::Display for FlatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Path(path) => write!(f, "{path:?}"),
        }
    }
}

impl From<&str> for FlatKey {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for FlatKey {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Path> for FlatKey {
    fn from(path: Path) -> Self {
        Self::Path(path)
    }
}

impl<const N: usize> From<[&str; N]> for FlatKey {
    fn from(path: [&str; N]) -> Self {
        Self::Path(path.iter().map(|bit| (*bit).to_string()).collect())
    }
}

/// Build a graph from `(path, value)` entries.
///
/// Nodes named by no entry get `V::default()`. Fails with `DuplicatePath`
/// if two entries resolve to the same path.
pub fn from_flat<V, I, K>(entries: I, config: &FlatConfig) -> RamifyResult<NodeRef<V>>
where
    V: Clone + Default + 'static,
    I: IntoIterator<Item = (K, V)>,
    K: Into<FlatKey>,
{
    let separator = config.separator.as_deref();
    let root = PlainNode::new(V::default()).into_ref();
    let mut seen = HashSet::new();
    for (key, value) in entries {
        let key: FlatKey = key.into();
        let path = key.to_path(separator)?;
        if !seen.insert(path.clone()) {
            let shown = path.join(separator.unwrap_or("/"));
            log::debug!("flat entries collide at '{shown}'");
            return Err(RamifyError::duplicate_path(shown));
        }
        let mut target = root.clone();
        for bit in &path {
            target = match target.child(bit) {
                Some(child) => child,
                None => {
                    let child = PlainNode::new(V::default()).into_ref();
                    target.add_edge(bit.as_str(), child.clone())?;
                    child
                }
            };
        }
        target.set_value(value)?;
    }
    Ok(root)
}

/// List a graph as `(path, value)` entries, descendants before their parent.
///
/// With `minimize`, null values are left out wherever descendants already
/// imply the node exists.
pub fn to_flat<V>(node: &NodeRef<V>, config: &FlatConfig) -> RamifyResult<Vec<(FlatKey, V)>>
where
    V: Nullable + 'static,
{
    let minimize = config.minimize;
    let entries = bottom_up(node, |value: V, path, children: ChildResults<Vec<(Path, V)>>| {
        let mut entries: Vec<(Path, V)> = children
            .into_iter()
            .flat_map(|(_, entries)| entries)
            .collect();
        if !minimize || !value.is_null() || entries.is_empty() {
            entries.push((path.to_vec(), value));
        }
        Ok(entries)
    })?;
    Ok(entries
        .into_iter()
        .map(|(path, value)| {
            let key = match config.separator.as_deref() {
                Some(sep) => FlatKey::Text(path.join(sep)),
                None => FlatKey::Path(path),
            };
            (key, value)
        })
        .collect())
}
