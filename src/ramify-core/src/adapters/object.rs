//! Reflective view over serialized data.

use common_error::RamifyResult;
use serde::Serialize;
use serde_json::Value as Json;

use crate::graph::{Key, Node, NodeRef};

/// View of a JSON document as a graph.
///
/// Following an edge is field access on objects and index access on
/// arrays. Without a key graph no keys are enumerated, so only known paths
/// can be followed; with one, each node enumerates the keys of the key
/// graph node at the same path.
pub struct ObjectNode<K = ()> {
    value: Json,
    keygraph: Option<NodeRef<K>>,
}

impl ObjectNode {
    /// View a document without a key graph.
    pub const fn new(value: Json) -> Self {
        Self {
            value,
            keygraph: None,
        }
    }

    /// Serialize `value` and view the result.
    pub fn from_serializable<T: Serialize>(value: &T) -> RamifyResult<Self> {
        Ok(Self::new(serde_json::to_value(value)?))
    }
}

impl<K: 'static> ObjectNode<K> {
    /// View a document, enumerating keys from `keygraph`.
    pub const fn with_keygraph(value: Json, keygraph: NodeRef<K>) -> Self {
        Self {
            value,
            keygraph: Some(keygraph),
        }
    }

    /// Move this view into a shared handle.
    pub fn into_ref(self) -> NodeRef<Json> {
        NodeRef::new(self)
    }
}

impl<K: 'static> Node<Json> for ObjectNode<K> {
    fn value(&self) -> Json {
        self.value.clone()
    }

    fn keys(&self) -> RamifyResult<Vec<Key>> {
        self.keygraph
            .as_ref()
            .map_or_else(|| Ok(Vec::new()), NodeRef::keys)
    }

    fn child(&self, key: &str) -> Option<NodeRef<Json>> {
        let value = match &self.value {
            Json::Object(fields) => fields.get(key)?,
            Json::Array(items) => items.get(key.parse::<usize>().ok()?)?,
            _ => return None,
        };
        let keygraph = self.keygraph.as_ref().and_then(|k| k.child(key));
        Some(NodeRef::new(Self {
            value: value.clone(),
            keygraph,
        }))
    }

    fn kind(&self) -> &'static str {
        "object"
    }
}
