//! Mapping-literal encoding.
//!
//! An object is a node: its `_self` entry is the node's value and every
//! other entry is a child edge, in document order. Anything that is not an
//! object is a leaf holding that value.

use common_error::{RamifyError, RamifyResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value as Json};

use crate::graph::{NodeRef, PlainNode};
use crate::walker::{ChildResults, bottom_up};

/// Reserved object key holding a node's own value.
pub const SELF_KEY: &str = "_self";

/// Build a graph from a mapping literal.
///
/// Objects without a `_self` entry get `V::default()`.
pub fn from_json<V>(json: &Json) -> RamifyResult<NodeRef<V>>
where
    V: DeserializeOwned + Default + Clone + 'static,
{
    let Json::Object(fields) = json else {
        return Ok(PlainNode::new(V::deserialize(json)?).into_ref());
    };
    let value = match fields.get(SELF_KEY) {
        Some(value) => V::deserialize(value)?,
        None => V::default(),
    };
    let node = PlainNode::new(value);
    for (key, child) in fields {
        if key != SELF_KEY {
            node.add_edge(key.as_str(), from_json(child)?)?;
        }
    }
    Ok(node.into_ref())
}

/// Convert a graph back into a mapping literal.
///
/// With `minimize`, null values are left out and childless nodes collapse
/// to their bare value, unless that value is itself an object. Fails with
/// `InvalidValue` if an edge is labeled `_self`.
pub fn to_json<V: Serialize>(node: &NodeRef<V>, minimize: bool) -> RamifyResult<Json> {
    bottom_up(node, |value: V, path, children: ChildResults<Json>| {
        let value = serde_json::to_value(&value)?;
        if minimize && children.is_empty() && !value.is_object() {
            return Ok(value);
        }
        let mut fields = Map::new();
        if !(minimize && value.is_null()) {
            fields.insert(SELF_KEY.to_string(), value);
        }
        for (key, child) in children {
            if key == SELF_KEY {
                return Err(RamifyError::invalid_value(format!(
                    "edge label '{SELF_KEY}' is reserved (under '{}')",
                    path.join("/")
                )));
            }
            fields.insert(key, child);
        }
        Ok(Json::Object(fields))
    })
}
