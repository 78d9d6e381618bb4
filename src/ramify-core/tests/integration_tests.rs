//! Integration tests for ramify-core
//!
//! These tests drive the public API end to end: graphs built from mapping
//! literals and flat listings, zipped, merged, copied and rendered.

use common_config::{FlatConfig, KeyPolicy, OverlayConfig, RamifyConfig};
use common_error::RamifyError;
use proptest::prelude::*;
use ramify_core::adapters::{path_graph, with_default};
use ramify_core::convert::{from_flat, from_json, to_json};
use ramify_core::*;
use serde_json::json;

fn graph(literal: serde_json::Value) -> NodeRef<Value> {
    from_json(&literal).unwrap()
}

#[test]
fn test_zip_union_and_intersection() {
    let g1 = graph(json!({"a": "X"}));
    let g2 = graph(json!({"a": "Y", "b": "Z"}));

    let union = zip([g1.clone(), g2.clone()], KeyPolicy::Union, Value::Null).unwrap();
    assert_eq!(union.keys().unwrap(), vec!["a", "b"]);
    assert_eq!(
        union.get_child("a").unwrap().value(),
        vec![Value::from("X"), Value::from("Y")]
    );
    assert_eq!(
        union.get_child("b").unwrap().value(),
        vec![Value::Null, Value::from("Z")]
    );

    let intersection = zip([g1, g2], KeyPolicy::Intersection, Value::Null).unwrap();
    assert_eq!(intersection.keys().unwrap(), vec!["a"]);
}

#[test]
fn test_graph_from_mapping_literal() {
    let node = graph(json!({"_self": 1, "foo": {"_self": 3}}));

    assert_eq!(node.value(), Value::Int64(1));
    assert_eq!(node.keys().unwrap(), vec!["foo"]);
    assert_eq!(node.get_child("foo").unwrap().value(), Value::Int64(3));
    assert_eq!(to_json(&node, true).unwrap(), json!({"_self": 1, "foo": 3}));
}

#[test]
fn test_strict_zip_names_first_mismatch_in_union_order() {
    let g1 = graph(json!({"a": 1, "c": 2}));
    let g2 = graph(json!({"a": 1, "b": 2, "c": 3}));

    let err = zip([g1, g2], KeyPolicy::Strict, Value::Null).unwrap_err();
    assert!(matches!(err, RamifyError::StructureMismatch(ref key) if key == "b"));
}

#[test]
fn test_self_loop_path_resolution() {
    let node = PlainNode::new(Value::from("me")).into_ref();
    node.add_edge("self", node.clone()).unwrap();

    let found = node.get_path(["self", "self", "self"]).unwrap();
    assert!(found.ptr_eq(&node));

    let copy = node.deep_copy().unwrap();
    assert!(copy.get_path(["self", "self"]).unwrap().ptr_eq(&copy));
    assert_eq!(
        node.render().unwrap(),
        "root: String(\"me\")\n└─ self ↺ recursive reference to root"
    );

    copy.pop_edge("self").unwrap();
    node.pop_edge("self").unwrap();
}

#[test]
fn test_flat_duplicate_after_trimming() {
    let listing = vec![
        ("foo/bar", Value::from("v1")),
        ("foo/bar/", Value::from("v2")),
    ];
    let err = from_flat(listing, &FlatConfig::default()).unwrap_err();

    assert!(matches!(err, RamifyError::DuplicatePath(_)));
}

#[test]
fn test_layered_configuration() {
    let config: RamifyConfig = serde_json::from_value(json!({
        "overlay": {"key_policy": "union", "reversed": false}
    }))
    .unwrap();
    let defaults = graph(json!({"host": "localhost", "port": 80, "debug": false}));
    let user = graph(json!({"port": 8080, "extra": {"x": 1}}));

    let merged = overlay_with_config([user, defaults], &config.overlay);
    let port = merged.get_child("port").unwrap();
    assert_eq!(port.value(), Value::Int64(8080));
    let host = merged.get_child("host").unwrap();
    assert_eq!(host.value(), Value::from("localhost"));
    let x = merged.get_path(["extra", "x"]).unwrap();
    assert_eq!(x.value(), Value::Int64(1));
    let keys = merged.keys().unwrap();
    assert_eq!(keys, vec!["port", "extra", "host", "debug"]);
}

fn overlay_with_config(graphs: [NodeRef<Value>; 2], config: &OverlayConfig) -> NodeRef<Value> {
    zip::overlay_with(graphs, config).unwrap()
}

#[test]
fn test_lazy_views_compose_with_copy() {
    let node = graph(json!({"a": {"b": 1}}));
    let filled = with_default(&node, Value::from("?"));

    let selector = Selector::map([("a", Selector::keys(["b", "zz"]))]);
    let selected = materialize(&filled, &selector).unwrap();
    let b = selected.get_path(["a", "b"]).unwrap();
    assert_eq!(b.value(), Value::Int64(1));
    let zz = selected.get_path(["a", "zz"]).unwrap();
    assert_eq!(zz.value(), Value::from("?"));

    let paths = plain_copy(&path_graph(&node)).unwrap();
    assert_eq!(paths.get_path(["a", "b"]).unwrap().value(), vec!["a", "b"]);
}

proptest! {
    /// Mapping literals survive a round trip through the graph.
    #[test]
    fn json_literal_round_trip(
        values in prop::collection::vec((any::<i32>(), "[a-z]{1,6}"), 0..8)
    ) {
        let mut fields = serde_json::Map::new();
        fields.insert("_self".to_string(), json!("root"));
        for (value, key) in values {
            fields.insert(key, json!({"_self": value}));
        }
        let literal = serde_json::Value::Object(fields);

        let node: NodeRef<Value> = from_json(&literal).unwrap();
        prop_assert_eq!(to_json(&node, false).unwrap(), literal);
    }
}
