//! Property-based tests for ramify-core.
//!
//! Random trees are generated as plain shapes and then built into stored
//! graphs, so every property can rebuild the same input more than once.

#[cfg(test)]
mod tests {
    use common_config::KeyPolicy;
    use proptest::prelude::*;

    use crate::graph::{NodeRef, PlainNode};
    use crate::types::Value;
    use crate::zip::{SelectKeys, overlay, unzip, zip};

    // =========================================================================
    // Strategies
    // =========================================================================

    #[derive(Debug, Clone)]
    struct Shape {
        value: i64,
        children: Vec<(String, Shape)>,
    }

    fn arb_shape() -> impl Strategy<Value = Shape> {
        let leaf = (-5i64..5).prop_map(|value| Shape {
            value,
            children: Vec::new(),
        });
        leaf.prop_recursive(4, 24, 4, |inner| {
            (-5i64..5, prop::collection::vec(("[a-e]", inner), 0..4))
                .prop_map(|(value, children)| Shape { value, children })
        })
    }

    /// Build a stored graph; a repeated key replaces the earlier child in place.
    fn build<V: Clone + 'static>(shape: &Shape, f: &dyn Fn(i64) -> V) -> NodeRef<V> {
        let node = PlainNode::new(f(shape.value));
        for (key, child) in &shape.children {
            node.set_edge(key.as_str(), build(child, f));
        }
        node.into_ref()
    }

    fn int_graph(shape: &Shape) -> NodeRef<i64> {
        build(shape, &|v| v)
    }

    fn value_graph(shape: &Shape) -> NodeRef<Value> {
        build(shape, &|v| match v {
            -5 => Value::Omit,
            -4 | 0 => Value::Null,
            v => Value::Int64(v),
        })
    }

    // =========================================================================
    // Equality
    // =========================================================================

    proptest! {
        /// Ordered equality implies unordered equality, and unordered equality is symmetric.
        #[test]
        fn ordered_eq_implies_unordered_eq(a in arb_shape(), b in arb_shape()) {
            let (a, b) = (int_graph(&a), int_graph(&b));
            let ordered = a.ordered_eq(&b).unwrap();
            let unordered = a.unordered_eq(&b).unwrap();

            prop_assert!(!ordered || unordered);
            prop_assert_eq!(unordered, b.unordered_eq(&a).unwrap());
        }

        /// Both equalities are reflexive on acyclic graphs.
        #[test]
        fn equality_is_reflexive(shape in arb_shape()) {
            let a = int_graph(&shape);
            let b = int_graph(&shape);

            prop_assert!(a.ordered_eq(&a).unwrap());
            prop_assert!(a.ordered_eq(&b).unwrap());
            prop_assert!(a.unordered_eq(&crate::adapters::sorted(&b)).unwrap());
        }
    }

    // =========================================================================
    // Copy
    // =========================================================================

    proptest! {
        /// Copying reproduces the graph, and copying a copy changes nothing.
        #[test]
        fn deep_copy_is_idempotent(shape in arb_shape()) {
            let graph = int_graph(&shape);
            let once = graph.deep_copy().unwrap();
            let twice = once.deep_copy().unwrap();

            prop_assert!(once.unordered_eq(&graph).unwrap());
            prop_assert!(twice.ordered_eq(&once).unwrap());
            prop_assert!(!once.ptr_eq(&graph));
        }

        /// A node reachable along two paths is copied once.
        #[test]
        fn copy_preserves_sharing(shape in arb_shape(), shared in arb_shape()) {
            let graph = int_graph(&shape);
            let shared = int_graph(&shared);
            graph.set_edge("s1", shared.clone()).unwrap();
            graph.set_edge("s2", shared).unwrap();

            let copy = graph.deep_copy().unwrap();
            let s1 = copy.get_child("s1").unwrap();
            prop_assert!(s1.ptr_eq(&copy.get_child("s2").unwrap()));
            let plain = crate::graph::plain_copy(&graph).unwrap();
            let p1 = plain.get_child("s1").unwrap();
            prop_assert!(p1.ptr_eq(&plain.get_child("s2").unwrap()));
        }
    }

    // =========================================================================
    // Zip and merge
    // =========================================================================

    proptest! {
        /// Strict zipping of identically shaped graphs can be undone.
        #[test]
        fn zip_unzip_round_trip(shape in arb_shape(), offset in 1i64..100) {
            let g1 = int_graph(&shape);
            let g2 = build(&shape, &|v| v * 3 + offset);

            let zipped = zip([g1.clone(), g2.clone()], KeyPolicy::Strict, 0).unwrap();
            let parts = unzip(&zipped).unwrap();
            prop_assert_eq!(parts.len(), 2);
            prop_assert!(parts[0].ordered_eq(&g1).unwrap());
            prop_assert!(parts[1].ordered_eq(&g2).unwrap());
        }

        /// intersection ⊆ first ⊆ union, as key sets.
        #[test]
        fn key_policies_nest(shapes in prop::collection::vec(arb_shape(), 1..4)) {
            let nodes: Vec<_> = shapes.iter().map(|s| Some(int_graph(s))).collect();
            let union = KeyPolicy::Union.select(&nodes).unwrap();
            let first = KeyPolicy::First.select(&nodes).unwrap();
            let intersection = KeyPolicy::Intersection.select(&nodes).unwrap();

            prop_assert!(intersection.iter().all(|k| first.contains(k)));
            prop_assert!(first.iter().all(|k| union.contains(k)));
        }

        /// Overlaying a single graph returns it, with omissions turned into nulls.
        #[test]
        fn overlay_of_one_graph_is_identity(shape in arb_shape()) {
            let graph = value_graph(&shape);
            let expected = build(&shape, &|v| match v {
                -5 | -4 | 0 => Value::Null,
                v => Value::Int64(v),
            });

            let over = overlay([graph]).unwrap();
            prop_assert!(over.ordered_eq(&expected).unwrap());
        }
    }
}
