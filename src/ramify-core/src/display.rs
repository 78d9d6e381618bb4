//! Tree rendering for graphs.

use std::fmt::Debug;

use common_config::DisplayConfig;
use common_display::{DisplayTree, TreeNode};
use common_error::{RamifyError, RamifyResult};

use crate::graph::NodeRef;

struct Rendered<'f, V> {
    node: NodeRef<V>,
    fmt: &'f dyn Fn(&V) -> String,
}

impl<V> TreeNode for Rendered<'_, V> {
    type Error = RamifyError;

    fn identity(&self) -> usize {
        self.node.id().as_usize()
    }

    fn describe(&self) -> String {
        (self.fmt)(&self.node.value())
    }

    fn children(&self) -> RamifyResult<Vec<(String, Self)>> {
        Ok(self
            .node
            .edges()?
            .into_iter()
            .map(|(key, node)| (key, self.wrap(node)))
            .collect())
    }
}

impl<V> Rendered<'_, V> {
    fn wrap(&self, node: NodeRef<V>) -> Self {
        Self {
            node,
            fmt: self.fmt,
        }
    }
}

impl<V> NodeRef<V> {
    /// Render the graph as a box-drawing tree, describing values with `fmt`.
    ///
    /// An edge back to an ancestor is printed as a recursive reference
    /// instead of being followed. Lazy views rebuild their nodes on every
    /// lookup, so cycles are only detected in graphs of stored nodes.
    pub fn render_with(
        &self,
        config: &DisplayConfig,
        fmt: impl Fn(&V) -> String,
    ) -> RamifyResult<String> {
        let root = Rendered {
            node: self.clone(),
            fmt: &fmt,
        };
        DisplayTree::new(&root)
            .with_root_label(config.root_label.as_str())
            .with_sort_keys(config.sort_keys)
            .render()
    }
}

impl<V: Debug> NodeRef<V> {
    /// Render the graph with `Debug` values and default settings.
    pub fn render(&self) -> RamifyResult<String> {
        self.render_with(&DisplayConfig::default(), |v| format!("{v:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{branch, leaf, self_loop, shared_diamond};

    #[test]
    fn test_render_tree() {
        let b = branch(1, vec![("c", leaf(2))]);
        let node = branch(0, vec![("b", b), ("a", leaf(3))]);

        assert_eq!(
            node.render().unwrap(),
            ["root: 0", "├─ b: 1", "│  └─ c: 2", "└─ a: 3"].join("\n")
        );

        let config = DisplayConfig::default()
            .with_sort_keys(true)
            .with_root_label("top");
        assert_eq!(
            node.render_with(&config, |v| format!("<{v}>")).unwrap(),
            ["top: <0>", "├─ a: <3>", "└─ b: <1>", "   └─ c: <2>"].join("\n")
        );
    }

    #[test]
    fn test_render_marks_cycles() {
        let node = self_loop(7);

        assert_eq!(
            node.render().unwrap(),
            ["root: 7", "└─ self ↺ recursive reference to root"].join("\n")
        );
        node.pop_edge("self").unwrap();
    }

    #[test]
    fn test_shared_nodes_render_twice() {
        let (root, _) = shared_diamond();

        let output = root.render().unwrap();
        assert_eq!(output.matches("bottom: 3").count(), 2);
        assert!(!output.contains('↺'));
    }
}
