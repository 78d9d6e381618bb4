//! Tree display utilities for edge-labeled graphs.

use std::fmt::Write;

/// A node that can be rendered as a tree.
///
/// Implementors are cheap handles (the renderer clones them freely) with a
/// stable identity, so that a cycle back to an ancestor can be reported
/// instead of followed.
pub trait TreeNode: Sized {
    /// Error raised while enumerating children.
    type Error;

    /// Identity of the underlying node, stable for the duration of a render.
    fn identity(&self) -> usize;

    /// Text rendered after the edge label.
    fn describe(&self) -> String;

    /// Labeled child nodes, in edge order.
    fn children(&self) -> Result<Vec<(String, Self)>, Self::Error>;
}

/// Helper for rendering tree structures.
pub struct DisplayTree<'a, T: TreeNode> {
    root: &'a T,
    root_label: String,
    sort_keys: bool,
}

impl<'a, T: TreeNode> DisplayTree<'a, T> {
    /// Create a new display tree.
    pub fn new(root: &'a T) -> Self {
        Self {
            root,
            root_label: "root".to_string(),
            sort_keys: false,
        }
    }

    /// Set the label printed for the root.
    #[must_use]
    pub fn with_root_label(mut self, label: impl Into<String>) -> Self {
        self.root_label = label.into();
        self
    }

    /// Render children in label order instead of edge order.
    #[must_use]
    pub fn with_sort_keys(mut self, sort_keys: bool) -> Self {
        self.sort_keys = sort_keys;
        self
    }

    /// Render the tree.
    ///
    /// Each line is `label: description`. A child that is one of its own
    /// ancestors is printed as `label ↺ recursive reference to <path>`.
    pub fn render(&self) -> Result<String, T::Error> {
        let mut out = String::new();
        let mut path = vec![self.root_label.clone()];
        let mut ancestors = Vec::new();
        let _ = writeln!(out, "{}: {}", self.root_label, self.root.describe());
        self.render_children(&mut out, self.root, "", &mut path, &mut ancestors)?;
        Ok(out.trim_end().to_string())
    }

    fn render_children(
        &self,
        out: &mut String,
        node: &T,
        prefix: &str,
        path: &mut Vec<String>,
        ancestors: &mut Vec<usize>,
    ) -> Result<(), T::Error> {
        let mut children = node.children()?;
        if self.sort_keys {
            children.sort_by(|a, b| a.0.cmp(&b.0));
        }

        ancestors.push(node.identity());
        let count = children.len();
        for (i, (label, child)) in children.into_iter().enumerate() {
            let is_last = i + 1 == count;
            let connector = if is_last { "└─ " } else { "├─ " };

            if let Some(index) = ancestors.iter().position(|&id| id == child.identity()) {
                let target = path[..=index].join("/");
                let _ = writeln!(
                    out,
                    "{prefix}{connector}{label} ↺ recursive reference to {target}"
                );
                continue;
            }

            let _ = writeln!(out, "{prefix}{connector}{label}: {}", child.describe());
            let child_prefix = format!("{prefix}{}", if is_last { "   " } else { "│  " });
            path.push(label);
            self.render_children(out, &child, &child_prefix, path, ancestors)?;
            path.pop();
        }
        ancestors.pop();

        Ok(())
    }
}
