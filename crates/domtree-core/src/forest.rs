//! Ordered forest of menu nodes handed to the rendering layer

use std::fmt::Write as _;

use serde::Serialize;

use crate::node::MenuNode;

/// Root-level menu nodes in listing order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct MenuForest {
    roots: Vec<MenuNode>,
}

impl MenuForest {
    pub(crate) fn new(roots: Vec<MenuNode>) -> Self {
        Self { roots }
    }

    /// Root nodes
    #[inline]
    #[must_use]
    pub fn roots(&self) -> &[MenuNode] {
        &self.roots
    }

    /// Take ownership of the root nodes
    #[inline]
    #[must_use]
    pub fn into_roots(self) -> Vec<MenuNode> {
        self.roots
    }

    /// Number of root nodes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Check if the forest has no nodes
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of nodes at every depth
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.roots.iter().map(|r| 1 + r.descendant_count()).sum()
    }

    /// Deepest nesting level (roots are depth 0); `None` when empty
    #[must_use]
    pub fn max_depth(&self) -> Option<usize> {
        self.iter().map(|(depth, _)| depth).max()
    }

    /// Pre-order walk yielding `(depth, node)`
    ///
    /// For a build over `S`, the walk visits nodes in the order of their
    /// records in `S`.
    #[must_use]
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder {
            stack: self.roots.iter().rev().map(|n| (0, n)).collect(),
        }
    }

    /// First node whose path equals `path`
    #[must_use]
    pub fn find(&self, path: &str) -> Option<&MenuNode> {
        self.iter().map(|(_, n)| n).find(|n| n.path() == path)
    }

    /// Indented text rendering, one node per line
    ///
    /// Folders are marked `+`, leaves `-`, two spaces per level.
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for (depth, node) in self.iter() {
            let _ = writeln!(
                out,
                "{:indent$}{} {}",
                "",
                node.icon().marker(),
                node.label(),
                indent = depth * 2
            );
        }
        out
    }
}

impl<'a> IntoIterator for &'a MenuForest {
    type Item = (usize, &'a MenuNode);
    type IntoIter = PreOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pre-order iterator over a [`MenuForest`]
#[derive(Debug)]
pub struct PreOrder<'a> {
    stack: Vec<(usize, &'a MenuNode)>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (usize, &'a MenuNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.children().iter().rev().map(|c| (depth + 1, c)));
        Some((depth, node))
    }
}
