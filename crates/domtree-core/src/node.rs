//! Output menu nodes

use serde::Serialize;

use crate::record::{PathKind, PathRecord, RecordPayload};

/// Marker distinguishing folder-like from leaf-like nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeIcon {
    /// Node has at least one child
    Folder,
    /// Node has no children
    Leaf,
}

impl NodeIcon {
    /// One-character marker used in text renderings
    #[inline]
    #[must_use]
    pub fn marker(self) -> char {
        match self {
            Self::Folder => '+',
            Self::Leaf => '-',
        }
    }
}

/// Navigation node built from one path record
///
/// Owned by its parent (or by the forest, for roots). Nodes are immutable
/// once the build returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuNode {
    label: String,
    path: String,
    #[serde(flatten)]
    payload: RecordPayload,
    icon: NodeIcon,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<MenuNode>,
}

impl MenuNode {
    /// Build a node from its record and already-built children
    pub(crate) fn from_record(record: &PathRecord, children: Vec<MenuNode>) -> Self {
        let icon = if children.is_empty() {
            NodeIcon::Leaf
        } else {
            NodeIcon::Folder
        };
        Self {
            label: record.name.clone(),
            path: record.path.clone(),
            payload: record.payload.clone(),
            icon,
            children,
        }
    }

    /// Display label
    #[inline]
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Path of the source record
    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Payload carried from the source record
    #[inline]
    #[must_use]
    pub fn payload(&self) -> &RecordPayload {
        &self.payload
    }

    /// Entry kind from the payload
    #[inline]
    #[must_use]
    pub fn kind(&self) -> &PathKind {
        &self.payload.kind
    }

    /// Folder/leaf marker
    #[inline]
    #[must_use]
    pub fn icon(&self) -> NodeIcon {
        self.icon
    }

    /// Child nodes in listing order
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[MenuNode] {
        &self.children
    }

    /// Check if node has children
    #[inline]
    #[must_use]
    pub fn is_folder(&self) -> bool {
        self.icon == NodeIcon::Folder
    }

    /// Number of nodes below this one
    #[must_use]
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|c| 1 + c.descendant_count())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_without_children() {
        let node = MenuNode::from_record(&PathRecord::new("a", "/a"), Vec::new());
        assert_eq!(node.icon(), NodeIcon::Leaf);
        assert!(!node.is_folder());
        assert_eq!(node.descendant_count(), 0);
    }

    #[test]
    fn folder_with_children() {
        let child = MenuNode::from_record(&PathRecord::new("x", "/a/x"), Vec::new());
        let node = MenuNode::from_record(&PathRecord::new("a", "/a"), vec![child]);
        assert_eq!(node.icon(), NodeIcon::Folder);
        assert_eq!(node.icon().marker(), '+');
        assert_eq!(node.descendant_count(), 1);
    }

    #[test]
    fn serializes_without_empty_children() {
        let node = MenuNode::from_record(
            &PathRecord::new("a", "/a").with_kind(PathKind::Domain),
            Vec::new(),
        );
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["label"], "a");
        assert_eq!(value["icon"], "leaf");
        assert_eq!(value["type"], "domain");
        assert!(value.get("children").is_none());
    }
}
