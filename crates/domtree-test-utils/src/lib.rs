//! Testing utilities for the domain tree workspace
//!
//! Shared listings, record constructors and tree-shape helpers.

#![allow(missing_docs)]

use domtree_core::{MenuForest, MenuNode, PathKind, PathRecord};
use uuid::Uuid;

/// Scenario 1: three top-level leaves
pub const FLAT: &[&str] = &["/a", "/b", "/c"];

/// Scenario 2: one folder with two leaves, then a leaf
pub const NESTED: &[&str] = &["/a", "/a/x", "/a/y", "/b"];

/// Scenario 3: three levels
pub const THREE_LEVEL: &[&str] = &["/a", "/a/x", "/a/x/1", "/a/y", "/b"];

/// Sibling names sharing text without a separator between them
pub const SHARED_TEXT_PREFIX: &[&str] = &["/a", "/a-extra"];

pub fn records(paths: &[&str]) -> Vec<PathRecord> {
    paths.iter().map(|p| PathRecord::from_path(*p)).collect()
}

pub fn domain(path: &str) -> PathRecord {
    PathRecord::from_path(path).with_kind(PathKind::Domain)
}

pub fn item(path: &str) -> PathRecord {
    let uuid = Uuid::new_v4();
    PathRecord::from_path(path)
        .with_kind(PathKind::Item)
        .with_uuid(uuid)
        .with_url(format!("http://localhost:8081/api/item/{uuid}"))
}

/// Listing shaped like a description namespace under `/desc`
pub fn description_listing() -> Vec<PathRecord> {
    vec![
        domain("/desc"),
        domain("/desc/ActivityDesc"),
        item("/desc/ActivityDesc/CreateItem"),
        item("/desc/ActivityDesc/EditDefinition"),
        domain("/desc/Schema"),
        item("/desc/Schema/Item"),
        domain("/desc/Script"),
        domain("/desc/dev"),
        item("/desc/dev/TestItem"),
    ]
}

/// Well-formed listing of a full `fanout`-ary tree of `depth` levels
///
/// Segment names are zero-padded so text order matches listing order.
pub fn balanced_listing(fanout: usize, depth: usize) -> Vec<PathRecord> {
    fn walk(prefix: &str, fanout: usize, depth: usize, out: &mut Vec<PathRecord>) {
        if depth == 0 {
            return;
        }
        for i in 0..fanout {
            let path = format!("{prefix}/n{i:03}");
            out.push(PathRecord::from_path(path.clone()));
            walk(&path, fanout, depth - 1, out);
        }
    }
    let mut out = Vec::new();
    walk("", fanout, depth, &mut out);
    out
}

/// Compact nested rendering: `a(x,y(1)),b`
pub fn outline(forest: &MenuForest) -> String {
    fn level(nodes: &[MenuNode]) -> String {
        nodes
            .iter()
            .map(|n| {
                if n.children().is_empty() {
                    n.label().to_string()
                } else {
                    format!("{}({})", n.label(), level(n.children()))
                }
            })
            .collect::<Vec<_>>()
            .join(",")
    }
    level(forest.roots())
}
