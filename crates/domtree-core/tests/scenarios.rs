//! Listing scenarios for the tree builder

use domtree_core::prelude::*;
use domtree_test_utils::{
    description_listing, outline, records, FLAT, NESTED, SHARED_TEXT_PREFIX, THREE_LEVEL,
};
use pretty_assertions::assert_eq;

fn strict() -> TreeBuilder {
    TreeBuilder::new(BuilderConfig::new().with_ordering(OrderingMode::Strict)).unwrap()
}

#[test]
fn flat_listing_gives_sibling_leaves() {
    let forest = build_tree(&records(FLAT));
    assert_eq!(outline(&forest), "a,b,c");
    assert!(forest.roots().iter().all(|n| n.icon() == NodeIcon::Leaf));
}

#[test]
fn nested_listing_gives_one_folder() {
    let forest = build_tree(&records(NESTED));
    assert_eq!(outline(&forest), "a(x,y),b");

    let a = &forest.roots()[0];
    assert_eq!(a.icon(), NodeIcon::Folder);
    assert!(a.children().iter().all(|c| c.icon() == NodeIcon::Leaf));
    assert_eq!(forest.roots()[1].icon(), NodeIcon::Leaf);
}

#[test]
fn three_level_listing() {
    let forest = build_tree(&records(THREE_LEVEL));
    assert_eq!(outline(&forest), "a(x(1),y),b");

    let x = forest.find("/a/x").unwrap();
    assert!(x.is_folder());
    assert_eq!(x.children().len(), 1);
    assert!(!forest.find("/a/y").unwrap().is_folder());
    assert!(!forest.find("/b").unwrap().is_folder());
}

#[test]
fn shared_text_prefix_is_not_a_child() {
    let forest = build_tree(&records(SHARED_TEXT_PREFIX));
    assert_eq!(outline(&forest), "a,a-extra");
    assert_eq!(forest.roots()[0].icon(), NodeIcon::Leaf);
}

#[test]
fn shared_text_prefix_nests_only_in_raw_mode() {
    let raw = TreeBuilder::new(BuilderConfig::new().with_prefix_match(PrefixMatch::Raw)).unwrap();
    let forest = raw.build(&records(SHARED_TEXT_PREFIX)).unwrap();
    assert_eq!(outline(&forest), "a(a-extra)");
}

#[test]
fn empty_listing() {
    let forest = strict().build(&[]).unwrap();
    assert!(forest.is_empty());
    assert_eq!(forest.node_count(), 0);
}

#[test]
fn building_twice_is_identical() {
    let listing = description_listing();
    let builder = TreeBuilder::default();
    let first = builder.build(&listing).unwrap();
    let second = builder.build(&listing).unwrap();
    assert_eq!(first, second);
}

#[test]
fn payload_reaches_nodes() {
    let listing = description_listing();
    let forest = strict().build(&listing).unwrap();

    assert_eq!(outline(&forest), "desc(ActivityDesc(CreateItem,EditDefinition),Schema(Item),Script,dev(TestItem))");
    for (record, (_, node)) in listing.iter().zip(forest.iter()) {
        assert_eq!(node.path(), record.path);
        assert_eq!(node.label(), record.name);
        assert_eq!(node.payload(), &record.payload);
    }
    // an empty domain is still a leaf
    let script = forest.find("/desc/Script").unwrap();
    assert_eq!(script.kind(), &PathKind::Domain);
    assert_eq!(script.icon(), NodeIcon::Leaf);
}

#[test]
fn listing_below_a_root_prefix() {
    let listing = records(&["/desc/a", "/desc/a/x", "/desc/b"]);
    let forest = strict().build(&listing).unwrap();
    assert_eq!(outline(&forest), "a(x),b");
}

#[test]
fn strict_rejects_out_of_order_siblings() {
    let err = strict().build(&records(&["/a", "/a/y", "/a/x"])).unwrap_err();
    assert_eq!(
        err,
        BuildError::OutOfOrder {
            index: 2,
            path: "/a/x".into(),
            previous: "/a/y".into(),
        }
    );
}

#[test]
fn strict_rejects_duplicates() {
    let err = strict().build(&records(&["/a", "/a"])).unwrap_err();
    assert!(matches!(err, BuildError::DuplicatePath { index: 1, .. }));
}

#[test]
fn strict_rejects_child_listed_after_its_parent_closed() {
    let err = strict().build(&records(&["/a", "/b", "/a/x"])).unwrap_err();
    assert!(matches!(err, BuildError::OutOfOrder { index: 2, .. }));
}

#[test]
fn lenient_keeps_every_record_of_a_malformed_listing() {
    let listing = records(&["/b", "/a/x", "/a", "/a", "relative", "", "/b/q/r"]);
    let forest = build_tree(&listing);
    assert_eq!(forest.node_count(), listing.len());
}

#[test]
fn forest_serializes_for_rendering() {
    let forest = build_tree(&records(NESTED));
    let value = serde_json::to_value(&forest).unwrap();
    assert_eq!(value[0]["label"], "a");
    assert_eq!(value[0]["icon"], "folder");
    assert_eq!(value[0]["children"][1]["path"], "/a/y");
    assert!(value[1].get("children").is_none());
}
