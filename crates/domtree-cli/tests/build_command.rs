//! `build` and `validate` over generated listing files

use std::io::Write;

use domtree_cli::commands::{build, validate};
use domtree_cli::{BuildOptions, Outcome};
use domtree_test_utils::{balanced_listing, description_listing};
use tempfile::NamedTempFile;

fn write_listing(records: &[domtree_core::PathRecord]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string(records).unwrap().as_bytes())
        .unwrap();
    file
}

#[tokio::test]
async fn text_output_has_one_line_per_record() {
    let listing = balanced_listing(3, 3);
    let file = write_listing(&listing);

    let outcome = build(&BuildOptions {
        input: file.path().to_path_buf(),
        root: "/".into(),
        strict: true,
        ..BuildOptions::default()
    })
    .await
    .unwrap();

    let Outcome::Success(text) = outcome else {
        panic!("expected success");
    };
    assert_eq!(text.lines().count(), listing.len());
    assert_eq!(text.lines().next(), Some("+ n000"));
    assert_eq!(text.lines().filter(|l| l.starts_with("    - ")).count(), 27);
}

#[tokio::test]
async fn description_listing_validates() {
    let file = write_listing(&description_listing());
    let outcome = validate(file.path(), None).await.unwrap();
    assert_eq!(
        outcome,
        Outcome::Success("valid: 9 records, 1 roots, max depth 2\n".into())
    );
}
