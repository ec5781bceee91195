//! Root location against real directory trees.

use proptest::prelude::*;
use stignore_core::{Error, locate_root};
use stignore_test_utils::TestFolder;

#[test]
fn test_outside_folder_is_root_not_found() {
    let folder = TestFolder::unmarked();
    let cwd = folder.subdir("a/b");

    match locate_root(&cwd) {
        Err(Error::RootNotFound { start }) => assert_eq!(start, cwd),
        other => panic!("Expected RootNotFound, got {:?}", other),
    }
}

#[test]
fn test_marker_inside_cwd_is_ignored() {
    let folder = TestFolder::unmarked();
    let cwd = folder.subdir("a");
    folder.subdir("a/b/.stfolder");

    assert!(matches!(
        locate_root(&cwd),
        Err(Error::RootNotFound { .. })
    ));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Every descendant of a directory inside a folder resolves to the same root.
    #[test]
    fn descendants_resolve_to_same_root(
        segments in prop::collection::vec("[a-z]{1,8}", 0..4),
        extra in prop::collection::vec("[a-z]{1,8}", 1..3),
    ) {
        let folder = TestFolder::new();
        let dir = folder.subdir(&segments.join("/"));
        let child = folder.subdir(&[segments.clone(), extra.clone()].concat().join("/"));

        let outer = locate_root(&dir).unwrap();
        let inner = locate_root(&child).unwrap();

        prop_assert_eq!(outer.root(), folder.root());
        prop_assert_eq!(inner.root(), outer.root());

        let expected = format!("/{}", [segments, extra].concat().join("/"));
        prop_assert_eq!(inner.offset().as_str(), expected.as_str());
    }
}
