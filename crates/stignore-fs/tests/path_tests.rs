use rstest::rstest;
use stignore_fs::NormalizedPath;

#[test]
fn test_normalize_backslashes_to_forward() {
    let path = NormalizedPath::new("foo\\bar\\baz");
    assert_eq!(path.as_str(), "foo/bar/baz");
}

#[test]
fn test_normalize_mixed_slashes() {
    let path = NormalizedPath::new("foo/bar\\baz");
    assert_eq!(path.as_str(), "foo/bar/baz");
}

#[rstest]
#[case("/some/path", "ba{r,z}/*.png", "/some/path/ba{r,z}/*.png")]
#[case("/some/path/", "**/.git", "/some/path/**/.git")]
#[case("/some/path", "/anchored", "/some/path/anchored")]
#[case("/some/path", "./here", "/some/path/here")]
#[case("/some/path", "../sibling", "/some/sibling")]
#[case("/", "Thumbs.db", "/Thumbs.db")]
#[case("/", "../../escape", "/escape")]
#[case("/some", "dir/", "/some/dir")]
fn test_join(#[case] base: &str, #[case] segment: &str, #[case] expected: &str) {
    let joined = NormalizedPath::new(base).join(segment);
    assert_eq!(joined.as_str(), expected);
}

#[test]
fn test_join_keeps_pattern_escapes() {
    let joined = NormalizedPath::root().join("a\\*b");
    assert_eq!(joined.as_str(), "/a\\*b");
}

#[test]
fn test_anchored_from_components() {
    let rel = std::path::Path::new("some").join("path");
    let anchored = NormalizedPath::anchored(&rel);
    assert_eq!(anchored.as_str(), "/some/path");
    assert!(anchored.is_anchored());
}

#[test]
fn test_anchored_empty_is_root() {
    let anchored = NormalizedPath::anchored(std::path::Path::new(""));
    assert!(anchored.is_root());
}
