use proptest::prelude::*;
use stignore_fs::NormalizedPath;

proptest! {
    #[test]
    fn test_normalization_invariants(s in "\\PC*") {
        let path = NormalizedPath::new(&s);
        let as_str = path.as_str();

        prop_assert!(!as_str.contains('\\'));
        prop_assert!(!as_str.contains("//"));
        prop_assert!(as_str == "/" || !as_str.ends_with('/'));

        // Cleaning is idempotent
        let again = NormalizedPath::new(as_str);
        prop_assert_eq!(path, again);
    }

    #[test]
    fn test_join_stays_under_anchor(
        base in prop::collection::vec("[a-z]{1,6}", 0..4),
        segment in "[a-z./*{},]{0,20}",
    ) {
        let base = NormalizedPath::new(format!("/{}", base.join("/")));
        let joined = base.join(&segment);

        prop_assert!(joined.is_anchored());
        prop_assert!(!joined.as_str().contains("//"));
        prop_assert!(!joined.as_str().split('/').any(|s| s == "." || s == ".."));
    }

    #[test]
    fn test_join_prefixes_plain_segments(
        base in prop::collection::vec("[a-z]{1,6}", 0..4),
        segment in prop::collection::vec("[a-z*]{1,6}", 1..4),
    ) {
        let base = NormalizedPath::new(format!("/{}", base.join("/")));
        let segment = segment.join("/");
        let joined = base.join(&segment);

        let expected = if base.is_root() {
            format!("/{}", segment)
        } else {
            format!("{}/{}", base, segment)
        };
        prop_assert_eq!(joined.as_str(), expected.as_str());
    }
}
