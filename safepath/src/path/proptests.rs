//! Property-based tests for path construction and bounded resolution.

use super::Path;
use crate::spec::{UNIX, WINDOWS};
use proptest::prelude::*;

// Literal elements only; "." and ".." are filtered out below.
fn element_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.-]{1,12}".prop_filter("relative token", |s| s != "." && s != "..")
}

fn elements_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(element_strategy(), 0..8)
}

// Untrusted relative input: a mix of tokens and names.
fn relative_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just(String::new()),
            Just(".".to_string()),
            Just("..".to_string()),
            element_strategy(),
        ],
        1..10,
    )
    .prop_map(|parts| parts.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Rendering and re-parsing an absolute path gives back the same path
    #[test]
    fn unix_round_trip(elements in elements_strategy()) {
        let mut path = Path::with_default_root(&UNIX);
        path.append(&elements).unwrap();
        let reparsed = Path::parse(&path.to_string(), &UNIX).unwrap();
        prop_assert_eq!(reparsed, path);
    }

    #[test]
    fn windows_round_trip(elements in elements_strategy(), drive in "[a-zA-Z]") {
        let mut path = Path::new(&WINDOWS);
        path.set_absolute(&format!("{drive}:")).unwrap().append(&elements).unwrap();
        let reparsed = Path::parse(&path.to_string(), &WINDOWS).unwrap();
        prop_assert_eq!(reparsed, path);
    }

    // Relative paths round-trip through parse_relative
    #[test]
    fn relative_round_trip(elements in elements_strategy()) {
        let mut path = Path::new(&UNIX);
        path.append(&elements).unwrap();
        let reparsed = Path::parse_relative(&path.to_string(), &UNIX).unwrap();
        prop_assert_eq!(reparsed, path);
    }

    // Whatever the input, a successful resolution stays inside the base and
    // a failed one leaves the path untouched
    #[test]
    fn resolution_stays_in_base(
        base in elements_strategy(),
        start in elements_strategy(),
        input in relative_strategy(),
    ) {
        let mut base_path = Path::with_default_root(&UNIX);
        base_path.append(&base).unwrap();
        let mut path = base_path.clone();
        path.append(&start).unwrap();
        let before = path.clone();

        match path.resolve_relative(&input, &base_path) {
            Ok(resolved) => {
                prop_assert!(base_path.contains(resolved));
            }
            Err(err) => {
                prop_assert!(err.is_traversal());
                prop_assert_eq!(&path, &before);
            }
        }
    }

    // Stored elements are never relative tokens
    #[test]
    fn resolved_paths_have_no_tokens(input in relative_strategy()) {
        let mut path = Path::with_default_root(&UNIX);
        if path.resolve_relative(&input, "/").is_ok() {
            for element in path.elements() {
                prop_assert!(element != "." && element != ".." && !element.is_empty());
            }
        }
    }

    // Truncation never partially applies
    #[test]
    fn truncate_all_or_nothing(elements in elements_strategy(), levels in 0usize..12) {
        let mut path = Path::with_default_root(&UNIX);
        path.append(&elements).unwrap();
        let before = path.clone();
        match path.truncate(levels) {
            Ok(_) => prop_assert_eq!(path.len(), elements.len() - levels),
            Err(_) => {
                prop_assert!(levels > elements.len());
                prop_assert_eq!(path, before);
            }
        }
    }
}
