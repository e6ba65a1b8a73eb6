//! Property-based tests for the path algebra.
//!
//! Unit tests pin the documented edge cases; these properties check the
//! algebraic laws over generated inputs: normalization idempotence,
//! component round-trips, traversal symmetry and relativization
//! coherence.

use proptest::prelude::*;

use super::PurePath;
use crate::grammar::Grammar;

// Strategy for a single plain path component
fn component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,10}"
}

// Strategy for components mixed with "." and ".."
fn dotted_component_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(".".to_string()),
        Just("..".to_string()),
        component_strategy(),
    ]
}

// Relative or absolute POSIX paths with optional trailing separator
fn posix_path_strategy() -> impl Strategy<Value = String> {
    (
        any::<bool>(),
        prop::collection::vec(dotted_component_strategy(), 1..8),
        any::<bool>(),
    )
        .prop_map(|(rooted, parts, trailing)| {
            let mut path = String::new();
            if rooted {
                path.push('/');
            }
            path.push_str(&parts.join("/"));
            if trailing {
                path.push('/');
            }
            path
        })
}

// Absolute POSIX paths built from plain components only
fn plain_absolute_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(component_strategy(), 1..6).prop_map(|parts| format!("/{}", parts.join("/")))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Normalization is idempotent: normalize(normalize(p)) == normalize(p)
    #[test]
    fn normalization_idempotent(raw in posix_path_strategy()) {
        let path = PurePath::with_grammar(raw, Grammar::Posix);
        let once = path.lexically_normal();
        let twice = once.lexically_normal();
        prop_assert_eq!(once.as_str(), twice.as_str());
    }

    // Every path is "." relative to itself
    #[test]
    fn self_relative_is_dot(raw in posix_path_strategy()) {
        let path = PurePath::with_grammar(raw, Grammar::Posix);
        let relative = path.lexically_relative(&path);
        prop_assert_eq!(relative.map(PurePath::into_string), Some(".".to_string()));
    }

    // Re-appending the components reproduces the path up to normalization
    #[test]
    fn component_round_trip(raw in posix_path_strategy()) {
        let path = PurePath::with_grammar(raw, Grammar::Posix);
        let mut rebuilt = PurePath::with_grammar("", Grammar::Posix);
        for part in path.components() {
            rebuilt.push(part);
        }
        prop_assert_eq!(
            rebuilt.lexically_normal().into_string(),
            path.lexically_normal().into_string()
        );
    }

    // Backward traversal visits the same components in reverse
    #[test]
    fn traversal_symmetric(raw in posix_path_strategy()) {
        let path = PurePath::with_grammar(raw, Grammar::Posix);
        let forward: Vec<&str> = path.components().collect();
        let mut backward: Vec<&str> = path.components().rev().collect();
        backward.reverse();
        prop_assert_eq!(forward, backward);
    }

    // Separator repetition never distinguishes paths
    #[test]
    fn separator_runs_do_not_distinguish(raw in plain_absolute_strategy()) {
        let doubled = raw.replace('/', "//");
        let a = PurePath::with_grammar(raw, Grammar::Posix);
        let b = PurePath::with_grammar(doubled, Grammar::Posix);
        prop_assert_eq!(&a, &b);

        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut ha = DefaultHasher::new();
        let mut hb = DefaultHasher::new();
        a.hash(&mut ha);
        b.hash(&mut hb);
        prop_assert_eq!(ha.finish(), hb.finish());
    }

    // Joining then relativizing returns the appended part
    #[test]
    fn join_then_relative_round_trip(
        base_raw in plain_absolute_strategy(),
        rel_parts in prop::collection::vec(component_strategy(), 1..5),
    ) {
        let rel = rel_parts.join("/");
        let base = PurePath::with_grammar(base_raw, Grammar::Posix);
        let joined = base.join(&rel);
        let relative = joined.lexically_relative(&base);
        prop_assert_eq!(relative.map(PurePath::into_string), Some(rel));
    }

    // The generic form of a POSIX path never keeps duplicate separators
    #[test]
    fn generic_form_collapses_separators(raw in posix_path_strategy()) {
        let path = PurePath::with_grammar(raw, Grammar::Posix);
        prop_assert!(!path.generic_string().contains("//"));
    }

    // Normalized paths keep no "." components
    #[test]
    fn normalized_has_no_dot_components(raw in posix_path_strategy()) {
        let normal = PurePath::with_grammar(raw, Grammar::Posix).lexically_normal();
        if normal.as_str() != "." {
            prop_assert!(normal.components().all(|part| part != "."));
        }
    }
}
