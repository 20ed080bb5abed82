//! Property-based tests for the predicate library and set merging

use keel::predicate::*;
use keel::{Semigroup, ValidationSet};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_ge_is_reflexive(x in any::<i64>()) {
        prop_assert!(is_greater_than_or_equal_to(&x, &x));
        prop_assert!(is_less_or_equal_to(&x, &x));
    }

    #[test]
    fn prop_strict_comparisons_are_irreflexive(x in any::<i64>()) {
        prop_assert!(!is_greater_than(&x, &x));
        prop_assert!(!is_less_than(&x, &x));
    }

    #[test]
    fn prop_between_includes_both_bounds(a in any::<i32>(), b in any::<i32>()) {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(between(&start, &start, &end));
        prop_assert!(between(&end, &start, &end));
    }

    #[test]
    fn prop_between_matches_comparisons(
        x in any::<i32>(),
        start in any::<i32>(),
        end in any::<i32>(),
    ) {
        prop_assert_eq!(
            between(&x, &start, &end),
            is_greater_than_or_equal_to(&x, &start) && is_less_or_equal_to(&x, &end)
        );
    }

    #[test]
    fn prop_predicate_values_agree_with_functions(x in any::<i32>(), y in any::<i32>()) {
        prop_assert_eq!(gt(y).check(&x), is_greater_than(&x, &y));
        prop_assert_eq!(ge(y).check(&x), is_greater_than_or_equal_to(&x, &y));
        prop_assert_eq!(lt(y).check(&x), is_less_than(&x, &y));
        prop_assert_eq!(le(y).check(&x), is_less_or_equal_to(&x, &y));
    }

    #[test]
    fn prop_length_counts_chars(s in "\\PC{0,20}") {
        let n = s.chars().count();
        prop_assert!(length_between(s.as_str(), n, n));
        prop_assert!(!length_between(s.as_str(), n + 1, n + 2));
    }

    #[test]
    fn prop_whitespace_only_is_blank(s in "[ \t\n]{0,10}") {
        prop_assert!(!is_not_empty_or_white_space(s.as_str()));
    }

    #[test]
    fn prop_blank_check_implies_not_empty(s in "\\PC{0,10}") {
        if is_not_empty_or_white_space(s.as_str()) {
            prop_assert!(is_not_empty(s.as_str()));
        }
    }

    #[test]
    fn prop_merge_is_associative(
        a in prop::collection::vec("[a-z]{1,5}", 0..4),
        b in prop::collection::vec("[a-z]{1,5}", 0..4),
        c in prop::collection::vec("[a-z]{1,5}", 0..4),
        summaries in (any::<bool>(), any::<bool>(), any::<bool>()),
    ) {
        let build = |failures: &[String], summary: Option<&str>| {
            let mut set = summary.map(ValidationSet::new).unwrap_or_default();
            for failure in failures {
                set.add_error(failure.as_str());
            }
            set
        };
        let a = build(a.as_slice(), summaries.0.then_some("a"));
        let b = build(b.as_slice(), summaries.1.then_some("b"));
        let c = build(c.as_slice(), summaries.2.then_some("c"));

        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_failure_count_tracks_rejections(checks in prop::collection::vec(any::<bool>(), 0..16)) {
        let mut set = ValidationSet::new("summary");
        for (i, passed) in checks.iter().enumerate() {
            set.add_validation(*passed, "check {} failed", &[&i]);
        }
        let rejected = checks.iter().filter(|passed| !**passed).count();
        prop_assert_eq!(set.failure_count(), rejected);
        prop_assert_eq!(set.is_valid(), rejected == 0);
    }
}

#[test]
fn test_documented_boundaries() {
    assert!(length_between("", 0, 0));
    assert!(!length_between("ab", 1, 1));
    assert!(!is_not_empty_or_white_space("   "));
    assert!(is_not_empty_or_white_space(" a "));
    assert!(!is_not_empty_or_white_space(""));
    assert!(!is_not_empty(&None::<String>));
    assert!(!is_not_none(&None::<u8>));
}
