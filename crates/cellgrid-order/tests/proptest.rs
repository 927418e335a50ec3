//! Property-based tests for the comparator using proptest.

use std::cmp::Ordering;

use cellgrid_order::{collate, compare, sorted_indices, Dir, Number, Timestamp, Value};
use proptest::prelude::*;

// ============================================================================
// Test helpers
// ============================================================================

fn dir_strategy() -> impl Strategy<Value = Dir> {
    prop_oneof![Just(Dir::Asc), Just(Dir::Desc)]
}

fn value_strategy() -> impl Strategy<Value = Value<'static>> {
    prop_oneof![
        Just(Value::None),
        any::<i64>().prop_map(Value::from),
        any::<u64>().prop_map(Value::from),
        (-1.0e12f64..1.0e12).prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(|ms| Value::Timestamp(Timestamp(ms))),
        "[a-zA-Zé ]{0,8}".prop_map(Value::from),
    ]
}

fn optional_number(n: &Option<i64>) -> Value<'_> {
    n.map(Value::from).unwrap_or(Value::None)
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Absent values never appear before a defined value.
    #[test]
    fn absent_values_sort_last(
        column in prop::collection::vec(prop::option::of(any::<i64>()), 0..60),
        dir in dir_strategy(),
    ) {
        let order = sorted_indices(&column, dir, optional_number);
        let first_absent = order.iter().position(|&i| column[i].is_none());
        if let Some(pos) = first_absent {
            prop_assert!(order[pos..].iter().all(|&i| column[i].is_none()));
        }
    }

    /// Ascending places smaller numbers first; descending reverses that.
    #[test]
    fn numeric_ordering(
        column in prop::collection::vec(prop::option::of(any::<i64>()), 0..60),
    ) {
        let asc: Vec<i64> = sorted_indices(&column, Dir::Asc, optional_number)
            .into_iter()
            .filter_map(|i| column[i])
            .collect();
        let desc: Vec<i64> = sorted_indices(&column, Dir::Desc, optional_number)
            .into_iter()
            .filter_map(|i| column[i])
            .collect();

        prop_assert!(asc.windows(2).all(|w| w[0] <= w[1]));
        prop_assert!(desc.windows(2).all(|w| w[0] >= w[1]));
    }

    /// A string in a numeric column does not turn the numbers into text.
    #[test]
    fn numbers_stay_numeric_in_mixed_column(
        numbers in prop::collection::vec(any::<i64>(), 0..30),
        placeholder in "[a-z/]{1,4}",
        dir in dir_strategy(),
    ) {
        let mut column: Vec<Value<'static>> = numbers.iter().map(|&n| Value::from(n)).collect();
        column.push(Value::from(placeholder));
        let sorted: Vec<i64> = sorted_indices(&column, dir, |v| v.clone())
            .into_iter()
            .filter_map(|i| numbers.get(i).copied())
            .collect();

        match dir {
            Dir::Asc => {
                prop_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
            }
            Dir::Desc => {
                prop_assert!(sorted.windows(2).all(|w| w[0] >= w[1]));
            }
        }
    }

    /// The result is always a permutation of the input indices.
    #[test]
    fn sorted_indices_is_permutation(
        column in prop::collection::vec(value_strategy(), 0..40),
        dir in dir_strategy(),
    ) {
        let mut order = sorted_indices(&column, dir, |v| v.clone());
        order.sort_unstable();
        prop_assert_eq!(order, (0..column.len()).collect::<Vec<_>>());
    }

    /// Comparison is antisymmetric for every pair of values.
    #[test]
    fn compare_is_antisymmetric(
        a in value_strategy(),
        b in value_strategy(),
        dir in dir_strategy(),
    ) {
        prop_assert_eq!(compare(&a, &b, dir), compare(&b, &a, dir).reverse());
    }

    /// Direction only flips defined-value comparisons.
    #[test]
    fn direction_flips_defined_values(a in value_strategy(), b in value_strategy()) {
        let asc = compare(&a, &b, Dir::Asc);
        let desc = compare(&a, &b, Dir::Desc);
        if a.is_absent() || b.is_absent() {
            prop_assert_eq!(asc, desc);
        } else {
            prop_assert_eq!(asc, desc.reverse());
        }
    }

    /// Mixed-width integers compare like their mathematical values.
    #[test]
    fn mixed_integers_compare_exactly(a in any::<i64>(), b in any::<u64>()) {
        let expected = (a as i128).cmp(&(b as i128));
        prop_assert_eq!(Number::I64(a).compare(Number::U64(b)), Some(expected));
    }

    /// Collation is reflexive only on identical strings.
    #[test]
    fn collate_equal_iff_identical(a in "[a-zA-Zé]{0,6}", b in "[a-zA-Zé]{0,6}") {
        prop_assert_eq!(collate(&a, &b) == Ordering::Equal, a == b);
    }
}
