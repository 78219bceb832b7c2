//! Assertion functions for testing chain outputs.
//!
//! This module provides specialized assertion functions for comparing
//! chains and collections with expected results.

use crate::entries::Entries;
use crate::key::Key;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Assert that two collections hold the same `(key, value)` pairs in the same order.
///
/// # Panics
///
/// Panics if the collections differ in length, keys, values, or order.
///
/// # Example
///
/// ```
/// use ironchain::*;
/// use ironchain::testing::assert_entries_equal;
///
/// let actual = from_pairs([("one", 1), ("three", 3)]);
/// assert_entries_equal(actual.get(), &[("one", 1), ("three", 3)]);
/// ```
pub fn assert_entries_equal<K, V>(actual: &Entries<V>, expected: &[(K, V)])
where
    K: Clone + Into<Key>,
    V: Debug + PartialEq,
{
    let expected: Vec<(Key, &V)> = expected
        .iter()
        .map(|(k, v)| (k.clone().into(), v))
        .collect();
    let actual: Vec<(&Key, &V)> = actual.iter().collect();

    assert_eq!(
        actual.len(),
        expected.len(),
        "Entries length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    for (i, ((ak, av), (ek, ev))) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(
            *ak == ek && av == ev,
            "Entries mismatch at position {i}:\n  Expected: ({ek:?}, {ev:?})\n  Actual: ({ak:?}, {av:?})\n  Full expected: {expected:?}\n  Full actual: {actual:?}"
        );
    }
}

/// Assert that two value sequences match position by position, as returned
/// by [`Chain::get_values`](crate::Chain::get_values).
///
/// # Panics
///
/// Panics at the first differing position, or if the lengths differ.
///
/// # Example
///
/// ```
/// use ironchain::testing::assert_values_equal;
///
/// assert_values_equal(&[1, 2, 3], &[1, 2, 3]);
/// ```
pub fn assert_values_equal<T: Debug + PartialEq>(actual: &[T], expected: &[T]) {
    if let Some(i) = actual.iter().zip(expected).position(|(a, e)| a != e) {
        panic!(
            "Value {i} differs: expected {:?}, got {:?}\n  Expected values: {expected:?}\n  Actual values: {actual:?}",
            expected[i], actual[i]
        );
    }
    assert!(
        actual.len() == expected.len(),
        "Expected {} values, got {}\n  Expected values: {expected:?}\n  Actual values: {actual:?}",
        expected.len(),
        actual.len()
    );
}

/// Assert that a key sequence matches, in order.
///
/// # Panics
///
/// Panics if the keys differ.
///
/// # Example
///
/// ```
/// use ironchain::*;
/// use ironchain::testing::assert_keys_equal;
///
/// let c = from_vec(vec!["a", "b", "c"]).filter(|v, _, _| *v != "b");
/// assert_keys_equal(&c.get_keys(), &[0, 2]);
/// ```
pub fn assert_keys_equal<K: Clone + Into<Key>>(actual: &[Key], expected: &[K]) {
    let expected: Vec<Key> = expected.iter().cloned().map(Into::into).collect();
    assert_eq!(
        actual,
        expected.as_slice(),
        "Key mismatch:\n  Expected: {expected:?}\n  Actual: {actual:?}"
    );
}

/// Assert that two value sequences hold the same values the same number of
/// times, in any order.
///
/// Useful for testing shuffled output.
///
/// # Panics
///
/// Panics if some value occurs a different number of times in each.
///
/// # Example
///
/// ```
/// use ironchain::testing::assert_values_unordered_equal;
///
/// let actual = vec![3, 1, 2, 1];
/// let expected = vec![1, 1, 2, 3];
/// assert_values_unordered_equal(&actual, &expected);
/// ```
pub fn assert_values_unordered_equal<T: Debug + Eq + Hash>(actual: &[T], expected: &[T]) {
    let mut counts: HashMap<&T, isize> = HashMap::new();
    for v in expected {
        *counts.entry(v).or_default() += 1;
    }
    for v in actual {
        *counts.entry(v).or_default() -= 1;
    }
    let missing: Vec<_> = counts.iter().filter(|&(_, &n)| n > 0).map(|(v, _)| v).collect();
    let extra: Vec<_> = counts.iter().filter(|&(_, &n)| n < 0).map(|(v, _)| v).collect();

    assert!(
        missing.is_empty() && extra.is_empty(),
        "Values differ ignoring order:\n  Missing values: {missing:?}\n  Unexpected values: {extra:?}\n  Expected values: {expected:?}\n  Actual values: {actual:?}"
    );
}

/// Assert that all values in a collection satisfy a predicate.
///
/// # Panics
///
/// Panics if any value does not satisfy the predicate, naming its key.
///
/// # Example
///
/// ```
/// use ironchain::*;
/// use ironchain::testing::assert_all;
///
/// let evens = from_vec(vec![2, 4, 6, 8]);
/// assert_all(evens.get(), |x| x % 2 == 0);
/// ```
pub fn assert_all<V: Debug>(entries: &Entries<V>, predicate: impl Fn(&V) -> bool) {
    for (key, value) in entries {
        assert!(
            predicate(value),
            "Predicate failed for entry {key}:\n  Value: {value:?}\n  Entries: {entries:?}"
        );
    }
}
