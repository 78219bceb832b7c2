//! Integration tests demonstrating the testing utilities.

use ironchain::testing::*;
use ironchain::*;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[test]
fn test_builder_mixes_named_and_positional() {
    let data = EntriesBuilder::new()
        .add_kv("lang", 1)
        .add_value(2)
        .add_kv(10, 3)
        .add_value(4)
        .build();

    assert_entries_equal(
        &data,
        &[
            (Key::from("lang"), 1),
            (Key::Int(0), 2),
            (Key::Int(10), 3),
            (Key::Int(11), 4),
        ],
    );
}

#[test]
fn test_builder_range_and_repeated() {
    let chain = EntriesBuilder::<i64>::new()
        .add_range(1..=3)
        .add_repeated(9, 2)
        .build_chain();

    assert_values_equal(&chain.get_values(), &[1, 2, 3, 9, 9]);
    assert_keys_equal(&chain.get_keys(), &[0, 1, 2, 3, 4]);
}

#[test]
fn test_builder_len() {
    let builder = EntriesBuilder::new().add_values(vec!['a', 'b']);
    assert_eq!(builder.len(), 2);
    assert!(!builder.is_empty());
}

#[test]
fn test_assert_all_passes() {
    assert_all(Chain::from(numbers_by_name()).get(), |v| *v > 0);
}

#[test]
#[should_panic(expected = "Predicate failed for entry two")]
fn test_assert_all_names_failing_key() {
    assert_all(Chain::from(numbers_by_name()).get(), |v| *v != 2);
}

#[test]
#[should_panic(expected = "Entries mismatch at position 1")]
fn test_assert_entries_equal_reports_position() {
    let actual = from_pairs([("a", 1), ("b", 2)]);
    assert_entries_equal(actual.get(), &[("a", 1), ("c", 2)]);
}

#[test]
#[should_panic(expected = "Values differ ignoring order")]
fn test_unordered_reports_missing() {
    assert_values_unordered_equal(&[1, 2, 4], &[1, 2, 3]);
}

#[test]
#[should_panic(expected = "Values differ ignoring order")]
fn test_unordered_counts_repeats() {
    assert_values_unordered_equal(&[1, 1, 2], &[1, 2, 2]);
}

#[test]
fn test_unordered_accepts_permutation_with_repeats() {
    assert_values_unordered_equal(&["b", "a", "b"], &["b", "b", "a"]);
}

#[test]
#[should_panic(expected = "Value 1 differs: expected 5, got 2")]
fn test_assert_values_equal_reports_position() {
    assert_values_equal(&[1, 2, 3], &[1, 5, 3]);
}

#[test]
#[should_panic(expected = "Expected 3 values, got 2")]
fn test_assert_values_equal_reports_length() {
    assert_values_equal(&[1, 2], &[1, 2, 3]);
}

#[test]
#[should_panic(expected = "EntriesBuilder: cannot push")]
fn test_builder_refuses_to_overwrite_max_key() {
    let _ = EntriesBuilder::new().add_kv(i64::MAX, 'z').add_value('a');
}

#[test]
fn test_debug_inspect_passes_chain_through() {
    init_logging();

    let out = from_vec((1..=25).collect::<Vec<i32>>())
        .debug_inspect("source")
        .filter(|v, _, _| v % 5 == 0)
        .debug_count("after filter")
        .get_values();

    assert_values_equal(&out, &[5, 10, 15, 20, 25]);
}

#[test]
fn test_fixtures_shape() {
    let lang = lang_and_lib();
    assert_keys_equal(&lang.keys().cloned().collect::<Vec<_>>(), &["lang", "lib"]);
    assert_eq!(nested_records().len(), 2);
}
