use ironchain::testing::*;
use ironchain::*;

#[test]
fn shuffle_is_a_permutation() {
    let input: Vec<i32> = (0..50).collect();
    let out = from_vec(input.clone()).shuffle(1234).get_values();
    assert_values_unordered_equal(&out, &input);
}

#[test]
fn shuffle_is_deterministic_per_seed() {
    let a = Chain::from(numbers_by_name()).shuffle(9).into_values();
    let b = Chain::from(numbers_by_name()).shuffle(9).into_values();
    assert_eq!(a, b);
}

#[test]
fn shuffle_changes_order_for_some_seed() {
    let input: Vec<i32> = (0..20).collect();
    let moved = (0..8u64).any(|seed| from_vec(input.clone()).shuffle(seed).get_values() != input);
    assert!(moved);
}

#[test]
fn shuffle_discards_original_keys() {
    let out = Chain::from(numbers_by_name()).shuffle(3);
    assert_keys_equal(&out.get_keys(), &[0, 1, 2, 3, 4]);
}

#[test]
fn shuffle_of_empty_and_single() {
    assert!(from_vec(Vec::<u8>::new()).shuffle(1).is_empty());
    assert_eq!(from_pairs([("only", 'x')]).shuffle(1).get_values(), vec!['x']);
}
