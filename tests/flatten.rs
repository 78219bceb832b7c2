use ironchain::testing::*;
use ironchain::*;
use serde_json::{json, Value};

#[test]
fn flatten_by_key_walks_depth_first() {
    let out = from_vec(vec![json!({"id": 1, "x": {"id": 2}}), json!({"id": 3})])
        .flatten_by_key("id");

    assert_values_equal(&out.get_values(), &[json!(1), json!(2), json!(3)]);
    assert_keys_equal(&out.get_keys(), &[0, 1, 2]);
}

#[test]
fn flatten_by_key_follows_object_insertion_order() {
    let out = from_vec(vec![json!({"z": {"id": "first"}, "a": {"id": "second"}, "id": "third"})])
        .flatten_by_key("id")
        .into_values();

    assert_eq!(out, vec![json!("first"), json!("second"), json!("third")]);
}

#[test]
fn flatten_by_key_on_fixture_records() {
    let ids = from_vec(nested_records()).flatten_by_key("id").into_values();
    assert_eq!(ids, vec![json!(100), json!(1), json!(2), json!(200), json!(3)]);

    let skus = from_vec(nested_records()).flatten_by_key("sku").into_values();
    assert_eq!(skus, vec![json!("A-1"), json!("B-7"), json!("A-1")]);
}

#[test]
fn top_level_chain_keys_take_part_in_matching() {
    let out = from_pairs([
        ("id", json!(9)),
        ("other", json!({"id": 10})),
        ("id2", json!(11)),
    ])
    .flatten_by_key("id")
    .into_values();

    assert_eq!(out, vec![json!(9), json!(10)]);
}

#[test]
fn null_leaves_are_collected() {
    let out = from_vec(vec![json!({"id": null}), json!({"id": false})])
        .flatten_by_key("id")
        .into_values();
    assert_eq!(out, vec![Value::Null, json!(false)]);
}

#[test]
fn no_match_yields_empty_chain() {
    let out = from_vec(nested_records()).flatten_by_key("missing");
    assert!(out.is_empty());
    assert_eq!(out.first(1), None);
}

#[test]
fn flattened_chain_keeps_chaining() {
    let total = from_vec(nested_records())
        .flatten_by_key("qty")
        .reduce(0, |acc, v, _, _| acc + v.as_i64().unwrap_or(0));
    assert_eq!(total, 8);
}
