//! Pre-built test collections for common scenarios.

use crate::entries::Entries;
use serde_json::{json, Value};

/// `{one: 1, two: 2, three: 3, four: 4, five: 5}`, in that order.
///
/// # Example
///
/// ```
/// use ironchain::testing::numbers_by_name;
///
/// let n = numbers_by_name();
/// assert_eq!(n.get("three"), Some(&3));
/// ```
#[must_use]
pub fn numbers_by_name() -> Entries<i64> {
    [("one", 1), ("two", 2), ("three", 3), ("four", 4), ("five", 5)]
        .into_iter()
        .collect()
}

/// `{lang: "Rust", lib: "Chain"}`.
#[must_use]
pub fn lang_and_lib() -> Entries<String> {
    [("lang", "Rust"), ("lib", "Chain")]
        .into_iter()
        .map(|(k, v)| (k, v.to_string()))
        .collect()
}

/// Nested order records, for exercising
/// [`flatten_by_key`](crate::Chain::flatten_by_key).
///
/// Every `id` in depth-first order: `100, 1, 2, 200, 3`.
#[must_use]
pub fn nested_records() -> Vec<Value> {
    vec![
        json!({
            "id": 100,
            "customer": "ann",
            "lines": [
                {"id": 1, "sku": "A-1", "qty": 2},
                {"id": 2, "sku": "B-7", "qty": 1}
            ]
        }),
        json!({
            "id": 200,
            "customer": "bob",
            "lines": [
                {"id": 3, "sku": "A-1", "qty": 5}
            ],
            "notes": []
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_by_name_keeps_declaration_order() {
        let keys: Vec<String> = numbers_by_name().keys().map(ToString::to_string).collect();
        assert_eq!(keys, vec!["one", "two", "three", "four", "five"]);
    }

    #[test]
    fn nested_records_are_objects() {
        assert!(nested_records().iter().all(Value::is_object));
    }
}
