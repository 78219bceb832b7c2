//! Depth-first collection of values by key in nested JSON collections.
//!
//! [`Chain::flatten_by_key`] walks a `Chain<serde_json::Value>` recursively.
//! Containers are visited in their natural order: arrays by index, objects in
//! insertion order. Only leaves (anything that is not an array or an object)
//! are candidates, and a leaf is collected when its *immediate* key equals the
//! requested one. Keys are matched by variant as well as value: array
//! positions are integer keys, object members are string keys, and top-level
//! entries use the chain's own keys.

use crate::entries::Entries;
use crate::key::Key;
use crate::Chain;
use serde_json::Value;
use tracing::trace;

impl Chain<Value> {
    /// Replace the chain with a zero-indexed sequence of every leaf found
    /// under `key`, at any depth.
    ///
    /// # Example
    /// ```
    /// use ironchain::*;
    /// use serde_json::json;
    ///
    /// let ids = from_vec(vec![
    ///     json!({"id": 1, "x": {"id": 2}}),
    ///     json!({"id": 3}),
    /// ])
    /// .flatten_by_key("id")
    /// .get_values();
    /// assert_eq!(ids, vec![json!(1), json!(2), json!(3)]);
    /// ```
    #[must_use]
    pub fn flatten_by_key(self, key: impl Into<Key>) -> Self {
        let target = key.into();
        let mut out = Entries::new();
        for (k, v) in &self.entries {
            collect_leaves(k, v, &target, &mut out);
        }
        trace!(op = "flatten_by_key", key = %target, before = self.entries.len(), after = out.len(), "chain transform");
        self.derive(out)
    }
}

fn collect_leaves(key: &Key, value: &Value, target: &Key, out: &mut Entries<Value>) {
    match value {
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                collect_leaves(&Key::from(i), item, target, out);
            }
        }
        Value::Object(members) => {
            for (name, member) in members {
                collect_leaves(&Key::from(name), member, target, out);
            }
        }
        leaf => {
            if key == target {
                out.append(leaf.clone());
            }
        }
    }
}
