//! Ordered, key-unique collections.
//!
//! [`Entries<V>`] is the storage behind every [`Chain`](crate::Chain): an
//! insertion-ordered mapping from [`Key`] to `V`.
//!
//! # Invariants
//! - Keys are unique. Inserting an existing key replaces its value **in place**,
//!   keeping the original position (last write wins).
//! - Iteration follows insertion order.
//! - [`push`](Entries::push) appends under the next integer key: one more than
//!   the largest integer key seen so far, or `0` if there has been none. Once
//!   `i64::MAX` has been used there is no next key and `push` fails; it never
//!   overwrites an existing entry.
//!
//! # Example
//! ```
//! use ironchain::{Entries, Key};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut e = Entries::new();
//! e.insert("lang", "Rust");
//! e.push("anonymous")?;
//! e.insert("lang", "Rust 2024");
//!
//! assert_eq!(e.len(), 2);
//! assert_eq!(e.get("lang"), Some(&"Rust 2024"));
//! assert_eq!(e.keys().cloned().collect::<Vec<_>>(), vec![Key::from("lang"), Key::Int(0)]);
//! # Ok(())
//! # }
//! ```

use crate::key::Key;
use anyhow::{bail, Result};
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

/// An insertion-ordered mapping with unique [`Key`]s.
#[derive(Clone)]
pub struct Entries<V> {
    items: Vec<(Key, V)>,
    index: HashMap<Key, usize>,
    // `None` once `i64::MAX` is taken.
    next_int: Option<i64>,
}

impl<V> Entries<V> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            next_int: Some(0),
        }
    }

    /// Build a zero-indexed collection (`0..n`) from a sequence of values.
    #[must_use]
    pub fn from_values(values: Vec<V>) -> Self {
        let mut out = Self::with_capacity(values.len());
        for v in values {
            out.append(v);
        }
        out
    }

    /// Insert `value` under `key`.
    ///
    /// If the key is already present its value is replaced without moving the
    /// entry, and the previous value is returned.
    pub fn insert(&mut self, key: impl Into<Key>, value: V) -> Option<V> {
        let key = key.into();
        if let Some(&pos) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.items[pos].1, value));
        }
        if let Key::Int(i) = key {
            if self.next_int.is_some_and(|next| i >= next) {
                self.next_int = i.checked_add(1);
            }
        }
        self.index.insert(key.clone(), self.items.len());
        self.items.push((key, value));
        None
    }

    /// Append `value` under the next free integer key and return that key.
    ///
    /// # Errors
    /// Fails, leaving the collection unchanged, when `i64::MAX` is already a
    /// key and no larger integer key exists.
    pub fn push(&mut self, value: V) -> Result<Key> {
        let Some(next) = self.next_int else {
            bail!("cannot push: integer key {} is taken and no larger key exists", i64::MAX);
        };
        let key = Key::Int(next);
        self.insert(key.clone(), value);
        Ok(key)
    }

    /// Append under the key equal to the current length.
    ///
    /// Only for buffers filled solely through this method, whose keys are
    /// then exactly `0..len`.
    pub(crate) fn append(&mut self, value: V) {
        let key = Key::from(self.items.len());
        self.insert(key, value);
    }

    #[must_use]
    pub fn get(&self, key: impl Into<Key>) -> Option<&V> {
        self.index.get(&key.into()).map(|&pos| &self.items[pos].1)
    }

    #[must_use]
    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.index.contains_key(&key.into())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.items.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.items.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, &V)> {
        self.items.iter().map(|(k, v)| (k, v))
    }

    /// First entry in iteration order.
    #[must_use]
    pub fn first(&self) -> Option<(&Key, &V)> {
        self.items.first().map(|(k, v)| (k, v))
    }

    /// Last entry in iteration order.
    #[must_use]
    pub fn last(&self) -> Option<(&Key, &V)> {
        self.items.last().map(|(k, v)| (k, v))
    }

    #[must_use]
    pub fn into_values(self) -> Vec<V> {
        self.items.into_iter().map(|(_, v)| v).collect()
    }

    #[must_use]
    pub fn into_keys(self) -> Vec<Key> {
        self.items.into_iter().map(|(k, _)| k).collect()
    }
}

impl<V> Default for Entries<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for Entries<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V: PartialEq> PartialEq for Entries<V> {
    /// Order-sensitive: two collections are equal when they hold the same
    /// `(key, value)` pairs in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<V: Eq> Eq for Entries<V> {}

impl<V> From<Vec<V>> for Entries<V> {
    fn from(values: Vec<V>) -> Self {
        Self::from_values(values)
    }
}

impl<K: Into<Key>, V> FromIterator<(K, V)> for Entries<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut out = Self::new();
        for (k, v) in iter {
            out.insert(k, v);
        }
        out
    }
}

impl<K: Into<Key>, V> Extend<(K, V)> for Entries<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<V> IntoIterator for Entries<V> {
    type Item = (Key, V);
    type IntoIter = std::vec::IntoIter<(Key, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a Entries<V> {
    type Item = (&'a Key, &'a V);
    type IntoIter = std::iter::Map<std::slice::Iter<'a, (Key, V)>, fn(&'a (Key, V)) -> (&'a Key, &'a V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.items
            .iter()
            .map(as_pair as fn(&'a (Key, V)) -> (&'a Key, &'a V))
    }
}

fn as_pair<V>((k, v): &(Key, V)) -> (&Key, &V) {
    (k, v)
}

// ---- serde ----

impl<V: Serialize> Serialize for Entries<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in &self.items {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct EntriesVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
    type Value = Entries<V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map or a sequence")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut out = Entries::with_capacity(access.size_hint().unwrap_or(0));
        // `Key` reads canonical integer names ("1") back as integer keys.
        while let Some((k, v)) = access.next_entry::<Key, V>()? {
            out.insert(k, v);
        }
        Ok(out)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut out = Entries::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(v) = access.next_element::<V>()? {
            out.append(v);
        }
        Ok(out)
    }
}

/// Accepts either a map (keys kept) or a sequence (zero-indexed).
impl<'de, V: Deserialize<'de>> Deserialize<'de> for Entries<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(EntriesVisitor(PhantomData))
    }
}
