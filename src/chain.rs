//! The core [`Chain`] type: construction, accessors, and element-wise transforms.
//!
//! A `Chain<V>` owns a single [`Entries<V>`] collection. Transformations take
//! the chain by value and hand back a new one, so calls compose fluently and
//! the type changes where the transform changes it (`map` from `V` to `O`).
//! Terminal accessors (`get`, `get_values`, `get_keys`, `first`, `last`,
//! `reduce`, `flip`) return plain values.
//!
//! Every predicate receives `(value, key, snapshot)`, where `snapshot` is the
//! collection as it was before the pass began. The snapshot is borrowed
//! immutably, and the output is assembled in a separate buffer that replaces
//! the old state only once the pass has finished.

use crate::entries::Entries;
use crate::key::Key;
use crate::options::{ChainOptions, KeyPolicy};
use anyhow::Result;
use serde::Serialize;
use tracing::trace;

/// A chainable, ordered key-value collection.
#[derive(Clone, Debug, PartialEq)]
pub struct Chain<V> {
    pub(crate) entries: Entries<V>,
    pub(crate) options: ChainOptions,
}

/// Start a chain over a positional collection keyed `0..n`.
///
/// # Example
/// ```
/// use ironchain::*;
///
/// let squares = from_vec(vec![1, 2, 3, 4, 5])
///     .map(|v, _, _| v * v)
///     .get_values();
/// assert_eq!(squares, vec![1, 4, 9, 16, 25]);
/// ```
#[must_use]
pub fn from_vec<V>(values: Vec<V>) -> Chain<V> {
    Chain::from(Entries::from_values(values))
}

/// Start a chain over `(key, value)` pairs, in the order given.
///
/// Repeated keys keep their first position and take the last value.
pub fn from_pairs<K, V, I>(pairs: I) -> Chain<V>
where
    K: Into<Key>,
    I: IntoIterator<Item = (K, V)>,
{
    Chain::from(pairs.into_iter().collect::<Entries<V>>())
}

/// Result of [`Chain::first`]: a single value when one was asked for,
/// otherwise a sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Taken<V> {
    One(V),
    Many(Vec<V>),
}

impl<V> Taken<V> {
    /// Flatten into a sequence regardless of shape.
    #[must_use]
    pub fn into_vec(self) -> Vec<V> {
        match self {
            Self::One(v) => vec![v],
            Self::Many(vs) => vs,
        }
    }
}

impl<V> From<Entries<V>> for Chain<V> {
    fn from(entries: Entries<V>) -> Self {
        Self {
            entries,
            options: ChainOptions::default(),
        }
    }
}

impl<V> From<Vec<V>> for Chain<V> {
    fn from(values: Vec<V>) -> Self {
        from_vec(values)
    }
}

impl<V> Chain<V> {
    /// See [`from_pairs`].
    pub fn from_pairs<K, I>(pairs: I) -> Self
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, V)>,
    {
        from_pairs(pairs)
    }

    #[must_use]
    pub fn with_options(mut self, options: ChainOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub const fn options(&self) -> ChainOptions {
        self.options
    }

    /// Wrap a new collection, carrying this chain's options over.
    pub(crate) const fn derive<O>(&self, entries: Entries<O>) -> Chain<O> {
        Chain {
            entries,
            options: self.options,
        }
    }

    // ---- terminal accessors ----

    /// The current collection with its current keys, which may be
    /// non-contiguous after filtering.
    #[must_use]
    pub const fn get(&self) -> &Entries<V> {
        &self.entries
    }

    #[must_use]
    pub fn into_entries(self) -> Entries<V> {
        self.entries
    }

    /// Values only, in iteration order, consuming the chain.
    #[must_use]
    pub fn into_values(self) -> Vec<V> {
        self.entries.into_values()
    }

    /// Current keys, in order.
    ///
    /// Handy for deduplication: fold values into a collection keyed by the
    /// repeated value (see [`reduce_into`](Chain::reduce_into)), then read the
    /// keys back.
    #[must_use]
    pub fn get_keys(&self) -> Vec<Key> {
        self.entries.keys().cloned().collect()
    }

    /// Last value in iteration order, or `None` if the chain is empty.
    #[must_use]
    pub fn last(&self) -> Option<&V> {
        self.entries.last().map(|(_, v)| v)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, &V)> {
        self.entries.iter()
    }

    // ---- transforms ----

    /// Replace every value with `f(value, key, snapshot)`. Keys are kept.
    ///
    /// # Example
    /// ```
    /// use ironchain::*;
    ///
    /// let out = from_pairs([("lang", "Rust"), ("lib", "Chain")])
    ///     .map(|v, k, _| format!("{k}={}", v.to_lowercase()))
    ///     .get_values();
    /// assert_eq!(out, vec!["lang=rust", "lib=chain"]);
    /// ```
    #[must_use]
    pub fn map<O, F>(self, mut f: F) -> Chain<O>
    where
        F: FnMut(&V, &Key, &Entries<V>) -> O,
    {
        let snapshot = &self.entries;
        let mut out = Entries::with_capacity(snapshot.len());
        for (k, v) in snapshot {
            out.insert(k.clone(), f(v, k, snapshot));
        }
        trace!(op = "map", len = out.len(), "chain transform");
        self.derive(out)
    }

    /// Keep the entries for which `f(value, key, snapshot)` is true.
    ///
    /// Surviving keys are kept or renumbered according to the chain's
    /// [`KeyPolicy`] (kept by default).
    ///
    /// # Example
    /// ```
    /// use ironchain::*;
    ///
    /// let odd = from_pairs([("one", 1), ("two", 2), ("three", 3)])
    ///     .filter(|v, _, _| v % 2 == 1);
    /// assert_eq!(odd.get_keys(), vec![Key::from("one"), Key::from("three")]);
    /// assert_eq!(odd.get_values(), vec![1, 3]);
    /// ```
    #[must_use]
    pub fn filter<F>(self, mut f: F) -> Self
    where
        F: FnMut(&V, &Key, &Entries<V>) -> bool,
    {
        let keep: Vec<bool> = self
            .entries
            .iter()
            .map(|(k, v)| f(v, k, &self.entries))
            .collect();
        self.retain_mask(&keep, "filter")
    }

    /// Renumber keys to `0..n`, keeping order.
    #[must_use]
    pub fn reindex(self) -> Self {
        let options = self.options;
        let entries = Entries::from_values(self.entries.into_values());
        trace!(op = "reindex", len = entries.len(), "chain transform");
        Self { entries, options }
    }

    /// Keep entries whose slot in `keep` is true, applying the key policy.
    pub(crate) fn retain_mask(self, keep: &[bool], op: &'static str) -> Self {
        let Self { entries, options } = self;
        let before = entries.len();
        let mut out = Entries::with_capacity(before);
        for ((k, v), &kept) in entries.into_iter().zip(keep) {
            if !kept {
                continue;
            }
            match options.filter_keys {
                KeyPolicy::Preserve => {
                    out.insert(k, v);
                }
                KeyPolicy::Reindex => {
                    out.append(v);
                }
            }
        }
        trace!(op, before, after = out.len(), policy = %options.filter_keys, "chain transform");
        Self {
            entries: out,
            options,
        }
    }
}

impl<V: Clone> Chain<V> {
    /// Values only, as a fresh zero-indexed sequence in iteration order.
    #[must_use]
    pub fn get_values(&self) -> Vec<V> {
        self.entries.values().cloned().collect()
    }

    /// The first `amount` values in iteration order.
    ///
    /// - `None` when the chain is empty or `amount` is `0`.
    /// - `Taken::One` when `amount` is `1`: the value itself, not a one-element list.
    /// - `Taken::Many` otherwise, holding at most `amount` values; asking for
    ///   more than there are returns them all.
    ///
    /// # Example
    /// ```
    /// use ironchain::*;
    ///
    /// let c = from_vec(vec![1, 2, 3, 4, 5]);
    /// assert_eq!(c.first(3), Some(Taken::Many(vec![1, 2, 3])));
    /// assert_eq!(c.first(1), Some(Taken::One(1)));
    /// assert_eq!(from_vec(Vec::<i32>::new()).first(1), None);
    /// ```
    #[must_use]
    pub fn first(&self, amount: usize) -> Option<Taken<V>> {
        if self.entries.is_empty() || amount < 1 {
            return None;
        }
        if amount == 1 {
            return self.entries.first().map(|(_, v)| Taken::One(v.clone()));
        }
        Some(Taken::Many(
            self.entries.values().take(amount).cloned().collect(),
        ))
    }
}

impl<V: Serialize> Chain<V> {
    /// Render the current collection as a JSON object (keys as strings).
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(&self.entries)?)
    }
}

impl<V> IntoIterator for Chain<V> {
    type Item = (Key, V);
    type IntoIter = std::vec::IntoIter<(Key, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
