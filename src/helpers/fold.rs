//! Folding a chain down to a single value.
//!
//! - [`Chain::reduce`] is terminal: it returns the accumulator itself.
//! - [`Chain::reduce_into`] folds into a fresh [`Entries`] collection and keeps
//!   chaining, which covers the "collapse into a map keyed by the repeated
//!   value, then read the keys" deduplication workflow.

use crate::entries::Entries;
use crate::key::Key;
use crate::Chain;
use tracing::trace;

impl<V> Chain<V> {
    /// Left-to-right fold over `(value, key, snapshot)` in iteration order.
    ///
    /// # Example
    /// ```
    /// use ironchain::*;
    ///
    /// let total = from_vec(vec![1, 2, 3, 4]).reduce(0, |acc, v, _, _| acc + v);
    /// assert_eq!(total, 10);
    /// ```
    pub fn reduce<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, &V, &Key, &Entries<V>) -> A,
    {
        let snapshot = &self.entries;
        let acc = snapshot
            .iter()
            .fold(init, |acc, (k, v)| f(acc, v, k, snapshot));
        trace!(op = "reduce", len = snapshot.len(), "chain fold");
        acc
    }

    /// Fold into a new key-value collection and continue the chain over it.
    ///
    /// The accumulator starts empty; `f` inserts into it as it sees fit.
    ///
    /// # Example
    /// ```
    /// use ironchain::*;
    ///
    /// let unique = from_vec(vec!["b", "a", "b", "c", "a"])
    ///     .reduce_into(|acc: &mut Entries<usize>, v, _, _| {
    ///         let seen = acc.get(*v).copied().unwrap_or(0);
    ///         acc.insert(*v, seen + 1);
    ///     })
    ///     .get_keys();
    /// assert_eq!(unique, vec![Key::from("b"), Key::from("a"), Key::from("c")]);
    /// ```
    #[must_use]
    pub fn reduce_into<W, F>(self, mut f: F) -> Chain<W>
    where
        F: FnMut(&mut Entries<W>, &V, &Key, &Entries<V>),
    {
        let snapshot = &self.entries;
        let mut acc = Entries::new();
        for (k, v) in snapshot {
            f(&mut acc, v, k, snapshot);
        }
        trace!(op = "reduce_into", before = snapshot.len(), after = acc.len(), "chain fold");
        self.derive(acc)
    }
}
