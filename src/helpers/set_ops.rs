//! Predicate-driven set operations against another sequence.
//!
//! Both operations scan `other` once per entry (O(n·m)); `other` needs no
//! ordering. Entries are never reordered, and key handling follows the
//! chain's [`KeyPolicy`](crate::KeyPolicy) like [`Chain::filter`].
//!
//! For any predicate and `other`, `intersect` and `diff` split the chain into
//! two disjoint parts whose union is the original collection.

use crate::Chain;

impl<V> Chain<V> {
    /// Keep entries for which some element of `other` satisfies
    /// `f(ours, theirs)`.
    ///
    /// # Example
    /// ```
    /// use ironchain::*;
    ///
    /// let users = from_pairs([("ann", 1), ("bob", 2), ("cid", 3)]);
    /// let active = [3, 1];
    /// let out = users.intersect(|ours, theirs| ours == theirs, &active);
    /// assert_eq!(out.get_keys(), vec![Key::from("ann"), Key::from("cid")]);
    /// ```
    #[must_use]
    pub fn intersect<W, F>(self, mut f: F, other: &[W]) -> Self
    where
        F: FnMut(&V, &W) -> bool,
    {
        let keep: Vec<bool> = self
            .entries
            .values()
            .map(|ours| other.iter().any(|theirs| f(ours, theirs)))
            .collect();
        self.retain_mask(&keep, "intersect")
    }

    /// Keep entries for which no element of `other` satisfies
    /// `f(ours, theirs)`.
    ///
    /// # Example
    /// ```
    /// use ironchain::*;
    ///
    /// let out = from_vec(vec![1, 2, 3, 4]).diff(|a, b| a == b, &[2, 4]);
    /// assert_eq!(out.get_values(), vec![1, 3]);
    /// assert_eq!(out.get_keys(), vec![Key::Int(0), Key::Int(2)]);
    /// ```
    #[must_use]
    pub fn diff<W, F>(self, mut f: F, other: &[W]) -> Self
    where
        F: FnMut(&V, &W) -> bool,
    {
        let keep: Vec<bool> = self
            .entries
            .values()
            .map(|ours| !other.iter().any(|theirs| f(ours, theirs)))
            .collect();
        self.retain_mask(&keep, "diff")
    }
}
