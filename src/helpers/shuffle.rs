//! Seeded random permutation.

use crate::entries::Entries;
use crate::utils::SplitMix64;
use crate::Chain;
use tracing::trace;

impl<V> Chain<V> {
    /// Randomly permute the values and renumber keys to `0..n`.
    ///
    /// Uses a Fisher-Yates shuffle driven by [`SplitMix64`] seeded with
    /// `seed`; the same seed and input always give the same order.
    ///
    /// # Example
    /// ```
    /// use ironchain::*;
    ///
    /// let a = from_vec((1..=10).collect::<Vec<i32>>()).shuffle(7).get_values();
    /// let b = from_vec((1..=10).collect::<Vec<i32>>()).shuffle(7).get_values();
    /// assert_eq!(a, b);
    ///
    /// let mut sorted = a.clone();
    /// sorted.sort_unstable();
    /// assert_eq!(sorted, (1..=10).collect::<Vec<i32>>());
    /// ```
    #[must_use]
    pub fn shuffle(self, seed: u64) -> Self {
        let mut rng = SplitMix64::new(seed);
        let mut values = self.entries.into_values();
        for i in (1..values.len()).rev() {
            let j = rng.below(i + 1);
            values.swap(i, j);
        }
        trace!(op = "shuffle", len = values.len(), seed, "chain transform");
        Chain {
            entries: Entries::from_values(values),
            options: self.options,
        }
    }
}
