//! Swapping keys and values.

use crate::entries::Entries;
use crate::key::{AsKey, Key};
use crate::Chain;
use anyhow::{anyhow, Result};
use tracing::{debug, trace};

impl<V: AsKey> Chain<V> {
    /// Terminal: a new collection mapping each value to its key.
    ///
    /// When several entries share a value, the last one wins, and the flipped
    /// entry sits where that value was first seen.
    ///
    /// # Errors
    /// Fails if a value cannot be used as a key (see [`AsKey`]); the error
    /// names the key of the offending entry.
    ///
    /// # Example
    /// ```
    /// use ironchain::*;
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let flipped = from_pairs([("a", "x"), ("b", "x")]).flip()?;
    /// assert_eq!(flipped.get("x"), Some(&Key::from("b")));
    /// assert_eq!(flipped.len(), 1);
    /// # Ok(())
    /// # }
    /// ```
    pub fn flip(&self) -> Result<Entries<Key>> {
        let mut out = Entries::with_capacity(self.entries.len());
        for (k, v) in &self.entries {
            let Some(as_key) = v.to_key() else {
                debug!(key = %k, "flip: value is not usable as a key");
                return Err(anyhow!("cannot flip entry '{k}': only integer and string values can become keys"));
            };
            out.insert(as_key, k.clone());
        }
        trace!(op = "flip", before = self.entries.len(), after = out.len(), "chain flip");
        Ok(out)
    }
}
