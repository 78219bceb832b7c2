//! Fallible transforms.
//!
//! These borrow the chain instead of consuming it: the output is built in a
//! fresh buffer, and the first predicate error aborts the pass. On failure the
//! original chain is untouched and the error names the key being processed.

use crate::entries::Entries;
use crate::key::Key;
use crate::Chain;
use anyhow::{Context, Result};
use tracing::{debug, trace};

impl<V> Chain<V> {
    /// Like [`map`](Chain::map), with a predicate that may fail.
    ///
    /// # Errors
    /// Returns the first predicate error, with the failing key as context.
    ///
    /// # Example
    /// ```
    /// use ironchain::*;
    ///
    /// let raw = from_pairs([("a", "1"), ("b", "two")]);
    /// let err = raw.try_map(|v, _, _| v.parse::<i32>()).unwrap_err();
    /// assert!(err.to_string().contains("'b'"));
    /// assert_eq!(raw.len(), 2); // still usable
    /// ```
    pub fn try_map<O, E, F>(&self, mut f: F) -> Result<Chain<O>>
    where
        E: Into<anyhow::Error>,
        F: FnMut(&V, &Key, &Entries<V>) -> Result<O, E>,
    {
        let snapshot = &self.entries;
        let mut out = Entries::with_capacity(snapshot.len());
        for (k, v) in snapshot {
            let mapped = f(v, k, snapshot)
                .map_err(Into::<anyhow::Error>::into)
                .with_context(|| format!("map predicate failed at key '{k}'"))
                .inspect_err(|_| debug!(op = "try_map", key = %k, "predicate failed"))?;
            out.insert(k.clone(), mapped);
        }
        trace!(op = "try_map", len = out.len(), "chain transform");
        Ok(self.derive(out))
    }
}

impl<V: Clone> Chain<V> {
    /// Like [`filter`](Chain::filter), with a predicate that may fail.
    ///
    /// # Errors
    /// Returns the first predicate error, with the failing key as context.
    pub fn try_filter<E, F>(&self, mut f: F) -> Result<Self>
    where
        E: Into<anyhow::Error>,
        F: FnMut(&V, &Key, &Entries<V>) -> Result<bool, E>,
    {
        let snapshot = &self.entries;
        let mut keep = Vec::with_capacity(snapshot.len());
        for (k, v) in snapshot {
            let kept = f(v, k, snapshot)
                .map_err(Into::<anyhow::Error>::into)
                .with_context(|| format!("filter predicate failed at key '{k}'"))
                .inspect_err(|_| debug!(op = "try_filter", key = %k, "predicate failed"))?;
            keep.push(kept);
        }
        Ok(self.clone().retain_mask(&keep, "try_filter"))
    }
}
