//! Debug utilities for inspecting chains during test execution.
//!
//! This module provides an extension trait that adds logging hooks to
//! [`Chain`] without breaking the fluent call sequence. Output goes through
//! `tracing` at `debug` level, so install a subscriber to see it.

use crate::Chain;
use std::fmt::Debug;
use tracing::debug;

/// Entries shown per inspection.
const PREVIEW: usize = 10;

/// Extension trait with debug hooks for chains.
pub trait DebugInspect: Sized {
    /// Log the size and the first few entries, then pass the chain through.
    #[must_use]
    fn debug_inspect(self, label: &str) -> Self;

    /// Log only the size, then pass the chain through.
    #[must_use]
    fn debug_count(self, label: &str) -> Self;
}

impl<V: Debug> DebugInspect for Chain<V> {
    fn debug_inspect(self, label: &str) -> Self {
        debug!(label, len = self.len(), "chain inspect");
        for (i, (k, v)) in self.iter().take(PREVIEW).enumerate() {
            debug!(label, "[{i}] {k} => {v:?}");
        }
        if self.len() > PREVIEW {
            debug!(label, "... ({} more entries)", self.len() - PREVIEW);
        }
        self
    }

    fn debug_count(self, label: &str) -> Self {
        debug!(label, len = self.len(), "chain count");
        self
    }
}
