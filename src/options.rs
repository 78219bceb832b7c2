//! Chain configuration.
//!
//! Filtering drops entries, which leaves holes in positional keys. Whether a
//! chain keeps the surviving keys as they are or renumbers them is a
//! per-chain setting carried through every transformation.
//!
//! ```
//! use ironchain::{from_vec, ChainOptions, Key, KeyPolicy};
//!
//! let kept = from_vec(vec![1, 2, 3, 4])
//!     .filter(|v, _, _| v % 2 == 0)
//!     .get_keys();
//! assert_eq!(kept, vec![Key::Int(1), Key::Int(3)]);
//!
//! let renumbered = from_vec(vec![1, 2, 3, 4])
//!     .with_options(ChainOptions::default().with_filter_keys(KeyPolicy::Reindex))
//!     .filter(|v, _, _| v % 2 == 0)
//!     .get_keys();
//! assert_eq!(renumbered, vec![Key::Int(0), Key::Int(1)]);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What key-dropping operations do with the keys of surviving entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyPolicy {
    /// Keep original keys (possibly non-contiguous).
    #[default]
    Preserve,
    /// Renumber survivors to `0..n`.
    Reindex,
}

impl fmt::Display for KeyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preserve => f.write_str("preserve"),
            Self::Reindex => f.write_str("reindex"),
        }
    }
}

impl FromStr for KeyPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "preserve" => Ok(Self::Preserve),
            "reindex" => Ok(Self::Reindex),
            other => anyhow::bail!("unknown key policy '{other}' (expected 'preserve' or 'reindex')"),
        }
    }
}

/// Per-chain settings. Copied into every chain derived from the one they are
/// set on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainOptions {
    /// Applies to `filter`, `try_filter`, `intersect` and `diff`.
    pub filter_keys: KeyPolicy,
}

impl ChainOptions {
    #[must_use]
    pub const fn with_filter_keys(mut self, policy: KeyPolicy) -> Self {
        self.filter_keys = policy;
        self
    }
}
