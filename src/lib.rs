//! # Ironchain
//!
//! A **fluent wrapper** for transforming ordered key-value collections.
//! Ironchain wraps a collection in a [`Chain`], applies a sequence of
//! transformations to it, and hands back the result through a terminal
//! accessor.
//!
//! ## Key Features
//!
//! - **Fluent API** - every transform returns a chain, so calls compose left to right
//! - **Ordered, key-unique storage** - insertion order is kept, keys never repeat
//! - **Integer or string keys** - positional and named collections behave the same way
//! - **Snapshot isolation** - predicates see the collection as it was before the pass
//! - **Atomic fallible transforms** - a failing predicate leaves the chain untouched
//! - **Configurable re-keying** - keep or renumber keys after filtering
//!
//! ## Quick Start
//!
//! ```
//! use ironchain::*;
//!
//! let odd = from_pairs([("one", 1), ("two", 2), ("three", 3), ("four", 4), ("five", 5)])
//!     .filter(|v, _, _| v % 2 == 1);
//!
//! assert_eq!(odd.get_keys(), vec![Key::from("one"), Key::from("three"), Key::from("five")]);
//! assert_eq!(odd.get_values(), vec![1, 3, 5]);
//! ```
//!
//! ## Core Concepts
//!
//! ### Entries
//!
//! [`Entries<V>`] is an insertion-ordered mapping from [`Key`] to `V`. A key
//! is either an integer or a string. Inserting an existing key overwrites its
//! value in place; appending with [`Entries::push`] picks the next integer key.
//!
//! ### Chain
//!
//! A [`Chain<V>`] owns one `Entries<V>`. Create one with [`from_vec`],
//! [`from_pairs`], or `Chain::from(entries)`; the input is moved in.
//!
//! #### Transforms (return a chain)
//! - [`map`](Chain::map) - replace each value, keeping keys
//! - [`filter`](Chain::filter) - keep entries matching a predicate
//! - [`reindex`](Chain::reindex) - renumber keys to `0..n`
//! - [`intersect`](Chain::intersect) / [`diff`](Chain::diff) - keep entries that do / do not match another sequence
//! - [`flatten_by_key`](Chain::flatten_by_key) - collect leaves under a key from nested JSON
//! - [`shuffle`](Chain::shuffle) - seeded random permutation
//! - [`reduce_into`](Chain::reduce_into) - fold into a new keyed collection
//! - [`try_map`](Chain::try_map) / [`try_filter`](Chain::try_filter) - fallible variants
//!
//! #### Terminal accessors (return plain values)
//! - [`get`](Chain::get) / [`get_values`](Chain::get_values) / [`get_keys`](Chain::get_keys)
//! - [`first`](Chain::first) / [`last`](Chain::last)
//! - [`reduce`](Chain::reduce) - fold to a single value
//! - [`flip`](Chain::flip) - swap keys and values
//!
//! ### Predicates
//!
//! Predicates for `map`, `filter`, `reduce` and their variants receive
//! `(value, key, snapshot)`. Ignore what you do not need with `_`:
//!
//! ```
//! use ironchain::*;
//!
//! let tagged = from_pairs([("lang", "Rust"), ("lib", "Chain")])
//!     .map(|v, k, all| format!("{k}:{v} of {}", all.len()))
//!     .into_values();
//! assert_eq!(tagged, vec!["lang:Rust of 2", "lib:Chain of 2"]);
//! ```
//!
//! ## Configuration
//!
//! [`ChainOptions`] travels with a chain. Its [`KeyPolicy`] decides whether
//! key-dropping operations keep the surviving keys (the default) or renumber
//! them. See the [`options`] module.
//!
//! ## Errors and logging
//!
//! Fallible operations return [`anyhow::Result`]. Transforms emit `tracing`
//! events at `trace` level; failures are logged at `debug`.
//!
//! ## Module Overview
//!
//! - [`chain`] - Core `Chain` type, accessors, `map`, `filter`
//! - [`entries`] - Ordered key-unique storage
//! - [`key`] - Integer-or-string keys
//! - [`options`] - Per-chain configuration
//! - [`helpers`] - Folds, set operations, flattening, flipping, shuffling, fallible transforms
//! - [`testing`] - Assertions, builders and fixtures for tests
//! - [`utils`] - Seedable PRNG

pub mod chain;
pub mod entries;
pub mod helpers;
pub mod key;
pub mod options;
pub mod testing;
pub mod utils;

// General re-exports
pub use chain::{from_pairs, from_vec, Chain, Taken};
pub use entries::Entries;
pub use key::{AsKey, Key};
pub use options::{ChainOptions, KeyPolicy};
