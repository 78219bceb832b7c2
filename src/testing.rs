//! Testing utilities for ironchain.
//!
//! This module provides helpers for writing idiomatic Rust tests against
//! chains. It includes:
//!
//! - **Assertions**: Compare chain outputs with expected results
//! - **Test data builders**: Build keyed collections easily
//! - **Debug utilities**: Log chains mid-sequence
//! - **Fixtures**: Pre-built collections for common scenarios
//!
//! # Quick Start
//!
//! ```
//! use ironchain::*;
//! use ironchain::testing::*;
//!
//! let odd = Chain::from(numbers_by_name()).filter(|v, _, _| v % 2 == 1);
//! assert_entries_equal(odd.get(), &[("one", 1), ("three", 3), ("five", 5)]);
//! assert_values_equal(&odd.get_values(), &[1, 3, 5]);
//! ```
//!
//! # Assertion Functions
//!
//! - [`assert_entries_equal`]: Ordered `(key, value)` comparison
//! - [`assert_values_equal`]: Ordered value comparison
//! - [`assert_keys_equal`]: Ordered key comparison
//! - [`assert_values_unordered_equal`]: Order-independent comparison
//! - [`assert_all`]: Verify all values match a predicate
//!
//! # Logging in tests
//!
//! Library code logs through `tracing` and never installs a subscriber. Test
//! binaries that want the output call
//! `tracing_subscriber::fmt().with_test_writer().try_init()` and ignore the
//! error when another test got there first.

pub mod assertions;
pub mod builders;
pub mod debug;
pub mod fixtures;

// Re-export commonly used items
pub use assertions::*;
pub use builders::*;
pub use debug::*;
pub use fixtures::*;
