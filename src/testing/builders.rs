//! Test data builders for creating keyed test collections fluently.

use crate::entries::Entries;
use crate::key::Key;
use crate::Chain;
use std::ops::RangeInclusive;

/// A fluent builder for [`Entries`] test data.
///
/// Mixes named and positional entries the way hand-written fixtures often
/// do. Positional values take the next free integer key.
///
/// # Example
///
/// ```
/// use ironchain::testing::EntriesBuilder;
///
/// let data = EntriesBuilder::new()
///     .add_kv("lang", "Rust")
///     .add_value("positional")
///     .add_repeated("again", 2)
///     .build();
///
/// assert_eq!(data.len(), 4);
/// ```
#[derive(Default)]
pub struct EntriesBuilder<V> {
    data: Entries<V>,
}

impl<V> EntriesBuilder<V> {
    /// Create a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: Entries::new(),
        }
    }

    /// Add a value under an explicit key.
    #[must_use]
    pub fn add_kv(mut self, key: impl Into<Key>, value: V) -> Self {
        self.data.insert(key, value);
        self
    }

    /// Add a value under the next free integer key.
    ///
    /// # Panics
    /// If the collection already holds the key `i64::MAX`, as do the other
    /// positional adders.
    #[must_use]
    pub fn add_value(mut self, value: V) -> Self {
        self.push(value);
        self
    }

    /// Add several positional values.
    #[must_use]
    pub fn add_values(mut self, values: Vec<V>) -> Self {
        for v in values {
            self.push(v);
        }
        self
    }

    /// Add a repeated value, each under its own integer key.
    #[must_use]
    pub fn add_repeated(mut self, value: V, count: usize) -> Self
    where
        V: Clone,
    {
        for _ in 0..count {
            self.push(value.clone());
        }
        self
    }

    fn push(&mut self, value: V) {
        if let Err(e) = self.data.push(value) {
            panic!("EntriesBuilder: {e}");
        }
    }

    /// Build and return the collection.
    #[must_use]
    pub fn build(self) -> Entries<V> {
        self.data
    }

    /// Build straight into a [`Chain`].
    #[must_use]
    pub fn build_chain(self) -> Chain<V> {
        Chain::from(self.data)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<V: From<i32>> EntriesBuilder<V> {
    /// Add a range of positional values.
    ///
    /// # Example
    ///
    /// ```
    /// use ironchain::testing::EntriesBuilder;
    ///
    /// let data = EntriesBuilder::<i64>::new().add_range(1..=5).build();
    /// assert_eq!(data.into_values(), vec![1, 2, 3, 4, 5]);
    /// ```
    #[must_use]
    pub fn add_range(mut self, range: RangeInclusive<i32>) -> Self {
        for i in range {
            self.push(V::from(i));
        }
        self
    }
}
