//! Utility types for ironchain.

/// A tiny seedable PRNG (`SplitMix64`).
///
/// Equal seeds produce equal streams, which keeps randomized operations such
/// as [`Chain::shuffle`](crate::Chain::shuffle) reproducible in tests.
///
/// # Examples
///
/// ```
/// use ironchain::utils::SplitMix64;
///
/// let mut a = SplitMix64::new(42);
/// let mut b = SplitMix64::new(42);
/// assert_eq!(a.next_u64(), b.next_u64());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    #[inline]
    pub const fn next_u64(&mut self) -> u64 {
        let mut z = {
            self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
            self.state
        };
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform integer in `0..bound`. `bound` must be non-zero.
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub fn below(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0);
        // Lemire's multiply-shift; bias is negligible for collection-sized bounds.
        ((u128::from(self.next_u64()) * bound as u128) >> 64) as usize
    }
}
