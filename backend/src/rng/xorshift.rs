//! xorshift64* random number generator
//!
//! Fast PRNG with 64-bit state that passes BigCrush. Same seed → same
//! sequence, which makes every simulated acceptance batch reproducible.
//!
//! # Sampling
//!
//! On top of the raw stream the generator offers the two draws the choice
//! models need:
//! - [`RngManager::choose_index`]: uniform pick out of `len` candidates
//! - [`RngManager::choose_weighted`]: categorical pick proportional to weights

use serde::{Deserialize, Serialize};

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use choice_model_core_rs::RngManager;
///
/// let mut rng = RngManager::new(12345);
/// let value = rng.next();
/// let index = rng.range(0, 10); // [0, 10)
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    /// Internal state (64-bit, never zero)
    state: u64,
}

impl RngManager {
    /// Create a new RNG with given seed
    ///
    /// A zero seed is remapped to 1 (xorshift cannot leave the zero state).
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u64 value
    pub fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Generate random value in range [min, max)
    ///
    /// # Panics
    /// Panics if min >= max
    pub fn range(&mut self, min: i64, max: i64) -> i64 {
        assert!(min < max, "min must be less than max");

        let value = self.next();
        let range_size = (max - min) as u64;
        min + (value % range_size) as i64
    }

    /// Get current RNG state (for checkpointing/replay)
    ///
    /// # Example
    /// ```
    /// use choice_model_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(12345);
    /// rng.next();
    ///
    /// // Resume the same stream later
    /// let mut resumed = RngManager::new(rng.get_state());
    /// assert_eq!(rng.next(), resumed.next());
    /// ```
    pub fn get_state(&self) -> u64 {
        self.state
    }

    /// Generate random f64 in range [0.0, 1.0)
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next();
        // Top 53 bits → mantissa
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// Pick an index in `0..len` uniformly at random.
    ///
    /// Returns `None` when there is nothing to pick from.
    pub fn choose_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.range(0, len as i64) as usize)
    }

    /// Pick an index with probability proportional to its weight.
    ///
    /// Weights need not be normalized. Entries with a weight `<= 0` (or NaN) are
    /// never returned. Returns `None` if the total weight is not a positive finite
    /// number, i.e. the distribution is degenerate.
    ///
    /// # Example
    /// ```
    /// use choice_model_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(7);
    /// assert_eq!(rng.choose_weighted(&[0.0, 2.0, 0.0]), Some(1));
    /// assert_eq!(rng.choose_weighted(&[0.0, 0.0]), None);
    /// ```
    pub fn choose_weighted(&mut self, weights: &[f64]) -> Option<usize> {
        let total: f64 = weights.iter().filter(|w| **w > 0.0).sum();
        if !(total > 0.0 && total.is_finite()) {
            return None;
        }

        let mut target = self.next_f64() * total;
        let mut last_positive = None;

        for (idx, &weight) in weights.iter().enumerate() {
            if !(weight > 0.0) {
                continue;
            }
            if target < weight {
                return Some(idx);
            }
            target -= weight;
            last_positive = Some(idx);
        }

        // Rounding can leave a sliver of `target` after the last entry
        last_positive
    }
}
