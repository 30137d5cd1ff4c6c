//! Construction parameters for [`BinomialHeap`](crate::binomial::BinomialHeap).
//!
//! The forest holds one slot per tree order, so the number of slots bounds the
//! number of keys a heap can hold: a heap with `max_order` slots stores at most
//! `2^max_order - 1` keys (every slot occupied, like an all-ones binary number).

use crate::traits::HeapError;

/// Number of forest slots used by [`HeapConfig::default`].
///
/// 32 slots hold a little over four billion keys.
pub const DEFAULT_MAX_ORDER: usize = 32;

/// Largest accepted `max_order`.
///
/// Capacity is computed as `2^max_order - 1` in a `u64`, so 63 is the last
/// order whose capacity does not overflow.
pub const MAX_SUPPORTED_ORDER: usize = 63;

/// Heap configuration
///
/// # Example
///
/// ```rust
/// use binomial_queue::config::HeapConfig;
///
/// let config = HeapConfig::default().with_max_order(4);
/// assert_eq!(config.capacity(), 15);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapConfig {
    /// Number of forest slots; trees of order `0..max_order` are representable
    pub max_order: usize,
}

impl Default for HeapConfig {
    fn default() -> Self {
        Self {
            max_order: DEFAULT_MAX_ORDER,
        }
    }
}

impl HeapConfig {
    /// Returns a copy of this configuration with a different slot count
    pub fn with_max_order(mut self, max_order: usize) -> Self {
        self.max_order = max_order;
        self
    }

    /// Checks that `max_order` lies in `1..=MAX_SUPPORTED_ORDER`
    pub fn validate(&self) -> Result<(), HeapError> {
        if self.max_order == 0 || self.max_order > MAX_SUPPORTED_ORDER {
            return Err(HeapError::InvalidMaxOrder {
                max_order: self.max_order,
                limit: MAX_SUPPORTED_ORDER,
            });
        }
        Ok(())
    }

    /// Maximum number of keys a heap with this configuration can hold
    ///
    /// Saturates at `u64::MAX` for configurations that fail [`validate`](Self::validate).
    pub fn capacity(&self) -> u64 {
        if self.max_order >= 64 {
            return u64::MAX;
        }
        (1u64 << self.max_order) - 1
    }
}
