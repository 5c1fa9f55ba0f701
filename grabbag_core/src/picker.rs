use crate::item::Item;
use crate::pool::{Pool, PoolError};
use rand::Rng;
use rand_core::RngCore;

/// A `Picker` selects items from a fixed pool, one per call.
///
/// Implementations decide the selection policy; the caller supplies the
/// randomness. A picker is single-threaded state: callers that share one
/// across threads must serialize access themselves, since a selection
/// mutates internal bookkeeping in multiple steps.
pub trait Picker<I: Item>: Send + Sync {
    /// Selects and returns the next item.
    ///
    /// # Arguments
    /// * `rng`: A mutable reference to a random number generator, to be used
    ///   if the picker's policy involves randomness.
    ///
    /// # Returns
    /// A clone of the selected item. Total: a picker can only be built over
    /// a non-empty pool, so there is always something to return.
    fn draw(&mut self, rng: &mut dyn RngCore) -> I;

    /// Returns how many items are still eligible in the current cycle.
    ///
    /// Reaches 0 when a cycle has been exhausted; the next `draw` starts a
    /// fresh cycle over the full pool.
    fn remaining(&self) -> usize;
}

/// A `Picker` that returns every pool item exactly once, in uniformly random
/// order, before any item repeats.
///
/// Each draw removes one item from the eligible set. Once the set is empty
/// the next draw replenishes it to the full pool and the cycle starts over,
/// indefinitely. Only the no-repeat-within-cycle property is guaranteed;
/// consecutive cycles may or may not produce the same order.
#[derive(Debug, Clone)]
pub struct ExhaustiveRandomPicker<I: Item> {
    pool: Pool<I>,
    /// Pool indices not yet drawn in the current cycle.
    eligible: Vec<usize>,
}

impl<I: Item> ExhaustiveRandomPicker<I> {
    /// Creates a picker over `pool` with every item eligible.
    pub fn new(pool: Pool<I>) -> Self {
        let eligible = (0..pool.len()).collect();
        Self { pool, eligible }
    }

    /// Convenience constructor that builds the pool from `items`.
    ///
    /// # Returns
    /// The picker, or `PoolError::InvalidConfiguration` if `items` is empty.
    pub fn from_items(items: Vec<I>) -> Result<Self, PoolError> {
        Ok(Self::new(Pool::new(items)?))
    }

    /// Returns the pool this picker draws from.
    pub fn pool(&self) -> &Pool<I> {
        &self.pool
    }
}

impl<I: Item> Picker<I> for ExhaustiveRandomPicker<I> {
    fn draw(&mut self, rng: &mut dyn RngCore) -> I {
        // Lazy reset: an exhausted cycle is replenished on the draw that
        // follows it, not on the draw that emptied it.
        if self.eligible.is_empty() {
            self.eligible.extend(0..self.pool.len());
        }
        let slot = rng.random_range(0..self.eligible.len());
        let id = self.eligible.swap_remove(slot);
        self.pool.as_slice()[id].clone()
    }

    fn remaining(&self) -> usize {
        self.eligible.len()
    }
}
