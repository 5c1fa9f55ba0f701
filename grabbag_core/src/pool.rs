use crate::item::Item;
use thiserror::Error;

/// Errors that can occur when building a pool.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PoolError {
    /// The supplied item list was empty. A picker over zero items has
    /// nothing to draw, so construction is rejected outright.
    #[error("Pool must contain at least one item")]
    InvalidConfiguration,
}

/// The fixed set of items a picker draws from.
///
/// A `Pool` is an ordered sequence of opaque values, validated non-empty at
/// construction and immutable afterwards. Pickers refer to pool entries by
/// index, so the order established here is stable for the pool's lifetime.
#[derive(Debug, Clone)]
pub struct Pool<I: Item> {
    items: Vec<I>,
}

impl<I: Item> Pool<I> {
    /// Builds a pool from `items`.
    ///
    /// # Returns
    /// The pool, or `PoolError::InvalidConfiguration` if `items` is empty.
    pub fn new(items: Vec<I>) -> Result<Self, PoolError> {
        if items.is_empty() {
            return Err(PoolError::InvalidConfiguration);
        }
        Ok(Self { items })
    }

    /// Returns the number of items in the pool. Always at least 1.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false` for a validly constructed pool; provided for symmetry
    /// with standard collection APIs.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the items in construction order.
    pub fn as_slice(&self) -> &[I] {
        &self.items
    }

    /// Iterates over the items in construction order.
    pub fn iter(&self) -> std::slice::Iter<'_, I> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_with_empty_items_returns_invalid_configuration() {
        let result: Result<Pool<String>, PoolError> = Pool::new(Vec::new());
        assert_eq!(
            result.unwrap_err(),
            PoolError::InvalidConfiguration,
            "An empty item list must be rejected at construction"
        );
    }

    #[test]
    fn new_with_items_preserves_length_and_order() {
        let pool = Pool::new(vec!["a".to_string(), "b".to_string(), "c".to_string()])
            .expect("Three items should form a valid pool");
        assert_eq!(pool.len(), 3);
        assert!(!pool.is_empty());
        assert_eq!(pool.as_slice(), &["a", "b", "c"]);
        assert_eq!(
            pool.iter().cloned().collect::<Vec<_>>(),
            vec!["a", "b", "c"],
            "Iteration order should match construction order"
        );
    }
}
