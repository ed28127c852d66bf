use crate::pool::combinations::Combinations;
use crate::pool::errors::PoolError;
use crate::pool::validation::{validate_combination_size, validate_pool_values};

pub const DEFAULT_POOL_MIN: u32 = 1;
pub const DEFAULT_POOL_MAX: u32 = 25;

/// Distinct positive integers that puzzle numbers are drawn from, kept in
/// ascending order so every combination comes out canonical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberPool {
    values: Vec<u32>,
}

impl NumberPool {
    /// # Errors
    ///
    /// See [`validate_pool_values`].
    pub fn new(mut values: Vec<u32>) -> Result<Self, PoolError> {
        validate_pool_values(&values)?;
        values.sort_unstable();
        Ok(Self { values })
    }

    /// The pool `min..=max`.
    ///
    /// # Errors
    ///
    /// Returns an error when `min` is zero or greater than `max`.
    pub fn range(min: u32, max: u32) -> Result<Self, PoolError> {
        if min > max {
            return Err(PoolError::InvalidRange { min, max });
        }
        Self::new((min..=max).collect())
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Every `size`-subset of the pool in lexicographic order.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is zero or larger than the pool.
    pub fn combinations(&self, size: usize) -> Result<Combinations<'_>, PoolError> {
        validate_combination_size(size, self.values.len())?;
        Ok(Combinations::new(&self.values, size))
    }
}

impl Default for NumberPool {
    fn default() -> Self {
        Self {
            values: (DEFAULT_POOL_MIN..=DEFAULT_POOL_MAX).collect(),
        }
    }
}

impl TryFrom<Vec<u32>> for NumberPool {
    type Error = PoolError;

    fn try_from(values: Vec<u32>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}
