use std::collections::HashSet;

use log::{debug, warn};

use crate::pool::errors::PoolError;

/// # Errors
///
/// Returns an error if the values are empty, contain zero, or repeat a value.
pub fn validate_pool_values(values: &[u32]) -> Result<(), PoolError> {
    debug!("Validating number pool of {} values", values.len());

    if values.is_empty() {
        warn!("Number pool is empty");
        return Err(PoolError::EmptyPool);
    }

    let mut seen = HashSet::with_capacity(values.len());
    for &value in values {
        if value == 0 {
            warn!("Number pool contains a non-positive value");
            return Err(PoolError::NonPositiveValue(value));
        }
        if !seen.insert(value) {
            warn!("Number pool repeats {}", value);
            return Err(PoolError::DuplicateValue(value));
        }
    }

    debug!("Number pool validation successful");
    Ok(())
}

/// # Errors
///
/// Returns an error if `size` is zero or exceeds the pool length.
pub fn validate_combination_size(size: usize, pool_len: usize) -> Result<(), PoolError> {
    if size == 0 || size > pool_len {
        warn!(
            "Combination size {} does not fit a pool of {}",
            size, pool_len
        );
        return Err(PoolError::InvalidCombinationSize { size, pool_len });
    }
    Ok(())
}
