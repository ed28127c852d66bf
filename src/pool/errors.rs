use thiserror::Error;

/// Errors raised while configuring the pool or enumerating combinations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PoolError {
    #[error("Number pool cannot be empty")]
    EmptyPool,
    #[error("Number pool values must be positive, found {0}")]
    NonPositiveValue(u32),
    #[error("Number pool values must be distinct, {0} appears more than once")]
    DuplicateValue(u32),
    #[error("Invalid pool range: min={min}, max={max}")]
    InvalidRange { min: u32, max: u32 },
    #[error("Invalid combination size {size} for a pool of {pool_len}")]
    InvalidCombinationSize { size: usize, pool_len: usize },
}
