//! Number pool and the k-subset enumeration over it

mod combinations;
mod errors;
mod number_pool;
mod validation;

pub use combinations::{Combinations, binomial};
pub use errors::PoolError;
pub use number_pool::{DEFAULT_POOL_MAX, DEFAULT_POOL_MIN, NumberPool};
pub use validation::{validate_combination_size, validate_pool_values};

#[cfg(test)]
mod tests;
