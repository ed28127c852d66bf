//! Tolerance-aware comparisons and exact-fraction display of search results

mod compare;
pub mod constants;
mod errors;
mod fraction;

pub use compare::{approx_eq, is_integral, nearest_integer};
pub use errors::NumericError;
pub use fraction::{Fraction, format_value, gcd, to_fraction};

#[cfg(test)]
mod tests;
