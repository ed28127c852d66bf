//! Exhaustive search over every value reachable by pairwise collapse

pub mod constants;
mod core;
mod errors;
mod set;

pub use core::{ReachabilitySearch, reachable_values};
pub use errors::SearchError;
pub use set::{ReachableSet, ValueKey};
