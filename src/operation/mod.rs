//! The four binary operations a player (or the search) can apply to two values

mod display;
mod errors;
mod eval;
mod kinds;

pub use errors::{OperationError, ParseOperationError};
pub use eval::{is_zero, pair_results};
pub use kinds::Operation;
