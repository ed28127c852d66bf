use log::trace;

use crate::operation::errors::OperationError;
use crate::operation::kinds::Operation;

#[inline]
pub fn is_zero(value: f64) -> bool {
    value.abs() < f64::EPSILON
}

impl Operation {
    /// # Errors
    ///
    /// Returns `DivisionByZero` when dividing by a value that is effectively zero.
    pub fn apply(self, left: f64, right: f64) -> Result<f64, OperationError> {
        match self {
            Operation::Add => Ok(left + right),
            Operation::Sub => Ok(left - right),
            Operation::Mul => Ok(left * right),
            Operation::Div => {
                if is_zero(right) {
                    trace!("Division by zero attempted: {} ÷ {}", left, right);
                    Err(OperationError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
        }
    }
}

/// Every value obtainable by collapsing the pair `(a, b)` into one.
///
/// Both subtraction orders and both division orders are produced; a division
/// whose divisor is zero is left out rather than reported.
#[inline]
pub fn pair_results(a: f64, b: f64) -> [Option<f64>; 6] {
    [
        Some(a + b),
        Some(a - b),
        Some(b - a),
        Some(a * b),
        Operation::Div.apply(a, b).ok(),
        Operation::Div.apply(b, a).ok(),
    ]
}
