use crate::numeric::constants::INTEGRAL_TOLERANCE;

/// Floating-point equality under an explicit tolerance.
#[inline]
pub fn approx_eq(left: f64, right: f64, tolerance: f64) -> bool {
    (left - right).abs() < tolerance
}

/// True when `value` sits within floating-point noise of a whole number.
#[inline]
pub fn is_integral(value: f64) -> bool {
    value.is_finite() && approx_eq(value, value.round(), INTEGRAL_TOLERANCE)
}

/// The whole number `value` represents, if it represents one.
pub fn nearest_integer(value: f64) -> Option<i64> {
    if is_integral(value) && value.abs() < i64::MAX as f64 {
        Some(value.round() as i64)
    } else {
        None
    }
}
