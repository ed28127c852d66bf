use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::numeric::compare::is_integral;
use crate::numeric::constants::{
    FRACTION_DECIMAL_DIGITS, FRACTION_SCALE, FRACTION_TOLERANCE, MAX_CONVERGENT_DENOMINATOR,
    MAX_CONVERGENT_STEPS, MAX_FRACTION_MAGNITUDE,
};
use crate::numeric::errors::NumericError;

/// A fraction in lowest terms with a positive denominator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fraction {
    pub numerator: i64,
    pub denominator: i64,
}

impl Fraction {
    pub fn value(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    pub fn is_whole(&self) -> bool {
        self.denominator == 1
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_whole() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

/// Euclid's algorithm on magnitudes; `gcd(0, 0)` is 0.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Convert a search result into a reduced fraction for display.
///
/// Integral inputs come back over 1. Anything else is matched against the
/// continued-fraction convergents of the value so repeating decimals such as
/// `1/3` come out exact. Values with no small-denominator match are rounded to
/// nine decimal places and put over a power-of-ten denominator reduced by the
/// gcd.
///
/// # Errors
///
/// Returns `OutOfRange` for non-finite values or magnitudes too large to scale
/// into an `i64` numerator.
pub fn to_fraction(value: f64) -> Result<Fraction, NumericError> {
    if !value.is_finite() || value.abs() >= MAX_FRACTION_MAGNITUDE {
        return Err(NumericError::OutOfRange(value));
    }

    if value.fract() == 0.0 {
        return Ok(Fraction {
            numerator: value as i64,
            denominator: 1,
        });
    }

    let fraction = match convergent_fraction(value) {
        Some(fraction) => fraction,
        None => decimal_fraction((value * FRACTION_SCALE).round() / FRACTION_SCALE),
    };
    debug!("Normalized {} to {}", value, fraction);
    Ok(fraction)
}

/// Integral values print plainly; everything else prints as `n/d`.
pub fn format_value(value: f64) -> String {
    if is_integral(value) {
        return format!("{}", value.round() as i64);
    }
    match to_fraction(value) {
        Ok(fraction) => fraction.to_string(),
        Err(_) => format!("{}", value),
    }
}

/// Walk the continued-fraction convergents of `value` until one lands within
/// tolerance. Convergents are already in lowest terms.
fn convergent_fraction(value: f64) -> Option<Fraction> {
    let sign = if value < 0.0 { -1 } else { 1 };
    let target = value.abs();

    let whole = target.floor();
    let (mut h_prev, mut h) = (1_i64, whole as i64);
    let (mut k_prev, mut k) = (0_i64, 1_i64);
    let mut remainder = target - whole;

    for _ in 0..MAX_CONVERGENT_STEPS {
        if (target - h as f64 / k as f64).abs() < FRACTION_TOLERANCE {
            return Some(Fraction {
                numerator: sign * h,
                denominator: k,
            });
        }
        if remainder < f64::EPSILON {
            break;
        }

        let inverse = 1.0 / remainder;
        let term = inverse.floor();
        remainder = inverse - term;

        let term = term as i64;
        let next_h = term.checked_mul(h)?.checked_add(h_prev)?;
        let next_k = term.checked_mul(k)?.checked_add(k_prev)?;
        if next_k > MAX_CONVERGENT_DENOMINATOR {
            break;
        }
        (h_prev, h) = (h, next_h);
        (k_prev, k) = (k, next_k);
    }

    None
}

/// Power-of-ten denominator sized to the decimal digits of `rounded`, reduced
/// by the gcd.
fn decimal_fraction(rounded: f64) -> Fraction {
    let text = format!("{}", rounded.abs());
    let digits = text
        .split_once('.')
        .map_or(0, |(_, decimals)| decimals.len())
        .min(FRACTION_DECIMAL_DIGITS);

    let denominator = 10_i64.pow(digits as u32);
    let numerator = (rounded * denominator as f64).round() as i64;
    let divisor = gcd(numerator, denominator).max(1);

    Fraction {
        numerator: numerator / divisor,
        denominator: denominator / divisor,
    }
}
