use proptest::prelude::*;

use crate::numeric::constants::FRACTION_TOLERANCE;
use crate::numeric::{Fraction, NumericError, format_value, gcd, to_fraction};
use crate::operation::pair_results;

fn fraction_of(value: f64) -> Fraction {
    match to_fraction(value) {
        Ok(fraction) => fraction,
        Err(e) => panic!("{} should normalize: {}", value, e),
    }
}

#[test]
fn test_integral_value_has_unit_denominator() {
    assert_eq!(
        fraction_of(42.0),
        Fraction {
            numerator: 42,
            denominator: 1
        }
    );
    assert_eq!(
        fraction_of(-3.0),
        Fraction {
            numerator: -3,
            denominator: 1
        }
    );
}

#[test]
fn test_half_is_not_drifted() {
    let fraction = fraction_of(5.0 / 2.0);
    assert_eq!((fraction.numerator, fraction.denominator), (5, 2));

    let fraction = fraction_of(2.499_999_999_999_999_6);
    assert_eq!((fraction.numerator, fraction.denominator), (5, 2));
}

#[test]
fn test_repeating_decimals_are_exact() {
    let fraction = fraction_of(1.0 / 3.0);
    assert_eq!((fraction.numerator, fraction.denominator), (1, 3));

    let fraction = fraction_of(22.0 / 7.0);
    assert_eq!((fraction.numerator, fraction.denominator), (22, 7));

    let fraction = fraction_of(-5.0 / 6.0);
    assert_eq!((fraction.numerator, fraction.denominator), (-5, 6));
}

#[test]
fn test_deeply_nested_quotient() {
    // 1 / (23 * 24 * 25)
    let fraction = fraction_of(1.0 / 23.0 / 24.0 / 25.0);
    assert_eq!((fraction.numerator, fraction.denominator), (1, 13_800));
}

#[test]
fn test_floating_noise_is_absorbed() {
    let fraction = fraction_of(0.1 + 0.2);
    assert_eq!((fraction.numerator, fraction.denominator), (3, 10));
}

#[test]
fn test_non_finite_is_rejected() {
    assert_eq!(
        to_fraction(f64::INFINITY),
        Err(NumericError::OutOfRange(f64::INFINITY))
    );
    assert!(to_fraction(f64::NAN).is_err());
}

#[test]
fn test_fraction_display() {
    assert_eq!(fraction_of(0.75).to_string(), "3/4");
    assert_eq!(fraction_of(7.0).to_string(), "7");
}

#[test]
fn test_format_value() {
    assert_eq!(format_value(25.0), "25");
    assert_eq!(format_value(2.0 / 3.0), "2/3");
    assert_eq!(format_value(-1.5), "-3/2");
    assert_eq!(format_value(6.999_999_999_999_999), "7");
}

fn values_from(a: u32, b: u32, c: u32) -> Vec<f64> {
    let mut values = Vec::new();
    for first in pair_results(f64::from(a), f64::from(b)).into_iter().flatten() {
        values.push(first);
        values.extend(pair_results(first, f64::from(c)).into_iter().flatten());
    }
    values
}

proptest! {
    #[test]
    fn fraction_round_trips(a in 1u32..=25, b in 1u32..=25, c in 1u32..=25) {
        for value in values_from(a, b, c) {
            let fraction = to_fraction(value);
            prop_assert!(fraction.is_ok());
            if let Ok(fraction) = fraction {
                prop_assert!((fraction.value() - value).abs() < FRACTION_TOLERANCE);
            }
        }
    }

    #[test]
    fn fraction_is_always_reduced(a in 1u32..=25, b in 1u32..=25, c in 1u32..=25) {
        for value in values_from(a, b, c) {
            if let Ok(fraction) = to_fraction(value) {
                prop_assert!(fraction.denominator >= 1);
                prop_assert_eq!(gcd(fraction.numerator, fraction.denominator), 1);
            }
        }
    }
}
