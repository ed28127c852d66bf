// Tolerances and limits shared by the comparator and the fraction normalizer
pub const WIN_TOLERANCE: f64 = 1e-3;
pub const FRACTION_TOLERANCE: f64 = 1e-9;
pub const INTEGRAL_TOLERANCE: f64 = 1e-9;
pub const FRACTION_DECIMAL_DIGITS: usize = 9;
pub const FRACTION_SCALE: f64 = 1e9;
pub const MAX_CONVERGENT_DENOMINATOR: i64 = 1_000_000;
pub const MAX_CONVERGENT_STEPS: usize = 64;
pub const MAX_FRACTION_MAGNITUDE: f64 = 1e9;
