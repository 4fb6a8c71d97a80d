use std::cmp::Ordering;

/// Largest integer magnitude exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INT: i128 = 9_007_199_254_740_991;

/// Converts an `i128` to `f64` if and only if it is exactly representable.
///
/// ## Example
/// ```
/// use pascond::util::num::{MAX_SAFE_INT, i128_to_f64_checked};
///
/// assert_eq!(i128_to_f64_checked(42), Some(42.0));
/// assert_eq!(i128_to_f64_checked(MAX_SAFE_INT + 1), None);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn i128_to_f64_checked(value: i128) -> Option<f64> {
    if value.unsigned_abs() > MAX_SAFE_INT.unsigned_abs() {
        return None;
    }
    Some(value as f64)
}

/// Converts an `f64` to `i128` if it is finite, has no fractional part and
/// lies within the exactly representable range.
///
/// ## Example
/// ```
/// use pascond::util::num::f64_to_i128_exact;
///
/// assert_eq!(f64_to_i128_exact(3.0), Some(3));
/// assert_eq!(f64_to_i128_exact(3.5), None);
/// assert_eq!(f64_to_i128_exact(f64::NAN), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn f64_to_i128_exact(value: f64) -> Option<i128> {
    if !value.is_finite() || value.fract() != 0.0 || value.abs() > MAX_SAFE_INT as f64 {
        return None;
    }
    Some(value as i128)
}

/// Compares an `i128` with an `f64` exactly, `None` if the decimal is NaN.
///
/// Neither side is converted lossily: a decimal beyond the `i128` range is
/// ordered by its sign, otherwise its whole part is compared as an integer
/// and its fractional part breaks ties.
///
/// ## Example
/// ```
/// use std::cmp::Ordering;
///
/// use pascond::util::num::compare_i128_f64;
///
/// assert_eq!(compare_i128_f64(9_007_199_254_740_993, 1.5), Some(Ordering::Greater));
/// assert_eq!(compare_i128_f64(9_007_199_254_740_992, 9_007_199_254_740_992.0),
///            Some(Ordering::Equal));
/// assert_eq!(compare_i128_f64(-1, -0.5), Some(Ordering::Less));
/// assert_eq!(compare_i128_f64(i128::MAX, f64::INFINITY), Some(Ordering::Less));
/// assert_eq!(compare_i128_f64(0, f64::NAN), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn compare_i128_f64(integer: i128, decimal: f64) -> Option<Ordering> {
    // 2^127, exact as an f64.
    const BOUND: f64 = i128::MAX as f64;

    if decimal.is_nan() {
        return None;
    }
    if decimal >= BOUND {
        return Some(Ordering::Less);
    }
    if decimal < -BOUND {
        return Some(Ordering::Greater);
    }

    let whole = decimal.trunc();
    match integer.cmp(&(whole as i128)) {
        Ordering::Equal => (decimal - whole).partial_cmp(&0.0).map(Ordering::reverse),
        ordering => Some(ordering),
    }
}

/// Parses integer literal digits in the given radix, ignoring `_` digit
/// separators.
///
/// Returns `None` when no digit is present, a digit is invalid for the radix,
/// or the value does not fit in an `i128`.
///
/// ## Example
/// ```
/// use pascond::util::num::parse_radix_digits;
///
/// assert_eq!(parse_radix_digits("FF", 16), Some(255));
/// assert_eq!(parse_radix_digits("1_000", 10), Some(1000));
/// assert_eq!(parse_radix_digits("102", 2), None);
/// assert_eq!(parse_radix_digits("_", 10), None);
/// ```
#[must_use]
pub fn parse_radix_digits(digits: &str, radix: u32) -> Option<i128> {
    let cleaned: String = digits.chars().filter(|&c| c != '_').collect();
    if cleaned.is_empty() {
        return None;
    }
    i128::from_str_radix(&cleaned, radix).ok()
}

/// Parses decimal literal text, ignoring `_` digit separators.
///
/// ## Example
/// ```
/// use pascond::util::num::parse_decimal_digits;
///
/// assert_eq!(parse_decimal_digits("2.5"), Some(2.5));
/// assert_eq!(parse_decimal_digits("1_000.25"), Some(1000.25));
/// assert_eq!(parse_decimal_digits("1.5e3"), Some(1500.0));
/// ```
#[must_use]
pub fn parse_decimal_digits(text: &str) -> Option<f64> {
    let cleaned: String = text.chars().filter(|&c| c != '_').collect();
    cleaned.parse().ok()
}
