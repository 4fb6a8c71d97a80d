use crate::interpreter::value::core::Value;

/// A pair of numeric operands after promotion.
///
/// Two integers stay integers; any mix with a decimal is promoted to two
/// decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericPair {
    /// Both operands were integers.
    Integers(i128, i128),
    /// At least one operand was a decimal.
    Decimals(f64, f64),
}

/// Promotes two values for mixed integer/decimal math.
///
/// Returns `None` if either value is not numeric, or if an integer has to be
/// promoted but cannot be represented exactly as a decimal.
///
/// # Example
/// ```
/// use pascond::interpreter::{
///     evaluator::utils::{NumericPair, promote_numeric},
///     value::core::Value,
/// };
///
/// assert_eq!(promote_numeric(&Value::Integer(1), &Value::Integer(2)),
///            Some(NumericPair::Integers(1, 2)));
/// assert_eq!(promote_numeric(&Value::Integer(1), &Value::Decimal(0.5)),
///            Some(NumericPair::Decimals(1.0, 0.5)));
/// assert_eq!(promote_numeric(&Value::Integer(1), &Value::from("1")), None);
/// ```
#[must_use]
pub fn promote_numeric(left: &Value, right: &Value) -> Option<NumericPair> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Some(NumericPair::Integers(*a, *b)),
        _ if left.is_numeric() && right.is_numeric() => {
            Some(NumericPair::Decimals(left.as_decimal()?, right.as_decimal()?))
        },
        _ => None,
    }
}

/// Wraps a decimal result, turning infinities and NaN into `Unknown`.
#[must_use]
pub const fn decimal_or_unknown(value: f64) -> Value {
    if value.is_finite() {
        Value::Decimal(value)
    } else {
        Value::Unknown
    }
}

/// Wraps an optional integer result, turning `None` into `Unknown`.
#[must_use]
pub const fn integer_or_unknown(value: Option<i128>) -> Value {
    match value {
        Some(n) => Value::Integer(n),
        None => Value::Unknown,
    }
}

/// Removes a leading `System.` qualifier from a name.
///
/// The qualifier is matched case-insensitively and whitespace around the
/// separator is tolerated. Other qualifiers are left alone.
///
/// # Example
/// ```
/// use pascond::interpreter::evaluator::utils::strip_system_qualifier;
///
/// assert_eq!(strip_system_qualifier("SYSTEM.SizeOf"), "SizeOf");
/// assert_eq!(strip_system_qualifier("System . True"), "True");
/// assert_eq!(strip_system_qualifier("Windows.Foo"), "Windows.Foo");
/// ```
#[must_use]
pub fn strip_system_qualifier(name: &str) -> &str {
    if let Some((head, tail)) = name.split_once('.')
       && head.trim().eq_ignore_ascii_case("system")
    {
        return tail.trim();
    }
    name.trim()
}
