use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    interpreter::{evaluator::core::Context, value::core::Value},
    util::num::compare_i128_f64,
};

/// Maps an equality operator and an equality result to the final boolean.
///
/// Inverts the result for `NotEqual`.
#[must_use]
pub fn equality_op_result(op: BinaryOperator, is_equal: bool) -> bool {
    match op {
        BinaryOperator::Equal => is_equal,
        BinaryOperator::NotEqual => !is_equal,
        _ => unreachable!("equality_op_result used with non equality operator"),
    }
}

/// Compares two numeric values exactly, `None` if either is not numeric or
/// the comparison is undefined (NaN).
fn numeric_ordering(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
        (Value::Integer(a), Value::Decimal(b)) => compare_i128_f64(*a, *b),
        (Value::Decimal(a), Value::Integer(b)) => compare_i128_f64(*b, *a).map(Ordering::reverse),
        (Value::Decimal(a), Value::Decimal(b)) => a.partial_cmp(b),
        _ => None,
    }
}

impl Context<'_> {
    /// Evaluates `=` and `<>`.
    ///
    /// - Integers and decimals compare numerically across kinds.
    /// - Strings compare by exact text, booleans by value.
    /// - Sets compare structurally, ignoring element order.
    /// - Any other pairing of kinds is simply unequal.
    /// - If either side is `Unknown` the result is `Unknown`.
    ///
    /// # Example
    /// ```
    /// use pascond::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let v = Context::eval_equality(BinaryOperator::Equal, &Value::Integer(2), &Value::Decimal(2.0));
    /// assert_eq!(v, Value::Boolean(true));
    ///
    /// let v = Context::eval_equality(BinaryOperator::NotEqual, &Value::from("1"), &Value::Integer(1));
    /// assert_eq!(v, Value::Boolean(true));
    ///
    /// let v = Context::eval_equality(BinaryOperator::Equal, &Value::Unknown, &Value::Unknown);
    /// assert_eq!(v, Value::Unknown);
    /// ```
    #[must_use]
    pub fn eval_equality(op: BinaryOperator, left: &Value, right: &Value) -> Value {
        let is_equal = match (left, right) {
            (Value::Unknown, _) | (_, Value::Unknown) => return Value::Unknown,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Set(a), Value::Set(b)) => a == b,
            _ if left.is_numeric() && right.is_numeric() => {
                match numeric_ordering(left, right) {
                    Some(ordering) => ordering == Ordering::Equal,
                    None => return Value::Unknown,
                }
            },
            _ => false,
        };

        Value::Boolean(equality_op_result(op, is_equal))
    }

    /// Evaluates `<`, `>`, `<=` and `>=`.
    ///
    /// Numeric operands compare by value. For two sets, `<=` tests subset and
    /// `>=` superset; strict `<` and `>` on sets are not decided. Every other
    /// pairing, strings included, is `Unknown`.
    ///
    /// # Example
    /// ```
    /// use pascond::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let v = Context::eval_ordering(BinaryOperator::Less, &Value::Integer(3), &Value::Decimal(3.5));
    /// assert_eq!(v, Value::Boolean(true));
    ///
    /// let v = Context::eval_ordering(BinaryOperator::Less, &Value::from("a"), &Value::Integer(1));
    /// assert_eq!(v, Value::Unknown);
    /// ```
    #[must_use]
    pub fn eval_ordering(op: BinaryOperator, left: &Value, right: &Value) -> Value {
        if let (Value::Set(a), Value::Set(b)) = (left, right) {
            return Self::eval_set_ordering(op, a, b);
        }

        let Some(ordering) = numeric_ordering(left, right)
        else {
            return Value::Unknown;
        };

        Value::Boolean(match op {
                           BinaryOperator::Less => ordering == Ordering::Less,
                           BinaryOperator::Greater => ordering == Ordering::Greater,
                           BinaryOperator::LessEqual => ordering != Ordering::Greater,
                           BinaryOperator::GreaterEqual => ordering != Ordering::Less,
                           _ => unreachable!("eval_ordering used with non ordering operator {op}"),
                       })
    }
}
