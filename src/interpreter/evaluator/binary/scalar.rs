use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            core::Context,
            utils::{NumericPair, decimal_or_unknown, integer_or_unknown, promote_numeric},
        },
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates `+`, `-`, `*` and `/`.
    ///
    /// - Two integers stay integer for `+ - *`; overflow is `Unknown`.
    /// - `/` always yields a decimal; dividing by zero is `Unknown`.
    /// - Any integer/decimal mix is promoted to decimal.
    /// - `+` on two strings concatenates them.
    /// - Every other pairing is `Unknown`.
    ///
    /// # Example
    /// ```
    /// use pascond::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let v = Context::eval_arithmetic(BinaryOperator::Div, &Value::Integer(5), &Value::Integer(2));
    /// assert_eq!(v, Value::Decimal(2.5));
    ///
    /// let v = Context::eval_arithmetic(BinaryOperator::Add, &Value::from("abc"), &Value::from("123"));
    /// assert_eq!(v, Value::from("abc123"));
    /// ```
    #[must_use]
    pub fn eval_arithmetic(op: BinaryOperator, left: &Value, right: &Value) -> Value {
        if let (BinaryOperator::Add, Value::String(a), Value::String(b)) = (op, left, right) {
            return Value::String(format!("{a}{b}"));
        }

        let Some(pair) = promote_numeric(left, right)
        else {
            return Value::Unknown;
        };

        match (op, pair) {
            (BinaryOperator::Add, NumericPair::Integers(a, b)) => integer_or_unknown(a.checked_add(b)),
            (BinaryOperator::Sub, NumericPair::Integers(a, b)) => integer_or_unknown(a.checked_sub(b)),
            (BinaryOperator::Mul, NumericPair::Integers(a, b)) => integer_or_unknown(a.checked_mul(b)),
            (BinaryOperator::Div, NumericPair::Integers(..)) => {
                match (left.as_decimal(), right.as_decimal()) {
                    (Some(a), Some(b)) => Self::divide(a, b),
                    _ => Value::Unknown,
                }
            },
            (BinaryOperator::Add, NumericPair::Decimals(a, b)) => decimal_or_unknown(a + b),
            (BinaryOperator::Sub, NumericPair::Decimals(a, b)) => decimal_or_unknown(a - b),
            (BinaryOperator::Mul, NumericPair::Decimals(a, b)) => decimal_or_unknown(a * b),
            (BinaryOperator::Div, NumericPair::Decimals(a, b)) => Self::divide(a, b),
            _ => unreachable!("eval_arithmetic used with non arithmetic operator {op}"),
        }
    }

    /// Evaluates `div`, `mod`, `shl` and `shr`.
    ///
    /// Both operands must be integers, otherwise the result is `Unknown`.
    /// `div` truncates toward zero and `mod` takes the sign of the dividend.
    /// `shl` by `b` multiplies by `2^b`, `shr` is an arithmetic shift.
    /// Division by zero, overflow and negative shift counts are `Unknown`.
    ///
    /// # Example
    /// ```
    /// use pascond::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let v = Context::eval_integer_op(BinaryOperator::Shl, &Value::Integer(1), &Value::Integer(4));
    /// assert_eq!(v, Value::Integer(16));
    ///
    /// let v = Context::eval_integer_op(BinaryOperator::IntDiv, &Value::Integer(7), &Value::Integer(0));
    /// assert_eq!(v, Value::Unknown);
    /// ```
    #[must_use]
    pub fn eval_integer_op(op: BinaryOperator, left: &Value, right: &Value) -> Value {
        let (Value::Integer(a), Value::Integer(b)) = (left, right)
        else {
            return Value::Unknown;
        };

        match op {
            BinaryOperator::IntDiv => integer_or_unknown(a.checked_div(*b)),
            BinaryOperator::Mod => integer_or_unknown(a.checked_rem(*b)),
            BinaryOperator::Shl => integer_or_unknown(shift_left(*a, *b)),
            BinaryOperator::Shr => integer_or_unknown(shift_right(*a, *b)),
            _ => unreachable!("eval_integer_op used with non integer operator {op}"),
        }
    }

    fn divide(a: f64, b: f64) -> Value {
        if b == 0.0 {
            return Value::Unknown;
        }
        decimal_or_unknown(a / b)
    }
}

/// Computes `value * 2^count`, or `None` on overflow or a negative count.
fn shift_left(value: i128, count: i128) -> Option<i128> {
    let count = u32::try_from(count).ok()?;
    if value == 0 {
        return Some(0);
    }
    if count >= i128::BITS - 1 {
        return None;
    }
    value.checked_mul(1_i128 << count)
}

/// Computes an arithmetic right shift, or `None` for a negative count.
fn shift_right(value: i128, count: i128) -> Option<i128> {
    let count = u32::try_from(count).ok()?;
    Some(value >> count.min(i128::BITS - 1))
}
