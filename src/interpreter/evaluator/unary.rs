use crate::{
    ast::UnaryOperator,
    interpreter::{evaluator::core::Context, value::core::Value},
};

impl Context<'_> {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Plus`: numeric identity.
    /// - `Negate`: numeric negation; integer overflow is `Unknown`.
    /// - `Not`: boolean negation.
    ///
    /// Any other kind of operand yields `Unknown`.
    ///
    /// # Example
    /// ```
    /// use pascond::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// assert_eq!(Context::eval_unary(UnaryOperator::Negate, &Value::Integer(5)),
    ///            Value::Integer(-5));
    /// assert_eq!(Context::eval_unary(UnaryOperator::Not, &Value::Boolean(true)),
    ///            Value::Boolean(false));
    /// assert_eq!(Context::eval_unary(UnaryOperator::Not, &Value::Integer(1)),
    ///            Value::Unknown);
    /// ```
    #[must_use]
    pub fn eval_unary(op: UnaryOperator, value: &Value) -> Value {
        match (op, value) {
            (UnaryOperator::Plus, Value::Integer(_) | Value::Decimal(_)) => value.clone(),
            (UnaryOperator::Negate, Value::Integer(n)) => {
                n.checked_neg().map_or(Value::Unknown, Value::Integer)
            },
            (UnaryOperator::Negate, Value::Decimal(d)) => Value::Decimal(-d),
            (UnaryOperator::Not, Value::Boolean(b)) => Value::Boolean(!b),
            _ => Value::Unknown,
        }
    }
}
