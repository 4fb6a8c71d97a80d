use crate::{
    ast::BinaryOperator,
    interpreter::{evaluator::core::Context, value::core::Value},
};

impl Context<'_> {
    /// Evaluates a logical operation between two boolean values.
    ///
    /// Supported operators are `and`, `or` and `xor`. Both operands are
    /// always evaluated; anything other than two booleans is `Unknown`, even
    /// where one side alone would decide the result.
    ///
    /// # Example
    /// ```
    /// use pascond::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let v = Context::eval_logic(BinaryOperator::Xor, &Value::Boolean(true), &Value::Boolean(false));
    /// assert_eq!(v, Value::Boolean(true));
    ///
    /// let v = Context::eval_logic(BinaryOperator::Or, &Value::Boolean(true), &Value::Unknown);
    /// assert_eq!(v, Value::Unknown);
    /// ```
    #[must_use]
    pub fn eval_logic(op: BinaryOperator, left: &Value, right: &Value) -> Value {
        use BinaryOperator::{And, Or, Xor};

        let (Value::Boolean(a), Value::Boolean(b)) = (left, right)
        else {
            return Value::Unknown;
        };

        Value::Boolean(match op {
                           And => *a && *b,
                           Or => *a || *b,
                           Xor => a ^ b,
                           _ => unreachable!("eval_logic used with non logical operator {op}"),
                       })
    }
}
