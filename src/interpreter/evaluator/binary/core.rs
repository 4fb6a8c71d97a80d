use crate::{
    ast::BinaryOperator,
    interpreter::{evaluator::core::Context, value::core::Value},
};

impl Context<'_> {
    /// Evaluates a binary operation between two values.
    ///
    /// Every operator of the grammar is routed to exactly one handler; the
    /// match is exhaustive, so an operator without a handler cannot compile.
    /// - `+ - * /` use `eval_arithmetic`.
    /// - `div mod shl shr` use `eval_integer_op`.
    /// - `= <>` use `eval_equality`.
    /// - `< > <= >=` use `eval_ordering`.
    /// - `in` uses `eval_membership`.
    /// - `and or xor` use `eval_logic`.
    ///
    /// # Example
    /// ```
    /// use pascond::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add, &Value::Integer(3), &Value::Integer(4));
    /// assert_eq!(result, Value::Integer(7));
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add, &Value::Integer(3), &Value::from("4"));
    /// assert_eq!(result, Value::Unknown);
    /// ```
    #[must_use]
    pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> Value {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, In, IntDiv, Less, LessEqual, Mod, Mul,
            NotEqual, Or, Shl, Shr, Sub, Xor,
        };

        match op {
            Add | Sub | Mul | Div => Self::eval_arithmetic(op, left, right),
            IntDiv | Mod | Shl | Shr => Self::eval_integer_op(op, left, right),
            Equal | NotEqual => Self::eval_equality(op, left, right),
            Less | Greater | LessEqual | GreaterEqual => Self::eval_ordering(op, left, right),
            In => Self::eval_membership(left, right),
            And | Or | Xor => Self::eval_logic(op, left, right),
        }
    }
}
