use std::collections::BTreeSet;

use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::Context,
        value::{core::Value, set_value::SetValue},
    },
};

impl Context<'_> {
    /// Evaluates `in`.
    ///
    /// The right side must be a set; the left value is tested for structural
    /// membership. A non-set right side or an `Unknown` left side is
    /// `Unknown`.
    ///
    /// # Example
    /// ```
    /// use std::collections::BTreeSet;
    ///
    /// use pascond::interpreter::{
    ///     evaluator::core::Context,
    ///     value::{core::Value, set_value::SetValue},
    /// };
    ///
    /// let set: BTreeSet<SetValue> = [SetValue::Integer(1), SetValue::Integer(2)].into_iter()
    ///                                                                         .collect();
    ///
    /// assert_eq!(Context::eval_membership(&Value::Integer(2), &Value::from(set.clone())),
    ///            Value::Boolean(true));
    /// assert_eq!(Context::eval_membership(&Value::Decimal(1.0), &Value::from(set)),
    ///            Value::Boolean(true));
    /// assert_eq!(Context::eval_membership(&Value::Integer(2), &Value::Integer(2)),
    ///            Value::Unknown);
    /// ```
    #[must_use]
    pub fn eval_membership(left: &Value, right: &Value) -> Value {
        let Value::Set(set) = right
        else {
            return Value::Unknown;
        };

        match SetValue::from_value(left) {
            Some(item) => Value::Boolean(set.contains(&item)),
            None => Value::Unknown,
        }
    }

    /// Evaluates an ordering operator between two sets.
    ///
    /// `<=` is a non-strict subset test and `>=` a non-strict superset test.
    /// The strict forms have no settled meaning for sets here and yield
    /// `Unknown`.
    #[must_use]
    pub fn eval_set_ordering(op: BinaryOperator,
                             left: &BTreeSet<SetValue>,
                             right: &BTreeSet<SetValue>)
                             -> Value {
        match op {
            BinaryOperator::LessEqual => Value::Boolean(left.is_subset(right)),
            BinaryOperator::GreaterEqual => Value::Boolean(left.is_superset(right)),
            _ => Value::Unknown,
        }
    }
}
