use std::{collections::BTreeSet, fmt::Display, rc::Rc};

use ordered_float::OrderedFloat;

use crate::{interpreter::value::core::Value, util::num::f64_to_i128_exact};

/// Enum representing values allowed in sets.
///
/// Sets never hold `Unknown`: a set literal with an undecidable element is
/// itself undecidable.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SetValue {
    /// An integer such as `42`.
    Integer(i128),
    /// A decimal with a fractional part such as `2.5`.
    Decimal(OrderedFloat<f64>),
    /// A string such as `'abc'`.
    String(String),
    /// A boolean.
    Boolean(bool),
    /// A nested set.
    Set(BTreeSet<SetValue>),
}

impl SetValue {
    /// Converts a value into a set element.
    ///
    /// Decimals without a fractional part are stored as integers, so that
    /// `[1] = [1.0]` and `1 in [1.0]` follow numeric equality. Returns `None`
    /// for `Unknown`.
    ///
    /// # Example
    /// ```
    /// use pascond::interpreter::value::{core::Value, set_value::SetValue};
    ///
    /// assert_eq!(SetValue::from_value(&Value::Decimal(2.0)), Some(SetValue::Integer(2)));
    /// assert_eq!(SetValue::from_value(&Value::Unknown), None);
    /// ```
    #[must_use]
    pub fn from_value(v: &Value) -> Option<Self> {
        Some(match v {
            Value::Integer(i) => Self::Integer(*i),
            Value::Decimal(d) => match f64_to_i128_exact(*d) {
                Some(i) => Self::Integer(i),
                None => Self::Decimal(OrderedFloat(*d)),
            },
            Value::String(s) => Self::String(s.clone()),
            Value::Boolean(b) => Self::Boolean(*b),
            Value::Set(set) => Self::Set(set.as_ref().clone()),
            Value::Unknown => return None,
        })
    }
}

impl From<SetValue> for Value {
    fn from(s: SetValue) -> Self {
        match s {
            SetValue::Integer(i) => Self::Integer(i),
            SetValue::Decimal(d) => Self::Decimal(d.into_inner()),
            SetValue::String(s) => Self::String(s),
            SetValue::Boolean(b) => Self::Boolean(b),
            SetValue::Set(set) => Self::Set(Rc::new(set)),
        }
    }
}

impl Display for SetValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value: Value = self.clone().into();
        write!(f, "{value}")
    }
}
