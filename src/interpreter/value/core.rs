use std::{collections::BTreeSet, fmt::Display, rc::Rc};

use crate::{
    ast::LiteralValue, interpreter::value::set_value::SetValue, util::num::i128_to_f64_checked,
};

/// Represents the result of evaluating a condition.
///
/// `Unknown` is the evaluator's answer whenever a result is not statically
/// decidable: an unresolvable name, an unsupported combination of kinds, an
/// overflow. It propagates through nearly every operator.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A string such as `'abc'`.
    String(String),
    /// An integer. Arithmetic on it is checked; overflow yields `Unknown`.
    Integer(i128),
    /// A double precision decimal.
    Decimal(f64),
    /// A boolean (`True` or `False`).
    Boolean(bool),
    /// A set of unique values such as `[1, 2, 3]`.
    Set(Rc<BTreeSet<SetValue>>),
    /// Not statically determinable.
    Unknown,
}

/// The kind of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// `Value::String`
    String,
    /// `Value::Integer`
    Integer,
    /// `Value::Decimal`
    Decimal,
    /// `Value::Boolean`
    Boolean,
    /// `Value::Set`
    Set,
    /// `Value::Unknown`
    Unknown,
}

impl From<i128> for Value {
    fn from(v: i128) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Decimal(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<BTreeSet<SetValue>> for Value {
    fn from(v: BTreeSet<SetValue>) -> Self {
        Self::Set(Rc::new(v))
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Integer(n) => Self::Integer(*n),
            LiteralValue::Decimal(d) => Self::Decimal(*d),
            LiteralValue::String(s) => Self::String(s.clone()),
        }
    }
}

impl Value {
    /// Gets the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::String(_) => ValueKind::String,
            Self::Integer(_) => ValueKind::Integer,
            Self::Decimal(_) => ValueKind::Decimal,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Set(_) => ValueKind::Set,
            Self::Unknown => ValueKind::Unknown,
        }
    }

    /// Returns `true` for the `Unknown` sentinel.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Returns `true` for integers and decimals.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Decimal(_))
    }

    /// Converts a numeric value to `f64` for mixed integer/decimal math.
    ///
    /// Returns `None` for non-numeric values and for integers that cannot be
    /// represented exactly.
    ///
    /// # Example
    /// ```
    /// use pascond::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_decimal(), Some(10.0));
    /// assert_eq!(Value::Boolean(true).as_decimal(), None);
    /// ```
    #[must_use]
    pub const fn as_decimal(&self) -> Option<f64> {
        match self {
            Self::Decimal(d) => Some(*d),
            Self::Integer(n) => i128_to_f64_checked(*n),
            _ => None,
        }
    }

    /// Decides whether a condition holds.
    ///
    /// Only `Boolean(true)` holds; `Unknown` and every non-boolean value count
    /// as false.
    #[must_use]
    pub const fn is_true(&self) -> bool {
        matches!(self, Self::Boolean(true))
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String(s) => write!(f, "'{}'", s.replace('\'', "''")),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Decimal(d) => write!(f, "{d:?}"),
            Self::Boolean(true) => write!(f, "True"),
            Self::Boolean(false) => write!(f, "False"),
            Self::Set(set) => {
                let elements: Vec<String> = set.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", elements.join(", "))
            },
            Self::Unknown => write!(f, "<unknown>"),
        }
    }
}
