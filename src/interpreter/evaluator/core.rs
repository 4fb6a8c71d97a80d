use std::collections::BTreeSet;

use crate::{
    ast::Expr,
    environment::{DefineSet, TypeSizeOracle},
    error::ParseError,
    interpreter::{
        evaluator::utils::strip_system_qualifier,
        parser::core::parse_condition,
        value::{core::Value, set_value::SetValue},
    },
};

/// Compiler version assumed when none is configured (Delphi 11 Alexandria).
pub const DEFAULT_COMPILER_VERSION: f64 = 35.0;

/// Stores the read-only environment a condition is evaluated against.
///
/// A `Context` borrows the define-set as it stands at the directive being
/// evaluated, the target compiler version, and the type-size oracle. It holds
/// no mutable state, so evaluating the same expression twice always gives the
/// same value.
///
/// ## Usage
///
/// The preprocessor builds a fresh `Context` for each `$IF`/`$ELSEIF`
/// condition. Callers can do the same to evaluate standalone conditions.
pub struct Context<'a> {
    /// Symbols currently defined, consulted by `Defined(...)`.
    pub defines:          &'a DefineSet,
    /// Value of the `CompilerVersion` intrinsic.
    pub compiler_version: f64,
    /// Source of `SizeOf` answers.
    pub types:            &'a dyn TypeSizeOracle,
}

impl<'a> Context<'a> {
    /// Creates an evaluation context.
    #[must_use]
    pub fn new(defines: &'a DefineSet,
               compiler_version: f64,
               types: &'a dyn TypeSizeOracle)
               -> Self {
        Self { defines,
               compiler_version,
               types }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. It dispatches
    /// on the expression variant and never fails: anything that cannot be
    /// decided statically becomes [`Value::Unknown`].
    ///
    /// # Example
    /// ```
    /// use pascond::{
    ///     environment::{DefineSet, StandardTypeSizes},
    ///     interpreter::{
    ///         evaluator::core::Context, parser::core::parse_condition, value::core::Value,
    ///     },
    /// };
    ///
    /// let defines = DefineSet::default();
    /// let types = StandardTypeSizes::default();
    /// let context = Context::new(&defines, 35.0, &types);
    ///
    /// let expr = parse_condition("5 / 2").unwrap();
    /// assert_eq!(context.eval(&expr), Value::Decimal(2.5));
    /// ```
    #[must_use]
    pub fn eval(&self, expr: &Expr) -> Value {
        match expr {
            Expr::Literal { value, .. } => Value::from(value),
            Expr::Name { name, .. } => self.eval_name(name),
            Expr::UnaryOp { op, expr, .. } => Self::eval_unary(*op, &self.eval(expr)),
            Expr::BinaryOp { left, op, right, .. } => {
                Self::eval_binary(*op, &self.eval(left), &self.eval(right))
            },
            Expr::SetLiteral { elements, .. } => self.eval_set_literal(elements),
            Expr::Invocation { name, arguments, .. } => self.eval_invocation(name, arguments),
        }
    }

    /// Lexes, parses and evaluates condition text.
    ///
    /// # Errors
    /// Returns the lex or parse failure; evaluation itself cannot fail.
    ///
    /// # Example
    /// ```
    /// use pascond::{
    ///     environment::{DefineSet, StandardTypeSizes},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let defines = DefineSet::with_symbols(["FOO"], false);
    /// let types = StandardTypeSizes::default();
    /// let context = Context::new(&defines, 35.0, &types);
    ///
    /// assert_eq!(context.eval_source("Defined(FOO) and not False").unwrap(),
    ///            Value::Boolean(true));
    /// assert!(context.eval_source("1 +").is_err());
    /// ```
    pub fn eval_source(&self, source: &str) -> Result<Value, ParseError> {
        let expr = parse_condition(source)?;
        Ok(self.eval(&expr))
    }

    /// Resolves a bare name.
    ///
    /// `True` and `False` are boolean literals and `CompilerVersion` is the
    /// configured version as a decimal, all matched case-insensitively after
    /// a leading `System.` is removed. Every other name is `Unknown`.
    fn eval_name(&self, name: &str) -> Value {
        let name = strip_system_qualifier(name);

        if name.eq_ignore_ascii_case("true") {
            Value::Boolean(true)
        } else if name.eq_ignore_ascii_case("false") {
            Value::Boolean(false)
        } else if name.eq_ignore_ascii_case("compilerversion") {
            Value::Decimal(self.compiler_version)
        } else {
            Value::Unknown
        }
    }

    /// Evaluates a set constructor.
    ///
    /// Any `Unknown` element makes the whole set `Unknown`.
    fn eval_set_literal(&self, elements: &[Expr]) -> Value {
        let mut set = BTreeSet::new();

        for element in elements {
            match SetValue::from_value(&self.eval(element)) {
                Some(item) => {
                    set.insert(item);
                },
                None => return Value::Unknown,
            }
        }

        Value::from(set)
    }
}
