use crate::{
    ast::Expr,
    interpreter::{evaluator::core::Context, value::core::Value},
};

/// Tests whether a conditional symbol is defined.
///
/// Accepts exactly one argument, which must be a bare name. The name is
/// looked up in the context's define-set as written; a `System.` prefix is
/// not stripped here since symbols may legitimately contain dots. Any other
/// argument shape is `Unknown`.
///
/// # Example
/// ```
/// use pascond::{
///     ast::Expr,
///     environment::{DefineSet, StandardTypeSizes},
///     interpreter::{
///         evaluator::{core::Context, function::defined::defined},
///         value::core::Value,
///     },
/// };
///
/// let defines = DefineSet::with_symbols(["DEBUG"], false);
/// let types = StandardTypeSizes::default();
/// let context = Context::new(&defines, 35.0, &types);
///
/// let arg = Expr::Name { name:     "debug".to_string(),
///                        position: 8, };
/// assert_eq!(defined(&context, &[arg]), Value::Boolean(true));
/// ```
#[must_use]
pub fn defined(context: &Context<'_>, arguments: &[Expr]) -> Value {
    match arguments {
        [Expr::Name { name, .. }] => Value::Boolean(context.defines.is_defined(name)),
        _ => Value::Unknown,
    }
}
