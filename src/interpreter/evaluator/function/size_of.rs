use crate::{
    ast::Expr,
    environment::IntrinsicType,
    interpreter::{
        evaluator::{core::Context, utils::strip_system_qualifier},
        value::core::Value,
    },
};

/// Gets the byte size of a type or of a value's kind.
///
/// Accepts exactly one argument.
/// - A bare name of an intrinsic type asks the type-size oracle directly.
/// - Anything else is evaluated, and the value's kind is mapped to a
///   representative type: strings to `String`, integers to the smallest
///   integer type holding them, decimals to `Extended`, booleans to
///   `Boolean` and sets to the empty-set size.
///
/// When no size can be determined the pointer size is returned, so the
/// result is always an integer.
///
/// # Example
/// ```
/// use pascond::{
///     environment::{Architecture, DefineSet, StandardTypeSizes},
///     interpreter::{evaluator::core::Context, value::core::Value},
/// };
///
/// let defines = DefineSet::default();
/// let types = StandardTypeSizes::new(Architecture::X64);
/// let context = Context::new(&defines, 35.0, &types);
///
/// assert_eq!(context.eval_source("SizeOf(Byte)").unwrap(), Value::Integer(1));
/// assert_eq!(context.eval_source("SizeOf(300)").unwrap(), Value::Integer(2));
/// assert_eq!(context.eval_source("SizeOf(TMyRecord)").unwrap(), Value::Integer(8));
/// ```
#[must_use]
pub fn size_of(context: &Context<'_>, arguments: &[Expr]) -> Value {
    let [argument] = arguments
    else {
        return Value::Unknown;
    };

    let named = match argument {
        Expr::Name { name, .. } => strip_system_qualifier(name).parse::<IntrinsicType>().ok(),
        _ => None,
    };
    let ty = named.or_else(|| IntrinsicType::for_value(&context.eval(argument)));

    let size = ty.and_then(|ty| context.types.size_of(ty))
                 .unwrap_or_else(|| context.types.pointer_size());

    Value::Integer(i128::from(size))
}
