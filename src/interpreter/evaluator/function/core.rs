use crate::{
    ast::Expr,
    interpreter::{
        evaluator::{
            core::Context,
            function::{defined, size_of},
            utils::strip_system_qualifier,
        },
        value::core::Value,
    },
};

/// Type alias for intrinsic handlers.
///
/// An intrinsic receives the evaluation context and its unevaluated
/// arguments, so it can inspect their shape before evaluating them.
type IntrinsicFn = fn(&Context<'_>, &[Expr]) -> Value;

/// Defines intrinsics by generating a lookup table and a name list.
///
/// Each entry provides a name, the exact number of arguments it takes and
/// the function implementing it.
macro_rules! intrinsic_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct IntrinsicDef {
            name:  &'static str,
            arity: usize,
            func:  IntrinsicFn,
        }
        static INTRINSIC_TABLE: &[IntrinsicDef] = &[
            $(
                IntrinsicDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of the intrinsics a condition may invoke.
        pub const INTRINSIC_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

intrinsic_functions! {
    "Defined" => { arity: 1, func: defined::defined },
    "SizeOf"  => { arity: 1, func: size_of::size_of },
}

impl Context<'_> {
    /// Evaluates an invocation.
    ///
    /// The name is matched case-insensitively after removing a leading
    /// `System.` qualifier. Unknown names and wrong argument counts evaluate
    /// to `Unknown` rather than failing.
    ///
    /// # Example
    /// ```
    /// use pascond::{
    ///     environment::{DefineSet, StandardTypeSizes},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let defines = DefineSet::default();
    /// let types = StandardTypeSizes::default();
    /// let context = Context::new(&defines, 35.0, &types);
    ///
    /// assert_eq!(context.eval_source("System.SizeOf(Word)").unwrap(), Value::Integer(2));
    /// assert_eq!(context.eval_source("Declared(Foo)").unwrap(), Value::Unknown);
    /// assert_eq!(context.eval_source("Defined(A, B)").unwrap(), Value::Unknown);
    /// ```
    #[must_use]
    pub fn eval_invocation(&self, name: &str, arguments: &[Expr]) -> Value {
        let name = strip_system_qualifier(name);

        match INTRINSIC_TABLE.iter()
                             .find(|def| def.name.eq_ignore_ascii_case(name))
        {
            Some(def) if def.arity == arguments.len() => (def.func)(self, arguments),
            _ => Value::Unknown,
        }
    }
}
