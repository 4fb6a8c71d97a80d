/// The evaluator module reduces condition expressions to values.
///
/// The evaluator walks the AST against a read-only context holding the
/// define-set, the compiler version and the type-size oracle. It never fails:
/// anything that cannot be decided statically becomes `Unknown`.
///
/// # Responsibilities
/// - Applies every operator of the condition grammar to every value kind.
/// - Resolves the `True`, `False` and `CompilerVersion` names.
/// - Implements the `Defined` and `SizeOf` intrinsics.
pub mod evaluator;
/// The lexer module tokenizes condition text.
///
/// The lexer turns the text of an `$IF`/`$ELSEIF` condition into tokens, each
/// paired with its byte offset. Keywords and operator words are matched
/// case-insensitively.
///
/// # Responsibilities
/// - Recognizes decimal, `$` hexadecimal and `%` binary integers.
/// - Recognizes decimals with an optional exponent and quoted strings.
/// - Reports unrecognized characters and malformed literals.
pub mod lexer;
/// The parser module builds the AST of a condition.
///
/// The parser consumes the token stream from the lexer by recursive descent
/// over three precedence tiers: relational, additive and multiplicative, with
/// unary operators and primaries beneath.
///
/// # Responsibilities
/// - Builds literal, name, operator, set and invocation nodes.
/// - Joins dotted names such as `System.SizeOf`.
/// - Rejects empty input and trailing tokens.
pub mod parser;
/// The value module defines what a condition evaluates to.
///
/// Values are strings, integers, decimals, booleans, sets of values, or the
/// distinguished `Unknown`. Set members use an orderable representation so
/// that sets compare structurally.
pub mod value;
