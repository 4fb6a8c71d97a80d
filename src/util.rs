/// Numeric conversion helpers.
///
/// This module provides the conversions the lexer and evaluator need between
/// `i128` integers and `f64` decimals without silently losing precision, and
/// the radix-aware parsing of integer literal digits.
///
/// Conversions return `None` when they would not be exact; callers turn that
/// into an error (lexer) or an Unknown value (evaluator).
pub mod num;
