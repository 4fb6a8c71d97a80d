use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::binary::parse_relational,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, relational, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := relational`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, offset)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_relational(tokens)
}

/// Parses a token sequence that must form exactly one expression.
///
/// # Errors
/// Returns [`ParseError::EmptyExpression`] for an empty sequence and
/// [`ParseError::UnexpectedTrailingTokens`] when tokens remain after a
/// complete expression.
pub fn parse_tokens(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter)?;

    match iter.next() {
        Some((tok, position)) => {
            Err(ParseError::UnexpectedTrailingTokens { token:    tok.to_string(),
                                                       position: *position, })
        },
        None => Ok(expr),
    }
}

/// Lexes and parses the condition text of an `$IF` or `$ELSEIF` directive.
///
/// # Errors
/// Returns the first lex or parse failure.
///
/// # Example
/// ```
/// use pascond::{
///     ast::{BinaryOperator, Expr},
///     interpreter::parser::core::parse_condition,
/// };
///
/// let expr = parse_condition("1 + 2 * 3").unwrap();
/// assert!(matches!(expr, Expr::BinaryOp { op: BinaryOperator::Add, .. }));
///
/// assert!(parse_condition("(1 + 2").is_err());
/// ```
pub fn parse_condition(source: &str) -> ParseResult<Expr> {
    let tokens = tokenize(source)?;
    parse_tokens(&tokens)
}
