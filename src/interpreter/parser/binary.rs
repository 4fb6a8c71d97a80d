use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses relational expressions.
///
/// This is the loosest tier and handles `=`, `<>`, `<`, `>`, `<=`, `>=` and
/// `in`, all left-associative.
///
/// Grammar: `relational := additive (("=" | "<>" | "<" | ">" | "<=" | ">=" |
/// "in") additive)*`
///
/// # Parameters
/// - `tokens`: Token stream with offsets.
///
/// # Returns
/// A possibly nested `Expr::BinaryOp` tree.
pub fn parse_relational<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_tier(tokens, is_relational_op, parse_additive)
}

/// Parses additive expressions.
///
/// Handles left-associative `+`, `-`, `or` and `xor`.
///
/// Grammar: `additive := multiplicative (("+" | "-" | "or" | "xor")
/// multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with offsets.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_tier(tokens, is_additive_op, parse_multiplicative)
}

/// Parses multiplicative expressions.
///
/// Handles left-associative `*`, `/`, `div`, `mod`, `and`, `shl` and `shr`.
///
/// Grammar: `multiplicative := unary (("*" | "/" | "div" | "mod" | "and" |
/// "shl" | "shr") unary)*`
///
/// # Parameters
/// - `tokens`: Token stream with offsets.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_tier(tokens, is_multiplicative_op, parse_unary)
}

/// Parses one left-associative precedence tier.
///
/// Operands are parsed with `parse_operand`; operators accepted by
/// `belongs` fold the operands into `Expr::BinaryOp` nodes from the left.
fn parse_tier<'a, I>(tokens: &mut Peekable<I>,
                     belongs: fn(BinaryOperator) -> bool,
                     parse_operand: fn(&mut Peekable<I>) -> ParseResult<Expr>)
                     -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_operand(tokens)?;

    while let Some((token, position)) = tokens.peek() {
        let op = match token_to_binary_operator(token) {
            Some(op) if belongs(op) => op,
            _ => break,
        };

        let position = *position;
        tokens.next(); // consume operator

        let right = parse_operand(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                position };
    }

    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for tokens that are not binary operators. `+` and `-` map
/// to `Add` and `Sub`; the unary parser handles their prefix use.
///
/// # Example
/// ```
/// use pascond::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Shl), Some(BinaryOperator::Shl));
/// assert_eq!(token_to_binary_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Div => Some(BinaryOperator::IntDiv),
        Token::Mod => Some(BinaryOperator::Mod),
        Token::Shl => Some(BinaryOperator::Shl),
        Token::Shr => Some(BinaryOperator::Shr),
        Token::Equal => Some(BinaryOperator::Equal),
        Token::NotEqual => Some(BinaryOperator::NotEqual),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::In => Some(BinaryOperator::In),
        Token::And => Some(BinaryOperator::And),
        Token::Or => Some(BinaryOperator::Or),
        Token::Xor => Some(BinaryOperator::Xor),
        _ => None,
    }
}

/// Returns `true` for the operators of the relational tier.
///
/// # Example
/// ```
/// use pascond::{ast::BinaryOperator, interpreter::parser::binary::is_relational_op};
///
/// assert!(is_relational_op(BinaryOperator::In));
/// assert!(!is_relational_op(BinaryOperator::Add));
/// ```
#[must_use]
pub const fn is_relational_op(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::Equal
             | BinaryOperator::NotEqual
             | BinaryOperator::Less
             | BinaryOperator::Greater
             | BinaryOperator::LessEqual
             | BinaryOperator::GreaterEqual
             | BinaryOperator::In)
}

/// Returns `true` for the operators of the additive tier.
#[must_use]
pub const fn is_additive_op(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::Add | BinaryOperator::Sub | BinaryOperator::Or | BinaryOperator::Xor)
}

/// Returns `true` for the operators of the multiplicative tier.
#[must_use]
pub const fn is_multiplicative_op(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::Mul
             | BinaryOperator::Div
             | BinaryOperator::IntDiv
             | BinaryOperator::Mod
             | BinaryOperator::And
             | BinaryOperator::Shl
             | BinaryOperator::Shr)
}
