use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect_token, parse_comma_separated, parse_set_literal},
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `+`   (numeric identity)
/// - `-`   (numeric negation)
/// - `not` (logical not)
///
/// Unary operators are right-associative, so `not -x` is parsed as
/// `not (-x)`. Without an operator the function delegates to
/// [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := ("+" | "-" | "not") unary
///            | primary
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (op, position) = match tokens.peek() {
        Some((Token::Plus, position)) => (UnaryOperator::Plus, *position),
        Some((Token::Minus, position)) => (UnaryOperator::Negate, *position),
        Some((Token::Not, position)) => (UnaryOperator::Not, *position),
        _ => return parse_primary(tokens),
    };

    tokens.next();
    let expr = parse_unary(tokens)?;
    Ok(Expr::UnaryOp { op,
                       expr: Box::new(expr),
                       position })
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := INTEGER | DECIMAL | STRING
///              | name_or_invocation
///              | "[" elements "]"
///              | "(" expression ")"
/// ```
///
/// # Errors
/// Any other token, or the end of input, is reported as a missing
/// expression together with what was actually found.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some(peeked) = tokens.peek()
    else {
        return Err(ParseError::UnexpectedEndOfInput { expected: "an expression".to_string() });
    };

    match peeked {
        (Token::Integer(..) | Token::Decimal(..) | Token::String(..), _) => parse_literal(tokens),
        (Token::Identifier(_), _) => parse_name_or_invocation(tokens),
        (Token::LBracket, _) => parse_set_literal(tokens),
        (Token::LParen, _) => parse_grouping(tokens),
        (tok, position) => Err(ParseError::UnexpectedToken { expected: "an expression".to_string(),
                                                             found:    tok.to_string(),
                                                             position: *position, }),
    }
}

/// Parses a numeric or string literal.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let value = match tokens.next() {
        Some((Token::Integer(n), position)) => (LiteralValue::Integer(*n), *position),
        Some((Token::Decimal(d), position)) => (LiteralValue::Decimal(*d), *position),
        Some((Token::String(s), position)) => (LiteralValue::String(s.clone()), *position),
        Some((tok, position)) => {
            return Err(ParseError::UnexpectedToken { expected: "a literal".to_string(),
                                                     found:    tok.to_string(),
                                                     position: *position, });
        },
        None => {
            return Err(ParseError::UnexpectedEndOfInput { expected: "a literal".to_string() });
        },
    };

    Ok(Expr::Literal { value:    value.0,
                       position: value.1, })
}

/// Parses a parenthesized expression.
///
/// The inner expression is returned as-is (no wrapper node).
///
/// Grammar: `grouping := "(" expression ")"`
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect_token(tokens, &Token::LParen)?;
    let expr = parse_expression(tokens)?;
    expect_token(tokens, &Token::RParen)?;
    Ok(expr)
}

/// Parses a name reference or an invocation.
///
/// The name greedily takes a `.`-separated chain of identifiers, so
/// `System.SizeOf` becomes the single name `"System.SizeOf"`. A `(` right
/// after the name turns it into an invocation with a comma-separated,
/// possibly empty, argument list.
///
/// Grammar:
/// ```text
///     name_or_invocation := IDENT ("." IDENT)* ( "(" arguments? ")" )?
/// ```
fn parse_name_or_invocation<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (mut name, position) = match tokens.next() {
        Some((Token::Identifier(n), position)) => (n.clone(), *position),
        Some((tok, position)) => {
            return Err(ParseError::UnexpectedToken { expected: "an identifier".to_string(),
                                                     found:    tok.to_string(),
                                                     position: *position, });
        },
        None => {
            return Err(ParseError::UnexpectedEndOfInput { expected:
                                                              "an identifier".to_string(), });
        },
    };

    while let Some((Token::Dot, _)) = tokens.peek() {
        tokens.next();
        match tokens.next() {
            Some((Token::Identifier(segment), _)) => {
                name.push('.');
                name.push_str(segment);
            },
            Some((tok, position)) => {
                return Err(ParseError::UnexpectedToken { expected: "an identifier after '.'"
                                                                   .to_string(),
                                                         found:    tok.to_string(),
                                                         position: *position, });
            },
            None => {
                return Err(ParseError::UnexpectedEndOfInput { expected:
                                                                  "an identifier after '.'"
                                                                  .to_string(), });
            },
        }
    }

    match tokens.peek() {
        Some((Token::LParen, _)) => {
            tokens.next();
            let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
            Ok(Expr::Invocation { name,
                                  arguments,
                                  position })
        },
        _ => Ok(Expr::Name { name, position }),
    }
}
