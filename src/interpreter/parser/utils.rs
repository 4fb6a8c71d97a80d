use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by invocation argument lists and set literals. It
/// repeatedly calls `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse, an unexpected token is
/// encountered, or the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> Result<Vec<T>, ParseError>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            Some((tok, _)) if tok == closing => {
                tokens.next();
                break;
            },
            Some((tok, position)) => {
                return Err(ParseError::UnexpectedToken { expected: format!("',' or '{closing}'"),
                                                         found:    tok.to_string(),
                                                         position: *position, });
            },
            None => {
                return Err(ParseError::UnexpectedEndOfInput { expected:
                                                                  format!("',' or '{closing}'"), });
            },
        }
    }
    Ok(items)
}

/// Consumes the next token, which must equal `expected`.
///
/// # Errors
/// Reports the token actually found, or the end of input.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                                                          expected: &Token)
                                                          -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, position)) if tok == expected => Ok(*position),
        Some((tok, position)) => {
            Err(ParseError::UnexpectedToken { expected: format!("'{expected}'"),
                                              found:    tok.to_string(),
                                              position: *position, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { expected: format!("'{expected}'") }),
    }
}

/// Parses a set literal of the form `[ expr1, expr2, ..., exprN ]`.
///
/// Elements are parsed using [`parse_expression`] and collected into an
/// `Expr::SetLiteral` node. An empty set `[]` is accepted.
///
/// Grammar: `set := "[" (expression ("," expression)*)? "]"`.
///
/// # Errors
/// Returns a `ParseError` if `[` is missing, elements fail to parse, or the
/// closing `]` is missing.
pub fn parse_set_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let position = expect_token(tokens, &Token::LBracket)?;
    let elements = parse_comma_separated(tokens, parse_expression, &Token::RBracket)?;

    Ok(Expr::SetLiteral { elements,
                          position })
}
