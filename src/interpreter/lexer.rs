use logos::Logos;

use crate::{
    error::ParseError,
    util::num::{parse_decimal_digits, parse_radix_digits},
};

/// Represents a lexical token of the condition language.
///
/// Operator keywords are matched without regard to case, so `DIV`, `Div` and
/// `div` all produce [`Token::Div`]. Qualified names are not joined here:
/// `System.CompilerVersion` lexes as identifier, dot, identifier.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Integer literal tokens, such as `42`, `1_000`, `$FF` or `%1010`.
    #[regex(r"[0-9][0-9_]*", |lex| parse_integer(lex.slice(), 10))]
    #[regex(r"\$[0-9A-Fa-f_]+", |lex| parse_integer(&lex.slice()[1..], 16))]
    #[regex(r"%[01_]+", |lex| parse_integer(&lex.slice()[1..], 2))]
    Integer(i128),
    /// Decimal literal tokens, such as `2.5`, `3.` or `1.5e3`.
    #[regex(r"[0-9][0-9_]*(\.[0-9_]*)+([eE][+-]?[0-9]+)?", parse_decimal)]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9]+", parse_decimal)]
    Decimal(f64),
    /// String literal tokens, such as `'abc'` or `'it''s'`.
    #[regex(r"'([^']|'')*'?", parse_string)]
    String(String),
    /// `div`
    #[token("div", ignore(ascii_case))]
    Div,
    /// `mod`
    #[token("mod", ignore(ascii_case))]
    Mod,
    /// `shl`
    #[token("shl", ignore(ascii_case))]
    Shl,
    /// `shr`
    #[token("shr", ignore(ascii_case))]
    Shr,
    /// `in`
    #[token("in", ignore(ascii_case))]
    In,
    /// `not`
    #[token("not", ignore(ascii_case))]
    Not,
    /// `and`
    #[token("and", ignore(ascii_case))]
    And,
    /// `or`
    #[token("or", ignore(ascii_case))]
    Or,
    /// `xor`
    #[token("xor", ignore(ascii_case))]
    Xor,
    /// Identifier tokens such as `FOO`, `Defined` or `_x1`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `=`
    #[token("=")]
    Equal,
    /// `<>`
    #[token("<>")]
    NotEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
}

/// The reason a slice of condition text could not become a token.
///
/// Logos produces the default variant for any character no pattern accepts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexError {
    /// No token starts with this character.
    #[default]
    UnrecognizedCharacter,
    /// A string literal without its closing quote.
    UnterminatedString,
    /// A numeric literal with a second `.` or a value out of range.
    MalformedNumber,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Decimal(d) => write!(f, "{d:?}"),
            Self::String(s) => write!(f, "'{}'", s.replace('\'', "''")),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Div => write!(f, "div"),
            Self::Mod => write!(f, "mod"),
            Self::Shl => write!(f, "shl"),
            Self::Shr => write!(f, "shr"),
            Self::In => write!(f, "in"),
            Self::Not => write!(f, "not"),
            Self::And => write!(f, "and"),
            Self::Or => write!(f, "or"),
            Self::Xor => write!(f, "xor"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Equal => write!(f, "="),
            Self::NotEqual => write!(f, "<>"),
            Self::Less => write!(f, "<"),
            Self::Greater => write!(f, ">"),
            Self::LessEqual => write!(f, "<="),
            Self::GreaterEqual => write!(f, ">="),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBracket => write!(f, "["),
            Self::RBracket => write!(f, "]"),
            Self::Comma => write!(f, ","),
            Self::Dot => write!(f, "."),
        }
    }
}

/// Tokenizes a directive condition.
///
/// Each token is paired with its byte offset in `source`. Lexing stops at the
/// first failure, which is reported with the offending text and its offset.
///
/// # Errors
/// Returns a [`ParseError`] for an unrecognized character, an unterminated
/// string or a malformed number.
///
/// # Example
/// ```
/// use pascond::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("$FF DIV 2").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Integer(255), 0), (Token::Div, 4), (Token::Integer(2), 8)]);
///
/// assert!(tokenize("1.2.3").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(LexError::UnrecognizedCharacter) => {
                let character = lexer.slice().chars().next().unwrap_or_default();
                return Err(ParseError::UnrecognizedCharacter { character, position });
            },
            Err(LexError::UnterminatedString) => {
                return Err(ParseError::UnterminatedString { position });
            },
            Err(LexError::MalformedNumber) => {
                return Err(ParseError::MalformedNumber { literal: lexer.slice().to_string(),
                                                         position });
            },
        }
    }

    Ok(tokens)
}

/// Parses integer literal digits (prefix already removed) in `radix`.
fn parse_integer(digits: &str, radix: u32) -> Result<i128, LexError> {
    parse_radix_digits(digits, radix).ok_or(LexError::MalformedNumber)
}

/// Parses a decimal literal, rejecting a second `.` in the same literal.
fn parse_decimal(lex: &logos::Lexer<Token>) -> Result<f64, LexError> {
    let text = lex.slice();
    if text.matches('.').count() > 1 {
        return Err(LexError::MalformedNumber);
    }
    parse_decimal_digits(text).ok_or(LexError::MalformedNumber)
}

/// Collapses doubled quotes and checks for the closing quote.
///
/// The pattern allows the closing quote to be absent so that an unterminated
/// string is reported as such instead of as a stray `'`.
fn parse_string(lex: &logos::Lexer<Token>) -> Result<String, LexError> {
    let body = &lex.slice()[1..];
    let mut value = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\'' {
            value.push(c);
            continue;
        }
        if chars.peek() == Some(&'\'') {
            chars.next();
            value.push('\'');
            continue;
        }
        // A lone quote closes the string; the pattern guarantees it is last.
        return Ok(value);
    }

    Err(LexError::UnterminatedString)
}
