#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while lexing or parsing a condition.
///
/// Positions are byte offsets into the condition text.
pub enum ParseError {
    /// A character that starts no token.
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// Where it was found.
        position:  usize,
    },
    /// A string literal that reached the end of the condition without its
    /// closing quote.
    UnterminatedString {
        /// Where the string started.
        position: usize,
    },
    /// A numeric literal that could not be read, such as `1.2.3` or a value
    /// too large to represent.
    MalformedNumber {
        /// The literal text.
        literal:  String,
        /// Where the literal started.
        position: usize,
    },
    /// Found a token other than the one the grammar required.
    UnexpectedToken {
        /// Description of what was expected.
        expected: String,
        /// The token actually found.
        found:    String,
        /// Where the token was found.
        position: usize,
    },
    /// Reached the end of the condition while something was still expected.
    UnexpectedEndOfInput {
        /// Description of what was expected.
        expected: String,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Where it was found.
        position: usize,
    },
    /// The condition contained no tokens at all.
    EmptyExpression,
}

impl ParseError {
    /// Text used in place of a token when the input is exhausted.
    pub const END_OF_INPUT: &'static str = "end of input";
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter { character, position } => {
                write!(f, "Error at {position}: Unrecognized character '{character}'.")
            },
            Self::UnterminatedString { position } => {
                write!(f, "Error at {position}: Unterminated string literal.")
            },
            Self::MalformedNumber { literal, position } => {
                write!(f, "Error at {position}: Malformed numeric literal '{literal}'.")
            },
            Self::UnexpectedToken { expected,
                                    found,
                                    position, } => {
                write!(f, "Error at {position}: Expected {expected}, found '{found}'.")
            },
            Self::UnexpectedEndOfInput { expected } => {
                write!(f, "Expected {expected}, found {}.", Self::END_OF_INPUT)
            },
            Self::UnexpectedTrailingTokens { token, position } => {
                write!(f, "Error at {position}: Extra tokens after expression: '{token}'.")
            },
            Self::EmptyExpression => write!(f, "Condition is empty."),
        }
    }
}

impl std::error::Error for ParseError {}
