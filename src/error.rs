/// Condition errors.
///
/// Defines all error types that can occur while lexing or parsing the
/// condition of an `$IF` or `$ELSEIF` directive: unrecognized characters,
/// unterminated strings, malformed numbers and grammar mistakes. These never
/// abort a file; the condition that produced one is treated as false.
pub mod parse_error;
/// Directive structure errors.
///
/// Contains the problems found while matching conditional groups and
/// expanding includes. They are collected as diagnostics of a preprocessing
/// pass and the offending directive is conservatively ignored.
pub mod directive_error;

/// Configuration errors.
///
/// Raised when a JSON configuration file cannot be read or parsed.
pub mod config_error;

pub use config_error::ConfigError;
pub use directive_error::DirectiveError;
pub use parse_error::ParseError;
