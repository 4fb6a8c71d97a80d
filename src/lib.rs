//! # pascond
//!
//! pascond decides which regions of Pascal-family source code are live under
//! conditional compilation. It finds `{$IFDEF}`, `{$IF}`, `{$DEFINE}` and
//! related directives while respecting strings and comments, evaluates `$IF`
//! conditions with a small typed expression language, and comments out the
//! dead branches so every remaining line keeps its original number.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    config::PreprocessorConfig,
    preprocessor::core::{PreprocessOutput, Preprocessor},
};

/// Defines the structure of parsed conditions.
///
/// This module declares the `Expr` enum and the operator enums that represent
/// the syntactic structure of an `$IF` condition as a tree. The tree is built
/// by the parser and matched on by the evaluator.
///
/// # Responsibilities
/// - Defines literal, name, operator, set and invocation nodes.
/// - Records the source offset of every node.
pub mod ast;
/// Settings for a preprocessing run.
///
/// This module defines the serializable configuration: seed symbols,
/// compiler version, target architecture, case sensitivity and include
/// search paths. It loads from JSON and is overridden by command-line flags.
pub mod config;
/// The environment conditions are evaluated against.
///
/// This module holds the define-set and the intrinsic type sizes consulted by
/// `Defined` and `SizeOf`.
pub mod environment;
/// Provides the error types of the crate.
///
/// Condition errors come from lexing and parsing `$IF` text; directive errors
/// describe malformed group structure and failed includes; config errors come
/// from loading settings. None of the first two ever abort a pass.
///
/// # Responsibilities
/// - Defines an error enum per failure family.
/// - Attaches positions or line numbers for context.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// The condition expression language.
///
/// This module ties together lexing, parsing, values and evaluation of the
/// expressions written in `$IF` and `$ELSEIF` directives.
///
/// # Responsibilities
/// - Tokenizes and parses condition text.
/// - Evaluates conditions to typed values, with `Unknown` for anything that
///   is not statically decidable.
pub mod interpreter;
/// The directive engine.
///
/// This module scans source text for directives, resolves conditional groups
/// and rewrites the text with dead branches commented out.
///
/// # Responsibilities
/// - Finds directives outside strings and comments.
/// - Matches nested groups and executes live definitions and includes.
/// - Comments out excluded regions without changing line numbers.
pub mod preprocessor;
/// General utilities for safe numeric conversion.
///
/// This module provides the conversions between `i128` and `f64` and the
/// digit parsing used by the lexer and the evaluator.
///
/// # Responsibilities
/// - Convert between `i128` and `f64` without silent data loss.
/// - Parse digit strings with separators in any radix.
pub mod util;

/// Preprocesses `source` with the settings in `config`.
///
/// This is a shorthand for building a [`Preprocessor`] from `config` and
/// running one pass. The pass never fails: problems with the directive
/// structure are returned in the output's diagnostics.
///
/// # Examples
/// ```
/// use pascond::{config::PreprocessorConfig, preprocess};
///
/// let source = "{$IFDEF FOO}\nA;\n{$ELSE}\nB;\n{$ENDIF}\nC;";
/// let output = preprocess(source, &PreprocessorConfig::default());
///
/// assert_eq!(output.text, "(*{$IFDEF FOO}\nA;\n{$ELSE}*)\nB;\n{$ENDIF}\nC;");
/// assert_eq!(output.text.lines().count(), source.lines().count());
/// ```
#[must_use]
pub fn preprocess(source: &str, config: &PreprocessorConfig) -> PreprocessOutput {
    Preprocessor::from_config(config).process(source)
}
