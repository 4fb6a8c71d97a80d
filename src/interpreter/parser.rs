/// Entry points of the condition grammar.
///
/// Holds the top-level parse functions and the shared result type.
pub mod core;

/// Binary operator parsing.
///
/// Implements the relational, additive and multiplicative precedence tiers,
/// all left-associative.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix operators, literals, names, invocations and parenthesized
/// sub-expressions.
pub mod unary;

/// Utility functions for the parser.
///
/// Provides comma-separated list parsing and set literals.
pub mod utils;
