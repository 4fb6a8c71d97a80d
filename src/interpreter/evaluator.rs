/// Binary operator evaluation logic.
///
/// Handles arithmetic, integer, comparison, membership and logical
/// operators across every combination of value kinds.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements numeric identity, negation and logical NOT.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the evaluation context and the dispatch over expression nodes.
pub mod core;

/// Utility functions for evaluation.
///
/// Provides numeric promotion and name qualification helpers shared by the
/// operator and invocation logic.
pub mod utils;

/// Invocation evaluation.
///
/// Handles the intrinsics a condition may call: `Defined` and `SizeOf`.
pub mod function;
