/// Invocation lookup and arity checking.
///
/// Maps intrinsic names to their handlers.
pub mod core;
/// The `Defined` intrinsic.
///
/// Tests whether a conditional symbol is currently defined.
pub mod defined;
/// The `SizeOf` intrinsic.
///
/// Answers the byte size of an intrinsic type or of a value's kind.
pub mod size_of;
