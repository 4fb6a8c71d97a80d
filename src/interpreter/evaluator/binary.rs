/// Binary operator dispatch.
pub mod core;
/// `+ - * /` and the integer-only `div mod shl shr`.
pub mod scalar;
/// `= <> < > <= >=`.
pub mod comparison;
/// `in` and subset comparisons.
pub mod set;
/// `and or xor`.
pub mod logic;
