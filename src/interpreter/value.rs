/// Set value representation.
///
/// Defines the `SetValue` type, which is used for the elements of a
/// `Value::Set`. Elements are totally ordered so that sets compare
/// structurally regardless of the order they were written in.
pub mod set_value;

pub mod core;
