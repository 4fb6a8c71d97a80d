/// The running set of conditional symbols.
///
/// A `DefineSet` is seeded from configuration, cloned for every pass, and
/// mutated by `$DEFINE`/`$UNDEF` in textual order.
pub mod defines;
/// Intrinsic type sizes.
///
/// Provides the intrinsic type names `SizeOf` understands and the oracle
/// trait that maps them to byte sizes for a target architecture.
pub mod types;

pub use defines::DefineSet;
pub use types::{Architecture, IntrinsicType, StandardTypeSizes, TypeSizeOracle};
