use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::interpreter::value::core::Value;

/// Target architecture of the compiler whose directives are evaluated.
///
/// Decides pointer-sized and platform-dependent type sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    /// 32-bit x86.
    #[default]
    X86,
    /// 64-bit x86.
    X64,
    /// 32-bit ARM.
    Arm32,
    /// 64-bit ARM.
    Arm64,
}

impl Architecture {
    /// Gets the size of a pointer in bytes.
    #[must_use]
    pub const fn pointer_size(self) -> u64 {
        match self {
            Self::X86 | Self::Arm32 => 4,
            Self::X64 | Self::Arm64 => 8,
        }
    }
}

/// The intrinsic types `SizeOf` can name directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntrinsicType {
    /// Signed 8-bit integer.
    ShortInt,
    /// Unsigned 8-bit integer.
    Byte,
    /// Signed 16-bit integer.
    SmallInt,
    /// Unsigned 16-bit integer.
    Word,
    /// Signed 32-bit integer.
    Integer,
    /// Unsigned 32-bit integer.
    Cardinal,
    /// Signed 32-bit integer on these targets.
    LongInt,
    /// Unsigned 32-bit integer on these targets.
    LongWord,
    /// Signed 64-bit integer.
    Int64,
    /// Unsigned 64-bit integer.
    UInt64,
    /// Signed pointer-sized integer.
    NativeInt,
    /// Unsigned pointer-sized integer.
    NativeUInt,
    /// Untyped pointer.
    Pointer,
    /// Single-byte character.
    AnsiChar,
    /// UTF-16 code unit.
    WideChar,
    /// The default character type, `WideChar`.
    Char,
    /// One-byte boolean.
    Boolean,
    /// Byte-sized boolean.
    ByteBool,
    /// Word-sized boolean.
    WordBool,
    /// 32-bit boolean.
    LongBool,
    /// 32-bit float.
    Single,
    /// 64-bit float.
    Double,
    /// The default real type, `Double`.
    Real,
    /// Legacy 6-byte real.
    Real48,
    /// Extended-precision float, 10 bytes on x86.
    Extended,
    /// 64-bit integer stored as a float.
    Comp,
    /// Fixed-point 64-bit currency.
    Currency,
    /// Length-prefixed string of up to 255 bytes.
    ShortString,
    /// Reference to a byte string.
    AnsiString,
    /// Reference to a COM wide string.
    WideString,
    /// Reference to a UTF-16 string.
    UnicodeString,
    /// The default string type, `UnicodeString`.
    String,
    /// Tagged variant record.
    Variant,
    /// OLE-compatible variant.
    OleVariant,
    /// The representation of `[]`.
    EmptySet,
}

impl FromStr for IntrinsicType {
    type Err = ();

    /// Parses an intrinsic type name, ignoring case.
    ///
    /// `EmptySet` has no source spelling and is never produced here.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        const NAMES: &[(&str, IntrinsicType)] = &[("shortint", IntrinsicType::ShortInt),
                                                  ("byte", IntrinsicType::Byte),
                                                  ("smallint", IntrinsicType::SmallInt),
                                                  ("word", IntrinsicType::Word),
                                                  ("integer", IntrinsicType::Integer),
                                                  ("cardinal", IntrinsicType::Cardinal),
                                                  ("longint", IntrinsicType::LongInt),
                                                  ("longword", IntrinsicType::LongWord),
                                                  ("int64", IntrinsicType::Int64),
                                                  ("uint64", IntrinsicType::UInt64),
                                                  ("nativeint", IntrinsicType::NativeInt),
                                                  ("nativeuint", IntrinsicType::NativeUInt),
                                                  ("pointer", IntrinsicType::Pointer),
                                                  ("ansichar", IntrinsicType::AnsiChar),
                                                  ("widechar", IntrinsicType::WideChar),
                                                  ("char", IntrinsicType::Char),
                                                  ("boolean", IntrinsicType::Boolean),
                                                  ("bytebool", IntrinsicType::ByteBool),
                                                  ("wordbool", IntrinsicType::WordBool),
                                                  ("longbool", IntrinsicType::LongBool),
                                                  ("single", IntrinsicType::Single),
                                                  ("double", IntrinsicType::Double),
                                                  ("real", IntrinsicType::Real),
                                                  ("real48", IntrinsicType::Real48),
                                                  ("extended", IntrinsicType::Extended),
                                                  ("comp", IntrinsicType::Comp),
                                                  ("currency", IntrinsicType::Currency),
                                                  ("shortstring", IntrinsicType::ShortString),
                                                  ("ansistring", IntrinsicType::AnsiString),
                                                  ("widestring", IntrinsicType::WideString),
                                                  ("unicodestring",
                                                   IntrinsicType::UnicodeString),
                                                  ("string", IntrinsicType::String),
                                                  ("variant", IntrinsicType::Variant),
                                                  ("olevariant", IntrinsicType::OleVariant)];

        NAMES.iter()
             .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
             .map(|(_, ty)| *ty)
             .ok_or(())
    }
}

impl IntrinsicType {
    /// Picks the smallest integer type whose range contains `value`.
    ///
    /// Candidates are tried in the order ShortInt, Byte, SmallInt, Word,
    /// Integer, Cardinal, Int64, UInt64.
    ///
    /// # Example
    /// ```
    /// use pascond::environment::IntrinsicType;
    ///
    /// assert_eq!(IntrinsicType::for_integer(-1), Some(IntrinsicType::ShortInt));
    /// assert_eq!(IntrinsicType::for_integer(200), Some(IntrinsicType::Byte));
    /// assert_eq!(IntrinsicType::for_integer(70_000), Some(IntrinsicType::Integer));
    /// assert_eq!(IntrinsicType::for_integer(i128::MAX), None);
    /// ```
    #[must_use]
    pub fn for_integer(value: i128) -> Option<Self> {
        let ranges: [(i128, i128, Self); 8] =
            [(i8::MIN.into(), i8::MAX.into(), Self::ShortInt),
             (u8::MIN.into(), u8::MAX.into(), Self::Byte),
             (i16::MIN.into(), i16::MAX.into(), Self::SmallInt),
             (u16::MIN.into(), u16::MAX.into(), Self::Word),
             (i32::MIN.into(), i32::MAX.into(), Self::Integer),
             (u32::MIN.into(), u32::MAX.into(), Self::Cardinal),
             (i64::MIN.into(), i64::MAX.into(), Self::Int64),
             (u64::MIN.into(), u64::MAX.into(), Self::UInt64)];

        ranges.iter()
              .find(|(min, max, _)| (*min..=*max).contains(&value))
              .map(|(_, _, ty)| *ty)
    }

    /// Maps the kind of an evaluated value to a representative type.
    ///
    /// Returns `None` for `Unknown`.
    #[must_use]
    pub fn for_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(_) => Some(Self::String),
            Value::Integer(n) => Self::for_integer(*n),
            Value::Decimal(_) => Some(Self::Extended),
            Value::Boolean(_) => Some(Self::Boolean),
            Value::Set(_) => Some(Self::EmptySet),
            Value::Unknown => None,
        }
    }
}

/// Answers how many bytes an intrinsic type occupies on the target.
///
/// This is the seam to the broader type system; the preprocessor only ever
/// asks about intrinsic types.
pub trait TypeSizeOracle {
    /// Gets the size of `ty` in bytes, or `None` if it is not known.
    fn size_of(&self, ty: IntrinsicType) -> Option<u64>;

    /// Gets the size of a pointer in bytes, the fallback for `SizeOf`.
    fn pointer_size(&self) -> u64;
}

/// The conventional intrinsic type sizes of a Delphi-style toolchain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StandardTypeSizes {
    /// The architecture sizes are computed for.
    pub architecture: Architecture,
}

impl StandardTypeSizes {
    /// Creates the size table for `architecture`.
    #[must_use]
    pub const fn new(architecture: Architecture) -> Self {
        Self { architecture }
    }
}

impl TypeSizeOracle for StandardTypeSizes {
    fn size_of(&self, ty: IntrinsicType) -> Option<u64> {
        use IntrinsicType::{
            AnsiChar, AnsiString, Boolean, Byte, ByteBool, Cardinal, Char, Comp, Currency, Double,
            EmptySet, Extended, Int64, Integer, LongBool, LongInt, LongWord, NativeInt,
            NativeUInt, OleVariant, Pointer, Real, Real48, ShortInt, ShortString, Single,
            SmallInt, String, UInt64, UnicodeString, Variant, WideChar, WideString, Word,
            WordBool,
        };

        let pointer = self.pointer_size();
        Some(match ty {
            ShortInt | Byte | AnsiChar | Boolean | ByteBool | EmptySet => 1,
            SmallInt | Word | WideChar | Char | WordBool => 2,
            Integer | Cardinal | LongInt | LongWord | LongBool | Single => 4,
            Real48 => 6,
            Int64 | UInt64 | Double | Real | Comp | Currency => 8,
            Extended => match self.architecture {
                Architecture::X86 => 10,
                Architecture::X64 | Architecture::Arm32 | Architecture::Arm64 => 8,
            },
            NativeInt | NativeUInt | Pointer | AnsiString | WideString | UnicodeString
            | String => pointer,
            ShortString => 256,
            Variant | OleVariant => {
                if pointer == 8 {
                    24
                } else {
                    16
                }
            },
        })
    }

    fn pointer_size(&self) -> u64 {
        self.architecture.pointer_size()
    }
}
