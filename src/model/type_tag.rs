//! Type tags and the class predicates built on them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Discriminant of a [`Value`](super::Value).
///
/// Every member is a single bit so that classes of tags can be tested with
/// one mask operation. The masks themselves stay private; callers go
/// through [`TypeTag::is_string_class`], [`TypeTag::is_numeric_class`] and
/// [`TypeTag::comparable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum TypeTag {
    Null = 0x001,
    /// Owned string.
    String = 0x002,
    /// Borrowed string; the referent belongs to the caller.
    ConstString = 0x004,
    Int32 = 0x008,
    Int64 = 0x010,
    UInt = 0x020,
    Bool = 0x040,
    Float = 0x080,
    Double = 0x100,
    Ptr = 0x200,
    /// Positive-infinity sentinel, above every other value.
    Inf = 0x400,
    /// Negative-infinity sentinel, below every other value.
    NegInf = 0x800,
}

const STRING_CLASS: u16 = TypeTag::String as u16 | TypeTag::ConstString as u16;

const NUMERIC_CLASS: u16 = TypeTag::Int32 as u16
    | TypeTag::Int64 as u16
    | TypeTag::UInt as u16
    | TypeTag::Float as u16
    | TypeTag::Double as u16;

impl TypeTag {
    /// All members, in bit order.
    pub const ALL: [TypeTag; 12] = [
        TypeTag::Null,
        TypeTag::String,
        TypeTag::ConstString,
        TypeTag::Int32,
        TypeTag::Int64,
        TypeTag::UInt,
        TypeTag::Bool,
        TypeTag::Float,
        TypeTag::Double,
        TypeTag::Ptr,
        TypeTag::Inf,
        TypeTag::NegInf,
    ];

    pub const fn bits(self) -> u16 {
        self as u16
    }

    /// Map raw bits back to a tag. Only single-bit values naming a member
    /// are accepted; class masks are not tags.
    pub fn from_bits(bits: u16) -> Option<TypeTag> {
        Self::ALL.into_iter().find(|t| t.bits() == bits)
    }

    pub const fn is_string_class(self) -> bool {
        self as u16 & STRING_CLASS != 0
    }

    pub const fn is_numeric_class(self) -> bool {
        self as u16 & NUMERIC_CLASS != 0
    }

    /// True when values of `a` and `b` are ordered by value rather than by
    /// class: same tag, both numeric-class, or both string-class.
    pub const fn comparable(a: TypeTag, b: TypeTag) -> bool {
        a as u16 == b as u16
            || (a.is_numeric_class() && b.is_numeric_class())
            || (a.is_string_class() && b.is_string_class())
    }

    pub const fn name(self) -> &'static str {
        match self {
            TypeTag::Null => "NULL",
            TypeTag::String => "STRING",
            TypeTag::ConstString => "CONST_STRING",
            TypeTag::Int32 => "INT32",
            TypeTag::Int64 => "INT64",
            TypeTag::UInt => "UINT",
            TypeTag::Bool => "BOOL",
            TypeTag::Float => "FLOAT",
            TypeTag::Double => "DOUBLE",
            TypeTag::Ptr => "PTR",
            TypeTag::Inf => "INF",
            TypeTag::NegInf => "NEG_INF",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
