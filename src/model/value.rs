//! Universal scalar value type.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::TypeTag;

/// Opaque handle to caller-managed memory.
///
/// The value system never dereferences or frees it; it is carried, compared
/// by address and rendered, nothing more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Handle(pub usize);

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Dynamically-typed scalar.
///
/// One variant per [`TypeTag`]. `String` is the only variant that owns heap
/// memory: it is moved, never aliased, and `Clone` duplicates the buffer.
/// `ConstString` borrows text the caller keeps alive for `'a`; cloning it
/// copies the reference.
///
/// Equality and ordering follow [`compare`](crate::compare::compare), so
/// `Value::Int32(1) == Value::Double(1.0)`. Use [`Value::tag`] when the
/// representation matters.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum Value<'a> {
    #[default]
    Null,
    String(String),
    ConstString(&'a str),
    Int32(i32),
    Int64(i64),
    UInt(u64),
    Bool(bool),
    Float(f32),
    Double(f64),
    Ptr(Handle),
    Inf,
    NegInf,
}

// ============================================================================
// Constructors
// ============================================================================

impl<'a> Value<'a> {
    pub const fn null() -> Self { Value::Null }

    /// Owned string holding a copy of `s`.
    pub fn string(s: impl Into<String>) -> Self { Value::String(s.into()) }

    /// Borrowed string; nothing is copied and nothing is freed on drop.
    pub const fn const_string(s: &'a str) -> Self { Value::ConstString(s) }

    pub const fn int32(i: i32) -> Self { Value::Int32(i) }
    pub const fn int64(i: i64) -> Self { Value::Int64(i) }
    pub const fn uint(u: u64) -> Self { Value::UInt(u) }
    pub const fn boolean(b: bool) -> Self { Value::Bool(b) }
    pub const fn float(f: f32) -> Self { Value::Float(f) }
    pub const fn double(d: f64) -> Self { Value::Double(d) }
    pub const fn ptr(h: Handle) -> Self { Value::Ptr(h) }
    pub const fn inf() -> Self { Value::Inf }
    pub const fn neg_inf() -> Self { Value::NegInf }
}

// ============================================================================
// Type checking
// ============================================================================

impl<'a> Value<'a> {
    pub const fn tag(&self) -> TypeTag {
        match self {
            Value::Null => TypeTag::Null,
            Value::String(_) => TypeTag::String,
            Value::ConstString(_) => TypeTag::ConstString,
            Value::Int32(_) => TypeTag::Int32,
            Value::Int64(_) => TypeTag::Int64,
            Value::UInt(_) => TypeTag::UInt,
            Value::Bool(_) => TypeTag::Bool,
            Value::Float(_) => TypeTag::Float,
            Value::Double(_) => TypeTag::Double,
            Value::Ptr(_) => TypeTag::Ptr,
            Value::Inf => TypeTag::Inf,
            Value::NegInf => TypeTag::NegInf,
        }
    }

    pub const fn type_name(&self) -> &'static str { self.tag().name() }

    pub const fn is_null(&self) -> bool { matches!(self, Value::Null) }

    /// True when `v` is absent or holds NULL.
    pub fn is_null_ptr(v: Option<&Value<'_>>) -> bool {
        v.is_none_or(|v| v.is_null())
    }

    pub const fn is_inf(&self) -> bool { matches!(self, Value::Inf) }
    pub const fn is_neg_inf(&self) -> bool { matches!(self, Value::NegInf) }
    pub const fn is_numeric(&self) -> bool { self.tag().is_numeric_class() }
    pub const fn is_string(&self) -> bool { self.tag().is_string_class() }

    /// Text of either string variant.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            Value::ConstString(s) => Some(s),
            _ => None,
        }
    }

    /// Integer payload, if it fits an `i64` without rounding.
    pub fn as_int(&self) -> Option<i64> {
        match *self {
            Value::Int32(i) => Some(i64::from(i)),
            Value::Int64(i) => Some(i),
            Value::UInt(u) => i64::try_from(u).ok(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Value::Bool(b) => Some(b),
            _ => None,
        }
    }

    /// Numeric-class payload promoted to double precision.
    pub fn to_double(&self) -> Option<f64> {
        match *self {
            Value::Int32(i) => Some(f64::from(i)),
            Value::Int64(i) => Some(i as f64),
            Value::UInt(u) => Some(u as f64),
            Value::Float(f) => Some(f64::from(f)),
            Value::Double(d) => Some(d),
            _ => None,
        }
    }

    /// Detach from borrowed memory. A `ConstString` becomes an owned
    /// `String`; everything else is moved as is.
    pub fn into_owned(self) -> Value<'static> {
        match self {
            Value::Null => Value::Null,
            Value::String(s) => Value::String(s),
            Value::ConstString(s) => Value::String(s.to_owned()),
            Value::Int32(i) => Value::Int32(i),
            Value::Int64(i) => Value::Int64(i),
            Value::UInt(u) => Value::UInt(u),
            Value::Bool(b) => Value::Bool(b),
            Value::Float(f) => Value::Float(f),
            Value::Double(d) => Value::Double(d),
            Value::Ptr(h) => Value::Ptr(h),
            Value::Inf => Value::Inf,
            Value::NegInf => Value::NegInf,
        }
    }
}

// ============================================================================
// Conversions (From impls)
// ============================================================================

impl From<bool> for Value<'_> { fn from(v: bool) -> Self { Value::Bool(v) } }
impl From<i32> for Value<'_> { fn from(v: i32) -> Self { Value::Int32(v) } }
impl From<i64> for Value<'_> { fn from(v: i64) -> Self { Value::Int64(v) } }
impl From<u64> for Value<'_> { fn from(v: u64) -> Self { Value::UInt(v) } }
impl From<f32> for Value<'_> { fn from(v: f32) -> Self { Value::Float(v) } }
impl From<f64> for Value<'_> { fn from(v: f64) -> Self { Value::Double(v) } }
impl From<Handle> for Value<'_> { fn from(v: Handle) -> Self { Value::Ptr(v) } }
impl From<String> for Value<'_> { fn from(v: String) -> Self { Value::String(v) } }
impl From<&str> for Value<'_> { fn from(v: &str) -> Self { Value::String(v.to_owned()) } }
impl<'a, T: Into<Value<'a>>> From<Option<T>> for Value<'a> {
    fn from(v: Option<T>) -> Self { v.map(Into::into).unwrap_or(Value::Null) }
}

// ============================================================================
// Display (canonical rendering)
// ============================================================================

/// Token rendered for [`Value::Inf`] and recognized by the parser.
pub const INF_TOKEN: &str = "+inf";
/// Token rendered for [`Value::NegInf`] and recognized by the parser.
pub const NEG_INF_TOKEN: &str = "-inf";

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::String(s) => f.write_str(s),
            Value::ConstString(s) => f.write_str(s),
            Value::Int32(i) => write!(f, "{i}"),
            Value::Int64(i) => write!(f, "{i}"),
            Value::UInt(u) => write!(f, "{u}"),
            Value::Bool(b) => write!(f, "{b}"),
            // Promoted first so the text reads back to the same double.
            Value::Float(v) => write_double(f, f64::from(*v)),
            Value::Double(d) => write_double(f, *d),
            Value::Ptr(h) => write!(f, "<ptr {h}>"),
            Value::Inf => f.write_str(INF_TOKEN),
            Value::NegInf => f.write_str(NEG_INF_TOKEN),
        }
    }
}

/// Shortest text that parses back to `d`. Non-finite values use spellings
/// that cannot collide with the sentinel tokens.
fn write_double(f: &mut fmt::Formatter<'_>, d: f64) -> fmt::Result {
    if d.is_nan() {
        f.write_str("NaN")
    } else if d.is_infinite() {
        f.write_str(if d > 0.0 { "Infinity" } else { "-Infinity" })
    } else {
        write!(f, "{d:?}")
    }
}
