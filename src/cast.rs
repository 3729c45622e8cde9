//! Caster — convert a value to another representation.
//!
//! Casting is pure: the input is never touched and the result is a whole
//! new [`Value`], so a failed cast cannot leave a tag paired with the wrong
//! payload.
//!
//! | From | To | Rule |
//! |------|----|------|
//! | numeric | numeric | native `as` widening/narrowing, always succeeds |
//! | numeric, BOOL, sentinels | STRING | canonical rendering |
//! | string | numeric, BOOL | strict parse of the whole text |
//! | string | STRING | owned copy |
//! | BOOL | integer | 1 / 0 |
//! | INF / NEG_INF | FLOAT, DOUBLE | ±∞ |

use crate::config::ValueConfig;
use crate::model::{TypeTag, Value};
use crate::parse::parse_scalar;
use crate::{Error, Result};

/// Convert `value` to `target`.
pub fn cast<'a>(value: &Value<'a>, target: TypeTag) -> Result<Value<'a>> {
    let from = value.tag();
    if from == target {
        return Ok(value.clone());
    }

    if let Some(text) = value.as_str() {
        return match target {
            TypeTag::ConstString => Err(rejected(from, target)),
            _ => parse_scalar(target, text, &ValueConfig::default()),
        };
    }

    let cast = match (value, target) {
        (_, TypeTag::String) if !matches!(value, Value::Null | Value::Ptr(_)) => {
            Some(Value::String(value.to_string()))
        }
        (Value::Bool(b), TypeTag::Int32) => Some(Value::Int32(i32::from(*b))),
        (Value::Bool(b), TypeTag::Int64) => Some(Value::Int64(i64::from(*b))),
        (Value::Bool(b), TypeTag::UInt) => Some(Value::UInt(u64::from(*b))),
        (Value::Inf, TypeTag::Double) => Some(Value::Double(f64::INFINITY)),
        (Value::Inf, TypeTag::Float) => Some(Value::Float(f32::INFINITY)),
        (Value::NegInf, TypeTag::Double) => Some(Value::Double(f64::NEG_INFINITY)),
        (Value::NegInf, TypeTag::Float) => Some(Value::Float(f32::NEG_INFINITY)),
        _ if from.is_numeric_class() && target.is_numeric_class() => numeric(value, target),
        _ => None,
    };
    cast.ok_or_else(|| rejected(from, target))
}

/// Cast to a 64-bit integer.
pub fn to_int64<'a>(value: &Value<'a>) -> Result<Value<'a>> {
    cast(value, TypeTag::Int64)
}

/// Cast to a double.
pub fn to_double<'a>(value: &Value<'a>) -> Result<Value<'a>> {
    cast(value, TypeTag::Double)
}

/// Cast to an owned string.
pub fn to_string_value<'a>(value: &Value<'a>) -> Result<Value<'a>> {
    cast(value, TypeTag::String)
}

fn rejected(from: TypeTag, to: TypeTag) -> Error {
    tracing::trace!(%from, %to, "cast rejected");
    Error::Cast { from, to }
}

fn numeric(value: &Value<'_>, target: TypeTag) -> Option<Value<'static>> {
    macro_rules! to {
        ($ty:ty) => {
            match *value {
                Value::Int32(i) => i as $ty,
                Value::Int64(i) => i as $ty,
                Value::UInt(u) => u as $ty,
                Value::Float(f) => f as $ty,
                Value::Double(d) => d as $ty,
                _ => return None,
            }
        };
    }
    Some(match target {
        TypeTag::Int32 => Value::Int32(to!(i32)),
        TypeTag::Int64 => Value::Int64(to!(i64)),
        TypeTag::UInt => Value::UInt(to!(u64)),
        TypeTag::Float => Value::Float(to!(f32)),
        TypeTag::Double => Value::Double(to!(f64)),
        _ => return None,
    })
}

impl<'a> Value<'a> {
    /// Method form of [`cast`].
    pub fn cast(&self, target: TypeTag) -> Result<Value<'a>> {
        cast(self, target)
    }
}

// ============================================================================
// Typed extraction
// ============================================================================

/// Convert from Value to concrete types.
pub trait FromValue: Sized {
    fn from_value(val: &Value<'_>) -> Result<Self>;
}

fn type_error(expected: &str, val: &Value<'_>) -> Error {
    Error::Type {
        expected: expected.into(),
        got: val.type_name().into(),
    }
}

impl FromValue for i64 {
    fn from_value(val: &Value<'_>) -> Result<Self> {
        match to_int64(val) {
            Ok(Value::Int64(i)) => Ok(i),
            _ => Err(type_error("INT64", val)),
        }
    }
}

impl FromValue for f64 {
    fn from_value(val: &Value<'_>) -> Result<Self> {
        match to_double(val) {
            Ok(Value::Double(d)) => Ok(d),
            _ => Err(type_error("DOUBLE", val)),
        }
    }
}

impl FromValue for bool {
    fn from_value(val: &Value<'_>) -> Result<Self> {
        val.as_bool().ok_or_else(|| type_error("BOOL", val))
    }
}

impl FromValue for String {
    fn from_value(val: &Value<'_>) -> Result<Self> {
        val.as_str().map(str::to_owned).ok_or_else(|| type_error("STRING", val))
    }
}
