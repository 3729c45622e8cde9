//! Parser — text into values.
//!
//! Two entry points:
//!
//! - [`parse_as`]: the caller knows the type (a typed property, a column
//!   schema). The whole text must read as that type or the parse fails.
//! - [`infer`]: the type is unknown. Numbers are tried first, and anything
//!   that is not a number comes back as an owned string. Never fails.

use std::str::FromStr;

use crate::config::ValueConfig;
use crate::model::value::{INF_TOKEN, NEG_INF_TOKEN};
use crate::model::{TypeTag, Value};
use crate::{Error, Result};

/// Parse `text` as exactly `target`, with the default configuration.
pub fn parse_as(target: TypeTag, text: &str) -> Result<Value<'_>> {
    parse_as_with(target, text, &ValueConfig::default())
}

/// Parse `text` as exactly `target`.
///
/// `ConstString` borrows `text`; `String` copies it. `Null` and `Ptr` are
/// never parseable.
pub fn parse_as_with<'t>(target: TypeTag, text: &'t str, config: &ValueConfig) -> Result<Value<'t>> {
    match target {
        TypeTag::String => Ok(Value::String(text.to_owned())),
        TypeTag::ConstString => Ok(Value::ConstString(text)),
        _ => parse_scalar(target, text, config),
    }
}

/// Strict parse for every non-string target. The result never borrows.
pub(crate) fn parse_scalar(target: TypeTag, text: &str, config: &ValueConfig) -> Result<Value<'static>> {
    let parsed = match target {
        TypeTag::Int32 => number(text).map(Value::Int32),
        TypeTag::Int64 => number(text).map(Value::Int64),
        TypeTag::UInt => number(text).map(Value::UInt),
        TypeTag::Float => number(text).map(Value::Float),
        TypeTag::Double => number(text).map(Value::Double),
        TypeTag::Bool => boolean(text, config.bool_digits).map(Value::Bool),
        TypeTag::Inf => (text == INF_TOKEN).then_some(Value::Inf),
        TypeTag::NegInf => (text == NEG_INF_TOKEN).then_some(Value::NegInf),
        TypeTag::String => Some(Value::String(text.to_owned())),
        TypeTag::Null | TypeTag::ConstString | TypeTag::Ptr => None,
    };
    parsed.ok_or_else(|| {
        tracing::trace!(%target, text, "strict parse rejected");
        Error::Parse { target, text: text.to_owned() }
    })
}

fn number<T: FromStr>(text: &str) -> Option<T> {
    text.parse().ok()
}

fn boolean(text: &str, digits: bool) -> Option<bool> {
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else if digits {
        match text {
            "1" => Some(true),
            "0" => Some(false),
            _ => None,
        }
    } else {
        None
    }
}

/// Read `text` as the most specific value it spells.
///
/// Order: the infinity sentinel tokens, `i64`, `u64` (positive values past
/// `i64::MAX`), `f64`, and finally an owned string of the original text.
pub fn infer(text: &str) -> Value<'static> {
    if text == INF_TOKEN {
        return Value::Inf;
    }
    if text == NEG_INF_TOKEN {
        return Value::NegInf;
    }
    if let Some(i) = number::<i64>(text) {
        return Value::Int64(i);
    }
    if let Some(u) = number::<u64>(text) {
        return Value::UInt(u);
    }
    if let Some(d) = number::<f64>(text) {
        return Value::Double(d);
    }
    Value::String(text.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_numbers() {
        assert_eq!(parse_as(TypeTag::Int32, "-17").unwrap().tag(), TypeTag::Int32);
        assert_eq!(parse_as(TypeTag::Int64, "9000000000").unwrap().as_int(), Some(9_000_000_000));
        assert_eq!(parse_as(TypeTag::UInt, "18446744073709551615").unwrap().tag(), TypeTag::UInt);
        assert_eq!(parse_as(TypeTag::Double, "2.5").unwrap().to_double(), Some(2.5));
        assert_eq!(parse_as(TypeTag::Float, "0.25").unwrap().tag(), TypeTag::Float);
    }

    #[test]
    fn test_strict_rejects_trailing_garbage_and_overflow() {
        assert!(parse_as(TypeTag::Int64, "12abc").is_err());
        assert!(parse_as(TypeTag::Int64, " 12").is_err());
        assert!(parse_as(TypeTag::Int64, "").is_err());
        assert!(parse_as(TypeTag::Int32, "3000000000").is_err());
        assert!(parse_as(TypeTag::UInt, "-1").is_err());
        assert!(parse_as(TypeTag::Double, "1.5x").is_err());
    }

    #[test]
    fn test_strict_error_names_target_and_text() {
        let err = parse_as(TypeTag::Double, "abc").unwrap_err();
        assert_eq!(err, Error::Parse { target: TypeTag::Double, text: "abc".into() });
        assert_eq!(err.to_string(), "Parse error: cannot read \"abc\" as DOUBLE");
    }

    #[test]
    fn test_strict_strings() {
        let text = String::from("as is");
        let borrowed = parse_as(TypeTag::ConstString, &text).unwrap();
        assert_eq!(borrowed.tag(), TypeTag::ConstString);
        assert_eq!(borrowed.as_str().unwrap().as_ptr(), text.as_ptr());

        let owned = parse_as(TypeTag::String, &text).unwrap();
        assert_eq!(owned.tag(), TypeTag::String);
        assert_ne!(owned.as_str().unwrap().as_ptr(), text.as_ptr());
    }

    #[test]
    fn test_strict_bool() {
        assert_eq!(parse_as(TypeTag::Bool, "TRUE").unwrap().as_bool(), Some(true));
        assert_eq!(parse_as(TypeTag::Bool, "false").unwrap().as_bool(), Some(false));
        assert_eq!(parse_as(TypeTag::Bool, "1").unwrap().as_bool(), Some(true));
        assert!(parse_as(TypeTag::Bool, "yes").is_err());

        let config = ValueConfig { bool_digits: false, ..Default::default() };
        assert!(parse_as_with(TypeTag::Bool, "0", &config).is_err());
    }

    #[test]
    fn test_strict_unparseable_tags() {
        assert!(parse_as(TypeTag::Null, "NULL").is_err());
        assert!(parse_as(TypeTag::Ptr, "0x10").is_err());
        assert!(parse_as(TypeTag::Inf, "inf").is_err());
        assert!(parse_as(TypeTag::Inf, "+inf").unwrap().is_inf());
        assert!(parse_as(TypeTag::NegInf, "-inf").unwrap().is_neg_inf());
    }

    #[test]
    fn test_infer_prefers_integers() {
        assert_eq!(infer("123").tag(), TypeTag::Int64);
        assert_eq!(infer("-5").as_int(), Some(-5));
        assert_eq!(infer("18446744073709551615").tag(), TypeTag::UInt);
        assert_eq!(infer("1.5").tag(), TypeTag::Double);
        assert_eq!(infer("1e3").to_double(), Some(1000.0));
        assert_eq!(infer("99999999999999999999999").tag(), TypeTag::Double);
    }

    #[test]
    fn test_infer_falls_back_to_string() {
        for text in ["abc", "", "12 apples", "true", "NULL"] {
            let v = infer(text);
            assert_eq!(v.tag(), TypeTag::String, "{text:?}");
            assert_eq!(v.as_str(), Some(text));
        }
    }

    #[test]
    fn test_infer_sentinels() {
        assert!(infer("+inf").is_inf());
        assert!(infer("-inf").is_neg_inf());
        assert_eq!(infer("Infinity").to_double(), Some(f64::INFINITY));
    }
}
