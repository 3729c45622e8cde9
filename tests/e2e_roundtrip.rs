//! End-to-end parse/format round-trip tests.
//!
//! The ingestion layer reads text with `parse::infer`; the result formatter
//! writes it back with the canonical rendering. Every number, both infinity
//! sentinels, and every string without a numeric reading must survive the
//! trip comparison-equal.

use cypher_value::{format, parse, TypeTag, Value};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn numeric() -> impl Strategy<Value = Value<'static>> {
    prop_oneof![
        any::<i32>().prop_map(Value::Int32),
        any::<i64>().prop_map(Value::Int64),
        any::<u64>().prop_map(Value::UInt),
        any::<f32>().prop_map(Value::Float),
        any::<f64>().prop_map(Value::Double),
    ]
}

/// Text that starts with a letter no float spelling starts with
/// (`inf`, `infinity`, `nan`).
fn wordlike() -> impl Strategy<Value = String> {
    "[a-hj-mo-zA-HJ-MO-Z_][a-zA-Z0-9 ,.]{0,16}"
}

proptest! {
    #[test]
    fn numbers_round_trip(v in numeric()) {
        let text = v.to_string();
        let back = parse::infer(&text);
        prop_assert!(back.is_numeric(), "{} came back as {}", text, back.tag());
        prop_assert_eq!(back, v);
    }

    #[test]
    fn words_round_trip(s in wordlike()) {
        let v = Value::String(s.clone());
        let back = parse::infer(&v.to_string());
        prop_assert_eq!(back.tag(), TypeTag::String);
        prop_assert_eq!(back.as_str(), Some(s.as_str()));
    }

    #[test]
    fn strict_parse_reads_canonical_integers(i in any::<i64>()) {
        let text = Value::Int64(i).to_string();
        let back = parse::parse_as(TypeTag::Int64, &text).unwrap();
        prop_assert_eq!(back.as_int(), Some(i));
    }

    #[test]
    fn bounded_format_is_a_prefix(v in numeric(), cap in 0usize..32) {
        let full = v.to_string();
        let mut buf = vec![0u8; cap];
        let w = format::format_into(&v, &mut buf);
        prop_assert_eq!(w.required, full.len());
        prop_assert!(w.written <= cap);
        prop_assert_eq!(&buf[..w.written], &full.as_bytes()[..w.written]);
        prop_assert_eq!(w.is_truncated(), cap < full.len());
    }
}

#[test]
fn test_sentinels_round_trip() {
    for v in [Value::Inf, Value::NegInf] {
        let back = parse::infer(&v.to_string());
        assert_eq!(back.tag(), v.tag());
    }
}

#[test]
fn test_double_infinities_stay_doubles() {
    for d in [f64::INFINITY, f64::NEG_INFINITY] {
        let back = parse::infer(&Value::Double(d).to_string());
        assert_eq!(back.tag(), TypeTag::Double);
        assert_eq!(back.to_double(), Some(d));
    }
}

#[test]
fn test_row_renders_and_reads_back() {
    let row = [Value::Int64(7), Value::Double(2.5), Value::from("Ada"), Value::UInt(u64::MAX)];
    let line = format::concat(&row, ',');
    assert_eq!(line, "7,2.5,Ada,18446744073709551615");

    let back: Vec<Value> = line.split(',').map(parse::infer).collect();
    assert_eq!(back, row);
    assert_eq!(back[0].tag(), TypeTag::Int64);
    assert_eq!(back[3].tag(), TypeTag::UInt);
}
