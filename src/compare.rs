//! Comparator — the one global order over values.
//!
//! Sort, equality and filter evaluation all go through [`compare`], so they
//! never disagree. Values of comparable classes are ordered by value;
//! everything else is ordered by class:
//!
//! ```text
//! NegInf < NULL < numbers < strings < booleans < pointers < Inf
//! ```
//!
//! Numbers of any width are promoted to `f64` before comparing. Integers
//! beyond 2^53 can therefore tie with their neighbours.

use std::cmp::Ordering;

use crate::model::{TypeTag, Value};

/// Compare two values, strcmp-style. Never fails.
pub fn compare(a: &Value<'_>, b: &Value<'_>) -> Ordering {
    let (ta, tb) = (a.tag(), b.tag());
    if !TypeTag::comparable(ta, tb) {
        return class_rank(ta).cmp(&class_rank(tb));
    }

    if let (Some(x), Some(y)) = (a.to_double(), b.to_double()) {
        return compare_doubles(x, y);
    }
    if let (Some(x), Some(y)) = (a.as_str(), b.as_str()) {
        return x.as_bytes().cmp(y.as_bytes());
    }
    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Ptr(x), Value::Ptr(y)) => x.cmp(y),
        // Null, Inf and NegInf carry no payload.
        _ => Ordering::Equal,
    }
}

/// Position of a tag's class in the cross-class order.
fn class_rank(tag: TypeTag) -> u8 {
    match tag {
        TypeTag::NegInf => 0,
        TypeTag::Null => 1,
        t if t.is_numeric_class() => 2,
        t if t.is_string_class() => 3,
        TypeTag::Bool => 4,
        TypeTag::Ptr => 5,
        _ => 6,
    }
}

fn compare_doubles(x: f64, y: f64) -> Ordering {
    if x == y {
        return Ordering::Equal;
    }
    // NaN sits above every number so the order stays total.
    match (x.is_nan(), y.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => sign(x - y),
    }
}

/// Reduce a difference to its sign. A plain cast to an integer would turn
/// any |delta| < 1.0 into a tie.
fn sign(delta: f64) -> Ordering {
    (i8::from(delta > 0.0) - i8::from(delta < 0.0)).cmp(&0)
}

// ============================================================================
// Trait impls on Value
// ============================================================================

impl Value<'_> {
    /// [`compare`] as -1, 0 or 1.
    pub fn cmp_sign(&self, other: &Value<'_>) -> i32 {
        compare(self, other) as i32
    }
}

impl<'b> PartialEq<Value<'b>> for Value<'_> {
    fn eq(&self, other: &Value<'b>) -> bool {
        compare(self, other).is_eq()
    }
}

impl Eq for Value<'_> {}

impl<'b> PartialOrd<Value<'b>> for Value<'_> {
    fn partial_cmp(&self, other: &Value<'b>) -> Option<Ordering> {
        Some(compare(self, other))
    }
}

impl Ord for Value<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}
