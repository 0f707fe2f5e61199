use crate::collator::Collator;
use serde_json::{Map, Number, Value};
use std::cmp::Ordering;

/// CouchDB "raw" collation.
///
/// Values of different types order by [`type_rank`]. Within a type:
/// - numbers compare exactly by value, mixing integer and float forms, so
///   `1` and `1.0` are equal but `2^53 + 1` stays above the float `2^53`
/// - strings compare by code point
/// - arrays compare element by element, then by length
/// - objects compare their entries in key order (key, then value), then by size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawCollator;

impl Collator for RawCollator {
    fn compare(&self, a: &Value, b: &Value) -> Ordering {
        compare(a, b)
    }
}

/// Position of a value's type in the collation sequence.
///
/// `false` and `true` get separate ranks so that boolean ordering needs no
/// special case in [`compare`].
pub fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(false) => 1,
        Value::Bool(true) => 2,
        Value::Number(_) => 3,
        Value::String(_) => 4,
        Value::Array(_) => 5,
        Value::Object(_) => 6,
    }
}

/// Compares two values under raw collation.
///
/// # Examples
///
/// ```
/// use mango_collate::compare;
/// use serde_json::json;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare(&json!(true), &json!(0)), Ordering::Less);
/// assert_eq!(compare(&json!([1, 2]), &json!([1, 2, 0])), Ordering::Less);
/// assert_eq!(compare(&json!({"a": 2}), &json!({"a": 1})), Ordering::Greater);
/// ```
pub fn compare(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => compare_numbers(a, b),
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Array(a), Value::Array(b)) => compare_arrays(a, b),
        (Value::Object(a), Value::Object(b)) => compare_objects(a, b),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

/// Returns `true` when `a` and `b` collate as equal.
///
/// Unlike `==` on [`Value`], numbers with different representations but the
/// same magnitude are equal.
///
/// ```
/// use mango_collate::equal;
/// use serde_json::json;
///
/// assert!(equal(&json!({"n": [2]}), &json!({"n": [2.0]})));
/// assert!(!equal(&json!(0), &json!(false)));
/// ```
pub fn equal(a: &Value, b: &Value) -> bool {
    compare(a, b) == Ordering::Equal
}

/// A JSON number without loss: every `i64` and `u64` fits in an `i128`.
#[derive(Clone, Copy)]
enum Num {
    Int(i128),
    Float(f64),
}

impl From<&Number> for Num {
    fn from(n: &Number) -> Self {
        if let Some(i) = n.as_i64() {
            Num::Int(i128::from(i))
        } else if let Some(u) = n.as_u64() {
            Num::Int(i128::from(u))
        } else {
            Num::Float(n.as_f64().unwrap_or(0.0))
        }
    }
}

/// 2^127, the first float above every `i128`.
const I128_BOUND: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

fn compare_numbers(a: &Number, b: &Number) -> Ordering {
    match (Num::from(a), Num::from(b)) {
        (Num::Int(a), Num::Int(b)) => a.cmp(&b),
        (Num::Int(a), Num::Float(b)) => compare_int_float(a, b),
        (Num::Float(a), Num::Int(b)) => compare_int_float(b, a).reverse(),
        // JSON numbers are always finite.
        (Num::Float(a), Num::Float(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Exact comparison of an integer against a finite float: integer parts
/// first, then the float's fractional part breaks the tie.
fn compare_int_float(i: i128, f: f64) -> Ordering {
    let whole = f.trunc();
    if whole >= I128_BOUND {
        return Ordering::Less;
    }
    if whole < -I128_BOUND {
        return Ordering::Greater;
    }
    // `whole` is integral and within range, so the cast is exact.
    match i.cmp(&(whole as i128)) {
        Ordering::Equal if f > whole => Ordering::Less,
        Ordering::Equal if f < whole => Ordering::Greater,
        other => other,
    }
}

fn compare_arrays(a: &[Value], b: &[Value]) -> Ordering {
    for (x, y) in a.iter().zip(b) {
        match compare(x, y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    a.len().cmp(&b.len())
}

/// Without `preserve_order`, `Map` iterates in key order, so entries line up
/// by key without sorting.
fn compare_objects(a: &Map<String, Value>, b: &Map<String, Value>) -> Ordering {
    for ((ka, va), (kb, vb)) in a.iter().zip(b.iter()) {
        let ord = ka.cmp(kb).then_with(|| compare(va, vb));
        if ord != Ordering::Equal {
            return ord;
        }
    }
    a.len().cmp(&b.len())
}
