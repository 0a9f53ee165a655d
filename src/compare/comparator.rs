//! Arithmetic and ordering builders.
//!
//! All builders return binary callbacks, so they plug into the structural
//! operators as well as into the combinators.

use crate::value::{Context, Value};
use std::cmp::Ordering;

/// Returns `(a, b) => a + b`, or `-(a + b)` when `negate` is set.
pub fn add(negate: bool) -> impl Fn(&Value, &Value, Context<'_>) -> Value {
    move |a: &Value, b: &Value, _: Context<'_>| {
        let sum = a.plus(b);
        if negate {
            sum.negate()
        } else {
            sum
        }
    }
}

/// Returns `(a, b) => a - b`, or `b - a` when `negate` is set.
pub fn subtract(negate: bool) -> impl Fn(&Value, &Value, Context<'_>) -> Value {
    move |a: &Value, b: &Value, _: Context<'_>| {
        if negate {
            b.minus(a)
        } else {
            a.minus(b)
        }
    }
}

/// Returns a comparator over the string forms of its operands.
///
/// The result is `1`, `-1` or `0`; `negate` gives descending order.
pub fn compare_string(negate: bool) -> impl Fn(&Value, &Value, Context<'_>) -> Value {
    move |a: &Value, b: &Value, _: Context<'_>| {
        three_way(Some(a.text_cmp(b)), negate)
    }
}

/// Returns a comparator over the operands themselves: strings, lists and
/// maps by text, everything else by number. Incomparable operands give `0`.
pub fn compare(negate: bool) -> impl Fn(&Value, &Value, Context<'_>) -> Value {
    move |a: &Value, b: &Value, _: Context<'_>| three_way(a.loose_cmp(b), negate)
}

fn three_way(ordering: Option<Ordering>, negate: bool) -> Value {
    let sign = match ordering {
        Some(Ordering::Greater) => 1,
        Some(Ordering::Less) => -1,
        Some(Ordering::Equal) | None => 0,
    };
    Value::Int(if negate { -sign } else { sign })
}

/// Adapts a comparator for `slice::sort_by`: negative results order `a`
/// first, positive ones `b` first.
pub fn ordering<F>(comparator: F) -> impl Fn(&Value, &Value) -> Ordering
where
    F: Fn(&Value, &Value, Context<'_>) -> Value,
{
    move |a: &Value, b: &Value| {
        comparator(a, b, Context::default())
            .to_number()
            .partial_cmp(&0.0)
            .unwrap_or(Ordering::Equal)
    }
}
