//! Shallow and deep copy and equality.
//!
//! The deep variants go through a JSON round trip. Whatever JSON cannot
//! express is normalized on the way: `Undefined` map entries disappear,
//! `Undefined` list items and non-finite floats become `null`. Comparisons
//! are made on the serialized text and so depend on key order.

use crate::error::Result;
use crate::value::Value;

/// Returns a copy function.
///
/// A shallow copy duplicates the value as is. A deep copy of a list or map
/// serializes it to JSON and parses it back; other values are returned
/// unchanged.
pub fn clone(deep: bool) -> impl Fn(&Value) -> Result<Value> {
    move |source: &Value| {
        if deep && source.is_container() {
            round_trip(source)
        } else {
            // Owned trees share nothing, so one level and all levels coincide.
            Ok(source.clone())
        }
    }
}

/// Returns an equality function.
///
/// Shallow equality is strict equality: containers are only equal to
/// themselves. Deep equality compares the JSON text of two containers and
/// falls back to strict equality otherwise.
pub fn equal(deep: bool) -> impl Fn(&Value, &Value) -> Result<bool> {
    move |a: &Value, b: &Value| {
        if deep && a.is_container() && b.is_container() {
            Ok(serde_json::to_string(a)? == serde_json::to_string(b)?)
        } else {
            Ok(a.strict_equals(b))
        }
    }
}

fn round_trip(source: &Value) -> Result<Value> {
    let text = serde_json::to_string(source)?;
    Ok(serde_json::from_str(&text)?)
}
