//! Loose conversions between values, following JSON-document conventions:
//! truthiness, strict equality, number and string coercion.

use super::value::Value;
use std::cmp::Ordering;

/// Truthy decides whether a callback result keeps, matches or passes.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Null | Value::Undefined => false,
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Float(f) => *f != 0.0 && !f.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::List(_) | Value::Map(_) => true,
        }
    }
}

impl Value {
    /// Strict equality.
    ///
    /// Numbers compare by numeric value across `Int` and `Float`, `NaN` is
    /// never equal to anything. Lists and maps are only equal to themselves,
    /// i.e. when both references point at the same value.
    pub fn strict_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) | (Value::Undefined, Value::Undefined) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
                self.to_number() == other.to_number()
            }
            (Value::String(a), Value::String(b)) => a == b,
            (Value::List(_), Value::List(_)) | (Value::Map(_), Value::Map(_)) => {
                std::ptr::eq(self, other)
            }
            _ => false,
        }
    }

    /// Converts to a number. Values without a numeric reading give `NaN`.
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Undefined => f64::NAN,
            Value::Null => 0.0,
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Int(i) => *i as f64,
            Value::Float(f) => *f,
            Value::String(s) => parse_number(s),
            Value::List(_) | Value::Map(_) => parse_number(&self.to_text()),
        }
    }

    /// Converts to the string form used for keys and string comparison.
    pub fn to_text(&self) -> String {
        match self {
            Value::Undefined => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => format_number(*f),
            Value::String(s) => s.clone(),
            Value::List(items) => items
                .iter()
                .map(|item| match item {
                    Value::Null | Value::Undefined => String::new(),
                    other => other.to_text(),
                })
                .collect::<Vec<_>>()
                .join(","),
            Value::Map(_) => "[object Object]".to_string(),
        }
    }

    /// Adds two values. Strings and containers concatenate, everything else
    /// adds numerically; two ints stay an int unless the sum overflows.
    pub fn plus(&self, other: &Value) -> Value {
        let textual = |v: &Value| matches!(v, Value::String(_) | Value::List(_) | Value::Map(_));
        if textual(self) || textual(other) {
            return Value::String(self.to_text() + &other.to_text());
        }
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a
                .checked_add(*b)
                .map_or_else(|| Value::Float(*a as f64 + *b as f64), Value::Int),
            _ => Value::Float(self.to_number() + other.to_number()),
        }
    }

    /// Subtracts `other` from `self` numerically.
    pub fn minus(&self, other: &Value) -> Value {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a
                .checked_sub(*b)
                .map_or_else(|| Value::Float(*a as f64 - *b as f64), Value::Int),
            _ => Value::Float(self.to_number() - other.to_number()),
        }
    }

    /// Numeric negation.
    pub fn negate(&self) -> Value {
        match self {
            Value::Int(i) => i.checked_neg().map_or_else(|| Value::Float(-(*i as f64)), Value::Int),
            other => Value::Float(-other.to_number()),
        }
    }

    /// Relational comparison. Lists and maps are read as their string form
    /// first; when both sides are then strings they compare by text,
    /// anything else by number. `None` when either side is `NaN`.
    pub fn loose_cmp(&self, other: &Value) -> Option<Ordering> {
        let textual = |v: &Value| matches!(v, Value::String(_) | Value::List(_) | Value::Map(_));
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            _ if textual(self) && textual(other) => Some(self.text_cmp(other)),
            _ => self.to_number().partial_cmp(&other.to_number()),
        }
    }

    /// Compares the string forms of two values by UTF-16 code units.
    pub fn text_cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::String(a), Value::String(b)) => a.encode_utf16().cmp(b.encode_utf16()),
            _ => self.to_text().encode_utf16().cmp(other.to_text().encode_utf16()),
        }
    }

    /// Converts a numeric result into an int when it is integral and in range.
    pub fn number(n: f64) -> Value {
        if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
            Value::Int(n as i64)
        } else {
            Value::Float(n)
        }
    }
}

fn parse_number(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        // Rust accepts "inf" and "nan" spellings which are not numbers here.
        t if t.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') => f64::NAN,
        t => t.parse().unwrap_or(f64::NAN),
    }
}

fn format_number(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f.is_infinite() {
        if f > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if f.fract() == 0.0 && f.abs() < 1e21 {
        format!("{}", f as i128)
    } else {
        f.to_string()
    }
}
