//! Built-in methods of [`Value`].
//!
//! | kind   | methods                                                                  |
//! |--------|--------------------------------------------------------------------------|
//! | any    | `to_string`                                                              |
//! | string | `len`, `to_upper`, `to_lower`, `trim`, `starts_with`, `ends_with`,        |
//! |        | `contains`, `index_of`, `split`, `repeat`, `slice`, `concat`             |
//! | list   | `len`, `join`, `contains`, `index_of`, `slice`, `first`, `last`,          |
//! |        | `reverse`, `concat`                                                      |
//! | map    | `len`, `keys`, `values`, `has`, `get`                                    |
//! | number | `abs`, `to_fixed`                                                        |

use super::invocable::Invocable;
use crate::error::{Error, Result};
use crate::value::Value;
use std::ops::Range;

/// Longest string a built-in method may produce.
const MAX_STRING_BYTES: usize = 1 << 29;

impl Invocable for Value {
    fn invoke(&self, method: &str, args: &[Value]) -> Result<Value> {
        if method == "to_string" {
            return Ok(Value::String(self.to_text()));
        }
        match self {
            Value::String(s) => string_method(s, method, args),
            Value::List(items) => list_method(items, method, args),
            Value::Map(map) => match method {
                "len" => Ok(Value::from(map.len())),
                "keys" => Ok(Value::List(map.keys().map(Value::from).collect())),
                "values" => Ok(Value::List(map.values().cloned().collect())),
                "has" => Ok(Value::Bool(map.has(&str_arg(method, args, 0)?))),
                "get" => Ok(map.get(&str_arg(method, args, 0)?).cloned().unwrap_or(Value::Undefined)),
                _ => Err(Error::missing_method(method, self.kind())),
            },
            Value::Int(i) => match method {
                "abs" => Ok(i.checked_abs().map_or(Value::Float((*i as f64).abs()), Value::Int)),
                "to_fixed" => to_fixed(*i as f64, args),
                _ => Err(Error::missing_method(method, self.kind())),
            },
            Value::Float(f) => match method {
                "abs" => Ok(Value::Float(f.abs())),
                "to_fixed" => to_fixed(*f, args),
                _ => Err(Error::missing_method(method, self.kind())),
            },
            _ => Err(Error::missing_method(method, self.kind())),
        }
    }
}

fn string_method(s: &str, method: &str, args: &[Value]) -> Result<Value> {
    let chars: Vec<char> = s.chars().collect();
    let value = match method {
        "len" => Value::from(chars.len()),
        "to_upper" => Value::from(s.to_uppercase()),
        "to_lower" => Value::from(s.to_lowercase()),
        "trim" => Value::from(s.trim()),
        "starts_with" => Value::Bool(s.starts_with(str_arg(method, args, 0)?.as_str())),
        "ends_with" => Value::Bool(s.ends_with(str_arg(method, args, 0)?.as_str())),
        "contains" => Value::Bool(s.contains(str_arg(method, args, 0)?.as_str())),
        "index_of" => {
            let needle = str_arg(method, args, 0)?;
            match s.find(needle.as_str()) {
                Some(byte) => Value::from(s[..byte].chars().count()),
                None => Value::Int(-1),
            }
        }
        "split" => {
            let separator = str_arg(method, args, 0)?;
            Value::List(s.split(separator.as_str()).map(Value::from).collect())
        }
        "repeat" => {
            let count = int_arg(method, args, 0)?;
            if count < 0 {
                return Err(Error::invalid_argument(method, "count must not be negative"));
            }
            let count = usize::try_from(count)
                .ok()
                .filter(|n| s.len().checked_mul(*n).is_some_and(|len| len <= MAX_STRING_BYTES))
                .ok_or_else(|| Error::invalid_argument(method, "result is too long"))?;
            Value::from(s.repeat(count))
        }
        "slice" => {
            let range = slice_range(chars.len(), method, args)?;
            Value::from(chars[range].iter().collect::<String>())
        }
        "concat" => Value::from(args.iter().fold(s.to_string(), |acc, a| acc + &a.to_text())),
        _ => return Err(Error::missing_method(method, "string")),
    };
    Ok(value)
}

fn list_method(items: &[Value], method: &str, args: &[Value]) -> Result<Value> {
    let value = match method {
        "len" => Value::from(items.len()),
        "join" => {
            let separator = match args.first() {
                None | Some(Value::Undefined) => ",".to_string(),
                Some(sep) => sep.to_text(),
            };
            let parts: Vec<String> = items
                .iter()
                .map(|item| match item {
                    Value::Null | Value::Undefined => String::new(),
                    other => other.to_text(),
                })
                .collect();
            Value::from(parts.join(&separator))
        }
        "contains" => {
            let needle = args.first().unwrap_or(Value::undefined());
            Value::Bool(items.iter().any(|item| item.strict_equals(needle)))
        }
        "index_of" => {
            let needle = args.first().unwrap_or(Value::undefined());
            items
                .iter()
                .position(|item| item.strict_equals(needle))
                .map_or(Value::Int(-1), Value::from)
        }
        "slice" => Value::List(items[slice_range(items.len(), method, args)?].to_vec()),
        "first" => items.first().cloned().unwrap_or(Value::Undefined),
        "last" => items.last().cloned().unwrap_or(Value::Undefined),
        "reverse" => Value::List(items.iter().rev().cloned().collect()),
        "concat" => {
            let mut joined = items.to_vec();
            for arg in args {
                match arg {
                    Value::List(more) => joined.extend(more.iter().cloned()),
                    other => joined.push(other.clone()),
                }
            }
            Value::List(joined)
        }
        _ => return Err(Error::missing_method(method, "list")),
    };
    Ok(value)
}

fn to_fixed(n: f64, args: &[Value]) -> Result<Value> {
    let digits = match args.first() {
        None | Some(Value::Undefined) => 0,
        Some(_) => usize::try_from(int_arg("to_fixed", args, 0)?)
            .ok()
            .filter(|d| *d <= 100)
            .ok_or_else(|| Error::invalid_argument("to_fixed", "digits must be between 0 and 100"))?,
    };
    Ok(Value::String(format!("{:.*}", digits, n)))
}

/// Resolves `slice(start, end)` arguments; negative positions count from the end.
fn slice_range(len: usize, method: &str, args: &[Value]) -> Result<Range<usize>> {
    let resolve = |position: i64| -> usize {
        if position < 0 {
            len.saturating_sub(position.unsigned_abs() as usize)
        } else {
            (position as usize).min(len)
        }
    };
    let start = match args.first() {
        None | Some(Value::Undefined) => 0,
        Some(_) => resolve(int_arg(method, args, 0)?),
    };
    let end = match args.get(1) {
        None | Some(Value::Undefined) => len,
        Some(_) => resolve(int_arg(method, args, 1)?),
    };
    Ok(start..end.max(start))
}

fn str_arg(method: &str, args: &[Value], index: usize) -> Result<String> {
    match args.get(index) {
        Some(Value::Undefined) | None => Err(Error::invalid_argument(
            method,
            format!("missing argument {}", index),
        )),
        Some(arg) => Ok(arg.to_text()),
    }
}

fn int_arg(method: &str, args: &[Value], index: usize) -> Result<i64> {
    let arg = args
        .get(index)
        .ok_or_else(|| Error::invalid_argument(method, format!("missing argument {}", index)))?;
    let n = arg.to_number();
    if n.is_finite() {
        Ok(n.trunc() as i64)
    } else {
        Err(Error::invalid_argument(
            method,
            format!("argument {} is not a number: {}", index, arg.to_text()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::invoke::{invoke, method};
    use crate::value::Value;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn call(target: serde_json::Value, name: &str, args: Vec<Value>) -> Value {
        invoke::<Value>(name, args)(&Value::from(target)).unwrap()
    }

    #[test]
    fn test_string_methods() {
        assert_eq!(call(json!("Hello"), "to_upper", vec![]), Value::from("HELLO"));
        assert_eq!(call(json!("  x "), "trim", vec![]), Value::from("x"));
        assert_eq!(call(json!("héllo"), "len", vec![]), Value::Int(5));
        assert_eq!(call(json!("héllo"), "index_of", vec!["l".into()]), Value::Int(2));
        assert_eq!(
            call(json!("a,b"), "split", vec![",".into()]),
            Value::from(json!(["a", "b"]))
        );
        assert_eq!(call(json!("abcdef"), "slice", vec![1.into(), (-2).into()]), Value::from("bcd"));
        assert_eq!(call(json!("ab"), "repeat", vec![3.into()]), Value::from("ababab"));
        assert_eq!(call(json!("a"), "concat", vec![1.into(), "b".into()]), Value::from("a1b"));
    }

    #[test]
    fn test_list_methods() {
        assert_eq!(call(json!([1, null, "x"]), "join", vec![]), Value::from("1,,x"));
        assert_eq!(call(json!([1, 2]), "join", vec!["-".into()]), Value::from("1-2"));
        assert_eq!(call(json!([1, 2, 3]), "index_of", vec![3.into()]), Value::Int(2));
        assert_eq!(call(json!([1, 2, 3]), "contains", vec![4.into()]), Value::Bool(false));
        assert_eq!(call(json!([1, 2, 3]), "slice", vec![(-2).into()]), Value::from(json!([2, 3])));
        assert_eq!(call(json!([]), "first", vec![]), Value::Undefined);
        assert_eq!(
            call(json!([1]), "concat", vec![Value::from(json!([2, 3])), 4.into()]),
            Value::from(json!([1, 2, 3, 4]))
        );
    }

    #[test]
    fn test_map_methods() {
        let map = json!({"b": 1, "a": 2});
        assert_eq!(call(map.clone(), "keys", vec![]), Value::from(json!(["b", "a"])));
        assert_eq!(call(map.clone(), "has", vec!["a".into()]), Value::Bool(true));
        assert_eq!(call(map, "get", vec!["c".into()]), Value::Undefined);
    }

    #[test]
    fn test_number_methods() {
        assert_eq!(call(json!(-3), "abs", vec![]), Value::Int(3));
        assert_eq!(call(json!(2.346), "to_fixed", vec![2.into()]), Value::from("2.35"));
        assert_eq!(call(json!(4.5), "to_string", vec![]), Value::from("4.5"));
    }

    #[test]
    fn test_method_alias() {
        let upper = method::<Value>("to_upper", vec![]);
        assert_eq!(upper(&Value::from("q")).unwrap(), Value::from("Q"));
    }

    #[test]
    fn test_missing_method_is_an_error() {
        let err = invoke::<Value>("explode", vec![])(&Value::Int(1)).unwrap_err();
        assert!(matches!(err, Error::MissingMethod { ref method, kind: "number" } if method == "explode"));

        let err = invoke::<Value>("len", vec![])(&Value::Null).unwrap_err();
        assert!(matches!(err, Error::MissingMethod { kind: "null", .. }));
    }

    #[test]
    fn test_bad_argument_is_an_error() {
        let err = invoke::<Value>("repeat", vec![(-1).into()])(&Value::from("x")).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
        let err = invoke::<Value>("split", vec![])(&Value::from("x")).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }

    #[test]
    fn test_repeat_rejects_oversized_results() {
        let err = invoke::<Value>("repeat", vec![Value::Float(1e18)])(&Value::from("ab")).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { ref message, .. } if message == "result is too long"));

        let err = invoke::<Value>("repeat", vec![Value::Int(i64::MAX)])(&Value::from("x")).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));

        assert_eq!(
            invoke::<Value>("repeat", vec![Value::Int(1 << 20)])(&Value::from("")).unwrap(),
            Value::from("")
        );
    }
}
