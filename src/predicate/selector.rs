//! Property selectors for the key/value/object builders.

use crate::value::{Key, Value};

/// Selector names the property a key/value/object builder looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// A named property of a map (or a decimal index of a list).
    Name(String),
    /// A list position (or a map entry with a decimal name).
    Index(usize),
    /// Any own property; requires a value to compare against.
    Any,
}

impl From<&str> for Selector {
    fn from(name: &str) -> Self {
        Selector::Name(name.to_string())
    }
}

impl From<String> for Selector {
    fn from(name: String) -> Self {
        Selector::Name(name)
    }
}

impl From<usize> for Selector {
    fn from(index: usize) -> Self {
        Selector::Index(index)
    }
}

impl Selector {
    /// Finds the matching property of `element` as `(key, value)`.
    pub(crate) fn find<'v>(
        &'v self,
        element: &'v Value,
        equal_to: Option<&Value>,
    ) -> Option<(Key<'v>, &'v Value)> {
        let found = match self {
            Selector::Name(name) => element.get(name).map(|v| (Key::Name(name.as_str()), v)),
            Selector::Index(i) => element.get_index(*i).map(|v| (Key::Index(*i), v)),
            Selector::Any => {
                let expected = equal_to?;
                return match element {
                    Value::Map(map) => map
                        .iter()
                        .find(|(_, v)| v.strict_equals(expected))
                        .map(|(k, v)| (Key::Name(k.as_str()), v)),
                    Value::List(items) => items
                        .iter()
                        .enumerate()
                        .find(|(_, v)| v.strict_equals(expected))
                        .map(|(i, v)| (Key::Index(i), v)),
                    _ => None,
                };
            }
        };
        match equal_to {
            Some(expected) => found.filter(|(_, v)| v.strict_equals(expected)),
            None => found,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_find_by_name() {
        let element = Value::from(json!({"a": 1, "b": null}));
        let selector = Selector::from("b");
        assert_eq!(selector.find(&element, None), Some((Key::Name("b"), &Value::Null)));
        assert_eq!(Selector::from("c").find(&element, None), None);
    }

    #[test]
    fn test_find_by_index_with_comparand() {
        let element = Value::from(json!([5, 6]));
        let selector = Selector::from(1usize);
        assert!(selector.find(&element, Some(&Value::Int(6))).is_some());
        assert!(selector.find(&element, Some(&Value::Int(5))).is_none());
    }

    #[test]
    fn test_find_any_requires_comparand() {
        let element = Value::from(json!({"x": 1, "y": 2, "z": 2}));
        assert_eq!(Selector::Any.find(&element, None), None);
        assert_eq!(
            Selector::Any.find(&element, Some(&Value::Int(2))),
            Some((Key::Name("y"), &Value::Int(2)))
        );
    }
}
