//! Tests for predicate builders.

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::predicate::{has, identity, index, index2, key, not, object, value, Selector};
    use crate::value::{Container, Context, Key, Map, Value};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn v(json: serde_json::Value) -> Value {
        Value::from(json)
    }

    #[test]
    fn test_identity_returns_input() {
        let f = identity(None);
        for x in [v(json!(1)), v(json!("a")), v(json!(null)), v(json!({"k": [1]}))] {
            assert_eq!(f(&x, Context::default()), x);
        }
    }

    #[test]
    fn test_identity_with_comparand() {
        let f = identity(Some(Value::Int(3)));
        assert_eq!(f(&Value::Int(3), Context::default()), Value::Bool(true));
        assert_eq!(f(&Value::Float(3.0), Context::default()), Value::Bool(true));
        assert_eq!(f(&Value::from("3"), Context::default()), Value::Bool(false));
    }

    #[test]
    fn test_identity_compares_against_undefined() {
        let f = identity(Some(Value::Undefined));
        assert_eq!(f(&Value::Undefined, Context::default()), Value::Bool(true));
        assert_eq!(f(&Value::Null, Context::default()), Value::Bool(false));
    }

    #[test]
    fn test_not() {
        let f = not(None);
        assert_eq!(f(&Value::Int(0), Context::default()), Value::Bool(true));
        assert_eq!(f(&Value::from("x"), Context::default()), Value::Bool(false));

        let g = not(Some(Value::Bool(false)));
        assert_eq!(g(&Value::Int(1), Context::default()), Value::Bool(true));
        assert_eq!(g(&Value::Null, Context::default()), Value::Bool(false));
    }

    #[test]
    fn test_index() {
        let items = vec![Value::from("a"), Value::from("b")];
        let ctx = Context::at(Key::Index(1), Container::List(&items));

        assert_eq!(index(None)(&items[1], ctx), Value::Int(1));
        assert_eq!(index(Some(Value::Int(1)))(&items[1], ctx), Value::Bool(true));
        assert_eq!(index(Some(Value::Int(0)))(&items[1], ctx), Value::Bool(false));
        assert_eq!(index(None)(&items[0], Context::default()), Value::Undefined);
    }

    #[test]
    fn test_index_on_map_yields_key_name() {
        let ctx = Context::keyed(Key::Name("name"));
        assert_eq!(index(None)(&Value::Null, ctx), Value::from("name"));
    }

    #[test]
    fn test_index2() {
        let ctx = Context::keyed(Key::Index(4));
        assert_eq!(index2(None)(&Value::Null, &Value::Null, ctx), Value::Int(4));
        assert_eq!(
            index2(Some(Value::Int(4)))(&Value::Null, &Value::Null, ctx),
            Value::Bool(true)
        );
    }

    #[test]
    fn test_key_existence() {
        let f = key("a", None).unwrap();
        assert_eq!(f(&v(json!({"a": null})), Context::default()), Value::from("a"));
        assert_eq!(f(&v(json!({"b": 1})), Context::default()), Value::Null);
        assert_eq!(f(&Value::Int(5), Context::default()), Value::Null);
    }

    #[test]
    fn test_key_with_comparand() {
        let f = key("active", Some(Value::Bool(true))).unwrap();
        assert_eq!(f(&v(json!({"active": true})), Context::default()), Value::from("active"));
        assert_eq!(f(&v(json!({"active": false})), Context::default()), Value::Null);
        assert_eq!(f(&v(json!({})), Context::default()), Value::Null);
    }

    #[test]
    fn test_key_by_index_yields_index() {
        let f = key(1usize, None).unwrap();
        assert_eq!(f(&v(json!([7, 8])), Context::default()), Value::Int(1));
        assert_eq!(f(&v(json!([7])), Context::default()), Value::Null);
    }

    #[test]
    fn test_key_any_finds_first_matching_key() {
        let f = key(Selector::Any, Some(Value::Int(2))).unwrap();
        assert_eq!(f(&v(json!({"x": 1, "y": 2, "z": 2})), Context::default()), Value::from("y"));
        assert_eq!(f(&v(json!({"x": 1})), Context::default()), Value::Null);
    }

    #[test]
    fn test_selector_any_without_comparand_fails() {
        assert!(matches!(key(Selector::Any, None), Err(Error::MissingComparand)));
        assert!(matches!(value(Selector::Any, Some(Value::Undefined)), Err(Error::MissingComparand)));
        assert!(matches!(object(Selector::Any, None), Err(Error::MissingComparand)));
    }

    #[test]
    fn test_undefined_comparand_checks_existence() {
        let f = key("a", Some(Value::Undefined)).unwrap();
        assert_eq!(f(&v(json!({"a": 0})), Context::default()), Value::from("a"));
    }

    #[test]
    fn test_value() {
        let element = v(json!({"name": "n", "size": 3}));
        assert_eq!(value("size", None).unwrap()(&element, Context::default()), Value::Int(3));
        assert_eq!(
            value(Selector::Any, Some(Value::from("n"))).unwrap()(&element, Context::default()),
            Value::from("n")
        );
        assert_eq!(value("none", None).unwrap()(&element, Context::default()), Value::Null);
    }

    #[test]
    fn test_object() {
        let element = v(json!({"id": 1, "tag": "x"}));
        let f = object("tag", Some(Value::from("x"))).unwrap();
        assert_eq!(f(&element, Context::default()), element);
        let g = object("tag", Some(Value::from("y"))).unwrap();
        assert_eq!(g(&element, Context::default()), Value::Null);
    }

    #[test]
    fn test_has() {
        let f = has(Map::from_pairs([("kind", "a"), ("level", "high")]));
        let hit = v(json!({"kind": "a", "level": "high", "extra": 1}));
        let miss = v(json!({"kind": "a", "level": "low"}));

        assert_eq!(f(&hit, Context::default()), hit);
        assert_eq!(f(&miss, Context::default()), Value::Null);
        assert_eq!(f(&v(json!({"kind": "a"})), Context::default()), Value::Null);
    }

    #[test]
    fn test_has_rejects_falsy_elements() {
        let f = has(Map::new());
        assert_eq!(f(&Value::Int(0), Context::default()), Value::Null);
        assert_eq!(f(&Value::Null, Context::default()), Value::Null);
        assert_eq!(f(&Value::Int(1), Context::default()), Value::Int(1));
    }
}
