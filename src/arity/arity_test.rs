//! Tests for partial application.

#[cfg(test)]
mod tests {
    use crate::arity::{
        call, callp, curry, curry_p, func, funcp, partial, partial_p, Arity, ReceiverArity,
    };
    use crate::invoke::Invocable;
    use crate::value::{Map, Value};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    /// Records how it was called: `{"receiver": ..., "args": [...]}`.
    fn record(receiver: Option<&Value>, args: &[Value]) -> Value {
        let mut map = Map::new();
        map.set("receiver", receiver.cloned().unwrap_or(Value::Null));
        map.set("args", Value::List(args.to_vec()));
        Value::Map(map)
    }

    fn ints(values: &[i64]) -> Vec<Value> {
        values.iter().copied().map(Value::Int).collect()
    }

    fn called(receiver: Value, args: serde_json::Value) -> Value {
        let mut map = Map::new();
        map.set("receiver", receiver);
        map.set("args", Value::from(args));
        Value::Map(map)
    }

    #[test]
    fn test_partial_nullary_ignores_late_arguments() {
        let f = partial(Arity::Nullary, record, ints(&[1, 2]));
        assert_eq!(f(&ints(&[9])), called(Value::Null, json!([1, 2])));
        assert_eq!(f(&ints(&[])), called(Value::Null, json!([1, 2])));
    }

    #[test]
    fn test_partial_unary_prepends_one() {
        let f = partial(Arity::Unary, record, ints(&[1, 2]));
        assert_eq!(f(&ints(&[9, 10])), called(Value::Null, json!([9, 1, 2])));
    }

    #[test]
    fn test_partial_binary_prepends_two() {
        let f = partial(Arity::Binary, record, ints(&[1]));
        assert_eq!(f(&ints(&[7, 8, 9])), called(Value::Null, json!([7, 8, 1])));

        let Value::Map(short) = f(&ints(&[7])) else {
            panic!("expected a map");
        };
        assert_eq!(
            short.get("args"),
            Some(&Value::List(vec![Value::Int(7), Value::Undefined, Value::Int(1)]))
        );
    }

    #[test]
    fn test_partial_variadic_passes_one_list() {
        let f = partial(Arity::Variadic, record, ints(&[1, 2]));
        assert_eq!(f(&ints(&[8, 9])), called(Value::Null, json!([[8, 9, 1, 2]])));
        assert_eq!(f(&ints(&[])), called(Value::Null, json!([[1, 2]])));
    }

    #[test]
    fn test_partial_p_unary_uses_receiver() {
        let f = partial_p(ReceiverArity::Unary, record, ints(&[1, 2]));
        assert_eq!(f(&[Value::from("r")]), called(Value::from("r"), json!([1, 2])));
    }

    #[test]
    fn test_partial_p_binary() {
        let f = partial_p(ReceiverArity::Binary, record, ints(&[1, 2]));
        assert_eq!(
            f(&[Value::from("r"), Value::Int(5)]),
            called(Value::from("r"), json!([5, 1, 2]))
        );
    }

    #[test]
    fn test_partial_p_variadic_receives_late_list() {
        let f = partial_p(ReceiverArity::Variadic, record, ints(&[1]));
        assert_eq!(f(&ints(&[7, 8])), called(Value::from(json!([7, 8])), json!([1])));
    }

    #[test]
    fn test_partial_p_drives_methods() {
        let slice = partial_p(
            ReceiverArity::Unary,
            |receiver: Option<&Value>, args: &[Value]| {
                receiver.map(|r| r.invoke("slice", args)).transpose()
            },
            ints(&[1, 3]),
        );
        assert_eq!(
            slice(&[Value::from("abcdef")]).unwrap(),
            Some(Value::from("bc"))
        );
    }

    #[test]
    fn test_curry_defers_binding() {
        let make = curry(Arity::Unary, record);
        let with_tail = make(&ints(&[1, 2]));
        let with_other_tail = make(&ints(&[3]));

        assert_eq!(with_tail(&ints(&[0])), called(Value::Null, json!([0, 1, 2])));
        assert_eq!(with_other_tail(&ints(&[0])), called(Value::Null, json!([0, 3])));
    }

    #[test]
    fn test_curry_p() {
        let make = curry_p(ReceiverArity::Binary, record);
        let f = make(&ints(&[4]));
        assert_eq!(
            f(&[Value::from("self"), Value::Int(3)]),
            called(Value::from("self"), json!([3, 4]))
        );
    }

    #[test]
    fn test_aliases() {
        fn sum(_: Option<&Value>, args: &[Value]) -> Value {
            args.iter().fold(Value::Int(0), |acc, a| acc.plus(a))
        }
        assert_eq!(call(Arity::Unary, sum, ints(&[10]))(&ints(&[5])), Value::Int(15));
        assert_eq!(func(Arity::Binary, sum)(&ints(&[1]))(&ints(&[2, 3])), Value::Int(6));
        assert_eq!(
            callp(ReceiverArity::Unary, record, vec![])(&[Value::Int(1)]),
            called(Value::Int(1), json!([]))
        );
        assert_eq!(
            funcp(ReceiverArity::Unary, record)(&ints(&[]))(&[Value::Int(2)]),
            called(Value::Int(2), json!([]))
        );
    }
}
