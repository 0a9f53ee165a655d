//! Folding a list into a map.

use crate::value::{Container, Context, Key, Map, Truthy, Value};
use std::collections::HashMap;

type KeyFn<'a> = Box<dyn Fn(&Value, Context<'_>) -> Value + 'a>;
type Reducer<'a> = Box<dyn Fn(&Value, &Value, Context<'_>) -> Value + 'a>;

/// ArrayToObject folds a list into a map.
///
/// Each element is stored under the key computed by the key function, or
/// under its index. Elements whose key is falsy (other than `0` and `""`)
/// are skipped. Without a reducer later elements replace earlier ones with
/// the same key. With a reducer the first element of a key seeds the
/// accumulator, or the initial value is reduced with it when one was given,
/// and the following ones are folded in with their per-key occurrence
/// number as the context index.
pub struct ArrayToObject<'a> {
    array: &'a [Value],
    key_fn: Option<KeyFn<'a>>,
    reducer: Option<Reducer<'a>>,
    initial: Option<Value>,
}

/// Starts folding `array` into a map.
pub fn array_to_object(array: &[Value]) -> ArrayToObject<'_> {
    ArrayToObject {
        array,
        key_fn: None,
        reducer: None,
        initial: None,
    }
}

impl<'a> ArrayToObject<'a> {
    /// Sets the function computing each element's key.
    pub fn key_by<F, R>(mut self, key_fn: F) -> Self
    where
        F: Fn(&Value, Context<'_>) -> R + 'a,
        R: Into<Value>,
    {
        self.key_fn = Some(Box::new(move |element: &Value, ctx: Context<'_>| {
            key_fn(element, ctx).into()
        }));
        self
    }

    /// Sets the reducer called as `reducer(accumulator, element, ctx)`.
    pub fn reduce<F>(mut self, reducer: F) -> Self
    where
        F: Fn(&Value, &Value, Context<'_>) -> Value + 'a,
    {
        self.reducer = Some(Box::new(reducer));
        self
    }

    /// Sets the initial accumulator for every key. Only used with a reducer.
    pub fn initial(mut self, initial: Value) -> Self {
        self.initial = Some(initial);
        self
    }

    /// Folds the list.
    pub fn build(&self) -> Map {
        let array = self.array;
        let at = |i: usize| Context::at(Key::Index(i), Container::List(array));
        let mut out = Map::new();
        let mut occurrences: HashMap<String, usize> = HashMap::new();

        for (i, element) in array.iter().enumerate() {
            let key = match &self.key_fn {
                Some(key_fn) => key_fn(element, at(i)),
                None => Value::from(i),
            };
            if !is_usable_key(&key) {
                continue;
            }
            let name = key.to_text();

            let Some(reducer) = &self.reducer else {
                out.set(name, element.clone());
                continue;
            };

            match occurrences.get_mut(&name) {
                Some(count) => {
                    let accumulator = out.get(&name).unwrap_or(Value::undefined());
                    let next = reducer(accumulator, element, at(*count));
                    *count += 1;
                    out.set(name, next);
                }
                None => {
                    let first = match &self.initial {
                        Some(initial) => reducer(initial, element, at(0)),
                        None => element.clone(),
                    };
                    occurrences.insert(name.clone(), 1);
                    out.set(name, first);
                }
            }
        }

        out
    }
}

fn is_usable_key(key: &Value) -> bool {
    key.is_truthy() || key.strict_equals(&Value::Int(0)) || key.strict_equals(&Value::from(""))
}
