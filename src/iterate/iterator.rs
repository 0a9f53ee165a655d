//! List primitives, the map adapter and the dual-mode helpers.

use crate::value::{Collection, Container, Context, Key, Map, Truthy, Value};

/// Callback shape shared by the list primitives.
pub type Callback<'f> = &'f dyn Fn(&Value, Context<'_>) -> Value;

/// Maps every element of a list.
pub fn list_map(items: &[Value], f: Callback<'_>) -> Vec<Value> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| f(item, Context::at(Key::Index(i), Container::List(items))))
        .collect()
}

/// Keeps the elements of a list the callback accepts.
pub fn list_filter(items: &[Value], f: Callback<'_>) -> Vec<Value> {
    items
        .iter()
        .enumerate()
        .filter(|(i, item)| f(item, Context::at(Key::Index(*i), Container::List(items))).is_truthy())
        .map(|(_, item)| item.clone())
        .collect()
}

/// Returns true when the callback accepts any element. Stops at the first.
pub fn list_some(items: &[Value], f: Callback<'_>) -> bool {
    items
        .iter()
        .enumerate()
        .any(|(i, item)| f(item, Context::at(Key::Index(i), Container::List(items))).is_truthy())
}

/// Returns true when the callback accepts every element. Stops at the first
/// rejection.
pub fn list_every(items: &[Value], f: Callback<'_>) -> bool {
    items
        .iter()
        .enumerate()
        .all(|(i, item)| f(item, Context::at(Key::Index(i), Container::List(items))).is_truthy())
}

/// Turns a list iteration function into a map iteration function.
///
/// The map's values are walked in key order by `iterate`; the callback sees
/// each value with its key name and the map as context.
pub fn object_iterator<I, R>(iterate: I) -> impl Fn(&Map, Callback<'_>) -> R
where
    I: Fn(&[Value], Callback<'_>) -> R,
{
    move |object: &Map, f: Callback<'_>| {
        let keys: Vec<&str> = object.keys().collect();
        let values: Vec<Value> = object.values().cloned().collect();
        iterate(&values, &|value: &Value, ctx: Context<'_>| {
            match ctx.key.and_then(Key::as_index).and_then(|i| keys.get(i)) {
                Some(name) => f(value, Context::at(Key::Name(*name), Container::Map(object))),
                None => f(value, ctx),
            }
        })
    }
}

/// Maps a list element-wise or a map value-wise, keeping the map's keys.
/// Values that are neither give an empty map.
pub fn map<F>(collection: &Value, f: F) -> Value
where
    F: Fn(&Value, Context<'_>) -> Value,
{
    match Collection::of(collection) {
        Collection::Sequence(items) => Value::List(list_map(items, &f)),
        Collection::Mapping(object) => Value::Map(
            object
                .iter()
                .map(|(name, value)| {
                    let ctx = Context::at(Key::Name(name), Container::Map(object));
                    (name.clone(), f(value, ctx))
                })
                .collect(),
        ),
    }
}

/// Keeps the list elements or map entries the predicate accepts.
pub fn filter<F, R>(collection: &Value, predicate: F) -> Value
where
    F: Fn(&Value, Context<'_>) -> R,
    R: Truthy,
{
    match Collection::of(collection) {
        Collection::Sequence(items) => {
            Value::List(list_filter(items, &|value: &Value, ctx: Context<'_>| {
                Value::Bool(predicate(value, ctx).is_truthy())
            }))
        }
        Collection::Mapping(object) => Value::Map(
            object
                .iter()
                .filter(|&(name, value)| {
                    let ctx = Context::at(Key::Name(name), Container::Map(object));
                    predicate(value, ctx).is_truthy()
                })
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect(),
        ),
    }
}

/// Returns true when the predicate accepts any list element or map value.
pub fn some<F, R>(collection: &Value, predicate: F) -> bool
where
    F: Fn(&Value, Context<'_>) -> R,
    R: Truthy,
{
    let accept = |value: &Value, ctx: Context<'_>| Value::Bool(predicate(value, ctx).is_truthy());
    match Collection::of(collection) {
        Collection::Sequence(items) => list_some(items, &accept),
        Collection::Mapping(object) => object_iterator(list_some)(object, &accept),
    }
}

/// Returns true when the predicate accepts every list element or map value.
pub fn every<F, R>(collection: &Value, predicate: F) -> bool
where
    F: Fn(&Value, Context<'_>) -> R,
    R: Truthy,
{
    let accept = |value: &Value, ctx: Context<'_>| Value::Bool(predicate(value, ctx).is_truthy());
    match Collection::of(collection) {
        Collection::Sequence(items) => list_every(items, &accept),
        Collection::Mapping(object) => object_iterator(list_every)(object, &accept),
    }
}
