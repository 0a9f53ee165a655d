//! Predicate builders.

use super::selector::Selector;
use crate::error::{Error, Result};
use crate::value::{Context, Map, Truthy, Value};

/// Returns the identity function `x => x`, or with `equal_to` the
/// comparison `x => x === equal_to`.
pub fn identity(equal_to: Option<Value>) -> impl Fn(&Value, Context<'_>) -> Value {
    move |element: &Value, _: Context<'_>| match &equal_to {
        Some(expected) => Value::Bool(element.strict_equals(expected)),
        None => element.clone(),
    }
}

/// Returns the negation `x => !x`, or with `equal_to` the comparison
/// `x => !x === equal_to`.
pub fn not(equal_to: Option<Value>) -> impl Fn(&Value, Context<'_>) -> Value {
    move |element: &Value, _: Context<'_>| {
        let negated = Value::Bool(!element.is_truthy());
        match &equal_to {
            Some(expected) => Value::Bool(negated.strict_equals(expected)),
            None => negated,
        }
    }
}

/// Returns a unary function yielding the element's position, or with
/// `equal_to` whether the position equals it.
pub fn index(equal_to: Option<Value>) -> impl Fn(&Value, Context<'_>) -> Value {
    move |_: &Value, ctx: Context<'_>| position_or_match(ctx, equal_to.as_ref())
}

/// Binary counterpart of [`index`], for reducers and combiners.
pub fn index2(equal_to: Option<Value>) -> impl Fn(&Value, &Value, Context<'_>) -> Value {
    move |_: &Value, _: &Value, ctx: Context<'_>| position_or_match(ctx, equal_to.as_ref())
}

fn position_or_match(ctx: Context<'_>, equal_to: Option<&Value>) -> Value {
    let position = ctx.position();
    match equal_to {
        Some(expected) => Value::Bool(position.strict_equals(expected)),
        None => position,
    }
}

/// Returns a function yielding the matched key of an element, or `Null`.
///
/// With a named or indexed selector the element matches when the property
/// exists, or when `equal_to` is given, when the property is strictly equal
/// to it. [`Selector::Any`] matches the first own property equal to
/// `equal_to` and fails with [`Error::MissingComparand`] without one.
pub fn key(
    selector: impl Into<Selector>,
    equal_to: Option<Value>,
) -> Result<impl Fn(&Value, Context<'_>) -> Value> {
    selector_fn(selector.into(), equal_to, |key, _, _| key)
}

/// Like [`key`], but yields the matched property value.
pub fn value(
    selector: impl Into<Selector>,
    equal_to: Option<Value>,
) -> Result<impl Fn(&Value, Context<'_>) -> Value> {
    selector_fn(selector.into(), equal_to, |_, matched, _| matched.clone())
}

/// Like [`key`], but yields the whole element.
pub fn object(
    selector: impl Into<Selector>,
    equal_to: Option<Value>,
) -> Result<impl Fn(&Value, Context<'_>) -> Value> {
    selector_fn(selector.into(), equal_to, |_, _, element| element.clone())
}

fn selector_fn<P>(
    selector: Selector,
    equal_to: Option<Value>,
    pick: P,
) -> Result<impl Fn(&Value, Context<'_>) -> Value>
where
    P: Fn(Value, &Value, &Value) -> Value,
{
    // An explicit Undefined comparand counts as no comparand.
    let equal_to = equal_to.filter(|v| !v.is_undefined());
    if selector == Selector::Any && equal_to.is_none() {
        return Err(Error::MissingComparand);
    }

    Ok(move |element: &Value, _: Context<'_>| {
        match selector.find(element, equal_to.as_ref()) {
            Some((key, matched)) => pick(key.to_value(), matched, element),
            None => Value::Null,
        }
    })
}

/// Returns a function that keeps an element only when every entry of
/// `criteria` is strictly equal to the element's property of the same name.
/// Falsy or mismatching elements give `Null`.
pub fn has(criteria: Map) -> impl Fn(&Value, Context<'_>) -> Value {
    move |element: &Value, _: Context<'_>| {
        if !element.is_truthy() {
            return Value::Null;
        }
        let matches = criteria
            .iter()
            .all(|(name, expected)| element.property(name).strict_equals(expected));
        if matches {
            element.clone()
        } else {
            Value::Null
        }
    }
}
