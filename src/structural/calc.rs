//! Element-wise combination of two maps or two lists.

use crate::value::{Context, Key, Map, Value};

/// Merge decides which keys or positions take part in a structural combine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Merge {
    /// Every key or position of either side is combined; the missing side
    /// reads as `Undefined`.
    #[default]
    All,
    /// Shared keys or positions are combined, one-sided ones are copied.
    Keep,
    /// Only shared keys or positions are kept, combined.
    Shared,
    /// Only the listed map keys are kept; shared ones are combined and
    /// one-sided ones copied. Lists treat this like [`Merge::All`].
    Keys(Vec<String>),
}

impl Merge {
    fn includes(&self, key: &str) -> bool {
        match self {
            Merge::Keys(keys) => keys.iter().any(|k| k == key),
            _ => true,
        }
    }
}

/// Returns a function combining two maps key by key with `f`.
///
/// The result lists the keys of `a` first, then the keys only `b` has.
/// Callbacks see the key in their context.
pub fn object_calc<F>(f: F, merge: Merge) -> impl Fn(&Map, &Map) -> Map
where
    F: Fn(&Value, &Value, Context<'_>) -> Value,
{
    move |a: &Map, b: &Map| {
        let mut out = Map::new();

        for (name, left) in a.iter() {
            if !merge.includes(name) {
                continue;
            }
            let ctx = Context::keyed(Key::Name(name));
            match (b.get(name), &merge) {
                (Some(right), _) => out.set(name.as_str(), f(left, right, ctx)),
                (None, Merge::All) => out.set(name.as_str(), f(left, Value::undefined(), ctx)),
                (None, Merge::Keep | Merge::Keys(_)) => out.set(name.as_str(), left.clone()),
                (None, Merge::Shared) => {}
            }
        }

        for (name, right) in b.iter().filter(|(name, _)| !a.has(name)) {
            if !merge.includes(name) {
                continue;
            }
            let ctx = Context::keyed(Key::Name(name));
            match &merge {
                Merge::All => out.set(name.as_str(), f(Value::undefined(), right, ctx)),
                Merge::Keep | Merge::Keys(_) => out.set(name.as_str(), right.clone()),
                Merge::Shared => {}
            }
        }

        out
    }
}

/// Returns a function combining two lists position by position with `f`.
///
/// The result is as long as the longer list, or the shorter one with
/// [`Merge::Shared`]. Callbacks see the index in their context.
pub fn array_calc<F>(f: F, merge: Merge) -> impl Fn(&[Value], &[Value]) -> Vec<Value>
where
    F: Fn(&Value, &Value, Context<'_>) -> Value,
{
    move |a: &[Value], b: &[Value]| {
        let len = match merge {
            Merge::Shared => a.len().min(b.len()),
            _ => a.len().max(b.len()),
        };
        (0..len)
            .map(|i| {
                let ctx = Context::keyed(Key::Index(i));
                match (a.get(i), b.get(i)) {
                    (Some(left), Some(right)) => f(left, right, ctx),
                    (left, right) if merge == Merge::Keep => {
                        left.or(right).cloned().unwrap_or(Value::Undefined)
                    }
                    (left, right) => f(
                        left.unwrap_or(Value::undefined()),
                        right.unwrap_or(Value::undefined()),
                        ctx,
                    ),
                }
            })
            .collect()
    }
}
