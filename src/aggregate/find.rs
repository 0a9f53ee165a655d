//! Value lookup in a list.

use crate::value::{Container, Context, Key, Truthy, Value};
use std::cmp::Ordering;

type Calc<'a> = Box<dyn Fn(&[Value]) -> Value + 'a>;
type Predicate<'a> = Box<dyn Fn(&Value, Context<'_>) -> Value + 'a>;

/// FindValue looks up an element of a list.
///
/// Without a calc or a predicate it finds the first truthy element; with a
/// predicate only, the first element it accepts. A calc alone is applied to
/// the whole list and its result returned. With both, elements are mapped
/// through the predicate, the calc picks a target among the mapped values,
/// and the element whose mapped value equals the target is returned.
pub struct FindValue<'a> {
    array: &'a [Value],
    calc: Option<Calc<'a>>,
    predicate: Option<Predicate<'a>>,
}

/// Starts a lookup in `array`.
pub fn find_value(array: &[Value]) -> FindValue<'_> {
    FindValue {
        array,
        calc: None,
        predicate: None,
    }
}

impl<'a> FindValue<'a> {
    /// Sets the function choosing among all values, e.g. [`max`].
    pub fn calc<F>(mut self, calc: F) -> Self
    where
        F: Fn(&[Value]) -> Value + 'a,
    {
        self.calc = Some(Box::new(calc));
        self
    }

    /// Sets the per-element predicate or projection.
    pub fn by<F, R>(mut self, predicate: F) -> Self
    where
        F: Fn(&Value, Context<'_>) -> R + 'a,
        R: Into<Value>,
    {
        self.predicate = Some(Box::new(move |element: &Value, ctx: Context<'_>| {
            predicate(element, ctx).into()
        }));
        self
    }

    /// Runs the lookup. `None` means nothing matched.
    pub fn find(&self) -> Option<Value> {
        let array = self.array;
        let ctx = |i: usize| Context::at(Key::Index(i), Container::List(array));

        match (&self.calc, &self.predicate) {
            (None, None) => array.iter().find(|e| e.is_truthy()).cloned(),
            (None, Some(predicate)) => array
                .iter()
                .enumerate()
                .find(|(i, e)| predicate(*e, ctx(*i)).is_truthy())
                .map(|(_, e)| e.clone()),
            (Some(calc), None) => Some(calc(array)),
            (Some(calc), Some(predicate)) => {
                let mapped: Vec<Value> = array
                    .iter()
                    .enumerate()
                    .map(|(i, e)| predicate(e, ctx(i)))
                    .collect();
                let target = calc(&mapped);
                // The calc hands back an owned copy, so containers can only
                // be matched by content.
                mapped
                    .iter()
                    .position(|m| m.strict_equals(&target) || (m.is_container() && *m == target))
                    .map(|i| array[i].clone())
            }
        }
    }
}

/// Returns the numerically largest value, `-Infinity` for an empty list and
/// `NaN` when any value is not a number.
pub fn max(values: &[Value]) -> Value {
    extreme(values, Ordering::Greater, f64::NEG_INFINITY)
}

/// Returns the numerically smallest value, `Infinity` for an empty list and
/// `NaN` when any value is not a number.
pub fn min(values: &[Value]) -> Value {
    extreme(values, Ordering::Less, f64::INFINITY)
}

fn extreme(values: &[Value], wanted: Ordering, empty: f64) -> Value {
    let mut best: Option<f64> = None;
    for value in values {
        let n = value.to_number();
        if n.is_nan() {
            return Value::Float(f64::NAN);
        }
        match best {
            Some(b) if n.partial_cmp(&b) != Some(wanted) => {}
            _ => best = Some(n),
        }
    }
    Value::number(best.unwrap_or(empty))
}
