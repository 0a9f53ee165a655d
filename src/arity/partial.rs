//! Partial application builders.

use crate::value::Value;
use std::rc::Rc;

/// Bound is a function awaiting its late-bound arguments.
pub type Bound<R> = Box<dyn Fn(&[Value]) -> R>;

/// Arity of the prepend family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Late arguments are ignored.
    Nullary,
    /// One late argument goes before the bound ones.
    Unary,
    /// Two late arguments go before the bound ones.
    Binary,
    /// All late arguments and the bound ones are passed as a single list.
    Variadic,
}

/// Arity of the receiver family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiverArity {
    /// The late argument is the receiver, the bound arguments the arguments.
    Unary,
    /// The first late argument is the receiver, the second goes before the
    /// bound arguments.
    Binary,
    /// The list of late arguments is the receiver.
    Variadic,
}

/// Binds `bound` to `target`, which is called without a receiver.
///
/// Missing late arguments read as `Undefined`, extra ones are ignored.
pub fn partial<F, R>(arity: Arity, target: F, bound: Vec<Value>) -> Bound<R>
where
    F: Fn(Option<&Value>, &[Value]) -> R + 'static,
    R: 'static,
{
    match arity {
        Arity::Nullary => Box::new(move |_: &[Value]| target(None, &bound)),
        Arity::Unary => Box::new(move |late: &[Value]| target(None, &prepend(late, 1, &bound))),
        Arity::Binary => Box::new(move |late: &[Value]| target(None, &prepend(late, 2, &bound))),
        Arity::Variadic => Box::new(move |late: &[Value]| {
            let all = late.iter().chain(&bound).cloned().collect();
            target(None, &[Value::List(all)])
        }),
    }
}

/// Binds `bound` to `target`, taking the receiver from the late arguments.
pub fn partial_p<F, R>(arity: ReceiverArity, target: F, bound: Vec<Value>) -> Bound<R>
where
    F: Fn(Option<&Value>, &[Value]) -> R + 'static,
    R: 'static,
{
    match arity {
        ReceiverArity::Unary => Box::new(move |late: &[Value]| {
            target(Some(late.first().unwrap_or(Value::undefined())), &bound)
        }),
        ReceiverArity::Binary => Box::new(move |late: &[Value]| {
            let rest = late.get(1..).unwrap_or_default();
            target(Some(late.first().unwrap_or(Value::undefined())), &prepend(rest, 1, &bound))
        }),
        ReceiverArity::Variadic => Box::new(move |late: &[Value]| {
            target(Some(&Value::List(late.to_vec())), &bound)
        }),
    }
}

/// Returns a function that takes the bound arguments and builds the
/// corresponding [`partial`].
pub fn curry<F, R>(arity: Arity, target: F) -> impl Fn(&[Value]) -> Bound<R>
where
    F: Fn(Option<&Value>, &[Value]) -> R + 'static,
    R: 'static,
{
    let target = Rc::new(target);
    move |bound: &[Value]| {
        let target = Rc::clone(&target);
        partial(arity, move |receiver, args| target(receiver, args), bound.to_vec())
    }
}

/// Returns a function that takes the bound arguments and builds the
/// corresponding [`partial_p`].
pub fn curry_p<F, R>(arity: ReceiverArity, target: F) -> impl Fn(&[Value]) -> Bound<R>
where
    F: Fn(Option<&Value>, &[Value]) -> R + 'static,
    R: 'static,
{
    let target = Rc::new(target);
    move |bound: &[Value]| {
        let target = Rc::clone(&target);
        partial_p(arity, move |receiver, args| target(receiver, args), bound.to_vec())
    }
}

fn prepend(late: &[Value], count: usize, bound: &[Value]) -> Vec<Value> {
    (0..count)
        .map(|i| late.get(i).cloned().unwrap_or(Value::Undefined))
        .chain(bound.iter().cloned())
        .collect()
}
