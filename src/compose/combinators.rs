//! Combinators for unary and binary callbacks.
//!
//! - [`flip`]: swaps the operands of a binary callback
//! - [`compose11`]: unary then unary
//! - [`compose21`]: binary then unary
//! - [`compose12`]: unary on both operands, then binary
//! - [`combine`]: like [`compose12`] without the context

use crate::value::{Context, Value};

/// Swaps the operands of a binary callback; the context passes through.
///
/// `flip(f)(a, b, ctx) == f(b, a, ctx)`
pub fn flip<F>(f: F) -> impl Fn(&Value, &Value, Context<'_>) -> Value
where
    F: Fn(&Value, &Value, Context<'_>) -> Value,
{
    move |a: &Value, b: &Value, ctx: Context<'_>| f(b, a, ctx)
}

/// Chains two unary callbacks: `g(f(e, ctx), ctx)`.
pub fn compose11<F, G>(f: F, g: G) -> impl Fn(&Value, Context<'_>) -> Value
where
    F: Fn(&Value, Context<'_>) -> Value,
    G: Fn(&Value, Context<'_>) -> Value,
{
    move |element: &Value, ctx: Context<'_>| g(&f(element, ctx), ctx)
}

/// Feeds a binary callback into a unary one: `g(f(a, b, ctx), ctx)`.
pub fn compose21<F, G>(f: F, g: G) -> impl Fn(&Value, &Value, Context<'_>) -> Value
where
    F: Fn(&Value, &Value, Context<'_>) -> Value,
    G: Fn(&Value, Context<'_>) -> Value,
{
    move |a: &Value, b: &Value, ctx: Context<'_>| g(&f(a, b, ctx), ctx)
}

/// Maps both operands through a unary callback, then combines the results:
/// `g(f(a, ctx), f(b, ctx), ctx)`.
pub fn compose12<F, G>(f: F, g: G) -> impl Fn(&Value, &Value, Context<'_>) -> Value
where
    F: Fn(&Value, Context<'_>) -> Value,
    G: Fn(&Value, &Value, Context<'_>) -> Value,
{
    move |a: &Value, b: &Value, ctx: Context<'_>| g(&f(a, ctx), &f(b, ctx), ctx)
}

/// Like [`compose12`], but `f` and `g` never see the caller's context.
pub fn combine<G, F>(g: G, f: F) -> impl Fn(&Value, &Value, Context<'_>) -> Value
where
    G: Fn(&Value, &Value, Context<'_>) -> Value,
    F: Fn(&Value, Context<'_>) -> Value,
{
    move |a: &Value, b: &Value, _: Context<'_>| {
        g(&f(a, Context::default()), &f(b, Context::default()), Context::default())
    }
}
