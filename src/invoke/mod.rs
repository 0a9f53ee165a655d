//! Invoke module - Calling named methods on elements.
//!
//! [`Invocable`] is the seam: anything that can dispatch a method by name
//! can be driven by [`invoke`]. [`Value`](crate::Value) implements it with a
//! small set of built-in methods.

mod builtin;
mod invocable;

pub use invocable::{invoke, invoke as method, Invocable};
