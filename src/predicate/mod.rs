//! Predicate module - Builders for element callbacks.
//!
//! Each builder returns a callback with the unary `(element, context)` or
//! binary `(a, b, context)` shape used by the iteration helpers.

mod builders;
mod selector;

#[cfg(test)]
mod predicate_test;

pub use builders::*;
pub use selector::*;
