//! Compare module - Numeric combinators and three-way comparators.

mod comparator;

pub use comparator::*;
