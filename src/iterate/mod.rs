//! Iterate module - One set of iteration helpers for lists and maps.
//!
//! [`map`], [`filter`], [`some`] and [`every`] accept any value and decide
//! once, from its variant, whether to walk it as a list or as a map.

mod iterator;


pub use iterator::*;
