//! Value module - In-memory representation of YAML/JSON objects.
//!
//! This module provides the value tree, its loose conversions and the
//! context passed to iteration callbacks.

mod coerce;
mod context;
mod value;

pub use coerce::*;
pub use context::*;
pub use value::*;
