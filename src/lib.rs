//! # fclass
//!
//! Functional helpers for querying and transforming JSON/YAML-like data.
//!
//! The library works on [`Value`] trees and builds small callbacks that plug
//! into a common iteration protocol: a unary callback receives an element and
//! its [`Context`] (position and container), a binary one two elements and a
//! context. Builders compose these callbacks into filters, projections,
//! comparators and aggregations.
//!
//! ```
//! use fclass::{filter, key, Value};
//! use serde_json::json;
//!
//! let data = Value::from(json!([
//!     {"name": "a", "active": true},
//!     {"name": "b", "active": false}
//! ]));
//! let active = filter(&data, key("active", Some(Value::Bool(true))).unwrap());
//! assert_eq!(active, Value::from(json!([{"name": "a", "active": true}])));
//! ```
//!
//! ## Modules
//!
//! - [`value`] - Data model, JS-style coercions and callback context
//! - [`predicate`] - Identity, key, value and criteria predicates
//! - [`compare`] - Numeric combinators and three-way comparators
//! - [`compose`] - Argument flipping and function composition
//! - [`invoke`] - Calling named methods on elements
//! - [`arity`] - Partial application with fixed late arity
//! - [`structural`] - Element-wise calculation, clone and equality
//! - [`aggregate`] - Value lookup and grouping into maps
//! - [`iterate`] - Map, filter, some and every over lists and maps

pub mod aggregate;
pub mod arity;
pub mod compare;
pub mod compose;
pub mod error;
pub mod invoke;
pub mod iterate;
pub mod predicate;
pub mod structural;
pub mod value;

pub use aggregate::{array_to_object, find_value, max, min, ArrayToObject, FindValue};
pub use arity::{
    call, callp, curry, curry_p, func, funcp, partial, partial_p, Arity, Bound, ReceiverArity,
};
pub use compare::{add, compare, compare_string, ordering, subtract};
pub use compose::{combine, compose11, compose12, compose21, flip};
pub use error::{Error, Result};
pub use invoke::{invoke, method, Invocable};
pub use iterate::{
    every, filter, list_every, list_filter, list_map, list_some, map, object_iterator, some,
    Callback,
};
pub use predicate::{has, identity, index, index2, key, not, object, value, Selector};
pub use structural::{array_calc, clone, equal, object_calc, Merge};
pub use value::{Collection, Container, Context, Key, Map, Truthy, Value};
