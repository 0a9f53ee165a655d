//! Positions and containers handed to iteration callbacks.
//!
//! Unary callbacks have the shape `Fn(&Value, Context<'_>) -> Value` and
//! binary ones `Fn(&Value, &Value, Context<'_>) -> Value`. The context tells
//! a callback where the element sits: its index or key, and the container
//! being walked. Either can be absent, e.g. when a structural operator
//! combines two values without a surrounding collection.

use super::value::{Map, Value};
use once_cell::sync::Lazy;

static EMPTY_MAP: Lazy<Map> = Lazy::new(Map::new);

/// Key is the position of an element inside a list or a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'a> {
    Index(usize),
    Name(&'a str),
}

impl Key<'_> {
    /// Converts the position into a value: indices become ints, names strings.
    pub fn to_value(self) -> Value {
        match self {
            Key::Index(i) => Value::from(i),
            Key::Name(name) => Value::from(name),
        }
    }

    /// Returns the index for list positions.
    pub fn as_index(self) -> Option<usize> {
        match self {
            Key::Index(i) => Some(i),
            Key::Name(_) => None,
        }
    }
}

/// Container is the collection a callback is being applied over.
#[derive(Debug, Clone, Copy)]
pub enum Container<'a> {
    List(&'a [Value]),
    Map(&'a Map),
}

/// Context carries the optional position and container of a callback call.
#[derive(Debug, Clone, Copy, Default)]
pub struct Context<'a> {
    pub key: Option<Key<'a>>,
    pub container: Option<Container<'a>>,
}

impl<'a> Context<'a> {
    /// Creates a context for an element of a container.
    pub fn at(key: Key<'a>, container: Container<'a>) -> Self {
        Context {
            key: Some(key),
            container: Some(container),
        }
    }

    /// Creates a context with a position but no container.
    pub fn keyed(key: Key<'a>) -> Self {
        Context {
            key: Some(key),
            container: None,
        }
    }

    /// Returns the position as a value, `Undefined` when there is none.
    pub fn position(&self) -> Value {
        self.key.map_or(Value::Undefined, Key::to_value)
    }
}

/// Collection is the structural kind of a value for dual-mode operations.
///
/// Lists are sequences; every other value is a mapping. Scalars are mappings
/// without own keys.
#[derive(Debug, Clone, Copy)]
pub enum Collection<'a> {
    Sequence(&'a [Value]),
    Mapping(&'a Map),
}

impl<'a> Collection<'a> {
    /// Classifies a value. Only the variant is inspected, never the contents.
    pub fn of(value: &'a Value) -> Self {
        match value {
            Value::List(items) => Collection::Sequence(items),
            Value::Map(map) => Collection::Mapping(map),
            _ => Collection::Mapping(&EMPTY_MAP),
        }
    }
}
