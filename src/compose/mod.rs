//! Compose module - Combinators that reshape or chain callbacks.

mod combinators;

pub use combinators::*;
