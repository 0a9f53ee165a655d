//! Aggregate module - Searching lists and folding them into maps.

mod find;
mod to_object;


pub use find::*;
pub use to_object::*;
