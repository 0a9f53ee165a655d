//! Structural module - Element-wise combination, copying and comparison of
//! whole containers.

mod calc;
mod copy;


pub use calc::*;
pub use copy::*;
