//! Arity module - Fixed-arity partial application.
//!
//! Two families bind arguments differently:
//!
//! - [`partial`] / [`curry`] prepend the late arguments to the bound ones and
//!   call the target without a receiver.
//! - [`partial_p`] / [`curry_p`] use the first late argument as the receiver.
//!
//! `call`, `callp`, `func` and `funcp` are aliases of the four builders.

mod partial;

#[cfg(test)]
mod arity_test;

pub use partial::{
    curry, curry as func, curry_p, curry_p as funcp, partial, partial as call, partial_p,
    partial_p as callp, Arity, Bound, ReceiverArity,
};
