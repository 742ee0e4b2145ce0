//! Core sum types for the Carton crates.
//!
//! This crate defines the two value-or-something-else types that the rest of
//! Carton builds on:
//!
//! - [`Option`]: a value of type `T`, or nothing
//! - [`Result`]: a success value of type `O`, or a failure value of type `E`
//! - [`UnwrapError`]: the single failure kind of this layer, raised when the
//!   wrong arm of a sum type is unwrapped
//!
//! Every combinator consumes its receiver and returns a new value. Closure
//! arguments are called synchronously, at most once.
//!
//! The types intentionally share their names with the standard library.
//! Inside this crate the standard versions are always spelled out as
//! `core::option::Option` and `core::result::Result`.

mod error;
mod option;
mod result;

pub use error::UnwrapError;
pub use option::Option;
pub use result::Result;
