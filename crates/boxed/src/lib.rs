//! A single-slot value box for the Carton crates.
//!
//! [`Box<T>`] owns exactly one value and gives it value semantics:
//! structural equality and ordering, cloning by value, and operator
//! passthrough, so `Box<T> op Box<U>` is `Box(T op U)` for every operator
//! `T` supports.
//!
//! Unlike `std::boxed::Box`, this type never allocates. It exists to give any
//! payload, primitive or not, a uniform wrapper that can be mapped, compared,
//! stepped, and nested inside [`carton_core::Option`] or
//! [`carton_core::Result`].
//!
//! # Provided Helpers
//!
//! - [`Step`]: wrapping increment and decrement used by [`Box::pre_inc`] and
//!   friends
//! - [`LogicalShr`]: zero-filling right shift used by [`Box::logical_shr`]
//! - [`box_option`] and [`OptionUnboxed`]: move between nullable values,
//!   options of boxes, and boxes of options

mod boxed;
mod num;
mod util;

pub use boxed::Box;
pub use num::{LogicalShr, Step};
pub use util::{OptionUnboxed, box_option};
