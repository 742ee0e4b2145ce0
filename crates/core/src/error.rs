use std::fmt::Display;

use thiserror::Error;

/// The error raised when the wrong arm of a sum type is unwrapped.
///
/// The `Display` text of each variant is the exact panic message used by the
/// panicking accessors, so tests may match on either form.
///
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[non_exhaustive]
pub enum UnwrapError {
    /// A value was requested from an [`Option::None`](crate::Option::None).
    #[error("Option: Unwrap None")]
    NoneValue,

    /// A success value was requested from a [`Result::Err`](crate::Result::Err).
    #[error("Result: Unwrap Ok")]
    ErrValue,

    /// An error value was requested from a [`Result::Ok`](crate::Result::Ok).
    #[error("Result: Unwrap Err")]
    OkValue,
}

/// Panics with the given message.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn unwrap_failed(msg: impl Display) -> ! {
    panic!("{msg}")
}
