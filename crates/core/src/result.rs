use crate::{
    Option,
    error::{UnwrapError, unwrap_failed},
};

/// A success value of type `O`, or a failure value of type `E`.
///
/// Exactly one arm is populated, never both and never neither.
/// The type is structurally symmetric to [`Option`], with a payload on both arms.
///
/// Equality, ordering, and hashing are derived: `Ok` values compare their `O`
/// payloads, `Err` values compare their `E` payloads, and an `Ok` never equals
/// an `Err`.
///
/// # Example
///
/// ```
/// use carton_core::{Option, Result};
///
/// let parsed: Result<i32, String> = Result::Ok(21);
/// assert_eq!(parsed.map(|n| n * 2).ok(), Option::Some(42));
///
/// let failed: Result<i32, String> = Result::Err("233".into());
/// assert_eq!(failed.map_err(|s| s.repeat(2)).unwrap_err(), "233233");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
#[must_use = "this `Result` may be an `Err` variant, which should be handled"]
pub enum Result<O, E> {
    /// A success value.
    Ok(O),
    /// A failure value.
    Err(E),
}

impl<O, E> Result<O, E> {
    /// Returns `true` if the result is `Ok`.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if the result is `Err`.
    #[must_use]
    pub fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Converts into an [`Option`] of the success value, discarding any error.
    pub fn ok(self) -> Option<O> {
        match self {
            Self::Ok(value) => Option::Some(value),
            Self::Err(_) => Option::None,
        }
    }

    /// Converts into an [`Option`] of the error value, discarding any success.
    pub fn err(self) -> Option<E> {
        match self {
            Self::Ok(_) => Option::None,
            Self::Err(err) => Option::Some(err),
        }
    }

    /// Converts from `&Result<O, E>` to `Result<&O, &E>`.
    pub fn as_ref(&self) -> Result<&O, &E> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(err) => Result::Err(err),
        }
    }

    /// Converts from `&mut Result<O, E>` to `Result<&mut O, &mut E>`.
    pub fn as_mut(&mut self) -> Result<&mut O, &mut E> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(err) => Result::Err(err),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with `Result: Unwrap Ok` if the result is `Err`.
    #[track_caller]
    pub fn unwrap(self) -> O {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => unwrap_failed(UnwrapError::ErrValue),
        }
    }

    /// Returns the error value.
    ///
    /// # Panics
    ///
    /// Panics with `Result: Unwrap Err` if the result is `Ok`.
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self {
            Self::Ok(_) => unwrap_failed(UnwrapError::OkValue),
            Self::Err(err) => err,
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the result is `Err`.
    #[track_caller]
    pub fn expect(self, msg: &str) -> O {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => unwrap_failed(msg),
        }
    }

    /// Returns the error value.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the result is `Ok`.
    #[track_caller]
    pub fn expect_err(self, msg: &str) -> E {
        match self {
            Self::Ok(_) => unwrap_failed(msg),
            Self::Err(err) => err,
        }
    }

    /// Returns the success value without panicking.
    ///
    /// # Errors
    ///
    /// Returns [`UnwrapError::ErrValue`] if the result is `Err`.
    pub fn try_unwrap(self) -> core::result::Result<O, UnwrapError> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(_) => Err(UnwrapError::ErrValue),
        }
    }

    /// Returns the error value without panicking.
    ///
    /// # Errors
    ///
    /// Returns [`UnwrapError::OkValue`] if the result is `Ok`.
    pub fn try_unwrap_err(self) -> core::result::Result<E, UnwrapError> {
        match self {
            Self::Ok(_) => Err(UnwrapError::OkValue),
            Self::Err(err) => Ok(err),
        }
    }

    /// Returns the success value or `default`.
    pub fn unwrap_or(self, default: O) -> O {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Returns the success value or computes one from the error with `f`.
    pub fn unwrap_or_else<F>(self, f: F) -> O
    where
        F: FnOnce(E) -> O,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(err) => f(err),
        }
    }

    /// Returns the success value or `O::default()`.
    pub fn unwrap_or_default(self) -> O
    where
        O: Default,
    {
        self.unwrap_or_else(|_| O::default())
    }

    /// Maps the success value with `f`, passing an error through untouched.
    pub fn map<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(O) -> U,
    {
        match self {
            Self::Ok(value) => Result::Ok(f(value)),
            Self::Err(err) => Result::Err(err),
        }
    }

    /// Maps the error value with `f`, passing a success through untouched.
    pub fn map_err<F, G>(self, f: G) -> Result<O, F>
    where
        G: FnOnce(E) -> F,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(err) => Result::Err(f(err)),
        }
    }

    /// Applies `f` to the success value, or returns `default` on error.
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(O) -> U,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(_) => default,
        }
    }

    /// Applies `ok_fn` to a success value or `err_fn` to an error value.
    ///
    /// Exactly one of the two closures is called.
    pub fn map_or_else<U, D, F>(self, err_fn: D, ok_fn: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(O) -> U,
    {
        match self {
            Self::Ok(value) => ok_fn(value),
            Self::Err(err) => err_fn(err),
        }
    }

    /// Calls `f` with a reference to the success value, if any, and returns `self`.
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&O),
    {
        if let Self::Ok(value) = &self {
            f(value);
        }
        self
    }

    /// Calls `f` with a reference to the error value, if any, and returns `self`.
    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Err(err) = &self {
            f(err);
        }
        self
    }

    /// Returns `other` if the result is `Ok`, otherwise propagates the error.
    pub fn and<U>(self, other: Result<U, E>) -> Result<U, E> {
        match self {
            Self::Ok(_) => other,
            Self::Err(err) => Result::Err(err),
        }
    }

    /// Calls `f` with the success value, otherwise propagates the error.
    pub fn and_then<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(O) -> Result<U, E>,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(err) => Result::Err(err),
        }
    }

    /// An alias of [`Result::and_then`].
    pub fn flat_map<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(O) -> Result<U, E>,
    {
        self.and_then(f)
    }

    /// Returns the success value of `self` if `Ok`, otherwise `other`.
    pub fn or<F>(self, other: Result<O, F>) -> Result<O, F> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(_) => other,
        }
    }

    /// Calls `f` with the error value, otherwise propagates the success value.
    pub fn or_else<F, G>(self, f: G) -> Result<O, F>
    where
        G: FnOnce(E) -> Result<O, F>,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(err) => f(err),
        }
    }

    /// Returns an iterator over the possibly contained success value.
    pub fn iter(&self) -> core::option::IntoIter<&O> {
        self.as_ref().ok().into_iter()
    }
}

impl<O, E> Result<Result<O, E>, E> {
    /// Removes one level of nesting.
    pub fn flatten(self) -> Result<O, E> {
        self.and_then(|inner| inner)
    }
}

impl<O, E> Result<Option<O>, E> {
    /// Transposes a `Result` of an [`Option`] into an [`Option`] of a `Result`.
    ///
    /// `Ok(None)` maps to `None`.
    pub fn transpose(self) -> Option<Result<O, E>> {
        match self {
            Self::Ok(Option::Some(value)) => Option::Some(Result::Ok(value)),
            Self::Ok(Option::None) => Option::None,
            Self::Err(err) => Option::Some(Result::Err(err)),
        }
    }
}

impl<O, E> From<core::result::Result<O, E>> for Result<O, E> {
    fn from(value: core::result::Result<O, E>) -> Self {
        match value {
            Ok(value) => Self::Ok(value),
            Err(err) => Self::Err(err),
        }
    }
}

/// Converts back into a standard result so `?` can propagate the error.
impl<O, E> From<Result<O, E>> for core::result::Result<O, E> {
    fn from(value: Result<O, E>) -> Self {
        match value {
            Result::Ok(value) => Ok(value),
            Result::Err(err) => Err(err),
        }
    }
}

impl<O, E> IntoIterator for Result<O, E> {
    type Item = O;
    type IntoIter = core::option::IntoIter<O>;

    fn into_iter(self) -> Self::IntoIter {
        self.ok().into_iter()
    }
}

impl<'a, O, E> IntoIterator for &'a Result<O, E> {
    type Item = &'a O;
    type IntoIter = core::option::IntoIter<&'a O>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
