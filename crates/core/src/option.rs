use crate::{
    Result,
    error::{UnwrapError, unwrap_failed},
};

/// A value of type `T`, or nothing.
///
/// `Option<T>` is a tagged union: the discriminant and the payload can never
/// disagree, so there is no placeholder value stored for the `None` arm and
/// `T` needs no zero value or default constructor.
///
/// Equality, ordering, and hashing are derived and always delegate to `T`.
/// Two `None`s are equal, two `Some`s are equal when their payloads are, and a
/// `Some` never equals a `None`. Payload equality follows `T` exactly, so
/// `Some(f64::NAN) != Some(f64::NAN)`.
///
/// # Example
///
/// ```
/// use carton_core::Option;
///
/// let name = Option::Some(String::from("233"));
/// assert_eq!(name.map(|s| s.repeat(2)).unwrap(), "233233");
///
/// let nothing: Option<i32> = Option::None;
/// assert_eq!(nothing.unwrap_or(7), 7);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Option<T> {
    /// No value.
    #[default]
    None,
    /// Some value of type `T`.
    Some(T),
}

impl<T> Option<T> {
    /// Returns `true` if the option is a `Some` value.
    #[must_use]
    pub fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if the option is a `None` value.
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Converts from `&Option<T>` to `Option<&T>`.
    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Some(value) => Option::Some(value),
            Self::None => Option::None,
        }
    }

    /// Converts from `&mut Option<T>` to `Option<&mut T>`.
    pub fn as_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Some(value) => Option::Some(value),
            Self::None => Option::None,
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with `Option: Unwrap None` if the option is `None`.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => unwrap_failed(UnwrapError::NoneValue),
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the option is `None`.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => unwrap_failed(msg),
        }
    }

    /// Returns the contained value without panicking.
    ///
    /// # Errors
    ///
    /// Returns [`UnwrapError::NoneValue`] if the option is `None`.
    pub fn try_unwrap(self) -> core::result::Result<T, UnwrapError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(UnwrapError::NoneValue),
        }
    }

    /// Returns the contained value or `default`.
    ///
    /// `default` is evaluated eagerly by the caller.
    /// Use [`Option::unwrap_or_else`] to compute it only when needed.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Returns the contained value or computes one from `f`.
    ///
    /// `f` is called at most once, and only if the option is `None`.
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => f(),
        }
    }

    /// Returns the contained value or `T::default()`.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    /// Maps an `Option<T>` to an `Option<U>` by applying `f` to the payload.
    ///
    /// `f` is not called on `None`.
    pub fn map<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Option::Some(f(value)),
            Self::None => Option::None,
        }
    }

    /// Applies `f` to the payload, or returns `default` if there is none.
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => f(value),
            Self::None => default,
        }
    }

    /// Applies `f` to the payload, or calls `default` if there is none.
    ///
    /// Exactly one of the two closures is called.
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => f(value),
            Self::None => default(),
        }
    }

    /// Calls `f` with a reference to the payload, if any, and returns `self`.
    ///
    /// Useful for observing values in a combinator chain without changing them.
    #[must_use]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            f(value);
        }
        self
    }

    /// Returns `None` if the option is `None`, otherwise calls `f` with the
    /// payload and returns its result.
    ///
    /// The result of `f` is returned as is, never wrapped a second time.
    pub fn and_then<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Self::Some(value) => f(value),
            Self::None => Option::None,
        }
    }

    /// An alias of [`Option::and_then`].
    pub fn flat_map<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        self.and_then(f)
    }

    /// Returns `other` if the option is `Some`, otherwise `None`.
    ///
    /// `other` is supplied eagerly; see [`Option::and_then`] for the lazy form.
    pub fn and<U>(self, other: Option<U>) -> Option<U> {
        match self {
            Self::Some(_) => other,
            Self::None => Option::None,
        }
    }

    /// Returns the option if it is `Some`, otherwise `other`.
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => other,
        }
    }

    /// Returns the option if it is `Some`, otherwise calls `f`.
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(_) => self,
            Self::None => f(),
        }
    }

    /// Returns `Some` if exactly one of `self` and `other` is `Some`.
    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (Self::Some(value), Self::None) | (Self::None, Self::Some(value)) => {
                Self::Some(value)
            }
            _ => Self::None,
        }
    }

    /// Keeps the payload only if `predicate` returns `true` for it.
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) if predicate(&value) => Self::Some(value),
            _ => Self::None,
        }
    }

    /// Pairs the payloads of two options when both are `Some`.
    pub fn zip<U>(self, other: Option<U>) -> Option<(T, U)> {
        match (self, other) {
            (Self::Some(a), Option::Some(b)) => Option::Some((a, b)),
            _ => Option::None,
        }
    }

    /// Transforms the option into a [`Result`], mapping `None` to `Err(err)`.
    pub fn ok_or<E>(self, err: E) -> Result<T, E> {
        match self {
            Self::Some(value) => Result::Ok(value),
            Self::None => Result::Err(err),
        }
    }

    /// Transforms the option into a [`Result`], computing the error with `f`.
    pub fn ok_or_else<E, F>(self, f: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => Result::Ok(value),
            Self::None => Result::Err(f()),
        }
    }

    /// Takes the payload out, leaving `None` in its place.
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }

    /// Replaces the payload with `value`, returning the previous option.
    pub fn replace(&mut self, value: T) -> Self {
        core::mem::replace(self, Self::Some(value))
    }

    /// Returns an iterator over the possibly contained value.
    pub fn iter(&self) -> core::option::IntoIter<&T> {
        core::option::Option::<&T>::from(self.as_ref()).into_iter()
    }
}

impl<T> Option<Option<T>> {
    /// Removes one level of nesting.
    pub fn flatten(self) -> Option<T> {
        self.and_then(|inner| inner)
    }
}

impl<T, E> Option<Result<T, E>> {
    /// Transposes an `Option` of a [`Result`] into a [`Result`] of an `Option`.
    ///
    /// `None` maps to `Ok(None)`.
    pub fn transpose(self) -> Result<Option<T>, E> {
        match self {
            Self::Some(Result::Ok(value)) => Result::Ok(Option::Some(value)),
            Self::Some(Result::Err(err)) => Result::Err(err),
            Self::None => Result::Ok(Option::None),
        }
    }
}

impl<T: Clone> Option<&T> {
    /// Maps an `Option<&T>` to an `Option<T>` by cloning the payload.
    pub fn cloned(self) -> Option<T> {
        self.map(T::clone)
    }
}

impl<T: Copy> Option<&T> {
    /// Maps an `Option<&T>` to an `Option<T>` by copying the payload.
    pub fn copied(self) -> Option<T> {
        self.map(|value| *value)
    }
}

impl<T> From<T> for Option<T> {
    fn from(value: T) -> Self {
        Self::Some(value)
    }
}

/// Converts a standard library option, the Rust spelling of a nullable value.
impl<T> From<core::option::Option<T>> for Option<T> {
    fn from(value: core::option::Option<T>) -> Self {
        match value {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }
}

impl<T> From<Option<T>> for core::option::Option<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Option::Some(value) => Some(value),
            Option::None => None,
        }
    }
}

impl<T> IntoIterator for Option<T> {
    type Item = T;
    type IntoIter = core::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        core::option::Option::<T>::from(self).into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Option<T> {
    type Item = &'a T;
    type IntoIter = core::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
