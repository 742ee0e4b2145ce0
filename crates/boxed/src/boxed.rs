mod ops;

use std::{
    borrow::{Borrow, BorrowMut},
    fmt,
    ops::{Deref, DerefMut},
};

use num_traits::Pow;

use crate::num::{LogicalShr, Step};

/// A single-slot container holding exactly one value of type `T`.
///
/// `Box<T>` never represents absence; use [`carton_core::Option`] for that.
/// Equality, ordering, and hashing are derived and delegate to `T`, so two
/// boxes are equal exactly when their payloads are.
///
/// Every operator `T` supports is passed through: `Box<T> + Box<U>` is
/// `Box(T + U)`, with the output type of `T`'s own operator. Overflow and
/// division by zero behave exactly as they do on the bare payload.
///
/// Incrementing and decrementing ([`Box::pre_inc`], [`Box::post_inc`], and
/// their decrementing counterparts) are the only operations that mutate a box
/// in place.
///
/// # Panics
///
/// Operators panic wherever the payload's own operator does. For integers
/// that includes division by zero and, in debug builds, overflow:
/// `Box::from(255_u8) + Box::from(1)` panics there, while the increment
/// methods always wrap.
///
/// # Example
///
/// ```
/// use carton_boxed::Box;
///
/// let sum = Box::from(2) + Box::from(1);
/// assert_eq!(sum, Box::from(3));
///
/// let mut counter = Box::from(2_u8);
/// assert_eq!(counter.post_inc(), Box::from(2));
/// assert_eq!(counter, Box::from(3));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Box<T>(T);

impl<T> Box<T> {
    /// Boxes a value.
    pub fn from(value: T) -> Self {
        Self(value)
    }

    /// Boxes a value.
    ///
    /// An alias of [`Box::from`].
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Consumes the box and returns the inner value.
    ///
    /// Never fails, since a box always holds a value.
    pub fn unwrap(self) -> T {
        self.0
    }

    /// Maps a `Box<T>` to a `Box<U>` by applying `f` to the inner value.
    pub fn map<U, F>(self, f: F) -> Box<U>
    where
        F: FnOnce(T) -> U,
    {
        Box(f(self.0))
    }

    /// Returns `true` if both boxes point at the same referent.
    ///
    /// Equality (`==`) always compares payload values. This is the identity
    /// comparison for pointer-like payloads such as `Rc<T>` or `&T`.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool
    where
        T: Deref,
    {
        std::ptr::eq(self.0.deref(), other.0.deref())
    }

    /// Returns `true` if the payload is the zero value of its type.
    ///
    /// The zero value is `T::default()`: `0` for numbers, `false` for `bool`,
    /// and the empty string for `String`.
    /// This is the logical negation of the payload's truthiness, and returns a
    /// plain `bool` rather than a box.
    #[must_use]
    pub fn logical_not(&self) -> bool
    where
        T: Default + PartialEq,
    {
        self.0 == T::default()
    }

    /// Returns a copy of the box, the unary plus of its payload.
    #[must_use]
    pub fn plus(&self) -> Self
    where
        T: Clone,
    {
        self.clone()
    }

    /// Raises the payload to the power held by `exp`.
    ///
    /// Delegates to [`num_traits::Pow`], so the exponent type follows the
    /// payload's own `pow` (for example `u32` for integers, `i32` or `f64`
    /// for floats).
    pub fn pow<R>(self, exp: Box<R>) -> Box<T::Output>
    where
        T: Pow<R>,
    {
        Box(self.0.pow(exp.0))
    }

    /// Shifts the payload right by `rhs` bits, filling with zeros.
    #[must_use]
    pub fn logical_shr(self, rhs: Box<u32>) -> Self
    where
        T: LogicalShr,
    {
        Box(self.0.logical_shr(rhs.0))
    }

    /// Increments the payload in place and returns the box.
    ///
    /// Integers wrap at their type width.
    pub fn pre_inc(&mut self) -> &mut Self
    where
        T: Step,
    {
        self.0 = self.0.successor();
        self
    }

    /// Decrements the payload in place and returns the box.
    ///
    /// Integers wrap at their type width.
    pub fn pre_dec(&mut self) -> &mut Self
    where
        T: Step,
    {
        self.0 = self.0.predecessor();
        self
    }

    /// Increments the payload in place and returns a copy taken before the
    /// increment.
    pub fn post_inc(&mut self) -> Self
    where
        T: Step,
    {
        let previous = *self;
        self.0 = self.0.successor();
        previous
    }

    /// Decrements the payload in place and returns a copy taken before the
    /// decrement.
    pub fn post_dec(&mut self) -> Self
    where
        T: Step,
    {
        let previous = *self;
        self.0 = self.0.predecessor();
        previous
    }
}

impl<T> From<T> for Box<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> Deref for Box<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Box<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T> AsRef<T> for Box<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> AsMut<T> for Box<T> {
    fn as_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T> Borrow<T> for Box<T> {
    fn borrow(&self) -> &T {
        &self.0
    }
}

impl<T> BorrowMut<T> for Box<T> {
    fn borrow_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T: fmt::Display> fmt::Display for Box<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, collections::HashSet, rc::Rc};

    use approx::assert_relative_eq;

    use super::*;

    /// A type with no equality of its own.
    struct Person;

    #[test]
    fn from_and_new_agree() {
        assert_eq!(Box::from(1), Box::new(1));
        assert_eq!(Box::from("box"), Box::new("box"));
        let converted: Box<i32> = 1.into();
        assert_eq!(converted, Box::from(1));
    }

    #[test]
    fn unwrap_returns_value() {
        assert_eq!(Box::from("233").unwrap(), "233");
        assert_eq!(Box::from(-7_i64).unwrap(), -7);
        assert_relative_eq!(Box::from(0.5).unwrap(), 0.5);
    }

    #[test]
    fn map_calls_once() {
        let calls = Cell::new(0);
        let doubled = Box::from(1).map(|n| {
            calls.set(calls.get() + 1);
            n * 2
        });
        assert_eq!(doubled.unwrap(), 2);
        assert_eq!(calls.get(), 1);

        let text = Box::from(3).map(|n| n.to_string());
        assert_eq!(text, Box::from(String::from("3")));
    }

    #[test]
    #[allow(clippy::clone_on_copy)]
    fn clone_is_independent_after_mutation() {
        let mut b1 = Box::from(1);
        let b2 = b1.clone();
        assert_eq!(b1, b2);

        b1.post_inc();
        assert_ne!(b1, b2);
        assert_eq!(b2, Box::from(1));
    }

    #[test]
    fn clone_shares_referents() {
        let shared = Box::from(Rc::new(String::from("shared")));
        let copy = shared.clone();
        assert!(shared.ptr_eq(&copy));
        assert_eq!(Rc::strong_count(&shared), 2);
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(Box::from(1), Box::from(1));
        assert_ne!(Box::from(1), Box::from(2));
        assert_eq!(Box::from("box"), Box::from("box"));

        let s = String::from("box");
        assert_eq!(Box::from(s.clone()), Box::from(s));
    }

    #[test]
    fn identity_is_separate_from_equality() {
        let p1 = Box::from(Rc::new(Person));
        let p2 = Box::from(Rc::new(Person));
        assert!(!p1.ptr_eq(&p2), "Independently built referents differ");
        assert!(p1.ptr_eq(&p1.clone()));

        let a = 5;
        let b = 5;
        assert_eq!(Box::from(&a), Box::from(&b), "Values are equal");
        assert!(!Box::from(&a).ptr_eq(&Box::from(&b)), "Referents are not");
    }

    #[test]
    fn hashing_follows_payload() {
        let set: HashSet<_> = [Box::from(1), Box::from(1), Box::from(2)].into();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn logical_not_checks_for_zero_value() {
        assert!(!Box::from(2_i64).logical_not());
        assert!(Box::from(0_i64).logical_not());
        assert!(Box::from(0.0).logical_not());
        assert!(Box::from(false).logical_not());
        assert!(Box::from(String::new()).logical_not());
        assert!(!Box::from(String::from("x")).logical_not());
    }

    #[test]
    fn plus_returns_equal_box() {
        assert_eq!(Box::from(-1).plus(), Box::from(-1));
    }

    #[test]
    fn pow_uses_payload_exponent_rules() {
        assert_eq!(Box::from(2_i64).pow(Box::from(1_u32)), Box::from(2_i64));
        assert_eq!(Box::from(2_u8).pow(Box::from(7_u32)), Box::from(128_u8));
        assert_relative_eq!(
            Box::from(2.0_f64).pow(Box::from(0.5_f64)).unwrap(),
            2.0_f64.sqrt()
        );
    }

    #[test]
    fn logical_shr_zero_fills() {
        assert_eq!(Box::from(2_i64).logical_shr(Box::from(1)), Box::from(1_i64));
        assert_eq!(Box::from(-1_i32).logical_shr(Box::from(28)), Box::from(15));
    }

    #[test]
    fn prefix_increment_returns_updated_box() {
        let mut b2 = Box::from(1);
        assert_eq!(*b2.pre_inc(), Box::from(2));
        assert_eq!(b2, Box::from(2));

        let mut b4 = Box::from(-1_i8);
        assert_eq!(*b4.pre_dec(), Box::from(-2_i8));
        assert_eq!(b4, Box::from(-2_i8));
    }

    #[test]
    fn postfix_increment_returns_previous_box() {
        let mut b = Box::from(2);
        assert_eq!(b.post_inc(), Box::from(2));
        assert_eq!(b, Box::from(3));

        let mut b3 = Box::from(0_i64);
        assert_eq!(b3.post_dec(), Box::from(0));
        assert_eq!(b3, Box::from(-1));
    }

    #[test]
    fn increments_wrap_at_type_width() {
        let mut byte = Box::from(255_u8);
        byte.pre_inc();
        assert_eq!(byte, Box::from(0));

        let mut zero = Box::from(0_u8);
        assert_eq!(zero.post_dec(), Box::from(0));
        assert_eq!(zero, Box::from(255));

        let mut max = Box::from(i8::MAX);
        max.pre_inc();
        assert_eq!(max, Box::from(i8::MIN));
    }

    #[test]
    fn float_increments_step_by_one() {
        let mut x = Box::from(0.5);
        x.pre_inc().pre_inc();
        assert_relative_eq!(x.unwrap(), 2.5);
    }

    #[test]
    fn deref_and_display() {
        let mut text = Box::from(String::from("ab"));
        assert_eq!(text.len(), 2);
        text.push('c');
        assert_eq!(text.to_string(), "abc");
        assert_eq!(format!("{}", Box::from(42)), "42");
    }
}
