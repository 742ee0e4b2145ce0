use carton_core::Option;

use crate::Box;

/// Boxes a nullable value as an [`Option`].
///
/// A present value becomes `Box(Some(value))` and an absent one becomes
/// `Box(None)`.
///
/// # Example
///
/// ```
/// use carton_boxed::{Box, box_option};
/// use carton_core::Option;
///
/// assert_eq!(box_option(Some("box")), Box::from(Option::Some("box")));
/// assert_eq!(box_option::<&str>(None), Box::from(Option::None));
/// ```
pub fn box_option<T>(value: core::option::Option<T>) -> Box<Option<T>> {
    Box::from(Option::<T>::from(value))
}

/// Extension method for stripping the [`Box`] out of an optional payload.
pub trait OptionUnboxed<T> {
    /// Maps `Some(Box(value))` to `Some(value)`, leaving `None` untouched.
    fn unboxed(self) -> Option<T>;
}

impl<T> OptionUnboxed<T> for Option<Box<T>> {
    fn unboxed(self) -> Option<T> {
        self.map(Box::unwrap)
    }
}

/// Clones the payload out of a borrowed box.
impl<T: Clone> OptionUnboxed<T> for Option<&Box<T>> {
    fn unboxed(self) -> Option<T> {
        self.map(|boxed| T::clone(boxed))
    }
}
