/// A trait for types that can step to their successor and predecessor.
///
/// Integers wrap at their type width, mirroring two's-complement hardware:
/// the successor of `u8::MAX` is `0` and the predecessor of `i8::MIN` is
/// `i8::MAX`. Floats step by `1.0`.
///
/// # Examples
///
/// ```rust
/// # use carton_boxed::Step;
/// assert_eq!(254_u8.successor(), 255);
/// assert_eq!(255_u8.successor(), 0); // Wraps around
/// assert_eq!(0_u8.predecessor(), 255);
/// assert_eq!(1.5_f64.successor(), 2.5);
/// ```
pub trait Step: Copy {
    /// Returns the value one step above `self`.
    #[must_use]
    fn successor(self) -> Self;

    /// Returns the value one step below `self`.
    #[must_use]
    fn predecessor(self) -> Self;
}

macro_rules! step_impl_int {
    ($($t:ty),*) => {
        $(
            impl Step for $t {
                #[inline(always)]
                fn successor(self) -> Self {
                    self.wrapping_add(1)
                }

                #[inline(always)]
                fn predecessor(self) -> Self {
                    self.wrapping_sub(1)
                }
            }
        )*
    };
}

macro_rules! step_impl_float {
    ($($t:ty),*) => {
        $(
            impl Step for $t {
                #[inline(always)]
                fn successor(self) -> Self {
                    self + 1.0
                }

                #[inline(always)]
                fn predecessor(self) -> Self {
                    self - 1.0
                }
            }
        )*
    };
}

step_impl_int!(u8, u16, u32, u64, u128, usize);
step_impl_int!(i8, i16, i32, i64, i128, isize);
step_impl_float!(f32, f64);

/// A trait for integers that support a logical (zero-filling) right shift.
///
/// For unsigned integers this is the ordinary `>>`. For signed integers the
/// bits are reinterpreted as unsigned before shifting, so the sign bit is not
/// propagated. The shift amount is masked to the type width, as with
/// `wrapping_shr`.
///
/// # Examples
///
/// ```rust
/// # use carton_boxed::LogicalShr;
/// assert_eq!(2_i64.logical_shr(1), 1);
/// assert_eq!((-1_i8).logical_shr(4), 0x0f);
/// assert_eq!((-1_i32) >> 4, -1); // Arithmetic shift keeps the sign
/// ```
pub trait LogicalShr: Sized {
    /// Shifts `self` right by `rhs` bits, filling with zeros.
    #[must_use]
    fn logical_shr(self, rhs: u32) -> Self;
}

macro_rules! logical_shr_impl {
    (unsigned: $($t:ty),*) => {
        $(
            impl LogicalShr for $t {
                #[inline(always)]
                fn logical_shr(self, rhs: u32) -> Self {
                    self.wrapping_shr(rhs)
                }
            }
        )*
    };
    (signed: $($t:ty => $unsigned:ty),*) => {
        $(
            impl LogicalShr for $t {
                #[inline(always)]
                #[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]
                fn logical_shr(self, rhs: u32) -> Self {
                    (self as $unsigned).wrapping_shr(rhs) as $t
                }
            }
        )*
    };
}

logical_shr_impl!(unsigned: u8, u16, u32, u64, u128, usize);
logical_shr_impl!(
    signed: i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize
);
