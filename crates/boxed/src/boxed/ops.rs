use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

use super::Box;

/// Passes a binary operator and its compound assignment through to the payload.
///
/// `Box<T> op Box<U>` is defined whenever `T op U` is, and yields
/// `Box<<T as Op<U>>::Output>`.
macro_rules! box_binary_op {
    ($op:ident, $method:ident, $assign_op:ident, $assign_method:ident) => {
        impl<T, U> $op<Box<U>> for Box<T>
        where
            T: $op<U>,
        {
            type Output = Box<T::Output>;

            #[inline]
            fn $method(self, rhs: Box<U>) -> Self::Output {
                Box($op::$method(self.0, rhs.0))
            }
        }

        impl<T, U> $assign_op<Box<U>> for Box<T>
        where
            T: $assign_op<U>,
        {
            #[inline]
            fn $assign_method(&mut self, rhs: Box<U>) {
                $assign_op::$assign_method(&mut self.0, rhs.0);
            }
        }
    };
}

box_binary_op!(Add, add, AddAssign, add_assign);
box_binary_op!(Sub, sub, SubAssign, sub_assign);
box_binary_op!(Mul, mul, MulAssign, mul_assign);
box_binary_op!(Div, div, DivAssign, div_assign);
box_binary_op!(Rem, rem, RemAssign, rem_assign);
box_binary_op!(BitAnd, bitand, BitAndAssign, bitand_assign);
box_binary_op!(BitOr, bitor, BitOrAssign, bitor_assign);
box_binary_op!(BitXor, bitxor, BitXorAssign, bitxor_assign);
box_binary_op!(Shl, shl, ShlAssign, shl_assign);
box_binary_op!(Shr, shr, ShrAssign, shr_assign);

/// Bitwise complement for integers, logical negation for `bool`.
///
/// See [`Box::logical_not`] for the truthiness test that returns a plain `bool`.
impl<T: Not> Not for Box<T> {
    type Output = Box<T::Output>;

    #[inline]
    fn not(self) -> Self::Output {
        Box(!self.0)
    }
}

impl<T: Neg> Neg for Box<T> {
    type Output = Box<T::Output>;

    #[inline]
    fn neg(self) -> Self::Output {
        Box(-self.0)
    }
}
