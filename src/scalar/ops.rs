//! Modular arithmetic operators for `Scalar`.
//!
//! Every operator below is one call to [`Scalar::mul_add`]:
//!
//! ```text
//! x + y = x * 1  + y
//! x * y = x * y  + 0
//! x - y = y * −1 + x
//!    −x = x * −1 + 0
//! ```
//!
//! Only the fused multiply-add has to be audited for correctness and
//! constant-time behavior. Results are always canonical, whatever the
//! operands.

use super::core::{NEG_ONE, ONE, Scalar, ZERO};

use std::borrow::Borrow;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

impl<'a> Add<&'a Scalar> for &Scalar {
    type Output = Scalar;

    fn add(self, rhs: &'a Scalar) -> Scalar {
        Scalar::mul_add(self, &ONE, rhs)
    }
}

impl<'a> Sub<&'a Scalar> for &Scalar {
    type Output = Scalar;

    fn sub(self, rhs: &'a Scalar) -> Scalar {
        Scalar::mul_add(rhs, &NEG_ONE, self)
    }
}

impl<'a> Mul<&'a Scalar> for &Scalar {
    type Output = Scalar;

    fn mul(self, rhs: &'a Scalar) -> Scalar {
        Scalar::mul_add(self, rhs, &ZERO)
    }
}

impl Neg for &Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        Scalar::mul_add(self, &NEG_ONE, &ZERO)
    }
}

impl Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        -&self
    }
}

// Owned and mixed operand forms forward to the borrowed implementation.
macro_rules! forward_binop {
    ($imp:ident, $method:ident) => {
        impl $imp<Scalar> for Scalar {
            type Output = Scalar;

            #[inline(always)]
            fn $method(self, rhs: Scalar) -> Scalar {
                (&self).$method(&rhs)
            }
        }

        impl<'a> $imp<&'a Scalar> for Scalar {
            type Output = Scalar;

            #[inline(always)]
            fn $method(self, rhs: &'a Scalar) -> Scalar {
                (&self).$method(rhs)
            }
        }

        impl $imp<Scalar> for &Scalar {
            type Output = Scalar;

            #[inline(always)]
            fn $method(self, rhs: Scalar) -> Scalar {
                self.$method(&rhs)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);

// The right-hand side is fully computed into a temporary before `self` is
// overwritten, so `x op= x` is well defined.
macro_rules! forward_assign {
    ($imp:ident, $method:ident, $op:tt) => {
        impl<'a> $imp<&'a Scalar> for Scalar {
            #[inline(always)]
            fn $method(&mut self, rhs: &'a Scalar) {
                let result = &*self $op rhs;
                *self = result;
            }
        }

        impl $imp<Scalar> for Scalar {
            #[inline(always)]
            fn $method(&mut self, rhs: Scalar) {
                let result = &*self $op &rhs;
                *self = result;
            }
        }
    };
}

forward_assign!(AddAssign, add_assign, +);
forward_assign!(SubAssign, sub_assign, -);
forward_assign!(MulAssign, mul_assign, *);

impl<T> Sum<T> for Scalar
where
    T: Borrow<Scalar>,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(ZERO, |acc, item| acc + item.borrow())
    }
}

impl<T> Product<T> for Scalar
where
    T: Borrow<Scalar>,
{
    fn product<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(ONE, |acc, item| acc * item.borrow())
    }
}
