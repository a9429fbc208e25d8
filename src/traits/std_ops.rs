use std::cmp::Ordering;
use std::iter::Sum;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

use crate::dual::Dual;
use crate::Float;
use crate::term::Term;

// ──────────────────────────────────────────────
//  Dual<F> operators
// ──────────────────────────────────────────────

impl<F: Float> Add for Dual<F> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Dual {
            re: self.re + rhs.re,
            eps: self.eps + rhs.eps,
        }
    }
}

impl<F: Float> Sub for Dual<F> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Dual {
            re: self.re - rhs.re,
            eps: self.eps - rhs.eps,
        }
    }
}

impl<F: Float> Mul for Dual<F> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Dual {
            re: self.re * rhs.re,
            eps: self.eps * rhs.re + self.re * rhs.eps,
        }
    }
}

impl<F: Float> Div for Dual<F> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        let inv = F::one() / rhs.re;
        Dual {
            re: self.re * inv,
            eps: (self.eps * rhs.re - self.re * rhs.eps) * inv * inv,
        }
    }
}

impl<F: Float> Neg for Dual<F> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Dual {
            re: -self.re,
            eps: -self.eps,
        }
    }
}

impl<F: Float> Rem for Dual<F> {
    type Output = Self;
    #[inline]
    fn rem(self, rhs: Self) -> Self {
        Dual {
            re: self.re % rhs.re,
            eps: self.eps,
        }
    }
}

impl<F: Float> PartialEq for Dual<F> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.re == other.re
    }
}

impl<F: Float> PartialOrd for Dual<F> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.re.partial_cmp(&other.re)
    }
}

// ──────────────────────────────────────────────
//  Term<F> operators
// ──────────────────────────────────────────────

impl<F: Float> Add for Term<F> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a + b, |a, b| a + b)
    }
}

impl<F: Float> Sub for Term<F> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a - b, |a, b| a - b)
    }
}

impl<F: Float> Mul for Term<F> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a * b, |a, b| a * b)
    }
}

impl<F: Float> Div for Term<F> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a / b, |a, b| a / b)
    }
}

impl<F: Float> Rem for Term<F> {
    type Output = Self;
    #[inline]
    fn rem(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a % b, |a, b| a % b)
    }
}

impl<F: Float> Neg for Term<F> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.map(|c| -c, |d| -d)
    }
}

impl<F: Float> PartialEq for Term<F> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl<F: Float> PartialOrd for Term<F> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value().partial_cmp(&other.value())
    }
}

// Compound assignment and summation are identical for both types.
macro_rules! impl_assign_and_sum {
    ($t:ident) => {
        impl<F: Float> AddAssign for $t<F> {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl<F: Float> SubAssign for $t<F> {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl<F: Float> MulAssign for $t<F> {
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl<F: Float> DivAssign for $t<F> {
            #[inline]
            fn div_assign(&mut self, rhs: Self) {
                *self = *self / rhs;
            }
        }

        impl<F: Float> RemAssign for $t<F> {
            #[inline]
            fn rem_assign(&mut self, rhs: Self) {
                *self = *self % rhs;
            }
        }

        impl<F: Float> Sum for $t<F> {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold($t::constant(F::zero()), |acc, x| acc + x)
            }
        }
    };
}

impl_assign_and_sum!(Dual);
impl_assign_and_sum!(Term);

// Mixed ops with primitive floats. A bare float behaves as a constant, so it
// never changes the tag of a `Term`.
macro_rules! impl_mixed_scalar_ops {
    ($t:ident, $f:ty) => {
        impl Add<$f> for $t<$f> {
            type Output = $t<$f>;
            #[inline]
            fn add(self, rhs: $f) -> $t<$f> {
                self + $t::constant(rhs)
            }
        }

        impl Add<$t<$f>> for $f {
            type Output = $t<$f>;
            #[inline]
            fn add(self, rhs: $t<$f>) -> $t<$f> {
                $t::constant(self) + rhs
            }
        }

        impl Sub<$f> for $t<$f> {
            type Output = $t<$f>;
            #[inline]
            fn sub(self, rhs: $f) -> $t<$f> {
                self - $t::constant(rhs)
            }
        }

        impl Sub<$t<$f>> for $f {
            type Output = $t<$f>;
            #[inline]
            fn sub(self, rhs: $t<$f>) -> $t<$f> {
                $t::constant(self) - rhs
            }
        }

        impl Mul<$f> for $t<$f> {
            type Output = $t<$f>;
            #[inline]
            fn mul(self, rhs: $f) -> $t<$f> {
                self * $t::constant(rhs)
            }
        }

        impl Mul<$t<$f>> for $f {
            type Output = $t<$f>;
            #[inline]
            fn mul(self, rhs: $t<$f>) -> $t<$f> {
                $t::constant(self) * rhs
            }
        }

        impl Div<$f> for $t<$f> {
            type Output = $t<$f>;
            #[inline]
            fn div(self, rhs: $f) -> $t<$f> {
                self / $t::constant(rhs)
            }
        }

        impl Div<$t<$f>> for $f {
            type Output = $t<$f>;
            #[inline]
            fn div(self, rhs: $t<$f>) -> $t<$f> {
                $t::constant(self) / rhs
            }
        }

        impl Rem<$f> for $t<$f> {
            type Output = $t<$f>;
            #[inline]
            fn rem(self, rhs: $f) -> $t<$f> {
                self % $t::constant(rhs)
            }
        }

        impl Rem<$t<$f>> for $f {
            type Output = $t<$f>;
            #[inline]
            fn rem(self, rhs: $t<$f>) -> $t<$f> {
                $t::constant(self) % rhs
            }
        }
    };
}

impl_mixed_scalar_ops!(Dual, f32);
impl_mixed_scalar_ops!(Dual, f64);
impl_mixed_scalar_ops!(Term, f32);
impl_mixed_scalar_ops!(Term, f64);
