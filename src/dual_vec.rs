//! Multi-lane dual numbers.
//!
//! [`DualVec<F, N>`] carries one tangent lane per input variable, so a single
//! pass through a function of `N` parameters yields every partial derivative.
//! [`gradient`](crate::gradient) is built on it.

use std::fmt::{self, Display};

use crate::Float;

/// A value with `N` tangent lanes.
#[derive(Clone, Copy, Debug)]
pub struct DualVec<F: Float, const N: usize> {
    /// Primal value.
    pub re: F,
    /// Partial derivatives, one per lane.
    pub eps: [F; N],
}

impl<F: Float, const N: usize> Default for DualVec<F, N> {
    fn default() -> Self {
        DualVec::constant(F::zero())
    }
}

impl<F: Float, const N: usize> Display for DualVec<F, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.re)?;
        for (i, e) in self.eps.iter().enumerate() {
            write!(f, " + {}\u{03b5}{}", e, i)?;
        }
        Ok(())
    }
}

impl<F: Float, const N: usize> From<F> for DualVec<F, N> {
    #[inline]
    fn from(val: F) -> Self {
        DualVec::constant(val)
    }
}

impl<F: Float, const N: usize> DualVec<F, N> {
    #[inline]
    pub fn new(re: F, eps: [F; N]) -> Self {
        DualVec { re, eps }
    }

    /// Zero derivative in every lane.
    #[inline]
    pub fn constant(re: F) -> Self {
        DualVec {
            re,
            eps: [F::zero(); N],
        }
    }

    /// Unit derivative in `lane`, zero elsewhere.
    #[inline]
    pub fn with_tangent(re: F, lane: usize) -> Self {
        DualVec {
            re,
            eps: std::array::from_fn(|k| if k == lane { F::one() } else { F::zero() }),
        }
    }

    /// Seed each coordinate of `x` in its own lane.
    pub fn variables(x: [F; N]) -> [Self; N] {
        std::array::from_fn(|i| DualVec::with_tangent(x[i], i))
    }

    #[inline]
    pub fn value(&self) -> F {
        self.re
    }

    /// The tangent lanes as a vector.
    pub fn gradient(&self) -> Vec<F> {
        self.eps.to_vec()
    }

    #[inline(always)]
    fn chain(self, f_val: F, f_deriv: F) -> Self {
        DualVec {
            re: f_val,
            eps: std::array::from_fn(|k| self.eps[k] * f_deriv),
        }
    }

    #[inline]
    pub fn recip(self) -> Self {
        let inv = F::one() / self.re;
        self.chain(inv, -inv * inv)
    }

    #[inline]
    pub fn sqrt(self) -> Self {
        let s = self.re.sqrt();
        let two = F::one() + F::one();
        self.chain(s, F::one() / (two * s))
    }

    #[inline]
    pub fn powi(self, n: i32) -> Self {
        let val = self.re.powi(n);
        if n == 0 {
            return DualVec::constant(val);
        }
        let deriv = F::from(n).unwrap_or_else(F::nan) * self.re.powi(n - 1);
        self.chain(val, deriv)
    }

    /// `self^n` for a constant exponent.
    #[inline]
    pub fn powf(self, n: F) -> Self {
        if n.is_zero() {
            return DualVec::constant(F::one());
        }
        self.chain(self.re.powf(n), n * self.re.powf(n - F::one()))
    }

    #[inline]
    pub fn exp(self) -> Self {
        let e = self.re.exp();
        self.chain(e, e)
    }

    #[inline]
    pub fn ln(self) -> Self {
        self.chain(self.re.ln(), F::one() / self.re)
    }

    #[inline]
    pub fn sin(self) -> Self {
        self.chain(self.re.sin(), self.re.cos())
    }

    #[inline]
    pub fn cos(self) -> Self {
        self.chain(self.re.cos(), -self.re.sin())
    }

    #[inline]
    pub fn tan(self) -> Self {
        let c = self.re.cos();
        self.chain(self.re.tan(), F::one() / (c * c))
    }

    #[inline]
    pub fn tanh(self) -> Self {
        let t = self.re.tanh();
        self.chain(t, F::one() - t * t)
    }

    #[inline]
    pub fn abs(self) -> Self {
        self.chain(self.re.abs(), self.re.signum())
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        if self.re >= other.re {
            self
        } else {
            other
        }
    }

    #[inline]
    pub fn min(self, other: Self) -> Self {
        if self.re <= other.re {
            self
        } else {
            other
        }
    }
}
