//! Elementary functions over any [`Scalar`].
//!
//! Plain numbers go in and come out as plain numbers; [`Dual`](crate::Dual) and
//! [`Term`](crate::Term) arguments come out with `derivative = f'(value) · tangent`.
//! Functions with a restricted domain return [`Result`] so user code can
//! propagate failures with `?`:
//!
//! ```
//! use dualfit::{math, Term};
//!
//! let x = Term::variable(2.0_f64);
//! let y = math::log(math::exp(x)).unwrap();
//! assert!((y.derivative() - 1.0).abs() < 1e-12);
//!
//! assert!(math::log(Term::variable(-1.0_f64)).is_err());
//! ```

use num_traits::{Float as _, ToPrimitive, Zero};

use crate::error::{Error, Result};
use crate::scalar::Scalar;

fn domain<T: Scalar>(op: &'static str, x: &T) -> Error {
    Error::Domain {
        op,
        value: x.value().to_f64().unwrap_or(f64::NAN),
    }
}

#[inline]
pub fn exp<T: Scalar>(x: T) -> T {
    x.exp()
}

/// Natural logarithm. Fails when `x <= 0`.
#[inline]
pub fn log<T: Scalar>(x: T) -> Result<T> {
    if x.value() <= T::Float::zero() {
        return Err(domain("log", &x));
    }
    Ok(x.ln())
}

#[inline]
pub fn sin<T: Scalar>(x: T) -> T {
    x.sin()
}

#[inline]
pub fn cos<T: Scalar>(x: T) -> T {
    x.cos()
}

#[inline]
pub fn tan<T: Scalar>(x: T) -> T {
    x.tan()
}

#[inline]
pub fn tanh<T: Scalar>(x: T) -> T {
    x.tanh()
}

/// Square root. Fails when `x < 0`.
#[inline]
pub fn sqrt<T: Scalar>(x: T) -> Result<T> {
    if x.value() < T::Float::zero() {
        return Err(domain("sqrt", &x));
    }
    Ok(x.sqrt())
}

/// Absolute value.
///
/// The derivative `sign(x)` does not exist at zero, so a value carrying a
/// tangent fails there. A plain zero returns zero.
#[inline]
pub fn abs<T: Scalar>(x: T) -> Result<T> {
    if x.has_tangent() && x.value().is_zero() {
        return Err(domain("abs", &x));
    }
    Ok(x.abs())
}

/// `x^n` for a constant exponent.
///
/// A fractional power of a non-positive base is a domain error. `n == 0`
/// gives `1` with zero derivative.
#[inline]
pub fn pow<T: Scalar>(x: T, n: T::Float) -> Result<T> {
    if x.value() <= T::Float::zero() && !n.fract().is_zero() {
        return Err(domain("pow", &x));
    }
    Ok(x.powf(T::from_f(n)))
}

#[inline]
pub fn powi<T: Scalar>(x: T, n: i32) -> T {
    x.powi(n)
}

/// `a / b`, failing with [`Error::DivisionByZero`] when `b` is zero.
#[inline]
pub fn div<T: Scalar>(a: T, b: T) -> Result<T> {
    if b.value().is_zero() {
        return Err(Error::DivisionByZero);
    }
    Ok(a / b)
}

#[inline]
pub fn recip<T: Scalar>(x: T) -> Result<T> {
    if x.value().is_zero() {
        return Err(Error::DivisionByZero);
    }
    Ok(x.recip())
}

/// Sum of a sequence; value and derivative channels add independently.
/// The empty sum is zero.
pub fn sum<T: Scalar, I: IntoIterator<Item = T>>(xs: I) -> T {
    xs.into_iter().fold(T::zero(), |acc, x| acc + x)
}

/// Arithmetic mean. Fails with [`Error::DivisionByZero`] on an empty slice.
pub fn mean<T: Scalar>(xs: &[T]) -> Result<T> {
    let n = T::from_usize(xs.len()).ok_or(Error::DivisionByZero)?;
    div(sum(xs.iter().copied()), n)
}
