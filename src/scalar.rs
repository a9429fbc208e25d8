//! The [`Scalar`] trait for writing differentiation-generic numeric code.
//!
//! Functions written as `fn f<T: Scalar>(x: T) -> T` work unchanged with plain
//! `f64`, [`Dual<f64>`](crate::Dual) and [`Term<f64>`](crate::Term). The
//! elementary function library in [`math`](crate::math) is written this way.

use std::fmt::{Debug, Display};

use num_traits::{Float as NumFloat, FloatConst, FromPrimitive};

use crate::dual::Dual;
use crate::term::Term;

/// Marker trait for base floating-point types (`f32`, `f64`).
///
/// Only primitive float types implement this; differentiable wrappers do not.
pub trait Float:
    NumFloat + FloatConst + FromPrimitive + Copy + Send + Sync + Default + Debug + Display + 'static
{
}

impl Float for f32 {}
impl Float for f64 {}

/// A real-like number: a primitive float, or a type that carries a primal
/// value together with a derivative channel.
pub trait Scalar:
    NumFloat + FloatConst + FromPrimitive + Copy + Default + Debug + Display + Send + Sync + 'static
{
    /// The underlying primitive float type.
    type Float: Float;

    /// Lift a plain float (zero derivative).
    fn from_f(val: Self::Float) -> Self;

    /// Extract the primal value.
    fn value(&self) -> Self::Float;

    /// Whether this value carries a derivative channel.
    fn has_tangent(&self) -> bool;
}

impl Scalar for f32 {
    type Float = f32;

    #[inline]
    fn from_f(val: f32) -> Self {
        val
    }

    #[inline]
    fn value(&self) -> f32 {
        *self
    }

    #[inline]
    fn has_tangent(&self) -> bool {
        false
    }
}

impl Scalar for f64 {
    type Float = f64;

    #[inline]
    fn from_f(val: f64) -> Self {
        val
    }

    #[inline]
    fn value(&self) -> f64 {
        *self
    }

    #[inline]
    fn has_tangent(&self) -> bool {
        false
    }
}

impl<F: Float> Scalar for Dual<F> {
    type Float = F;

    #[inline]
    fn from_f(val: F) -> Self {
        Dual::constant(val)
    }

    #[inline]
    fn value(&self) -> F {
        self.re
    }

    #[inline]
    fn has_tangent(&self) -> bool {
        true
    }
}

impl<F: Float> Scalar for Term<F> {
    type Float = F;

    #[inline]
    fn from_f(val: F) -> Self {
        Term::Constant(val)
    }

    #[inline]
    fn value(&self) -> F {
        Term::value(self)
    }

    #[inline]
    fn has_tangent(&self) -> bool {
        !self.is_constant()
    }
}
