//! Tagged operands for user functions.
//!
//! A [`Term`] is either a plain constant or a dual number that depends on the
//! variable currently being differentiated. Operations between constants stay
//! constant; anything touching a differentiable operand becomes differentiable.
//! The evaluator reads the tag of a function's result to tell "this parameter
//! was not used" (partial derivative 0) apart from a genuine dependency.

use std::fmt::{self, Display};

use crate::dual::Dual;
use crate::Float;

/// A plain constant, or a value carrying a derivative channel.
#[derive(Clone, Copy, Debug)]
pub enum Term<F: Float> {
    Constant(F),
    Differentiable(Dual<F>),
}

impl<F: Float> Default for Term<F> {
    fn default() -> Self {
        Term::Constant(F::zero())
    }
}

impl<F: Float> Display for Term<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Constant(c) => write!(f, "{}", c),
            Term::Differentiable(d) => write!(f, "{}", d),
        }
    }
}

impl<F: Float> From<F> for Term<F> {
    #[inline]
    fn from(value: F) -> Self {
        Term::Constant(value)
    }
}

impl<F: Float> From<Dual<F>> for Term<F> {
    #[inline]
    fn from(dual: Dual<F>) -> Self {
        Term::Differentiable(dual)
    }
}

impl<F: Float> Term<F> {
    #[inline]
    pub fn constant(value: F) -> Self {
        Term::Constant(value)
    }

    /// Seed a differentiable operand with unit derivative.
    #[inline]
    pub fn variable(value: F) -> Self {
        Term::Differentiable(Dual::variable(value))
    }

    /// Primal value.
    #[inline]
    pub fn value(&self) -> F {
        match self {
            Term::Constant(c) => *c,
            Term::Differentiable(d) => d.re,
        }
    }

    /// Derivative channel; `None` for constants.
    #[inline]
    pub fn tangent(&self) -> Option<F> {
        match self {
            Term::Constant(_) => None,
            Term::Differentiable(d) => Some(d.eps),
        }
    }

    /// Derivative, with constants contributing zero.
    #[inline]
    pub fn derivative(&self) -> F {
        self.tangent().unwrap_or_else(F::zero)
    }

    #[inline]
    pub fn is_constant(&self) -> bool {
        matches!(self, Term::Constant(_))
    }

    /// View as a dual number, lifting constants with zero derivative.
    #[inline]
    pub fn to_dual(self) -> Dual<F> {
        match self {
            Term::Constant(c) => Dual::constant(c),
            Term::Differentiable(d) => d,
        }
    }

    /// Apply a unary operation on the matching channel.
    #[inline]
    pub(crate) fn map(self, on_const: impl FnOnce(F) -> F, on_dual: impl FnOnce(Dual<F>) -> Dual<F>) -> Self {
        match self {
            Term::Constant(c) => Term::Constant(on_const(c)),
            Term::Differentiable(d) => Term::Differentiable(on_dual(d)),
        }
    }

    /// Apply a binary operation; the result is constant only when both sides are.
    #[inline]
    pub(crate) fn zip(
        self,
        rhs: Self,
        on_const: impl FnOnce(F, F) -> F,
        on_dual: impl FnOnce(Dual<F>, Dual<F>) -> Dual<F>,
    ) -> Self {
        match (self, rhs) {
            (Term::Constant(a), Term::Constant(b)) => Term::Constant(on_const(a, b)),
            (a, b) => Term::Differentiable(on_dual(a.to_dual(), b.to_dual())),
        }
    }
}
