//! Per-sample loss functions.

use dualfit::{Float, Term};

/// A loss comparing a target with a differentiable prediction.
///
/// Any closure `Fn(F, Term<F>) -> dualfit::Result<Term<F>>` is a loss, so
/// callers can supply their own:
///
/// ```
/// use dualfit::{math, Term};
/// use dualfit_optim::Loss;
///
/// let absolute = |y: f64, p: Term<f64>| math::abs(Term::constant(y) - p);
/// assert_eq!(absolute.eval(1.0, Term::constant(3.0)).unwrap().value(), 2.0);
/// ```
pub trait Loss<F: Float> {
    fn eval(&self, target: F, prediction: Term<F>) -> dualfit::Result<Term<F>>;
}

/// `(y - ŷ)²`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SquaredError;

impl<F: Float> Loss<F> for SquaredError {
    fn eval(&self, target: F, prediction: Term<F>) -> dualfit::Result<Term<F>> {
        let residual = Term::constant(target) - prediction;
        Ok(residual * residual)
    }
}

impl<F, Func> Loss<F> for Func
where
    F: Float,
    Func: Fn(F, Term<F>) -> dualfit::Result<Term<F>>,
{
    fn eval(&self, target: F, prediction: Term<F>) -> dualfit::Result<Term<F>> {
        self(target, prediction)
    }
}
