use crate::dispatch;
use crate::dual::Dual;
use crate::dual_vec::DualVec;
use crate::error::{Error, Result};
use crate::shape::Nested;
use crate::term::Term;
use crate::Float;

/// Values and derivatives produced together by one evaluation.
///
/// Both mirror the input shape. For a function of several parameters each
/// point's derivative is its gradient; for `output_dim > 1` both carry a
/// leading dimension with one entry per output component.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation<F> {
    pub value: Nested<F>,
    pub derivative: Nested<F>,
}

/// Return types accepted from user functions: a single [`Term`] or a vector of them.
pub trait Outputs<F: Float> {
    /// Number of output components.
    fn len(&self) -> usize;

    /// Component `i`; callers check `i < len()`.
    fn component(&self, i: usize) -> Term<F>;
}

impl<F: Float> Outputs<F> for Term<F> {
    fn len(&self) -> usize {
        1
    }

    fn component(&self, _i: usize) -> Term<F> {
        *self
    }
}

impl<F: Float> Outputs<F> for Vec<Term<F>> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn component(&self, i: usize) -> Term<F> {
        self[i]
    }
}

impl<F: Float, const N: usize> Outputs<F> for [Term<F>; N] {
    fn len(&self) -> usize {
        N
    }

    fn component(&self, i: usize) -> Term<F> {
        self[i]
    }
}

/// Evaluate `function` and its derivatives over `input`.
///
/// `arity` is the number of parameters the function reads from its argument
/// slice; `output_dim` the number of components it returns. The input is a
/// single point, a sequence of points (for one-parameter functions) or a
/// batch of `arity`-length rows.
///
/// ```
/// use dualfit::{evaluate, Nested, Term};
///
/// let f = |x: &[Term<f64>]| Ok(x[0] * 5.0 + x[1] * 4.0);
/// let eval = evaluate(f, 2, 1, vec![vec![6.7, 4.0], vec![2.0, 3.0]]).unwrap();
/// assert_eq!(
///     eval.derivative,
///     Nested::from(vec![vec![5.0, 4.0], vec![5.0, 4.0]])
/// );
/// ```
pub fn evaluate<F, O>(
    function: impl Fn(&[Term<F>]) -> Result<O>,
    arity: usize,
    output_dim: usize,
    input: impl Into<Nested<F>>,
) -> Result<Evaluation<F>>
where
    F: Float,
    O: Outputs<F>,
{
    dispatch::dispatch(&function, arity, output_dim, &input.into())
}

/// Function value(s) over `input`; see [`evaluate`].
pub fn evaluate_value<F, O>(
    function: impl Fn(&[Term<F>]) -> Result<O>,
    arity: usize,
    output_dim: usize,
    input: impl Into<Nested<F>>,
) -> Result<Nested<F>>
where
    F: Float,
    O: Outputs<F>,
{
    evaluate(function, arity, output_dim, input).map(|eval| eval.value)
}

/// Derivative(s) over `input`; see [`evaluate`].
///
/// ```
/// use dualfit::{evaluate_derivative, Nested, Term};
///
/// let d = evaluate_derivative(|x: &[Term<f64>]| Ok(x[0] * x[0]), 1, 1, 3.0).unwrap();
/// assert_eq!(d, Nested::Scalar(6.0));
/// ```
pub fn evaluate_derivative<F, O>(
    function: impl Fn(&[Term<F>]) -> Result<O>,
    arity: usize,
    output_dim: usize,
    input: impl Into<Nested<F>>,
) -> Result<Nested<F>>
where
    F: Float,
    O: Outputs<F>,
{
    evaluate(function, arity, output_dim, input).map(|eval| eval.derivative)
}

/// Value and derivative of a scalar function at `x`.
///
/// ```
/// let (v, d) = dualfit::derivative(|x| x.sin() * x, 1.0_f64);
/// assert!((v - 1.0_f64.sin()).abs() < 1e-12);
/// assert!((d - (1.0_f64.cos() + 1.0_f64.sin())).abs() < 1e-12);
/// ```
pub fn derivative<F: Float>(f: impl Fn(Dual<F>) -> Dual<F>, x: F) -> (F, F) {
    let y = f(Dual::variable(x));
    (y.re, y.eps)
}

/// Jacobian-vector product: `(f(x), J·v)`.
///
/// Evaluates `f` at `x` and computes the directional derivative in direction `v`.
pub fn jvp<F: Float>(
    f: impl Fn(&[Dual<F>]) -> Vec<Dual<F>>,
    x: &[F],
    v: &[F],
) -> Result<(Vec<F>, Vec<F>)> {
    if x.len() != v.len() {
        return Err(Error::ArityMismatch {
            expected: x.len(),
            found: v.len(),
        });
    }
    let inputs: Vec<Dual<F>> = x
        .iter()
        .zip(v.iter())
        .map(|(&xi, &vi)| Dual::new(xi, vi))
        .collect();
    let outputs = f(&inputs);
    let values = outputs.iter().map(|d| d.re).collect();
    let tangents = outputs.iter().map(|d| d.eps).collect();
    Ok((values, tangents))
}

/// Value and full gradient of `f : R^N → R` in a single forward pass.
///
/// ```
/// use dualfit::DualVec;
///
/// let (v, g) = dualfit::gradient(|x: &[DualVec<f64, 2>; 2]| x[0] * x[1] + x[0], [3.0, 4.0]);
/// assert_eq!(v, 15.0);
/// assert_eq!(g, [5.0, 3.0]);
/// ```
pub fn gradient<F: Float, const N: usize>(
    f: impl Fn(&[DualVec<F, N>; N]) -> DualVec<F, N>,
    x: [F; N],
) -> (F, [F; N]) {
    let y = f(&DualVec::variables(x));
    (y.re, y.eps)
}
