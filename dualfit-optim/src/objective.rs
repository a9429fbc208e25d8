use dualfit::{math, Float, Nested, Term};

use crate::dataset::Dataset;
use crate::error::Result;
use crate::loss::Loss;
use crate::regularizer::Regularizer;

/// Trait for optimization objectives.
///
/// Methods take `&mut self` to allow eval counting and internal buffers.
pub trait Objective<F: Float> {
    /// Number of input variables.
    fn dim(&self) -> usize;

    /// Evaluate the objective and its gradient at `x`.
    ///
    /// Returns `(f(x), ∇f(x))`.
    fn eval_grad(&mut self, x: &[F]) -> Result<(F, Vec<F>)>;
}

/// `x · w` for one feature row.
pub fn predict<F: Float>(features: &[F], w: &[Term<F>]) -> Term<F> {
    features
        .iter()
        .zip(w)
        .map(|(&xi, &wi)| Term::constant(xi) * wi)
        .sum()
}

/// Mean loss over every sample, plus the penalty.
pub fn batch_cost<F: Float, L: Loss<F> + ?Sized>(
    dataset: &Dataset<F>,
    loss: &L,
    regularizer: &Regularizer<F>,
    w: &[Term<F>],
) -> dualfit::Result<Term<F>> {
    let losses = dataset
        .samples()
        .map(|(x, y)| loss.eval(y, predict(x, w)))
        .collect::<dualfit::Result<Vec<_>>>()?;
    Ok(math::mean(&losses)? + regularizer.penalty(w)?)
}

/// Loss on one sample, plus the penalty.
pub fn sample_cost<F: Float, L: Loss<F> + ?Sized>(
    dataset: &Dataset<F>,
    index: usize,
    loss: &L,
    regularizer: &Regularizer<F>,
    w: &[Term<F>],
) -> dualfit::Result<Term<F>> {
    let (x, y) = dataset.sample(index);
    Ok(loss.eval(y, predict(x, w))? + regularizer.penalty(w)?)
}

/// Run a cost closure through the evaluator at the point `w`.
fn value_and_gradient<F: Float>(
    cost: impl Fn(&[Term<F>]) -> dualfit::Result<Term<F>>,
    w: &[F],
) -> Result<(F, Vec<F>)> {
    // A one-element sequence would read as a list of points for a
    // one-parameter function, so a single coefficient goes in bare.
    let input = match w {
        [w0] => Nested::Scalar(*w0),
        _ => Nested::from(w),
    };
    let eval = dualfit::evaluate(cost, w.len(), 1, input)?;
    let value = eval.value.as_scalar().unwrap_or_else(F::nan);
    let gradient = match eval.derivative {
        Nested::Scalar(g) => vec![g],
        seq => seq.to_flat().unwrap_or_default(),
    };
    Ok((value, gradient))
}

/// Full-batch cost of a linear model over a dataset.
pub struct BatchObjective<'a, F: Float, L: ?Sized> {
    dataset: &'a Dataset<F>,
    loss: &'a L,
    regularizer: Regularizer<F>,
    func_evals: usize,
}

impl<'a, F: Float, L: Loss<F> + ?Sized> BatchObjective<'a, F, L> {
    pub fn new(dataset: &'a Dataset<F>, loss: &'a L, regularizer: Regularizer<F>) -> Self {
        BatchObjective {
            dataset,
            loss,
            regularizer,
            func_evals: 0,
        }
    }

    /// Number of function evaluations performed so far.
    pub fn func_evals(&self) -> usize {
        self.func_evals
    }
}

impl<F: Float, L: Loss<F> + ?Sized> Objective<F> for BatchObjective<'_, F, L> {
    fn dim(&self) -> usize {
        self.dataset.n_features()
    }

    fn eval_grad(&mut self, x: &[F]) -> Result<(F, Vec<F>)> {
        self.func_evals += 1;
        let (dataset, loss, regularizer) = (self.dataset, self.loss, &self.regularizer);
        value_and_gradient(|w: &[Term<F>]| batch_cost(dataset, loss, regularizer, w), x)
    }
}

/// Cost of a linear model on a single sample.
pub struct SampleObjective<'a, F: Float, L: ?Sized> {
    dataset: &'a Dataset<F>,
    index: usize,
    loss: &'a L,
    regularizer: Regularizer<F>,
    func_evals: usize,
}

impl<'a, F: Float, L: Loss<F> + ?Sized> SampleObjective<'a, F, L> {
    pub fn new(
        dataset: &'a Dataset<F>,
        index: usize,
        loss: &'a L,
        regularizer: Regularizer<F>,
    ) -> Self {
        SampleObjective {
            dataset,
            index,
            loss,
            regularizer,
            func_evals: 0,
        }
    }

    /// Point the objective at another sample.
    pub fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    pub fn func_evals(&self) -> usize {
        self.func_evals
    }
}

impl<F: Float, L: Loss<F> + ?Sized> Objective<F> for SampleObjective<'_, F, L> {
    fn dim(&self) -> usize {
        self.dataset.n_features()
    }

    fn eval_grad(&mut self, x: &[F]) -> Result<(F, Vec<F>)> {
        self.func_evals += 1;
        let (dataset, index, loss, regularizer) =
            (self.dataset, self.index, self.loss, &self.regularizer);
        value_and_gradient(
            |w: &[Term<F>]| sample_cost(dataset, index, loss, regularizer, w),
            x,
        )
    }
}
