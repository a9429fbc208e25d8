use dualfit::Float;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::convergence::norm;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::loss::Loss;
use crate::objective::{BatchObjective, Objective, SampleObjective};
use crate::regularizer::Regularizer;
use crate::result::{OptimResult, TerminationReason};
use crate::schedule::Schedule;

/// Configuration for stochastic gradient descent.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SgdConfig<F> {
    /// Step size per iteration (default: constant 0.01).
    pub schedule: Schedule<F>,
    /// Number of single-sample updates (default: 1000).
    pub max_iter: usize,
    /// Seed for sample selection (default: 0).
    pub seed: u64,
}

impl Default for SgdConfig<f64> {
    fn default() -> Self {
        SgdConfig {
            schedule: Schedule::default(),
            max_iter: 1000,
            seed: 0,
        }
    }
}

impl Default for SgdConfig<f32> {
    fn default() -> Self {
        SgdConfig {
            schedule: Schedule::default(),
            max_iter: 1000,
            seed: 0,
        }
    }
}

/// Stochastic gradient descent on a linear model.
///
/// Each iteration draws one sample uniformly and steps along the gradient of
/// that sample's cost. A single-sample gradient says little about convergence,
/// so the run lasts `max_iter` updates unless the cost becomes non-finite.
/// The reported value and gradient are those of the full-batch cost at the
/// final point.
pub fn stochastic_gradient_descent<F, L>(
    dataset: &Dataset<F>,
    loss: &L,
    regularizer: Regularizer<F>,
    x0: &[F],
    config: &SgdConfig<F>,
) -> Result<OptimResult<F>>
where
    F: Float,
    L: Loss<F> + ?Sized,
{
    config.schedule.validate()?;

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut sample = SampleObjective::new(dataset, 0, loss, regularizer);
    let mut x = x0.to_vec();
    let mut iterations = config.max_iter;
    let mut termination = TerminationReason::MaxIterations;

    for iter in 0..config.max_iter {
        let index = rng.gen_range(0..dataset.n_samples());
        sample.set_index(index);
        let (f_val, grad) = sample.eval_grad(&x)?;
        if !f_val.is_finite() || grad.iter().any(|g| !g.is_finite()) {
            iterations = iter;
            termination = TerminationReason::NumericalError;
            break;
        }

        let eta = config.schedule.rate(iter);
        for (xi, &gi) in x.iter_mut().zip(&grad) {
            *xi = *xi - eta * gi;
        }
        log::debug!("iter {}: sample {}, cost {}, eta {}", iter, index, f_val, eta);
    }

    let mut full = BatchObjective::new(dataset, loss, regularizer);
    let (value, gradient) = full.eval_grad(&x)?;
    let gradient_norm = norm(&gradient);
    if !value.is_finite() {
        termination = TerminationReason::NumericalError;
    }
    log::info!(
        "stochastic gradient descent stopped after {} iterations: {} (cost {})",
        iterations,
        termination,
        value
    );

    Ok(OptimResult {
        x,
        value,
        gradient,
        gradient_norm,
        iterations,
        func_evals: sample.func_evals() + full.func_evals(),
        termination,
    })
}
