//! A linear model fitted by gradient descent.

use dualfit::Float;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::convergence::{dot, ConvergenceParams};
use crate::dataset::Dataset;
use crate::error::{OptimError, Result};
use crate::loss::{Loss, SquaredError};
use crate::objective::BatchObjective;
use crate::regularizer::Regularizer;
use crate::result::OptimResult;
use crate::schedule::Schedule;
use crate::solvers::gd::{gradient_descent, GdConfig};
use crate::solvers::sgd::{stochastic_gradient_descent, SgdConfig};

/// Which update rule [`Optimizer::fit`] uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    /// Full-batch gradient descent.
    #[default]
    Gd,
    /// Stochastic gradient descent, one sample per update.
    Sgd,
}

/// Settings for [`Optimizer`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizerConfig<F> {
    /// Step size (default: constant 0.01).
    pub learning_rate: Schedule<F>,
    pub method: Method,
    pub regularizer: Regularizer<F>,
    /// `max_iter` applies to both methods; the tolerances only to [`Method::Gd`].
    pub convergence: ConvergenceParams<F>,
    /// Seeds coefficient initialization and sample selection (default: 0).
    pub seed: u64,
}

impl Default for OptimizerConfig<f64> {
    fn default() -> Self {
        OptimizerConfig {
            learning_rate: Schedule::default(),
            method: Method::default(),
            regularizer: Regularizer::default(),
            convergence: ConvergenceParams::default(),
            seed: 0,
        }
    }
}

impl Default for OptimizerConfig<f32> {
    fn default() -> Self {
        OptimizerConfig {
            learning_rate: Schedule::default(),
            method: Method::default(),
            regularizer: Regularizer::default(),
            convergence: ConvergenceParams::default(),
            seed: 0,
        }
    }
}

/// Fits the coefficients `w` of the model `ŷ = x · w`.
///
/// ```
/// use dualfit_optim::{Dataset, Optimizer, OptimizerConfig, Schedule};
///
/// let data = Dataset::new(
///     vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 1.0]],
///     vec![2.0, -1.0, 1.0],
/// )
/// .unwrap();
/// let mut opt = Optimizer::new(OptimizerConfig {
///     learning_rate: Schedule::Constant(0.2),
///     ..OptimizerConfig::<f64>::default()
/// });
/// opt.fit(&data).unwrap();
/// let w = opt.coefficients().unwrap();
/// assert!((w[0] - 2.0).abs() < 1e-6 && (w[1] + 1.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct Optimizer<F> {
    config: OptimizerConfig<F>,
    coefficients: Option<Vec<F>>,
    result: Option<OptimResult<F>>,
}

impl<F: Float> Optimizer<F> {
    pub fn new(config: OptimizerConfig<F>) -> Self {
        Optimizer {
            config,
            coefficients: None,
            result: None,
        }
    }

    pub fn config(&self) -> &OptimizerConfig<F> {
        &self.config
    }

    /// Fit with the squared-error loss.
    pub fn fit(&mut self, dataset: &Dataset<F>) -> Result<&OptimResult<F>> {
        self.fit_with_loss(dataset, &SquaredError)
    }

    /// Fit with a custom loss. Coefficients start uniform in `[0, 1)`.
    pub fn fit_with_loss<L: Loss<F> + ?Sized>(
        &mut self,
        dataset: &Dataset<F>,
        loss: &L,
    ) -> Result<&OptimResult<F>> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        let x0: Vec<F> = (0..dataset.n_features())
            .map(|_| F::from_f64(rng.gen::<f64>()).unwrap_or_else(F::zero))
            .collect();

        let result = match self.config.method {
            Method::Gd => {
                let mut obj = BatchObjective::new(dataset, loss, self.config.regularizer);
                let config = GdConfig {
                    schedule: self.config.learning_rate,
                    convergence: self.config.convergence.clone(),
                };
                gradient_descent(&mut obj, &x0, &config)?
            }
            Method::Sgd => {
                let config = SgdConfig {
                    schedule: self.config.learning_rate,
                    max_iter: self.config.convergence.max_iter,
                    seed: self.config.seed.wrapping_add(1),
                };
                stochastic_gradient_descent(dataset, loss, self.config.regularizer, &x0, &config)?
            }
        };

        self.coefficients = Some(result.x.clone());
        Ok(self.result.insert(result))
    }

    /// Fitted coefficients, if [`fit`](Self::fit) has succeeded.
    pub fn coefficients(&self) -> Option<&[F]> {
        self.coefficients.as_deref()
    }

    /// Outcome of the last successful fit.
    pub fn result(&self) -> Option<&OptimResult<F>> {
        self.result.as_ref()
    }

    /// `X · w` for each row.
    pub fn predict(&self, features: &[Vec<F>]) -> Result<Vec<F>> {
        let w = self.coefficients().ok_or(OptimError::NotFitted)?;
        features
            .iter()
            .map(|row| {
                if row.len() != w.len() {
                    return Err(OptimError::FeatureCountMismatch {
                        expected: w.len(),
                        found: row.len(),
                    });
                }
                Ok(dot(row, w))
            })
            .collect()
    }

    /// Mean squared error of the fitted model on `dataset`.
    pub fn mse(&self, dataset: &Dataset<F>) -> Result<F> {
        let predictions = self.predict(dataset.features())?;
        let total = predictions
            .iter()
            .zip(dataset.targets())
            .fold(F::zero(), |acc, (&p, &y)| acc + (y - p) * (y - p));
        Ok(total / F::from_usize(dataset.n_samples()).unwrap_or_else(F::nan))
    }
}
