//! Gradient-based fitting of linear models, with derivatives from `dualfit`.
//!
//! Each optimizer step builds a cost closure over the dataset and hands it to
//! [`dualfit::evaluate`] at the current coefficients; the gradient comes back
//! from forward-mode differentiation, one seeded pass per coefficient.

pub mod convergence;
pub mod dataset;
pub mod error;
pub mod loss;
pub mod model;
pub mod objective;
pub mod regularizer;
pub mod result;
pub mod schedule;
pub mod solvers;

pub use convergence::ConvergenceParams;
pub use dataset::Dataset;
pub use error::{OptimError, Result};
pub use loss::{Loss, SquaredError};
pub use model::{Method, Optimizer, OptimizerConfig};
pub use objective::{BatchObjective, Objective, SampleObjective};
pub use regularizer::Regularizer;
pub use result::{OptimResult, TerminationReason};
pub use schedule::Schedule;
pub use solvers::gd::{gradient_descent, GdConfig};
pub use solvers::sgd::{stochastic_gradient_descent, SgdConfig};
