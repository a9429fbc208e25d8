//! Forward-mode automatic differentiation with shape-directed evaluation.
//!
//! User functions take a slice of [`Term`]s, one per parameter, and return a
//! `Result` so domain errors from [`math`] propagate with `?`. The evaluator
//! works out from the input's shape whether it was given one point, a
//! sequence of points or a batch of rows, and returns values and derivatives
//! in the same shape.
//!
//! ```
//! use dualfit::{evaluate, math, Nested, Term};
//!
//! let f = |x: &[Term<f64>]| Ok(math::exp(x[0]) * x[1]);
//! let eval = evaluate(f, 2, 1, vec![0.0, 2.0]).unwrap();
//! assert_eq!(eval.value, Nested::Scalar(2.0));
//! assert_eq!(eval.derivative, Nested::from(vec![2.0, 1.0]));
//! ```
//!
//! Arithmetic operators on [`Dual`] and [`Term`] follow IEEE semantics, so
//! `x[0] / x[1]` with a zero denominator yields an infinite or NaN result
//! rather than an error. Use [`math::div`] (or [`Dual::checked_div`]) to get
//! [`Error::DivisionByZero`] instead:
//!
//! ```
//! use dualfit::{evaluate, math, Error, Term};
//!
//! let plain = evaluate(|x: &[Term<f64>]| Ok(x[0] / x[1]), 2, 1, vec![1.0, 0.0]).unwrap();
//! assert!(plain.value.as_scalar().unwrap().is_infinite());
//!
//! let checked = evaluate(|x: &[Term<f64>]| math::div(x[0], x[1]), 2, 1, vec![1.0, 0.0]);
//! assert_eq!(checked.unwrap_err(), Error::DivisionByZero);
//! ```

pub mod api;
mod dispatch;
pub mod dual;
pub mod dual_vec;
pub mod error;
pub mod evaluator;
pub mod math;
pub mod scalar;
pub mod shape;
pub mod term;
mod traits;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use api::{
    derivative, evaluate, evaluate_derivative, evaluate_value, gradient, jvp, Evaluation, Outputs,
};
pub use dual::Dual;
pub use dual_vec::DualVec;
pub use error::{Error, Result};
pub use evaluator::Evaluator;
pub use scalar::{Float, Scalar};
pub use shape::Nested;
pub use term::Term;

#[cfg(feature = "parallel")]
pub use parallel::evaluate_par;

/// Type alias for forward-mode dual numbers over `f64`.
pub type Dual64 = Dual<f64>;
/// Type alias for forward-mode dual numbers over `f32`.
pub type Dual32 = Dual<f32>;
