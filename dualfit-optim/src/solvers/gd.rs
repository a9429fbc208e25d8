use dualfit::Float;

use crate::convergence::{norm, ConvergenceParams};
use crate::error::Result;
use crate::objective::Objective;
use crate::result::{OptimResult, TerminationReason};
use crate::schedule::Schedule;

/// Configuration for full-batch gradient descent.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GdConfig<F> {
    /// Step size per iteration (default: constant 0.01).
    pub schedule: Schedule<F>,
    /// Convergence parameters.
    pub convergence: ConvergenceParams<F>,
}

impl Default for GdConfig<f64> {
    fn default() -> Self {
        GdConfig {
            schedule: Schedule::default(),
            convergence: ConvergenceParams::default(),
        }
    }
}

impl Default for GdConfig<f32> {
    fn default() -> Self {
        GdConfig {
            schedule: Schedule::default(),
            convergence: ConvergenceParams::default(),
        }
    }
}

/// Gradient descent.
///
/// Minimizes `obj` from `x0` with the update `x ← x − η_t ∇f(x)`. An invalid
/// learning rate or a failed evaluation is an error; a NaN or infinite cost
/// ends the run with [`TerminationReason::NumericalError`].
pub fn gradient_descent<F: Float, O: Objective<F>>(
    obj: &mut O,
    x0: &[F],
    config: &GdConfig<F>,
) -> Result<OptimResult<F>> {
    config.schedule.validate()?;

    let mut x = x0.to_vec();
    let (mut f_val, mut grad) = obj.eval_grad(&x)?;
    let mut func_evals = 1usize;
    let mut grad_norm = norm(&grad);

    if !f_val.is_finite() || !grad_norm.is_finite() {
        return finish(x, f_val, grad, grad_norm, 0, func_evals, TerminationReason::NumericalError);
    }
    if grad_norm < config.convergence.grad_tol {
        return finish(x, f_val, grad, grad_norm, 0, func_evals, TerminationReason::GradientNorm);
    }

    for iter in 0..config.convergence.max_iter {
        let eta = config.schedule.rate(iter);
        let mut step_sq = F::zero();
        for (xi, &gi) in x.iter_mut().zip(&grad) {
            let step = eta * gi;
            *xi = *xi - step;
            step_sq = step_sq + step * step;
        }

        let f_prev = f_val;
        (f_val, grad) = obj.eval_grad(&x)?;
        func_evals += 1;
        grad_norm = norm(&grad);
        log::debug!("iter {}: cost {}, |g| {}, eta {}", iter, f_val, grad_norm, eta);

        let done = if !f_val.is_finite() || !grad_norm.is_finite() {
            Some(TerminationReason::NumericalError)
        } else if grad_norm < config.convergence.grad_tol {
            Some(TerminationReason::GradientNorm)
        } else if step_sq.sqrt() < config.convergence.step_tol {
            Some(TerminationReason::StepSize)
        } else if config.convergence.func_tol > F::zero()
            && (f_prev - f_val).abs() < config.convergence.func_tol
        {
            Some(TerminationReason::FunctionChange)
        } else {
            None
        };
        if let Some(reason) = done {
            return finish(x, f_val, grad, grad_norm, iter + 1, func_evals, reason);
        }
    }

    finish(
        x,
        f_val,
        grad,
        grad_norm,
        config.convergence.max_iter,
        func_evals,
        TerminationReason::MaxIterations,
    )
}

fn finish<F: Float>(
    x: Vec<F>,
    value: F,
    gradient: Vec<F>,
    gradient_norm: F,
    iterations: usize,
    func_evals: usize,
    termination: TerminationReason,
) -> Result<OptimResult<F>> {
    log::info!(
        "gradient descent stopped after {} iterations: {} (cost {})",
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
        func_evals,
        termination,
    })
}
