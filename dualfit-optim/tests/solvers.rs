use dualfit_optim::{
    gradient_descent, stochastic_gradient_descent, BatchObjective, ConvergenceParams, Dataset,
    GdConfig, Objective, OptimError, Regularizer, SampleObjective, Schedule, SgdConfig,
    SquaredError, TerminationReason,
};

/// f(x) = Σ (x_i - 1)², gradient 2(x - 1).
struct Bowl {
    evals: usize,
}

impl Objective<f64> for Bowl {
    fn dim(&self) -> usize {
        2
    }

    fn eval_grad(&mut self, x: &[f64]) -> dualfit_optim::Result<(f64, Vec<f64>)> {
        self.evals += 1;
        let value = x.iter().map(|xi| (xi - 1.0) * (xi - 1.0)).sum();
        let grad = x.iter().map(|xi| 2.0 * (xi - 1.0)).collect();
        Ok((value, grad))
    }
}

fn plane() -> Dataset<f64> {
    // y = 2 x1 - 3 x2
    let features = vec![
        vec![1.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 1.0],
        vec![2.0, 1.0],
        vec![1.0, 3.0],
    ];
    let targets = features.iter().map(|r| 2.0 * r[0] - 3.0 * r[1]).collect();
    Dataset::new(features, targets).unwrap()
}

fn config(eta: f64, convergence: ConvergenceParams<f64>) -> GdConfig<f64> {
    GdConfig {
        schedule: Schedule::Constant(eta),
        convergence,
    }
}

// ── Gradient descent on a hand-written objective ──

#[test]
fn exact_step_stops_on_gradient_norm() {
    let mut obj = Bowl { evals: 0 };
    let result = gradient_descent(&mut obj, &[3.0, -2.0], &config(0.5, Default::default())).unwrap();
    assert_eq!(result.termination, TerminationReason::GradientNorm);
    assert_eq!(result.iterations, 1);
    assert_eq!(result.x, vec![1.0, 1.0]);
    assert_eq!(result.func_evals, 2);
    assert_eq!(obj.evals, 2);
}

#[test]
fn already_at_minimum() {
    let mut obj = Bowl { evals: 0 };
    let result = gradient_descent(&mut obj, &[1.0, 1.0], &GdConfig::<f64>::default()).unwrap();
    assert_eq!(result.termination, TerminationReason::GradientNorm);
    assert_eq!(result.iterations, 0);
}

#[test]
fn max_iterations() {
    let mut obj = Bowl { evals: 0 };
    let convergence = ConvergenceParams {
        max_iter: 3,
        ..Default::default()
    };
    let result = gradient_descent(&mut obj, &[3.0, -2.0], &config(0.01, convergence)).unwrap();
    assert_eq!(result.termination, TerminationReason::MaxIterations);
    assert_eq!(result.iterations, 3);
    assert_eq!(result.func_evals, 4);
}

#[test]
fn step_size_tolerance() {
    let mut obj = Bowl { evals: 0 };
    let convergence = ConvergenceParams {
        grad_tol: 0.0,
        step_tol: 1e-3,
        ..Default::default()
    };
    let result = gradient_descent(&mut obj, &[3.0, -2.0], &config(0.1, convergence)).unwrap();
    assert_eq!(result.termination, TerminationReason::StepSize);
}

#[test]
fn function_change_tolerance() {
    let mut obj = Bowl { evals: 0 };
    let convergence = ConvergenceParams {
        grad_tol: 0.0,
        step_tol: 0.0,
        func_tol: 1e-3,
        ..Default::default()
    };
    let result = gradient_descent(&mut obj, &[3.0, -2.0], &config(0.1, convergence)).unwrap();
    assert_eq!(result.termination, TerminationReason::FunctionChange);
    assert!(result.iterations < 1000);
}

#[test]
fn divergence_is_a_numerical_error() {
    let mut obj = Bowl { evals: 0 };
    let result = gradient_descent(&mut obj, &[3.0, -2.0], &config(1e3, Default::default())).unwrap();
    assert_eq!(result.termination, TerminationReason::NumericalError);
}

#[test]
fn invalid_learning_rates() {
    for schedule in [
        Schedule::Constant(0.0),
        Schedule::Constant(-0.1),
        Schedule::Constant(f64::NAN),
        Schedule::InverseTime {
            initial: 0.1,
            decay: -1.0,
        },
    ] {
        let mut obj = Bowl { evals: 0 };
        let config = GdConfig {
            schedule,
            convergence: Default::default(),
        };
        let err = gradient_descent(&mut obj, &[0.0, 0.0], &config).unwrap_err();
        assert_eq!(err, OptimError::InvalidLearningRate);
        assert_eq!(obj.evals, 0);
    }
}

#[test]
fn inverse_time_schedule() {
    let s = Schedule::InverseTime {
        initial: 0.5,
        decay: 0.25,
    };
    assert_eq!(s.rate(0), 0.5);
    assert_eq!(s.rate(4), 0.25);
    assert_eq!(Schedule::Constant(0.3).rate(100), 0.3);

    let mut obj = Bowl { evals: 0 };
    let config = GdConfig {
        schedule: s,
        convergence: Default::default(),
    };
    let result = gradient_descent(&mut obj, &[3.0, -2.0], &config).unwrap();
    assert_eq!(result.termination, TerminationReason::GradientNorm);
    assert!((result.x[0] - 1.0).abs() < 1e-8, "x[0] = {}", result.x[0]);
}

// ── Dataset objectives ──

#[test]
fn batch_objective_gradient() {
    let data = plane();
    let mut obj = BatchObjective::new(&data, &SquaredError, Regularizer::None);
    assert_eq!(obj.dim(), 2);

    let w = [0.5, -1.0];
    let (value, grad) = obj.eval_grad(&w).unwrap();

    let n = data.n_samples() as f64;
    let mut expected_value = 0.0;
    let mut expected_grad = [0.0; 2];
    for (x, y) in data.samples() {
        let r = y - (x[0] * w[0] + x[1] * w[1]);
        expected_value += r * r / n;
        expected_grad[0] += -2.0 * r * x[0] / n;
        expected_grad[1] += -2.0 * r * x[1] / n;
    }
    assert!((value - expected_value).abs() < 1e-12);
    assert!((grad[0] - expected_grad[0]).abs() < 1e-12);
    assert!((grad[1] - expected_grad[1]).abs() < 1e-12);
    assert_eq!(obj.func_evals(), 1);
}

#[test]
fn single_coefficient_objective() {
    // y = 3x
    let data: Dataset<f64> = Dataset::new(vec![vec![1.0], vec![2.0], vec![3.0]], vec![3.0, 6.0, 9.0]).unwrap();
    let mut obj = BatchObjective::new(&data, &SquaredError, Regularizer::None);
    let (value, grad) = obj.eval_grad(&[1.0]).unwrap();
    // residuals 2x: mean(4x²) = 56/3, gradient mean(-2·2x·x) = -56/3
    assert!((value - 56.0 / 3.0).abs() < 1e-12, "value = {}", value);
    assert_eq!(grad.len(), 1);
    assert!((grad[0] + 56.0 / 3.0).abs() < 1e-12, "grad = {:?}", grad);

    let mut obj = SampleObjective::new(&data, 1, &SquaredError, Regularizer::None);
    let (value, grad) = obj.eval_grad(&[1.0]).unwrap();
    assert_eq!(value, 16.0);
    assert_eq!(grad, vec![-16.0]);
}

#[test]
fn gd_on_a_single_coefficient() {
    let data = Dataset::new(vec![vec![1.0], vec![2.0], vec![3.0]], vec![3.0, 6.0, 9.0]).unwrap();
    let mut obj = BatchObjective::new(&data, &SquaredError, Regularizer::None);
    let result = gradient_descent(&mut obj, &[0.0], &config(0.05, Default::default())).unwrap();
    assert_eq!(result.termination, TerminationReason::GradientNorm);
    assert!((result.x[0] - 3.0).abs() < 1e-8, "x[0] = {}", result.x[0]);
}

#[test]
fn sample_objective_follows_index() {
    let data = plane();
    let mut obj = SampleObjective::new(&data, 0, &SquaredError, Regularizer::None);
    let (v0, _) = obj.eval_grad(&[0.0, 0.0]).unwrap();
    assert_eq!(v0, 4.0);

    obj.set_index(4);
    let (v4, g4) = obj.eval_grad(&[0.0, 0.0]).unwrap();
    // y = 2 - 9 = -7
    assert_eq!(v4, 49.0);
    assert_eq!(g4, vec![14.0, 42.0]);
    assert_eq!(obj.func_evals(), 2);
}

#[test]
fn ridge_adds_to_the_gradient() {
    let data = plane();
    let w = [1.0, 1.0];
    let (_, plain) = BatchObjective::new(&data, &SquaredError, Regularizer::None)
        .eval_grad(&w)
        .unwrap();
    let (_, ridge) = BatchObjective::new(&data, &SquaredError, Regularizer::Ridge { lambda: 0.5 })
        .eval_grad(&w)
        .unwrap();
    // d/dw λ w² = 2 λ w = 1
    assert!((ridge[0] - plain[0] - 1.0).abs() < 1e-12);
    assert!((ridge[1] - plain[1] - 1.0).abs() < 1e-12);
}

#[test]
fn gd_recovers_linear_coefficients() {
    let data = plane();
    let mut obj = BatchObjective::new(&data, &SquaredError, Regularizer::None);
    let convergence = ConvergenceParams {
        max_iter: 5000,
        ..Default::default()
    };
    let result = gradient_descent(&mut obj, &[0.0, 0.0], &config(0.1, convergence)).unwrap();
    assert_eq!(result.termination, TerminationReason::GradientNorm);
    assert!((result.x[0] - 2.0).abs() < 1e-6, "x[0] = {}", result.x[0]);
    assert!((result.x[1] + 3.0).abs() < 1e-6, "x[1] = {}", result.x[1]);
    assert!(result.value < 1e-12);
}

// ── Stochastic gradient descent ──

fn sgd_config(seed: u64, max_iter: usize) -> SgdConfig<f64> {
    SgdConfig {
        schedule: Schedule::Constant(0.02),
        max_iter,
        seed,
    }
}

#[test]
fn sgd_recovers_linear_coefficients() {
    let data = plane();
    let result = stochastic_gradient_descent(
        &data,
        &SquaredError,
        Regularizer::None,
        &[0.0, 0.0],
        &sgd_config(7, 5000),
    )
    .unwrap();
    assert_eq!(result.termination, TerminationReason::MaxIterations);
    assert_eq!(result.iterations, 5000);
    assert_eq!(result.func_evals, 5001);
    assert!((result.x[0] - 2.0).abs() < 1e-4, "x[0] = {}", result.x[0]);
    assert!((result.x[1] + 3.0).abs() < 1e-4, "x[1] = {}", result.x[1]);
}

#[test]
fn sgd_is_reproducible_for_a_seed() {
    let data = plane();
    let run = |seed| {
        stochastic_gradient_descent(
            &data,
            &SquaredError,
            Regularizer::None,
            &[0.0, 0.0],
            &sgd_config(seed, 10),
        )
        .unwrap()
        .x
    };
    assert_eq!(run(3), run(3));
}

#[test]
fn sgd_divergence_stops_early() {
    let data = plane();
    let config = SgdConfig {
        schedule: Schedule::Constant(10.0),
        max_iter: 1000,
        seed: 1,
    };
    let result =
        stochastic_gradient_descent(&data, &SquaredError, Regularizer::None, &[0.0, 0.0], &config)
            .unwrap();
    assert_eq!(result.termination, TerminationReason::NumericalError);
    assert!(result.iterations < 1000);
}

#[test]
fn sgd_rejects_invalid_learning_rate() {
    let data = plane();
    let config = SgdConfig {
        schedule: Schedule::Constant(0.0),
        ..SgdConfig::<f64>::default()
    };
    let err =
        stochastic_gradient_descent(&data, &SquaredError, Regularizer::None, &[0.0, 0.0], &config)
            .unwrap_err();
    assert_eq!(err, OptimError::InvalidLearningRate);
}
