use approx::assert_relative_eq;
use dualfit::{math, Term};
use dualfit_optim::{
    ConvergenceParams, Dataset, Method, OptimError, Optimizer, OptimizerConfig, Regularizer,
    Schedule, TerminationReason,
};

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

fn gd(eta: f64, regularizer: Regularizer<f64>) -> OptimizerConfig<f64> {
    OptimizerConfig {
        learning_rate: Schedule::Constant(eta),
        regularizer,
        convergence: ConvergenceParams {
            max_iter: 5000,
            ..Default::default()
        },
        ..OptimizerConfig::default()
    }
}

fn l1(w: &[f64]) -> f64 {
    w.iter().map(|v| v.abs()).sum()
}

fn l2(w: &[f64]) -> f64 {
    w.iter().map(|v| v * v).sum()
}

// ── Dataset validation ──

#[test]
fn dataset_validation() {
    assert_eq!(
        Dataset::<f64>::new(vec![], vec![]).unwrap_err(),
        OptimError::EmptyDataset
    );
    assert_eq!(
        Dataset::<f64>::new(vec![vec![]], vec![1.0]).unwrap_err(),
        OptimError::EmptyDataset
    );
    assert_eq!(
        Dataset::new(vec![vec![1.0, 2.0], vec![3.0]], vec![1.0, 2.0]).unwrap_err(),
        OptimError::RaggedFeatures {
            row: 1,
            expected: 2,
            found: 1
        }
    );
    let err = Dataset::new(vec![vec![1.0], vec![2.0]], vec![1.0]).unwrap_err();
    assert_eq!(
        err,
        OptimError::TargetLengthMismatch {
            samples: 2,
            targets: 1
        }
    );
    assert_eq!(err.to_string(), "2 samples but 1 targets");

    let data = plane();
    assert_eq!(data.n_samples(), 5);
    assert_eq!(data.n_features(), 2);
    assert_eq!(data.sample(4), (&[1.0, 3.0][..], -7.0));
}

// ── Fitting ──

#[test]
fn gd_fit_recovers_plane() {
    let data = plane();
    let mut opt = Optimizer::new(gd(0.1, Regularizer::None));
    let result = opt.fit(&data).unwrap();
    assert_eq!(result.termination, TerminationReason::GradientNorm);

    let w = opt.coefficients().unwrap();
    assert_relative_eq!(w[0], 2.0, epsilon = 1e-6);
    assert_relative_eq!(w[1], -3.0, epsilon = 1e-6);
    assert!(opt.mse(&data).unwrap() < 1e-12);

    let p = opt.predict(&[vec![3.0, 2.0]]).unwrap();
    assert_relative_eq!(p[0], 0.0, epsilon = 1e-5);
}

#[test]
fn sgd_fit_recovers_plane() {
    let data = plane();
    let mut opt = Optimizer::new(OptimizerConfig {
        learning_rate: Schedule::Constant(0.02),
        method: Method::Sgd,
        convergence: ConvergenceParams {
            max_iter: 5000,
            ..Default::default()
        },
        seed: 42,
        ..OptimizerConfig::<f64>::default()
    });
    let result = opt.fit(&data).unwrap();
    assert_eq!(result.termination, TerminationReason::MaxIterations);

    let w = opt.coefficients().unwrap();
    assert_relative_eq!(w[0], 2.0, epsilon = 1e-4);
    assert_relative_eq!(w[1], -3.0, epsilon = 1e-4);
}

#[test]
fn single_feature() {
    let data = Dataset::new(vec![vec![1.0], vec![2.0], vec![3.0]], vec![3.0, 6.0, 9.0]).unwrap();
    let mut opt = Optimizer::new(gd(0.05, Regularizer::None));
    let result = opt.fit(&data).unwrap();
    assert_ne!(result.termination, TerminationReason::NumericalError);
    assert!(result.iterations > 0);
    assert_relative_eq!(opt.coefficients().unwrap()[0], 3.0, epsilon = 1e-6);
}

#[test]
fn ridge_shrinks_coefficients() {
    let data = plane();
    let mut plain = Optimizer::new(gd(0.1, Regularizer::None));
    plain.fit(&data).unwrap();
    let mut ridge = Optimizer::new(gd(0.1, Regularizer::Ridge { lambda: 1.0 }));
    ridge.fit(&data).unwrap();

    let (wp, wr) = (plain.coefficients().unwrap(), ridge.coefficients().unwrap());
    assert!(l2(wr) < l2(wp), "ridge {:?} vs plain {:?}", wr, wp);
    assert!(ridge.mse(&data).unwrap() > plain.mse(&data).unwrap());
}

#[test]
fn lasso_shrinks_coefficients() {
    let data = plane();
    let mut plain = Optimizer::new(gd(0.1, Regularizer::None));
    plain.fit(&data).unwrap();
    let mut lasso = Optimizer::new(gd(0.01, Regularizer::Lasso { lambda: 1.0 }));
    let result = lasso.fit(&data).unwrap();
    assert_ne!(result.termination, TerminationReason::NumericalError);

    let (wp, wl) = (plain.coefficients().unwrap(), lasso.coefficients().unwrap());
    assert!(wl.iter().all(|v| v.is_finite()));
    assert!(l1(wl) < l1(wp), "lasso {:?} vs plain {:?}", wl, wp);
}

#[test]
fn custom_loss() {
    let data = plane();
    let half_squared = |y: f64, p: Term<f64>| -> dualfit::Result<Term<f64>> {
        let r = Term::constant(y) - p;
        Ok(r * r * 0.5)
    };
    let mut opt = Optimizer::new(gd(0.2, Regularizer::None));
    opt.fit_with_loss(&data, &half_squared).unwrap();
    let w = opt.coefficients().unwrap();
    assert_relative_eq!(w[0], 2.0, epsilon = 1e-6);
    assert_relative_eq!(w[1], -3.0, epsilon = 1e-6);
}

#[test]
fn loss_errors_propagate() {
    let data = plane();
    // Row 2 has y = -3 and a positive prediction, so the log argument is negative.
    let log_loss =
        |y: f64, p: Term<f64>| -> dualfit::Result<Term<f64>> { math::log(Term::constant(y) - p) };
    let mut opt = Optimizer::new(gd(0.1, Regularizer::None));
    let err = opt.fit_with_loss(&data, &log_loss).unwrap_err();
    assert!(matches!(
        err,
        OptimError::Evaluation(dualfit::Error::Domain { op: "log", .. })
    ));
    assert!(opt.coefficients().is_none());
}

#[test]
fn inverse_time_schedule_fit() {
    let data = plane();
    let mut opt = Optimizer::new(OptimizerConfig {
        learning_rate: Schedule::InverseTime {
            initial: 0.1,
            decay: 1e-4,
        },
        convergence: ConvergenceParams {
            max_iter: 10_000,
            ..Default::default()
        },
        ..OptimizerConfig::<f64>::default()
    });
    opt.fit(&data).unwrap();
    let w = opt.coefficients().unwrap();
    assert_relative_eq!(w[0], 2.0, epsilon = 1e-6);
    assert_relative_eq!(w[1], -3.0, epsilon = 1e-6);
}

#[test]
fn divergent_fit_reports_numerical_error() {
    let data = plane();
    let mut opt = Optimizer::new(gd(100.0, Regularizer::None));
    let result = opt.fit(&data).unwrap();
    assert_eq!(result.termination, TerminationReason::NumericalError);
    assert_eq!(opt.result().unwrap().termination, TerminationReason::NumericalError);
}

#[test]
fn invalid_learning_rate_is_rejected() {
    let data = plane();
    let mut opt = Optimizer::new(gd(-0.1, Regularizer::None));
    assert_eq!(opt.fit(&data).unwrap_err(), OptimError::InvalidLearningRate);
    assert!(opt.result().is_none());
}

#[test]
fn seeded_runs_repeat() {
    let data = plane();
    let config = OptimizerConfig {
        method: Method::Sgd,
        convergence: ConvergenceParams {
            max_iter: 20,
            ..Default::default()
        },
        seed: 9,
        ..OptimizerConfig::<f64>::default()
    };
    let mut a = Optimizer::new(config.clone());
    let mut b = Optimizer::new(config);
    a.fit(&data).unwrap();
    b.fit(&data).unwrap();
    assert_eq!(a.coefficients(), b.coefficients());
}

// ── Prediction ──

#[test]
fn predict_before_fit() {
    let opt = Optimizer::new(OptimizerConfig::<f64>::default());
    assert_eq!(
        opt.predict(&[vec![1.0, 2.0]]).unwrap_err(),
        OptimError::NotFitted
    );
    assert_eq!(opt.mse(&plane()).unwrap_err(), OptimError::NotFitted);
}

#[test]
fn predict_checks_feature_count() {
    let data = plane();
    let mut opt = Optimizer::new(gd(0.1, Regularizer::None));
    opt.fit(&data).unwrap();
    assert_eq!(
        opt.predict(&[vec![1.0, 2.0], vec![1.0]]).unwrap_err(),
        OptimError::FeatureCountMismatch {
            expected: 2,
            found: 1
        }
    );
}

#[test]
fn single_precision_fit() {
    let data = Dataset::new(vec![vec![1.0_f32], vec![2.0], vec![4.0]], vec![0.5, 1.0, 2.0]).unwrap();
    let mut opt = Optimizer::new(OptimizerConfig {
        learning_rate: Schedule::Constant(0.05_f32),
        ..OptimizerConfig::default()
    });
    let result = opt.fit(&data).unwrap();
    assert_eq!(result.termination, TerminationReason::GradientNorm);
    assert_relative_eq!(opt.coefficients().unwrap()[0], 0.5, epsilon = 1e-4);
}
