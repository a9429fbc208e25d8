use approx::assert_relative_eq;
use dualfit::{evaluate_derivative, gradient, jvp, Dual, DualVec, Error, Nested, Term};
use num_traits::Float;

#[test]
fn single_lane_matches_dual() {
    let x_dual = Dual::new(2.0_f64, 1.0);
    let x_vec = DualVec::<f64, 1>::new(2.0, [1.0]);

    let ops: Vec<(&str, Dual<f64>, DualVec<f64, 1>)> = vec![
        ("sin", x_dual.sin(), x_vec.sin()),
        ("cos", x_dual.cos(), x_vec.cos()),
        ("tan", x_dual.tan(), x_vec.tan()),
        ("tanh", x_dual.tanh(), x_vec.tanh()),
        ("exp", x_dual.exp(), x_vec.exp()),
        ("ln", x_dual.ln(), x_vec.ln()),
        ("sqrt", x_dual.sqrt(), x_vec.sqrt()),
        ("recip", x_dual.recip(), x_vec.recip()),
        ("powi3", x_dual.powi(3), x_vec.powi(3)),
        ("powf", x_dual.powf(Dual::constant(1.5)), x_vec.powf(1.5)),
        ("abs", Dual::new(-2.0, 1.0).abs(), DualVec::<f64, 1>::new(-2.0, [1.0]).abs()),
        ("div", x_dual / (x_dual + 1.0), x_vec / (x_vec + 1.0)),
        ("sub", 3.0 - x_dual * 2.0, 3.0 - x_vec * 2.0),
    ];

    for (name, dual, dvec) in ops {
        assert!(
            (dual.re - dvec.re).abs() < 1e-15,
            "{}: re mismatch: {} vs {}",
            name,
            dual.re,
            dvec.re
        );
        assert!(
            (dual.eps - dvec.eps[0]).abs() < 1e-14,
            "{}: eps mismatch: {} vs {}",
            name,
            dual.eps,
            dvec.eps[0]
        );
    }
}

#[test]
fn gradient_in_one_pass() {
    let (v, g) = gradient(
        |x: &[DualVec<f64, 3>; 3]| x[0] * x[1].sin() + x[2].exp() / x[0],
        [2.0, 0.5, 1.0],
    );
    let e = 1.0_f64.exp();
    assert_relative_eq!(v, 2.0 * 0.5_f64.sin() + e / 2.0, max_relative = 1e-14);
    assert_relative_eq!(g[0], 0.5_f64.sin() - e / 4.0, max_relative = 1e-14);
    assert_relative_eq!(g[1], 2.0 * 0.5_f64.cos(), max_relative = 1e-14);
    assert_relative_eq!(g[2], e / 2.0, max_relative = 1e-14);
}

#[test]
fn gradient_agrees_with_evaluator() {
    let x = [1.3, -0.4];
    let (_, g) = gradient(|v: &[DualVec<f64, 2>; 2]| v[0] * v[0] * v[1] + v[1].cos(), x);
    let d = evaluate_derivative(
        |v: &[Term<f64>]| Ok(v[0] * v[0] * v[1] + v[1].cos()),
        2,
        1,
        x,
    )
    .unwrap();
    let d = d.to_flat().unwrap();
    assert_relative_eq!(g[0], d[0], max_relative = 1e-14);
    assert_relative_eq!(g[1], d[1], max_relative = 1e-14);
}

#[test]
fn sum_of_lanes() {
    let xs = DualVec::<f64, 2>::variables([1.0, 2.0]);
    let s: DualVec<f64, 2> = xs.iter().copied().sum();
    assert_eq!(s.re, 3.0);
    assert_eq!(s.gradient(), vec![1.0, 1.0]);
}

#[test]
fn jvp_directional_derivative() {
    let (values, tangents) = jvp(
        |x: &[Dual<f64>]| vec![x[0] * x[1], x[0] + x[1]],
        &[2.0, 3.0],
        &[1.0, -1.0],
    )
    .unwrap();
    assert_eq!(values, vec![6.0, 5.0]);
    // J = [[3, 2], [1, 1]], J·v = [1, 0]
    assert_eq!(tangents, vec![1.0, 0.0]);
}

#[test]
fn jvp_length_mismatch() {
    let err = jvp(|x: &[Dual<f64>]| x.to_vec(), &[1.0, 2.0], &[1.0]).unwrap_err();
    assert_eq!(err, Error::ArityMismatch { expected: 2, found: 1 });
}

#[test]
fn evaluator_shape_for_three_parameters() {
    let d = evaluate_derivative(|v: &[Term<f64>]| Ok(v[0] + v[1] + v[2]), 3, 1, [1.0, 2.0, 3.0])
        .unwrap();
    assert_eq!(d, Nested::from(vec![1.0, 1.0, 1.0]));
}
