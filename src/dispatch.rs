//! Shape-directed decomposition of an evaluation into scalar dual-number calls.
//!
//! Vector-valued functions are split into one scalar function per output
//! component. A scalar function of `L >= 2` parameters is differentiated one
//! parameter at a time; batches of points recurse row by row. Everything here
//! is plain recursion over `(function, arity, output_dim)`.

use crate::api::{Evaluation, Outputs};
use crate::error::{Error, Result};
use crate::shape::Nested;
use crate::term::Term;
use crate::Float;

/// A single-output function as seen by the recursion.
type ScalarFn<'a, F> = &'a dyn Fn(&[Term<F>]) -> Result<Term<F>>;

pub(crate) fn check_signature(arity: usize, output_dim: usize) -> Result<()> {
    if arity == 0 {
        return Err(Error::ZeroArity);
    }
    if output_dim == 0 {
        return Err(Error::ZeroOutputDim);
    }
    Ok(())
}

/// Evaluate `f` over `input`, producing values and derivatives shaped like it.
pub(crate) fn dispatch<F, O, Func>(
    f: &Func,
    arity: usize,
    output_dim: usize,
    input: &Nested<F>,
) -> Result<Evaluation<F>>
where
    F: Float,
    O: Outputs<F>,
    Func: Fn(&[Term<F>]) -> Result<O> + ?Sized,
{
    check_signature(arity, output_dim)?;

    if output_dim == 1 {
        let scalar = |args: &[Term<F>]| -> Result<Term<F>> { component(f(args)?, 0, 1) };
        return single(&scalar, arity, input);
    }

    let mut values = Vec::with_capacity(output_dim);
    let mut derivatives = Vec::with_capacity(output_dim);
    for i in 0..output_dim {
        let scalar = |args: &[Term<F>]| -> Result<Term<F>> { component(f(args)?, i, output_dim) };
        let eval = single(&scalar, arity, input)?;
        values.push(eval.value);
        derivatives.push(eval.derivative);
    }
    Ok(Evaluation {
        value: Nested::Seq(values),
        derivative: Nested::Seq(derivatives),
    })
}

fn component<F: Float, O: Outputs<F>>(out: O, i: usize, output_dim: usize) -> Result<Term<F>> {
    if out.len() != output_dim {
        return Err(Error::OutputDimMismatch {
            expected: output_dim,
            found: out.len(),
        });
    }
    Ok(out.component(i))
}

fn single<F: Float>(f: ScalarFn<'_, F>, arity: usize, input: &Nested<F>) -> Result<Evaluation<F>> {
    if arity == 1 {
        return match input {
            Nested::Scalar(x) => {
                let y = f(&[Term::variable(*x)])?;
                Ok(Evaluation {
                    value: Nested::Scalar(y.value()),
                    derivative: Nested::Scalar(y.derivative()),
                })
            }
            Nested::Seq(items) => collect(items.iter().map(|item| single(f, 1, item))),
        };
    }

    if let Nested::Seq(rows) = input {
        if input.is_batch() {
            return collect(rows.iter().map(|row| single(f, arity, row)));
        }
    }

    // Not a batch, so the input is flat.
    let point = input.to_flat().unwrap_or_default();
    if point.len() != arity {
        return Err(Error::ArityMismatch {
            expected: arity,
            found: point.len(),
        });
    }
    partials(f, &point)
}

/// Value and gradient at one point, seeding one parameter per call.
fn partials<F: Float>(f: ScalarFn<'_, F>, point: &[F]) -> Result<Evaluation<F>> {
    let mut args: Vec<Term<F>> = point.iter().copied().map(Term::Constant).collect();
    let value = f(&args)?.value();

    let mut gradient = Vec::with_capacity(point.len());
    for (i, &x) in point.iter().enumerate() {
        args[i] = Term::variable(x);
        let out = f(&args)?;
        args[i] = Term::Constant(x);
        // A constant result means parameter `i` was never used.
        gradient.push(Nested::Scalar(out.tangent().unwrap_or_else(F::zero)));
    }

    Ok(Evaluation {
        value: Nested::Scalar(value),
        derivative: Nested::Seq(gradient),
    })
}

fn collect<F: Float>(evals: impl Iterator<Item = Result<Evaluation<F>>>) -> Result<Evaluation<F>> {
    let mut values = Vec::new();
    let mut derivatives = Vec::new();
    for eval in evals {
        let eval = eval?;
        values.push(eval.value);
        derivatives.push(eval.derivative);
    }
    Ok(Evaluation {
        value: Nested::Seq(values),
        derivative: Nested::Seq(derivatives),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear(x: &[Term<f64>]) -> Result<Term<f64>> {
        Ok(x[0] * 5.0 + x[1] * 4.0)
    }

    #[test]
    fn gradient_at_a_point() {
        let eval = dispatch(&linear, 2, 1, &Nested::from(vec![6.7, 4.0])).unwrap();
        assert_eq!(eval.value, Nested::Scalar(6.7 * 5.0 + 16.0));
        assert_eq!(eval.derivative, Nested::from(vec![5.0, 4.0]));
    }

    #[test]
    fn bare_scalar_with_two_parameters() {
        let err = dispatch(&linear, 2, 1, &Nested::Scalar(1.0)).unwrap_err();
        assert_eq!(err, Error::ArityMismatch { expected: 2, found: 1 });
    }

    #[test]
    fn empty_sequence() {
        let err = dispatch(&linear, 2, 1, &Nested::Seq(vec![])).unwrap_err();
        assert_eq!(err, Error::ArityMismatch { expected: 2, found: 0 });

        let square = |x: &[Term<f64>]| -> Result<Term<f64>> { Ok(x[0] * x[0]) };
        let eval = dispatch(&square, 1, 1, &Nested::Seq(vec![])).unwrap();
        assert_eq!(eval.value, Nested::Seq(vec![]));
    }

    #[test]
    fn invalid_signature() {
        let x = Nested::Scalar(1.0);
        assert_eq!(dispatch(&linear, 0, 1, &x).unwrap_err(), Error::ZeroArity);
        assert_eq!(dispatch(&linear, 1, 0, &x).unwrap_err(), Error::ZeroOutputDim);
    }
}
