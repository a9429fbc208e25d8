use rayon::prelude::*;

use crate::api::{Evaluation, Outputs};
use crate::dispatch;
use crate::error::Result;
use crate::shape::Nested;
use crate::term::Term;
use crate::Float;

/// [`evaluate`](crate::evaluate) with the elements of a batch (or the points of
/// a one-parameter sequence) dispatched on the rayon pool.
///
/// Returns the same shape as the serial version; any element's failure fails
/// the whole call.
pub fn evaluate_par<F, O, Func>(
    function: Func,
    arity: usize,
    output_dim: usize,
    input: impl Into<Nested<F>>,
) -> Result<Evaluation<F>>
where
    F: Float,
    O: Outputs<F>,
    Func: Fn(&[Term<F>]) -> Result<O> + Sync,
{
    dispatch::check_signature(arity, output_dim)?;
    let input = input.into();

    let rows = match &input {
        Nested::Seq(rows) if arity == 1 || input.is_batch() => rows,
        _ => return dispatch::dispatch(&function, arity, output_dim, &input),
    };

    let evals: Vec<Evaluation<F>> = rows
        .par_iter()
        .map(|row| dispatch::dispatch(&function, arity, output_dim, row))
        .collect::<Result<_>>()?;

    if output_dim == 1 {
        let (value, derivative): (Vec<_>, Vec<_>) = evals.into_iter().map(|e| (e.value, e.derivative)).unzip();
        return Ok(Evaluation {
            value: Nested::Seq(value),
            derivative: Nested::Seq(derivative),
        });
    }

    // Rows come back as [component][..]; the serial layout is [component][row][..].
    let mut value = vec![Vec::with_capacity(evals.len()); output_dim];
    let mut derivative = vec![Vec::with_capacity(evals.len()); output_dim];
    for eval in evals {
        let (Nested::Seq(vs), Nested::Seq(ds)) = (eval.value, eval.derivative) else {
            continue;
        };
        for (i, (v, d)) in vs.into_iter().zip(ds).enumerate() {
            value[i].push(v);
            derivative[i].push(d);
        }
    }
    Ok(Evaluation {
        value: value.into_iter().map(Nested::Seq).collect(),
        derivative: derivative.into_iter().map(Nested::Seq).collect(),
    })
}
