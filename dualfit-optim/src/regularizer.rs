use dualfit::{math, Float, Term};

// Keeps `abs` off its kink when a coefficient is exactly zero.
const LASSO_SHIFT: f64 = 1e-4;

/// Penalty added to the cost.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Regularizer<F> {
    #[default]
    None,
    /// L1: `λ · Σ |w + 1e-4|`. A coefficient exactly at `-1e-4` sits on the
    /// kink and contributes zero with subgradient zero.
    Lasso { lambda: F },
    /// L2: `λ · Σ w²`.
    Ridge { lambda: F },
}

impl<F: Float> Regularizer<F> {
    pub fn penalty(&self, w: &[Term<F>]) -> dualfit::Result<Term<F>> {
        match *self {
            Regularizer::None => Ok(Term::constant(F::zero())),
            Regularizer::Lasso { lambda } => {
                let shift = Term::constant(F::from_f64(LASSO_SHIFT).unwrap_or_else(F::zero));
                let terms = w
                    .iter()
                    .map(|&wi| {
                        let shifted = wi + shift;
                        if shifted.value().is_zero() {
                            Ok(Term::constant(F::zero()))
                        } else {
                            math::abs(shifted)
                        }
                    })
                    .collect::<dualfit::Result<Vec<_>>>()?;
                Ok(math::sum(terms) * Term::constant(lambda))
            }
            Regularizer::Ridge { lambda } => {
                Ok(math::sum(w.iter().map(|&wi| wi * wi)) * Term::constant(lambda))
            }
        }
    }
}
