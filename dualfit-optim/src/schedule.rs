use dualfit::Float;

use crate::error::{OptimError, Result};

/// Learning rate as a function of the iteration count.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Schedule<F> {
    /// A fixed step size.
    Constant(F),
    /// `initial / (1 + decay · t)`.
    InverseTime { initial: F, decay: F },
}

impl<F: Float> Schedule<F> {
    /// Step size at iteration `t` (zero-based).
    pub fn rate(&self, t: usize) -> F {
        match *self {
            Schedule::Constant(eta) => eta,
            Schedule::InverseTime { initial, decay } => {
                let t = F::from_usize(t).unwrap_or_else(F::infinity);
                initial / (F::one() + decay * t)
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        let ok = match *self {
            Schedule::Constant(eta) => eta.is_finite() && eta > F::zero(),
            Schedule::InverseTime { initial, decay } => {
                initial.is_finite() && initial > F::zero() && decay.is_finite() && decay >= F::zero()
            }
        };
        if ok {
            Ok(())
        } else {
            Err(OptimError::InvalidLearningRate)
        }
    }
}

impl Default for Schedule<f64> {
    fn default() -> Self {
        Schedule::Constant(0.01)
    }
}

impl Default for Schedule<f32> {
    fn default() -> Self {
        Schedule::Constant(0.01)
    }
}
