use thiserror::Error;

/// Failures raised while differentiating or evaluating a function.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The input does not supply one value per declared parameter.
    #[error(
        "function requires {expected} values corresponding to the {expected} parameters, got {found}"
    )]
    ArityMismatch { expected: usize, found: usize },

    /// A division whose denominator has a zero primal value.
    #[error("division by zero")]
    DivisionByZero,

    /// An elementary function evaluated outside its domain.
    #[error("{op} is undefined at {value}")]
    Domain { op: &'static str, value: f64 },

    /// The function returned a different number of outputs than declared.
    #[error("function declared {expected} outputs but returned {found}")]
    OutputDimMismatch { expected: usize, found: usize },

    /// A function must declare at least one parameter.
    #[error("function arity must be at least 1")]
    ZeroArity,

    /// A function must declare at least one output.
    #[error("function output dimension must be at least 1")]
    ZeroOutputDim,
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
