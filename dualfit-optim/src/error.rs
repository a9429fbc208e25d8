use thiserror::Error;

/// Failures raised while validating data or fitting a model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimError {
    /// Evaluating the cost or its derivative failed.
    #[error(transparent)]
    Evaluation(#[from] dualfit::Error),

    #[error("dataset must have at least one sample and one feature")]
    EmptyDataset,

    #[error("row {row} has {found} features, expected {expected}")]
    RaggedFeatures {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("{samples} samples but {targets} targets")]
    TargetLengthMismatch { samples: usize, targets: usize },

    #[error("learning rate must be positive and finite")]
    InvalidLearningRate,

    #[error("model has not been fitted")]
    NotFitted,

    /// A prediction row whose length differs from the fitted coefficients.
    #[error("expected {expected} features, got {found}")]
    FeatureCountMismatch { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, OptimError>;
