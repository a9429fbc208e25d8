use dualfit::Float;

use crate::error::{OptimError, Result};

/// A validated design matrix with one target per row.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<F> {
    features: Vec<Vec<F>>,
    targets: Vec<F>,
}

impl<F: Float> Dataset<F> {
    /// Rows must be non-empty, of equal length, and matched one-to-one by `targets`.
    pub fn new(features: Vec<Vec<F>>, targets: Vec<F>) -> Result<Self> {
        let expected = match features.first() {
            Some(row) if !row.is_empty() => row.len(),
            _ => return Err(OptimError::EmptyDataset),
        };
        if let Some((row, found)) = features
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != expected)
        {
            return Err(OptimError::RaggedFeatures {
                row,
                expected,
                found,
            });
        }
        if targets.len() != features.len() {
            return Err(OptimError::TargetLengthMismatch {
                samples: features.len(),
                targets: targets.len(),
            });
        }
        Ok(Dataset { features, targets })
    }

    #[inline]
    pub fn n_samples(&self) -> usize {
        self.targets.len()
    }

    #[inline]
    pub fn n_features(&self) -> usize {
        self.features[0].len()
    }

    pub fn features(&self) -> &[Vec<F>] {
        &self.features
    }

    pub fn targets(&self) -> &[F] {
        &self.targets
    }

    /// Feature row `i` and its target.
    pub fn sample(&self, i: usize) -> (&[F], F) {
        (&self.features[i], self.targets[i])
    }

    pub fn samples(&self) -> impl Iterator<Item = (&[F], F)> + '_ {
        self.features
            .iter()
            .map(Vec::as_slice)
            .zip(self.targets.iter().copied())
    }
}
