//! Nested numeric shapes for evaluator inputs and outputs.
//!
//! An input is a single number, a sequence of numbers, or a sequence of
//! sequences. Values and derivatives come back as the same type, mirroring the
//! input (with a leading dimension for vector-valued functions).

use crate::Float;

/// A number or an ordered sequence of nested shapes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Nested<F> {
    Scalar(F),
    Seq(Vec<Nested<F>>),
}

impl<F: Float> Nested<F> {
    #[inline]
    pub fn is_seq(&self) -> bool {
        matches!(self, Nested::Seq(_))
    }

    /// Number of top-level elements; a bare scalar counts as one.
    pub fn len(&self) -> usize {
        match self {
            Nested::Scalar(_) => 1,
            Nested::Seq(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Nested::Seq(items) if items.is_empty())
    }

    /// `true` when this is a sequence holding at least one sequence.
    pub fn is_batch(&self) -> bool {
        match self {
            Nested::Scalar(_) => false,
            Nested::Seq(items) => items.iter().any(Nested::is_seq),
        }
    }

    pub fn as_scalar(&self) -> Option<F> {
        match self {
            Nested::Scalar(x) => Some(*x),
            Nested::Seq(_) => None,
        }
    }

    pub fn as_seq(&self) -> Option<&[Nested<F>]> {
        match self {
            Nested::Scalar(_) => None,
            Nested::Seq(items) => Some(items),
        }
    }

    /// Element `i` of a sequence.
    pub fn get(&self, i: usize) -> Option<&Nested<F>> {
        self.as_seq().and_then(|items| items.get(i))
    }

    /// The elements of a flat sequence of numbers; `None` if anything is nested.
    pub fn to_flat(&self) -> Option<Vec<F>> {
        match self {
            Nested::Scalar(x) => Some(vec![*x]),
            Nested::Seq(items) => items.iter().map(Nested::as_scalar).collect(),
        }
    }
}

impl<F: Float> From<F> for Nested<F> {
    fn from(x: F) -> Self {
        Nested::Scalar(x)
    }
}

impl<F: Float> From<Vec<F>> for Nested<F> {
    fn from(xs: Vec<F>) -> Self {
        Nested::Seq(xs.into_iter().map(Nested::Scalar).collect())
    }
}

impl<F: Float> From<&[F]> for Nested<F> {
    fn from(xs: &[F]) -> Self {
        Nested::Seq(xs.iter().copied().map(Nested::Scalar).collect())
    }
}

impl<F: Float, const N: usize> From<[F; N]> for Nested<F> {
    fn from(xs: [F; N]) -> Self {
        Nested::Seq(xs.into_iter().map(Nested::Scalar).collect())
    }
}

impl<F: Float> From<Vec<Vec<F>>> for Nested<F> {
    fn from(rows: Vec<Vec<F>>) -> Self {
        Nested::Seq(rows.into_iter().map(Nested::from).collect())
    }
}

impl<F: Float, const R: usize, const C: usize> From<[[F; C]; R]> for Nested<F> {
    fn from(rows: [[F; C]; R]) -> Self {
        Nested::Seq(rows.into_iter().map(Nested::from).collect())
    }
}

impl<F> FromIterator<Nested<F>> for Nested<F> {
    fn from_iter<I: IntoIterator<Item = Nested<F>>>(iter: I) -> Self {
        Nested::Seq(iter.into_iter().collect())
    }
}
