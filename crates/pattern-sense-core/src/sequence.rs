//! Integer sequence type consumed by every detector.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Number of elements the public analysis contract requires.
pub const EXPECTED_ARITY: usize = 5;

/// Ordered, immutable sequence of signed integers.
///
/// Construction through [`Sequence::new`] accepts any length, so detectors must
/// handle empty and single-element inputs. [`Sequence::parse`] is the validating
/// entry point used at service boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence(Vec<i32>);

impl Sequence {
    /// Create a new sequence without arity checks.
    pub fn new(values: Vec<i32>) -> Self {
        Self(values)
    }

    /// Validate wide integers and build a sequence.
    ///
    /// Every value must fit in an `i32`. When `expected_arity` is set the length
    /// must match it exactly. Arity is checked before range.
    pub fn parse(values: &[i64], expected_arity: Option<usize>) -> Result<Self> {
        if let Some(expected) = expected_arity {
            if values.len() != expected {
                return Err(Error::InvalidArity {
                    expected,
                    actual: values.len(),
                });
            }
        }

        values
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                i32::try_from(value).map_err(|_| Error::ValueOutOfRange { index, value })
            })
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    /// Elements as a slice.
    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence has no elements.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Element at `index`, if present.
    pub fn get(&self, index: usize) -> Option<i32> {
        self.0.get(index).copied()
    }

    /// Adjacent `(previous, current)` pairs in order.
    pub fn pairs(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.0.windows(2).map(|w| (w[0], w[1]))
    }

    /// A new sequence with the elements in reverse order.
    pub fn reversed(&self) -> Self {
        Self(self.0.iter().rev().copied().collect())
    }
}

impl From<Vec<i32>> for Sequence {
    fn from(values: Vec<i32>) -> Self {
        Self(values)
    }
}

impl From<&[i32]> for Sequence {
    fn from(values: &[i32]) -> Self {
        Self(values.to_vec())
    }
}

impl<const N: usize> From<[i32; N]> for Sequence {
    fn from(values: [i32; N]) -> Self {
        Self(values.to_vec())
    }
}

impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "[{joined}]")
    }
}
