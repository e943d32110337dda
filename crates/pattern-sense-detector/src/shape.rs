//! Basic shape analyzer: hill, valley, plain and duplicate counting.

use std::collections::HashMap;

use pattern_sense_core::{PatternType, Sequence, ShapeAnalysis};

/// Classifies the coarse shape of a sequence.
///
/// A hill is a strict local maximum at an interior index, a valley a strict
/// local minimum. A sequence showing both is reported as `None`.
pub struct ShapeAnalyzer;

impl ShapeAnalyzer {
    /// Create a new shape analyzer.
    pub fn new() -> Self {
        Self
    }

    /// Shape classification plus duplicate count.
    pub fn analyze(&self, sequence: &Sequence) -> ShapeAnalysis {
        ShapeAnalysis::new(
            self.pattern_type(sequence),
            self.count_duplicates(sequence),
        )
    }

    /// Classify the shape.
    pub fn pattern_type(&self, sequence: &Sequence) -> PatternType {
        if self.is_plain(sequence) {
            return PatternType::Plain;
        }

        match (self.is_hill(sequence), self.is_valley(sequence)) {
            (true, true) => PatternType::None,
            (_, true) => PatternType::Valley,
            (true, _) => PatternType::Hill,
            _ => PatternType::None,
        }
    }

    /// Non-empty with every element equal.
    pub fn is_plain(&self, sequence: &Sequence) -> bool {
        match sequence.as_slice() {
            [] => false,
            [first, rest @ ..] => rest.iter().all(|v| v == first),
        }
    }

    /// Some interior element is strictly greater than both neighbours.
    pub fn is_hill(&self, sequence: &Sequence) -> bool {
        sequence
            .as_slice()
            .windows(3)
            .any(|w| w[0] < w[1] && w[1] > w[2])
    }

    /// Some interior element is strictly less than both neighbours.
    pub fn is_valley(&self, sequence: &Sequence) -> bool {
        sequence
            .as_slice()
            .windows(3)
            .any(|w| w[0] > w[1] && w[1] < w[2])
    }

    /// Sum of occurrence counts over values that appear more than once.
    pub fn count_duplicates(&self, sequence: &Sequence) -> usize {
        let mut counts: HashMap<i32, usize> = HashMap::new();
        for &value in sequence.as_slice() {
            *counts.entry(value).or_insert(0) += 1;
        }

        counts.values().filter(|&&count| count > 1).sum()
    }
}

impl Default for ShapeAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
