//! Symmetry (palindrome) detector.

use pattern_sense_core::Sequence;

use crate::detection::{Detection, DetectionContext, SequenceDetector};

/// Detects sequences that read the same from both ends.
pub struct SymmetryDetector;

impl SymmetryDetector {
    /// Create a new symmetry detector.
    pub fn new() -> Self {
        Self
    }

    /// Compare mirrored pairs exactly; the middle element of an odd length is skipped.
    pub fn is_symmetric(&self, sequence: &Sequence) -> bool {
        let values = sequence.as_slice();
        let n = values.len();
        (0..n / 2).all(|i| values[i] == values[n - 1 - i])
    }
}

impl Default for SymmetryDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceDetector for SymmetryDetector {
    fn name(&self) -> &'static str {
        "symmetry"
    }

    fn priority(&self) -> u32 {
        80
    }

    fn detect(&self, sequence: &Sequence, _context: &DetectionContext) -> Detection {
        Detection::Symmetric {
            symmetric: self.is_symmetric(sequence),
        }
    }
}
