//! Arithmetic progression detector.

use pattern_sense_core::Sequence;

use crate::detection::{Detection, DetectionContext, SequenceDetector};

/// Detects a constant difference between consecutive elements.
pub struct ArithmeticDetector;

impl ArithmeticDetector {
    /// Create a new arithmetic detector.
    pub fn new() -> Self {
        Self
    }

    /// Common difference if every adjacent pair shares it within tolerance.
    ///
    /// Differences are taken in `f64` so extreme `i32` values cannot overflow.
    pub fn common_difference(
        &self,
        sequence: &Sequence,
        context: &DetectionContext,
    ) -> Option<f64> {
        let values = sequence.as_slice();
        if values.len() < 2 {
            return None;
        }

        let difference = f64::from(values[1]) - f64::from(values[0]);

        sequence
            .pairs()
            .skip(1)
            .all(|(prev, next)| context.approx_eq(f64::from(next) - f64::from(prev), difference))
            .then_some(difference)
    }
}

impl Default for ArithmeticDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceDetector for ArithmeticDetector {
    fn name(&self) -> &'static str {
        "arithmetic"
    }

    fn priority(&self) -> u32 {
        100
    }

    fn detect(&self, sequence: &Sequence, context: &DetectionContext) -> Detection {
        Detection::Arithmetic {
            common_difference: self.common_difference(sequence, context),
        }
    }
}
