//! Geometric progression detector.

use pattern_sense_core::Sequence;

use crate::detection::{Detection, DetectionContext, SequenceDetector};

/// Detects a constant ratio between consecutive elements.
///
/// A zero anywhere before the last element leaves the ratio undefined and
/// disqualifies the sequence.
pub struct GeometricDetector;

impl GeometricDetector {
    /// Create a new geometric detector.
    pub fn new() -> Self {
        Self
    }

    /// Common ratio if every adjacent pair shares it within tolerance.
    pub fn common_ratio(&self, sequence: &Sequence, context: &DetectionContext) -> Option<f64> {
        let values = sequence.as_slice();
        if values.len() < 2 || values[0] == 0 {
            return None;
        }

        let ratio = f64::from(values[1]) / f64::from(values[0]);

        sequence
            .pairs()
            .skip(1)
            .all(|(prev, next)| {
                prev != 0 && context.approx_eq(f64::from(next) / f64::from(prev), ratio)
            })
            .then_some(ratio)
    }
}

impl Default for GeometricDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceDetector for GeometricDetector {
    fn name(&self) -> &'static str {
        "geometric"
    }

    fn priority(&self) -> u32 {
        90
    }

    fn detect(&self, sequence: &Sequence, context: &DetectionContext) -> Detection {
        Detection::Geometric {
            common_ratio: self.common_ratio(sequence, context),
        }
    }
}
