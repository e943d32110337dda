//! Monotonic trend detector.

use pattern_sense_core::{Sequence, Trend};

use crate::detection::{Detection, DetectionContext, SequenceDetector};

/// Classifies a sequence as strictly increasing, strictly decreasing or fluctuating.
pub struct TrendDetector;

impl TrendDetector {
    /// Create a new trend detector.
    pub fn new() -> Self {
        Self
    }

    /// Determine the trend in a single pass over adjacent pairs.
    pub fn trend(&self, sequence: &Sequence) -> Trend {
        if sequence.len() < 2 {
            return Trend::Insufficient;
        }

        let mut increasing = true;
        let mut decreasing = true;

        for (prev, next) in sequence.pairs() {
            if next <= prev {
                increasing = false;
            }
            if next >= prev {
                decreasing = false;
            }
            if !increasing && !decreasing {
                break;
            }
        }

        if increasing {
            Trend::Increasing
        } else if decreasing {
            Trend::Decreasing
        } else {
            Trend::Fluctuating
        }
    }
}

impl Default for TrendDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceDetector for TrendDetector {
    fn name(&self) -> &'static str {
        "trend"
    }

    fn priority(&self) -> u32 {
        70
    }

    fn detect(&self, sequence: &Sequence, _context: &DetectionContext) -> Detection {
        Detection::Trend(self.trend(sequence))
    }
}
