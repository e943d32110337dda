//! Basic shape classification types (hill, valley, plain).

use serde::{Deserialize, Serialize};

/// Coarse shape of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PatternType {
    /// Contains a strict local maximum and no strict local minimum
    Hill,
    /// Contains a strict local minimum and no strict local maximum
    Valley,
    /// All elements equal
    Plain,
    /// None of the above, or both a hill and a valley
    None,
}

impl std::fmt::Display for PatternType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PatternType::Hill => "HILL",
            PatternType::Valley => "VALLEY",
            PatternType::Plain => "PLAIN",
            PatternType::None => "NONE",
        };
        f.write_str(name)
    }
}

/// Shape classification with duplicate count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeAnalysis {
    /// Shape of the sequence
    pub pattern_type: PatternType,
    /// Total occurrences of values that appear more than once
    pub duplicates: usize,
    /// Summary line, e.g. `Pattern: HILL, No duplicates found`
    pub description: String,
}

impl ShapeAnalysis {
    /// Create a shape analysis; the description is derived from the other fields.
    pub fn new(pattern_type: PatternType, duplicates: usize) -> Self {
        let description = if duplicates > 0 {
            format!("Pattern: {pattern_type}, Duplicates: {duplicates}")
        } else {
            format!("Pattern: {pattern_type}, No duplicates found")
        };

        Self {
            pattern_type,
            duplicates,
            description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_with_duplicates() {
        let shape = ShapeAnalysis::new(PatternType::Valley, 3);
        assert_eq!(shape.description, "Pattern: VALLEY, Duplicates: 3");
    }

    #[test]
    fn test_description_without_duplicates() {
        let shape = ShapeAnalysis::new(PatternType::None, 0);
        assert_eq!(shape.description, "Pattern: NONE, No duplicates found");
    }

    #[test]
    fn test_pattern_type_serde() {
        assert_eq!(
            serde_json::to_string(&PatternType::Plain).unwrap(),
            "\"PLAIN\""
        );
        let parsed: PatternType = serde_json::from_str("\"HILL\"").unwrap();
        assert_eq!(parsed, PatternType::Hill);
    }
}
