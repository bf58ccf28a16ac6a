use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Category, TruthLabel};

/// Qualitative confidence tier derived from the numeric confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    VeryHigh,
    High,
    Moderate,
    Low,
    VeryLow,
}

impl ConfidenceTier {
    /// Tier boundary above which confidence counts as very high.
    pub const VERY_HIGH: f64 = 0.8;
    pub const HIGH: f64 = 0.6;
    pub const MODERATE: f64 = 0.4;
    pub const LOW: f64 = 0.2;

    /// Map a numeric confidence to its tier.
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence > Self::VERY_HIGH {
            ConfidenceTier::VeryHigh
        } else if confidence > Self::HIGH {
            ConfidenceTier::High
        } else if confidence > Self::MODERATE {
            ConfidenceTier::Moderate
        } else if confidence > Self::LOW {
            ConfidenceTier::Low
        } else {
            ConfidenceTier::VeryLow
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ConfidenceTier::VeryHigh => "very_high",
            ConfidenceTier::High => "high",
            ConfidenceTier::Moderate => "moderate",
            ConfidenceTier::Low => "low",
            ConfidenceTier::VeryLow => "very_low",
        };
        f.write_str(s)
    }
}

/// Raw per-class similarity figures, kept for observability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityDiagnostics {
    pub max_true: f64,
    pub max_false: f64,
    pub avg_true: f64,
    pub avg_false: f64,
}

/// Result of a single prediction. Created fresh per call, owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub label: TruthLabel,
    /// Combined similarity score of the chosen class, in [0, 1] for
    /// unit-weight categories.
    pub confidence: f64,
    pub confidence_tier: ConfidenceTier,
    pub detected_category: Category,
    pub category_weight: f64,
    /// Most similar reference statement of the chosen class, by weighted
    /// similarity.
    pub most_similar_statement: String,
    pub similarity_score: f64,
    pub diagnostics: SimilarityDiagnostics,
    /// Total number of reference statements the engine was trained on.
    pub corpus_size: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries_are_exclusive() {
        assert_eq!(ConfidenceTier::from_confidence(0.81), ConfidenceTier::VeryHigh);
        assert_eq!(ConfidenceTier::from_confidence(0.8), ConfidenceTier::High);
        assert_eq!(ConfidenceTier::from_confidence(0.6), ConfidenceTier::Moderate);
        assert_eq!(ConfidenceTier::from_confidence(0.4), ConfidenceTier::Low);
        assert_eq!(ConfidenceTier::from_confidence(0.2), ConfidenceTier::VeryLow);
        assert_eq!(ConfidenceTier::from_confidence(0.0), ConfidenceTier::VeryLow);
    }

    #[test]
    fn tier_serializes_snake_case() {
        let json = serde_json::to_string(&ConfidenceTier::VeryHigh).unwrap();
        assert_eq!(json, "\"very_high\"");
    }
}
