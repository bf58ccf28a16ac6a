//! Decision policy: max/mean blend, confidence floor, tie handling.

use verity_core::config::ScoringConfig;
use verity_core::models::{SimilarityDiagnostics, TruthLabel};

/// Outcome of comparing the two class score vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub label: TruthLabel,
    pub confidence: f64,
    pub diagnostics: SimilarityDiagnostics,
}

fn max_of(scores: &[f64]) -> f64 {
    scores.iter().copied().fold(0.0, f64::max)
}

fn mean_of(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        0.0
    } else {
        scores.iter().sum::<f64>() / scores.len() as f64
    }
}

/// Combine both score vectors into a labeled verdict.
///
/// Per class: `combined = max_weight × max + mean_weight × mean`. The max
/// term captures "is there a near-identical known fact"; the mean term
/// dampens a single outlier match. The engine always returns a label: below
/// the confidence floor (or on equality) the larger combined score wins,
/// with ties resolved toward true.
pub fn decide(true_scores: &[f64], false_scores: &[f64], config: &ScoringConfig) -> Verdict {
    let max_true = max_of(true_scores);
    let max_false = max_of(false_scores);
    let avg_true = mean_of(true_scores);
    let avg_false = mean_of(false_scores);

    let combined_true = config.max_weight * max_true + config.mean_weight * avg_true;
    let combined_false = config.max_weight * max_false + config.mean_weight * avg_false;

    let label = if combined_true > combined_false && combined_true > config.confidence_floor {
        TruthLabel::True
    } else if combined_false > combined_true && combined_false > config.confidence_floor {
        TruthLabel::False
    } else if combined_true >= combined_false {
        // Low-confidence region, ties toward true. Answering is mandatory.
        TruthLabel::True
    } else {
        TruthLabel::False
    };

    let confidence = match label {
        TruthLabel::True => combined_true,
        TruthLabel::False => combined_false,
    };

    Verdict {
        label,
        confidence,
        diagnostics: SimilarityDiagnostics {
            max_true,
            max_false,
            avg_true,
            avg_false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verity_core::models::ConfidenceTier;

    fn config() -> ScoringConfig {
        ScoringConfig::default()
    }

    #[test]
    fn clear_true_wins() {
        let verdict = decide(&[0.9, 0.2], &[0.1, 0.05], &config());
        assert_eq!(verdict.label, TruthLabel::True);
        let expected = 0.7 * 0.9 + 0.3 * 0.55;
        assert!((verdict.confidence - expected).abs() < 1e-12);
    }

    #[test]
    fn clear_false_wins() {
        let verdict = decide(&[0.1], &[0.8, 0.6], &config());
        assert_eq!(verdict.label, TruthLabel::False);
    }

    #[test]
    fn below_floor_still_returns_a_label() {
        // Both combined scores land at exactly 0.05, below the 0.1 floor.
        let verdict = decide(&[0.05], &[0.05], &config());
        assert_eq!(verdict.label, TruthLabel::True);
        assert!((verdict.confidence - 0.05).abs() < 1e-12);
        assert_eq!(
            ConfidenceTier::from_confidence(verdict.confidence),
            ConfidenceTier::VeryLow
        );
    }

    #[test]
    fn below_floor_prefers_the_larger_side() {
        let verdict = decide(&[0.02], &[0.06], &config());
        assert_eq!(verdict.label, TruthLabel::False);
        assert!((verdict.confidence - 0.06).abs() < 1e-12);
    }

    #[test]
    fn exact_tie_resolves_toward_true() {
        let verdict = decide(&[0.5], &[0.5], &config());
        assert_eq!(verdict.label, TruthLabel::True);
    }

    #[test]
    fn empty_score_vectors_yield_zero_confidence_true() {
        let verdict = decide(&[], &[], &config());
        assert_eq!(verdict.label, TruthLabel::True);
        assert_eq!(verdict.confidence, 0.0);
        assert_eq!(verdict.diagnostics.max_true, 0.0);
        assert_eq!(verdict.diagnostics.avg_false, 0.0);
    }

    #[test]
    fn diagnostics_report_raw_figures() {
        let verdict = decide(&[0.4, 0.2], &[0.9, 0.1], &config());
        assert_eq!(verdict.diagnostics.max_true, 0.4);
        assert_eq!(verdict.diagnostics.max_false, 0.9);
        assert!((verdict.diagnostics.avg_true - 0.3).abs() < 1e-12);
        assert!((verdict.diagnostics.avg_false - 0.5).abs() < 1e-12);
    }

    #[test]
    fn custom_blend_weights_are_honored() {
        let mut config = config();
        config.max_weight = 1.0;
        config.mean_weight = 0.0;
        let verdict = decide(&[0.6, 0.0], &[0.5, 0.5], &config);
        // Max-only blend: true wins on 0.6 vs 0.5 despite the lower mean.
        assert_eq!(verdict.label, TruthLabel::True);
        assert!((verdict.confidence - 0.6).abs() < 1e-12);
    }
}
