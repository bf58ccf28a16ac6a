use serde::{Deserialize, Serialize};

use super::defaults;

/// Decision-policy configuration.
///
/// These are hand-tuned constants from the original model, kept configurable
/// rather than hard-coded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Weight of the per-class maximum similarity.
    pub max_weight: f64,
    /// Weight of the per-class mean similarity.
    pub mean_weight: f64,
    /// Combined score floor below which the result is low-confidence.
    pub confidence_floor: f64,
    /// Raw similarity floor for category amplification.
    pub amplify_floor: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            max_weight: defaults::DEFAULT_MAX_WEIGHT,
            mean_weight: defaults::DEFAULT_MEAN_WEIGHT,
            confidence_floor: defaults::DEFAULT_CONFIDENCE_FLOOR,
            amplify_floor: defaults::DEFAULT_AMPLIFY_FLOOR,
        }
    }
}
