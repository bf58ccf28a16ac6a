use serde::{Deserialize, Serialize};

use super::defaults;

/// Vectorizer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorizerConfig {
    /// Maximum vocabulary dimensions retained, by corpus frequency ranking.
    pub max_features: usize,
    /// Smallest n-gram length.
    pub ngram_min: usize,
    /// Largest n-gram length.
    pub ngram_max: usize,
    /// Minimum number of distinct statements a term must appear in.
    pub min_doc_freq: usize,
    /// Maximum fraction of statements a term may appear in.
    pub max_doc_ratio: f64,
    /// Scale term frequency as `1 + ln(tf)`.
    pub sublinear_tf: bool,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            max_features: defaults::DEFAULT_MAX_FEATURES,
            ngram_min: defaults::DEFAULT_NGRAM_MIN,
            ngram_max: defaults::DEFAULT_NGRAM_MAX,
            min_doc_freq: defaults::DEFAULT_MIN_DOC_FREQ,
            max_doc_ratio: defaults::DEFAULT_MAX_DOC_RATIO,
            sublinear_tf: defaults::DEFAULT_SUBLINEAR_TF,
        }
    }
}
