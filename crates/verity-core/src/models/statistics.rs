use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Category;

/// Read-only snapshot of corpus and model configuration.
///
/// Available in any engine state; counts are zero before a corpus is loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineStatistics {
    pub total_statements: usize,
    pub truth_count: usize,
    pub false_count: usize,
    pub categories: Vec<Category>,
    pub trained: bool,
    pub model_name: String,
    pub category_weights: BTreeMap<Category, f64>,
    pub max_features: usize,
    pub ngram_range: (usize, usize),
}
