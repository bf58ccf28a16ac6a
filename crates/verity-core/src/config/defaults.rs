//! Named default values for every configurable knob.

/// Vocabulary dimension cap.
pub const DEFAULT_MAX_FEATURES: usize = 5000;

/// Word n-gram range (inclusive).
pub const DEFAULT_NGRAM_MIN: usize = 1;
pub const DEFAULT_NGRAM_MAX: usize = 3;

/// A term must appear in at least this many distinct statements.
pub const DEFAULT_MIN_DOC_FREQ: usize = 2;

/// A term appearing in more than this fraction of statements is dropped.
pub const DEFAULT_MAX_DOC_RATIO: f64 = 0.95;

/// Apply `1 + ln(tf)` instead of raw term counts.
pub const DEFAULT_SUBLINEAR_TF: bool = true;

/// Blend weights for the max / mean similarity combination.
pub const DEFAULT_MAX_WEIGHT: f64 = 0.7;
pub const DEFAULT_MEAN_WEIGHT: f64 = 0.3;

/// Combined score below this floor is reported as low-confidence.
pub const DEFAULT_CONFIDENCE_FLOOR: f64 = 0.1;

/// Raw similarity must exceed this floor before category amplification
/// applies.
pub const DEFAULT_AMPLIFY_FLOOR: f64 = 0.3;

/// Query embedding cache capacity (entries).
pub const DEFAULT_QUERY_CACHE_SIZE: u64 = 1024;

/// Paths.
pub const DEFAULT_DATASET_PATH: &str = "data/dataset.jsonl";
pub const DEFAULT_MODEL_PATH: &str = "data/truth_model.zst";

/// Server bind.
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
