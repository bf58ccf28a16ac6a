/// Verity system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Model name reported in statistics.
pub const MODEL_NAME: &str = "tfidf-ngram-similarity";

/// Maximum number of statements accepted per batch prediction.
pub const MAX_BATCH_STATEMENTS: usize = 100;

/// Format version of the persisted model blob.
pub const MODEL_FORMAT_VERSION: u32 = 1;
