//! Data model for the classification engine.

mod category;
mod embedding;
mod prediction;
mod statement;
mod statistics;

pub use category::Category;
pub use embedding::SparseVector;
pub use prediction::{ConfidenceTier, PredictionResult, SimilarityDiagnostics};
pub use statement::{Corpus, StatementRecord, TruthLabel};
pub use statistics::EngineStatistics;
