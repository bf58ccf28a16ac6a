//! # verity-core
//!
//! Foundation crate for the Verity truth classification engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::VerityConfig;
pub use errors::{VerityError, VerityResult};
pub use models::{
    Category, ConfidenceTier, Corpus, PredictionResult, SparseVector, StatementRecord, TruthLabel,
};
