//! # verity-classify
//!
//! The inference engine: category detection, similarity scoring against the
//! reference corpora, the max/mean decision policy, and the `TruthEngine`
//! facade orchestrating load → train → predict with model persistence.

pub mod decision;
pub mod detector;
pub mod engine;
mod persist;
pub mod scorer;

pub use engine::{EngineState, TruthEngine};
pub use scorer::ClassIndex;
