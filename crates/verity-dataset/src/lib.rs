//! # verity-dataset
//!
//! Dataset layer: the JSONL row source consumed by the engine, the built-in
//! seed corpus used when no dataset is available, and the synthetic corpus
//! generator.

pub mod generator;
pub mod jsonl;
pub mod seed;

pub use generator::CorpusGenerator;
pub use jsonl::JsonlDataset;
