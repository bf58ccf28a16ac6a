//! Trait seams between the engine and its collaborators.

mod dataset;
mod vectorizer;

pub use dataset::IDatasetSource;
pub use vectorizer::IVectorizer;
