//! # verity-embeddings
//!
//! TF-IDF vectorization for statement text: word-level tokenization with an
//! arithmetic symbol class, stop-word removal, 1–3-gram vocabulary with
//! document-frequency pruning, sublinear TF × smoothed IDF weighting, and
//! L2-normalized sparse embeddings.

pub mod stopwords;
pub mod tokenize;
pub mod vectorizer;

pub use vectorizer::{TfidfVectorizer, Vocabulary};
