use crate::errors::VerityResult;
use crate::models::SparseVector;

/// Text-to-embedding projection over a vocabulary learned once from the
/// training corpus.
pub trait IVectorizer {
    /// Build the vocabulary from the full training corpus. Replaces any
    /// previous vocabulary.
    fn fit(&mut self, documents: &[String]) -> VerityResult<()>;

    /// Project a statement into the frozen vocabulary space. Text with no
    /// recognized tokens produces an all-zero embedding. Fails with
    /// `NotTrained` before the first `fit`.
    fn transform(&self, text: &str) -> VerityResult<SparseVector>;

    /// Project a batch of statements.
    fn transform_many(&self, texts: &[String]) -> VerityResult<Vec<SparseVector>>;

    /// Whether `fit` has run.
    fn is_fitted(&self) -> bool;

    /// Vocabulary dimensionality (0 before fit).
    fn dimensions(&self) -> usize;
}
