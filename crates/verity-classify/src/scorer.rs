//! Statement-to-corpus similarity scoring.

use serde::{Deserialize, Serialize};

use verity_core::models::{Category, SparseVector};

/// One class of the reference corpus: parallel statements, categories, and
/// cached embeddings. Row `i` of each vector describes the same statement;
/// the three sequences are never permuted independently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassIndex {
    pub statements: Vec<String>,
    pub categories: Vec<Category>,
    pub embeddings: Vec<SparseVector>,
}

impl ClassIndex {
    pub fn new(
        statements: Vec<String>,
        categories: Vec<Category>,
        embeddings: Vec<SparseVector>,
    ) -> Self {
        debug_assert_eq!(statements.len(), categories.len());
        debug_assert_eq!(statements.len(), embeddings.len());
        Self {
            statements,
            categories,
            embeddings,
        }
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// Cosine similarity of the query against every reference embedding,
/// amplified by the query's detected-category multiplier wherever the raw
/// similarity exceeds `amplify_floor`.
///
/// Amplification only reinforces already-plausible matches; similarities at
/// or below the floor are left unweighted.
pub fn score(
    query: &SparseVector,
    index: &ClassIndex,
    weight: f64,
    amplify_floor: f64,
) -> Vec<f64> {
    index
        .embeddings
        .iter()
        .map(|reference| {
            let raw = query.cosine(reference);
            if raw > amplify_floor {
                raw * weight
            } else {
                raw
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(index: u32) -> SparseVector {
        SparseVector::from_pairs(vec![(index, 1.0)], 8)
    }

    fn index_of(embeddings: Vec<SparseVector>) -> ClassIndex {
        let n = embeddings.len();
        ClassIndex::new(
            (0..n).map(|i| format!("ref-{i}")).collect(),
            vec![Category::General; n],
            embeddings,
        )
    }

    #[test]
    fn scores_are_cosines_without_amplification() {
        let index = index_of(vec![unit(0), unit(1)]);
        let scores = score(&unit(0), &index, 1.0, 0.3);
        assert_eq!(scores, vec![1.0, 0.0]);
    }

    #[test]
    fn high_similarity_is_amplified() {
        let index = index_of(vec![unit(0)]);
        let scores = score(&unit(0), &index, 1.2, 0.3);
        assert!((scores[0] - 1.2).abs() < 1e-12);
    }

    #[test]
    fn low_similarity_is_left_unweighted() {
        // cos = 0.2, below the 0.3 floor: the 1.2 multiplier must not apply.
        let mut reference = SparseVector::from_pairs(
            vec![(0, 0.2), (1, (1.0f64 - 0.04).sqrt())],
            8,
        );
        reference.normalize();
        let index = index_of(vec![reference]);
        let scores = score(&unit(0), &index, 1.2, 0.3);
        assert!((scores[0] - 0.2).abs() < 1e-9, "score = {}", scores[0]);
    }

    #[test]
    fn similarity_at_the_floor_is_not_amplified() {
        let mut reference = SparseVector::from_pairs(
            vec![(0, 0.3), (1, (1.0f64 - 0.09).sqrt())],
            8,
        );
        reference.normalize();
        let index = index_of(vec![reference]);
        let scores = score(&unit(0), &index, 2.0, 0.3);
        assert!((scores[0] - 0.3).abs() < 1e-9);
    }

    #[test]
    fn heavier_weight_never_scores_lower() {
        let index = index_of(vec![unit(0), unit(1)]);
        let light = score(&unit(0), &index, 1.0, 0.3);
        let heavy = score(&unit(0), &index, 1.2, 0.3);
        for (l, h) in light.iter().zip(&heavy) {
            assert!(h >= l);
        }
    }

    #[test]
    fn empty_index_scores_empty() {
        let index = index_of(vec![]);
        assert!(score(&unit(0), &index, 1.0, 0.3).is_empty());
    }
}
