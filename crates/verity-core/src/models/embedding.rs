use serde::{Deserialize, Serialize};

/// Sparse TF-IDF embedding over a frozen vocabulary.
///
/// `indices` is strictly increasing and parallel to `values`. Text with no
/// recognized tokens produces an all-zero vector (empty indices).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparseVector {
    pub indices: Vec<u32>,
    pub values: Vec<f64>,
    pub dims: usize,
}

impl SparseVector {
    /// All-zero vector of the given dimensionality.
    pub fn zero(dims: usize) -> Self {
        Self {
            indices: Vec::new(),
            values: Vec::new(),
            dims,
        }
    }

    /// Build from sorted (index, value) pairs.
    pub fn from_pairs(pairs: Vec<(u32, f64)>, dims: usize) -> Self {
        debug_assert!(pairs.windows(2).all(|w| w[0].0 < w[1].0));
        let (indices, values) = pairs.into_iter().unzip();
        Self {
            indices,
            values,
            dims,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.indices.is_empty()
    }

    /// Number of non-zero components.
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.values.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// Scale all values so the vector has unit norm. No-op on zero vectors.
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > f64::EPSILON {
            for v in &mut self.values {
                *v /= norm;
            }
        }
    }

    /// Dot product via merge over the two sorted index lists.
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let mut sum = 0.0;
        let mut i = 0;
        let mut j = 0;
        while i < self.indices.len() && j < other.indices.len() {
            match self.indices[i].cmp(&other.indices[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += self.values[i] * other.values[j];
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    /// Cosine similarity. Zero when either vector is all-zero.
    pub fn cosine(&self, other: &SparseVector) -> f64 {
        let denom = self.norm() * other.norm();
        if denom <= f64::EPSILON {
            return 0.0;
        }
        self.dot(other) / denom
    }
}
