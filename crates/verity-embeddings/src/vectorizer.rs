//! TF-IDF vectorizer over word n-grams.
//!
//! `fit` learns the vocabulary once from the full training corpus; the
//! vocabulary is frozen thereafter (no online growth). `transform` projects
//! any text into that space.

use std::collections::{HashMap, HashSet};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use verity_core::config::VectorizerConfig;
use verity_core::errors::{ModelError, VerityResult};
use verity_core::models::SparseVector;
use verity_core::traits::IVectorizer;

use crate::tokenize;

/// Per-term vocabulary entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermStats {
    /// Dimension index in the embedding space.
    pub index: u32,
    /// Smoothed inverse document frequency: `ln((1 + n) / (1 + df)) + 1`.
    pub idf: f64,
}

/// Frozen term → dimension mapping with IDF weights.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vocabulary {
    terms: HashMap<String, TermStats>,
}

impl Vocabulary {
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn get(&self, term: &str) -> Option<&TermStats> {
        self.terms.get(term)
    }
}

/// TF-IDF vectorizer. `fit` must run before any `transform`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    config: VectorizerConfig,
    vocabulary: Option<Vocabulary>,
}

impl TfidfVectorizer {
    pub fn new(config: VectorizerConfig) -> Self {
        Self {
            config,
            vocabulary: None,
        }
    }

    pub fn config(&self) -> &VectorizerConfig {
        &self.config
    }

    /// Tokenize and expand a text into its candidate features.
    fn features(&self, text: &str) -> Vec<String> {
        let tokens = tokenize::tokenize(text);
        tokenize::ngrams(&tokens, self.config.ngram_min, self.config.ngram_max)
    }

    fn vocabulary(&self) -> VerityResult<&Vocabulary> {
        self.vocabulary
            .as_ref()
            .ok_or_else(|| ModelError::NotTrained.into())
    }
}

impl IVectorizer for TfidfVectorizer {
    fn fit(&mut self, documents: &[String]) -> VerityResult<()> {
        let n_docs = documents.len();

        // Document frequency and total corpus frequency per term.
        let mut doc_freq: HashMap<String, usize> = HashMap::new();
        let mut corpus_freq: HashMap<String, u64> = HashMap::new();
        for doc in documents {
            let mut seen: HashSet<String> = HashSet::new();
            for feature in self.features(doc) {
                *corpus_freq.entry(feature.clone()).or_default() += 1;
                if seen.insert(feature.clone()) {
                    *doc_freq.entry(feature).or_default() += 1;
                }
            }
        }

        // Prune: at least `min_doc_freq` distinct statements, at most
        // `max_doc_ratio` of all statements.
        let max_doc_count = self.config.max_doc_ratio * n_docs as f64;
        let mut retained: Vec<(String, usize)> = doc_freq
            .into_iter()
            .filter(|(_, df)| *df >= self.config.min_doc_freq && (*df as f64) <= max_doc_count)
            .collect();

        // Cap dimensionality, keeping the highest-frequency features.
        if retained.len() > self.config.max_features {
            retained.sort_by(|a, b| {
                let freq_a = corpus_freq.get(&a.0).copied().unwrap_or(0);
                let freq_b = corpus_freq.get(&b.0).copied().unwrap_or(0);
                freq_b.cmp(&freq_a).then_with(|| a.0.cmp(&b.0))
            });
            retained.truncate(self.config.max_features);
        }

        // Deterministic index assignment: lexicographic term order.
        retained.sort_by(|a, b| a.0.cmp(&b.0));

        let mut terms = HashMap::with_capacity(retained.len());
        for (index, (term, df)) in retained.into_iter().enumerate() {
            let idf = ((1.0 + n_docs as f64) / (1.0 + df as f64)).ln() + 1.0;
            terms.insert(
                term,
                TermStats {
                    index: index as u32,
                    idf,
                },
            );
        }

        debug!(
            docs = n_docs,
            terms = terms.len(),
            max_features = self.config.max_features,
            "vocabulary fitted"
        );

        self.vocabulary = Some(Vocabulary { terms });
        Ok(())
    }

    fn transform(&self, text: &str) -> VerityResult<SparseVector> {
        let vocab = self.vocabulary()?;
        let dims = vocab.len();

        let mut counts: HashMap<String, u64> = HashMap::new();
        for feature in self.features(text) {
            *counts.entry(feature).or_default() += 1;
        }

        let mut pairs: Vec<(u32, f64)> = counts
            .into_iter()
            .filter_map(|(term, count)| {
                vocab.get(&term).map(|stats| {
                    let tf = if self.config.sublinear_tf {
                        1.0 + (count as f64).ln()
                    } else {
                        count as f64
                    };
                    (stats.index, tf * stats.idf)
                })
            })
            .collect();
        pairs.sort_by_key(|(index, _)| *index);

        let mut embedding = SparseVector::from_pairs(pairs, dims);
        embedding.normalize();
        Ok(embedding)
    }

    fn transform_many(&self, texts: &[String]) -> VerityResult<Vec<SparseVector>> {
        // Fail fast before fanning out.
        self.vocabulary()?;
        texts.par_iter().map(|t| self.transform(t)).collect()
    }

    fn is_fitted(&self) -> bool {
        self.vocabulary.is_some()
    }

    fn dimensions(&self) -> usize {
        self.vocabulary.as_ref().map(Vocabulary::len).unwrap_or(0)
    }
}
