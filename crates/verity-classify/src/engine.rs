//! TruthEngine — the main entry point for verity-classify.
//!
//! Orchestrates corpus loading, training, and prediction over the cached
//! reference embeddings. State machine: `Unloaded → Loaded → Trained`.
//! Training builds the new vocabulary and embedding sets fully before
//! swapping them in, so a failed retrain never leaves a half-built index.

use std::collections::BTreeSet;
use std::path::Path;

use moka::sync::Cache;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use verity_core::config::VerityConfig;
use verity_core::constants;
use verity_core::errors::{ModelError, VerityResult};
use verity_core::models::{
    Category, ConfidenceTier, Corpus, EngineStatistics, PredictionResult, SparseVector, TruthLabel,
};
use verity_core::traits::{IDatasetSource, IVectorizer};
use verity_dataset::seed;
use verity_embeddings::TfidfVectorizer;

use crate::decision;
use crate::detector;
use crate::persist;
use crate::scorer::{self, ClassIndex};

/// Observable engine lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Unloaded,
    Loaded,
    Trained,
}

/// Everything `predict` needs, built atomically by `train` or restored by
/// `load_model`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainedModel {
    pub(crate) vectorizer: TfidfVectorizer,
    pub(crate) true_index: ClassIndex,
    pub(crate) false_index: ClassIndex,
    pub(crate) total_statements: usize,
    pub(crate) categories: BTreeSet<Category>,
}

/// The classification engine facade.
pub struct TruthEngine {
    config: VerityConfig,
    source: Box<dyn IDatasetSource>,
    corpus: Option<Corpus>,
    model: Option<TrainedModel>,
    query_cache: Cache<String, SparseVector>,
}

impl TruthEngine {
    /// Create an engine in the `Unloaded` state.
    pub fn new(config: VerityConfig, source: Box<dyn IDatasetSource>) -> Self {
        let query_cache = Cache::new(config.query_cache_size);
        Self {
            config,
            source,
            corpus: None,
            model: None,
            query_cache,
        }
    }

    pub fn state(&self) -> EngineState {
        if self.model.is_some() {
            EngineState::Trained
        } else if self.corpus.is_some() {
            EngineState::Loaded
        } else {
            EngineState::Unloaded
        }
    }

    pub fn is_trained(&self) -> bool {
        self.model.is_some()
    }

    /// Read the external dataset into the corpus.
    ///
    /// Fails with `DatasetUnavailable` when the source is missing, leaving
    /// engine state unchanged. On success any trained model is discarded —
    /// its embeddings no longer reflect the corpus — so the engine lands in
    /// `Loaded` and must retrain before predicting.
    pub fn load_corpus(&mut self) -> VerityResult<()> {
        let records = self.source.load()?;
        let corpus = Corpus::from_records(&records);
        info!(
            source = self.source.name(),
            total = corpus.len(),
            truth_count = corpus.true_statements.len(),
            false_count = corpus.false_statements.len(),
            "corpus loaded"
        );
        self.corpus = Some(corpus);
        self.model = None;
        Ok(())
    }

    /// Fit the vectorizer and cache embeddings for both classes.
    ///
    /// Auto-loads the corpus if absent, falling back to the built-in seed
    /// corpus when the dataset is unavailable. Idempotent: re-invoking
    /// retrains from scratch and atomically replaces the cached state.
    pub fn train(&mut self) -> VerityResult<()> {
        let corpus = match &self.corpus {
            Some(corpus) => corpus.clone(),
            None => self.acquire_corpus(),
        };

        let model = Self::build_model(&self.config, &corpus)?;
        info!(
            total = model.total_statements,
            truth_count = model.true_index.len(),
            false_count = model.false_index.len(),
            dimensions = model.vectorizer.dimensions(),
            "engine trained"
        );

        // Swap only once the replacement is complete.
        self.query_cache.invalidate_all();
        self.corpus = Some(corpus);
        self.model = Some(model);
        Ok(())
    }

    /// Explicit recovery transition: train only when not yet trained.
    pub fn ensure_trained(&mut self) -> VerityResult<()> {
        if self.model.is_none() {
            info!("engine not trained, training now");
            self.train()?;
        }
        Ok(())
    }

    /// Classify a statement against the reference corpora.
    ///
    /// Read-only: requires `Trained` state and fails with `NotTrained`
    /// otherwise. Callers wanting lazy recovery run `ensure_trained` first.
    pub fn predict(&self, statement: &str) -> VerityResult<PredictionResult> {
        let model = self.model.as_ref().ok_or(ModelError::NotTrained)?;

        let embedding = self.embed_query(model, statement)?;
        let detected_category = detector::detect_category(&self.config.categories, statement);
        let category_weight = self.config.categories.weight_for(detected_category);

        let floor = self.config.scoring.amplify_floor;
        let true_scores = scorer::score(&embedding, &model.true_index, category_weight, floor);
        let false_scores = scorer::score(&embedding, &model.false_index, category_weight, floor);

        let verdict = decision::decide(&true_scores, &false_scores, &self.config.scoring);

        // Explain with the weighted arg-max of the chosen class.
        let (chosen_scores, chosen_index) = match verdict.label {
            TruthLabel::True => (&true_scores, &model.true_index),
            TruthLabel::False => (&false_scores, &model.false_index),
        };
        let mut best: Option<(usize, f64)> = None;
        for (i, &score) in chosen_scores.iter().enumerate() {
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((i, score));
            }
        }
        let (most_similar_statement, similarity_score) = match best {
            Some((i, score)) => (chosen_index.statements[i].clone(), score),
            None => (String::new(), 0.0),
        };

        debug!(
            label = %verdict.label,
            confidence = verdict.confidence,
            category = %detected_category,
            "prediction made"
        );

        Ok(PredictionResult {
            label: verdict.label,
            confidence: verdict.confidence,
            confidence_tier: ConfidenceTier::from_confidence(verdict.confidence),
            detected_category,
            category_weight,
            most_similar_statement,
            similarity_score,
            diagnostics: verdict.diagnostics,
            corpus_size: model.total_statements,
        })
    }

    /// Read-only snapshot, available in any state.
    pub fn statistics(&self) -> EngineStatistics {
        let (total, truth_count, false_count, categories) = match (&self.model, &self.corpus) {
            (Some(model), _) => (
                model.total_statements,
                model.true_index.len(),
                model.false_index.len(),
                model.categories.iter().copied().collect(),
            ),
            (None, Some(corpus)) => (
                corpus.len(),
                corpus.true_statements.len(),
                corpus.false_statements.len(),
                corpus.category_set().into_iter().collect(),
            ),
            (None, None) => (0, 0, 0, Vec::new()),
        };

        EngineStatistics {
            total_statements: total,
            truth_count,
            false_count,
            categories,
            trained: self.model.is_some(),
            model_name: constants::MODEL_NAME.to_string(),
            category_weights: self.config.categories.weights.clone(),
            max_features: self.config.vectorizer.max_features,
            ngram_range: (
                self.config.vectorizer.ngram_min,
                self.config.vectorizer.ngram_max,
            ),
        }
    }

    /// Persist the trained model as a compressed blob.
    pub fn save(&self, path: impl AsRef<Path>) -> VerityResult<()> {
        let model = self.model.as_ref().ok_or(ModelError::NotTrained)?;
        persist::write_model(path.as_ref(), model)?;
        info!(path = %path.as_ref().display(), "model saved");
        Ok(())
    }

    /// Restore a previously saved model, replacing any trained state.
    ///
    /// On failure the caller falls back to `load_corpus()` + `train()`.
    pub fn load_model(&mut self, path: impl AsRef<Path>) -> VerityResult<()> {
        let model = persist::read_model(path.as_ref())?;
        self.query_cache.invalidate_all();
        info!(
            path = %path.as_ref().display(),
            total = model.total_statements,
            "model loaded"
        );
        self.model = Some(model);
        Ok(())
    }

    fn acquire_corpus(&self) -> Corpus {
        match self.source.load() {
            Ok(records) => Corpus::from_records(&records),
            Err(e) => {
                warn!(error = %e, "dataset unavailable, falling back to built-in seed corpus");
                Corpus::from_records(&seed::seed_records())
            }
        }
    }

    fn build_model(config: &VerityConfig, corpus: &Corpus) -> VerityResult<TrainedModel> {
        let mut vectorizer = TfidfVectorizer::new(config.vectorizer.clone());
        vectorizer.fit(&corpus.all_statements())?;

        let true_embeddings = vectorizer.transform_many(&corpus.true_statements)?;
        let false_embeddings = vectorizer.transform_many(&corpus.false_statements)?;

        Ok(TrainedModel {
            true_index: ClassIndex::new(
                corpus.true_statements.clone(),
                corpus.true_categories.clone(),
                true_embeddings,
            ),
            false_index: ClassIndex::new(
                corpus.false_statements.clone(),
                corpus.false_categories.clone(),
                false_embeddings,
            ),
            total_statements: corpus.len(),
            categories: corpus.category_set(),
            vectorizer,
        })
    }

    fn embed_query(&self, model: &TrainedModel, statement: &str) -> VerityResult<SparseVector> {
        let key = blake3::hash(statement.as_bytes()).to_hex().to_string();
        if let Some(embedding) = self.query_cache.get(&key) {
            return Ok(embedding);
        }
        let embedding = model.vectorizer.transform(statement)?;
        self.query_cache.insert(key, embedding.clone());
        Ok(embedding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verity_core::errors::DatasetError;
    use verity_core::models::StatementRecord;

    struct FailingSource;

    impl IDatasetSource for FailingSource {
        fn load(&self) -> VerityResult<Vec<StatementRecord>> {
            Err(DatasetError::Unavailable {
                path: "missing.jsonl".to_string(),
                reason: "no such file".to_string(),
            }
            .into())
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    fn engine_with_failing_source() -> TruthEngine {
        TruthEngine::new(VerityConfig::default(), Box::new(FailingSource))
    }

    #[test]
    fn starts_unloaded() {
        let engine = engine_with_failing_source();
        assert_eq!(engine.state(), EngineState::Unloaded);
        assert!(!engine.is_trained());
    }

    #[test]
    fn load_failure_leaves_state_unchanged() {
        let mut engine = engine_with_failing_source();
        assert!(engine.load_corpus().is_err());
        assert_eq!(engine.state(), EngineState::Unloaded);
    }

    #[test]
    fn train_falls_back_to_seed_corpus() {
        let mut engine = engine_with_failing_source();
        engine.train().unwrap();
        assert_eq!(engine.state(), EngineState::Trained);

        let stats = engine.statistics();
        assert_eq!(stats.total_statements, 20);
        assert_eq!(stats.truth_count, 10);
        assert_eq!(stats.false_count, 10);
    }

    #[test]
    fn predict_before_train_is_not_trained() {
        let engine = engine_with_failing_source();
        let err = engine.predict("anything").unwrap_err();
        assert!(matches!(
            err,
            verity_core::VerityError::Model(ModelError::NotTrained)
        ));
    }

    #[test]
    fn ensure_trained_recovers_and_is_idempotent() {
        let mut engine = engine_with_failing_source();
        engine.ensure_trained().unwrap();
        assert!(engine.is_trained());
        engine.ensure_trained().unwrap();
        assert!(engine.is_trained());
    }

    #[test]
    fn statistics_before_any_state_are_empty() {
        let engine = engine_with_failing_source();
        let stats = engine.statistics();
        assert_eq!(stats.total_statements, 0);
        assert!(!stats.trained);
        assert_eq!(stats.model_name, constants::MODEL_NAME);
        assert_eq!(stats.ngram_range, (1, 3));
    }
}
