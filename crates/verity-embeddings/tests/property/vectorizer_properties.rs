//! Property tests: embedding generation is deterministic and normalized.

use proptest::prelude::*;

use verity_core::config::VectorizerConfig;
use verity_core::traits::IVectorizer;
use verity_embeddings::TfidfVectorizer;

fn training_corpus() -> Vec<String> {
    [
        "water boils at 100 degrees celsius",
        "water freezes at 0 degrees celsius",
        "madrid is the capital of spain",
        "london is the capital of england",
        "the sun rises in the east",
        "the sun sets in the west",
        "2 + 2 = 4",
        "2 + 2 = 5",
        "cats are mammals",
        "dogs are mammals",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn fitted() -> TfidfVectorizer {
    let config = VectorizerConfig {
        min_doc_freq: 1,
        ..Default::default()
    };
    let mut v = TfidfVectorizer::new(config);
    v.fit(&training_corpus()).expect("fit succeeds");
    v
}

proptest! {
    /// Same input, same output — no randomness in inference.
    #[test]
    fn transform_is_deterministic(text in "[a-z0-9 +=]{0,60}") {
        let v = fitted();
        let a = v.transform(&text).unwrap();
        let b = v.transform(&text).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Every embedding is either all-zero or unit-length.
    #[test]
    fn embeddings_are_zero_or_unit_norm(text in "[a-z0-9 +=]{0,60}") {
        let v = fitted();
        let e = v.transform(&text).unwrap();
        let norm = e.norm();
        prop_assert!(e.is_zero() || (norm - 1.0).abs() < 1e-9, "norm = {}", norm);
    }

    /// Batch projection agrees with one-at-a-time projection.
    #[test]
    fn batch_matches_individual(texts in proptest::collection::vec("[a-z ]{0,30}", 0..8)) {
        let v = fitted();
        let batch = v.transform_many(&texts).unwrap();
        prop_assert_eq!(batch.len(), texts.len());
        for (text, embedding) in texts.iter().zip(&batch) {
            prop_assert_eq!(embedding, &v.transform(text).unwrap());
        }
    }

    /// Cosine similarity stays within the non-negative TF-IDF range.
    #[test]
    fn cosine_is_bounded(a in "[a-z0-9 ]{0,40}", b in "[a-z0-9 ]{0,40}") {
        let v = fitted();
        let ea = v.transform(&a).unwrap();
        let eb = v.transform(&b).unwrap();
        let cos = ea.cosine(&eb);
        prop_assert!((0.0..=1.0 + 1e-9).contains(&cos), "cosine = {}", cos);
    }
}
