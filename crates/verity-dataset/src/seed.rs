//! Built-in seed corpus.
//!
//! A small set of basic facts and their false twins, used when the external
//! dataset is unavailable so the engine stays usable, degraded.

use verity_core::models::{Category, StatementRecord, TruthLabel};

const SOURCE: &str = "seed";

const TRUE_FACTS: &[(&str, Category)] = &[
    ("The sky is blue", Category::Science),
    ("Water boils at 100 degrees Celsius", Category::Science),
    ("The Earth is round", Category::Science),
    ("Humans need oxygen to live", Category::Science),
    ("The sun rises in the east", Category::Science),
    ("Paris is the capital of France", Category::Geography),
    ("2 + 2 = 4", Category::Mathematics),
    ("Cats are mammals", Category::Science),
    ("Fire is hot", Category::Science),
    ("Gravity pulls objects downward", Category::Science),
];

const FALSE_FACTS: &[(&str, Category)] = &[
    ("The sky is green", Category::Science),
    ("Water boils at 50 degrees Celsius", Category::Science),
    ("The Earth is flat", Category::Science),
    ("Humans can breathe underwater without equipment", Category::Science),
    ("The sun rises in the west", Category::Science),
    ("London is the capital of France", Category::Geography),
    ("2 + 2 = 5", Category::Mathematics),
    ("Cats are reptiles", Category::Science),
    ("Fire is cold", Category::Science),
    ("Gravity pushes objects upward", Category::Science),
];

/// The full seed corpus, true facts first.
pub fn seed_records() -> Vec<StatementRecord> {
    let truths = TRUE_FACTS.iter().map(|&(statement, category)| StatementRecord {
        statement: statement.to_string(),
        truth_value: TruthLabel::True,
        category,
        source: SOURCE.to_string(),
    });
    let falsehoods = FALSE_FACTS.iter().map(|&(statement, category)| StatementRecord {
        statement: statement.to_string(),
        truth_value: TruthLabel::False,
        category,
        source: SOURCE.to_string(),
    });
    truths.chain(falsehoods).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use verity_core::models::Corpus;

    #[test]
    fn seed_is_balanced() {
        let records = seed_records();
        let corpus = Corpus::from_records(&records);
        assert_eq!(corpus.true_statements.len(), 10);
        assert_eq!(corpus.false_statements.len(), 10);
        assert_eq!(corpus.len(), records.len());
    }

    #[test]
    fn every_true_fact_has_a_false_twin_topic() {
        let records = seed_records();
        let categories: Vec<_> = records.iter().map(|r| r.category).collect();
        // Both halves carry the same category sequence.
        assert_eq!(categories[..10], categories[10..]);
    }
}
