use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Category;

/// Truth label attached to a reference statement, or returned by a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TruthLabel {
    True,
    False,
}

impl fmt::Display for TruthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TruthLabel::True => f.write_str("true"),
            TruthLabel::False => f.write_str("false"),
        }
    }
}

/// One row of the dataset source.
///
/// `source` is provenance metadata only; the algorithm never reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementRecord {
    pub statement: String,
    pub truth_value: TruthLabel,
    pub category: Category,
    #[serde(default)]
    pub source: String,
}

/// Labeled reference corpus, partitioned by truth value.
///
/// The statement and category vectors of each class are parallel: embedding
/// row `i` in a trained model corresponds to statement `i` and category `i`
/// of the same class. The three sequences must never be permuted
/// independently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Corpus {
    pub true_statements: Vec<String>,
    pub true_categories: Vec<Category>,
    pub false_statements: Vec<String>,
    pub false_categories: Vec<Category>,
}

impl Corpus {
    /// Partition records into the two labeled classes, preserving insertion
    /// order for embedding-index alignment.
    pub fn from_records(records: &[StatementRecord]) -> Self {
        let mut corpus = Corpus::default();
        for record in records {
            match record.truth_value {
                TruthLabel::True => {
                    corpus.true_statements.push(record.statement.clone());
                    corpus.true_categories.push(record.category);
                }
                TruthLabel::False => {
                    corpus.false_statements.push(record.statement.clone());
                    corpus.false_categories.push(record.category);
                }
            }
        }
        corpus
    }

    /// Total number of statements across both classes.
    pub fn len(&self) -> usize {
        self.true_statements.len() + self.false_statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.true_statements.is_empty() && self.false_statements.is_empty()
    }

    /// Distinct categories present in either class.
    pub fn category_set(&self) -> BTreeSet<Category> {
        self.true_categories
            .iter()
            .chain(self.false_categories.iter())
            .copied()
            .collect()
    }

    /// Union of both statement lists, true class first. This is the fit
    /// order for the vectorizer.
    pub fn all_statements(&self) -> Vec<String> {
        self.true_statements
            .iter()
            .chain(self.false_statements.iter())
            .cloned()
            .collect()
    }
}
