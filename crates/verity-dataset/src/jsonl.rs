//! JSON Lines dataset source.
//!
//! One `StatementRecord` per line. A missing or unreadable file is
//! `DatasetUnavailable`; a malformed line is skipped with a warning and never
//! fails the load.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use verity_core::errors::{DatasetError, VerityResult};
use verity_core::models::StatementRecord;
use verity_core::traits::IDatasetSource;

/// File-backed JSONL dataset.
pub struct JsonlDataset {
    path: PathBuf,
}

impl JsonlDataset {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IDatasetSource for JsonlDataset {
    fn load(&self) -> VerityResult<Vec<StatementRecord>> {
        let content =
            fs::read_to_string(&self.path).map_err(|e| DatasetError::Unavailable {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;

        let mut records = Vec::new();
        let mut skipped = 0usize;
        for (line_no, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<StatementRecord>(line) {
                Ok(record) if !record.statement.trim().is_empty() => records.push(record),
                Ok(_) => {
                    skipped += 1;
                    warn!(line = line_no + 1, "record with empty statement, skipping");
                }
                Err(e) => {
                    skipped += 1;
                    warn!(line = line_no + 1, error = %e, "malformed record, skipping");
                }
            }
        }

        info!(
            path = %self.path.display(),
            total = records.len(),
            skipped,
            "dataset loaded"
        );
        Ok(records)
    }

    fn name(&self) -> &str {
        "jsonl"
    }
}

/// Write records as JSON Lines, one record per line.
pub fn write_jsonl(path: impl AsRef<Path>, records: &[StatementRecord]) -> VerityResult<()> {
    let path = path.as_ref();
    let mut out = String::new();
    for record in records {
        let line = serde_json::to_string(record).map_err(|e| DatasetError::WriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        out.push_str(&line);
        out.push('\n');
    }
    fs::write(path, out).map_err(|e| DatasetError::WriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use verity_core::models::{Category, TruthLabel};
    use verity_core::VerityError;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("verity_{}_{}", std::process::id(), name))
    }

    #[test]
    fn missing_file_is_unavailable() {
        let source = JsonlDataset::new("/nonexistent/dataset.jsonl");
        let err = source.load().unwrap_err();
        assert!(matches!(
            err,
            VerityError::Dataset(DatasetError::Unavailable { .. })
        ));
    }

    #[test]
    fn malformed_lines_are_skipped_not_fatal() {
        let path = temp_path("malformed.jsonl");
        fs::write(
            &path,
            concat!(
                r#"{"statement":"The sky is blue","truth_value":"true","category":"science","source":"t"}"#,
                "\n",
                "{not json}\n",
                r#"{"statement":"The sky is green","truth_value":"maybe","category":"science"}"#,
                "\n",
                r#"{"statement":"","truth_value":"true","category":"science"}"#,
                "\n",
                r#"{"statement":"2 + 2 = 5","truth_value":"false","category":"mathematics"}"#,
                "\n",
            ),
        )
        .unwrap();

        let records = JsonlDataset::new(&path).load().unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].truth_value, TruthLabel::True);
        assert_eq!(records[1].category, Category::Mathematics);
    }

    #[test]
    fn unknown_category_is_a_malformed_record() {
        let path = temp_path("unknown_category.jsonl");
        fs::write(
            &path,
            concat!(
                r#"{"statement":"x","truth_value":"true","category":"alchemy"}"#,
                "\n"
            ),
        )
        .unwrap();

        let records = JsonlDataset::new(&path).load().unwrap();
        fs::remove_file(&path).ok();
        assert!(records.is_empty());
    }

    #[test]
    fn write_then_load_round_trips() {
        let path = temp_path("roundtrip.jsonl");
        let records = vec![
            StatementRecord {
                statement: "Water boils at 100 degrees Celsius".to_string(),
                truth_value: TruthLabel::True,
                category: Category::Science,
                source: "test".to_string(),
            },
            StatementRecord {
                statement: "Water boils at 50 degrees Celsius".to_string(),
                truth_value: TruthLabel::False,
                category: Category::Science,
                source: "test".to_string(),
            },
        ];
        write_jsonl(&path, &records).unwrap();

        let loaded = JsonlDataset::new(&path).load().unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(loaded, records);
    }

    #[test]
    fn blank_lines_are_ignored_silently() {
        let path = temp_path("blank.jsonl");
        fs::write(
            &path,
            concat!(
                "\n",
                r#"{"statement":"Fire is hot","truth_value":"true","category":"science"}"#,
                "\n\n",
            ),
        )
        .unwrap();

        let records = JsonlDataset::new(&path).load().unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(records.len(), 1);
    }
}
