/// Dataset source errors.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("dataset unavailable at {path}: {reason}")]
    Unavailable { path: String, reason: String },

    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("failed to write dataset to {path}: {reason}")]
    WriteFailed { path: String, reason: String },
}
