/// Vectorizer and engine state errors.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("model not trained: call train() before transform/predict")]
    NotTrained,

    #[error("serialization failed: {reason}")]
    Serialization { reason: String },

    #[error("model blob format version {found} unsupported (expected {expected})")]
    FormatVersionMismatch { found: u32, expected: u32 },
}
