/// Configuration loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config file {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("could not parse config file {path}: {reason}")]
    ParseFailed { path: String, reason: String },
}
