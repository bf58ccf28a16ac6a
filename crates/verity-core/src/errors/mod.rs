//! Error taxonomy for the Verity engine.
//!
//! No error here is fatal to the process: every failure path degrades to a
//! usable state or triggers a recovery action at the caller.

mod config_error;
mod dataset_error;
mod model_error;

pub use config_error::ConfigError;
pub use dataset_error::DatasetError;
pub use model_error::ModelError;

/// Umbrella error for all Verity subsystems.
#[derive(Debug, thiserror::Error)]
pub enum VerityError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Convenience result alias used across the workspace.
pub type VerityResult<T> = Result<T, VerityError>;
