//! Model persistence: a zstd-compressed serde blob.
//!
//! The blob captures the vocabulary, both cached embedding sets, both
//! statement/category lists, and the corpus statistics, so a round-tripped
//! engine reproduces bit-identical predictions.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use verity_core::constants::MODEL_FORMAT_VERSION;
use verity_core::errors::{ModelError, VerityResult};

use crate::engine::TrainedModel;

#[derive(Serialize, Deserialize)]
struct SavedModel {
    format_version: u32,
    model: TrainedModel,
}

fn serialization_error(reason: impl ToString) -> ModelError {
    ModelError::Serialization {
        reason: reason.to_string(),
    }
}

pub(crate) fn write_model(path: &Path, model: &TrainedModel) -> VerityResult<()> {
    let saved = SavedModel {
        format_version: MODEL_FORMAT_VERSION,
        model: model.clone(),
    };
    let json = serde_json::to_vec(&saved).map_err(serialization_error)?;
    let compressed = zstd::encode_all(json.as_slice(), zstd::DEFAULT_COMPRESSION_LEVEL)
        .map_err(serialization_error)?;
    fs::write(path, compressed).map_err(serialization_error)?;
    Ok(())
}

pub(crate) fn read_model(path: &Path) -> VerityResult<TrainedModel> {
    let bytes = fs::read(path).map_err(serialization_error)?;
    let json = zstd::decode_all(bytes.as_slice()).map_err(serialization_error)?;
    let saved: SavedModel = serde_json::from_slice(&json).map_err(serialization_error)?;
    if saved.format_version != MODEL_FORMAT_VERSION {
        return Err(ModelError::FormatVersionMismatch {
            found: saved.format_version,
            expected: MODEL_FORMAT_VERSION,
        }
        .into());
    }
    Ok(saved.model)
}
