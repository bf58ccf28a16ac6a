//! WebSocket message protocol.
//!
//! JSON messages tagged by `type`, mirroring the HTTP surface: predictions,
//! batch predictions, statistics, and keepalive pings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use verity_core::models::{Category, EngineStatistics, PredictionResult};

/// Message types the server understands, advertised in error responses.
pub const SUPPORTED_TYPES: &[&str] = &["predict", "predict_batch", "get_statistics", "ping"];

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    Predict { statement: String },
    PredictBatch { statements: Vec<String> },
    GetStatistics,
    Ping,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelInfo {
    pub trained: bool,
    pub total_statements: usize,
    pub truth_count: usize,
    pub false_count: usize,
    pub categories: Vec<Category>,
}

impl From<&EngineStatistics> for ModelInfo {
    fn from(stats: &EngineStatistics) -> Self {
        Self {
            trained: stats.trained,
            total_statements: stats.total_statements,
            truth_count: stats.truth_count,
            false_count: stats.false_count,
            categories: stats.categories.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchItem {
    pub statement: String,
    pub result: PredictionResult,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    Welcome {
        message: &'static str,
        model_info: ModelInfo,
        supported_types: &'static [&'static str],
    },
    Processing {
        message: String,
    },
    Prediction {
        statement: String,
        result: PredictionResult,
        timestamp: DateTime<Utc>,
    },
    BatchPrediction {
        total_statements: usize,
        results: Vec<BatchItem>,
        timestamp: DateTime<Utc>,
    },
    Statistics {
        model_statistics: EngineStatistics,
        active_connections: usize,
    },
    Pong {
        message: &'static str,
    },
    Error {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        supported_types: Option<&'static [&'static str]>,
    },
}

impl ServerMessage {
    pub fn error(message: impl Into<String>) -> Self {
        ServerMessage::Error {
            message: message.into(),
            supported_types: None,
        }
    }

    pub fn unknown_type(message: impl Into<String>) -> Self {
        ServerMessage::Error {
            message: message.into(),
            supported_types: Some(SUPPORTED_TYPES),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inbound_predict_parses() {
        let message: ClientMessage =
            serde_json::from_str(r#"{"type":"predict","statement":"The sky is blue"}"#).unwrap();
        assert!(matches!(
            message,
            ClientMessage::Predict { ref statement } if statement == "The sky is blue"
        ));
    }

    #[test]
    fn inbound_batch_parses() {
        let message: ClientMessage =
            serde_json::from_str(r#"{"type":"predict_batch","statements":["a","b"]}"#).unwrap();
        assert!(matches!(
            message,
            ClientMessage::PredictBatch { ref statements } if statements.len() == 2
        ));
    }

    #[test]
    fn inbound_bare_types_parse() {
        assert!(serde_json::from_str::<ClientMessage>(r#"{"type":"get_statistics"}"#).is_ok());
        assert!(serde_json::from_str::<ClientMessage>(r#"{"type":"ping"}"#).is_ok());
    }

    #[test]
    fn unknown_inbound_type_is_rejected() {
        assert!(serde_json::from_str::<ClientMessage>(r#"{"type":"shout"}"#).is_err());
    }

    #[test]
    fn outbound_tags_are_snake_case() {
        let pong = serde_json::to_value(&ServerMessage::Pong {
            message: "connection alive",
        })
        .unwrap();
        assert_eq!(pong["type"], "pong");

        let error = serde_json::to_value(&ServerMessage::unknown_type("bad type")).unwrap();
        assert_eq!(error["type"], "error");
        assert_eq!(error["supported_types"][1], "predict_batch");

        let processing = serde_json::to_value(&ServerMessage::Processing {
            message: "working".to_string(),
        })
        .unwrap();
        assert_eq!(processing["type"], "processing");
    }

    #[test]
    fn plain_error_omits_supported_types() {
        let error = serde_json::to_value(&ServerMessage::error("empty statement")).unwrap();
        assert!(error.get("supported_types").is_none());
    }
}
