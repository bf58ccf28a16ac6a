//! HTTP endpoints.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::error;

use verity_core::constants;
use verity_core::models::{Category, EngineStatistics, PredictionResult};

use crate::state::AppState;
use crate::ws;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/statistics", get(statistics))
        .route("/predict", post(predict))
        .route("/predict/batch", post(predict_batch))
        .route("/ws", get(ws::upgrade))
        .with_state(state)
}

// ── Request / response payloads ───────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub statement: String,
}

#[derive(Debug, Deserialize)]
pub struct BatchPredictRequest {
    pub statements: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DatasetStats {
    pub total_statements: usize,
    pub truth_count: usize,
    pub false_count: usize,
    pub categories: Vec<Category>,
}

impl From<&EngineStatistics> for DatasetStats {
    fn from(stats: &EngineStatistics) -> Self {
        Self {
            total_statements: stats.total_statements,
            truth_count: stats.truth_count,
            false_count: stats.false_count,
            categories: stats.categories.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub websocket: &'static str,
    pub http_predict: &'static str,
    pub batch_predict: &'static str,
    pub statistics: &'static str,
    pub health: &'static str,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            websocket: "/ws",
            http_predict: "/predict",
            batch_predict: "/predict/batch",
            statistics: "/statistics",
            health: "/health",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub model_status: &'static str,
    pub dataset_stats: DatasetStats,
    pub endpoints: Endpoints,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model_trained: bool,
    pub active_connections: usize,
    pub dataset_loaded: bool,
    pub total_statements: usize,
}

#[derive(Debug, Serialize)]
pub struct StatisticsResponse {
    pub success: bool,
    pub model_statistics: EngineStatistics,
    pub active_connections: usize,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<PredictionResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PredictResponse {
    fn success(statement: String, result: PredictionResult) -> Self {
        Self {
            success: true,
            statement: Some(statement),
            result: Some(result),
            error: None,
        }
    }

    fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            statement: None,
            result: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BatchPredictResponse {
    pub success: bool,
    pub total_statements: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<crate::protocol::BatchItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// ── Handlers ──────────────────────────────────────────────────────────────

async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    let stats = state.statistics().await;
    Json(RootResponse {
        message: "Verity truth detection API",
        version: constants::VERSION,
        model_status: if stats.trained { "trained" } else { "untrained" },
        dataset_stats: DatasetStats::from(&stats),
        endpoints: Endpoints::default(),
    })
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let stats = state.statistics().await;
    Json(HealthResponse {
        status: "healthy",
        model_trained: stats.trained,
        active_connections: state.connections.count(),
        dataset_loaded: stats.total_statements > 0,
        total_statements: stats.total_statements,
    })
}

async fn statistics(State(state): State<AppState>) -> Json<StatisticsResponse> {
    let stats = state.statistics().await;
    Json(StatisticsResponse {
        success: true,
        model_statistics: stats,
        active_connections: state.connections.count(),
    })
}

async fn predict(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> Json<PredictResponse> {
    let statement = request.statement.trim().to_string();
    if statement.is_empty() {
        return Json(PredictResponse::failure("statement must not be empty"));
    }

    match state.predict(&statement).await {
        Ok(result) => Json(PredictResponse::success(statement, result)),
        Err(e) => {
            error!(error = %e, "prediction failed");
            Json(PredictResponse::failure(e.to_string()))
        }
    }
}

async fn predict_batch(
    State(state): State<AppState>,
    Json(request): Json<BatchPredictRequest>,
) -> Json<BatchPredictResponse> {
    let total = request.statements.len();
    if total == 0 {
        return Json(BatchPredictResponse {
            success: false,
            total_statements: 0,
            results: Vec::new(),
            error: Some("statements must not be empty".to_string()),
        });
    }
    if total > state.server_config.max_batch {
        return Json(BatchPredictResponse {
            success: false,
            total_statements: total,
            results: Vec::new(),
            error: Some(format!(
                "batch of {total} exceeds the maximum of {}",
                state.server_config.max_batch
            )),
        });
    }

    let mut results = Vec::with_capacity(total);
    for statement in &request.statements {
        match state.predict(statement).await {
            Ok(result) => results.push(crate::protocol::BatchItem {
                statement: statement.clone(),
                result,
            }),
            Err(e) => {
                error!(error = %e, "batch prediction failed");
                return Json(BatchPredictResponse {
                    success: false,
                    total_statements: total,
                    results: Vec::new(),
                    error: Some(e.to_string()),
                });
            }
        }
    }

    Json(BatchPredictResponse {
        success: true,
        total_statements: total,
        results,
        error: None,
    })
}
