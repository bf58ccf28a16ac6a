//! Shared application state.
//!
//! The engine sits behind a single-writer/multiple-reader lock: predictions
//! and statistics take the read side, training takes the write side, so
//! in-flight readers always see a consistent trained state.

use std::sync::Arc;

use tokio::sync::RwLock;

use verity_classify::TruthEngine;
use verity_core::config::ServerConfig;
use verity_core::errors::VerityResult;
use verity_core::models::{EngineStatistics, PredictionResult};

use crate::connections::ConnectionRegistry;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RwLock<TruthEngine>>,
    pub connections: Arc<ConnectionRegistry>,
    pub server_config: ServerConfig,
}

impl AppState {
    pub fn new(engine: TruthEngine, server_config: ServerConfig) -> Self {
        Self {
            engine: Arc::new(RwLock::new(engine)),
            connections: Arc::new(ConnectionRegistry::new()),
            server_config,
        }
    }

    /// Run a CPU-bound prediction without starving the async runtime.
    ///
    /// The untrained case is an explicit transition: the write lock is taken,
    /// training runs, then the call retries on the read side.
    pub async fn predict(&self, statement: &str) -> VerityResult<PredictionResult> {
        {
            let engine = self.engine.read().await;
            if engine.is_trained() {
                return tokio::task::block_in_place(|| engine.predict(statement));
            }
        }

        {
            let mut engine = self.engine.write().await;
            tokio::task::block_in_place(|| engine.ensure_trained())?;
        }

        let engine = self.engine.read().await;
        tokio::task::block_in_place(|| engine.predict(statement))
    }

    pub async fn statistics(&self) -> EngineStatistics {
        self.engine.read().await.statistics()
    }
}
