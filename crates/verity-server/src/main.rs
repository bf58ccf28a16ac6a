//! Verity server binary.
//!
//! Startup sequence: init tracing → load config → load corpus → restore a
//! saved model or train from scratch → serve HTTP + WebSocket. Training is
//! an explicit startup step, never a hidden side effect of a request.

mod connections;
mod protocol;
mod routes;
mod state;
mod ws;

use std::net::SocketAddr;
use std::path::Path;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use verity_classify::TruthEngine;
use verity_core::config::VerityConfig;
use verity_core::errors::VerityResult;
use verity_dataset::JsonlDataset;

use crate::state::AppState;

const CONFIG_PATH: &str = "verity.toml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match VerityConfig::from_file(CONFIG_PATH) {
        Ok(config) => {
            info!(path = CONFIG_PATH, "configuration loaded");
            config
        }
        Err(e) => {
            warn!(error = %e, "no usable config file, using defaults");
            VerityConfig::default()
        }
    };

    let server_config = config.server.clone();
    let engine = tokio::task::spawn_blocking(move || startup_engine(config))
        .await
        .context("startup task panicked")??;

    let stats = engine.statistics();
    info!(
        total = stats.total_statements,
        truth_count = stats.truth_count,
        false_count = stats.false_count,
        "engine ready"
    );

    let state = AppState::new(engine, server_config.clone());
    let app = routes::router(state);

    let addr: SocketAddr = format!("{}:{}", server_config.bind_address, server_config.port)
        .parse()
        .with_context(|| {
            format!(
                "invalid bind address '{}:{}'",
                server_config.bind_address, server_config.port
            )
        })?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "verity server listening");

    axum::serve(listener, app.into_make_service())
        .await
        .context("server error")?;

    Ok(())
}

/// Blocking startup path: corpus load, model restore-or-train, model save.
fn startup_engine(config: VerityConfig) -> VerityResult<TruthEngine> {
    let model_path = config.model_path.clone();
    let source = JsonlDataset::new(&config.dataset_path);
    let mut engine = TruthEngine::new(config, Box::new(source));

    if let Err(e) = engine.load_corpus() {
        warn!(error = %e, "dataset unavailable at startup, continuing");
    }

    match engine.load_model(&model_path) {
        Ok(()) => info!(path = %model_path, "pre-trained model restored"),
        Err(e) => {
            info!(error = %e, "no usable saved model, training from scratch");
            engine.train()?;
            if let Some(parent) = Path::new(&model_path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).ok();
                }
            }
            if let Err(e) = engine.save(&model_path) {
                warn!(error = %e, "could not persist trained model");
            }
        }
    }

    Ok(engine)
}
