//! WebSocket session handling.

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use chrono::Utc;
use tracing::{debug, error, info};

use crate::protocol::{BatchItem, ClientMessage, ModelInfo, ServerMessage};
use crate::state::AppState;

pub async fn upgrade(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| session(socket, state))
}

async fn session(mut socket: WebSocket, state: AppState) {
    let connection_id = state.connections.register();
    info!(
        connection_id = %connection_id,
        active = state.connections.count(),
        "websocket connected"
    );

    let stats = state.statistics().await;
    let welcome = ServerMessage::Welcome {
        message: "Connected to the Verity truth detector",
        model_info: ModelInfo::from(&stats),
        supported_types: crate::protocol::SUPPORTED_TYPES,
    };
    if send(&mut socket, &welcome).await.is_err() {
        state.connections.deregister(connection_id);
        return;
    }

    while let Some(received) = socket.recv().await {
        let message = match received {
            Ok(message) => message,
            Err(e) => {
                debug!(connection_id = %connection_id, error = %e, "websocket receive error");
                break;
            }
        };

        let closed = match message {
            Message::Text(text) => handle_text(&mut socket, &state, text.as_str())
                .await
                .is_err(),
            Message::Close(_) => true,
            // Control frames are handled by the protocol layer.
            _ => false,
        };
        if closed {
            break;
        }
    }

    state.connections.deregister(connection_id);
    info!(
        connection_id = %connection_id,
        active = state.connections.count(),
        "websocket disconnected"
    );
}

async fn handle_text(
    socket: &mut WebSocket,
    state: &AppState,
    text: &str,
) -> Result<(), axum::Error> {
    let message = match serde_json::from_str::<ClientMessage>(text) {
        Ok(message) => message,
        Err(_) => {
            return send(
                socket,
                &ServerMessage::unknown_type(
                    "invalid message, expected {\"type\": \"predict\", \"statement\": \"...\"}",
                ),
            )
            .await;
        }
    };

    match message {
        ClientMessage::Predict { statement } => {
            let statement = statement.trim().to_string();
            if statement.is_empty() {
                return send(socket, &ServerMessage::error("statement must not be empty")).await;
            }

            send(
                socket,
                &ServerMessage::Processing {
                    message: format!("analyzing: '{statement}'"),
                },
            )
            .await?;

            match state.predict(&statement).await {
                Ok(result) => {
                    send(
                        socket,
                        &ServerMessage::Prediction {
                            statement,
                            result,
                            timestamp: Utc::now(),
                        },
                    )
                    .await
                }
                Err(e) => {
                    error!(error = %e, "websocket prediction failed");
                    send(socket, &ServerMessage::error(e.to_string())).await
                }
            }
        }

        ClientMessage::PredictBatch { statements } => {
            if statements.is_empty() {
                return send(socket, &ServerMessage::error("statements must not be empty")).await;
            }
            if statements.len() > state.server_config.max_batch {
                return send(
                    socket,
                    &ServerMessage::error(format!(
                        "batch of {} exceeds the maximum of {}",
                        statements.len(),
                        state.server_config.max_batch
                    )),
                )
                .await;
            }

            send(
                socket,
                &ServerMessage::Processing {
                    message: format!("analyzing {} statements", statements.len()),
                },
            )
            .await?;

            let mut results = Vec::with_capacity(statements.len());
            for statement in &statements {
                match state.predict(statement).await {
                    Ok(result) => results.push(BatchItem {
                        statement: statement.clone(),
                        result,
                    }),
                    Err(e) => {
                        error!(error = %e, "websocket batch prediction failed");
                        return send(socket, &ServerMessage::error(e.to_string())).await;
                    }
                }
            }

            send(
                socket,
                &ServerMessage::BatchPrediction {
                    total_statements: results.len(),
                    results,
                    timestamp: Utc::now(),
                },
            )
            .await
        }

        ClientMessage::GetStatistics => {
            let stats = state.statistics().await;
            send(
                socket,
                &ServerMessage::Statistics {
                    model_statistics: stats,
                    active_connections: state.connections.count(),
                },
            )
            .await
        }

        ClientMessage::Ping => {
            send(
                socket,
                &ServerMessage::Pong {
                    message: "connection alive",
                },
            )
            .await
        }
    }
}

async fn send(socket: &mut WebSocket, message: &ServerMessage) -> Result<(), axum::Error> {
    match serde_json::to_string(message) {
        Ok(payload) => socket.send(Message::Text(payload.into())).await,
        Err(e) => {
            error!(error = %e, "failed to encode websocket message");
            Ok(())
        }
    }
}
