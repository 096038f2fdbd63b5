//! HTTP transport over the same crew collaborator.
//!
//! A deliberately thin request/response mapping: `GET /health` reports a
//! static status, `POST /run` feeds `input_task` to the crew and returns its
//! result, or a 500 with the error detail when the crew fails.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::runner::TaskRunner;

/// Shared state for the HTTP API: the crew behind the endpoints.
#[derive(Clone)]
pub struct ApiState {
    pub runner: Arc<dyn TaskRunner>,
}

/// Body of `POST /run`.
#[derive(Debug, Deserialize)]
pub struct TaskRequest {
    pub input_task: String,
}

/// Builds the router with the two planner routes.
pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/run", post(run_task))
        .with_state(state)
}

/// Serve the HTTP API on an existing listener.
///
/// Tests bind `127.0.0.1:0` and pass the listener in; the binary binds the
/// configured address first and does the same.
pub async fn serve_api(
    listener: TcpListener,
    runner: Arc<dyn TaskRunner>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr = listener.local_addr()?;
    info!("planner API listening on http://{addr}");
    let app = router(ApiState { runner });
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

async fn run_task(
    State(state): State<ApiState>,
    Json(req): Json<TaskRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match state.runner.run(&req.input_task).await {
        Ok(result) => Ok(Json(json!({ "status": "success", "result": result }))),
        Err(e) => {
            error!("crew run failed: {e}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "detail": e.to_string() })),
            ))
        }
    }
}
