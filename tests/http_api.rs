//! End-to-end tests for the HTTP transport.
//!
//! Binds the API to an ephemeral port (127.0.0.1:0) and talks to it with a
//! real HTTP client, mirroring how the sibling stdio transport is tested
//! against real streams.

use std::sync::Arc;

use async_trait::async_trait;
use mcp_planner_server::http::serve_api;
use mcp_planner_server::runner::{RunnerError, TaskRunner};
use tokio::net::TcpListener;

/// Succeeds unless the topic asks it not to.
struct ScriptedRunner;

#[async_trait]
impl TaskRunner for ScriptedRunner {
    async fn run(&self, topic: &str) -> Result<String, RunnerError> {
        if topic == "explode" {
            Err(RunnerError::Failed("boom".to_string()))
        } else {
            Ok(format!("planned: {topic}"))
        }
    }
}

/// Bind to a random port and spawn the API server. Returns the base URL.
async fn spawn_api() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(serve_api(listener, Arc::new(ScriptedRunner)));
    format!("http://{addr}")
}

#[tokio::test]
async fn health_returns_static_status() {
    let base = spawn_api().await;

    let resp = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn run_maps_crew_success_to_200() {
    let base = spawn_api().await;

    let resp = reqwest::Client::new()
        .post(format!("{base}/run"))
        .json(&serde_json::json!({"input_task": "plan my day"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "success");
    assert_eq!(body["result"], "planned: plan my day");
}

#[tokio::test]
async fn run_maps_crew_failure_to_500_with_detail() {
    let base = spawn_api().await;

    let resp = reqwest::Client::new()
        .post(format!("{base}/run"))
        .json(&serde_json::json!({"input_task": "explode"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 500);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body["detail"].as_str().unwrap().contains("boom"));
}

#[tokio::test]
async fn run_rejects_bodies_without_input_task() {
    let base = spawn_api().await;

    let resp = reqwest::Client::new()
        .post(format!("{base}/run"))
        .json(&serde_json::json!({"task": "wrong field"}))
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_client_error());
}
