//! Schema harness: the advertised tool input schema must compile as JSON
//! Schema and admit/reject argument shapes the way the wire contract says.

use async_trait::async_trait;
use mcp_planner_server::handlers;
use mcp_planner_server::protocol::{JsonRpcRequest, RpcId};
use mcp_planner_server::runner::{RunnerError, TaskRunner};
use mcp_planner_server::schema::{validate_json, SchemaValidationError};

struct NoopRunner;

#[async_trait]
impl TaskRunner for NoopRunner {
    async fn run(&self, _topic: &str) -> Result<String, RunnerError> {
        Ok(String::new())
    }
}

async fn advertised_input_schema() -> String {
    let req = JsonRpcRequest {
        jsonrpc: Some("2.0".into()),
        id: Some(RpcId::Number(1)),
        method: "tools/list".into(),
        params: None,
    };

    let response = handlers::dispatch(&req, &NoopRunner).await.unwrap();
    let result = response.result.unwrap();
    serde_json::to_string(&result["tools"][0]["inputSchema"]).unwrap()
}

#[tokio::test]
async fn input_schema_admits_a_topic() {
    let schema = advertised_input_schema().await;
    validate_json(&schema, r#"{"topic": "plan my day"}"#).expect("schema validation failed");
}

#[tokio::test]
async fn input_schema_rejects_missing_topic() {
    let schema = advertised_input_schema().await;
    let err = validate_json(&schema, "{}").unwrap_err();
    assert!(matches!(err, SchemaValidationError::ValidationFailed));
}

#[tokio::test]
async fn input_schema_rejects_non_string_topic() {
    let schema = advertised_input_schema().await;
    let err = validate_json(&schema, r#"{"topic": 42}"#).unwrap_err();
    assert!(matches!(err, SchemaValidationError::ValidationFailed));
}
