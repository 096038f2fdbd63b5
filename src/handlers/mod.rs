pub mod plan;

use tracing::{info, warn};

use crate::protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, ToolCallParams};
use crate::runner::TaskRunner;

/// Failures raised inside dispatch.
///
/// Caught by [`dispatch`] and converted to a transport-level -32000 error, so
/// no request can take the loop down.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
    #[error("Invalid tools/call params: {0}")]
    BadParams(#[from] serde_json::Error),
}

/// Dispatch a JSON-RPC request to the appropriate handler.
///
/// Returns `None` when no response must be produced. State-free: every call
/// is independent and nothing is carried between requests.
pub async fn dispatch(req: &JsonRpcRequest, runner: &dyn TaskRunner) -> Option<JsonRpcResponse> {
    match req.method.as_str() {
        "initialize" => {
            let result = serde_json::json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {
                    "tools": {
                        "listChanged": false
                    }
                },
                "serverInfo": {
                    "name": env!("CARGO_PKG_NAME"),
                    "version": env!("CARGO_PKG_VERSION")
                }
            });
            Some(JsonRpcResponse::success(req.id.clone(), result))
        }

        // Client acknowledging initialization — never answered, id or not.
        "notifications/initialized" => {
            info!("client initialized");
            None
        }

        "tools/list" => {
            let result = serde_json::json!({
                "tools": [
                    {
                        "name": plan::TOOL_NAME,
                        "description": "Plan and schedule tasks using the planning crew agent. \
                            Use this for ANY task-related request including planning, \
                            scheduling, creating, or organizing tasks.",
                        "inputSchema": {
                            "type": "object",
                            "properties": {
                                "topic": {
                                    "type": "string",
                                    "description": "The task description or query from the user"
                                }
                            },
                            "required": ["topic"]
                        }
                    }
                ]
            });
            Some(JsonRpcResponse::success(req.id.clone(), result))
        }

        "tools/call" => {
            let response = match call_tool(req, runner).await {
                Ok(result) => JsonRpcResponse::success(req.id.clone(), result),
                Err(e) => {
                    warn!("tools/call failed: {e}");
                    JsonRpcResponse::error(req.id.clone(), JsonRpcError::internal(e.to_string()))
                }
            };
            Some(response)
        }

        other => {
            if req.id.is_some() {
                warn!("unknown method: {other}");
                Some(JsonRpcResponse::error(
                    req.id.clone(),
                    JsonRpcError::method_not_found(),
                ))
            } else {
                // Unknown notification — notification semantics, drop it.
                None
            }
        }
    }
}

/// Resolve a `tools/call` to the single known tool and execute it.
///
/// A crew failure is NOT an error here: it comes back as a successful
/// `ToolResult` with `isError: true`. Only an unrecognized tool name or
/// unusable params escape as `DispatchError`.
async fn call_tool(
    req: &JsonRpcRequest,
    runner: &dyn TaskRunner,
) -> Result<serde_json::Value, DispatchError> {
    let params: ToolCallParams = match &req.params {
        Some(v) => serde_json::from_value(v.clone())?,
        None => ToolCallParams::default(),
    };

    let name = params.name.as_deref().unwrap_or_default();
    if name != plan::TOOL_NAME {
        return Err(DispatchError::UnknownTool(name.to_string()));
    }

    let result = plan::handle(params.arguments.as_ref(), runner).await;
    Ok(serde_json::to_value(&result)?)
}
