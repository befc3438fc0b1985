use crate::error::ServoMcpError;
use crate::server::ServoServer;
use serde_json::json;

use super::dto::{Method, RpcRequest, RpcResponse, ToolCall, PROTOCOL_VERSION};

/// Dispatches one decoded request. Returns `None` for notifications: a
/// request without an id never receives a response, whatever its method.
pub async fn handle_request(server: &ServoServer, request: RpcRequest) -> Option<RpcResponse> {
    let id = match request.id {
        Some(id) => id,
        None => {
            tracing::debug!(
                "Notification with method '{}' received, no response sent",
                request.method
            );
            return None;
        }
    };

    let response = match Method::parse(&request.method) {
        Some(Method::Initialize) => {
            tracing::debug!("Handling initialize");
            RpcResponse::result(
                id,
                json!({
                    "protocolVersion": PROTOCOL_VERSION,
                    "serverInfo": {
                        "name": env!("CARGO_PKG_NAME"),
                        "version": env!("CARGO_PKG_VERSION")
                    },
                    "capabilities": {
                        "tools": {
                            "tools": server.get_tools()
                        }
                    }
                }),
            )
        }
        Some(Method::ToolsList) => RpcResponse::result(
            id,
            json!({
                "tools": server.get_tools()
            }),
        ),
        Some(Method::ToolsCall) => {
            let params = match request.params {
                Some(params) => params,
                None => return Some(RpcResponse::error(id, -32602, "Missing parameters")),
            };
            let tool_call: ToolCall = match serde_json::from_value(params) {
                Ok(call) => call,
                Err(_) => {
                    return Some(RpcResponse::error(id, -32602, "Invalid tool call parameters"))
                }
            };
            match server.handle_tool_call(tool_call).await {
                Ok(result) => RpcResponse::result(id, json!(result)),
                Err(e @ ServoMcpError::UnknownTool { .. })
                | Err(e @ ServoMcpError::InvalidArguments(_)) => {
                    RpcResponse::error(id, -32602, e.to_string())
                }
                Err(e) => RpcResponse::error(id, -32603, format!("Tool execution failed: {}", e)),
            }
        }
        None => RpcResponse::error(
            id,
            -32601,
            format!("Method not found: {}", request.method),
        ),
    };

    Some(response)
}
