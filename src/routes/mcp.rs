// ABOUTME: POST /mcp handler: JSON-RPC 2.0 front of the tool server
// ABOUTME: initialize handshake, tools/list schemas, tools/call returning the tool envelope as result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! MCP-style JSON-RPC routes
//!
//! Protocol faults (bad JSON, unknown method, malformed `tools/call` params)
//! are JSON-RPC errors. Everything a tool decides, including `UNKNOWN_TOOL`
//! and `INVALID_PARAMS` on arguments, is a successful JSON-RPC result whose
//! value is the `status`-tagged envelope.

use std::sync::Arc;

use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use serde_json::{json, Value};
use switchboard_core::constants::service;
use tracing::debug;

use crate::jsonrpc::{error_codes, methods, JsonRpcRequest, JsonRpcResponse, JSONRPC_VERSION};
use crate::tools::{ToolRequest, ToolServer};

/// JSON-RPC tool server routes
pub struct McpRoutes;

impl McpRoutes {
    /// Create the `POST /mcp` route
    pub fn routes(tool_server: Arc<ToolServer>) -> Router {
        Router::new()
            .route("/mcp", post(Self::handle_rpc))
            .with_state(tool_server)
    }

    async fn handle_rpc(
        State(tool_server): State<Arc<ToolServer>>,
        body: Bytes,
    ) -> Json<JsonRpcResponse> {
        let raw: Value = match serde_json::from_slice(&body) {
            Ok(raw) => raw,
            Err(e) => {
                return Json(JsonRpcResponse::error(
                    None,
                    error_codes::PARSE_ERROR,
                    format!("Parse error: {e}"),
                ))
            }
        };
        let id = raw.get("id").cloned();
        match serde_json::from_value::<JsonRpcRequest>(raw) {
            Ok(request) => Json(Self::handle_request(&tool_server, request).await),
            Err(e) => Json(JsonRpcResponse::error(
                id,
                error_codes::INVALID_REQUEST,
                format!("Invalid request: {e}"),
            )),
        }
    }

    /// Serve one decoded JSON-RPC request
    pub async fn handle_request(
        tool_server: &ToolServer,
        request: JsonRpcRequest,
    ) -> JsonRpcResponse {
        let id = request.id.clone();
        if request.jsonrpc != JSONRPC_VERSION {
            return JsonRpcResponse::error(
                id,
                error_codes::INVALID_REQUEST,
                format!("Unsupported JSON-RPC version: {}", request.jsonrpc),
            );
        }
        debug!(method = %request.method, "JSON-RPC request");

        match request.method.as_str() {
            methods::INITIALIZE => JsonRpcResponse::success(id, Self::server_info()),
            methods::TOOLS_LIST => {
                JsonRpcResponse::success(id, json!({ "tools": tool_server.tool_schemas() }))
            }
            methods::TOOLS_CALL => {
                let Some(call) = request
                    .params
                    .and_then(|params| serde_json::from_value::<ToolRequest>(params).ok())
                else {
                    return JsonRpcResponse::error(
                        id,
                        error_codes::INVALID_PARAMS,
                        "tools/call requires params {\"name\": string, \"arguments\": object}",
                    );
                };
                let envelope = tool_server.dispatch(call).await;
                match serde_json::to_value(&envelope) {
                    Ok(result) => JsonRpcResponse::success(id, result),
                    Err(e) => JsonRpcResponse::error(
                        id,
                        error_codes::INTERNAL_ERROR,
                        format!("Failed to encode tool response: {e}"),
                    ),
                }
            }
            methods::PING => {
                JsonRpcResponse::success(id, json!({ "status": tool_server.liveness().status }))
            }
            other => JsonRpcResponse::error(
                id,
                error_codes::METHOD_NOT_FOUND,
                format!("Method not found: {other}"),
            ),
        }
    }

    fn server_info() -> Value {
        json!({
            "protocolVersion": service::MCP_PROTOCOL_VERSION,
            "capabilities": {
                "tools": {
                    "listChanged": false
                }
            },
            "serverInfo": {
                "name": service::SERVICE_NAME,
                "version": env!("CARGO_PKG_VERSION")
            }
        })
    }
}
