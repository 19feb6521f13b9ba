// ABOUTME: Transports carrying ToolRequests from the data access agent to a tool server
// ABOUTME: In-process dispatch for a single binary, JSON-RPC over HTTP for a remote server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Tool Transports
//!
//! A transport performs exactly one exchange per call: no retries, no caching.
//! Failures to reach the server are reported as `DEPENDENCY_UNAVAILABLE`
//! envelopes so callers see the same shape as any other tool failure.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use switchboard_core::errors::ToolFailure;
use tracing::{debug, warn};

use crate::jsonrpc::{methods, JsonRpcRequest, JsonRpcResponse};
use crate::tools::{ToolRequest, ToolResponse, ToolServer};

/// Carries one tool request to a tool server and returns its envelope
#[async_trait]
pub trait ToolTransport: Send + Sync {
    /// Perform the exchange; never fails outside the envelope
    async fn send(&self, request: ToolRequest) -> ToolResponse;

    /// Short label for logs
    fn describe(&self) -> String;
}

/// Dispatches directly into a tool server living in the same process
#[derive(Clone)]
pub struct InProcessTransport {
    server: Arc<ToolServer>,
}

impl InProcessTransport {
    /// Wrap a shared tool server
    #[must_use]
    pub const fn new(server: Arc<ToolServer>) -> Self {
        Self { server }
    }
}

#[async_trait]
impl ToolTransport for InProcessTransport {
    async fn send(&self, request: ToolRequest) -> ToolResponse {
        self.server.dispatch(request).await
    }

    fn describe(&self) -> String {
        "in-process".to_owned()
    }
}

/// Calls a remote tool server's `POST /mcp` endpoint with JSON-RPC `tools/call`
#[derive(Clone)]
pub struct HttpToolTransport {
    client: Client,
    endpoint: String,
}

impl HttpToolTransport {
    /// Create a transport for the server at `base_url` (e.g. `http://localhost:8090`)
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self::with_client(client, base_url)
    }

    /// Create a transport reusing an existing client
    #[must_use]
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}/mcp", base_url.trim_end_matches('/')),
        }
    }

    /// Full URL requests are posted to
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn exchange(&self, request: &ToolRequest) -> Result<ToolResponse, String> {
        let rpc = JsonRpcRequest::new(
            methods::TOOLS_CALL,
            Some(json!({"name": request.name, "arguments": request.arguments})),
        );

        let http_response = self
            .client
            .post(&self.endpoint)
            .json(&rpc)
            .send()
            .await
            .map_err(|e| format!("request to {} failed: {e}", self.endpoint))?;

        let status = http_response.status();
        if !status.is_success() {
            return Err(format!("tool server answered HTTP {status}"));
        }

        let rpc_response: JsonRpcResponse = http_response
            .json()
            .await
            .map_err(|e| format!("unreadable JSON-RPC response: {e}"))?;

        if let Some(error) = rpc_response.error {
            return Err(format!("JSON-RPC error {}: {}", error.code, error.message));
        }
        let result = rpc_response
            .result
            .ok_or_else(|| "JSON-RPC response carried no result".to_owned())?;
        serde_json::from_value(result).map_err(|e| format!("malformed tool envelope: {e}"))
    }
}

#[async_trait]
impl ToolTransport for HttpToolTransport {
    async fn send(&self, request: ToolRequest) -> ToolResponse {
        debug!(tool = %request.name, endpoint = %self.endpoint, "Sending remote tool call");
        match self.exchange(&request).await {
            Ok(response) => response,
            Err(detail) => {
                warn!(tool = %request.name, detail = %detail, "Remote tool server unreachable");
                ToolResponse::failure(ToolFailure::dependency_unavailable(format!(
                    "Tool server unavailable: {detail}"
                )))
            }
        }
    }

    fn describe(&self) -> String {
        format!("http ({})", self.endpoint)
    }
}
