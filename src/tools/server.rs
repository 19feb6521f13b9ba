// ABOUTME: Tool server dispatcher: registry lookup, parameter validation, then storage
// ABOUTME: Every call yields a ToolResponse envelope; storage faults never leak beyond their kind
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Tool Server
//!
//! Dispatch algorithm for one [`ToolRequest`]:
//!
//! 1. look up the name in the fixed registry, else `UNKNOWN_TOOL`
//! 2. validate the arguments against the tool's declared parameters, else `INVALID_PARAMS`
//! 3. execute against the store; `NOT_FOUND` passes through, any other storage
//!    fault becomes `DEPENDENCY_UNAVAILABLE`
//!
//! The server holds no mutable state of its own and serves concurrent calls.

use serde::Serialize;
use serde_json::Value;
use switchboard_core::errors::ToolFailure;
use tracing::{debug, warn};

use crate::context::ToolServerContext;

use super::errors::ToolError;
use super::params::validate;
use super::protocol::{ToolRequest, ToolResponse};
use super::registry::ToolRegistry;
use super::schema::ToolSchema;

/// Liveness report, independent of storage reachability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Liveness {
    /// Always `serving` while the process answers
    pub status: &'static str,
}

/// Readiness report: whether the store answered a probe
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Readiness {
    /// `ready` or `unavailable`
    pub status: &'static str,
    /// Probe failure detail, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Readiness {
    /// Check if the store is reachable
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}

/// Validating dispatcher over the fixed tool registry
pub struct ToolServer {
    registry: ToolRegistry,
    context: ToolServerContext,
}

impl ToolServer {
    /// Create a server over the built-in registry
    #[must_use]
    pub fn new(context: ToolServerContext) -> Self {
        Self::with_registry(ToolRegistry::builtin(), context)
    }

    /// Create a server over an explicit registry
    #[must_use]
    pub const fn with_registry(registry: ToolRegistry, context: ToolServerContext) -> Self {
        Self { registry, context }
    }

    /// Registered tools
    #[must_use]
    pub const fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Discovery schemas in registry order
    #[must_use]
    pub fn tool_schemas(&self) -> Vec<ToolSchema> {
        self.registry.schemas()
    }

    /// Dispatch one request; never fails outside the envelope
    pub async fn dispatch(&self, request: ToolRequest) -> ToolResponse {
        match self.execute(&request).await {
            Ok(data) => {
                debug!(tool = %request.name, "Tool call succeeded");
                ToolResponse::success(data)
            }
            Err(error) => {
                let kind = error.kind();
                warn!(tool = %request.name, kind = %kind, error = %error, "Tool call failed");
                ToolResponse::failure(ToolFailure::from(error))
            }
        }
    }

    async fn execute(&self, request: &ToolRequest) -> Result<Value, ToolError> {
        let tool = self
            .registry
            .get(&request.name)
            .ok_or_else(|| ToolError::UnknownTool {
                tool_name: request.name.clone(),
            })?;
        let params = validate(tool.name(), tool.parameters(), &request.arguments)?;
        tool.execute(&self.context, params).await
    }

    /// Liveness probe
    #[must_use]
    pub const fn liveness(&self) -> Liveness {
        Liveness { status: "serving" }
    }

    /// Readiness probe against the store
    pub async fn readiness(&self) -> Readiness {
        match self.context.store().ping().await {
            Ok(()) => Readiness {
                status: "ready",
                detail: None,
            },
            Err(error) => {
                warn!(error = %error, "Customer store readiness probe failed");
                Readiness {
                    status: "unavailable",
                    detail: Some(ToolFailure::from(error).message),
                }
            }
        }
    }
}
