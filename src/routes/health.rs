// ABOUTME: Liveness and readiness endpoints for the tool server
// ABOUTME: /health never touches storage; /ready answers 503 when the store is unreachable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Health check routes

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use http::StatusCode;

use crate::tools::ToolServer;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create `/health` and `/ready`
    pub fn routes(tool_server: Arc<ToolServer>) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .route("/ready", get(Self::handle_ready))
            .with_state(tool_server)
    }

    async fn handle_health(State(tool_server): State<Arc<ToolServer>>) -> impl IntoResponse {
        Json(tool_server.liveness())
    }

    async fn handle_ready(State(tool_server): State<Arc<ToolServer>>) -> impl IntoResponse {
        let readiness = tool_server.readiness().await;
        let status = if readiness.is_ready() {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        };
        (status, Json(readiness))
    }
}
