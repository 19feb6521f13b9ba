// ABOUTME: HTTP surface of the switchboard server, organized by concern
// ABOUTME: Tool server JSON-RPC, health probes, agent discovery, and request routing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Route modules
//!
//! | Route | Purpose |
//! |---|---|
//! | `POST /mcp` | JSON-RPC `tools/list`, `tools/call`, `ping` |
//! | `GET /health` | liveness |
//! | `GET /ready` | readiness (store probe) |
//! | `GET /.well-known/agent-card.json` | agent discovery |
//! | `POST /route` | free-text request through the router |

/// Agent card discovery
pub mod a2a;
/// Liveness and readiness
pub mod health;
/// JSON-RPC tool server
pub mod mcp;
/// Request routing
pub mod route;

use std::sync::Arc;

use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub use a2a::A2ARoutes;
pub use health::HealthRoutes;
pub use mcp::McpRoutes;
pub use route::RouteRoutes;

use crate::router::Router as RequestRouter;
use crate::tools::ToolServer;

/// Shared handles the HTTP handlers serve from
#[derive(Clone)]
pub struct AppState {
    /// Tool server behind `/mcp` and the probes
    pub tool_server: Arc<ToolServer>,
    /// Router behind `/route`
    pub router: Arc<RequestRouter>,
}

impl AppState {
    /// Bundle the tool server and router
    #[must_use]
    pub const fn new(tool_server: Arc<ToolServer>, router: Arc<RequestRouter>) -> Self {
        Self {
            tool_server,
            router,
        }
    }
}

/// Assemble every route with HTTP tracing
pub fn app(state: &AppState) -> axum::Router {
    axum::Router::new()
        .merge(McpRoutes::routes(Arc::clone(&state.tool_server)))
        .merge(HealthRoutes::routes(Arc::clone(&state.tool_server)))
        .merge(A2ARoutes::routes())
        .merge(RouteRoutes::routes(Arc::clone(&state.router)))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
