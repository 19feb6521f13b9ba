// ABOUTME: Agent card discovery route (RFC 8615 well-known URI)
// ABOUTME: Advertises the router's skills and the data tools behind it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use axum::{routing::get, Json, Router};

use crate::a2a::AgentCard;

/// A2A discovery routes
pub struct A2ARoutes;

impl A2ARoutes {
    /// Create `/.well-known/agent-card.json`
    pub fn routes() -> Router {
        Router::new().route(
            "/.well-known/agent-card.json",
            get(Self::handle_agent_card_discovery),
        )
    }

    async fn handle_agent_card_discovery() -> Json<AgentCard> {
        Json(AgentCard::new())
    }
}
