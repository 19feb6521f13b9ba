// ABOUTME: POST /route: run one free-text request through the router
// ABOUTME: Always 200 with the full outcome; step failures live inside the plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};

use crate::router::{RouteOutcome, RouteRequest, Router as RequestRouter};

/// Request routing endpoint
pub struct RouteRoutes;

impl RouteRoutes {
    /// Create `POST /route`
    pub fn routes(router: Arc<RequestRouter>) -> Router {
        Router::new()
            .route("/route", post(Self::handle_route))
            .with_state(router)
    }

    async fn handle_route(
        State(router): State<Arc<RequestRouter>>,
        Json(request): Json<RouteRequest>,
    ) -> Json<RouteOutcome> {
        Json(router.route(request).await)
    }
}
