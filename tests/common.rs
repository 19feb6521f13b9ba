// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Seeded in-memory stores, in-process tool servers, and routers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `switchboard`

use std::sync::{Arc, Once};

use anyhow::Result;
use switchboard::{
    a2a::{DataAccessAgent, SupportAgent},
    context::{AgentContext, ToolServerContext},
    database::{seed_demo_data, Database},
    router::Router,
    routes::{self, AppState},
    tools::ToolServer,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; tests stay quiet by default
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Empty in-memory store
pub async fn create_empty_database() -> Result<Database> {
    init_test_logging();
    Ok(Database::new("sqlite::memory:").await?)
}

/// In-memory store with the demo customers and tickets
///
/// Customer 1 is active with one open ticket, customer 3 is disabled.
pub async fn create_test_database() -> Result<Database> {
    let database = create_empty_database().await?;
    seed_demo_data(&database).await?;
    Ok(database)
}

/// Number of rows in `tickets`
pub async fn ticket_count(database: &Database) -> Result<i64> {
    Ok(sqlx::query_scalar("SELECT COUNT(*) FROM tickets")
        .fetch_one(database.pool())
        .await?)
}

/// Everything a request needs, wired in-process over one store
pub struct TestStack {
    pub database: Database,
    pub tool_server: Arc<ToolServer>,
    pub context: AgentContext,
}

impl TestStack {
    /// Stack over a seeded in-memory store
    pub async fn seeded() -> Result<Self> {
        Ok(Self::over(create_test_database().await?))
    }

    /// Stack over an existing store
    pub fn over(database: Database) -> Self {
        let tool_server = Arc::new(ToolServer::new(ToolServerContext::new(Arc::new(
            database.clone(),
        ))));
        let context = AgentContext::in_process(Arc::clone(&tool_server));
        Self {
            database,
            tool_server,
            context,
        }
    }

    pub fn router(&self) -> Router {
        Router::new(&self.context)
    }

    pub fn data_agent(&self) -> DataAccessAgent {
        DataAccessAgent::new(self.context.transport())
    }

    pub fn support_agent(&self) -> SupportAgent {
        SupportAgent::new(self.data_agent())
    }

    /// Full HTTP app over this stack
    pub fn app(&self) -> axum::Router {
        routes::app(&AppState::new(
            Arc::clone(&self.tool_server),
            Arc::new(self.router()),
        ))
    }
}
