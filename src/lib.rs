// ABOUTME: Main library entry point for the switchboard customer-service agent system
// ABOUTME: Intent router, support and data access agents, and a schema-validated tool server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Switchboard
//!
//! A multi-agent customer-service system. A free-text request is classified
//! into intents, turned into an ordered delegation plan, executed step by step
//! against specialist agents, and synthesized into one answer. Every exchange
//! between agents is recorded in an A2A log.
//!
//! ## Architecture
//!
//! - **Router**: intent classification, planning, sequential execution, synthesis
//! - **Support agent**: escalations, cancellation negotiation, ticket reports
//! - **Data access agent**: the only component that talks to the tool server
//! - **Tool server**: five schema-validated tools over the customer store
//! - **Database**: `SQLite` customers and tickets
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use switchboard::context::{AgentContext, ToolServerContext};
//! use switchboard::database::Database;
//! use switchboard::router::{RouteRequest, Router};
//! use switchboard::tools::ToolServer;
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let database = Database::new("sqlite::memory:").await?;
//! let tool_server = Arc::new(ToolServer::new(ToolServerContext::new(Arc::new(database))));
//! let router = Router::new(&AgentContext::in_process(tool_server));
//!
//! let outcome = router
//!     .route(RouteRequest::new("I've been charged twice, please refund").for_customer(1))
//!     .await;
//! println!("{}", outcome.response);
//! # Ok(())
//! # }
//! ```

/// Agent-to-agent layer: specialist agents, transports, and the exchange log
pub mod a2a;

/// Environment configuration
pub mod config;

/// Dependency bundles for the tool server and the agents
pub mod context;

/// `SQLite` customer store
pub mod database;

/// JSON-RPC 2.0 types
pub mod jsonrpc;

/// Structured logging setup
pub mod logging;

/// Intent routing and plan execution
pub mod router;

/// HTTP routes
pub mod routes;

/// Tool server, registry, and parameter validation
pub mod tools;

pub use switchboard_core::{constants, errors, models};
