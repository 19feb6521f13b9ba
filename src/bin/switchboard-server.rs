// ABOUTME: Switchboard server binary: tool server JSON-RPC plus the request router over HTTP
// ABOUTME: Dispatches in-process unless TOOL_SERVER_URL points the agents at a remote tool server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Switchboard Server Binary
//!
//! Loads configuration from the environment, opens the customer store, and
//! serves every route on one port until Ctrl-C.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use switchboard::{
    config::{DatabaseUrl, ServerConfig},
    context::{AgentContext, ToolServerContext},
    database::{seed_demo_data, Database},
    logging,
    router::Router,
    routes::{self, AppState},
    tools::ToolServer,
};
use tokio::net::TcpListener;
use tracing::{error, info, warn};

/// Command-line overrides applied on top of the environment configuration
#[derive(Parser)]
#[command(name = "switchboard-server")]
#[command(about = "Switchboard - customer-service router and data tool server")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Insert demo customers and tickets when the store is empty
    #[arg(long)]
    seed: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    info!("Starting Switchboard server");
    info!("{}", config.summary());
    if config.environment.is_production() && config.database_url.is_memory() {
        warn!("In-memory database in production: customers and tickets are lost on restart");
    }

    if let DatabaseUrl::SQLite { path } = &config.database_url {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("creating database directory {}", parent.display()))?;
        }
    }

    let database = Database::new(&config.database_url.to_connection_string()).await?;
    if args.seed {
        let summary = seed_demo_data(&database).await?;
        info!(
            customers = summary.customers,
            tickets = summary.tickets,
            "Demo data seeded"
        );
    }

    let tool_server = Arc::new(ToolServer::new(
        ToolServerContext::new(Arc::new(database))
            .with_default_list_limit(config.default_list_limit),
    ));

    let agent_context = config
        .tool_server_url
        .as_deref()
        .map_or_else(
            || AgentContext::in_process(Arc::clone(&tool_server)),
            AgentContext::remote,
        )
        .with_report_customer_limit(config.report_customer_limit);
    info!(
        transport = %agent_context.transport().describe(),
        "Agents connected to tool server"
    );

    let router = Arc::new(Router::new(&agent_context));
    let app = routes::app(&AppState::new(tool_server, router));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    display_available_endpoints(config.http_port);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}

#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(port: u16) {
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
    info!("=== Available Endpoints ===");
    info!("   Tool server:   POST http://{host}:{port}/mcp");
    info!("   Route request: POST http://{host}:{port}/route");
    info!("   Liveness:      GET  http://{host}:{port}/health");
    info!("   Readiness:     GET  http://{host}:{port}/ready");
    info!("   Agent card:    GET  http://{host}:{port}/.well-known/agent-card.json");
}
