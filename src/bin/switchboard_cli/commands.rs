// ABOUTME: Subcommand implementations for the switchboard CLI
// ABOUTME: Builds the same tool server and router stack as the HTTP server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use std::sync::Arc;

use anyhow::{Context, Result};
use switchboard::a2a::{A2ALog, EntryOutcome};
use switchboard::config::{DatabaseUrl, ServerConfig};
use switchboard::context::{AgentContext, ToolServerContext};
use switchboard::database::{seed_demo_data, Database};
use switchboard::router::{RouteOutcome, RouteRequest, Router};
use switchboard::tools::{ToolRegistry, ToolServer};

/// Canned requests replayed by `switchboard-cli demo`, with the caller's customer id
const DEMO_SCENARIOS: [(&str, &str, Option<i64>); 6] = [
    ("Simple lookup", "Get customer information for ID 1", None),
    ("Task allocation", "I need help with my account, customer ID 1", None),
    (
        "Negotiation",
        "I want to cancel my subscription but I'm having billing issues",
        Some(1),
    ),
    (
        "Multi-step report",
        "Show me all active customers who have open tickets",
        None,
    ),
    (
        "Escalation",
        "I was charged twice, please refund immediately!",
        Some(1),
    ),
    (
        "Multi-intent",
        "Update my email to new@email.com and show my ticket history for customer 1",
        None,
    ),
];

/// Arguments of `switchboard-cli route`
pub struct RouteArgs {
    pub text: String,
    pub customer_id: Option<i64>,
    pub remote: Option<String>,
    pub json: bool,
}

async fn open_database(config: &ServerConfig) -> Result<Database> {
    if let DatabaseUrl::SQLite { path } = &config.database_url {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("creating database directory {}", parent.display()))?;
        }
    }
    Ok(Database::new(&config.database_url.to_connection_string()).await?)
}

pub async fn route(config: &ServerConfig, args: RouteArgs) -> Result<()> {
    let context = match args.remote.as_deref().or(config.tool_server_url.as_deref()) {
        Some(url) => AgentContext::remote(url),
        None => {
            let database = open_database(config).await?;
            let tool_server = ToolServer::new(
                ToolServerContext::new(Arc::new(database))
                    .with_default_list_limit(config.default_list_limit),
            );
            AgentContext::in_process(Arc::new(tool_server))
        }
    }
    .with_report_customer_limit(config.report_customer_limit);

    let router = Router::new(&context);
    let mut request = RouteRequest::new(args.text);
    if let Some(id) = args.customer_id {
        request = request.for_customer(id);
    }
    let outcome = router.route(request).await;

    print_outcome(&outcome, args.json)
}

/// Replay the demo scenarios against a fresh, seeded in-memory store
pub async fn demo(config: &ServerConfig, json: bool) -> Result<()> {
    let database = Database::new(&DatabaseUrl::Memory.to_connection_string()).await?;
    seed_demo_data(&database).await?;
    let tool_server = ToolServer::new(
        ToolServerContext::new(Arc::new(database))
            .with_default_list_limit(config.default_list_limit),
    );
    let context = AgentContext::in_process(Arc::new(tool_server))
        .with_report_customer_limit(config.report_customer_limit);
    let router = Router::new(&context);

    for (title, text, customer_id) in DEMO_SCENARIOS {
        let mut request = RouteRequest::new(text);
        if let Some(id) = customer_id {
            request = request.for_customer(id);
        }
        let outcome = router.route(request).await;

        if !json {
            println!("{}", "=".repeat(70));
            println!("{title}: {text}");
            println!("{}", "=".repeat(70));
        }
        print_outcome(&outcome, json)?;
        println!();
    }
    Ok(())
}

fn print_outcome(outcome: &RouteOutcome, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
        return Ok(());
    }

    println!("{}", outcome.response);
    print_log(&outcome.log);
    Ok(())
}

fn print_log(log: &A2ALog) {
    if log.is_empty() {
        return;
    }
    println!();
    println!("A2A log:");
    for entry in log.entries() {
        let outcome = match &entry.outcome {
            EntryOutcome::Ok => "ok".to_owned(),
            EntryOutcome::Failed { kind } => format!("failed ({kind})"),
            EntryOutcome::Skipped => "skipped".to_owned(),
        };
        println!(
            "  {:>2}. {} -> {} {} [{}] {} => {}",
            entry.index,
            entry.caller,
            entry.callee,
            entry.operation,
            outcome,
            entry.input_summary,
            entry.output_summary,
        );
    }
}

pub fn tools() -> Result<()> {
    let schemas = ToolRegistry::builtin().schemas();
    println!("{}", serde_json::to_string_pretty(&schemas)?);
    Ok(())
}

pub async fn seed(config: &ServerConfig) -> Result<()> {
    let database = open_database(config).await?;
    let summary = seed_demo_data(&database).await?;
    println!(
        "Seeded {} customers and {} tickets into {}",
        summary.customers, summary.tickets, config.database_url
    );
    Ok(())
}
