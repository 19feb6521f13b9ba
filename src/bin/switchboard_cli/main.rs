// ABOUTME: Switchboard CLI: route a request, list tools, seed or replay demo data from the terminal
// ABOUTME: Runs the router in-process against the local store, or against a remote tool server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
//!
//! Usage:
//! ```bash
//! # Seed the local store
//! switchboard-cli seed
//!
//! # Route a request and print the answer with the A2A log
//! switchboard-cli route "I've been charged twice for customer 2"
//!
//! # Route through a running tool server
//! switchboard-cli route "show history for customer 1" --remote http://localhost:8090
//!
//! # Print the tool schemas
//! switchboard-cli tools
//!
//! # Replay the demo scenarios against a throwaway store
//! switchboard-cli demo
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use switchboard::config::{DatabaseUrl, ServerConfig};
use switchboard::logging::{LogFormat, LoggingConfig};

#[derive(Parser)]
#[command(
    name = "switchboard-cli",
    about = "Switchboard command-line client",
    long_about = "Route customer-service requests, inspect the tool registry, and seed demo data."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Route one free-text request through the router
    Route {
        /// Request text
        text: String,

        /// Customer the request is made for
        #[arg(long)]
        customer_id: Option<i64>,

        /// Base URL of a running tool server instead of the local store
        #[arg(long)]
        remote: Option<String>,

        /// Print the full outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the tool schemas served by tools/list
    Tools,
    /// Insert demo customers and tickets when the store is empty
    Seed,
    /// Replay canned scenarios against a seeded in-memory store
    Demo {
        /// Print each outcome as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig {
        level: if cli.verbose { "debug" } else { "warn" }.to_owned(),
        format: LogFormat::Compact,
        ..LoggingConfig::default()
    }
    .init()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(url) = cli.database_url.as_deref() {
        config.database_url = url.parse::<DatabaseUrl>()?;
    }

    match cli.command {
        Command::Route {
            text,
            customer_id,
            remote,
            json,
        } => {
            commands::route(
                &config,
                commands::RouteArgs {
                    text,
                    customer_id,
                    remote,
                    json,
                },
            )
            .await
        }
        Command::Tools => commands::tools(),
        Command::Seed => commands::seed(&config).await,
        Command::Demo { json } => commands::demo(&config, json).await,
    }
}
