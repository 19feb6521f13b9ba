// ABOUTME: Tests for the file-backed SQLite store: persistence across reopen and idempotent seeding
// ABOUTME: Uses a temporary directory so nothing leaks between runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use serde_json::json;
use switchboard::context::ToolServerContext;
use switchboard::database::{seed_demo_data, CustomerStore, Database};
use switchboard::models::{NewTicket, TicketPriority};
use switchboard::tools::{ToolRequest, ToolServer};
use tempfile::TempDir;

fn database_url(dir: &TempDir) -> String {
    format!("sqlite:{}", dir.path().join("switchboard.db").display())
}

#[tokio::test]
async fn test_writes_survive_reopen() {
    common::init_test_logging();
    let dir = TempDir::new().unwrap();
    let url = database_url(&dir);

    let ticket_id = {
        let database = Database::new(&url).await.unwrap();
        seed_demo_data(&database).await.unwrap();
        let ticket = database
            .create_ticket(&NewTicket {
                customer_id: 2,
                issue: "Persist me".to_owned(),
                priority: TicketPriority::Low,
            })
            .await
            .unwrap();
        database.pool().close().await;
        ticket.id
    };

    let reopened = Database::new(&url).await.unwrap();
    let history = reopened.get_customer_history(2).await.unwrap();
    assert!(history.iter().any(|t| t.id == ticket_id && t.issue == "Persist me"));
}

#[tokio::test]
async fn test_seed_is_idempotent() {
    common::init_test_logging();
    let dir = TempDir::new().unwrap();
    let database = Database::new(&database_url(&dir)).await.unwrap();

    let first = seed_demo_data(&database).await.unwrap();
    let second = seed_demo_data(&database).await.unwrap();

    assert_eq!(first.customers, 5);
    assert_eq!(first.tickets, 5);
    assert_eq!(second.customers, 0);
    assert_eq!(database.list_customers(None, 100).await.unwrap().len(), 5);
}

#[tokio::test]
async fn test_concurrent_tool_calls_on_file_store() {
    common::init_test_logging();
    let dir = TempDir::new().unwrap();
    let database = Database::new(&database_url(&dir)).await.unwrap();
    seed_demo_data(&database).await.unwrap();
    let server = Arc::new(ToolServer::new(ToolServerContext::new(Arc::new(database))));

    let calls = (0..8).map(|i| {
        let server = Arc::clone(&server);
        tokio::spawn(async move {
            server
                .dispatch(ToolRequest::new(
                    "create_ticket",
                    json!({"customer_id": 1, "issue": format!("Parallel issue {i}"), "priority": "medium"}),
                ))
                .await
        })
    });
    for call in calls {
        assert!(call.await.unwrap().is_success());
    }

    let history = server
        .dispatch(ToolRequest::new("get_customer_history", json!({"customer_id": 1})))
        .await
        .into_result()
        .unwrap();
    assert_eq!(history.as_array().unwrap().len(), 1 + 8);
}
