// ABOUTME: HTTP integration tests for the JSON-RPC tool server, probes, discovery, and /route
// ABOUTME: Drives the assembled axum app in-memory and runs the HTTP transport against a live socket
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use std::sync::Arc;

use serde_json::{json, Value};
use switchboard::a2a::{A2ALog, DataAccessAgent, HttpToolTransport, ToolTransport};
use switchboard::errors::ToolErrorKind;
use switchboard::jsonrpc::error_codes;
use tokio::net::TcpListener;

use common::TestStack;
use helpers::axum_test::AxumTestRequest;

fn rpc(method: &str, params: Value) -> Value {
    json!({"jsonrpc": "2.0", "method": method, "params": params, "id": 1})
}

// ============================================================================
// POST /mcp
// ============================================================================

#[tokio::test]
async fn test_tools_list_returns_five_schemas() {
    let stack = TestStack::seeded().await.unwrap();

    let response = AxumTestRequest::post("/mcp")
        .json(&json!({"jsonrpc": "2.0", "method": "tools/list", "id": 1}))
        .send(stack.app())
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    let tools = body["result"]["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 5);

    let create = tools.iter().find(|t| t["name"] == "create_ticket").unwrap();
    assert_eq!(
        create["inputSchema"]["properties"]["priority"]["enum"],
        json!(["low", "medium", "high"])
    );
    assert_eq!(create["inputSchema"]["additionalProperties"], false);
}

#[tokio::test]
async fn test_tools_call_wraps_envelope_in_result() {
    let stack = TestStack::seeded().await.unwrap();

    let response = AxumTestRequest::post("/mcp")
        .json(&rpc(
            "tools/call",
            json!({"name": "get_customer", "arguments": {"customer_id": 1}}),
        ))
        .send(stack.app())
        .await;

    let body: Value = response.json();
    assert_eq!(body["id"], 1);
    assert_eq!(body["result"]["status"], "success");
    assert_eq!(body["result"]["data"]["name"], "Alice Johnson");
}

#[tokio::test]
async fn test_tool_failures_are_results_not_rpc_errors() {
    let stack = TestStack::seeded().await.unwrap();

    let response = AxumTestRequest::post("/mcp")
        .json(&rpc(
            "tools/call",
            json!({"name": "drop_tables", "arguments": {}}),
        ))
        .send(stack.app())
        .await;

    let body: Value = response.json();
    assert!(body.get("error").is_none());
    assert_eq!(body["result"]["status"], "error");
    assert_eq!(body["result"]["error"]["kind"], "UNKNOWN_TOOL");
}

#[tokio::test]
async fn test_protocol_faults_are_rpc_errors() {
    let stack = TestStack::seeded().await.unwrap();

    let unknown_method = AxumTestRequest::post("/mcp")
        .json(&rpc("resources/list", json!({})))
        .send(stack.app())
        .await
        .json::<Value>();
    assert_eq!(
        unknown_method["error"]["code"],
        error_codes::METHOD_NOT_FOUND
    );

    let bad_params = AxumTestRequest::post("/mcp")
        .json(&rpc("tools/call", json!({"arguments": {}})))
        .send(stack.app())
        .await
        .json::<Value>();
    assert_eq!(bad_params["error"]["code"], error_codes::INVALID_PARAMS);

    let garbage = AxumTestRequest::post("/mcp")
        .raw("{not json")
        .send(stack.app())
        .await
        .json::<Value>();
    assert_eq!(garbage["error"]["code"], error_codes::PARSE_ERROR);
}

#[tokio::test]
async fn test_ping_reports_serving() {
    let stack = TestStack::seeded().await.unwrap();

    let body: Value = AxumTestRequest::post("/mcp")
        .json(&json!({"jsonrpc": "2.0", "method": "ping", "id": "p"}))
        .send(stack.app())
        .await
        .json();
    assert_eq!(body["result"]["status"], "serving");
    assert_eq!(body["id"], "p");
}

#[tokio::test]
async fn test_initialize_advertises_tools_capability() {
    let stack = TestStack::seeded().await.unwrap();

    let body: Value = AxumTestRequest::post("/mcp")
        .json(&json!({"jsonrpc": "2.0", "method": "initialize", "id": 0}))
        .send(stack.app())
        .await
        .json();
    assert_eq!(body["result"]["protocolVersion"], "2024-11-05");
    assert!(body["result"]["capabilities"]["tools"].is_object());
    assert_eq!(body["result"]["serverInfo"]["name"], "switchboard");
    assert!(body.get("error").is_none());
}

// ============================================================================
// Probes and discovery
// ============================================================================

#[tokio::test]
async fn test_health_and_ready() {
    let stack = TestStack::seeded().await.unwrap();

    let health = AxumTestRequest::get("/health").send(stack.app()).await;
    assert_eq!(health.status(), 200);
    assert_eq!(health.json::<Value>()["status"], "serving");

    let ready = AxumTestRequest::get("/ready").send(stack.app()).await;
    assert_eq!(ready.status(), 200);
    assert_eq!(ready.json::<Value>()["status"], "ready");
}

#[tokio::test]
async fn test_ready_is_503_when_store_is_gone() {
    let stack = TestStack::seeded().await.unwrap();
    stack.database.pool().close().await;

    let health = AxumTestRequest::get("/health").send(stack.app()).await;
    assert_eq!(health.status(), 200);

    let ready = AxumTestRequest::get("/ready").send(stack.app()).await;
    assert_eq!(ready.status(), 503);
    assert_eq!(ready.json::<Value>()["status"], "unavailable");
}

#[tokio::test]
async fn test_agent_card_lists_skills_and_tools() {
    let stack = TestStack::seeded().await.unwrap();

    let card: Value = AxumTestRequest::get("/.well-known/agent-card.json")
        .send(stack.app())
        .await
        .json();

    assert_eq!(card["skills"].as_array().unwrap().len(), 7);
    assert_eq!(card["tools"].as_array().unwrap().len(), 5);
    assert_eq!(card["skills"][0]["id"], "escalation");
}

// ============================================================================
// POST /route
// ============================================================================

#[tokio::test]
async fn test_route_endpoint_returns_outcome() {
    let stack = TestStack::seeded().await.unwrap();

    let response = AxumTestRequest::post("/route")
        .json(&json!({"text": "I was charged twice, please refund", "customer_id": 1}))
        .send(stack.app())
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["plan"].as_array().unwrap().len(), 1);
    assert_eq!(body["log"].as_array().unwrap().len(), 1);
    assert!(body["response"].as_str().unwrap().contains("high priority"));
}

// ============================================================================
// HTTP transport against a live server
// ============================================================================

#[tokio::test]
async fn test_http_transport_matches_in_process_dispatch() {
    let stack = TestStack::seeded().await.unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = stack.app();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let transport: Arc<dyn ToolTransport> =
        Arc::new(HttpToolTransport::new(&format!("http://{addr}")));
    let remote = DataAccessAgent::new(transport);
    let mut log = A2ALog::new();

    let customer = remote.get_customer(3, &mut log).await.unwrap();
    assert_eq!(customer.name, "Carol Davis");

    let missing = remote.get_customer(123, &mut log).await.unwrap_err();
    assert_eq!(missing.kind, ToolErrorKind::NotFound);

    let local = stack.data_agent().get_customer(3, &mut log).await.unwrap();
    assert_eq!(customer, local);
}
