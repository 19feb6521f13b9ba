// ABOUTME: Integration tests for the tool server dispatcher over a seeded SQLite store
// ABOUTME: Covers the five tools, schema validation, and the response envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use serde_json::{json, Value};
use switchboard::errors::ToolErrorKind;
use switchboard::models::{Customer, CustomerStatus, Ticket, TicketPriority, TicketStatus};
use switchboard::tools::{ToolRequest, ToolResponse};

use common::{ticket_count, TestStack};

async fn call(stack: &TestStack, tool: &str, arguments: Value) -> ToolResponse {
    stack
        .tool_server
        .dispatch(ToolRequest::new(tool, arguments))
        .await
}

fn failure_kind(response: ToolResponse) -> ToolErrorKind {
    response.into_result().unwrap_err().kind
}

// ============================================================================
// get_customer
// ============================================================================

#[tokio::test]
async fn test_get_customer_returns_full_record() {
    let stack = TestStack::seeded().await.unwrap();

    let data = call(&stack, "get_customer", json!({"customer_id": 1}))
        .await
        .into_result()
        .unwrap();
    let customer: Customer = serde_json::from_value(data).unwrap();

    assert_eq!(customer.id, 1);
    assert_eq!(customer.name, "Alice Johnson");
    assert_eq!(customer.status, CustomerStatus::Active);
    assert!(customer.email.is_some());
}

#[tokio::test]
async fn test_missing_customers_are_not_found() {
    let stack = TestStack::seeded().await.unwrap();

    for id in [6, 42, 9999] {
        let lookup = call(&stack, "get_customer", json!({"customer_id": id})).await;
        assert_eq!(failure_kind(lookup), ToolErrorKind::NotFound);

        let history = call(&stack, "get_customer_history", json!({"customer_id": id})).await;
        assert_eq!(failure_kind(history), ToolErrorKind::NotFound);
    }
}

#[tokio::test]
async fn test_get_customer_requires_id() {
    let stack = TestStack::seeded().await.unwrap();

    let response = call(&stack, "get_customer", json!({})).await;
    let failure = response.into_result().unwrap_err();
    assert_eq!(failure.kind, ToolErrorKind::InvalidParams);
    assert!(failure.message.contains("customer_id"));
}

#[tokio::test]
async fn test_customer_id_must_be_positive_integer() {
    let stack = TestStack::seeded().await.unwrap();

    for bad in [json!(0), json!(-3), json!("1"), json!(1.5)] {
        let response = call(&stack, "get_customer", json!({"customer_id": bad})).await;
        assert_eq!(failure_kind(response), ToolErrorKind::InvalidParams);
    }
}

// ============================================================================
// list_customers
// ============================================================================

#[tokio::test]
async fn test_list_active_with_limit_is_bounded_and_stable() {
    let stack = TestStack::seeded().await.unwrap();
    let args = json!({"status": "active", "limit": 2});

    let first: Vec<Customer> = serde_json::from_value(
        call(&stack, "list_customers", args.clone())
            .await
            .into_result()
            .unwrap(),
    )
    .unwrap();
    let second: Vec<Customer> = serde_json::from_value(
        call(&stack, "list_customers", args).await.into_result().unwrap(),
    )
    .unwrap();

    assert!(first.len() <= 2);
    assert!(first.iter().all(|c| c.status == CustomerStatus::Active));
    assert_eq!(first, second);
    assert_eq!(first.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2]);
}

#[tokio::test]
async fn test_list_without_filter_returns_all_in_id_order() {
    let stack = TestStack::seeded().await.unwrap();

    let customers: Vec<Customer> = serde_json::from_value(
        call(&stack, "list_customers", Value::Null)
            .await
            .into_result()
            .unwrap(),
    )
    .unwrap();

    assert_eq!(
        customers.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![1, 2, 3, 4, 5]
    );
}

#[tokio::test]
async fn test_list_rejects_non_positive_limit_and_bad_status() {
    let stack = TestStack::seeded().await.unwrap();

    for args in [
        json!({"limit": 0}),
        json!({"limit": -1}),
        json!({"status": "suspended"}),
    ] {
        let response = call(&stack, "list_customers", args).await;
        assert_eq!(failure_kind(response), ToolErrorKind::InvalidParams);
    }
}

// ============================================================================
// update_customer
// ============================================================================

#[tokio::test]
async fn test_update_applies_only_present_fields() {
    let stack = TestStack::seeded().await.unwrap();

    let data = call(
        &stack,
        "update_customer",
        json!({"customer_id": 2, "data": {"email": "bob@new.example"}}),
    )
    .await
    .into_result()
    .unwrap();
    let updated: Customer = serde_json::from_value(data).unwrap();

    assert_eq!(updated.email.as_deref(), Some("bob@new.example"));
    assert_eq!(updated.name, "Bob Smith");
    assert_eq!(updated.phone.as_deref(), Some("+1-555-0102"));
    assert!(updated.updated_at >= updated.created_at);
}

#[tokio::test]
async fn test_update_can_disable_customer() {
    let stack = TestStack::seeded().await.unwrap();

    let data = call(
        &stack,
        "update_customer",
        json!({"customer_id": 5, "data": {"status": "disabled"}}),
    )
    .await
    .into_result()
    .unwrap();
    let updated: Customer = serde_json::from_value(data).unwrap();
    assert_eq!(updated.status, CustomerStatus::Disabled);
}

#[tokio::test]
async fn test_update_rejects_unknown_and_empty_fields() {
    let stack = TestStack::seeded().await.unwrap();

    for data in [
        json!({"address": "1 Main St"}),
        json!({}),
        json!({"status": "gone"}),
        json!("email=x@y.z"),
    ] {
        let response = call(
            &stack,
            "update_customer",
            json!({"customer_id": 1, "data": data}),
        )
        .await;
        assert_eq!(failure_kind(response), ToolErrorKind::InvalidParams);
    }
}

#[tokio::test]
async fn test_update_missing_customer_is_not_found() {
    let stack = TestStack::seeded().await.unwrap();

    let response = call(
        &stack,
        "update_customer",
        json!({"customer_id": 77, "data": {"name": "Nobody"}}),
    )
    .await;
    assert_eq!(failure_kind(response), ToolErrorKind::NotFound);
}

// ============================================================================
// create_ticket
// ============================================================================

#[tokio::test]
async fn test_create_ticket_starts_open() {
    let stack = TestStack::seeded().await.unwrap();

    let data = call(
        &stack,
        "create_ticket",
        json!({"customer_id": 2, "issue": "App crashes on launch", "priority": "low"}),
    )
    .await
    .into_result()
    .unwrap();
    let ticket: Ticket = serde_json::from_value(data).unwrap();

    assert_eq!(ticket.customer_id, 2);
    assert_eq!(ticket.status, TicketStatus::Open);
    assert_eq!(ticket.priority, TicketPriority::Low);
    assert_eq!(ticket.issue, "App crashes on launch");
}

#[tokio::test]
async fn test_invalid_priority_adds_no_row() {
    let stack = TestStack::seeded().await.unwrap();
    let before = ticket_count(&stack.database).await.unwrap();

    for priority in [json!("urgent"), json!("critical"), json!(3), json!(null)] {
        let response = call(
            &stack,
            "create_ticket",
            json!({"customer_id": 1, "issue": "Broken", "priority": priority}),
        )
        .await;
        assert_eq!(failure_kind(response), ToolErrorKind::InvalidParams);
    }

    assert_eq!(ticket_count(&stack.database).await.unwrap(), before);
}

#[tokio::test]
async fn test_create_ticket_rejects_blank_issue_and_unknown_customer() {
    let stack = TestStack::seeded().await.unwrap();
    let before = ticket_count(&stack.database).await.unwrap();

    let blank = call(
        &stack,
        "create_ticket",
        json!({"customer_id": 1, "issue": "   ", "priority": "high"}),
    )
    .await;
    assert_eq!(failure_kind(blank), ToolErrorKind::InvalidParams);

    let orphan = call(
        &stack,
        "create_ticket",
        json!({"customer_id": 404, "issue": "Lost", "priority": "high"}),
    )
    .await;
    assert_eq!(failure_kind(orphan), ToolErrorKind::NotFound);

    assert_eq!(ticket_count(&stack.database).await.unwrap(), before);
}

// ============================================================================
// get_customer_history
// ============================================================================

#[tokio::test]
async fn test_history_lists_tickets_in_creation_order() {
    let stack = TestStack::seeded().await.unwrap();
    call(
        &stack,
        "create_ticket",
        json!({"customer_id": 1, "issue": "Second problem", "priority": "medium"}),
    )
    .await
    .into_result()
    .unwrap();

    let tickets: Vec<Ticket> = serde_json::from_value(
        call(&stack, "get_customer_history", json!({"customer_id": 1}))
            .await
            .into_result()
            .unwrap(),
    )
    .unwrap();

    assert_eq!(tickets.len(), 2);
    assert!(tickets[0].id < tickets[1].id);
    assert_eq!(tickets[1].issue, "Second problem");
}

#[tokio::test]
async fn test_history_of_customer_without_tickets_is_empty_success() {
    let stack = TestStack::seeded().await.unwrap();
    sqlx::query("DELETE FROM tickets WHERE customer_id = 3")
        .execute(stack.database.pool())
        .await
        .unwrap();

    let data = call(&stack, "get_customer_history", json!({"customer_id": 3}))
        .await
        .into_result()
        .unwrap();
    assert_eq!(data, json!([]));
}

// ============================================================================
// Dispatcher and envelope
// ============================================================================

#[tokio::test]
async fn test_unknown_tool_is_reported() {
    let stack = TestStack::seeded().await.unwrap();

    let response = call(&stack, "delete_customer", json!({"customer_id": 1})).await;
    assert_eq!(failure_kind(response), ToolErrorKind::UnknownTool);
}

#[tokio::test]
async fn test_unexpected_parameter_is_rejected_before_storage() {
    let stack = TestStack::seeded().await.unwrap();

    let response = call(
        &stack,
        "get_customer",
        json!({"customer_id": 1, "include_deleted": true}),
    )
    .await;
    let failure = response.into_result().unwrap_err();
    assert_eq!(failure.kind, ToolErrorKind::InvalidParams);
    assert!(failure.message.contains("include_deleted"));
}

#[tokio::test]
async fn test_envelope_shares_one_discriminator() {
    let stack = TestStack::seeded().await.unwrap();

    let ok = serde_json::to_value(call(&stack, "get_customer", json!({"customer_id": 1})).await)
        .unwrap();
    let err = serde_json::to_value(call(&stack, "get_customer", json!({"customer_id": 99})).await)
        .unwrap();

    assert_eq!(ok["status"], "success");
    assert!(ok["data"].is_object());
    assert_eq!(err["status"], "error");
    assert_eq!(err["error"]["kind"], "NOT_FOUND");
    assert!(err.get("data").is_none());
}

#[tokio::test]
async fn test_closed_store_is_dependency_unavailable() {
    let stack = TestStack::seeded().await.unwrap();
    stack.database.pool().close().await;

    let response = call(&stack, "get_customer", json!({"customer_id": 1})).await;
    assert_eq!(failure_kind(response), ToolErrorKind::DependencyUnavailable);

    // Liveness does not depend on storage, readiness does
    assert_eq!(stack.tool_server.liveness().status, "serving");
    assert!(!stack.tool_server.readiness().await.is_ready());
}

#[tokio::test]
async fn test_registry_exposes_exactly_five_tools() {
    let stack = TestStack::seeded().await.unwrap();

    let names: Vec<String> = stack
        .tool_server
        .tool_schemas()
        .into_iter()
        .map(|schema| schema.name)
        .collect();
    assert_eq!(
        names,
        vec![
            "get_customer",
            "list_customers",
            "update_customer",
            "create_ticket",
            "get_customer_history"
        ]
    );
}
