// ABOUTME: End-to-end router tests: classification, planning, sequential execution, synthesis
// ABOUTME: Runs free-text requests against an in-process tool server over a seeded store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use switchboard::a2a::{A2ALog, EntryOutcome, ToolTransport};
use switchboard::constants::agents;
use switchboard::context::AgentContext;
use switchboard::errors::{ToolErrorKind, ToolFailure};
use switchboard::models::{CustomerStatus, TicketPriority};
use switchboard::router::{
    Intent, Operation, RequestState, RouteRequest, Router, StepOutcome, StepOutput,
    CLARIFICATION_PROMPT,
};
use switchboard::tools::{ToolRequest, ToolResponse};

use common::{ticket_count, TestStack};

fn ticket_of(outcome: &StepOutcome) -> &switchboard::models::Ticket {
    match outcome.output() {
        Some(StepOutput::Ticket(ticket)) => ticket,
        other => panic!("expected a ticket, got {other:?}"),
    }
}

/// Transport whose tool server is never reachable
struct UnreachableTransport;

#[async_trait]
impl ToolTransport for UnreachableTransport {
    async fn send(&self, _request: ToolRequest) -> ToolResponse {
        ToolResponse::failure(ToolFailure::dependency_unavailable(
            "Tool server unavailable: connection refused",
        ))
    }

    fn describe(&self) -> String {
        "unreachable".to_owned()
    }
}

// ============================================================================
// Canonical scenarios
// ============================================================================

#[tokio::test]
async fn test_duplicate_charge_creates_one_high_priority_ticket() {
    let stack = TestStack::seeded().await.unwrap();
    let router = stack.router();

    let outcome = router
        .route(RouteRequest::new("I was charged twice, please refund").for_customer(1))
        .await;

    assert_eq!(outcome.intents, vec![Intent::Escalation]);
    assert_eq!(outcome.plan.len(), 1);
    assert!(matches!(
        outcome.plan[0].operation,
        Operation::EscalateDuplicateCharge {
            customer_id: Some(1),
            ..
        }
    ));

    let ticket = ticket_of(&outcome.plan[0].outcome);
    assert_eq!(ticket.priority, TicketPriority::High);
    assert_eq!(ticket.customer_id, 1);

    assert_eq!(outcome.log.len(), 1);
    let entry = &outcome.log.entries()[0];
    assert_eq!(entry.callee, agents::DATA_ACCESS);
    assert_eq!(entry.operation, "create_ticket");
    assert_eq!(entry.outcome, EntryOutcome::Ok);

    assert!(outcome.response.contains("high priority"));
    assert!(outcome.response.contains(&format!("#{}", ticket.id)));
    assert_eq!(outcome.state, RequestState::Synthesized);
}

#[tokio::test]
async fn test_gibberish_asks_for_clarification_without_tool_calls() {
    let stack = TestStack::seeded().await.unwrap();
    let before = ticket_count(&stack.database).await.unwrap();

    let outcome = stack.router().route(RouteRequest::new("asdkjasd")).await;

    assert!(outcome.intents.is_empty());
    assert!(outcome.plan.is_empty());
    assert!(outcome.log.is_empty());
    assert_eq!(outcome.response, CLARIFICATION_PROMPT);
    assert_eq!(ticket_count(&stack.database).await.unwrap(), before);
}

#[tokio::test]
async fn test_update_then_history_keeps_text_order() {
    let stack = TestStack::seeded().await.unwrap();

    let outcome = stack
        .router()
        .route(
            RouteRequest::new(
                "Please update my email to alice@new.example and show my ticket history",
            )
            .for_customer(1),
        )
        .await;

    assert_eq!(outcome.intents, vec![Intent::Update, Intent::History]);
    assert_eq!(outcome.plan.len(), 2);

    let operations: Vec<&str> = outcome
        .log
        .entries()
        .iter()
        .map(|e| e.operation.as_str())
        .collect();
    assert_eq!(operations, vec!["update_customer", "get_customer_history"]);

    let lines: Vec<&str> = outcome.response.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Updated email for customer #1"));
    assert!(lines[0].contains("alice@new.example"));
    assert!(lines[1].starts_with("Ticket history for customer #1 (1 total)"));
}

#[tokio::test]
async fn test_escalation_ignores_low_priority_hint() {
    let stack = TestStack::seeded().await.unwrap();

    let outcome = stack
        .router()
        .route(RouteRequest::new(
            "Customer 2 was double charged on the invoice, low priority, no rush",
        ))
        .await;

    assert_eq!(outcome.plan.len(), 1);
    assert_eq!(
        ticket_of(&outcome.plan[0].outcome).priority,
        TicketPriority::High
    );
}

#[tokio::test]
async fn test_cancellation_with_billing_dispute_becomes_medium_ticket() {
    let stack = TestStack::seeded().await.unwrap();

    let outcome = stack
        .router()
        .route(
            RouteRequest::new("I want to cancel my subscription, your billing is wrong")
                .for_customer(4),
        )
        .await;

    assert_eq!(outcome.intents, vec![Intent::Negotiation]);
    let ticket = ticket_of(&outcome.plan[0].outcome);
    assert_eq!(ticket.priority, TicketPriority::Medium);
    assert!(outcome.response.contains("cancellation is on hold"));

    // Cancellation is never honored outright
    let mut log = A2ALog::new();
    let customer = stack.data_agent().get_customer(4, &mut log).await.unwrap();
    assert_eq!(customer.status, CustomerStatus::Active);
}

#[tokio::test]
async fn test_open_ticket_report_runs_producer_before_consumer() {
    let stack = TestStack::seeded().await.unwrap();

    let outcome = stack
        .router()
        .route(RouteRequest::new("Show me all active customers with open tickets"))
        .await;

    assert_eq!(outcome.intents, vec![Intent::Report]);
    assert_eq!(outcome.plan.len(), 2);
    assert_eq!(outcome.plan[1].depends_on, Some(1));

    // list_customers, then one history call per active customer
    assert_eq!(outcome.log.len(), 5);
    assert_eq!(outcome.log.entries()[0].operation, "list_customers");
    assert_eq!(outcome.log.entries()[0].caller, agents::ROUTER);
    assert!(outcome.log.entries()[1..]
        .iter()
        .all(|e| e.caller == agents::SUPPORT && e.step == Some(2)));

    match outcome.plan[1].outcome.output() {
        Some(StepOutput::Report(report)) => {
            assert_eq!(report.customers_checked, 4);
            assert_eq!(report.entries.len(), 2);
        }
        other => panic!("expected a report, got {other:?}"),
    }
    assert!(outcome.response.contains("Open ticket report: 2 of 4"));
}

// ============================================================================
// Failures, skips, and customer resolution
// ============================================================================

#[tokio::test]
async fn test_missing_customer_is_rendered_not_raised() {
    let stack = TestStack::seeded().await.unwrap();

    let outcome = stack
        .router()
        .route(RouteRequest::new("show ticket history for customer 42"))
        .await;

    assert_eq!(outcome.customer_id, Some(42));
    match &outcome.plan[0].outcome {
        StepOutcome::Failed { error } => assert_eq!(error.kind, ToolErrorKind::NotFound),
        other => panic!("expected failure, got {other:?}"),
    }
    assert_eq!(
        outcome.log.entries()[0].outcome,
        EntryOutcome::Failed {
            kind: ToolErrorKind::NotFound
        }
    );
    assert!(outcome
        .response
        .starts_with("Could not fetch the ticket history for customer #42"));
}

#[tokio::test]
async fn test_escalation_without_customer_is_skipped_and_logged() {
    let stack = TestStack::seeded().await.unwrap();
    let before = ticket_count(&stack.database).await.unwrap();

    let outcome = stack
        .router()
        .route(RouteRequest::new("I was charged twice"))
        .await;

    assert!(matches!(outcome.plan[0].outcome, StepOutcome::Skipped { .. }));
    assert_eq!(outcome.log.len(), 1);
    let entry = &outcome.log.entries()[0];
    assert_eq!(entry.outcome, EntryOutcome::Skipped);
    assert_eq!(entry.caller, agents::ROUTER);
    assert_eq!(entry.callee, agents::SUPPORT);
    assert!(outcome.response.contains("no customer id was provided"));
    assert_eq!(ticket_count(&stack.database).await.unwrap(), before);
}

#[tokio::test]
async fn test_id_in_text_overrides_request_customer() {
    let stack = TestStack::seeded().await.unwrap();

    let outcome = stack
        .router()
        .route(RouteRequest::new("look up customer 2").for_customer(1))
        .await;

    assert_eq!(outcome.customer_id, Some(2));
    assert!(outcome.response.contains("Bob Smith"));
}

#[tokio::test]
async fn test_account_help_is_a_lookup() {
    let stack = TestStack::seeded().await.unwrap();

    let outcome = stack
        .router()
        .route(RouteRequest::new(
            "I need help with my account, customer ID 1",
        ))
        .await;

    assert_eq!(outcome.intents, vec![Intent::Lookup]);
    assert_eq!(outcome.customer_id, Some(1));
    assert!(outcome.response.contains("Alice Johnson"));
    assert_eq!(outcome.log.len(), 1);
}

#[tokio::test]
async fn test_digits_inside_an_email_do_not_pick_the_customer() {
    let stack = TestStack::seeded().await.unwrap();

    let outcome = stack
        .router()
        .route(RouteRequest::new("update my email to id2@example.com").for_customer(1))
        .await;

    assert_eq!(outcome.customer_id, Some(1));
    assert!(outcome.response.starts_with("Updated email for customer #1"));

    let agent = stack.data_agent();
    let mut log = A2ALog::new();
    let requester = agent.get_customer(1, &mut log).await.unwrap();
    assert_eq!(requester.email.as_deref(), Some("id2@example.com"));
    let other = agent.get_customer(2, &mut log).await.unwrap();
    assert_ne!(other.email.as_deref(), Some("id2@example.com"));
}

#[tokio::test]
async fn test_order_number_is_not_a_customer_id() {
    let stack = TestStack::seeded().await.unwrap();

    let outcome = stack
        .router()
        .route(RouteRequest::new("Open a ticket: order #12345 never arrived").for_customer(1))
        .await;

    assert_eq!(outcome.customer_id, Some(1));
    let ticket = ticket_of(&outcome.plan[0].outcome);
    assert_eq!(ticket.customer_id, 1);
    assert_eq!(ticket.priority, TicketPriority::Medium);
}

#[tokio::test]
async fn test_plain_high_in_issue_text_keeps_medium_priority() {
    let stack = TestStack::seeded().await.unwrap();

    let outcome = stack
        .router()
        .route(RouteRequest::new("open a ticket, my bill is too high").for_customer(1))
        .await;

    assert_eq!(outcome.intents, vec![Intent::CreateTicket]);
    assert_eq!(
        ticket_of(&outcome.plan[0].outcome).priority,
        TicketPriority::Medium
    );
}

#[tokio::test]
async fn test_failed_producer_skips_dependent_report() {
    let context = AgentContext::new(Arc::new(UnreachableTransport));

    let outcome = Router::new(&context)
        .route(RouteRequest::new("Show me all active customers with open tickets"))
        .await;

    assert_eq!(outcome.plan.len(), 2);
    match &outcome.plan[0].outcome {
        StepOutcome::Failed { error } => {
            assert_eq!(error.kind, ToolErrorKind::DependencyUnavailable);
        }
        other => panic!("expected the listing to fail, got {other:?}"),
    }
    match &outcome.plan[1].outcome {
        StepOutcome::Skipped { reason } => {
            assert!(reason.contains("step 1 did not produce the data it needs"));
        }
        other => panic!("expected the report to be skipped, got {other:?}"),
    }

    let entries = outcome.log.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].operation, "list_customers");
    assert!(matches!(entries[0].outcome, EntryOutcome::Failed { .. }));
    assert_eq!(entries[1].outcome, EntryOutcome::Skipped);
    assert_eq!(entries[1].caller, agents::ROUTER);
    assert_eq!(entries[1].step, Some(2));

    assert!(outcome
        .response
        .contains("step 1 did not produce the data it needs"));
    assert_eq!(outcome.state, RequestState::Synthesized);
}

#[tokio::test]
async fn test_update_without_values_fails_invalid_params() {
    let stack = TestStack::seeded().await.unwrap();

    let outcome = stack
        .router()
        .route(RouteRequest::new("update my phone please").for_customer(1))
        .await;

    match &outcome.plan[0].outcome {
        StepOutcome::Failed { error } => assert_eq!(error.kind, ToolErrorKind::InvalidParams),
        other => panic!("expected failure, got {other:?}"),
    }
    assert_eq!(outcome.log.len(), 1);
    assert_eq!(outcome.log.entries()[0].outcome, EntryOutcome::Skipped);
}

#[tokio::test]
async fn test_independent_steps_continue_after_failure() {
    let stack = TestStack::seeded().await.unwrap();

    let outcome = stack
        .router()
        .route(
            RouteRequest::new("update my email to who@nowhere.example and show my ticket history")
                .for_customer(99),
        )
        .await;

    assert_eq!(outcome.plan.len(), 2);
    assert_eq!(outcome.log.len(), 2);
    assert!(outcome
        .plan
        .iter()
        .all(|step| matches!(step.outcome, StepOutcome::Failed { .. })));
    assert_eq!(outcome.response.lines().count(), 2);
}

#[tokio::test]
async fn test_outcome_serializes_for_http_callers() {
    let stack = TestStack::seeded().await.unwrap();

    let outcome = stack
        .router()
        .route(RouteRequest::new("open a ticket, my export is urgent").for_customer(5))
        .await;
    let value = serde_json::to_value(&outcome).unwrap();

    assert_eq!(value["intents"][0], "create-ticket");
    assert_eq!(value["plan"][0]["operation"], "open_ticket");
    assert_eq!(value["plan"][0]["outcome"]["status"], "completed");
    assert_eq!(value["log"][0]["outcome"], "ok");
    assert_eq!(value["state"]["state"], "synthesized");
    assert!(!value["request_id"].as_str().unwrap().is_empty());
}
