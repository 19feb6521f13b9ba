// ABOUTME: Router/orchestrator: classify, plan, execute steps strictly in sequence, synthesize
// ABOUTME: Always returns an outcome; step failures are recorded and rendered, never raised
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Router
//!
//! Per-request state machine:
//! `RECEIVED -> CLASSIFIED -> PLANNED -> EXECUTING(i = 1..n) -> SYNTHESIZED`.
//!
//! No step starts before the previous step's outcome and log entries are
//! recorded. A step is skipped (and the skip logged) when it needs a customer
//! id that is not available, or when the step it depends on produced no data.

use serde::{Deserialize, Serialize};
use switchboard_core::constants::agents;
use switchboard_core::errors::ToolFailure;
use tracing::{debug, info};
use uuid::Uuid;

use super::extract;
use super::intent::{Intent, IntentClassifier};
use super::plan::{build_plan, DelegationStep, Operation, PlanContext, StepOutcome, StepOutput};
use super::synthesis;
use crate::a2a::{A2ALog, DataAccessAgent, SupportAgent};
use crate::context::AgentContext;

/// Lifecycle of one routed request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RequestState {
    /// Text accepted
    Received,
    /// Intents detected
    Classified,
    /// Steps built
    Planned,
    /// Running step `step` (1-based)
    Executing {
        /// Current step
        step: usize,
    },
    /// Response rendered
    Synthesized,
}

/// Input to [`Router::route`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRequest {
    /// Free-text request
    pub text: String,
    /// Customer the caller is acting for; an id written in the text takes precedence
    #[serde(default)]
    pub customer_id: Option<i64>,
}

impl RouteRequest {
    /// Request with text only
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            customer_id: None,
        }
    }

    /// Attach the caller's customer id
    #[must_use]
    pub const fn for_customer(mut self, customer_id: i64) -> Self {
        self.customer_id = Some(customer_id);
        self
    }
}

/// Everything produced while serving one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteOutcome {
    /// Correlation id
    pub request_id: String,
    /// Customer the plan addressed
    pub customer_id: Option<i64>,
    /// Detected intents in text order
    pub intents: Vec<Intent>,
    /// Executed plan
    pub plan: Vec<DelegationStep>,
    /// Inter-agent exchanges in order
    pub log: A2ALog,
    /// Synthesized answer
    pub response: String,
    /// Final state
    pub state: RequestState,
}

/// Intent router and plan executor
#[derive(Clone)]
pub struct Router {
    classifier: IntentClassifier,
    data_agent: DataAccessAgent,
    support_agent: SupportAgent,
    report_customer_limit: u32,
}

impl Router {
    /// Create a router whose agents share the context's transport
    #[must_use]
    pub fn new(ctx: &AgentContext) -> Self {
        let data_agent = DataAccessAgent::new(ctx.transport());
        Self {
            classifier: IntentClassifier::new(),
            support_agent: SupportAgent::new(data_agent.clone()),
            data_agent,
            report_customer_limit: ctx.report_customer_limit(),
        }
    }

    /// Serve one request; never fails
    pub async fn route(&self, request: RouteRequest) -> RouteOutcome {
        let request_id = Uuid::new_v4().to_string();
        let mut state = RequestState::Received;
        debug!(request_id = %request_id, ?state, "Routing request");

        let detected = self.classifier.detect(&request.text);
        let intents: Vec<Intent> = detected.iter().map(|d| d.intent).collect();
        state = RequestState::Classified;
        debug!(request_id = %request_id, ?state, ?intents, "Classified request");

        let customer_id = extract::customer_id(&request.text).or(request.customer_id);
        let mut plan = build_plan(
            &intents,
            &PlanContext {
                text: &request.text,
                customer_id,
                report_customer_limit: self.report_customer_limit,
            },
        );
        state = RequestState::Planned;
        debug!(request_id = %request_id, ?state, steps = plan.len(), "Planned request");

        let mut log = A2ALog::new();
        for i in 0..plan.len() {
            state = RequestState::Executing { step: i + 1 };
            debug!(request_id = %request_id, ?state, "Executing step");
            let outcome = self.execute_step(&plan, i, &mut log).await;
            if let Some(step) = plan.get_mut(i) {
                step.outcome = outcome;
            }
        }

        let response = synthesis::render(&plan);
        state = RequestState::Synthesized;
        info!(
            request_id = %request_id,
            intents = ?intents,
            steps = plan.len(),
            log_entries = log.len(),
            "Request synthesized"
        );

        RouteOutcome {
            request_id,
            customer_id,
            intents,
            plan,
            log,
            response,
            state,
        }
    }

    async fn execute_step(
        &self,
        plan: &[DelegationStep],
        position: usize,
        log: &mut A2ALog,
    ) -> StepOutcome {
        let Some(step) = plan.get(position) else {
            return StepOutcome::Pending;
        };
        let callee = step.specialist.agent_name();
        let operation_name = step.operation.name();

        let upstream = match step.depends_on {
            Some(dep) => match dep
                .checked_sub(1)
                .and_then(|i| plan.get(i))
                .and_then(|s| s.outcome.output())
            {
                Some(output) => Some(output),
                None => {
                    return skip(
                        step,
                        log,
                        &format!("step {dep} did not produce the data it needs"),
                    )
                }
            },
            None => None,
        };

        if step.operation.needs_customer() && step.operation.customer_id().is_none() {
            return skip(step, log, "no customer id was provided");
        }

        if let Operation::UpdateCustomer { data, .. } = &step.operation {
            if data.is_empty() {
                log.begin_step(step.index, agents::ROUTER);
                log.record_skip(callee, operation_name, "no field to update");
                return StepOutcome::Failed {
                    error: ToolFailure::invalid_params("no field to update"),
                };
            }
        }

        log.begin_step(step.index, step.specialist.caller());
        let result = self.dispatch(&step.operation, upstream, log).await;
        match result {
            Ok(output) => StepOutcome::Completed { output },
            Err(error) => {
                debug!(step = step.index, kind = %error.kind, "Step failed");
                StepOutcome::Failed { error }
            }
        }
    }

    async fn dispatch(
        &self,
        operation: &Operation,
        upstream: Option<&StepOutput>,
        log: &mut A2ALog,
    ) -> Result<StepOutput, ToolFailure> {
        let data = &self.data_agent;
        let support = &self.support_agent;
        let missing_id = || ToolFailure::invalid_params("customer_id is required");

        match operation {
            Operation::GetCustomer { customer_id } => {
                let id = customer_id.ok_or_else(missing_id)?;
                data.get_customer(id, log).await.map(StepOutput::Customer)
            }
            Operation::UpdateCustomer {
                customer_id,
                data: update,
            } => {
                let id = customer_id.ok_or_else(missing_id)?;
                data.update_customer(id, update, log)
                    .await
                    .map(StepOutput::Customer)
            }
            Operation::GetCustomerHistory { customer_id } => {
                let id = customer_id.ok_or_else(missing_id)?;
                data.get_customer_history(id, log)
                    .await
                    .map(StepOutput::Tickets)
            }
            Operation::ListCustomers { status, limit } => data
                .list_customers(*status, Some(*limit), log)
                .await
                .map(StepOutput::Customers),
            Operation::OpenTicket {
                customer_id,
                issue,
                priority,
            } => {
                let id = customer_id.ok_or_else(missing_id)?;
                support
                    .open_ticket(id, issue, *priority, log)
                    .await
                    .map(StepOutput::Ticket)
            }
            Operation::EscalateDuplicateCharge { customer_id, issue } => {
                let id = customer_id.ok_or_else(missing_id)?;
                support
                    .escalate_duplicate_charge(id, issue, log)
                    .await
                    .map(StepOutput::Ticket)
            }
            Operation::NegotiateCancellation { customer_id, issue } => {
                let id = customer_id.ok_or_else(missing_id)?;
                support
                    .negotiate_cancellation(id, issue, log)
                    .await
                    .map(StepOutput::Ticket)
            }
            Operation::OpenTicketReport => {
                let Some(StepOutput::Customers(customers)) = upstream else {
                    return Err(ToolFailure::invalid_params(
                        "open ticket report needs a customer listing",
                    ));
                };
                Ok(StepOutput::Report(
                    support.open_ticket_report(customers, log).await,
                ))
            }
        }
    }
}

fn skip(step: &DelegationStep, log: &mut A2ALog, reason: &str) -> StepOutcome {
    log.begin_step(step.index, agents::ROUTER);
    log.record_skip(step.specialist.agent_name(), step.operation.name(), reason);
    debug!(step = step.index, reason, "Step skipped");
    StepOutcome::Skipped {
        reason: reason.to_owned(),
    }
}
