// ABOUTME: Delegation plan model and the intent-to-steps planner
// ABOUTME: Producer steps always precede the consumer steps that depend on them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Delegation Planning
//!
//! Each detected intent becomes one or more [`DelegationStep`]s, in intent order.
//! Steps are numbered from 1. A step with `depends_on` consumes the output of an
//! earlier step and is skipped if that step produced no data.

use serde::{Deserialize, Serialize};
use switchboard_core::constants::{agents, tools};
use switchboard_core::errors::ToolFailure;
use switchboard_core::models::{
    Customer, CustomerStatus, CustomerUpdate, Ticket, TicketPriority,
};

use super::extract;
use super::intent::Intent;
use crate::a2a::TicketReport;

/// Agent a step is delegated to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Specialist {
    /// Data access agent (one tool call)
    DataAccess,
    /// Support specialist (domain rules)
    Support,
}

impl Specialist {
    /// Agent identity used in the A2A log
    #[must_use]
    pub const fn agent_name(self) -> &'static str {
        match self {
            Self::DataAccess => agents::DATA_ACCESS,
            Self::Support => agents::SUPPORT,
        }
    }

    /// Who makes the tool calls for steps delegated to this specialist
    #[must_use]
    pub const fn caller(self) -> &'static str {
        match self {
            Self::DataAccess => agents::ROUTER,
            Self::Support => agents::SUPPORT,
        }
    }
}

/// Requested operation and its input parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "operation", content = "params", rename_all = "snake_case")]
pub enum Operation {
    /// `get_customer`
    GetCustomer {
        /// Target customer
        customer_id: Option<i64>,
    },
    /// `update_customer`
    UpdateCustomer {
        /// Target customer
        customer_id: Option<i64>,
        /// Fields parsed from the request
        data: CustomerUpdate,
    },
    /// `get_customer_history`
    GetCustomerHistory {
        /// Target customer
        customer_id: Option<i64>,
    },
    /// `list_customers`
    ListCustomers {
        /// Status filter
        status: Option<CustomerStatus>,
        /// Row limit
        limit: u32,
    },
    /// Support: open a ticket with the hinted priority
    OpenTicket {
        /// Owning customer
        customer_id: Option<i64>,
        /// Issue text
        issue: String,
        /// Requested priority
        priority: TicketPriority,
    },
    /// Support: duplicate-charge escalation
    EscalateDuplicateCharge {
        /// Owning customer
        customer_id: Option<i64>,
        /// Request text
        issue: String,
    },
    /// Support: cancellation held for billing review
    NegotiateCancellation {
        /// Owning customer
        customer_id: Option<i64>,
        /// Request text
        issue: String,
    },
    /// Support: open-ticket report over the customers of the step it depends on
    OpenTicketReport,
}

impl Operation {
    /// Tool or specialist operation name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::GetCustomer { .. } => tools::GET_CUSTOMER,
            Self::UpdateCustomer { .. } => tools::UPDATE_CUSTOMER,
            Self::GetCustomerHistory { .. } => tools::GET_CUSTOMER_HISTORY,
            Self::ListCustomers { .. } => tools::LIST_CUSTOMERS,
            Self::OpenTicket { .. } => "open_ticket",
            Self::EscalateDuplicateCharge { .. } => "escalate_duplicate_charge",
            Self::NegotiateCancellation { .. } => "negotiate_cancellation",
            Self::OpenTicketReport => "open_ticket_report",
        }
    }

    /// Whether the operation addresses one customer
    #[must_use]
    pub const fn needs_customer(&self) -> bool {
        !matches!(self, Self::ListCustomers { .. } | Self::OpenTicketReport)
    }

    /// Customer the operation addresses, when known
    #[must_use]
    pub const fn customer_id(&self) -> Option<i64> {
        match self {
            Self::GetCustomer { customer_id }
            | Self::UpdateCustomer { customer_id, .. }
            | Self::GetCustomerHistory { customer_id }
            | Self::OpenTicket { customer_id, .. }
            | Self::EscalateDuplicateCharge { customer_id, .. }
            | Self::NegotiateCancellation { customer_id, .. } => *customer_id,
            Self::ListCustomers { .. } | Self::OpenTicketReport => None,
        }
    }
}

/// Data produced by a completed step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum StepOutput {
    /// One customer
    Customer(Customer),
    /// Customers in id order
    Customers(Vec<Customer>),
    /// One ticket
    Ticket(Ticket),
    /// Tickets in id order
    Tickets(Vec<Ticket>),
    /// Open-ticket report
    Report(TicketReport),
}

/// Execution state of one step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepOutcome {
    /// Not executed yet
    #[default]
    Pending,
    /// Produced data
    Completed {
        /// The data
        output: StepOutput,
    },
    /// Produced a structured failure
    Failed {
        /// The failure, kind preserved
        error: ToolFailure,
    },
    /// Not executed
    Skipped {
        /// Why
        reason: String,
    },
}

impl StepOutcome {
    /// Output of a completed step
    #[must_use]
    pub const fn output(&self) -> Option<&StepOutput> {
        match self {
            Self::Completed { output } => Some(output),
            _ => None,
        }
    }
}

/// One planned unit of work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegationStep {
    /// Position in the plan, starting at 1
    pub index: usize,
    /// Intent this step serves
    pub intent: Intent,
    /// Target specialist
    pub specialist: Specialist,
    /// Requested operation and parameters
    #[serde(flatten)]
    pub operation: Operation,
    /// Earlier step whose output this step consumes
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub depends_on: Option<usize>,
    /// Result after execution
    pub outcome: StepOutcome,
}

/// Planning inputs that do not come from the intent itself
#[derive(Debug, Clone, Copy)]
pub struct PlanContext<'a> {
    /// Original request text
    pub text: &'a str,
    /// Customer the request concerns, if known
    pub customer_id: Option<i64>,
    /// Customers fetched for the open-ticket report
    pub report_customer_limit: u32,
}

/// Build the ordered plan for `intents`
#[must_use]
pub fn build_plan(intents: &[Intent], ctx: &PlanContext<'_>) -> Vec<DelegationStep> {
    let mut steps: Vec<DelegationStep> = Vec::new();
    let text = ctx.text.trim();
    let customer_id = ctx.customer_id;

    let mut push = |intent: Intent,
                    specialist: Specialist,
                    operation: Operation,
                    depends_on: Option<usize>|
     -> usize {
        let index = steps.len() + 1;
        steps.push(DelegationStep {
            index,
            intent,
            specialist,
            operation,
            depends_on,
            outcome: StepOutcome::Pending,
        });
        index
    };

    for &intent in intents {
        match intent {
            Intent::Lookup => {
                push(
                    intent,
                    Specialist::DataAccess,
                    Operation::GetCustomer { customer_id },
                    None,
                );
            }
            Intent::Update => {
                push(
                    intent,
                    Specialist::DataAccess,
                    Operation::UpdateCustomer {
                        customer_id,
                        data: extract::update_fields(text),
                    },
                    None,
                );
            }
            Intent::History => {
                push(
                    intent,
                    Specialist::DataAccess,
                    Operation::GetCustomerHistory { customer_id },
                    None,
                );
            }
            Intent::CreateTicket => {
                push(
                    intent,
                    Specialist::Support,
                    Operation::OpenTicket {
                        customer_id,
                        issue: text.to_owned(),
                        priority: extract::priority_hint(text).unwrap_or(TicketPriority::Medium),
                    },
                    None,
                );
            }
            Intent::Escalation => {
                push(
                    intent,
                    Specialist::Support,
                    Operation::EscalateDuplicateCharge {
                        customer_id,
                        issue: text.to_owned(),
                    },
                    None,
                );
            }
            Intent::Negotiation => {
                push(
                    intent,
                    Specialist::Support,
                    Operation::NegotiateCancellation {
                        customer_id,
                        issue: text.to_owned(),
                    },
                    None,
                );
            }
            Intent::Report => {
                let producer = push(
                    intent,
                    Specialist::DataAccess,
                    Operation::ListCustomers {
                        status: Some(CustomerStatus::Active),
                        limit: ctx.report_customer_limit,
                    },
                    None,
                );
                push(
                    intent,
                    Specialist::Support,
                    Operation::OpenTicketReport,
                    Some(producer),
                );
            }
        }
    }

    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(intents: &[Intent], text: &str) -> Vec<DelegationStep> {
        build_plan(
            intents,
            &PlanContext {
                text,
                customer_id: Some(1),
                report_customer_limit: 100,
            },
        )
    }

    #[test]
    fn test_escalation_is_single_support_step() {
        let steps = plan(&[Intent::Escalation], "I was charged twice, low priority");
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].specialist, Specialist::Support);
        assert!(matches!(
            steps[0].operation,
            Operation::EscalateDuplicateCharge {
                customer_id: Some(1),
                ..
            }
        ));
    }

    #[test]
    fn test_report_producer_precedes_consumer() {
        let steps = plan(&[Intent::Report], "run a report");
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].operation.name(), "list_customers");
        assert_eq!(steps[1].depends_on, Some(1));
        assert_eq!(steps[1].index, 2);
    }

    #[test]
    fn test_create_ticket_uses_priority_hint() {
        let steps = plan(&[Intent::CreateTicket], "Open a ticket, this is urgent");
        assert!(matches!(
            steps[0].operation,
            Operation::OpenTicket {
                priority: TicketPriority::High,
                ..
            }
        ));

        let steps = plan(&[Intent::CreateTicket], "Open a ticket about my login");
        assert!(matches!(
            steps[0].operation,
            Operation::OpenTicket {
                priority: TicketPriority::Medium,
                ..
            }
        ));
    }

    #[test]
    fn test_step_serializes_operation_and_params() {
        let steps = plan(&[Intent::History], "history");
        let json = serde_json::to_value(&steps[0]).unwrap();
        assert_eq!(json["operation"], "get_customer_history");
        assert_eq!(json["params"]["customer_id"], 1);
        assert_eq!(json["specialist"], "data_access");
        assert_eq!(json["outcome"]["status"], "pending");
    }
}
