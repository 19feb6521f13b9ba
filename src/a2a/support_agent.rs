// ABOUTME: Support specialist: escalation, cancellation negotiation, tickets, open-ticket report
// ABOUTME: Works only through the data access agent and logs every tool call it causes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Support Specialist
//!
//! Domain rules layered over [`DataAccessAgent`]:
//!
//! - duplicate charges always open a `high` priority ticket
//! - cancellation requests that come with a billing dispute become a `medium`
//!   priority ticket instead of an immediate cancellation
//! - the open-ticket report is a read-only join performed one history call per customer

use serde::{Deserialize, Serialize};
use switchboard_core::errors::ToolFailure;
use switchboard_core::models::{Customer, Ticket, TicketPriority, TicketStatus};
use tracing::{debug, info};

use super::data_agent::DataAccessAgent;
use super::log::A2ALog;

/// Priority applied to duplicate-charge escalations, regardless of any hint
pub const ESCALATION_PRIORITY: TicketPriority = TicketPriority::High;

/// Priority applied to negotiated cancellations
pub const NEGOTIATION_PRIORITY: TicketPriority = TicketPriority::Medium;

/// One customer's open tickets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerOpenTickets {
    /// The customer
    pub customer: Customer,
    /// Tickets with status `open`, in id order
    pub open_tickets: Vec<Ticket>,
}

/// A customer whose history could not be fetched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportGap {
    /// Customer whose history call failed
    pub customer_id: i64,
    /// The failure, verbatim
    pub error: ToolFailure,
}

/// Result of the open-ticket report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketReport {
    /// Number of customers examined
    pub customers_checked: usize,
    /// Customers with at least one open ticket, in input order
    pub entries: Vec<CustomerOpenTickets>,
    /// Customers whose history was unavailable
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub gaps: Vec<ReportGap>,
}

impl TicketReport {
    /// Total open tickets across all entries
    #[must_use]
    pub fn open_ticket_count(&self) -> usize {
        self.entries.iter().map(|e| e.open_tickets.len()).sum()
    }
}

/// Support specialist agent
#[derive(Clone)]
pub struct SupportAgent {
    data: DataAccessAgent,
}

impl SupportAgent {
    /// Create a specialist that reaches data only through `data`
    #[must_use]
    pub const fn new(data: DataAccessAgent) -> Self {
        Self { data }
    }

    /// Open a `high` priority ticket for a duplicate charge
    ///
    /// # Errors
    ///
    /// Propagates the ticket creation failure (e.g. `NOT_FOUND` for an unknown customer)
    pub async fn escalate_duplicate_charge(
        &self,
        customer_id: i64,
        request_text: &str,
        log: &mut A2ALog,
    ) -> Result<Ticket, ToolFailure> {
        let issue = format!("Duplicate charge reported, refund review required: {request_text}");
        let ticket = self
            .data
            .create_ticket(customer_id, &issue, ESCALATION_PRIORITY, log)
            .await?;
        info!(
            customer_id,
            ticket_id = ticket.id,
            "Escalated duplicate charge"
        );
        Ok(ticket)
    }

    /// Hold a cancellation that co-occurs with a billing dispute as a `medium` ticket
    ///
    /// # Errors
    ///
    /// Propagates the ticket creation failure
    pub async fn negotiate_cancellation(
        &self,
        customer_id: i64,
        request_text: &str,
        log: &mut A2ALog,
    ) -> Result<Ticket, ToolFailure> {
        let issue = format!(
            "Cancellation on hold pending billing dispute review: {request_text}"
        );
        let ticket = self
            .data
            .create_ticket(customer_id, &issue, NEGOTIATION_PRIORITY, log)
            .await?;
        info!(
            customer_id,
            ticket_id = ticket.id,
            "Cancellation converted to billing review ticket"
        );
        Ok(ticket)
    }

    /// Open a ticket with the requested priority
    ///
    /// # Errors
    ///
    /// Propagates the ticket creation failure
    pub async fn open_ticket(
        &self,
        customer_id: i64,
        issue: &str,
        priority: TicketPriority,
        log: &mut A2ALog,
    ) -> Result<Ticket, ToolFailure> {
        self.data
            .create_ticket(customer_id, issue, priority, log)
            .await
    }

    /// Join `customers` with their open tickets, one history call per customer
    ///
    /// A failed history call is recorded as a gap; the report continues.
    pub async fn open_ticket_report(
        &self,
        customers: &[Customer],
        log: &mut A2ALog,
    ) -> TicketReport {
        let mut report = TicketReport {
            customers_checked: customers.len(),
            ..TicketReport::default()
        };

        for customer in customers {
            match self.data.get_customer_history(customer.id, log).await {
                Ok(history) => {
                    let open_tickets: Vec<Ticket> = history
                        .into_iter()
                        .filter(|ticket| ticket.status == TicketStatus::Open)
                        .collect();
                    if !open_tickets.is_empty() {
                        report.entries.push(CustomerOpenTickets {
                            customer: customer.clone(),
                            open_tickets,
                        });
                    }
                }
                Err(error) => report.gaps.push(ReportGap {
                    customer_id: customer.id,
                    error,
                }),
            }
        }

        debug!(
            checked = report.customers_checked,
            with_open = report.entries.len(),
            gaps = report.gaps.len(),
            "Built open ticket report"
        );
        report
    }
}
