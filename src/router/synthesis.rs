// ABOUTME: Renders executed plan steps into one plain-language response
// ABOUTME: Failed and skipped steps become explicit notices, never silent omissions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use std::fmt::Write as _;

use switchboard_core::errors::{ToolErrorKind, ToolFailure};
use switchboard_core::models::{Customer, Ticket};

use super::plan::{DelegationStep, Operation, StepOutcome, StepOutput};
use crate::a2a::TicketReport;

/// Response for a request with no recognizable intent
pub const CLARIFICATION_PROMPT: &str = "I could not tell what you need. You can ask me to look up \
     your account, update your email, phone or name, show your ticket history, open a ticket, \
     report a duplicate charge, or generate a report of active customers with open tickets.";

/// One line per step, in plan order
#[must_use]
pub fn render(steps: &[DelegationStep]) -> String {
    if steps.is_empty() {
        return CLARIFICATION_PROMPT.to_owned();
    }
    steps
        .iter()
        .map(render_step)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_step(step: &DelegationStep) -> String {
    match &step.outcome {
        StepOutcome::Completed { output } => render_output(&step.operation, output),
        StepOutcome::Failed { error } => format!(
            "Could not {}: {}",
            action(&step.operation),
            failure_notice(error)
        ),
        StepOutcome::Skipped { reason } => {
            format!("Skipped the request to {}: {reason}.", action(&step.operation))
        }
        StepOutcome::Pending => format!("Did not get to {}.", action(&step.operation)),
    }
}

fn action(operation: &Operation) -> String {
    let customer = operation
        .customer_id()
        .map_or_else(String::new, |id| format!(" for customer #{id}"));
    match operation {
        Operation::GetCustomer { .. } => format!("look up the account{customer}"),
        Operation::UpdateCustomer { .. } => format!("update the account{customer}"),
        Operation::GetCustomerHistory { .. } => format!("fetch the ticket history{customer}"),
        Operation::ListCustomers { .. } => "list customers".to_owned(),
        Operation::OpenTicket { .. } => format!("open a ticket{customer}"),
        Operation::EscalateDuplicateCharge { .. } => {
            format!("escalate the duplicate charge{customer}")
        }
        Operation::NegotiateCancellation { .. } => {
            format!("review the cancellation request{customer}")
        }
        Operation::OpenTicketReport => "build the open ticket report".to_owned(),
    }
}

fn failure_notice(error: &ToolFailure) -> String {
    match error.kind {
        ToolErrorKind::NotFound => format!("{}.", capitalize(&error.message)),
        ToolErrorKind::InvalidParams => format!("the request was not valid ({}).", error.message),
        ToolErrorKind::UnknownTool => "that operation is not supported.".to_owned(),
        ToolErrorKind::DependencyUnavailable => {
            "the customer data service is unavailable right now, please try again later."
                .to_owned()
        }
    }
}

fn render_output(operation: &Operation, output: &StepOutput) -> String {
    match (operation, output) {
        (Operation::UpdateCustomer { data, .. }, StepOutput::Customer(customer)) => {
            let fields: Vec<&str> = data.fields().into_iter().map(|f| f.key()).collect();
            format!(
                "Updated {} for customer #{}. {}",
                fields.join(", "),
                customer.id,
                describe_customer(customer)
            )
        }
        (_, StepOutput::Customer(customer)) => describe_customer(customer),
        (Operation::EscalateDuplicateCharge { .. }, StepOutput::Ticket(ticket)) => format!(
            "Escalated: created {} priority ticket #{} for customer #{} so billing can review \
             the duplicate charge and refund.",
            ticket.priority, ticket.id, ticket.customer_id
        ),
        (Operation::NegotiateCancellation { .. }, StepOutput::Ticket(ticket)) => format!(
            "Your cancellation is on hold while we review the billing dispute: created {} \
             priority ticket #{} for customer #{}.",
            ticket.priority, ticket.id, ticket.customer_id
        ),
        (_, StepOutput::Ticket(ticket)) => format!(
            "Opened {} priority ticket #{} for customer #{}.",
            ticket.priority, ticket.id, ticket.customer_id
        ),
        (_, StepOutput::Tickets(tickets)) => {
            describe_history(operation.customer_id(), tickets)
        }
        (_, StepOutput::Customers(customers)) => {
            let noun = if customers.len() == 1 {
                "customer"
            } else {
                "customers"
            };
            format!("Found {} matching {noun}.", customers.len())
        }
        (_, StepOutput::Report(report)) => describe_report(report),
    }
}

fn describe_customer(customer: &Customer) -> String {
    format!(
        "Customer #{} {} ({}), email {}, phone {}.",
        customer.id,
        customer.name,
        customer.status,
        customer.email.as_deref().unwrap_or("not on file"),
        customer.phone.as_deref().unwrap_or("not on file"),
    )
}

fn describe_ticket(ticket: &Ticket) -> String {
    format!(
        "#{} [{}, {}] {}",
        ticket.id, ticket.status, ticket.priority, ticket.issue
    )
}

fn describe_history(customer_id: Option<i64>, tickets: &[Ticket]) -> String {
    let who = customer_id.map_or_else(|| "the customer".to_owned(), |id| format!("customer #{id}"));
    if tickets.is_empty() {
        return format!("No tickets on file for {who}.");
    }
    let listed: Vec<String> = tickets.iter().map(describe_ticket).collect();
    format!(
        "Ticket history for {who} ({} total): {}.",
        tickets.len(),
        listed.join("; ")
    )
}

fn describe_report(report: &TicketReport) -> String {
    let mut text = if report.entries.is_empty() {
        format!(
            "Open ticket report: none of the {} active customers checked have open tickets.",
            report.customers_checked
        )
    } else {
        let mut text = format!(
            "Open ticket report: {} of {} active customers have {} open tickets.",
            report.entries.len(),
            report.customers_checked,
            report.open_ticket_count()
        );
        for entry in &report.entries {
            let tickets: Vec<String> = entry.open_tickets.iter().map(describe_ticket).collect();
            let _ = write!(
                text,
                " Customer #{} {}: {}.",
                entry.customer.id,
                entry.customer.name,
                tickets.join("; ")
            );
        }
        text
    };
    if !report.gaps.is_empty() {
        let ids: Vec<String> = report
            .gaps
            .iter()
            .map(|gap| format!("#{}", gap.customer_id))
            .collect();
        let _ = write!(
            text,
            " History was unavailable for customers {}.",
            ids.join(", ")
        );
    }
    text
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
