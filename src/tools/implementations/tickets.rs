// ABOUTME: Ticket tools: create_ticket and get_customer_history
// ABOUTME: Ticket creation requires an existing customer; new tickets always start open
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use async_trait::async_trait;
use serde_json::Value;
use switchboard_core::constants::{json_fields, tools};
use switchboard_core::models::NewTicket;
use tracing::debug;

use crate::context::ToolServerContext;
use crate::tools::errors::ToolError;
use crate::tools::params::{ParamKind, ParamSpec, ValidatedParams};
use crate::tools::traits::{DataTool, ToolCapabilities};

/// `create_ticket(customer_id, issue, priority)`
pub struct CreateTicketTool;

#[async_trait]
impl DataTool for CreateTicketTool {
    fn name(&self) -> &'static str {
        tools::CREATE_TICKET
    }

    fn description(&self) -> &'static str {
        "Open a support ticket for an existing customer"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        const PARAMS: &[ParamSpec] = &[
            ParamSpec::required(
                json_fields::CUSTOMER_ID,
                ParamKind::CustomerId,
                "Owning customer id (must exist)",
            ),
            ParamSpec::required(
                json_fields::ISSUE,
                ParamKind::IssueText,
                "Issue description (non-empty)",
            ),
            ParamSpec::required(
                json_fields::PRIORITY,
                ParamKind::TicketPriority,
                "Ticket priority",
            ),
        ];
        PARAMS
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::WRITES_DATA | ToolCapabilities::REQUIRES_CUSTOMER
    }

    async fn execute(
        &self,
        ctx: &ToolServerContext,
        params: ValidatedParams,
    ) -> Result<Value, ToolError> {
        let new_ticket = NewTicket {
            customer_id: params.customer_id()?,
            issue: params.issue()?.to_owned(),
            priority: params.priority()?,
        };
        let ticket = ctx.store().create_ticket(&new_ticket).await?;
        debug!(
            ticket_id = ticket.id,
            customer_id = ticket.customer_id,
            priority = %ticket.priority,
            "Created ticket"
        );
        Ok(serde_json::to_value(ticket)?)
    }
}

/// `get_customer_history(customer_id)` returns every ticket of the customer
pub struct GetCustomerHistoryTool;

#[async_trait]
impl DataTool for GetCustomerHistoryTool {
    fn name(&self) -> &'static str {
        tools::GET_CUSTOMER_HISTORY
    }

    fn description(&self) -> &'static str {
        "List all tickets of a customer in id order; empty when the customer has none"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        const PARAMS: &[ParamSpec] = &[ParamSpec::required(
            json_fields::CUSTOMER_ID,
            ParamKind::CustomerId,
            "Numeric customer id (integer >= 1)",
        )];
        PARAMS
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_DATA | ToolCapabilities::REQUIRES_CUSTOMER
    }

    async fn execute(
        &self,
        ctx: &ToolServerContext,
        params: ValidatedParams,
    ) -> Result<Value, ToolError> {
        let tickets = ctx
            .store()
            .get_customer_history(params.customer_id()?)
            .await?;
        Ok(serde_json::to_value(tickets)?)
    }
}
