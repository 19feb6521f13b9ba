// ABOUTME: Data access agent: one typed method per tool over a ToolTransport
// ABOUTME: No retries, caching, or interpretation; failures pass through with their kind intact
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Data Access Agent
//!
//! Translates a specialist's data need into exactly one [`ToolRequest`].
//! Typed methods append one entry to the caller's [`A2ALog`]; the raw
//! [`DataAccessAgent::call`] does not log.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};
use switchboard_core::constants::{agents, json_fields, tools};
use switchboard_core::errors::ToolFailure;
use switchboard_core::models::{Customer, CustomerStatus, CustomerUpdate, Ticket, TicketPriority};

use super::log::A2ALog;
use super::transport::ToolTransport;
use crate::tools::ToolRequest;

/// Thin client over the tool server
#[derive(Clone)]
pub struct DataAccessAgent {
    transport: Arc<dyn ToolTransport>,
}

impl DataAccessAgent {
    /// Create an agent sending requests through `transport`
    #[must_use]
    pub fn new(transport: Arc<dyn ToolTransport>) -> Self {
        Self { transport }
    }

    /// Send a raw request and unwrap the envelope
    ///
    /// # Errors
    ///
    /// Returns the tool server's failure verbatim
    pub async fn call(&self, request: ToolRequest) -> Result<Value, ToolFailure> {
        self.transport.send(request).await.into_result()
    }

    /// Send a request and append the exchange to `log`
    ///
    /// # Errors
    ///
    /// Returns the tool server's failure verbatim
    pub async fn call_logged(
        &self,
        request: ToolRequest,
        log: &mut A2ALog,
    ) -> Result<Value, ToolFailure> {
        let name = request.name.clone();
        let arguments = request.arguments.clone();
        let result = self.call(request).await;
        log.record_call(agents::DATA_ACCESS, &name, &arguments, &result);
        result
    }

    /// `get_customer`
    ///
    /// # Errors
    ///
    /// `NOT_FOUND` if absent, or any transport/storage failure
    pub async fn get_customer(
        &self,
        customer_id: i64,
        log: &mut A2ALog,
    ) -> Result<Customer, ToolFailure> {
        let request = ToolRequest::new(
            tools::GET_CUSTOMER,
            json!({ json_fields::CUSTOMER_ID: customer_id }),
        );
        decode(tools::GET_CUSTOMER, self.call_logged(request, log).await?)
    }

    /// `list_customers`
    ///
    /// # Errors
    ///
    /// `INVALID_PARAMS` for a bad limit, or any transport/storage failure
    pub async fn list_customers(
        &self,
        status: Option<CustomerStatus>,
        limit: Option<u32>,
        log: &mut A2ALog,
    ) -> Result<Vec<Customer>, ToolFailure> {
        let mut arguments = Map::new();
        if let Some(status) = status {
            arguments.insert(json_fields::STATUS.to_owned(), json!(status));
        }
        if let Some(limit) = limit {
            arguments.insert(json_fields::LIMIT.to_owned(), json!(limit));
        }
        let request = ToolRequest::new(tools::LIST_CUSTOMERS, Value::Object(arguments));
        decode(tools::LIST_CUSTOMERS, self.call_logged(request, log).await?)
    }

    /// `update_customer`
    ///
    /// # Errors
    ///
    /// `NOT_FOUND`, `INVALID_PARAMS`, or any transport/storage failure
    pub async fn update_customer(
        &self,
        customer_id: i64,
        update: &CustomerUpdate,
        log: &mut A2ALog,
    ) -> Result<Customer, ToolFailure> {
        let request = ToolRequest::new(
            tools::UPDATE_CUSTOMER,
            json!({ json_fields::CUSTOMER_ID: customer_id, json_fields::DATA: update }),
        );
        decode(tools::UPDATE_CUSTOMER, self.call_logged(request, log).await?)
    }

    /// `create_ticket`
    ///
    /// # Errors
    ///
    /// `NOT_FOUND` for an unknown customer, `INVALID_PARAMS`, or any transport/storage failure
    pub async fn create_ticket(
        &self,
        customer_id: i64,
        issue: &str,
        priority: TicketPriority,
        log: &mut A2ALog,
    ) -> Result<Ticket, ToolFailure> {
        let request = ToolRequest::new(
            tools::CREATE_TICKET,
            json!({
                json_fields::CUSTOMER_ID: customer_id,
                json_fields::ISSUE: issue,
                json_fields::PRIORITY: priority,
            }),
        );
        decode(tools::CREATE_TICKET, self.call_logged(request, log).await?)
    }

    /// `get_customer_history`
    ///
    /// # Errors
    ///
    /// `NOT_FOUND` if the customer is absent, or any transport/storage failure
    pub async fn get_customer_history(
        &self,
        customer_id: i64,
        log: &mut A2ALog,
    ) -> Result<Vec<Ticket>, ToolFailure> {
        let request = ToolRequest::new(
            tools::GET_CUSTOMER_HISTORY,
            json!({ json_fields::CUSTOMER_ID: customer_id }),
        );
        decode(
            tools::GET_CUSTOMER_HISTORY,
            self.call_logged(request, log).await?,
        )
    }
}

fn decode<T: DeserializeOwned>(tool: &str, data: Value) -> Result<T, ToolFailure> {
    serde_json::from_value(data).map_err(|e| {
        ToolFailure::dependency_unavailable(format!("Undecodable '{tool}' payload: {e}"))
    })
}
