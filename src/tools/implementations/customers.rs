// ABOUTME: Customer tools: get_customer, list_customers, update_customer
// ABOUTME: Thin forwarders from validated parameters to the customer store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use async_trait::async_trait;
use serde_json::Value;
use switchboard_core::constants::{json_fields, tools};
use tracing::debug;

use crate::context::ToolServerContext;
use crate::database::DatabaseError;
use crate::tools::errors::ToolError;
use crate::tools::params::{ParamKind, ParamSpec, ValidatedParams};
use crate::tools::traits::{DataTool, ToolCapabilities};

const CUSTOMER_ID_DESCRIPTION: &str = "Numeric customer id (integer >= 1)";

/// `get_customer(customer_id)` returns the full record or `NOT_FOUND`
pub struct GetCustomerTool;

#[async_trait]
impl DataTool for GetCustomerTool {
    fn name(&self) -> &'static str {
        tools::GET_CUSTOMER
    }

    fn description(&self) -> &'static str {
        "Fetch one customer record by id"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        const PARAMS: &[ParamSpec] = &[ParamSpec::required(
            json_fields::CUSTOMER_ID,
            ParamKind::CustomerId,
            CUSTOMER_ID_DESCRIPTION,
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
        let customer_id = params.customer_id()?;
        let customer = ctx
            .store()
            .get_customer(customer_id)
            .await?
            .ok_or_else(|| DatabaseError::customer_not_found(customer_id))?;
        Ok(serde_json::to_value(customer)?)
    }
}

/// `list_customers(status?, limit?)` returns customers in id order
pub struct ListCustomersTool;

#[async_trait]
impl DataTool for ListCustomersTool {
    fn name(&self) -> &'static str {
        tools::LIST_CUSTOMERS
    }

    fn description(&self) -> &'static str {
        "List customers in id order, optionally filtered by status and truncated to limit"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        const PARAMS: &[ParamSpec] = &[
            ParamSpec::optional(
                json_fields::STATUS,
                ParamKind::CustomerStatus,
                "Only return customers with this status",
            ),
            ParamSpec::optional(
                json_fields::LIMIT,
                ParamKind::Limit,
                "Maximum number of customers to return (integer >= 1)",
            ),
        ];
        PARAMS
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_DATA
    }

    async fn execute(
        &self,
        ctx: &ToolServerContext,
        params: ValidatedParams,
    ) -> Result<Value, ToolError> {
        let limit = params.limit().unwrap_or_else(|| ctx.default_list_limit());
        let customers = ctx.store().list_customers(params.status(), limit).await?;
        debug!(count = customers.len(), limit, "Listed customers");
        Ok(serde_json::to_value(customers)?)
    }
}

/// `update_customer(customer_id, data)` writes only the fields present in `data`
pub struct UpdateCustomerTool;

#[async_trait]
impl DataTool for UpdateCustomerTool {
    fn name(&self) -> &'static str {
        tools::UPDATE_CUSTOMER
    }

    fn description(&self) -> &'static str {
        "Update name, email, phone or status of a customer and return the updated record"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        const PARAMS: &[ParamSpec] = &[
            ParamSpec::required(
                json_fields::CUSTOMER_ID,
                ParamKind::CustomerId,
                CUSTOMER_ID_DESCRIPTION,
            ),
            ParamSpec::required(
                json_fields::DATA,
                ParamKind::CustomerUpdate,
                "Fields to change; keys limited to name, email, phone, status",
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
        let customer_id = params.customer_id()?;
        let update = params.update()?;
        let customer = ctx.store().update_customer(customer_id, update).await?;
        debug!(
            customer_id,
            fields = ?update.fields(),
            "Updated customer"
        );
        Ok(serde_json::to_value(customer)?)
    }
}
