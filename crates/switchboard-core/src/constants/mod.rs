// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Tool names, JSON field names, limits, and agent identities for Switchboard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Names of the five registered data tools
pub mod tools {
    /// Fetch one customer record
    pub const GET_CUSTOMER: &str = "get_customer";
    /// List customers, optionally filtered by status
    pub const LIST_CUSTOMERS: &str = "list_customers";
    /// Apply a field-level update to a customer
    pub const UPDATE_CUSTOMER: &str = "update_customer";
    /// Open a ticket for an existing customer
    pub const CREATE_TICKET: &str = "create_ticket";
    /// All tickets for one customer
    pub const GET_CUSTOMER_HISTORY: &str = "get_customer_history";

    /// Registry order, also used for `tools/list`
    pub const ALL: [&str; 5] = [
        GET_CUSTOMER,
        LIST_CUSTOMERS,
        UPDATE_CUSTOMER,
        CREATE_TICKET,
        GET_CUSTOMER_HISTORY,
    ];
}

/// JSON parameter and field names
pub mod json_fields {
    /// Customer identifier parameter
    pub const CUSTOMER_ID: &str = "customer_id";
    /// Status filter / status field
    pub const STATUS: &str = "status";
    /// Maximum number of rows
    pub const LIMIT: &str = "limit";
    /// Update payload object
    pub const DATA: &str = "data";
    /// Ticket issue text
    pub const ISSUE: &str = "issue";
    /// Ticket priority
    pub const PRIORITY: &str = "priority";
    /// Customer name
    pub const NAME: &str = "name";
    /// Customer email
    pub const EMAIL: &str = "email";
    /// Customer phone
    pub const PHONE: &str = "phone";
}

/// Default and bounding limits
pub mod limits {
    /// `list_customers` limit when the caller omits one
    pub const DEFAULT_LIST_LIMIT: u32 = 10;
    /// Customers fetched when building the open-ticket report
    pub const DEFAULT_REPORT_CUSTOMER_LIMIT: u32 = 100;
    /// Longest input summary kept in an A2A log entry
    pub const LOG_SUMMARY_MAX_CHARS: usize = 160;
}

/// Agent identities used as caller/callee in the A2A log
pub mod agents {
    /// Router / orchestrator
    pub const ROUTER: &str = "router";
    /// Support specialist
    pub const SUPPORT: &str = "support_agent";
    /// Data access agent
    pub const DATA_ACCESS: &str = "data_access_agent";
}

/// Service identity
pub mod service {
    /// Service name used in logs and the agent card
    pub const SERVICE_NAME: &str = "switchboard";
    /// Tool server protocol version reported by discovery endpoints
    pub const PROTOCOL_VERSION: &str = "1.0";
    /// MCP revision answered by `initialize`
    pub const MCP_PROTOCOL_VERSION: &str = "2024-11-05";
}

/// Network defaults
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8090;
}
