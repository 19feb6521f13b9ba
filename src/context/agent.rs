// ABOUTME: Agent context: the tool transport shared by all agents plus report limits
// ABOUTME: Chooses in-process or remote tool server access once, at construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use std::sync::Arc;

use switchboard_core::constants::limits;

use crate::a2a::{HttpToolTransport, InProcessTransport, ToolTransport};
use crate::tools::ToolServer;

/// Dependencies handed to the router and its specialists
#[derive(Clone)]
pub struct AgentContext {
    transport: Arc<dyn ToolTransport>,
    report_customer_limit: u32,
}

impl AgentContext {
    /// Create a context over an explicit transport
    #[must_use]
    pub fn new(transport: Arc<dyn ToolTransport>) -> Self {
        Self {
            transport,
            report_customer_limit: limits::DEFAULT_REPORT_CUSTOMER_LIMIT,
        }
    }

    /// Agents dispatch directly into `server`
    #[must_use]
    pub fn in_process(server: Arc<ToolServer>) -> Self {
        Self::new(Arc::new(InProcessTransport::new(server)))
    }

    /// Agents call the tool server at `base_url` over HTTP
    #[must_use]
    pub fn remote(base_url: &str) -> Self {
        Self::new(Arc::new(HttpToolTransport::new(base_url)))
    }

    /// Override the number of customers fetched for the open-ticket report
    #[must_use]
    pub const fn with_report_customer_limit(mut self, limit: u32) -> Self {
        self.report_customer_limit = limit;
        self
    }

    /// Shared transport
    #[must_use]
    pub fn transport(&self) -> Arc<dyn ToolTransport> {
        Arc::clone(&self.transport)
    }

    /// Customers fetched for the open-ticket report
    #[must_use]
    pub const fn report_customer_limit(&self) -> u32 {
        self.report_customer_limit
    }
}
