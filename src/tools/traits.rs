// ABOUTME: Defines the DataTool trait and ToolCapabilities for the fixed tool registry.
// ABOUTME: Tools declare their parameters statically and execute only on validated input.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Data Tool Trait and Capabilities
//!
//! All five data tools implement [`DataTool`], which provides:
//! - Tool metadata (name, description, declared parameters)
//! - Capability flags for discovery hints
//! - Async execution against the storage handle in [`ToolServerContext`]
//!
//! `execute` only ever receives arguments that already passed
//! [`validate`](super::params::validate) against `parameters()`.

use async_trait::async_trait;
use bitflags::bitflags;
use serde_json::Value;

use crate::context::ToolServerContext;

use super::errors::ToolError;
use super::params::{ParamSpec, ValidatedParams};
use super::schema::ToolSchema;

bitflags! {
    /// Capabilities that tools can declare for discovery.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ToolCapabilities: u8 {
        /// Tool reads records
        const READS_DATA = 0b0000_0001;
        /// Tool writes/modifies records
        const WRITES_DATA = 0b0000_0010;
        /// Tool addresses a single customer by id
        const REQUIRES_CUSTOMER = 0b0000_0100;
    }
}

impl ToolCapabilities {
    /// Check if tool reads data
    #[must_use]
    pub const fn reads_data(self) -> bool {
        self.contains(Self::READS_DATA)
    }

    /// Check if tool writes data
    #[must_use]
    pub const fn writes_data(self) -> bool {
        self.contains(Self::WRITES_DATA)
    }

    /// Check if tool needs a customer id
    #[must_use]
    pub const fn requires_customer(self) -> bool {
        self.contains(Self::REQUIRES_CUSTOMER)
    }

    /// Get a description of all enabled capabilities for logging
    #[must_use]
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if self.reads_data() {
            parts.push("reads_data");
        }
        if self.writes_data() {
            parts.push("writes_data");
        }
        if self.requires_customer() {
            parts.push("requires_customer");
        }
        if parts.is_empty() {
            "none".to_owned()
        } else {
            parts.join(", ")
        }
    }
}

/// One named, schema-validated data operation
#[async_trait]
pub trait DataTool: Send + Sync {
    /// Registry name
    fn name(&self) -> &'static str;

    /// Human-readable description for discovery
    fn description(&self) -> &'static str;

    /// Declared parameters, checked before `execute` runs
    fn parameters(&self) -> &'static [ParamSpec];

    /// Capability flags
    fn capabilities(&self) -> ToolCapabilities;

    /// Discovery schema derived from the declared parameters
    fn schema(&self) -> ToolSchema {
        ToolSchema::build(
            self.name(),
            self.description(),
            self.parameters(),
            self.capabilities(),
        )
    }

    /// Run the operation against storage
    ///
    /// # Errors
    ///
    /// Returns `ToolError::Storage` for store failures
    async fn execute(
        &self,
        ctx: &ToolServerContext,
        params: ValidatedParams,
    ) -> Result<Value, ToolError>;
}
