// ABOUTME: Defines tool-specific error types raised during dispatch, validation, and execution.
// ABOUTME: Every ToolError collapses into exactly one wire-level ToolFailure kind.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Tool Error Types
//!
//! Provides structured error types for tool-related operations:
//! - `ToolError` - Errors specific to tool lookup, parameter validation and execution
//! - Conversion to `ToolFailure` for the response envelope
//!
//! These errors carry more context than the wire kinds so server-side logs stay
//! useful, while callers only ever see the four failure kinds.

use switchboard_core::errors::{ToolErrorKind, ToolFailure};
use thiserror::Error;

use crate::database::DatabaseError;

/// Errors specific to tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Tool was not found in the registry
    #[error("Tool '{tool_name}' is not registered")]
    UnknownTool {
        /// Name of the requested tool
        tool_name: String,
    },

    /// Required parameter is missing
    #[error("Missing required parameter '{parameter}' for tool '{tool_name}'")]
    MissingParameter {
        /// Name of the tool
        tool_name: &'static str,
        /// Name of the missing parameter
        parameter: &'static str,
    },

    /// Tool parameter validation failed
    #[error("Invalid parameter '{parameter}' for tool '{tool_name}': {reason}")]
    InvalidParameter {
        /// Name of the tool
        tool_name: &'static str,
        /// Name of the invalid parameter (`data.<field>` for update payload keys)
        parameter: String,
        /// Reason the parameter is invalid
        reason: String,
    },

    /// Parameter not declared in the tool's schema
    #[error("Unexpected parameter '{parameter}' for tool '{tool_name}'")]
    UnexpectedParameter {
        /// Name of the tool
        tool_name: &'static str,
        /// Name of the undeclared parameter
        parameter: String,
    },

    /// Storage reported a failure
    #[error(transparent)]
    Storage(#[from] DatabaseError),

    /// Tool output could not be encoded as JSON
    #[error("Failed to encode tool output: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl ToolError {
    /// Create an "invalid parameter" error
    #[must_use]
    pub fn invalid_parameter(
        tool_name: &'static str,
        parameter: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            tool_name,
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Wire-level kind this error is reported as
    #[must_use]
    pub const fn kind(&self) -> ToolErrorKind {
        match self {
            Self::UnknownTool { .. } => ToolErrorKind::UnknownTool,
            Self::MissingParameter { .. }
            | Self::InvalidParameter { .. }
            | Self::UnexpectedParameter { .. } => ToolErrorKind::InvalidParams,
            Self::Storage(DatabaseError::NotFound { .. }) => ToolErrorKind::NotFound,
            Self::Storage(_) | Self::Encoding(_) => ToolErrorKind::DependencyUnavailable,
        }
    }
}

impl From<ToolError> for ToolFailure {
    fn from(error: ToolError) -> Self {
        match error {
            ToolError::Storage(storage) => storage.into(),
            other => Self::new(other.kind(), other.to_string()),
        }
    }
}
