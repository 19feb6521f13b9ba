// ABOUTME: Tool failure taxonomy shared by the tool server and the agents that call it
// ABOUTME: Serializes as NOT_FOUND, INVALID_PARAMS, UNKNOWN_TOOL, DEPENDENCY_UNAVAILABLE
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Tool Failure Types
//!
//! A [`ToolFailure`] is the error half of every tool response. The tool server
//! creates it, the data access agent forwards it verbatim, and the router renders
//! it as a plain-language notice.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The closed set of failure kinds a tool call can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ToolErrorKind {
    /// Referenced customer or ticket does not exist
    NotFound,
    /// Parameter mapping violates the tool's schema
    InvalidParams,
    /// Tool name is not in the fixed registry
    UnknownTool,
    /// Storage (or the remote tool server) cannot be reached
    DependencyUnavailable,
}

impl ToolErrorKind {
    /// Wire representation of the kind
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::InvalidParams => "INVALID_PARAMS",
            Self::UnknownTool => "UNKNOWN_TOOL",
            Self::DependencyUnavailable => "DEPENDENCY_UNAVAILABLE",
        }
    }
}

impl fmt::Display for ToolErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured failure returned in place of a tool's success payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{kind}: {message}")]
pub struct ToolFailure {
    /// Discriminating failure kind
    pub kind: ToolErrorKind,
    /// Human-readable detail
    pub message: String,
}

impl ToolFailure {
    /// Create a failure of the given kind
    #[must_use]
    pub fn new(kind: ToolErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Referenced entity absent
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::NotFound, message)
    }

    /// Schema violation
    #[must_use]
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::InvalidParams, message)
    }

    /// Tool name not registered
    #[must_use]
    pub fn unknown_tool(tool_name: &str) -> Self {
        Self::new(
            ToolErrorKind::UnknownTool,
            format!("Tool '{tool_name}' is not registered"),
        )
    }

    /// Storage or transport unreachable
    #[must_use]
    pub fn dependency_unavailable(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::DependencyUnavailable, message)
    }
}
