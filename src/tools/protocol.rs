// ABOUTME: Wire envelope exchanged between agents and the tool server
// ABOUTME: ToolRequest names a tool; ToolResponse is success or structured error under one tag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Tool request/response envelope.
//!
//! ```json
//! {"name": "get_customer", "arguments": {"customer_id": 1}}
//! {"status": "success", "data": {...}}
//! {"status": "error", "error": {"kind": "NOT_FOUND", "message": "customer 9 not found"}}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use switchboard_core::errors::ToolFailure;

/// A call to one named tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolRequest {
    /// Tool name, one of the five registered names
    pub name: String,
    /// Parameter mapping; `null` is treated as an empty mapping
    #[serde(default)]
    pub arguments: Value,
}

impl ToolRequest {
    /// Build a request for `name` with the given arguments object
    #[must_use]
    pub fn new(name: impl Into<String>, arguments: Value) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }
}

/// Result of a tool call; `status` is the single discriminator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ToolResponse {
    /// Tool-specific payload
    Success {
        /// Customer, ticket, or sequence thereof
        data: Value,
    },
    /// Structured failure
    Error {
        /// Kind and message
        error: ToolFailure,
    },
}

impl ToolResponse {
    /// Successful response
    #[must_use]
    pub const fn success(data: Value) -> Self {
        Self::Success { data }
    }

    /// Failed response
    #[must_use]
    pub const fn failure(error: ToolFailure) -> Self {
        Self::Error { error }
    }

    /// Check if this is a success response
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Convert into a `Result`, preserving the failure verbatim
    ///
    /// # Errors
    ///
    /// Returns the carried `ToolFailure` for error responses
    pub fn into_result(self) -> Result<Value, ToolFailure> {
        match self {
            Self::Success { data } => Ok(data),
            Self::Error { error } => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use switchboard_core::errors::ToolErrorKind;

    #[test]
    fn test_error_envelope_shape() {
        let response = ToolResponse::failure(ToolFailure::not_found("customer 9 not found"));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            json!({
                "status": "error",
                "error": {"kind": "NOT_FOUND", "message": "customer 9 not found"}
            })
        );
    }

    #[test]
    fn test_success_envelope_parses_back() {
        let raw = json!({"status": "success", "data": [1, 2]});
        let response: ToolResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(response.into_result().unwrap(), json!([1, 2]));
    }

    #[test]
    fn test_request_without_arguments_defaults_to_null() {
        let request: ToolRequest = serde_json::from_value(json!({"name": "list_customers"})).unwrap();
        assert!(request.arguments.is_null());

        let failure = ToolResponse::failure(ToolFailure::unknown_tool("x")).into_result();
        assert_eq!(failure.unwrap_err().kind, ToolErrorKind::UnknownTool);
    }
}
