// ABOUTME: Declarative parameter specs for data tools and the validator that enforces them
// ABOUTME: Only a schema-valid mapping becomes ValidatedParams; everything else is INVALID_PARAMS
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Parameter Validation
//!
//! Each tool declares a static slice of [`ParamSpec`]. [`validate`] checks a raw
//! JSON argument mapping against it before any storage access:
//!
//! 1. `null` arguments are an empty mapping; any other non-object is rejected
//! 2. keys not declared by the tool are rejected
//! 3. declared parameters are checked in declaration order; `null` counts as omitted

use serde_json::{Map, Value};
use switchboard_core::constants::json_fields;
use switchboard_core::models::{CustomerStatus, CustomerUpdate, TicketPriority, UpdatableField};

use super::errors::ToolError;

/// Value domain of a tool parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// JSON integer >= 1
    CustomerId,
    /// JSON integer >= 1 that fits in `u32`
    Limit,
    /// `active` | `disabled`
    CustomerStatus,
    /// Object of updatable fields with string values
    CustomerUpdate,
    /// Non-empty free text
    IssueText,
    /// `low` | `medium` | `high`
    TicketPriority,
}

impl ParamKind {
    /// JSON schema `type` of this kind
    #[must_use]
    pub const fn json_type(self) -> &'static str {
        match self {
            Self::CustomerId | Self::Limit => "integer",
            Self::CustomerStatus | Self::IssueText | Self::TicketPriority => "string",
            Self::CustomerUpdate => "object",
        }
    }

    /// Allowed values for enum-like kinds
    #[must_use]
    pub const fn allowed_values(self) -> Option<&'static [&'static str]> {
        match self {
            Self::CustomerStatus => Some(&["active", "disabled"]),
            Self::TicketPriority => Some(&["low", "medium", "high"]),
            _ => None,
        }
    }

    /// Inclusive lower bound for integer kinds
    #[must_use]
    pub const fn minimum(self) -> Option<i64> {
        match self {
            Self::CustomerId | Self::Limit => Some(1),
            _ => None,
        }
    }
}

/// One declared parameter of a tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    /// JSON key
    pub name: &'static str,
    /// Value domain
    pub kind: ParamKind,
    /// Whether the parameter must be present (and non-null)
    pub required: bool,
    /// Human-readable description for discovery
    pub description: &'static str,
}

impl ParamSpec {
    /// Declare a required parameter
    #[must_use]
    pub const fn required(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: true,
            description,
        }
    }

    /// Declare an optional parameter
    #[must_use]
    pub const fn optional(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: false,
            description,
        }
    }
}

/// Arguments that passed validation, with typed accessors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedParams {
    tool_name: &'static str,
    customer_id: Option<i64>,
    limit: Option<u32>,
    status: Option<CustomerStatus>,
    update: Option<CustomerUpdate>,
    issue: Option<String>,
    priority: Option<TicketPriority>,
}

impl ValidatedParams {
    /// Validated `customer_id`
    ///
    /// # Errors
    ///
    /// Returns `MissingParameter` if the tool did not declare or receive it
    pub fn customer_id(&self) -> Result<i64, ToolError> {
        self.customer_id
            .ok_or_else(|| self.missing(json_fields::CUSTOMER_ID))
    }

    /// Validated `limit`, if supplied
    #[must_use]
    pub const fn limit(&self) -> Option<u32> {
        self.limit
    }

    /// Validated status filter, if supplied
    #[must_use]
    pub const fn status(&self) -> Option<CustomerStatus> {
        self.status
    }

    /// Validated update payload
    ///
    /// # Errors
    ///
    /// Returns `MissingParameter` if absent
    pub fn update(&self) -> Result<&CustomerUpdate, ToolError> {
        self.update
            .as_ref()
            .ok_or_else(|| self.missing(json_fields::DATA))
    }

    /// Validated, trimmed issue text
    ///
    /// # Errors
    ///
    /// Returns `MissingParameter` if absent
    pub fn issue(&self) -> Result<&str, ToolError> {
        self.issue
            .as_deref()
            .ok_or_else(|| self.missing(json_fields::ISSUE))
    }

    /// Validated ticket priority
    ///
    /// # Errors
    ///
    /// Returns `MissingParameter` if absent
    pub fn priority(&self) -> Result<TicketPriority, ToolError> {
        self.priority
            .ok_or_else(|| self.missing(json_fields::PRIORITY))
    }

    const fn missing(&self, parameter: &'static str) -> ToolError {
        ToolError::MissingParameter {
            tool_name: self.tool_name,
            parameter,
        }
    }
}

/// Validate raw `arguments` against a tool's declared parameters
///
/// # Errors
///
/// Returns a validation `ToolError` (all map to `INVALID_PARAMS`) on the first violation
pub fn validate(
    tool_name: &'static str,
    specs: &[ParamSpec],
    arguments: &Value,
) -> Result<ValidatedParams, ToolError> {
    let empty = Map::new();
    let object = match arguments {
        Value::Null => &empty,
        Value::Object(map) => map,
        _ => {
            return Err(ToolError::invalid_parameter(
                tool_name,
                "arguments",
                "expected a JSON object",
            ))
        }
    };

    if let Some(unexpected) = object
        .keys()
        .find(|key| !specs.iter().any(|spec| spec.name == key.as_str()))
    {
        return Err(ToolError::UnexpectedParameter {
            tool_name,
            parameter: unexpected.clone(),
        });
    }

    let mut params = ValidatedParams {
        tool_name,
        ..ValidatedParams::default()
    };

    for spec in specs {
        let Some(value) = object.get(spec.name).filter(|value| !value.is_null()) else {
            if spec.required {
                return Err(ToolError::MissingParameter {
                    tool_name,
                    parameter: spec.name,
                });
            }
            continue;
        };

        match spec.kind {
            ParamKind::CustomerId => {
                params.customer_id = Some(positive_integer(tool_name, spec.name, value)?);
            }
            ParamKind::Limit => {
                let limit = positive_integer(tool_name, spec.name, value)?;
                params.limit = Some(u32::try_from(limit).map_err(|_| {
                    ToolError::invalid_parameter(tool_name, spec.name, "limit is too large")
                })?);
            }
            ParamKind::CustomerStatus => {
                params.status = Some(parse_enum(tool_name, spec, value)?);
            }
            ParamKind::TicketPriority => {
                params.priority = Some(parse_enum(tool_name, spec, value)?);
            }
            ParamKind::IssueText => {
                params.issue = Some(non_empty_text(tool_name, spec.name, value)?);
            }
            ParamKind::CustomerUpdate => {
                params.update = Some(customer_update(tool_name, spec.name, value)?);
            }
        }
    }

    Ok(params)
}

fn positive_integer(
    tool_name: &'static str,
    parameter: &'static str,
    value: &Value,
) -> Result<i64, ToolError> {
    match value.as_i64() {
        Some(n) if n >= 1 => Ok(n),
        Some(n) => Err(ToolError::invalid_parameter(
            tool_name,
            parameter,
            format!("must be a positive integer, got {n}"),
        )),
        None => Err(ToolError::invalid_parameter(
            tool_name,
            parameter,
            format!("must be an integer, got {}", json_type_name(value)),
        )),
    }
}

fn parse_enum<T: std::str::FromStr>(
    tool_name: &'static str,
    spec: &ParamSpec,
    value: &Value,
) -> Result<T, ToolError> {
    let allowed = spec.kind.allowed_values().unwrap_or_default().join(", ");
    value
        .as_str()
        .and_then(|raw| raw.parse::<T>().ok())
        .ok_or_else(|| {
            ToolError::invalid_parameter(
                tool_name,
                spec.name,
                format!("expected one of: {allowed}"),
            )
        })
}

fn non_empty_text(
    tool_name: &'static str,
    parameter: impl Into<String>,
    value: &Value,
) -> Result<String, ToolError> {
    let parameter = parameter.into();
    let Some(text) = value.as_str() else {
        return Err(ToolError::invalid_parameter(
            tool_name,
            parameter,
            format!("must be a string, got {}", json_type_name(value)),
        ));
    };
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ToolError::invalid_parameter(
            tool_name,
            parameter,
            "must not be empty",
        ));
    }
    Ok(trimmed.to_owned())
}

fn customer_update(
    tool_name: &'static str,
    parameter: &'static str,
    value: &Value,
) -> Result<CustomerUpdate, ToolError> {
    let Value::Object(fields) = value else {
        return Err(ToolError::invalid_parameter(
            tool_name,
            parameter,
            "must be an object of fields to update",
        ));
    };
    if fields.is_empty() {
        return Err(ToolError::invalid_parameter(
            tool_name,
            parameter,
            "must contain at least one of: name, email, phone, status",
        ));
    }

    let mut update = CustomerUpdate::default();
    for (key, raw) in fields {
        let qualified = format!("{parameter}.{key}");
        let Some(field) = UpdatableField::from_key(key) else {
            return Err(ToolError::invalid_parameter(
                tool_name,
                qualified,
                "is not an updatable field",
            ));
        };
        let text = non_empty_text(tool_name, qualified.clone(), raw)?;
        match field {
            UpdatableField::Name => update.name = Some(text),
            UpdatableField::Email => update.email = Some(text),
            UpdatableField::Phone => update.phone = Some(text),
            UpdatableField::Status => {
                update.status = Some(text.parse().map_err(|_| {
                    ToolError::invalid_parameter(
                        tool_name,
                        qualified,
                        "expected one of: active, disabled",
                    )
                })?);
            }
        }
    }
    Ok(update)
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
