// ABOUTME: Discovery schemas for the data tools, generated from their parameter specs
// ABOUTME: Serialized in the tools/list shape: name, description, inputSchema
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Tool schema definitions for `tools/list`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::params::{ParamKind, ParamSpec};
use super::traits::ToolCapabilities;

/// Tool schema definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSchema {
    /// Tool name
    pub name: String,
    /// What the tool does
    pub description: String,
    /// Parameter schema
    #[serde(rename = "inputSchema")]
    pub input_schema: JsonSchema,
    /// Behavioral hints derived from capabilities
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<ToolAnnotations>,
}

/// JSON schema of a tool's argument object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonSchema {
    /// Always `object`
    #[serde(rename = "type")]
    pub schema_type: String,
    /// Declared parameters by name
    pub properties: BTreeMap<String, PropertySchema>,
    /// Names of required parameters, in declaration order
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub required: Vec<String>,
    /// Undeclared keys are rejected
    #[serde(rename = "additionalProperties")]
    pub additional_properties: bool,
}

/// JSON schema property definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySchema {
    /// JSON type
    #[serde(rename = "type")]
    pub property_type: String,
    /// Parameter description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Allowed values for enum-like parameters
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<String>>,
    /// Inclusive lower bound for integers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<i64>,
}

/// Tool behavior hints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolAnnotations {
    /// Tool never modifies the store
    #[serde(rename = "readOnlyHint")]
    pub read_only_hint: bool,
}

impl PropertySchema {
    fn from_spec(spec: &ParamSpec) -> Self {
        Self {
            property_type: spec.kind.json_type().to_owned(),
            description: Some(spec.description.to_owned()),
            allowed_values: spec
                .kind
                .allowed_values()
                .map(|values| values.iter().map(|v| (*v).to_owned()).collect()),
            minimum: spec.kind.minimum(),
        }
    }
}

impl ToolSchema {
    /// Build the discovery schema for a tool
    #[must_use]
    pub fn build(
        name: &str,
        description: &str,
        params: &[ParamSpec],
        capabilities: ToolCapabilities,
    ) -> Self {
        let properties = params
            .iter()
            .map(|spec| (spec.name.to_owned(), PropertySchema::from_spec(spec)))
            .collect();
        let required = params
            .iter()
            .filter(|spec| spec.required)
            .map(|spec| spec.name.to_owned())
            .collect();

        Self {
            name: name.to_owned(),
            description: description.to_owned(),
            input_schema: JsonSchema {
                schema_type: "object".to_owned(),
                properties,
                required,
                additional_properties: false,
            },
            annotations: Some(ToolAnnotations {
                read_only_hint: !capabilities.writes_data(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_schema_serializes_discovery_shape() {
        let params = [
            ParamSpec::required("customer_id", ParamKind::CustomerId, "Customer id"),
            ParamSpec::optional("status", ParamKind::CustomerStatus, "Filter"),
        ];
        let schema = ToolSchema::build("t", "desc", &params, ToolCapabilities::READS_DATA);
        let json = serde_json::to_value(&schema).unwrap();

        assert_eq!(json["inputSchema"]["type"], "object");
        assert_eq!(json["inputSchema"]["required"], json!(["customer_id"]));
        assert_eq!(json["inputSchema"]["additionalProperties"], false);
        assert_eq!(json["inputSchema"]["properties"]["customer_id"]["minimum"], 1);
        assert_eq!(
            json["inputSchema"]["properties"]["status"]["enum"],
            json!(["active", "disabled"])
        );
        assert_eq!(json["annotations"]["readOnlyHint"], true);
    }
}
