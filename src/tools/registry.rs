// ABOUTME: Fixed registry mapping the five tool names to their implementations
// ABOUTME: Preserves registration order for discovery and offers capability-based filtering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Tool Registry
//!
//! The registry is built once at startup and then used immutably for lookups.
//! All tools are `Arc`-wrapped for sharing across async tasks.
//!
//! ```
//! use switchboard::tools::ToolRegistry;
//!
//! let registry = ToolRegistry::builtin();
//! assert_eq!(registry.len(), 5);
//! assert!(registry.contains("get_customer"));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use super::implementations::{
    CreateTicketTool, GetCustomerHistoryTool, GetCustomerTool, ListCustomersTool,
    UpdateCustomerTool,
};
use super::schema::ToolSchema;
use super::traits::{DataTool, ToolCapabilities};

/// Ordered registry of data tools
#[derive(Clone, Default)]
pub struct ToolRegistry {
    /// Tools in registration order
    tools: Vec<Arc<dyn DataTool>>,
    /// Name to position in `tools`
    index: HashMap<&'static str, usize>,
}

impl ToolRegistry {
    /// Create a new empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding exactly the five built-in tools in their fixed order
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(GetCustomerTool));
        registry.register(Arc::new(ListCustomersTool));
        registry.register(Arc::new(UpdateCustomerTool));
        registry.register(Arc::new(CreateTicketTool));
        registry.register(Arc::new(GetCustomerHistoryTool));
        registry
    }

    /// Register a tool
    ///
    /// # Returns
    ///
    /// `true` if the tool was registered, `false` if a tool with the same name exists
    pub fn register(&mut self, tool: Arc<dyn DataTool>) -> bool {
        let name = tool.name();
        if self.index.contains_key(name) {
            warn!("Tool '{}' is already registered, skipping", name);
            return false;
        }

        debug!(
            "Registering tool '{}' with capabilities: {}",
            name,
            tool.capabilities().describe()
        );
        self.index.insert(name, self.tools.len());
        self.tools.push(tool);
        true
    }

    /// Look up a tool by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<dyn DataTool>> {
        self.index
            .get(name)
            .and_then(|&i| self.tools.get(i))
            .cloned()
    }

    /// Check whether a tool is registered
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of registered tools
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Tool names in registration order
    #[must_use]
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|tool| tool.name()).collect()
    }

    /// Discovery schemas in registration order
    #[must_use]
    pub fn schemas(&self) -> Vec<ToolSchema> {
        self.tools.iter().map(|tool| tool.schema()).collect()
    }

    /// Names of tools carrying all of `capabilities`
    #[must_use]
    pub fn names_with(&self, capabilities: ToolCapabilities) -> Vec<&'static str> {
        self.tools
            .iter()
            .filter(|tool| tool.capabilities().contains(capabilities))
            .map(|tool| tool.name())
            .collect()
    }
}

impl fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.tool_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use switchboard_core::constants::tools;

    #[test]
    fn test_builtin_registry_order_is_fixed() {
        let registry = ToolRegistry::builtin();
        assert_eq!(registry.tool_names(), tools::ALL.to_vec());
        assert!(registry.get("delete_customer").is_none());
    }

    #[test]
    fn test_duplicate_registration_is_ignored() {
        let mut registry = ToolRegistry::builtin();
        assert!(!registry.register(Arc::new(GetCustomerTool)));
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn test_write_tools() {
        let registry = ToolRegistry::builtin();
        assert_eq!(
            registry.names_with(ToolCapabilities::WRITES_DATA),
            vec![tools::UPDATE_CUSTOMER, tools::CREATE_TICKET]
        );
    }
}
