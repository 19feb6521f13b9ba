// ABOUTME: Tool server context holding the storage handle and listing defaults
// ABOUTME: The only path from tool implementations to the customer store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use std::sync::Arc;

use switchboard_core::constants::limits;

use crate::database::CustomerStore;

/// Storage and limits handed to every tool execution
#[derive(Clone)]
pub struct ToolServerContext {
    store: Arc<dyn CustomerStore>,
    default_list_limit: u32,
}

impl ToolServerContext {
    /// Create a context with the default list limit
    #[must_use]
    pub fn new(store: Arc<dyn CustomerStore>) -> Self {
        Self {
            store,
            default_list_limit: limits::DEFAULT_LIST_LIMIT,
        }
    }

    /// Override the limit applied when `list_customers` omits `limit`
    #[must_use]
    pub const fn with_default_list_limit(mut self, limit: u32) -> Self {
        self.default_list_limit = limit;
        self
    }

    /// Customer store
    #[must_use]
    pub fn store(&self) -> &dyn CustomerStore {
        self.store.as_ref()
    }

    /// Limit used when a listing omits one
    #[must_use]
    pub const fn default_list_limit(&self) -> u32 {
        self.default_list_limit
    }
}
