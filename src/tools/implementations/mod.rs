// ABOUTME: The five built-in data tool implementations
// ABOUTME: Customer tools and ticket tools, registered in fixed order by ToolRegistry::builtin
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

mod customers;
mod tickets;

pub use customers::{GetCustomerTool, ListCustomersTool, UpdateCustomerTool};
pub use tickets::{CreateTicketTool, GetCustomerHistoryTool};
