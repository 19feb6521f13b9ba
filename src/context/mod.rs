// ABOUTME: Explicit dependency contexts passed to the tool server and agents at construction
// ABOUTME: Replaces ambient registries and shared connections with owned handles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Dependency contexts
//!
//! - `ToolServerContext`: storage handle plus listing defaults, owned by the tool server
//! - `AgentContext`: tool transport plus report limits, shared by the agents and router

mod agent;
mod tool_server;

pub use agent::AgentContext;
pub use tool_server::ToolServerContext;
