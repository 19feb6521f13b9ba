// ABOUTME: Tool server module: envelope, parameter schemas, registry, and dispatcher
// ABOUTME: Exposes exactly five validated data operations over the customer store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Tool Server
//!
//! - `protocol`: `ToolRequest` / `ToolResponse` wire envelope
//! - `params`: declared parameter specs and the validator
//! - `schema`: discovery schemas for `tools/list`
//! - `traits`: the `DataTool` trait and capability flags
//! - `registry`: the fixed, ordered tool registry
//! - `implementations`: the five tools
//! - `server`: `ToolServer` dispatcher plus liveness/readiness probes

pub mod errors;
pub mod implementations;
pub mod params;
pub mod protocol;
pub mod registry;
pub mod schema;
pub mod server;
pub mod traits;

pub use errors::ToolError;
pub use protocol::{ToolRequest, ToolResponse};
pub use registry::ToolRegistry;
pub use schema::ToolSchema;
pub use server::{Liveness, Readiness, ToolServer};
pub use traits::{DataTool, ToolCapabilities};
