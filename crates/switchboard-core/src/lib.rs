// ABOUTME: Core types and constants for the Switchboard dispatch and tool server
// ABOUTME: Foundation crate with error handling, customer/ticket models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Switchboard Core
//!
//! Foundation crate providing shared types and constants for the Switchboard
//! customer-service dispatch server. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the four tool failure kinds
//! - **models**: customers, tickets, and the field-level customer update
//! - **constants**: tool names, JSON field names, limits, and agent identities

/// Unified error handling with standard error codes and tool failure kinds
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Customer and ticket data models
pub mod models;
