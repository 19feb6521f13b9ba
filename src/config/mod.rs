// ABOUTME: Configuration module for the switchboard server and CLI
// ABOUTME: Environment-only settings; there are no configuration files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Configuration management
//!
//! | Variable | Default |
//! |---|---|
//! | `HTTP_PORT` | 8090 |
//! | `DATABASE_URL` | `sqlite:./data/switchboard.db` |
//! | `TOOL_SERVER_URL` | unset (in-process) |
//! | `DEFAULT_LIST_LIMIT` | 10 |
//! | `REPORT_CUSTOMER_LIMIT` | 100 |
//! | `ENVIRONMENT` | `development` |

pub mod environment;

pub use environment::{DatabaseUrl, Environment, ServerConfig, DEFAULT_DATABASE_URL};
