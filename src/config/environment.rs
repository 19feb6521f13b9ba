// ABOUTME: Environment configuration: deployment mode, database URL, ports, and limits
// ABOUTME: Parsed once from environment variables; invalid values fail with CONFIG_INVALID
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Environment-based server configuration

use std::env;
use std::error::Error;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use switchboard_core::constants::{limits, ports};
use switchboard_core::errors::{AppError, AppResult};
use tracing::info;

/// Default database location
pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/switchboard.db";

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if running in production
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// SQLite database file
    SQLite {
        /// File path
        path: PathBuf,
    },
    /// In-memory SQLite (tests, demos)
    Memory,
}

impl DatabaseUrl {
    /// Convert to a sqlx connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl FromStr for DatabaseUrl {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AppError::config_invalid("DATABASE_URL", s));
        }
        if trimmed.starts_with("postgres://") || trimmed.starts_with("postgresql://") {
            return Err(AppError::config_invalid("DATABASE_URL", s));
        }
        let path = trimmed
            .strip_prefix("sqlite://")
            .or_else(|| trimmed.strip_prefix("sqlite:"))
            .unwrap_or(trimmed);
        if path == ":memory:" {
            Ok(Self::Memory)
        } else {
            Ok(Self::SQLite {
                path: PathBuf::from(path),
            })
        }
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from("./data/switchboard.db"),
        }
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Customer store location
    pub database_url: DatabaseUrl,
    /// Remote tool server; `None` dispatches in-process
    pub tool_server_url: Option<String>,
    /// `list_customers` limit when omitted
    pub default_list_limit: u32,
    /// Customers examined by the open-ticket report
    pub report_customer_limit: u32,
    /// Deployment environment
    pub environment: Environment,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: ports::DEFAULT_HTTP_PORT,
            database_url: DatabaseUrl::default(),
            tool_server_url: None,
            default_list_limit: limits::DEFAULT_LIST_LIMIT,
            report_customer_limit: limits::DEFAULT_REPORT_CUSTOMER_LIMIT,
            environment: Environment::Development,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` if a variable is set to an unparseable or out-of-range value
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            http_port: parse_var("HTTP_PORT", ports::DEFAULT_HTTP_PORT)?,
            database_url: env::var("DATABASE_URL")
                .map_or_else(|_| DEFAULT_DATABASE_URL.parse(), |url| url.parse())?,
            tool_server_url: env::var("TOOL_SERVER_URL")
                .ok()
                .map(|url| url.trim().to_owned())
                .filter(|url| !url.is_empty()),
            default_list_limit: positive_var("DEFAULT_LIST_LIMIT", limits::DEFAULT_LIST_LIMIT)?,
            report_customer_limit: positive_var(
                "REPORT_CUSTOMER_LIMIT",
                limits::DEFAULT_REPORT_CUSTOMER_LIMIT,
            )?,
            environment: env::var("ENVIRONMENT")
                .map(|v| Environment::from_str_or_default(&v))
                .unwrap_or_default(),
        };

        Ok(config)
    }

    /// One-line description for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "environment={} http_port={} database={} tool_server={} default_list_limit={} report_customer_limit={}",
            self.environment,
            self.http_port,
            self.database_url,
            self.tool_server_url.as_deref().unwrap_or("in-process"),
            self.default_list_limit,
            self.report_customer_limit,
        )
    }
}

fn parse_var<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::config_invalid(key, &raw).with_source(e)),
        Err(_) => Ok(default),
    }
}

fn positive_var(key: &str, default: u32) -> AppResult<u32> {
    let value = parse_var(key, default)?;
    if value == 0 {
        return Err(AppError::config_invalid(key, "0"));
    }
    Ok(value)
}
