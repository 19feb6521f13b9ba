// ABOUTME: Structured error types for the customer/ticket store
// ABOUTME: Separates absent records from storage faults so the tool server can classify them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use switchboard_core::errors::ToolFailure;
use thiserror::Error;

/// Errors raised by a [`super::CustomerStore`]
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Referenced row does not exist
    #[error("{entity} {id} not found")]
    NotFound {
        /// Entity name (`customer`, `ticket`)
        entity: &'static str,
        /// Requested identifier
        id: i64,
    },

    /// A query failed to execute or decode
    #[error("Database query failed during {context}")]
    Query {
        /// Operation being performed
        context: &'static str,
        /// Underlying sqlx error
        #[source]
        source: sqlx::Error,
    },

    /// A stored value could not be mapped to the domain model
    #[error("Stored {field} value '{value}' is not recognized")]
    Corrupt {
        /// Column name
        field: &'static str,
        /// Offending value
        value: String,
    },

    /// Schema migration failed
    #[error("Schema migration failed")]
    Migration {
        /// Underlying sqlx error
        #[source]
        source: sqlx::Error,
    },

    /// The store could not be opened
    #[error("Unable to connect to {url}")]
    Connect {
        /// Redacted database URL
        url: String,
        /// Underlying sqlx error
        #[source]
        source: sqlx::Error,
    },
}

impl DatabaseError {
    /// Customer row absent
    #[must_use]
    pub const fn customer_not_found(id: i64) -> Self {
        Self::NotFound {
            entity: "customer",
            id,
        }
    }

    /// Wrap a sqlx error with the operation it occurred in
    #[must_use]
    pub const fn query(context: &'static str, source: sqlx::Error) -> Self {
        Self::Query { context, source }
    }
}

impl From<DatabaseError> for ToolFailure {
    /// Absent rows stay `NOT_FOUND`; every other storage fault is reported as
    /// `DEPENDENCY_UNAVAILABLE` so nothing storage-specific leaks to callers.
    fn from(error: DatabaseError) -> Self {
        match error {
            DatabaseError::NotFound { .. } => Self::not_found(error.to_string()),
            DatabaseError::Query { .. }
            | DatabaseError::Corrupt { .. }
            | DatabaseError::Migration { .. }
            | DatabaseError::Connect { .. } => {
                Self::dependency_unavailable("Customer data store is unavailable")
            }
        }
    }
}
