// ABOUTME: Support ticket record with status and priority enumerations
// ABOUTME: Tickets are created only through create_ticket and always start open
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Ticket workflow status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    /// Newly created
    Open,
    /// Being worked on
    InProgress,
    /// Closed out
    Resolved,
}

impl TicketStatus {
    /// Database and wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(Self::Open),
            "in_progress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            _ => Err(AppError::invalid_input(format!("Invalid ticket status: {s}"))),
        }
    }
}

/// Ticket priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketPriority {
    /// Low urgency
    Low,
    /// Default urgency
    Medium,
    /// Escalated
    High,
}

impl TicketPriority {
    /// Database and wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketPriority {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(AppError::invalid_input(format!(
                "Invalid ticket priority: {s} (expected low, medium or high)"
            ))),
        }
    }
}

/// Ticket record as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Numeric identity
    pub id: i64,
    /// Owning customer
    pub customer_id: i64,
    /// Free-text issue description
    pub issue: String,
    /// Workflow status
    pub status: TicketStatus,
    /// Priority
    pub priority: TicketPriority,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

/// Validated input for ticket creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTicket {
    /// Owning customer, must exist
    pub customer_id: i64,
    /// Non-empty issue text
    pub issue: String,
    /// Requested priority
    pub priority: TicketPriority,
}
