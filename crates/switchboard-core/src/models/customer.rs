// ABOUTME: Customer record, lifecycle status, and the field-level update structure
// ABOUTME: Only name, email, phone, and status are updatable through the tool server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::json_fields;
use crate::errors::AppError;

/// Customer lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    /// Customer can be served
    Active,
    /// Customer account is disabled
    Disabled,
}

impl CustomerStatus {
    /// Database and wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Disabled => "disabled",
        }
    }
}

impl fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CustomerStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "disabled" => Ok(Self::Disabled),
            _ => Err(AppError::invalid_input(format!(
                "Invalid customer status: {s} (expected active or disabled)"
            ))),
        }
    }
}

/// Customer record as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Numeric identity
    pub id: i64,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: Option<String>,
    /// Contact phone
    pub phone: Option<String>,
    /// Lifecycle status
    pub status: CustomerStatus,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last update time
    pub updated_at: DateTime<Utc>,
}

/// The closed set of fields `update_customer` may touch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdatableField {
    /// `name`
    Name,
    /// `email`
    Email,
    /// `phone`
    Phone,
    /// `status`
    Status,
}

impl UpdatableField {
    /// Every updatable field, in column order
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Phone, Self::Status];

    /// JSON key / column name
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => json_fields::NAME,
            Self::Email => json_fields::EMAIL,
            Self::Phone => json_fields::PHONE,
            Self::Status => json_fields::STATUS,
        }
    }

    /// Resolve a JSON key; `None` for anything outside the closed set
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

/// Field-level optional update: only `Some` fields are written
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerUpdate {
    /// New name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New phone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// New lifecycle status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CustomerStatus>,
}

impl CustomerUpdate {
    /// True when no field would be written
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none() && self.status.is_none()
    }

    /// Fields carried by this update, in column order
    #[must_use]
    pub fn fields(&self) -> Vec<UpdatableField> {
        UpdatableField::ALL
            .into_iter()
            .filter(|field| match field {
                UpdatableField::Name => self.name.is_some(),
                UpdatableField::Email => self.email.is_some(),
                UpdatableField::Phone => self.phone.is_some(),
                UpdatableField::Status => self.status.is_some(),
            })
            .collect()
    }
}
