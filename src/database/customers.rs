// ABOUTME: Customer queries for the SQLite store: fetch, list, and field-level update
// ABOUTME: Lists are ordered by id so repeated reads without writes are stable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite};
use switchboard_core::models::{Customer, CustomerStatus, CustomerUpdate};

use super::{Database, DatabaseError};

const CUSTOMER_COLUMNS: &str = "id, name, email, phone, status, created_at, updated_at";

impl Database {
    pub(super) async fn fetch_customer(
        &self,
        customer_id: i64,
    ) -> Result<Option<Customer>, DatabaseError> {
        let row = sqlx::query(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers WHERE id = $1"
        ))
        .bind(customer_id)
        .fetch_optional(self.pool())
        .await
        .map_err(|e| DatabaseError::query("get_customer", e))?;

        row.as_ref().map(Self::row_to_customer).transpose()
    }

    pub(super) async fn fetch_customers(
        &self,
        status: Option<CustomerStatus>,
        limit: u32,
    ) -> Result<Vec<Customer>, DatabaseError> {
        let mut query: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {CUSTOMER_COLUMNS} FROM customers"));
        if let Some(status) = status {
            query.push(" WHERE status = ").push_bind(status.as_str());
        }
        query.push(" ORDER BY id LIMIT ").push_bind(i64::from(limit));

        let rows = query
            .build()
            .fetch_all(self.pool())
            .await
            .map_err(|e| DatabaseError::query("list_customers", e))?;

        rows.iter().map(Self::row_to_customer).collect()
    }

    pub(super) async fn apply_customer_update(
        &self,
        customer_id: i64,
        update: &CustomerUpdate,
    ) -> Result<Customer, DatabaseError> {
        let mut tx = self
            .pool()
            .begin()
            .await
            .map_err(|e| DatabaseError::query("update_customer", e))?;

        let mut query: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE customers SET ");
        {
            let mut assignments = query.separated(", ");
            if let Some(name) = &update.name {
                assignments.push("name = ").push_bind_unseparated(name.clone());
            }
            if let Some(email) = &update.email {
                assignments.push("email = ").push_bind_unseparated(email.clone());
            }
            if let Some(phone) = &update.phone {
                assignments.push("phone = ").push_bind_unseparated(phone.clone());
            }
            if let Some(status) = update.status {
                assignments
                    .push("status = ")
                    .push_bind_unseparated(status.as_str());
            }
            assignments
                .push("updated_at = ")
                .push_bind_unseparated(Utc::now());
        }
        query.push(" WHERE id = ").push_bind(customer_id);

        let result = query
            .build()
            .execute(&mut *tx)
            .await
            .map_err(|e| DatabaseError::query("update_customer", e))?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::customer_not_found(customer_id));
        }

        let row = sqlx::query(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers WHERE id = $1"
        ))
        .bind(customer_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| DatabaseError::query("update_customer", e))?;
        let customer = Self::row_to_customer(&row)?;

        tx.commit()
            .await
            .map_err(|e| DatabaseError::query("update_customer", e))?;
        Ok(customer)
    }

    pub(super) async fn customer_exists(&self, customer_id: i64) -> Result<bool, DatabaseError> {
        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM customers WHERE id = $1")
            .bind(customer_id)
            .fetch_optional(self.pool())
            .await
            .map_err(|e| DatabaseError::query("customer_exists", e))?;
        Ok(found.is_some())
    }

    fn row_to_customer(row: &SqliteRow) -> Result<Customer, DatabaseError> {
        let decode = |e| DatabaseError::query("decode customer", e);

        let status: String = row.try_get("status").map_err(decode)?;
        let status = status
            .parse::<CustomerStatus>()
            .map_err(|_| DatabaseError::Corrupt {
                field: "customers.status",
                value: status.clone(),
            })?;
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(decode)?;
        let updated_at: DateTime<Utc> = row.try_get("updated_at").map_err(decode)?;

        Ok(Customer {
            id: row.try_get("id").map_err(decode)?,
            name: row.try_get("name").map_err(decode)?,
            email: row.try_get("email").map_err(decode)?,
            phone: row.try_get("phone").map_err(decode)?,
            status,
            created_at,
            updated_at,
        })
    }
}
