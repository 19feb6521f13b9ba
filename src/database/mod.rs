// ABOUTME: Customer and ticket storage behind the CustomerStore trait
// ABOUTME: SQLite implementation via sqlx with schema migration and demo seed data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Database Management
//!
//! The storage collaborator of the tool server. The dispatch core only ever
//! reaches it through the [`CustomerStore`] trait, and only through the tool
//! server's validated operations.
//!
//! Each trait method is atomic: it is either fully applied or not applied at all.

mod customers;
mod errors;
mod seed;
mod tickets;

pub use errors::DatabaseError;
pub use seed::{seed_demo_data, SeedSummary};

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use switchboard_core::models::{
    Customer, CustomerStatus, CustomerUpdate, NewTicket, Ticket,
};
use tracing::{debug, info};

/// Storage operations the tool server forwards validated requests to
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Fetch one customer; `None` when absent
    async fn get_customer(&self, customer_id: i64) -> Result<Option<Customer>, DatabaseError>;

    /// Customers in id order, optionally filtered by status, at most `limit` rows
    async fn list_customers(
        &self,
        status: Option<CustomerStatus>,
        limit: u32,
    ) -> Result<Vec<Customer>, DatabaseError>;

    /// Apply only the fields present in `update` and return the updated record
    async fn update_customer(
        &self,
        customer_id: i64,
        update: &CustomerUpdate,
    ) -> Result<Customer, DatabaseError>;

    /// Insert a ticket with status `open`; fails `NotFound` if the customer is absent
    async fn create_ticket(&self, ticket: &NewTicket) -> Result<Ticket, DatabaseError>;

    /// All tickets of an existing customer in id order
    async fn get_customer_history(&self, customer_id: i64) -> Result<Vec<Ticket>, DatabaseError>;

    /// Cheap reachability probe used by the readiness endpoint
    async fn ping(&self) -> Result<(), DatabaseError>;
}

/// SQLite-backed customer store
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Open (creating if missing) the database at `database_url` and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the connection fails, or migrations fail
    pub async fn new(database_url: &str) -> Result<Self, DatabaseError> {
        let connect_error = |source| DatabaseError::Connect {
            url: database_url.to_owned(),
            source,
        };

        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(connect_error)?
            .create_if_missing(true)
            .foreign_keys(true);

        // Every pooled connection to `:memory:` would otherwise get its own empty database
        let is_memory = database_url.contains(":memory:");
        let pool_options = if is_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
                .max_connections(5)
                .acquire_timeout(Duration::from_secs(5))
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(connect_error)?;

        let db = Self { pool };
        db.migrate().await?;
        info!(in_memory = is_memory, "Customer store ready");
        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Create the `customers` and `tickets` tables if they do not exist
    ///
    /// # Errors
    ///
    /// Returns an error if any DDL statement fails
    pub async fn migrate(&self) -> Result<(), DatabaseError> {
        let migration_error = |source| DatabaseError::Migration { source };

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS customers (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                email TEXT,
                phone TEXT,
                status TEXT NOT NULL DEFAULT 'active' CHECK (status IN ('active', 'disabled')),
                created_at DATETIME NOT NULL,
                updated_at DATETIME NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(migration_error)?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS tickets (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                customer_id INTEGER NOT NULL REFERENCES customers(id) ON DELETE CASCADE,
                issue TEXT NOT NULL,
                status TEXT NOT NULL DEFAULT 'open' CHECK (status IN ('open', 'in_progress', 'resolved')),
                priority TEXT NOT NULL CHECK (priority IN ('low', 'medium', 'high')),
                created_at DATETIME NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(migration_error)?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_tickets_customer_id ON tickets(customer_id)")
            .execute(&self.pool)
            .await
            .map_err(migration_error)?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_customers_status ON customers(status)")
            .execute(&self.pool)
            .await
            .map_err(migration_error)?;

        debug!("Customer store schema is up to date");
        Ok(())
    }
}

#[async_trait]
impl CustomerStore for Database {
    async fn get_customer(&self, customer_id: i64) -> Result<Option<Customer>, DatabaseError> {
        self.fetch_customer(customer_id).await
    }

    async fn list_customers(
        &self,
        status: Option<CustomerStatus>,
        limit: u32,
    ) -> Result<Vec<Customer>, DatabaseError> {
        self.fetch_customers(status, limit).await
    }

    async fn update_customer(
        &self,
        customer_id: i64,
        update: &CustomerUpdate,
    ) -> Result<Customer, DatabaseError> {
        self.apply_customer_update(customer_id, update).await
    }

    async fn create_ticket(&self, ticket: &NewTicket) -> Result<Ticket, DatabaseError> {
        self.insert_ticket(ticket).await
    }

    async fn get_customer_history(&self, customer_id: i64) -> Result<Vec<Ticket>, DatabaseError> {
        self.fetch_customer_tickets(customer_id).await
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::query("ping", e))?;
        Ok(())
    }
}
