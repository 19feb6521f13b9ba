// ABOUTME: Demo data seeding for local runs and integration tests
// ABOUTME: Inserts a fixed set of customers and tickets when the store is empty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use chrono::Utc;
use switchboard_core::models::{CustomerStatus, TicketPriority, TicketStatus};
use tracing::info;

use super::{Database, DatabaseError};

/// Counts of rows inserted by [`seed_demo_data`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    /// Customers inserted
    pub customers: usize,
    /// Tickets inserted
    pub tickets: usize,
}

struct DemoCustomer {
    name: &'static str,
    email: &'static str,
    phone: &'static str,
    status: CustomerStatus,
}

const DEMO_CUSTOMERS: [DemoCustomer; 5] = [
    DemoCustomer {
        name: "Alice Johnson",
        email: "alice.johnson@example.com",
        phone: "+1-555-0101",
        status: CustomerStatus::Active,
    },
    DemoCustomer {
        name: "Bob Smith",
        email: "bob.smith@example.com",
        phone: "+1-555-0102",
        status: CustomerStatus::Active,
    },
    DemoCustomer {
        name: "Carol Davis",
        email: "carol.davis@example.com",
        phone: "+1-555-0103",
        status: CustomerStatus::Disabled,
    },
    DemoCustomer {
        name: "David Lee",
        email: "david.lee@example.com",
        phone: "+1-555-0104",
        status: CustomerStatus::Active,
    },
    DemoCustomer {
        name: "Eve Martinez",
        email: "eve.martinez@example.com",
        phone: "+1-555-0105",
        status: CustomerStatus::Active,
    },
];

/// (customer index, issue, status, priority)
const DEMO_TICKETS: [(usize, &str, TicketStatus, TicketPriority); 5] = [
    (0, "Unable to log in after password change", TicketStatus::Open, TicketPriority::High),
    (1, "Invoice total does not match the plan price", TicketStatus::InProgress, TicketPriority::Medium),
    (2, "Refund for cancelled order not received", TicketStatus::Open, TicketPriority::Low),
    (3, "Request for dark mode in the dashboard", TicketStatus::Resolved, TicketPriority::Low),
    (4, "Password reset email never arrives", TicketStatus::Open, TicketPriority::Medium),
];

/// Insert the demo customers and tickets if the store has no customers yet
///
/// Customer 1 (Alice) is active with exactly one open ticket and customer 3 is
/// disabled. Customers 1 and 5 are the active customers with open tickets.
///
/// # Errors
///
/// Returns an error if any insert fails; nothing is written in that case
pub async fn seed_demo_data(database: &Database) -> Result<SeedSummary, DatabaseError> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
        .fetch_one(database.pool())
        .await
        .map_err(|e| DatabaseError::query("seed", e))?;
    if existing > 0 {
        info!(existing, "Customer store already populated, skipping seed");
        return Ok(SeedSummary::default());
    }

    let mut tx = database
        .pool()
        .begin()
        .await
        .map_err(|e| DatabaseError::query("seed", e))?;
    let now = Utc::now();
    let mut customer_ids = Vec::with_capacity(DEMO_CUSTOMERS.len());

    for customer in &DEMO_CUSTOMERS {
        let result = sqlx::query(
            r"
            INSERT INTO customers (name, email, phone, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(customer.name)
        .bind(customer.email)
        .bind(customer.phone)
        .bind(customer.status.as_str())
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(|e| DatabaseError::query("seed", e))?;
        customer_ids.push(result.last_insert_rowid());
    }

    for (index, issue, status, priority) in DEMO_TICKETS {
        sqlx::query(
            r"
            INSERT INTO tickets (customer_id, issue, status, priority, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(customer_ids[index])
        .bind(issue)
        .bind(status.as_str())
        .bind(priority.as_str())
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(|e| DatabaseError::query("seed", e))?;
    }

    tx.commit()
        .await
        .map_err(|e| DatabaseError::query("seed", e))?;

    let summary = SeedSummary {
        customers: DEMO_CUSTOMERS.len(),
        tickets: DEMO_TICKETS.len(),
    };
    info!(
        customers = summary.customers,
        tickets = summary.tickets,
        "Seeded demo customer data"
    );
    Ok(summary)
}
