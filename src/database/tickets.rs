// ABOUTME: Ticket queries for the SQLite store: creation with referential check and history
// ABOUTME: New tickets always start in the open status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use switchboard_core::models::{NewTicket, Ticket, TicketPriority, TicketStatus};

use super::{Database, DatabaseError};

impl Database {
    pub(super) async fn insert_ticket(&self, ticket: &NewTicket) -> Result<Ticket, DatabaseError> {
        let created_at = Utc::now();
        // One statement: the owner check and the insert cannot interleave with other writers
        let result = sqlx::query(
            r"
            INSERT INTO tickets (customer_id, issue, status, priority, created_at)
            SELECT $1, $2, $3, $4, $5
            WHERE EXISTS (SELECT 1 FROM customers WHERE id = $1)
            ",
        )
        .bind(ticket.customer_id)
        .bind(&ticket.issue)
        .bind(TicketStatus::Open.as_str())
        .bind(ticket.priority.as_str())
        .bind(created_at)
        .execute(self.pool())
        .await
        .map_err(|e| DatabaseError::query("create_ticket", e))?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::customer_not_found(ticket.customer_id));
        }

        Ok(Ticket {
            id: result.last_insert_rowid(),
            customer_id: ticket.customer_id,
            issue: ticket.issue.clone(),
            status: TicketStatus::Open,
            priority: ticket.priority,
            created_at,
        })
    }

    pub(super) async fn fetch_customer_tickets(
        &self,
        customer_id: i64,
    ) -> Result<Vec<Ticket>, DatabaseError> {
        if !self.customer_exists(customer_id).await? {
            return Err(DatabaseError::customer_not_found(customer_id));
        }

        let rows = sqlx::query(
            r"
            SELECT id, customer_id, issue, status, priority, created_at
            FROM tickets
            WHERE customer_id = $1
            ORDER BY id
            ",
        )
        .bind(customer_id)
        .fetch_all(self.pool())
        .await
        .map_err(|e| DatabaseError::query("get_customer_history", e))?;

        rows.iter().map(Self::row_to_ticket).collect()
    }

    fn row_to_ticket(row: &SqliteRow) -> Result<Ticket, DatabaseError> {
        let decode = |e| DatabaseError::query("decode ticket", e);

        let status: String = row.try_get("status").map_err(decode)?;
        let priority: String = row.try_get("priority").map_err(decode)?;
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(decode)?;

        Ok(Ticket {
            id: row.try_get("id").map_err(decode)?,
            customer_id: row.try_get("customer_id").map_err(decode)?,
            issue: row.try_get("issue").map_err(decode)?,
            status: status
                .parse::<TicketStatus>()
                .map_err(|_| DatabaseError::Corrupt {
                    field: "tickets.status",
                    value: status.clone(),
                })?,
            priority: priority
                .parse::<TicketPriority>()
                .map_err(|_| DatabaseError::Corrupt {
                    field: "tickets.priority",
                    value: priority.clone(),
                })?,
            created_at,
        })
    }
}
