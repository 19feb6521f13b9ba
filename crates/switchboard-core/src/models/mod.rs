// ABOUTME: Core data models for customers and support tickets
// ABOUTME: Re-exports Customer, Ticket, status/priority enums, and update payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Data Models
//!
//! Records owned by the storage collaborator. The dispatch core only reads them
//! and mutates them through the tool server, never directly.
//!
//! - `Customer` / `CustomerStatus`: identity, contact fields, lifecycle
//! - `CustomerUpdate` / `UpdatableField`: field-level optional update
//! - `Ticket` / `TicketStatus` / `TicketPriority`: support tickets
//! - `NewTicket`: validated ticket-creation input

mod customer;
mod ticket;

pub use customer::{Customer, CustomerStatus, CustomerUpdate, UpdatableField};
pub use ticket::{NewTicket, Ticket, TicketPriority, TicketStatus};
