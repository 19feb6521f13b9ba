// ABOUTME: Agent side of the system: transports, data access and support agents, A2A log
// ABOUTME: Specialists never reach the tool server except through the data access agent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Agents
//!
//! - `transport`: `ToolTransport` with in-process and HTTP implementations
//! - `data_agent`: `DataAccessAgent`, one typed method per tool
//! - `support_agent`: `SupportAgent` domain rules
//! - `log`: the per-request `A2ALog`
//! - `agent_card`: discovery metadata

pub mod agent_card;
pub mod data_agent;
pub mod log;
pub mod support_agent;
pub mod transport;

pub use agent_card::{AgentCard, AgentSkill};
pub use data_agent::DataAccessAgent;
pub use log::{A2ALog, A2ALogEntry, EntryOutcome};
pub use support_agent::{CustomerOpenTickets, ReportGap, SupportAgent, TicketReport};
pub use transport::{HttpToolTransport, InProcessTransport, ToolTransport};
