// ABOUTME: Agent card advertising the router's skills and the tools it delegates to
// ABOUTME: Served at /.well-known/agent-card.json for A2A discovery
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Agent Card
//!
//! Skills are the router's intent vocabulary, one per intent, in rule order.

use serde::{Deserialize, Serialize};
use switchboard_core::constants::{service, tools};

use crate::router::Intent;

/// Discovery document for the router agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentCard {
    /// Agent name
    pub name: String,
    /// What the agent does
    pub description: String,
    /// Crate version
    pub version: String,
    /// Tool protocol version
    pub protocol_version: String,
    /// Intents the router recognizes
    pub skills: Vec<AgentSkill>,
    /// Tool names reachable through the data access agent
    pub tools: Vec<String>,
}

/// One advertised skill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSkill {
    /// Intent identifier (e.g. `create-ticket`)
    pub id: String,
    /// What the skill does
    pub description: String,
    /// Sample request text
    pub example: String,
}

impl AgentCard {
    /// Card for this build of the router
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: service::SERVICE_NAME.to_owned(),
            description: "Routes customer-service requests to support and data specialists \
                          and answers with a traceable log of every delegated call"
                .to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            protocol_version: service::PROTOCOL_VERSION.to_owned(),
            skills: Intent::ALL
                .into_iter()
                .map(|intent| AgentSkill {
                    id: intent.as_str().to_owned(),
                    description: intent.description().to_owned(),
                    example: intent.example().to_owned(),
                })
                .collect(),
            tools: tools::ALL.iter().map(|name| (*name).to_owned()).collect(),
        }
    }
}

impl Default for AgentCard {
    fn default() -> Self {
        Self::new()
    }
}
