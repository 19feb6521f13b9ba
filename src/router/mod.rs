// ABOUTME: Router module: intent classification, delegation planning, execution, synthesis
// ABOUTME: The decision layer that sits in front of the support and data access agents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Router / Orchestrator
//!
//! ```text
//! text -> classify -> plan -> execute steps in order -> synthesize
//! ```

pub mod extract;
pub mod intent;
pub mod orchestrator;
pub mod plan;
pub mod synthesis;

pub use intent::{DetectedIntent, Intent, IntentClassifier};
pub use orchestrator::{RequestState, RouteOutcome, RouteRequest, Router};
pub use plan::{
    build_plan, DelegationStep, Operation, PlanContext, Specialist, StepOutcome, StepOutput,
};
pub use synthesis::CLARIFICATION_PROMPT;
