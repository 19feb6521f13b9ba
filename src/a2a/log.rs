// ABOUTME: Append-only record of every inter-agent exchange made while serving one request
// ABOUTME: Built fresh per request, returned with the response, never persisted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # A2A Log
//!
//! One [`A2ALogEntry`] per tool call (or per skipped step). Entries are numbered
//! from 1 in the order they were appended, and each carries the plan step that
//! produced it, so tests can assert on ordering directly.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use switchboard_core::constants::limits::LOG_SUMMARY_MAX_CHARS;
use switchboard_core::errors::{ToolErrorKind, ToolFailure};

/// How the logged exchange ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EntryOutcome {
    /// Callee returned data
    Ok,
    /// Callee returned a structured failure
    Failed {
        /// Failure kind, verbatim from the tool server
        kind: ToolErrorKind,
    },
    /// No call was made
    Skipped,
}

/// One logged exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct A2ALogEntry {
    /// Append order, starting at 1
    pub index: usize,
    /// Plan step that produced this entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<usize>,
    /// Agent that made the call
    pub caller: String,
    /// Agent that received it
    pub callee: String,
    /// Tool or operation name
    pub operation: String,
    /// Compact rendering of the arguments
    pub input_summary: String,
    /// Compact rendering of the result or failure
    pub output_summary: String,
    /// Result classification
    #[serde(flatten)]
    pub outcome: EntryOutcome,
}

/// Append-only exchange log for one request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct A2ALog {
    entries: Vec<A2ALogEntry>,
    #[serde(skip)]
    cursor: StepCursor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct StepCursor {
    step: Option<usize>,
    caller: &'static str,
}

impl Default for StepCursor {
    fn default() -> Self {
        Self {
            step: None,
            caller: switchboard_core::constants::agents::ROUTER,
        }
    }
}

impl A2ALog {
    /// Create an empty log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attribute subsequent entries to plan step `step`, made on behalf of `caller`
    pub fn begin_step(&mut self, step: usize, caller: &'static str) {
        self.cursor = StepCursor {
            step: Some(step),
            caller,
        };
    }

    /// Append one completed tool call
    pub fn record_call(
        &mut self,
        callee: &str,
        operation: &str,
        input: &Value,
        result: &Result<Value, ToolFailure>,
    ) {
        let (output_summary, outcome) = match result {
            Ok(data) => (summarize_output(data), EntryOutcome::Ok),
            Err(failure) => (
                truncate(&failure.to_string()),
                EntryOutcome::Failed { kind: failure.kind },
            ),
        };
        self.push(callee, operation, summarize_input(input), output_summary, outcome);
    }

    /// Append an entry for a step that made no call
    pub fn record_skip(&mut self, callee: &str, operation: &str, reason: &str) {
        self.push(
            callee,
            operation,
            String::new(),
            truncate(reason),
            EntryOutcome::Skipped,
        );
    }

    fn push(
        &mut self,
        callee: &str,
        operation: &str,
        input_summary: String,
        output_summary: String,
        outcome: EntryOutcome,
    ) {
        self.entries.push(A2ALogEntry {
            index: self.entries.len() + 1,
            step: self.cursor.step,
            caller: self.cursor.caller.to_owned(),
            callee: callee.to_owned(),
            operation: operation.to_owned(),
            input_summary,
            output_summary,
            outcome,
        });
    }

    /// Entries in append order
    #[must_use]
    pub fn entries(&self) -> &[A2ALogEntry] {
        &self.entries
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing was logged
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn summarize_input(input: &Value) -> String {
    match input {
        Value::Null => String::new(),
        other => truncate(&other.to_string()),
    }
}

fn summarize_output(data: &Value) -> String {
    match data {
        Value::Array(items) => match items.len() {
            1 => "1 record".to_owned(),
            n => format!("{n} records"),
        },
        Value::Object(fields) => {
            let id = fields.get("id").and_then(Value::as_i64);
            let noun = if fields.contains_key("issue") {
                "ticket"
            } else {
                "customer"
            };
            id.map_or_else(|| truncate(&data.to_string()), |id| format!("{noun} #{id}"))
        }
        other => truncate(&other.to_string()),
    }
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= LOG_SUMMARY_MAX_CHARS {
        return text.to_owned();
    }
    let mut short: String = text.chars().take(LOG_SUMMARY_MAX_CHARS - 3).collect();
    short.push_str("...");
    short
}
