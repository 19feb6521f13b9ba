// ABOUTME: Deterministic keyword/rule intent classifier over a fixed, ordered rule table
// ABOUTME: Intents are ordered by where they appear in the text, ties broken by rule order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Intent Classification
//!
//! The request text is lower-cased once and every rule is evaluated exactly once.
//! A rule's position is the byte offset of its earliest match. After detection,
//! suppression removes intents that a stronger intent already covers:
//!
//! | Detected | Removes |
//! |---|---|
//! | escalation | negotiation, create-ticket |
//! | negotiation | create-ticket |
//! | report | lookup |

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use switchboard_core::errors::AppError;

/// Closed intent vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Intent {
    /// Duplicate charge: forced high priority ticket
    Escalation,
    /// Cancellation with a billing dispute: medium priority ticket
    Negotiation,
    /// Active customers with open tickets
    Report,
    /// Change email, phone or name
    Update,
    /// Ticket history
    History,
    /// Open a ticket
    CreateTicket,
    /// Show the customer record
    Lookup,
}

impl Intent {
    /// Every intent in rule evaluation order
    pub const ALL: [Self; 7] = [
        Self::Escalation,
        Self::Negotiation,
        Self::Report,
        Self::Update,
        Self::History,
        Self::CreateTicket,
        Self::Lookup,
    ];

    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Escalation => "escalation",
            Self::Negotiation => "negotiation",
            Self::Report => "report",
            Self::Update => "update",
            Self::History => "history",
            Self::CreateTicket => "create-ticket",
            Self::Lookup => "lookup",
        }
    }

    /// What the router does for this intent
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Escalation => "Opens a high priority ticket for duplicate charges",
            Self::Negotiation => {
                "Holds cancellations that come with a billing dispute as a review ticket"
            }
            Self::Report => "Lists active customers together with their open tickets",
            Self::Update => "Updates the customer's email, phone or name",
            Self::History => "Shows the customer's ticket history",
            Self::CreateTicket => "Opens a support ticket",
            Self::Lookup => "Shows the customer's record",
        }
    }

    /// Sample request text
    #[must_use]
    pub const fn example(self) -> &'static str {
        match self {
            Self::Escalation => "I was charged twice, please refund",
            Self::Negotiation => "I want to cancel, my last bill was wrong",
            Self::Report => "Show active customers with open tickets",
            Self::Update => "Update my email to new@example.com",
            Self::History => "Show my ticket history",
            Self::CreateTicket => "Open a ticket, the app crashes on login",
            Self::Lookup => "Look up customer 2",
        }
    }

    /// Intents this one removes from the detected set
    #[must_use]
    pub const fn suppresses(self) -> &'static [Self] {
        match self {
            Self::Escalation => &[Self::Negotiation, Self::CreateTicket],
            Self::Negotiation => &[Self::CreateTicket],
            Self::Report => &[Self::Lookup],
            _ => &[],
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Intent {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|intent| intent.as_str() == s)
            .ok_or_else(|| AppError::invalid_input(format!("Unknown intent: {s}")))
    }
}

/// An intent and where it was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedIntent {
    /// Matched intent
    pub intent: Intent,
    /// Byte offset of the earliest hit in the lower-cased text
    pub position: usize,
}

static ESCALATION: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:charged\s+(?:twice|two\s+times)|double[\s-]charged?|duplicate\s+charges?|billed\s+twice|double[\s-]bill(?:ing|ed))\b",
    )
    .ok()
});

static CANCELLATION_SIGNAL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\b(?:cancel\w*|close\s+my\s+account|terminat\w*)").ok());

static BILLING_SIGNAL: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"\b(?:bill\w*|charge\w*|invoice\w*|payments?|refund\w*|overcharg\w*|fees?\b)").ok()
});

static REPORT: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:(?:active\s+)?customers\s+(?:with|(?:who|that)\s+have)\s+open\s+tickets|open\s+tickets?\s+report|(?:generate|run)\s+(?:a|the)\s+report)\b",
    )
    .ok()
});

static UPDATE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"\b(?:update|change|set)\s+(?:(?:my|the)\s+)?(?:email|e-mail|phone|name)\b").ok()
});

static HISTORY: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"\b(?:(?:ticket\s+)?history|my\s+tickets|past\s+tickets|previous\s+tickets)\b").ok()
});

static CREATE_TICKET: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:(?:open|create|file|raise|submit)\s+a\s+(?:new\s+)?ticket|new\s+ticket|report\s+an?\s+(?:issue|problem))\b",
    )
    .ok()
});

static LOOKUP: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:look\s?up|(?:customer|account)\s+(?:info(?:rmation)?|details)|(?:get|show)\s+customer|my\s+(?:details|information)|help\s+with\s+my\s+account)\b",
    )
    .ok()
});

fn earliest(pattern: &LazyLock<Option<Regex>>, text: &str) -> Option<usize> {
    pattern
        .as_ref()
        .and_then(|re| re.find(text))
        .map(|m| m.start())
}

/// Deterministic rule-table classifier
#[derive(Debug, Clone, Copy, Default)]
pub struct IntentClassifier;

impl IntentClassifier {
    /// Create a classifier
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Detected intents with positions, after suppression, in text order
    #[must_use]
    pub fn detect(&self, text: &str) -> Vec<DetectedIntent> {
        let lower = text.to_lowercase();

        let mut detected: Vec<DetectedIntent> = Intent::ALL
            .into_iter()
            .filter_map(|intent| {
                Self::position(intent, &lower).map(|position| DetectedIntent { intent, position })
            })
            .collect();

        let suppressed: Vec<Intent> = detected
            .iter()
            .flat_map(|d| d.intent.suppresses().iter().copied())
            .collect();
        detected.retain(|d| !suppressed.contains(&d.intent));

        // Intent derives Ord in rule order, so this breaks position ties by rule order
        detected.sort_by_key(|d| (d.position, d.intent));
        detected
    }

    /// Detected intents in text order
    #[must_use]
    pub fn classify(&self, text: &str) -> Vec<Intent> {
        self.detect(text).into_iter().map(|d| d.intent).collect()
    }

    fn position(intent: Intent, lower: &str) -> Option<usize> {
        match intent {
            Intent::Escalation => earliest(&ESCALATION, lower),
            Intent::Negotiation => earliest(&BILLING_SIGNAL, lower)
                .and_then(|_| earliest(&CANCELLATION_SIGNAL, lower)),
            Intent::Report => earliest(&REPORT, lower),
            Intent::Update => earliest(&UPDATE, lower),
            Intent::History => earliest(&HISTORY, lower),
            Intent::CreateTicket => earliest(&CREATE_TICKET, lower),
            Intent::Lookup => earliest(&LOOKUP, lower),
        }
    }
}
