// ABOUTME: Pulls structured values out of request text: customer id, priority hint, update fields
// ABOUTME: Pure functions over the raw text, evaluated once per request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use std::sync::LazyLock;

use regex::Regex;
use switchboard_core::models::{CustomerUpdate, TicketPriority};

static CUSTOMER_ID_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: customer 5, customer id 5, customer #5, id: 5, for ID 5
    Regex::new(
        r"(?i)\bcustomer(?:\s+id)?\s*(?:#|:|no\.?|number)?\s*(\d+)\b|(?:\b([a-z]+)\s+)?\bid\s*[#:]?\s*(\d+)\b",
    )
    .ok()
});

/// Words that make a bare `id N` refer to something other than a customer
const FOREIGN_ID_OWNERS: [&str; 7] = [
    "order",
    "ticket",
    "invoice",
    "transaction",
    "tracking",
    "reference",
    "payment",
];

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)+").ok());

static PHONE_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: phone to +1-555-0199, phone number is (555) 010 9999
    Regex::new(r"(?i)\bphone(?:\s+number)?\s*(?:(?:to|is)\s+|:\s*)?(\+?[\d(][\d().\s-]{5,}\d)").ok()
});

static NAME_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // The name runs until punctuation, "and"/"then", or the end of the text
    Regex::new(r"(?i)\bname\s+(?:to|is)\s+(.+?)(?:\s+(?:and|then|also)\b|[,;.!?\n]|$)").ok()
});

static LOW_PRIORITY_HINT: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:low(?:\s+priority)?|not\s+urgent|no\s+rush|whenever)\b").ok()
});

static HIGH_PRIORITY_HINT: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:urgent(?:ly)?|high[\s-]priority|critical|asap|emergency)\b").ok()
});

/// Customer id written in the text, if any
///
/// Email addresses are removed first so digits inside them never count, and
/// `order #N` style numbers are not customer ids.
#[must_use]
pub fn customer_id(text: &str) -> Option<i64> {
    let pattern = CUSTOMER_ID_PATTERN.as_ref()?;
    let without_emails = EMAIL_PATTERN
        .as_ref()
        .map_or_else(|| text.to_owned(), |re| re.replace_all(text, " ").into_owned());

    pattern
        .captures_iter(&without_emails)
        .find_map(|captures| {
            if let Some(id) = captures.get(1) {
                return Some(id);
            }
            let owner = captures.get(2).map(|m| m.as_str().to_lowercase());
            if owner.is_some_and(|word| FOREIGN_ID_OWNERS.contains(&word.as_str())) {
                return None;
            }
            captures.get(3)
        })
        .and_then(|m| m.as_str().parse().ok())
}

/// Ticket priority hinted at in the text; `low` wins over `high` so "not urgent" reads as low
#[must_use]
pub fn priority_hint(text: &str) -> Option<TicketPriority> {
    let matches = |pattern: &LazyLock<Option<Regex>>| {
        pattern.as_ref().is_some_and(|re| re.is_match(text))
    };
    if matches(&LOW_PRIORITY_HINT) {
        Some(TicketPriority::Low)
    } else if matches(&HIGH_PRIORITY_HINT) {
        Some(TicketPriority::High)
    } else {
        None
    }
}

/// Field values named in an update request; empty when nothing parseable was found
#[must_use]
pub fn update_fields(text: &str) -> CustomerUpdate {
    let capture = |pattern: &LazyLock<Option<Regex>>, group: usize| {
        pattern
            .as_ref()
            .and_then(|re| re.captures(text))
            .and_then(|c| c.get(group))
            .map(|m| m.as_str().trim().to_owned())
            .filter(|value| !value.is_empty())
    };

    let mentions = |field: &str| text.to_lowercase().contains(field);

    CustomerUpdate {
        name: capture(&NAME_PATTERN, 1),
        email: if mentions("email") || mentions("e-mail") {
            capture(&EMAIL_PATTERN, 0)
        } else {
            None
        },
        phone: capture(&PHONE_PATTERN, 1),
        status: None,
    }
}
