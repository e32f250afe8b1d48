// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Canonical status mapping.
//!
//! The backend reports a free-form status string per issue. Every view
//! normalizes it through [`canonical_status`] together with whether a
//! technician has been matched:
//!
//! | raw status             | assigned | canonical     |
//! |------------------------|----------|---------------|
//! | `reported`             | no       | `pending`     |
//! | `reported`             | yes      | `in-progress` |
//! | `assigned`             | any      | `in-progress` |
//! | `completed`/`resolved` | any      | `completed`   |
//! | anything else          | any      | unchanged     |
//!
//! The mapping is never cached: assignment can arrive after the report.

use serde::{Serialize, Serializer};
use std::fmt;

/// Normalized issue status shown to users.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CanonicalStatus {
    /// Reported, no technician matched yet.
    Pending,
    /// A technician has been matched or is working on it.
    InProgress,
    /// Work finished.
    Completed,
    /// Unrecognized backend status, passed through verbatim.
    Other(String),
}

impl CanonicalStatus {
    /// Returns the string representation used in display and JSON output.
    pub fn as_str(&self) -> &str {
        match self {
            CanonicalStatus::Pending => "pending",
            CanonicalStatus::InProgress => "in-progress",
            CanonicalStatus::Completed => "completed",
            CanonicalStatus::Other(raw) => raw,
        }
    }

    /// Returns true for pending and in-progress issues.
    pub fn is_active(&self) -> bool {
        matches!(self, CanonicalStatus::Pending | CanonicalStatus::InProgress)
    }
}

impl fmt::Display for CanonicalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for CanonicalStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Maps a backend status plus assignment flag to the canonical status.
///
/// Matching ignores case and surrounding whitespace. Unknown values are
/// returned as [`CanonicalStatus::Other`] holding the original string.
pub fn canonical_status(raw: &str, is_assigned: bool) -> CanonicalStatus {
    match raw.trim().to_lowercase().as_str() {
        "reported" if is_assigned => CanonicalStatus::InProgress,
        "reported" => CanonicalStatus::Pending,
        "assigned" => CanonicalStatus::InProgress,
        "completed" | "resolved" => CanonicalStatus::Completed,
        _ => CanonicalStatus::Other(raw.to_string()),
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
