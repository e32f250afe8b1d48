// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dashboard counters derived from an issue collection.

use serde::Serialize;

use crate::issue::Issue;
use crate::status::CanonicalStatus;

/// Issue counts by canonical status.
///
/// Issues with an unrecognized backend status count as pending, so the
/// three buckets always add up to `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueStats {
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub active: usize,
    pub total: usize,
}

impl IssueStats {
    pub fn from_issues(issues: &[Issue]) -> Self {
        let mut stats = IssueStats::default();
        for issue in issues {
            match issue.canonical_status() {
                CanonicalStatus::InProgress => stats.in_progress += 1,
                CanonicalStatus::Completed => stats.completed += 1,
                CanonicalStatus::Pending | CanonicalStatus::Other(_) => stats.pending += 1,
            }
        }
        stats.total = issues.len();
        stats.active = stats.pending + stats.in_progress;
        stats
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
