// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::issue::{Assignment, Priority};
use chrono::{TimeZone, Utc};

fn issue(id: &str, raw: &str, assigned: bool) -> Issue {
    let issue = Issue::new(
        id.into(),
        id.into(),
        Priority::Medium,
        Utc.timestamp_opt(0, 0).unwrap(),
    )
    .with_raw_status(raw);
    if assigned {
        issue.with_assignment(Assignment::default())
    } else {
        issue
    }
}

#[test]
fn counts_by_canonical_status() {
    let issues = vec![
        issue("1", "reported", false),
        issue("2", "reported", true),
        issue("3", "assigned", false),
        issue("4", "resolved", true),
        issue("5", "completed", false),
    ];
    let stats = IssueStats::from_issues(&issues);

    assert_eq!(stats.pending, 1);
    assert_eq!(stats.in_progress, 2);
    assert_eq!(stats.completed, 2);
    assert_eq!(stats.active, 3);
    assert_eq!(stats.total, 5);
}

#[test]
fn buckets_always_sum_to_total() {
    let raws = ["reported", "assigned", "completed", "resolved", "escalated", ""];
    let mut issues = Vec::new();
    for (i, raw) in raws.iter().enumerate() {
        issues.push(issue(&format!("a{i}"), raw, false));
        issues.push(issue(&format!("b{i}"), raw, true));
    }
    for n in 0..=issues.len() {
        let stats = IssueStats::from_issues(&issues[..n]);
        assert_eq!(stats.pending + stats.in_progress + stats.completed, stats.total);
        assert_eq!(stats.total, n);
    }
}

#[test]
fn empty_collection_is_all_zero() {
    assert_eq!(IssueStats::from_issues(&[]), IssueStats::default());
}
