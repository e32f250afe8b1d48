// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::{DateTime, TimeZone, Utc};
use yare::parameterized;

fn t(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

fn task(id: &str, status: TaskStatus, priority: Priority, created: i64) -> Task {
    Task::new(id.into(), id.into(), priority, t(created)).with_status(status)
}

fn ids(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|t| t.id.as_str()).collect()
}

#[test]
fn status_rank_dominates_priority() {
    let a = task("A", TaskStatus::Pending, Priority::Low, 1);
    let b = task("B", TaskStatus::Assigned, Priority::Medium, 2);
    let c = task("C", TaskStatus::Ongoing, Priority::High, 3);

    let ordered = order(&[a, b, c]);
    assert_eq!(ids(&ordered), vec!["B", "C", "A"]);
}

#[test]
fn low_assigned_outranks_high_completed() {
    let done = task("done", TaskStatus::Completed, Priority::High, 9);
    let fresh = task("fresh", TaskStatus::Assigned, Priority::Low, 1);
    assert_eq!(ids(&order(&[done, fresh])), vec!["fresh", "done"]);
}

#[test]
fn priority_breaks_status_ties() {
    let low = task("low", TaskStatus::Ongoing, Priority::Low, 5);
    let high = task("high", TaskStatus::Ongoing, Priority::High, 1);
    let medium = task("medium", TaskStatus::Ongoing, Priority::Medium, 3);
    assert_eq!(
        ids(&order(&[low, high, medium])),
        vec!["high", "medium", "low"]
    );
}

#[test]
fn newer_first_when_status_and_priority_tie() {
    let old = task("old", TaskStatus::Assigned, Priority::High, 1);
    let new = task("new", TaskStatus::Assigned, Priority::High, 2);
    assert_eq!(ids(&order(&[old, new])), vec!["new", "old"]);
}

#[test]
fn full_ties_keep_input_order() {
    let x = task("x", TaskStatus::Assigned, Priority::High, 1);
    let y = task("y", TaskStatus::Assigned, Priority::High, 1);
    assert_eq!(ids(&order(&[x.clone(), y.clone()])), vec!["x", "y"]);
    assert_eq!(ids(&order(&[y, x])), vec!["y", "x"]);
}

#[test]
fn order_does_not_mutate_input_and_is_repeatable() {
    let input = vec![
        task("a", TaskStatus::Completed, Priority::Low, 1),
        task("b", TaskStatus::Ongoing, Priority::Low, 2),
        task("c", TaskStatus::Assigned, Priority::Medium, 3),
    ];
    let first = order(&input);
    let second = order(&input);

    assert_eq!(ids(&input), vec!["a", "b", "c"]);
    assert_eq!(first, second);
    assert_eq!(ids(&first), vec!["c", "b", "a"]);
}

#[test]
fn tasks_without_created_at_keep_input_order() {
    let json = r#"[
        {"id": "A", "status": "assigned"},
        {"id": "B", "status": "assigned"},
        {"id": "C", "status": "assigned"}
    ]"#;
    let tasks: Vec<Task> = serde_json::from_str(json).unwrap();

    assert!(tasks.iter().all(|t| t.created_at == tasks[0].created_at));
    assert_eq!(ids(&order(&tasks)), vec!["A", "B", "C"]);
}

#[parameterized(
    assigned = { TaskStatus::Assigned, 3 },
    ongoing = { TaskStatus::Ongoing, 2 },
    pending = { TaskStatus::Pending, 1 },
    completed = { TaskStatus::Completed, 0 },
)]
fn status_ranks(status: TaskStatus, rank: u8) {
    assert_eq!(status_rank(status), rank);
}

#[parameterized(
    high = { Priority::High, 3 },
    medium = { Priority::Medium, 2 },
    low = { Priority::Low, 1 },
)]
fn priority_ranks(priority: Priority, rank: u8) {
    assert_eq!(priority_rank(priority), rank);
}
