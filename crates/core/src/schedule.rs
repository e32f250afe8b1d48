// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ordering of a technician's task queue.
//!
//! Tasks sort by status rank, then priority rank, then newest first.
//! Status dominates priority: a low-priority assigned task always comes
//! before a high-priority completed one.

use std::cmp::Ordering;

use crate::issue::Priority;
use crate::task::{Task, TaskStatus};

/// Higher ranks sort first.
pub fn status_rank(status: TaskStatus) -> u8 {
    match status {
        TaskStatus::Assigned => 3,
        TaskStatus::Ongoing => 2,
        TaskStatus::Pending => 1,
        TaskStatus::Completed => 0,
    }
}

/// Higher ranks sort first.
pub fn priority_rank(priority: Priority) -> u8 {
    match priority {
        Priority::High => 3,
        Priority::Medium => 2,
        Priority::Low => 1,
    }
}

/// Queue comparator: status rank DESC, priority rank DESC, created_at DESC.
pub fn compare(a: &Task, b: &Task) -> Ordering {
    status_rank(b.status())
        .cmp(&status_rank(a.status()))
        .then_with(|| priority_rank(b.priority).cmp(&priority_rank(a.priority)))
        .then_with(|| b.created_at.cmp(&a.created_at))
}

/// Returns the tasks in queue order without touching the input.
///
/// The sort is stable, so fully tied tasks keep their input order.
pub fn order(tasks: &[Task]) -> Vec<Task> {
    let mut ordered = tasks.to_vec();
    ordered.sort_by(compare);
    ordered
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod tests;
