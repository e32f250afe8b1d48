// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Photo-evidence transition table.
//!
//! | status   | phase    | verified | next      |
//! |----------|----------|----------|-----------|
//! | assigned | before   | yes      | ongoing   |
//! | assigned | before   | no       | assigned  |
//! | ongoing  | progress | any      | ongoing   |
//! | ongoing  | after    | yes      | completed |
//! | ongoing  | after    | no       | ongoing   |
//!
//! Any other combination is refused before a request is made.

use crate::error::{Error, Result};
use crate::task::{PhotoPhase, TaskStatus};

/// Result of evaluating one verified (or unverified) photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub next: TaskStatus,
    pub changed: bool,
}

impl Transition {
    fn stay(status: TaskStatus) -> Self {
        Transition {
            next: status,
            changed: false,
        }
    }

    fn to(next: TaskStatus) -> Self {
        Transition {
            next,
            changed: true,
        }
    }
}

/// Photo phases a task in `status` accepts.
pub fn accepted_phases(status: TaskStatus) -> &'static [PhotoPhase] {
    match status {
        TaskStatus::Assigned => &[PhotoPhase::Before],
        TaskStatus::Ongoing => &[PhotoPhase::Progress, PhotoPhase::After],
        TaskStatus::Pending | TaskStatus::Completed => &[],
    }
}

/// Checks that a `phase` photo may be submitted for a `status` task.
pub fn check_phase(status: TaskStatus, phase: PhotoPhase) -> Result<()> {
    let accepted = accepted_phases(status);
    if accepted.contains(&phase) {
        return Ok(());
    }
    let accepted = if accepted.is_empty() {
        "no photos".to_string()
    } else {
        accepted
            .iter()
            .map(PhotoPhase::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };
    Err(Error::PhaseNotAllowed {
        status: status.to_string(),
        phase: phase.to_string(),
        accepted,
    })
}

/// Applies the transition table to one photo verification result.
pub fn evaluate(current: TaskStatus, phase: PhotoPhase, verified: bool) -> Result<Transition> {
    check_phase(current, phase)?;
    let transition = match (current, phase, verified) {
        (TaskStatus::Assigned, PhotoPhase::Before, true) => Transition::to(TaskStatus::Ongoing),
        (TaskStatus::Ongoing, PhotoPhase::After, true) => Transition::to(TaskStatus::Completed),
        (status, _, _) => Transition::stay(status),
    };
    Ok(transition)
}

#[cfg(test)]
#[path = "gate_tests.rs"]
mod tests;
