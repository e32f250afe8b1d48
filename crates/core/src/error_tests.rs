// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn test_invalid_priority_lists_valid_values() {
    let msg = Error::InvalidPriority("urgent".to_string()).to_string();
    assert!(msg.contains("'urgent'"));
    assert!(msg.contains("high, medium, low"));
}

#[test]
fn test_phase_not_allowed_names_accepted_phases() {
    let err = Error::PhaseNotAllowed {
        status: "assigned".to_string(),
        phase: "after".to_string(),
        accepted: "before".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.contains("after photo"));
    assert!(msg.contains("while the task is assigned"));
    assert!(msg.contains("accept: before"));
}

#[test]
fn test_invalid_transition_display() {
    let err = Error::InvalidTransition {
        from: "completed".to_string(),
        to: "ongoing".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "invalid status transition: cannot go from completed to ongoing"
    );
}
