// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for fx-core operations.

use thiserror::Error;

/// All possible errors that can occur in fx-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid category: '{0}'\n  hint: valid categories are: electrical, plumbing, cleaning, landscaping, hvac, security, other")]
    InvalidCategory(String),

    #[error("invalid priority: '{0}'\n  hint: valid priorities are: high, medium, low")]
    InvalidPriority(String),

    #[error("invalid task status: '{0}'\n  hint: valid statuses are: pending, assigned, ongoing, completed")]
    InvalidTaskStatus(String),

    #[error("invalid photo phase: '{0}'\n  hint: valid phases are: before, progress, after")]
    InvalidPhotoPhase(String),

    #[error("invalid technician status: '{0}'\n  hint: valid statuses are: available, busy, offline")]
    InvalidTechnicianStatus(String),

    #[error("invalid role: '{0}'\n  hint: valid roles are: user, technician, admin")]
    InvalidRole(String),

    #[error("a {phase} photo cannot be submitted while the task is {status}\n  hint: tasks in {status} accept: {accepted}")]
    PhaseNotAllowed {
        status: String,
        phase: String,
        accepted: String,
    },

    #[error("invalid status transition: cannot go from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error("camera unavailable: {0}")]
    CaptureUnavailable(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for fx-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
