// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use crate::api::ApiError;

/// All possible errors that can occur in the fixrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not logged in: run 'fixit login' first")]
    NotLoggedIn,

    #[error("this command needs a {required} account (logged in as {actual})")]
    WrongRole {
        required: &'static str,
        actual: String,
    },

    #[error("task not found: {0}")]
    TaskNotFound(String),

    #[error("issue not found: {0}\n  hint: run 'fixit issues' to list your reports")]
    IssueNotFound(String),

    #[error("task {0} is already being updated\n  hint: wait for the current upload to finish")]
    TaskBusy(String),

    #[error("task {0} has no verified after photo\n  hint: upload one with 'fixit upload {0} --phase after <file>'")]
    EvidenceRequired(String),

    // Validation errors: raised before any request is sent
    #[error("{field} is required")]
    FieldRequired { field: &'static str },

    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    #[error("{field} too long ({actual} chars, max {max})")]
    FieldTooLong {
        field: &'static str,
        actual: usize,
        max: usize,
    },

    #[error("invalid email address: '{0}'")]
    InvalidEmail(String),

    #[error("invalid phone number: '{0}'\n  hint: use 10-15 digits, optionally starting with +")]
    InvalidPhone(String),

    #[error("image is empty: {0}")]
    EmptyImage(String),

    #[error("{0}")]
    Core(#[from] fx_core::Error),

    #[error("{0}")]
    Api(#[from] ApiError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

/// A specialized Result type for fixrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
