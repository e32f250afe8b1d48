// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client for the maintenance backend.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Services   │────►│   Backend   │────►│  HTTP API   │
//! │ (store/gate)│◄────│   (trait)   │◄────│  (remote)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! Services are constructed with a [`Backend`]; production uses
//! [`HttpBackend`], tests inject an in-memory mock.

mod backend;
mod http;
mod types;

pub use backend::{ApiError, ApiResult, Backend, BoxFuture};
pub use http::HttpBackend;
pub use types::{
    Community, DetectOutcome, DetectRequest, ImageUpload, Notification, ReportLocation,
    StatusUpdate, Verification, VerifyRequest,
};

#[cfg(test)]
pub(crate) mod mock;


#[cfg(test)]
#[path = "http_tests.rs"]
mod http_tests;
