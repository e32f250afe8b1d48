// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Backend abstraction.
//!
//! One method per backend endpoint. Implementations own their inputs so the
//! returned futures only borrow `self`.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use fx_core::{Issue, Task};

use super::types::{
    Community, DetectOutcome, DetectRequest, Notification, StatusUpdate, Verification,
    VerifyRequest,
};

/// Error type for backend calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (connection, timeout, TLS).
    #[error("network error: {0}\n  hint: check your connection and try again")]
    Network(String),

    /// The server answered with a non-2xx status or `success: false`.
    #[error("{message}")]
    Rejected { status: Option<u16>, message: String },

    /// The server answered 2xx with a body we could not use.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::InvalidResponse(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

/// Result type for backend calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Boxed future returned by [`Backend`] methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The maintenance backend as seen by the client.
pub trait Backend: Send + Sync {
    /// `POST /api/issue/detect`
    fn detect_issue(&self, request: DetectRequest) -> BoxFuture<'_, ApiResult<DetectOutcome>>;

    /// `GET /api/technician/tasks/{technicianId}`
    fn fetch_tasks(&self, technician_id: &str) -> BoxFuture<'_, ApiResult<Vec<Task>>>;

    /// `POST /api/technician/task/{taskId}/initiate`
    fn initiate_task(&self, task_id: &str, technician_id: &str) -> BoxFuture<'_, ApiResult<()>>;

    /// `PUT /api/technician/task/{taskId}/status`
    fn update_task_status(
        &self,
        task_id: &str,
        update: StatusUpdate,
    ) -> BoxFuture<'_, ApiResult<()>>;

    /// `POST /api/technician/verify-photo`
    fn verify_photo(&self, request: VerifyRequest) -> BoxFuture<'_, ApiResult<Verification>>;

    /// `GET /api/userData/issues/{email}`
    fn fetch_issues(&self, email: &str) -> BoxFuture<'_, ApiResult<Vec<Issue>>>;

    /// `GET /api/userData/notifications/{email}`
    fn fetch_notifications(&self, email: &str) -> BoxFuture<'_, ApiResult<Vec<Notification>>>;

    /// `GET /api/userData/community/{email}`
    fn fetch_community(&self, email: &str) -> BoxFuture<'_, ApiResult<Community>>;
}

impl<B: Backend + ?Sized> Backend for Arc<B> {
    fn detect_issue(&self, request: DetectRequest) -> BoxFuture<'_, ApiResult<DetectOutcome>> {
        (**self).detect_issue(request)
    }

    fn fetch_tasks(&self, technician_id: &str) -> BoxFuture<'_, ApiResult<Vec<Task>>> {
        (**self).fetch_tasks(technician_id)
    }

    fn initiate_task(&self, task_id: &str, technician_id: &str) -> BoxFuture<'_, ApiResult<()>> {
        (**self).initiate_task(task_id, technician_id)
    }

    fn update_task_status(
        &self,
        task_id: &str,
        update: StatusUpdate,
    ) -> BoxFuture<'_, ApiResult<()>> {
        (**self).update_task_status(task_id, update)
    }

    fn verify_photo(&self, request: VerifyRequest) -> BoxFuture<'_, ApiResult<Verification>> {
        (**self).verify_photo(request)
    }

    fn fetch_issues(&self, email: &str) -> BoxFuture<'_, ApiResult<Vec<Issue>>> {
        (**self).fetch_issues(email)
    }

    fn fetch_notifications(&self, email: &str) -> BoxFuture<'_, ApiResult<Vec<Notification>>> {
        (**self).fetch_notifications(email)
    }

    fn fetch_community(&self, email: &str) -> BoxFuture<'_, ApiResult<Community>> {
        (**self).fetch_community(email)
    }
}
