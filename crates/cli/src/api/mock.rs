// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory backend for service tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::Notify;

use fx_core::{Issue, PhotoPhase, Task, TaskStatus};

use super::backend::{ApiError, ApiResult, Backend, BoxFuture};
use super::types::{
    Community, DetectOutcome, DetectRequest, Notification, StatusUpdate, Verification,
    VerifyRequest,
};

/// A recorded backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Detect(String),
    FetchTasks(String),
    Initiate(String),
    UpdateStatus(String, TaskStatus),
    Verify(String, PhotoPhase, String),
    FetchIssues(String),
    FetchNotifications(String),
    FetchCommunity(String),
}

#[derive(Default)]
struct MockState {
    detections: VecDeque<ApiResult<DetectOutcome>>,
    verifications: VecDeque<ApiResult<Verification>>,
    status_results: VecDeque<ApiResult<()>>,
    initiate_results: VecDeque<ApiResult<()>>,
    tasks: Vec<Task>,
    issues: Vec<Issue>,
    issues_error: Option<String>,
    notifications: Vec<Notification>,
    calls: Vec<Call>,
}

/// Scriptable backend. Unscripted calls succeed with empty results.
#[derive(Default)]
pub struct MockBackend {
    state: Mutex<MockState>,
    verify_hold: Mutex<Option<Arc<Notify>>>,
}

pub fn network_error() -> ApiError {
    ApiError::Network("connection refused".to_string())
}

pub fn verified(verified: bool) -> ApiResult<Verification> {
    Ok(Verification {
        success: true,
        verified,
        analysis: Some(if verified { "looks right" } else { "wrong scene" }.to_string()),
        message: None,
        photo_url: None,
    })
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn with_tasks(self, tasks: Vec<Task>) -> Self {
        self.state().tasks = tasks;
        self
    }

    pub fn set_tasks(&self, tasks: Vec<Task>) {
        self.state().tasks = tasks;
    }

    pub fn push_detection(&self, result: ApiResult<DetectOutcome>) {
        self.state().detections.push_back(result);
    }

    pub fn push_verification(&self, result: ApiResult<Verification>) {
        self.state().verifications.push_back(result);
    }

    pub fn push_status_result(&self, result: ApiResult<()>) {
        self.state().status_results.push_back(result);
    }

    pub fn push_initiate_result(&self, result: ApiResult<()>) {
        self.state().initiate_results.push_back(result);
    }

    pub fn set_issues(&self, issues: Vec<Issue>) {
        let mut state = self.state();
        state.issues = issues;
        state.issues_error = None;
    }

    pub fn fail_issues(&self, message: &str) {
        self.state().issues_error = Some(message.to_string());
    }

    pub fn set_notifications(&self, notifications: Vec<Notification>) {
        self.state().notifications = notifications;
    }

    /// Makes every verification wait until the returned handle is notified.
    pub fn hold_verifications(&self) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        *self
            .verify_hold
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&notify));
        notify
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state().calls.clone()
    }

    fn record(&self, call: Call) {
        self.state().calls.push(call);
    }
}

impl Backend for MockBackend {
    fn detect_issue(&self, request: DetectRequest) -> BoxFuture<'_, ApiResult<DetectOutcome>> {
        Box::pin(async move {
            self.record(Call::Detect(request.image.file_name.clone()));
            self.state()
                .detections
                .pop_front()
                .unwrap_or_else(|| Ok(DetectOutcome::NoIssueDetected { message: None }))
        })
    }

    fn fetch_tasks(&self, technician_id: &str) -> BoxFuture<'_, ApiResult<Vec<Task>>> {
        let technician_id = technician_id.to_string();
        Box::pin(async move {
            self.record(Call::FetchTasks(technician_id));
            Ok(self.state().tasks.clone())
        })
    }

    fn initiate_task(&self, task_id: &str, _technician_id: &str) -> BoxFuture<'_, ApiResult<()>> {
        let task_id = task_id.to_string();
        Box::pin(async move {
            self.record(Call::Initiate(task_id));
            self.state().initiate_results.pop_front().unwrap_or(Ok(()))
        })
    }

    fn update_task_status(
        &self,
        task_id: &str,
        update: StatusUpdate,
    ) -> BoxFuture<'_, ApiResult<()>> {
        let task_id = task_id.to_string();
        Box::pin(async move {
            self.record(Call::UpdateStatus(task_id, update.status));
            self.state().status_results.pop_front().unwrap_or(Ok(()))
        })
    }

    fn verify_photo(&self, request: VerifyRequest) -> BoxFuture<'_, ApiResult<Verification>> {
        Box::pin(async move {
            self.record(Call::Verify(
                request.task_id.clone(),
                request.phase,
                request.image.file_name.clone(),
            ));
            let hold = self
                .verify_hold
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone();
            if let Some(hold) = hold {
                hold.notified().await;
            }
            self.state()
                .verifications
                .pop_front()
                .unwrap_or_else(|| verified(true))
        })
    }

    fn fetch_issues(&self, email: &str) -> BoxFuture<'_, ApiResult<Vec<Issue>>> {
        let email = email.to_string();
        Box::pin(async move {
            self.record(Call::FetchIssues(email));
            let state = self.state();
            match &state.issues_error {
                Some(message) => Err(ApiError::Network(message.clone())),
                None => Ok(state.issues.clone()),
            }
        })
    }

    fn fetch_notifications(&self, email: &str) -> BoxFuture<'_, ApiResult<Vec<Notification>>> {
        let email = email.to_string();
        Box::pin(async move {
            self.record(Call::FetchNotifications(email));
            Ok(self.state().notifications.clone())
        })
    }

    fn fetch_community(&self, email: &str) -> BoxFuture<'_, ApiResult<Community>> {
        let email = email.to_string();
        Box::pin(async move {
            self.record(Call::FetchCommunity(email.clone()));
            Ok(serde_json::json!({ "email": email, "members": [] }))
        })
    }
}
