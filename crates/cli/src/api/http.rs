// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! reqwest implementation of [`Backend`].

use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use fx_core::{Issue, Task};

use super::backend::{ApiError, ApiResult, Backend, BoxFuture};
use super::types::{
    Ack, Community, DetectOutcome, DetectRequest, DetectResponse, ImageUpload, IssuesResponse,
    Notification, NotificationsResponse, StatusUpdate, TasksResponse, Verification,
    VerifyRequest,
};
use crate::config::Config;

/// Fallback when the server gives no reason for a rejection.
const GENERIC_REJECTION: &str = "the server rejected the request";

/// HTTP backend talking JSON and multipart to the maintenance API.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    pub fn new(config: &Config) -> ApiResult<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        let base_url = Url::parse(&config.api_url)
            .map_err(|e| ApiError::InvalidResponse(format!("bad api_url: {}", e)))?;
        Ok(HttpBackend { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Builds `{base}/{segments...}` with each segment percent-encoded.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidResponse("api_url cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send(request: RequestBuilder) -> ApiResult<Response> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(rejection(status, &body))
    }

    async fn json<T: DeserializeOwned>(request: RequestBuilder) -> ApiResult<T> {
        let response = Self::send(request).await?;
        Ok(response.json().await?)
    }

    async fn ack(request: RequestBuilder) -> ApiResult<()> {
        let response = Self::send(request).await?;
        let body = response.text().await?;
        check_ack(&body)
    }
}

fn image_part(image: ImageUpload) -> ApiResult<Part> {
    Part::bytes(image.bytes)
        .file_name(image.file_name)
        .mime_str(image.mime)
        .map_err(ApiError::from)
}

/// Turns a non-2xx response into a rejection, using the server's own
/// message when the body carries one.
pub(crate) fn rejection(status: StatusCode, body: &str) -> ApiError {
    let message = serde_json::from_str::<Ack>(body)
        .ok()
        .and_then(Ack::reason)
        .unwrap_or_else(|| match status.canonical_reason() {
            Some(reason) => format!("{} ({} {})", GENERIC_REJECTION, status.as_u16(), reason),
            None => format!("{} ({})", GENERIC_REJECTION, status.as_u16()),
        });
    ApiError::Rejected {
        status: Some(status.as_u16()),
        message,
    }
}

/// Accepts empty bodies and `success: true` envelopes; refuses `success: false`.
pub(crate) fn check_ack(body: &str) -> ApiResult<()> {
    if body.trim().is_empty() {
        return Ok(());
    }
    let Ok(ack) = serde_json::from_str::<Ack>(body) else {
        return Ok(());
    };
    if ack.success {
        return Ok(());
    }
    Err(ApiError::Rejected {
        status: None,
        message: ack.reason().unwrap_or_else(|| GENERIC_REJECTION.to_string()),
    })
}

/// Classifies a detection response. 422 means nothing was found.
pub(crate) fn classify_detection(
    status: StatusCode,
    body: &str,
    request: &DetectRequest,
) -> ApiResult<DetectOutcome> {
    if status == StatusCode::UNPROCESSABLE_ENTITY {
        let message = serde_json::from_str::<Ack>(body).ok().and_then(Ack::reason);
        return Ok(DetectOutcome::NoIssueDetected { message });
    }
    if !status.is_success() {
        return Err(rejection(status, body));
    }
    let response: DetectResponse = serde_json::from_str(body)
        .map_err(|e| ApiError::InvalidResponse(format!("detection response: {}", e)))?;
    if !response.no_issue_detected && !response.success {
        return Err(ApiError::Rejected {
            status: None,
            message: response
                .message
                .unwrap_or_else(|| GENERIC_REJECTION.to_string()),
        });
    }
    response
        .into_outcome(request)
        .ok_or_else(|| ApiError::InvalidResponse("detection response has no issueDetails".into()))
}

/// Classifies a verification response. `success: false` is a rejection.
pub(crate) fn classify_verification(body: &str) -> ApiResult<Verification> {
    let verification: Verification = serde_json::from_str(body)
        .map_err(|e| ApiError::InvalidResponse(format!("verification response: {}", e)))?;
    if !verification.success {
        return Err(ApiError::Rejected {
            status: None,
            message: verification
                .message
                .unwrap_or_else(|| GENERIC_REJECTION.to_string()),
        });
    }
    Ok(verification)
}

impl Backend for HttpBackend {
    fn detect_issue(&self, request: DetectRequest) -> BoxFuture<'_, ApiResult<DetectOutcome>> {
        Box::pin(async move {
            let url = self.endpoint(&["api", "issue", "detect"])?;
            let location = serde_json::to_string(&request.location)
                .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;
            let mut form = Form::new()
                .part("image", image_part(request.image.clone())?)
                .text("location", location);
            for (name, value) in [
                ("floor", &request.floor),
                ("sector", &request.sector),
                ("instructions", &request.instructions),
            ] {
                if let Some(value) = value {
                    form = form.text(name, value.clone());
                }
            }
            if let Some(category) = request.category {
                form = form.text("category", category.as_str());
            }

            tracing::debug!(url = %url, "detect issue");
            let response = self.client.post(url).multipart(form).send().await?;
            let status = response.status();
            let body = response.text().await?;
            classify_detection(status, &body, &request)
        })
    }

    fn fetch_tasks(&self, technician_id: &str) -> BoxFuture<'_, ApiResult<Vec<Task>>> {
        let technician_id = technician_id.to_string();
        Box::pin(async move {
            let url = self.endpoint(&["api", "technician", "tasks", &technician_id])?;
            tracing::debug!(url = %url, "fetch tasks");
            let response: TasksResponse = Self::json(self.client.get(url)).await?;
            Ok(response.tasks)
        })
    }

    fn initiate_task(&self, task_id: &str, technician_id: &str) -> BoxFuture<'_, ApiResult<()>> {
        let task_id = task_id.to_string();
        let body = serde_json::json!({ "technicianId": technician_id });
        Box::pin(async move {
            let url = self.endpoint(&["api", "technician", "task", &task_id, "initiate"])?;
            tracing::debug!(url = %url, "initiate task");
            Self::ack(self.client.post(url).json(&body)).await
        })
    }

    fn update_task_status(
        &self,
        task_id: &str,
        update: StatusUpdate,
    ) -> BoxFuture<'_, ApiResult<()>> {
        let task_id = task_id.to_string();
        Box::pin(async move {
            let url = self.endpoint(&["api", "technician", "task", &task_id, "status"])?;
            tracing::debug!(url = %url, status = %update.status, "update task status");
            Self::ack(self.client.put(url).json(&update)).await
        })
    }

    fn verify_photo(&self, request: VerifyRequest) -> BoxFuture<'_, ApiResult<Verification>> {
        Box::pin(async move {
            let url = self.endpoint(&["api", "technician", "verify-photo"])?;
            let form = Form::new()
                .part("image", image_part(request.image)?)
                .text("taskId", request.task_id)
                .text("photoType", request.phase.as_str())
                .text("description", request.description);

            tracing::debug!(url = %url, phase = %request.phase, "verify photo");
            let response = Self::send(self.client.post(url).multipart(form)).await?;
            let body = response.text().await?;
            classify_verification(&body)
        })
    }

    fn fetch_issues(&self, email: &str) -> BoxFuture<'_, ApiResult<Vec<Issue>>> {
        let email = email.to_string();
        Box::pin(async move {
            let url = self.endpoint(&["api", "userData", "issues", &email])?;
            tracing::debug!(url = %url, "fetch issues");
            let response: IssuesResponse = Self::json(self.client.get(url)).await?;
            Ok(response.issues)
        })
    }

    fn fetch_notifications(&self, email: &str) -> BoxFuture<'_, ApiResult<Vec<Notification>>> {
        let email = email.to_string();
        Box::pin(async move {
            let url = self.endpoint(&["api", "userData", "notifications", &email])?;
            tracing::debug!(url = %url, "fetch notifications");
            let response: NotificationsResponse = Self::json(self.client.get(url)).await?;
            Ok(response.notifications)
        })
    }

    fn fetch_community(&self, email: &str) -> BoxFuture<'_, ApiResult<Community>> {
        let email = email.to_string();
        Box::pin(async move {
            let url = self.endpoint(&["api", "userData", "community", &email])?;
            tracing::debug!(url = %url, "fetch community");
            Self::json(self.client.get(url)).await
        })
    }
}
