// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Request and response shapes for the backend API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use fx_core::{Assignment, Category, Issue, PhotoPhase, Task, TaskStatus, TechnicianDetails};

/// An image file ready to be sent as a multipart part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime = mime_for(&file_name);
        ImageUpload {
            file_name,
            mime,
            bytes,
        }
    }

    /// Reads an image from disk.
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        Ok(ImageUpload::new(file_name, bytes))
    }
}

fn mime_for(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "heic" => "image/heic",
        _ => "application/octet-stream",
    }
}

/// Where an issue was reported, sent as the JSON `location` field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportLocation {
    /// Reporter's email; the backend keys the issue to this user.
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Body of `POST /api/issue/detect`.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectRequest {
    pub image: ImageUpload,
    pub location: ReportLocation,
    pub floor: Option<String>,
    pub sector: Option<String>,
    pub instructions: Option<String>,
    /// Reporter's guess at the trade; the detector's own category wins.
    pub category: Option<Category>,
}

/// Assignment block of a detection response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AssignmentWire {
    #[serde(default)]
    pub assigned: bool,
    #[serde(default)]
    pub technician_id: Option<String>,
    #[serde(default)]
    pub technician_details: Option<TechnicianDetails>,
    #[serde(default)]
    pub eta: Option<String>,
}

impl AssignmentWire {
    fn into_assignment(self) -> Option<Assignment> {
        if !self.assigned {
            return None;
        }
        Some(Assignment {
            technician_id: self.technician_id,
            technician_details: self.technician_details,
            eta: self.eta,
        })
    }
}

/// Response body of `POST /api/issue/detect`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DetectResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub no_issue_detected: bool,
    #[serde(default)]
    pub issue_details: Option<Issue>,
    #[serde(default)]
    pub assignment: Option<AssignmentWire>,
    #[serde(default)]
    pub message: Option<String>,
}

/// What the detector made of a report.
#[derive(Debug, Clone, PartialEq)]
pub enum DetectOutcome {
    /// An issue was created, possibly already matched to a technician.
    Detected {
        issue: Issue,
        message: Option<String>,
    },
    /// Nothing wrong was found in the photo. Not an error.
    NoIssueDetected { message: Option<String> },
}

impl DetectResponse {
    /// Builds the issue record from the response, filling descriptive
    /// fields the backend did not echo back from the request.
    pub(crate) fn into_outcome(self, request: &DetectRequest) -> Option<DetectOutcome> {
        if self.no_issue_detected {
            return Some(DetectOutcome::NoIssueDetected {
                message: self.message,
            });
        }
        let mut issue = self.issue_details?;
        if let Some(assignment) = self.assignment.and_then(AssignmentWire::into_assignment) {
            issue.assignment = Some(assignment);
        }
        if issue.floor.is_none() {
            issue.floor = request.floor.clone();
        }
        if issue.sector.is_none() {
            issue.sector = request.sector.clone();
        }
        if issue.instructions.is_none() {
            issue.instructions = request.instructions.clone();
        }
        if issue.category == Category::Other {
            if let Some(category) = request.category {
                issue.category = category;
            }
        }
        if issue.location.is_none() {
            issue.location = serde_json::to_value(&request.location).ok();
        }
        Some(DetectOutcome::Detected {
            issue,
            message: self.message,
        })
    }
}

/// Body of `PUT /api/technician/task/{taskId}/status`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    pub status: TaskStatus,
    pub technician_id: String,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Body of `POST /api/technician/verify-photo`.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifyRequest {
    pub image: ImageUpload,
    pub task_id: String,
    pub phase: PhotoPhase,
    pub description: String,
}

/// Response body of `POST /api/technician/verify-photo`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verification {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub analysis: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    /// Stored location of the uploaded photo, when the backend returns one.
    #[serde(default, alias = "url")]
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct TasksResponse {
    #[serde(default)]
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct IssuesResponse {
    #[serde(default)]
    pub issues: Vec<Issue>,
}

/// An entry of the user's notification feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct NotificationsResponse {
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

/// Read-only community snapshot, passed through as delivered.
pub type Community = serde_json::Value;

/// Generic envelope used for acknowledgements and error bodies.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct Ack {
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Ack {
    pub(crate) fn reason(self) -> Option<String> {
        self.message.or(self.error).filter(|m| !m.trim().is_empty())
    }
}
