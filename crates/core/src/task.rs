// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Technician-side task types.
//!
//! A [`Task`] is the technician's projection of an issue once a technician
//! has been matched. Its status only moves forward through [`Task::apply`],
//! and its photo evidence only grows through [`Task::record_photo`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::issue::Priority;

/// Workflow status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// User-side display state. No technician-side path leads here.
    Pending,
    /// Matched to a technician, work not started.
    Assigned,
    /// Work underway.
    Ongoing,
    /// Work finished and evidenced.
    Completed,
}

impl TaskStatus {
    /// Returns the string representation used on the wire and in display.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Assigned => "assigned",
            TaskStatus::Ongoing => "ongoing",
            TaskStatus::Completed => "completed",
        }
    }

    /// Check if a transition from this status to target is valid.
    ///
    /// Only the forward steps assigned -> ongoing -> completed exist.
    pub fn can_transition_to(&self, target: TaskStatus) -> bool {
        matches!(
            (self, target),
            (TaskStatus::Assigned, TaskStatus::Ongoing)
                | (TaskStatus::Ongoing, TaskStatus::Completed)
        )
    }

    /// Returns true if this is a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskStatus::Completed)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(TaskStatus::Pending),
            "assigned" => Ok(TaskStatus::Assigned),
            "ongoing" => Ok(TaskStatus::Ongoing),
            "completed" => Ok(TaskStatus::Completed),
            _ => Err(Error::InvalidTaskStatus(s.to_string())),
        }
    }
}

/// Which stage of the work a photo documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoPhase {
    Before,
    Progress,
    After,
}

impl PhotoPhase {
    /// Returns the string representation used on the wire and in display.
    pub fn as_str(&self) -> &'static str {
        match self {
            PhotoPhase::Before => "before",
            PhotoPhase::Progress => "progress",
            PhotoPhase::After => "after",
        }
    }
}

impl fmt::Display for PhotoPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PhotoPhase {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "before" => Ok(PhotoPhase::Before),
            "progress" => Ok(PhotoPhase::Progress),
            "after" => Ok(PhotoPhase::After),
            _ => Err(Error::InvalidPhotoPhase(s.to_string())),
        }
    }
}

/// Photo evidence attached to a task.
///
/// `verified` is set once, from the verification response, and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: String,
    #[serde(rename = "type")]
    pub phase: PhotoPhase,
    #[serde(default)]
    pub description: String,
    pub timestamp: DateTime<Utc>,
    pub url: String,
    verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<String>,
}

impl Photo {
    /// Creates a photo record from a completed verification.
    pub fn new(
        id: String,
        phase: PhotoPhase,
        url: String,
        verified: bool,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Photo {
            id,
            phase,
            description: String::new(),
            timestamp,
            url,
            verified,
            ai_analysis: None,
        }
    }

    /// Whether the verification collaborator accepted this photo.
    pub fn verified(&self) -> bool {
        self.verified
    }

    /// Sets the description (builder pattern).
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the verifier's analysis text (builder pattern).
    pub fn with_analysis(mut self, analysis: Option<String>) -> Self {
        self.ai_analysis = analysis;
        self
    }
}

/// A unit of work on a technician's queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(default = "crate::issue::unknown_created_at")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub user_email: String,
    status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    started_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    photos: Vec<Photo>,
}

impl Task {
    /// Creates a freshly assigned task with no photos.
    pub fn new(id: String, title: String, priority: Priority, created_at: DateTime<Utc>) -> Self {
        Task {
            id,
            title,
            priority,
            description: String::new(),
            instructions: None,
            created_at,
            user_email: String::new(),
            status: TaskStatus::Assigned,
            started_at: None,
            completed_at: None,
            photos: Vec::new(),
        }
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Photos in the order they were recorded.
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// Appends a photo. Photos are never removed or edited.
    pub fn record_photo(&mut self, photo: Photo) {
        self.photos.push(photo);
    }

    /// Returns true if a verified photo of the given phase is attached.
    pub fn has_verified_photo(&self, phase: PhotoPhase) -> bool {
        self.photos.iter().any(|p| p.phase == phase && p.verified)
    }

    /// Moves the task to `next`, stamping `started_at`/`completed_at`.
    ///
    /// Returns Ok(false) when the task is already in `next`.
    pub fn apply(&mut self, next: TaskStatus, at: DateTime<Utc>) -> Result<bool> {
        if self.status == next {
            return Ok(false);
        }
        if !self.status.can_transition_to(next) {
            return Err(Error::InvalidTransition {
                from: self.status.to_string(),
                to: next.to_string(),
            });
        }
        match next {
            TaskStatus::Ongoing => self.started_at = Some(at),
            TaskStatus::Completed => self.completed_at = Some(at),
            TaskStatus::Pending | TaskStatus::Assigned => {}
        }
        self.status = next;
        Ok(true)
    }

    /// Sets the status without transition checks (builder pattern, for
    /// constructing tasks as delivered by the backend).
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }
}

#[cfg(test)]
#[path = "task_tests.rs"]
mod tests;
