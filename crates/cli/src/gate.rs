// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Technician task board.
//!
//! [`TaskBoard`] owns a technician's task list and drives it through the
//! photo-evidence transition table in [`fx_core::gate`]. Each photo is
//! verified by the backend; a verified transition is pushed to the backend
//! before it is applied locally, so a failed push never leaves the local
//! task ahead of the server.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use tokio_util::sync::CancellationToken;

use fx_core::gate::{self, Transition};
use fx_core::schedule;
use fx_core::{Photo, PhotoPhase, Task, TaskStatus, Technician, TechnicianStatus};

use crate::api::{Backend, ImageUpload, StatusUpdate, Verification, VerifyRequest};
use crate::error::{Error, Result};

/// What happened to one file of an upload batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoOutcome {
    /// Recorded as verified.
    Verified {
        file: String,
        analysis: Option<String>,
    },
    /// Recorded, but the verifier did not accept it.
    Unverified {
        file: String,
        analysis: Option<String>,
    },
    /// The verification request failed. Nothing was recorded.
    Failed { file: String, message: String },
    /// Verified and recorded, but the status change was not accepted by
    /// the backend. The task keeps its previous status.
    StatusSyncFailed { file: String, message: String },
    /// Not sent, or abandoned in flight.
    Cancelled { file: String },
}

impl PhotoOutcome {
    pub fn file(&self) -> &str {
        match self {
            PhotoOutcome::Verified { file, .. }
            | PhotoOutcome::Unverified { file, .. }
            | PhotoOutcome::Failed { file, .. }
            | PhotoOutcome::StatusSyncFailed { file, .. }
            | PhotoOutcome::Cancelled { file } => file,
        }
    }

    /// True when a photo entry was added to the task.
    pub fn recorded(&self) -> bool {
        matches!(
            self,
            PhotoOutcome::Verified { .. }
                | PhotoOutcome::Unverified { .. }
                | PhotoOutcome::StatusSyncFailed { .. }
        )
    }
}

/// Result of [`TaskBoard::upload`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReport {
    pub outcomes: Vec<PhotoOutcome>,
    pub final_status: TaskStatus,
}

/// Releases a task's in-flight flag when dropped.
struct BusyGuard<'a> {
    busy: &'a Mutex<HashSet<String>>,
    task_id: String,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        lock(self.busy).remove(&self.task_id);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A technician's queue of tasks backed by `B`.
pub struct TaskBoard<B> {
    backend: B,
    tasks: Mutex<Vec<Task>>,
    technician: Mutex<Technician>,
    busy: Mutex<HashSet<String>>,
}

impl<B: Backend> TaskBoard<B> {
    pub fn new(backend: B, technician: Technician) -> Self {
        TaskBoard {
            backend,
            tasks: Mutex::new(Vec::new()),
            technician: Mutex::new(technician),
            busy: Mutex::new(HashSet::new()),
        }
    }

    /// Replaces the task list with the backend's.
    ///
    /// Tasks with an operation in flight keep their local copy until it
    /// finishes.
    pub async fn refresh(&self) -> Result<()> {
        let technician_id = self.technician_id();
        let mut fetched = self.backend.fetch_tasks(&technician_id).await?;
        tracing::debug!(count = fetched.len(), "tasks refreshed");

        let busy = lock(&self.busy);
        let mut tasks = lock(&self.tasks);
        fetched.retain(|t| !busy.contains(&t.id));
        fetched.extend(tasks.iter().filter(|t| busy.contains(&t.id)).cloned());
        *tasks = schedule::order(&fetched);
        Ok(())
    }

    /// Tasks in queue order.
    pub fn tasks(&self) -> Vec<Task> {
        lock(&self.tasks).clone()
    }

    pub fn task(&self, task_id: &str) -> Result<Task> {
        lock(&self.tasks)
            .iter()
            .find(|t| t.id == task_id)
            .cloned()
            .ok_or_else(|| Error::TaskNotFound(task_id.to_string()))
    }

    pub fn technician(&self) -> Technician {
        lock(&self.technician).clone()
    }

    pub fn set_availability(&self, status: TechnicianStatus) {
        lock(&self.technician).set_status(status);
    }

    /// Starts work on an assigned task. The local status only moves once
    /// the backend has accepted the request.
    pub async fn initiate(&self, task_id: &str) -> Result<TaskStatus> {
        let _guard = self.claim(task_id)?;
        let status = self.task(task_id)?.status();
        if !status.can_transition_to(TaskStatus::Ongoing) {
            return Err(fx_core::Error::InvalidTransition {
                from: status.to_string(),
                to: TaskStatus::Ongoing.to_string(),
            }
            .into());
        }

        let technician_id = self.technician_id();
        self.backend.initiate_task(task_id, &technician_id).await?;
        self.apply(task_id, TaskStatus::Ongoing)?;
        Ok(TaskStatus::Ongoing)
    }

    /// Verifies `files` one at a time, in order, as `phase` photos.
    ///
    /// The phase is checked against the task's status before anything is
    /// sent. Once a file moves the task, the rest of the batch is recorded
    /// without further transitions.
    pub async fn upload(
        &self,
        task_id: &str,
        phase: PhotoPhase,
        files: Vec<ImageUpload>,
        description: &str,
        cancel: &CancellationToken,
    ) -> Result<UploadReport> {
        let _guard = self.claim(task_id)?;
        let start = self.task(task_id)?.status();
        gate::check_phase(start, phase)?;

        let mut outcomes = Vec::with_capacity(files.len());
        let mut files = files.into_iter();
        for image in files.by_ref() {
            let file = image.file_name.clone();
            if cancel.is_cancelled() {
                outcomes.push(PhotoOutcome::Cancelled { file });
                break;
            }

            let request = VerifyRequest {
                image,
                task_id: task_id.to_string(),
                phase,
                description: description.to_string(),
            };
            let result = tokio::select! {
                biased;
                _ = cancel.cancelled() => None,
                result = self.backend.verify_photo(request) => Some(result),
            };
            let verification = match result {
                None => {
                    tracing::info!(task = task_id, file = %file, "upload cancelled");
                    outcomes.push(PhotoOutcome::Cancelled { file });
                    break;
                }
                Some(Err(e)) => {
                    tracing::warn!(task = task_id, file = %file, error = %e, "verification failed");
                    outcomes.push(PhotoOutcome::Failed {
                        file,
                        message: e.to_string(),
                    });
                    continue;
                }
                Some(Ok(v)) => v,
            };

            let current = self.task(task_id)?.status();
            let transition = if current == start {
                gate::evaluate(current, phase, verification.verified)?
            } else {
                Transition {
                    next: current,
                    changed: false,
                }
            };

            let photo = self
                .next_photo(task_id, phase, &file, &verification)?
                .with_description(description);

            if transition.changed {
                if let Err(e) = self.push_status(task_id, transition.next).await {
                    tracing::warn!(task = task_id, status = %transition.next, error = %e, "status push failed");
                    self.record(task_id, photo)?;
                    outcomes.push(PhotoOutcome::StatusSyncFailed {
                        file,
                        message: e.to_string(),
                    });
                    continue;
                }
                self.record(task_id, photo)?;
                self.apply(task_id, transition.next)?;
            } else {
                self.record(task_id, photo)?;
            }

            outcomes.push(if verification.verified {
                PhotoOutcome::Verified {
                    file,
                    analysis: verification.analysis,
                }
            } else {
                PhotoOutcome::Unverified {
                    file,
                    analysis: verification.analysis,
                }
            });
        }
        outcomes.extend(files.map(|image| PhotoOutcome::Cancelled {
            file: image.file_name,
        }));

        Ok(UploadReport {
            outcomes,
            final_status: self.task(task_id)?.status(),
        })
    }

    /// Completes an ongoing task that already carries a verified after
    /// photo, e.g. when the status push after verification failed.
    pub async fn complete(&self, task_id: &str) -> Result<TaskStatus> {
        let _guard = self.claim(task_id)?;
        let task = self.task(task_id)?;
        if task.status() != TaskStatus::Ongoing || !task.has_verified_photo(PhotoPhase::After) {
            return Err(Error::EvidenceRequired(task_id.to_string()));
        }
        self.push_status(task_id, TaskStatus::Completed).await?;
        self.apply(task_id, TaskStatus::Completed)?;
        Ok(TaskStatus::Completed)
    }

    fn technician_id(&self) -> String {
        lock(&self.technician).id.clone()
    }

    fn claim(&self, task_id: &str) -> Result<BusyGuard<'_>> {
        if !lock(&self.busy).insert(task_id.to_string()) {
            return Err(Error::TaskBusy(task_id.to_string()));
        }
        Ok(BusyGuard {
            busy: &self.busy,
            task_id: task_id.to_string(),
        })
    }

    async fn push_status(&self, task_id: &str, status: TaskStatus) -> Result<()> {
        let update = StatusUpdate {
            status,
            technician_id: self.technician_id(),
            completed_at: (status == TaskStatus::Completed).then(Utc::now),
        };
        self.backend.update_task_status(task_id, update).await?;
        Ok(())
    }

    /// Builds the next photo entry of `task_id` from a verification.
    fn next_photo(
        &self,
        task_id: &str,
        phase: PhotoPhase,
        file: &str,
        verification: &Verification,
    ) -> Result<Photo> {
        let count = self.task(task_id)?.photos().len();
        let id = format!("{}-{}-{}", task_id, phase, count + 1);
        let url = verification
            .photo_url
            .clone()
            .unwrap_or_else(|| file.to_string());
        Ok(
            Photo::new(id, phase, url, verification.verified, Utc::now())
                .with_analysis(verification.analysis.clone()),
        )
    }

    fn record(&self, task_id: &str, photo: Photo) -> Result<()> {
        let mut tasks = lock(&self.tasks);
        let task = tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or_else(|| Error::TaskNotFound(task_id.to_string()))?;
        task.record_photo(photo);
        Ok(())
    }

    /// Applies a status change locally and re-sorts the queue. Completion
    /// updates the technician once per transition.
    fn apply(&self, task_id: &str, next: TaskStatus) -> Result<()> {
        let changed = {
            let mut tasks = lock(&self.tasks);
            let task = tasks
                .iter_mut()
                .find(|t| t.id == task_id)
                .ok_or_else(|| Error::TaskNotFound(task_id.to_string()))?;
            let changed = task.apply(next, Utc::now())?;
            *tasks = schedule::order(&tasks);
            changed
        };
        if changed {
            tracing::info!(task = task_id, status = %next, "task status changed");
            if next == TaskStatus::Completed {
                lock(&self.technician).record_completion();
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "gate_tests.rs"]
mod tests;
