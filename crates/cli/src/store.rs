// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The reporting user's issue list.
//!
//! [`IssueStore`] keeps two collections: issues fetched from the backend,
//! replaced wholesale on every successful fetch, and optimistic issues
//! created locally from detection responses. [`IssueStore::merged`] shows
//! optimistic issues first and drops any whose id the server already
//! knows, so the server's record always wins.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

use fx_core::{Category, Issue, IssueStats};

use crate::api::{
    Backend, Community, DetectOutcome, DetectRequest, ImageUpload, Notification, ReportLocation,
};
use crate::error::{Error, Result};
use crate::validate::{
    validate_email, validate_image, validate_length, MAX_FIELD_LENGTH, MAX_INSTRUCTIONS_LENGTH,
};

/// Default wait before the refresh scheduled after a report.
pub const DEFAULT_REFRESH_DELAY: Duration = Duration::from_secs(3);

/// A new issue as entered by the user.
#[derive(Debug, Clone, Default)]
pub struct ReportRequest {
    pub image: Option<ImageUpload>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<String>,
    pub floor: Option<String>,
    pub sector: Option<String>,
    pub instructions: Option<String>,
    pub category: Option<Category>,
}

impl ReportRequest {
    /// Checks every field and builds the detection request for `email`.
    pub fn into_detect(self, email: &str) -> Result<DetectRequest> {
        validate_email(email)?;

        let image = self.image.ok_or(Error::FieldRequired { field: "image" })?;
        validate_image(&image)?;

        let has_coordinates = self.latitude.is_some() && self.longitude.is_some();
        let address = self.address.filter(|a| !a.trim().is_empty());
        if !has_coordinates && address.is_none() {
            return Err(Error::FieldRequired { field: "location" });
        }

        if let Some(floor) = &self.floor {
            validate_length("floor", floor, MAX_FIELD_LENGTH)?;
        }
        if let Some(sector) = &self.sector {
            validate_length("sector", sector, MAX_FIELD_LENGTH)?;
        }
        if let Some(instructions) = &self.instructions {
            validate_length("instructions", instructions, MAX_INSTRUCTIONS_LENGTH)?;
        }

        Ok(DetectRequest {
            image,
            location: ReportLocation {
                email: email.to_string(),
                latitude: self.latitude,
                longitude: self.longitude,
                address,
            },
            floor: self.floor,
            sector: self.sector,
            instructions: self.instructions,
            category: self.category,
        })
    }
}

/// Result of [`IssueStore::report`].
#[derive(Debug)]
pub enum ReportOutcome {
    /// The issue was created and shown optimistically. `refresh` resolves
    /// once the scheduled re-fetch has run.
    Created {
        issue: Issue,
        message: Option<String>,
        refresh: JoinHandle<()>,
    },
    /// The detector found nothing; retake or pick another photo.
    NoIssueDetected { message: Option<String> },
}

#[derive(Debug, Default)]
struct StoreState {
    server: Vec<Issue>,
    optimistic: Vec<Issue>,
}

impl StoreState {
    fn merged(&self) -> Vec<Issue> {
        let pending = self
            .optimistic
            .iter()
            .filter(|o| !self.server.iter().any(|s| s.id == o.id));
        pending.chain(self.server.iter()).cloned().collect()
    }
}

fn lock(state: &Mutex<StoreState>) -> MutexGuard<'_, StoreState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

async fn fetch_into<B: Backend>(backend: &B, state: &Mutex<StoreState>, email: &str) -> Result<()> {
    let issues = backend.fetch_issues(email).await?;
    tracing::debug!(count = issues.len(), "issues refreshed");
    lock(state).server = issues;
    Ok(())
}

/// Issue list for one reporting user.
pub struct IssueStore<B> {
    backend: Arc<B>,
    state: Arc<Mutex<StoreState>>,
    email: String,
    refresh_delay: Duration,
}

impl<B: Backend + 'static> IssueStore<B> {
    pub fn new(backend: Arc<B>, email: impl Into<String>) -> Self {
        IssueStore {
            backend,
            state: Arc::new(Mutex::new(StoreState::default())),
            email: email.into(),
            refresh_delay: DEFAULT_REFRESH_DELAY,
        }
    }

    pub fn with_refresh_delay(mut self, delay: Duration) -> Self {
        self.refresh_delay = delay;
        self
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Reports a new issue.
    ///
    /// Nothing is sent when validation fails. A detected issue is added
    /// optimistically and one refresh is scheduled after the configured
    /// delay.
    pub async fn report(&self, request: ReportRequest) -> Result<ReportOutcome> {
        let request = request.into_detect(&self.email)?;
        match self.backend.detect_issue(request).await? {
            DetectOutcome::NoIssueDetected { message } => {
                tracing::info!("no issue detected");
                Ok(ReportOutcome::NoIssueDetected { message })
            }
            DetectOutcome::Detected { issue, message } => {
                tracing::info!(issue = %issue.id, "issue reported");
                self.insert_optimistic(issue.clone());
                let refresh = self.schedule_refresh();
                Ok(ReportOutcome::Created {
                    issue,
                    message,
                    refresh,
                })
            }
        }
    }

    /// Replaces the server collection. On failure the previous state is kept.
    pub async fn refresh(&self) -> Result<()> {
        fetch_into(self.backend.as_ref(), &self.state, &self.email).await
    }

    /// Optimistic issues not yet known to the server, then server issues.
    pub fn merged(&self) -> Vec<Issue> {
        lock(&self.state).merged()
    }

    pub fn stats(&self) -> IssueStats {
        IssueStats::from_issues(&self.merged())
    }

    pub fn find(&self, id: &str) -> Option<Issue> {
        self.merged().into_iter().find(|i| i.id == id)
    }

    pub async fn notifications(&self) -> Result<Vec<Notification>> {
        Ok(self.backend.fetch_notifications(&self.email).await?)
    }

    pub async fn community(&self) -> Result<Community> {
        Ok(self.backend.fetch_community(&self.email).await?)
    }

    fn insert_optimistic(&self, issue: Issue) {
        let mut state = lock(&self.state);
        if state.optimistic.iter().any(|i| i.id == issue.id) {
            tracing::debug!(issue = %issue.id, "duplicate optimistic issue ignored");
            return;
        }
        state.optimistic.push(issue);
    }

    fn schedule_refresh(&self) -> JoinHandle<()> {
        let backend = Arc::clone(&self.backend);
        let state = Arc::clone(&self.state);
        let email = self.email.clone();
        let delay = self.refresh_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Err(e) = fetch_into(backend.as_ref(), &state, &email).await {
                tracing::warn!(error = %e, "scheduled issue refresh failed");
            }
        })
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
