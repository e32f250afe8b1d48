// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core issue types for user-reported facility problems.
//!
//! This module contains Issue, Category, Priority, and Assignment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::status::{canonical_status, CanonicalStatus};

/// Kind of maintenance work an issue needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Category {
    Electrical,
    Plumbing,
    Cleaning,
    Landscaping,
    Hvac,
    Security,
    /// Anything the detector could not place in a known trade.
    #[default]
    Other,
}

impl Category {
    /// Returns the string representation used on the wire and in display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electrical => "electrical",
            Category::Plumbing => "plumbing",
            Category::Cleaning => "cleaning",
            Category::Landscaping => "landscaping",
            Category::Hvac => "hvac",
            Category::Security => "security",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "electrical" => Ok(Category::Electrical),
            "plumbing" => Ok(Category::Plumbing),
            "cleaning" => Ok(Category::Cleaning),
            "landscaping" => Ok(Category::Landscaping),
            "hvac" => Ok(Category::Hvac),
            "security" => Ok(Category::Security),
            "other" => Ok(Category::Other),
            _ => Err(Error::InvalidCategory(s.to_string())),
        }
    }
}

// Backend categories are free text; unknown ones land in Other.
impl From<String> for Category {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(Category::Other)
    }
}

/// Urgency of an issue, fixed when the issue is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Returns the string representation used on the wire and in display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(Error::InvalidPriority(s.to_string())),
        }
    }
}

impl From<String> for Priority {
    fn from(s: String) -> Self {
        s.parse().unwrap_or_default()
    }
}

/// Contact details of the matched technician, as returned by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicianDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
}

/// A technician match for an issue. Present iff a technician was matched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technician_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technician_details: Option<TechnicianDetails>,
    /// Free-form arrival estimate (e.g. "30 minutes").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eta: Option<String>,
}

/// Assignment block as the backend sends it. An explicit
/// `"assigned": false` means no technician was matched.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AssignmentWire {
    #[serde(default)]
    assigned: Option<bool>,
    #[serde(default)]
    technician_id: Option<String>,
    #[serde(default)]
    technician_details: Option<TechnicianDetails>,
    #[serde(default)]
    eta: Option<String>,
}

fn deserialize_assignment<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<Assignment>, D::Error>
where
    D: Deserializer<'de>,
{
    let wire = Option::<AssignmentWire>::deserialize(deserializer)?;
    Ok(wire
        .filter(|w| w.assigned != Some(false))
        .map(|w| Assignment {
            technician_id: w.technician_id,
            technician_details: w.technician_details,
            eta: w.eta,
        }))
}

/// Creation time of a record the backend sent without one. Fixed, so
/// such records tie in ordering and keep their input order.
pub(crate) fn unknown_created_at() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}

fn default_raw_status() -> String {
    "reported".to_string()
}

/// A user-reported maintenance problem.
///
/// The canonical status is never stored; see [`Issue::canonical_status`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Stable identifier assigned by the backend (e.g. `ISS-100`).
    #[serde(alias = "_id", alias = "issueId")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub priority: Priority,
    /// Status string exactly as the backend reported it.
    #[serde(rename = "status", default = "default_raw_status")]
    pub raw_status: String,
    /// Opaque location payload (coordinates, address, reporter email).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    /// Image references in upload order.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(
        default,
        alias = "assignedTechnician",
        deserialize_with = "deserialize_assignment",
        skip_serializing_if = "Option::is_none"
    )]
    pub assignment: Option<Assignment>,
    #[serde(alias = "dateReported", default = "unknown_created_at")]
    pub created_at: DateTime<Utc>,
}

impl Issue {
    /// Creates an unassigned issue in the `reported` state.
    pub fn new(id: String, title: String, priority: Priority, created_at: DateTime<Utc>) -> Self {
        Issue {
            id,
            title,
            description: String::new(),
            category: Category::Other,
            priority,
            raw_status: default_raw_status(),
            location: None,
            floor: None,
            sector: None,
            instructions: None,
            images: Vec::new(),
            assignment: None,
            created_at,
        }
    }

    /// Returns true once a technician has been matched.
    pub fn is_assigned(&self) -> bool {
        self.assignment.is_some()
    }

    /// Derives the canonical status from the raw status and assignment.
    pub fn canonical_status(&self) -> CanonicalStatus {
        canonical_status(&self.raw_status, self.is_assigned())
    }

    /// Sets the category (builder pattern).
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Sets the raw backend status (builder pattern).
    pub fn with_raw_status(mut self, raw_status: impl Into<String>) -> Self {
        self.raw_status = raw_status.into();
        self
    }

    /// Attaches a technician assignment (builder pattern).
    pub fn with_assignment(mut self, assignment: Assignment) -> Self {
        self.assignment = Some(assignment);
        self
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
