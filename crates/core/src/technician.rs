// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Technician profile and availability.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Availability of a technician for new work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TechnicianStatus {
    #[default]
    Available,
    Busy,
    Offline,
}

impl TechnicianStatus {
    /// Returns the string representation used on the wire and in display.
    pub fn as_str(&self) -> &'static str {
        match self {
            TechnicianStatus::Available => "available",
            TechnicianStatus::Busy => "busy",
            TechnicianStatus::Offline => "offline",
        }
    }
}

impl fmt::Display for TechnicianStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TechnicianStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "available" => Ok(TechnicianStatus::Available),
            "busy" => Ok(TechnicianStatus::Busy),
            "offline" => Ok(TechnicianStatus::Offline),
            _ => Err(Error::InvalidTechnicianStatus(s.to_string())),
        }
    }
}

/// A field technician.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Technician {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub skills: BTreeSet<String>,
    #[serde(default)]
    status: TechnicianStatus,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub total_tasks: u32,
    #[serde(default)]
    completed_tasks: u32,
}

impl Technician {
    pub fn new(id: String, name: String) -> Self {
        Technician {
            id,
            name,
            skills: BTreeSet::new(),
            status: TechnicianStatus::Available,
            rating: 0.0,
            total_tasks: 0,
            completed_tasks: 0,
        }
    }

    pub fn status(&self) -> TechnicianStatus {
        self.status
    }

    pub fn completed_tasks(&self) -> u32 {
        self.completed_tasks
    }

    /// The technician's own availability toggle.
    pub fn set_status(&mut self, status: TechnicianStatus) {
        self.status = status;
    }

    /// Side effect of a task reaching `completed`.
    pub fn record_completion(&mut self) {
        self.completed_tasks = self.completed_tasks.saturating_add(1);
        self.status = TechnicianStatus::Available;
    }
}

#[cfg(test)]
#[path = "technician_tests.rs"]
mod tests;
