// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! fx-core: Shared library for the fixit maintenance client
//!
//! This crate provides the domain types and the pure lifecycle rules used
//! by the fixit CLI and its services: status normalization, task queue
//! ordering, the photo-evidence transition table, and dashboard counters.

pub mod capture;
pub mod error;
pub mod gate;
pub mod issue;
pub mod schedule;
pub mod session;
pub mod stats;
pub mod status;
pub mod task;
pub mod technician;

pub use capture::{CaptureSession, Facing, MediaSource, MediaStream, Track};
pub use error::{Error, Result};
pub use gate::Transition;
pub use issue::{Assignment, Category, Issue, Priority, TechnicianDetails};
pub use session::{Role, User};
pub use stats::IssueStats;
pub use status::{canonical_status, CanonicalStatus};
pub use task::{Photo, PhotoPhase, Task, TaskStatus};
pub use technician::{Technician, TechnicianStatus};
