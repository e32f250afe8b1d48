// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The signed-in user.
//!
//! One process-wide slot, empty at startup. [`login`] fills it, [`logout`]
//! empties it, and everything else only reads it through [`current`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::RwLock;

use crate::error::{Error, Result};

/// What a user is allowed to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Reports issues and follows their progress.
    #[default]
    User,
    /// Works the task queue.
    Technician,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Technician => "technician",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "user" => Ok(Role::User),
            "technician" => Ok(Role::Technician),
            "admin" => Ok(Role::Admin),
            _ => Err(Error::InvalidRole(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: Role,
    /// Set for technicians; keys their task queue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technician_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// A single-user slot with an explicit lifecycle.
#[derive(Debug, Default)]
pub struct Session {
    user: RwLock<Option<User>>,
}

impl Session {
    pub const fn new() -> Self {
        Session {
            user: RwLock::new(None),
        }
    }

    pub fn login(&self, user: User) {
        let mut slot = self.user.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(user);
    }

    pub fn logout(&self) -> Option<User> {
        let mut slot = self.user.write().unwrap_or_else(|e| e.into_inner());
        slot.take()
    }

    pub fn current(&self) -> Option<User> {
        self.user.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

static CURRENT: Session = Session::new();

/// Records `user` as the signed-in user for the rest of the process.
pub fn login(user: User) {
    CURRENT.login(user);
}

/// Clears the signed-in user, returning who was signed in.
pub fn logout() -> Option<User> {
    CURRENT.logout()
}

/// The signed-in user, if any.
pub fn current() -> Option<User> {
    CURRENT.current()
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
