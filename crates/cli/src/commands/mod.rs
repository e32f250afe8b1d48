// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod config;
pub mod issues;
pub mod report;
pub mod session;
pub mod status;
pub mod tasks;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use std::future::Future;
use std::io::Write;

use serde::Serialize;

use fx_core::{session as user_session, Role, Technician, User};

use crate::api::HttpBackend;
use crate::config::Config;
use crate::error::{Error, Result};

/// Runs a future to completion on a fresh runtime.
pub fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| Error::Io(std::io::Error::other(format!("tokio: {}", e))))?;
    Ok(rt.block_on(future))
}

/// HTTP backend for the effective configuration.
pub fn http_backend(config: &Config) -> Result<HttpBackend> {
    Ok(HttpBackend::new(config)?)
}

/// The signed-in user.
pub fn require_user() -> Result<User> {
    user_session::current().ok_or(Error::NotLoggedIn)
}

/// The signed-in technician, as a fresh technician record.
pub fn require_technician() -> Result<Technician> {
    technician_for(&require_user()?)
}

/// Builds the technician record for `user`.
pub fn technician_for(user: &User) -> Result<Technician> {
    match (&user.role, &user.technician_id) {
        (Role::Technician | Role::Admin, Some(id)) => {
            let name = if user.name.is_empty() {
                user.email.clone()
            } else {
                user.name.clone()
            };
            Ok(Technician::new(id.clone(), name))
        }
        (Role::Technician | Role::Admin, None) => Err(Error::FieldRequired {
            field: "technician id",
        }),
        (role, _) => Err(Error::WrongRole {
            required: "technician",
            actual: role.to_string(),
        }),
    }
}

/// Writes `value` as pretty JSON followed by a newline.
pub fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    writeln!(out, "{}", json)?;
    Ok(())
}
