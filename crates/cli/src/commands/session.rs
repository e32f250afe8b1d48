// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::Path;

use fx_core::{session, Role, User};

use crate::cli::OutputFormat;
use crate::config::{clear_session, save_session, state_dir};
use crate::error::{Error, Result};
use crate::validate::{validate_email, validate_length, validate_phone, MAX_FIELD_LENGTH};

use super::{technician_for, write_json};

/// Account details given to `fixit login`.
#[derive(Debug, Clone)]
pub struct LoginArgs {
    pub email: String,
    pub name: Option<String>,
    pub role: Role,
    pub technician_id: Option<String>,
    pub phone: Option<String>,
}

pub fn login(args: LoginArgs) -> Result<()> {
    let user = login_impl(&state_dir(), args)?;
    println!("Logged in as {} ({})", user.email, user.role);
    Ok(())
}

/// Validates the account, persists it and makes it the current user.
pub(crate) fn login_impl(dir: &Path, args: LoginArgs) -> Result<User> {
    let email = args.email.trim().to_string();
    validate_email(&email)?;
    let name = args.name.map(|n| n.trim().to_string()).unwrap_or_default();
    validate_length("name", &name, MAX_FIELD_LENGTH)?;
    if let Some(phone) = &args.phone {
        validate_phone(phone)?;
    }

    let user = User {
        email,
        name,
        role: args.role,
        technician_id: args.technician_id,
        phone: args.phone,
    };
    if user.role == Role::Technician {
        technician_for(&user)?;
    }

    save_session(dir, &user)?;
    session::login(user.clone());
    tracing::info!(email = %user.email, role = %user.role, "logged in");
    Ok(user)
}

pub fn logout() -> Result<()> {
    if logout_impl(&state_dir())? {
        println!("Logged out");
    } else {
        println!("Not logged in");
    }
    Ok(())
}

/// Clears the current and persisted user. Returns true if anyone was signed in.
pub(crate) fn logout_impl(dir: &Path) -> Result<bool> {
    let had_session = session::logout().is_some();
    let had_file = clear_session(dir)?;
    Ok(had_session || had_file)
}

pub fn whoami(output: OutputFormat) -> Result<()> {
    let user = session::current().ok_or(Error::NotLoggedIn)?;
    whoami_impl(&user, output, &mut std::io::stdout())
}

pub(crate) fn whoami_impl(user: &User, output: OutputFormat, out: &mut dyn Write) -> Result<()> {
    match output {
        OutputFormat::Json => write_json(out, user),
        OutputFormat::Text => {
            if user.name.is_empty() {
                writeln!(out, "{} ({})", user.email, user.role)?;
            } else {
                writeln!(out, "{} <{}> ({})", user.name, user.email, user.role)?;
            }
            if let Some(id) = &user.technician_id {
                writeln!(out, "technician id: {}", id)?;
            }
            if let Some(phone) = &user.phone {
                writeln!(out, "phone: {}", phone)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
