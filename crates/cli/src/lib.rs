// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! fixrs - client library behind the `fixit` CLI.
//!
//! Reporters photograph facility problems and follow their issues;
//! technicians work a queue of tasks whose status only advances on
//! verified photo evidence.
//!
//! # Main Components
//!
//! - [`IssueStore`] - a reporter's issues: optimistic inserts plus server refreshes
//! - [`TaskBoard`] - a technician's queue and the photo-evidence gate
//! - [`api::Backend`] - the maintenance backend, with [`api::HttpBackend`] as the HTTP client
//! - [`Config`] - backend URL and timing, from `config.toml` and the environment
//! - [`Error`] - error types for all operations
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use fixrs::{api::HttpBackend, Config, IssueStore};
//!
//! let config = Config::resolve()?;
//! let store = IssueStore::new(Arc::new(HttpBackend::new(&config)?), "ana@example.com");
//! store.refresh().await?;
//! println!("{:?}", store.stats());
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod env;
pub mod validate;

pub mod api;
pub mod config;
pub mod error;
pub mod gate;
pub mod store;

pub use cli::{Cli, Command, ConfigCommand, LocationArgs, OutputArgs, OutputFormat};
pub use config::Config;
pub use error::{Error, Result};
pub use gate::{PhotoOutcome, TaskBoard, UploadReport};
pub use store::{IssueStore, ReportOutcome, ReportRequest};

use fx_core::session;

/// Restores the persisted user into the process session, if any.
///
/// An unreadable session file is logged and treated as signed out.
fn restore_session() {
    match config::load_session(&config::state_dir()) {
        Ok(Some(user)) => {
            tracing::debug!(email = %user.email, "session restored");
            session::login(user);
        }
        Ok(None) => {}
        Err(e) => tracing::warn!(error = %e, "ignoring unreadable session file"),
    }
}

/// Runs a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let config = Config::resolve()?.with_api_url_override(cli.api_url);
    restore_session();

    match cli.command {
        Command::Login {
            email,
            name,
            role,
            technician_id,
            phone,
        } => commands::session::login(commands::session::LoginArgs {
            email,
            name,
            role,
            technician_id,
            phone,
        }),
        Command::Logout => commands::session::logout(),
        Command::Whoami { output } => commands::session::whoami(output.output),
        Command::Report {
            image,
            location,
            instructions,
            category,
            wait,
            output,
        } => commands::report::run(
            &config,
            &image,
            commands::report::ReportArgs {
                location,
                instructions,
                category,
                wait,
                output: output.output,
            },
        ),
        Command::Issues { id, output } => commands::issues::list(&config, id, output.output),
        Command::Stats { output } => commands::issues::stats(&config, output.output),
        Command::Notifications { output } => {
            commands::issues::notifications(&config, output.output)
        }
        Command::Community => commands::issues::community(&config),
        Command::Tasks { id, output } => commands::tasks::list(&config, id, output.output),
        Command::Start { id } => commands::tasks::start(&config, &id),
        Command::Upload {
            id,
            phase,
            files,
            description,
            output,
        } => commands::tasks::upload(
            &config,
            &id,
            commands::tasks::UploadArgs {
                phase,
                files,
                description,
                output: output.output,
            },
        ),
        Command::Complete { id } => commands::tasks::complete(&config, &id),
        Command::Status { raw, assigned } => commands::status::status(&raw, assigned),
        Command::Queue { file, output } => commands::status::queue(&file, output.output),
        Command::Config(cmd) => commands::config::run(&config, cmd),
    }
}
