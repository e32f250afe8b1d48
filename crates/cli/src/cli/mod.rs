// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use fx_core::{Category, PhotoPhase, Role};

use crate::colors;

pub use args::{LocationArgs, OutputArgs};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

// Custom help template that groups commands into sections
const HELP_TEMPLATE: &str = "{about-with-newline}
{usage-heading} {usage}

{before-help}Options:
{options}{after-help}";

const COMMANDS_HELP: &str = "\
Reporting:
  report         Report a problem with a photo
  issues         List your issues or show one
  stats          Show issue counters
  notifications  Show your notifications
  community      Show the community snapshot

Technician:
  tasks          List your task queue or show one task
  start          Start work on an assigned task
  upload         Upload before/progress/after photos for a task
  complete       Complete a task that has a verified after photo

Offline tools:
  status         Normalize a backend status string
  queue          Order a task list file as the queue would

Account & Configuration:
  login          Sign in
  logout         Sign out
  whoami         Show the signed-in user
  config         Show configuration";

const QUICKSTART_HELP: &str = "\
Get started:
  fixit login --email ana@example.com         Sign in as a reporter
  fixit report --image leak.jpg --lat 12.9 --lng 77.5
  fixit issues                                 Follow your reports";

#[derive(Parser)]
#[command(name = "fixit")]
#[command(version)]
#[command(about = "Report facility problems and work maintenance tasks")]
#[command(help_template = HELP_TEMPLATE)]
#[command(before_help = COMMANDS_HELP)]
#[command(after_help = QUICKSTART_HELP)]
pub struct Cli {
    /// Backend URL, overriding config and FIXIT_API_URL
    #[arg(long, global = true, value_parser = non_empty_string)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Account
    // ─────────────────────────────────────────────────────────────────────────
    /// Sign in
    #[command(after_help = colors::examples("\
Examples:
  fixit login --email ana@example.com                  Reporter account
  fixit login --email ravi@fix.io --role technician --technician-id T-7"))]
    Login {
        /// Account email
        #[arg(long, value_parser = non_empty_string)]
        email: String,

        /// Display name
        #[arg(long)]
        name: Option<String>,

        /// Account role (user, technician, admin)
        #[arg(long, default_value = "user")]
        role: Role,

        /// Technician id, required for technician accounts
        #[arg(long, value_parser = non_empty_string)]
        technician_id: Option<String>,

        /// Contact phone (10-15 digits, optional leading +)
        #[arg(long)]
        phone: Option<String>,
    },

    /// Sign out
    Logout,

    /// Show the signed-in user
    Whoami {
        #[command(flatten)]
        output: OutputArgs,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Reporting
    // ─────────────────────────────────────────────────────────────────────────
    /// Report a problem with a photo
    #[command(after_help = colors::examples("\
Examples:
  fixit report --image leak.jpg --lat 12.97 --lng 77.59    Report at coordinates
  fixit report --image bulb.png --address \"Block C\" --floor 2"))]
    Report {
        /// Photo of the problem
        #[arg(long)]
        image: PathBuf,

        #[command(flatten)]
        location: LocationArgs,

        /// Notes for the technician
        #[arg(long)]
        instructions: Option<String>,

        /// Category hint (electrical, plumbing, cleaning, ...)
        #[arg(long)]
        category: Option<Category>,

        /// Wait for the follow-up refresh and print the server's record
        #[arg(long)]
        wait: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List your issues, or show one
    Issues {
        /// Issue id to show
        id: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show issue counters
    Stats {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show your notifications
    Notifications {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show the community snapshot
    Community,

    // ─────────────────────────────────────────────────────────────────────────
    // Technician
    // ─────────────────────────────────────────────────────────────────────────
    /// List your task queue, or show one task
    Tasks {
        /// Task id to show
        id: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Start work on an assigned task
    Start {
        /// Task id
        id: String,
    },

    /// Upload photos for a task
    #[command(after_help = colors::examples("\
Examples:
  fixit upload T-1 --phase before site.jpg          Verify the starting state
  fixit upload T-1 --phase after a.jpg b.jpg        Completes on the first verified photo

Phases:
  assigned tasks accept: before
  ongoing tasks accept: progress, after"))]
    Upload {
        /// Task id
        id: String,

        /// Photo phase (before, progress, after)
        #[arg(long, short)]
        phase: PhotoPhase,

        /// Image files, verified in order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// What the photos show
        #[arg(long, short, default_value = "")]
        description: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Complete a task that already has a verified after photo
    Complete {
        /// Task id
        id: String,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Offline tools
    // ─────────────────────────────────────────────────────────────────────────
    /// Normalize a backend status string
    #[command(after_help = colors::examples("\
Examples:
  fixit status reported               pending
  fixit status reported --assigned    in-progress
  fixit status Resolved               completed"))]
    Status {
        /// Raw backend status
        raw: String,

        /// Whether a technician has been matched
        #[arg(long)]
        assigned: bool,
    },

    /// Order a JSON task list the way the queue does
    Queue {
        /// File holding a JSON array of tasks, or `-` for stdin
        file: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
