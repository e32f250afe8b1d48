// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::fs;
use std::path::Path;

use clap::Parser;
use fixrs::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    setup_logging(fixrs::env::log_file().as_deref());

    let cli = Cli::parse();
    if let Err(e) = fixrs::run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Logs to `log_path` when given and writable, else to stderr.
///
/// The level comes from `RUST_LOG` and defaults to warnings only.
fn setup_logging(log_path: Option<&Path>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let file = log_path.and_then(|path| {
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .ok()
    });
    match file {
        Some(file) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(file)
            .with_ansi(false)
            .init(),
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
    }
}
