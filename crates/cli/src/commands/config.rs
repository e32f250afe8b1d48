// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::Path;

use crate::cli::ConfigCommand;
use crate::config::{config_dir, config_path, Config};
use crate::error::{Error, Result};

/// Execute a config subcommand.
pub fn run(config: &Config, cmd: ConfigCommand) -> Result<()> {
    let mut out = std::io::stdout();
    match cmd {
        ConfigCommand::Show => show_impl(config, &mut out),
        ConfigCommand::Path => path_impl(&config_dir(), &mut out),
    }
}

/// Prints the effective configuration, overrides included.
pub(crate) fn show_impl(config: &Config, out: &mut dyn Write) -> Result<()> {
    let content = toml::to_string_pretty(config)
        .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
    write!(out, "{}", content)?;
    Ok(())
}

pub(crate) fn path_impl(dir: &Path, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", config_path(dir).display())?;
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
