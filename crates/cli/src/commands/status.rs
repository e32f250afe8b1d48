// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Offline helpers: status normalization and queue ordering.

use std::io::{Read, Write};
use std::path::Path;

use fx_core::{canonical_status, schedule, Task};

use crate::cli::OutputFormat;
use crate::colors;
use crate::display::format_task_line;
use crate::error::Result;

use super::write_json;

pub fn status(raw: &str, assigned: bool) -> Result<()> {
    status_impl(raw, assigned, &mut std::io::stdout())
}

pub(crate) fn status_impl(raw: &str, assigned: bool, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", canonical_status(raw, assigned))?;
    Ok(())
}

/// Orders the tasks in `file` (`-` for stdin) into queue order.
pub fn queue(file: &Path, output: OutputFormat) -> Result<()> {
    let content = if file == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(file)?
    };
    queue_impl(&content, output, &mut std::io::stdout())
}

pub(crate) fn queue_impl(content: &str, output: OutputFormat, out: &mut dyn Write) -> Result<()> {
    let tasks: Vec<Task> = serde_json::from_str(content)?;
    let ordered = schedule::order(&tasks);
    match output {
        OutputFormat::Json => write_json(out, &ordered),
        OutputFormat::Text => {
            let color = colors::should_colorize();
            for task in &ordered {
                writeln!(out, "{}", format_task_line(task, color))?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
