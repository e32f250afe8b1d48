// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal colors for status and priority labels.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use fx_core::{CanonicalStatus, Priority, TaskStatus, TechnicianStatus};

use crate::env;

/// ANSI 256-color codes
pub mod codes {
    /// Waiting work: amber
    pub const WAITING: u8 = 214;
    /// Active work: steel blue
    pub const ACTIVE: u8 = 74;
    /// Finished work: green
    pub const DONE: u8 = 114;
    /// Urgent: red
    pub const URGENT: u8 = 203;
    /// Secondary text: medium grey
    pub const MUTED: u8 = 245;
    /// Help section headers: pastel cyan
    pub const HEADER: u8 = 74;
    /// Help commands: light grey
    pub const LITERAL: u8 = 250;
}

/// Semantic color of a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Waiting,
    Active,
    Done,
    Urgent,
    Muted,
}

impl Tone {
    pub fn code(self) -> u8 {
        match self {
            Tone::Waiting => codes::WAITING,
            Tone::Active => codes::ACTIVE,
            Tone::Done => codes::DONE,
            Tone::Urgent => codes::URGENT,
            Tone::Muted => codes::MUTED,
        }
    }
}

/// Tone of an issue's canonical status.
pub fn issue_tone(status: &CanonicalStatus) -> Tone {
    match status {
        CanonicalStatus::Pending => Tone::Waiting,
        CanonicalStatus::InProgress => Tone::Active,
        CanonicalStatus::Completed => Tone::Done,
        CanonicalStatus::Other(_) => Tone::Muted,
    }
}

/// Tone of a task status.
pub fn task_tone(status: TaskStatus) -> Tone {
    match status {
        TaskStatus::Pending => Tone::Muted,
        TaskStatus::Assigned => Tone::Waiting,
        TaskStatus::Ongoing => Tone::Active,
        TaskStatus::Completed => Tone::Done,
    }
}

/// Tone of a priority.
pub fn priority_tone(priority: Priority) -> Tone {
    match priority {
        Priority::High => Tone::Urgent,
        Priority::Medium => Tone::Waiting,
        Priority::Low => Tone::Muted,
    }
}

pub fn technician_tone(status: TechnicianStatus) -> Tone {
    match status {
        TechnicianStatus::Available => Tone::Done,
        TechnicianStatus::Busy => Tone::Active,
        TechnicianStatus::Offline => Tone::Muted,
    }
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// Format a 256-color ANSI escape sequence for foreground color.
fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

/// ANSI reset sequence.
const RESET: &str = "\x1b[0m";

/// Wraps `text` in the tone's color.
pub fn paint(text: &str, tone: Tone) -> String {
    format!("{}{}{}", fg256(tone.code()), text, RESET)
}

/// Like [`paint`], but only when colors are enabled.
pub fn tint(text: &str, tone: Tone) -> String {
    if should_colorize() {
        paint(text, tone)
    } else {
        text.to_string()
    }
}

/// Colorize an examples help block when colors are enabled.
///
/// Lines ending in `:` are headers; in `  fixit cmd    Description` lines
/// the command part is highlighted.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }
    colorize_examples(text)
}

fn colorize_examples(text: &str) -> String {
    text.lines()
        .map(|line| {
            let trimmed = line.trim_start();
            let indent = &line[..line.len() - trimmed.len()];
            if trimmed.ends_with(':') && !trimmed.contains("  ") {
                return format!("{}{}{}{}", indent, fg256(codes::HEADER), trimmed, RESET);
            }
            match find_description_start(trimmed) {
                Some(end) => format!(
                    "{}{}{}{}{}",
                    indent,
                    fg256(codes::LITERAL),
                    &trimmed[..end],
                    RESET,
                    &trimmed[end..]
                ),
                None => line.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Find where the description starts (two or more spaces after the command).
fn find_description_start(line: &str) -> Option<usize> {
    line.find("  ").filter(|&i| !line[i..].trim().is_empty())
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
