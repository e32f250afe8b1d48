// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text rendering for command output.
//!
//! Every formatter takes a `color` flag so output stays deterministic when
//! colors are off; commands pass [`colors::should_colorize`].

use fx_core::{Issue, IssueStats, Task, Technician};

use crate::api::Notification;
use crate::colors::{self, Tone};
use crate::gate::{PhotoOutcome, UploadReport};

/// Maximum line width for wrapped text content (excluding 4-space indent).
const WRAP_WIDTH: usize = 96;

fn label(text: &str, tone: Tone, color: bool) -> String {
    if color {
        colors::paint(text, tone)
    } else {
        text.to_string()
    }
}

/// Wrap a single line of text at word boundaries.
///
/// Multi-line content is returned unchanged.
pub fn wrap_text(content: &str, width: usize) -> String {
    if content.contains('\n') || content.chars().count() <= width {
        return content.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in content.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines.join("\n")
}

fn indented(content: &str) -> Vec<String> {
    wrap_text(content, WRAP_WIDTH)
        .lines()
        .map(|l| format!("    {}", l))
        .collect()
}

/// One issue per line: `- [status] id (priority, category): title`
pub fn format_issue_line(issue: &Issue, color: bool) -> String {
    let status = issue.canonical_status();
    format!(
        "- [{}] {} ({}, {}): {}",
        label(status.as_str(), colors::issue_tone(&status), color),
        issue.id,
        label(
            issue.priority.as_str(),
            colors::priority_tone(issue.priority),
            color
        ),
        issue.category,
        issue.title
    )
}

/// Full issue view for `fixit issues <id>`.
pub fn format_issue_details(issue: &Issue, color: bool) -> String {
    let status = issue.canonical_status();
    let mut output = vec![
        format!("[{}] {}", issue.category, issue.id),
        format!("Title: {}", issue.title),
        format!(
            "Status: {}",
            label(status.as_str(), colors::issue_tone(&status), color)
        ),
        format!(
            "Priority: {}",
            label(
                issue.priority.as_str(),
                colors::priority_tone(issue.priority),
                color
            )
        ),
        format!("Reported: {}", issue.created_at.format("%Y-%m-%d %H:%M")),
    ];

    let place: Vec<String> = [("floor", &issue.floor), ("sector", &issue.sector)]
        .into_iter()
        .filter_map(|(name, value)| value.as_ref().map(|v| format!("{} {}", name, v)))
        .collect();
    if !place.is_empty() {
        output.push(format!("Where: {}", place.join(", ")));
    }

    if let Some(assignment) = &issue.assignment {
        let name = assignment
            .technician_details
            .as_ref()
            .and_then(|d| d.name.clone())
            .or_else(|| assignment.technician_id.clone())
            .unwrap_or_else(|| "assigned".to_string());
        output.push(format!("Technician: {}", name));
        if let Some(phone) = assignment
            .technician_details
            .as_ref()
            .and_then(|d| d.phone.as_ref())
        {
            output.push(format!("Phone: {}", phone));
        }
        if let Some(eta) = &assignment.eta {
            output.push(format!("ETA: {}", eta));
        }
    }

    if !issue.description.is_empty() {
        output.push(String::new());
        output.push("Description:".to_string());
        output.extend(indented(&issue.description));
    }
    if let Some(instructions) = &issue.instructions {
        output.push(String::new());
        output.push("Instructions:".to_string());
        output.extend(indented(instructions));
    }

    output.join("\n")
}

/// Dashboard counters.
pub fn format_stats(stats: &IssueStats) -> String {
    [
        format!("Pending:      {}", stats.pending),
        format!("In progress:  {}", stats.in_progress),
        format!("Completed:    {}", stats.completed),
        format!("Active:       {}", stats.active),
        format!("Total:        {}", stats.total),
    ]
    .join("\n")
}

/// One task per line: `- [status] id (priority): title [n photos]`
pub fn format_task_line(task: &Task, color: bool) -> String {
    let status = task.status();
    let mut line = format!(
        "- [{}] {} ({}): {}",
        label(status.as_str(), colors::task_tone(status), color),
        task.id,
        label(
            task.priority.as_str(),
            colors::priority_tone(task.priority),
            color
        ),
        task.title
    );
    match task.photos().len() {
        0 => {}
        1 => line.push_str(" [1 photo]"),
        n => line.push_str(&format!(" [{} photos]", n)),
    }
    line
}

/// Full task view including its photo log.
pub fn format_task_details(task: &Task, color: bool) -> String {
    let mut output = vec![format_task_line(task, color)];
    if let Some(started) = task.started_at() {
        output.push(format!("  Started: {}", started.format("%Y-%m-%d %H:%M")));
    }
    if let Some(completed) = task.completed_at() {
        output.push(format!("  Completed: {}", completed.format("%Y-%m-%d %H:%M")));
    }
    for photo in task.photos() {
        let mark = if photo.verified() {
            label("verified", Tone::Done, color)
        } else {
            label("unverified", Tone::Muted, color)
        };
        output.push(format!("  - {} {} ({})", photo.phase, photo.id, mark));
    }
    output.join("\n")
}

pub fn format_technician(technician: &Technician, color: bool) -> String {
    let status = technician.status();
    format!(
        "{} ({}) {}, {} completed",
        technician.name,
        technician.id,
        label(status.as_str(), colors::technician_tone(status), color),
        technician.completed_tasks()
    )
}

pub fn format_notification(notification: &Notification) -> String {
    let marker = if notification.read { " " } else { "*" };
    match notification.created_at {
        Some(at) => format!(
            "{} {}  {}",
            marker,
            at.format("%Y-%m-%d %H:%M"),
            notification.message
        ),
        None => format!("{} {}", marker, notification.message),
    }
}

fn format_photo_outcome(outcome: &PhotoOutcome, color: bool) -> String {
    match outcome {
        PhotoOutcome::Verified { file, analysis } => {
            let mut line = format!("  {} {}", label("verified", Tone::Done, color), file);
            if let Some(analysis) = analysis {
                line.push_str(&format!(": {}", analysis));
            }
            line
        }
        PhotoOutcome::Unverified { file, analysis } => {
            let mut line = format!("  {} {}", label("not verified", Tone::Waiting, color), file);
            if let Some(analysis) = analysis {
                line.push_str(&format!(": {}", analysis));
            }
            line
        }
        PhotoOutcome::Failed { file, message } => format!(
            "  {} {}: {}",
            label("failed", Tone::Urgent, color),
            file,
            message
        ),
        PhotoOutcome::StatusSyncFailed { file, message } => format!(
            "  {} {}: status not saved ({}); run 'fixit complete' to retry",
            label("recorded", Tone::Waiting, color),
            file,
            message
        ),
        PhotoOutcome::Cancelled { file } => {
            format!("  {} {}", label("cancelled", Tone::Muted, color), file)
        }
    }
}

/// Per-file results of an upload followed by the task's status.
pub fn format_upload_report(task_id: &str, report: &UploadReport, color: bool) -> String {
    let mut output: Vec<String> = report
        .outcomes
        .iter()
        .map(|o| format_photo_outcome(o, color))
        .collect();
    output.push(format!(
        "{} is {}",
        task_id,
        label(
            report.final_status.as_str(),
            colors::task_tone(report.final_status),
            color
        )
    ));
    output.join("\n")
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
