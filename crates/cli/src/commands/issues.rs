// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::sync::Arc;

use serde::Serialize;

use fx_core::{CanonicalStatus, Issue};

use crate::api::Backend;
use crate::cli::OutputFormat;
use crate::colors;
use crate::config::Config;
use crate::display::{format_issue_details, format_issue_line, format_notification, format_stats};
use crate::error::{Error, Result};
use crate::store::IssueStore;

use super::{block_on, http_backend, require_user, write_json};

/// JSON shape of an issue in list output: the record plus its
/// normalized status.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IssueJson<'a> {
    #[serde(flatten)]
    issue: &'a Issue,
    canonical_status: CanonicalStatus,
}

impl<'a> From<&'a Issue> for IssueJson<'a> {
    fn from(issue: &'a Issue) -> Self {
        IssueJson {
            issue,
            canonical_status: issue.canonical_status(),
        }
    }
}

fn open_store(config: &Config) -> Result<IssueStore<crate::api::HttpBackend>> {
    let user = require_user()?;
    Ok(IssueStore::new(Arc::new(http_backend(config)?), user.email))
}

pub fn list(config: &Config, id: Option<String>, output: OutputFormat) -> Result<()> {
    let store = open_store(config)?;
    block_on(list_impl(&store, id.as_deref(), output, &mut std::io::stdout()))?
}

pub(crate) async fn list_impl<B: Backend + 'static>(
    store: &IssueStore<B>,
    id: Option<&str>,
    output: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    store.refresh().await?;
    let color = colors::should_colorize();

    if let Some(id) = id {
        let issue = store
            .find(id)
            .ok_or_else(|| Error::IssueNotFound(id.to_string()))?;
        return match output {
            OutputFormat::Json => write_json(out, &IssueJson::from(&issue)),
            OutputFormat::Text => {
                writeln!(out, "{}", format_issue_details(&issue, color))?;
                Ok(())
            }
        };
    }

    let issues = store.merged();
    match output {
        OutputFormat::Json => {
            let json: Vec<IssueJson<'_>> = issues.iter().map(IssueJson::from).collect();
            write_json(out, &json)
        }
        OutputFormat::Text => {
            if issues.is_empty() {
                writeln!(out, "No issues reported yet.")?;
            }
            for issue in &issues {
                writeln!(out, "{}", format_issue_line(issue, color))?;
            }
            Ok(())
        }
    }
}

pub fn stats(config: &Config, output: OutputFormat) -> Result<()> {
    let store = open_store(config)?;
    block_on(stats_impl(&store, output, &mut std::io::stdout()))?
}

pub(crate) async fn stats_impl<B: Backend + 'static>(
    store: &IssueStore<B>,
    output: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    store.refresh().await?;
    let stats = store.stats();
    match output {
        OutputFormat::Json => write_json(out, &stats),
        OutputFormat::Text => {
            writeln!(out, "{}", format_stats(&stats))?;
            Ok(())
        }
    }
}

pub fn notifications(config: &Config, output: OutputFormat) -> Result<()> {
    let store = open_store(config)?;
    block_on(notifications_impl(&store, output, &mut std::io::stdout()))?
}

pub(crate) async fn notifications_impl<B: Backend + 'static>(
    store: &IssueStore<B>,
    output: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let notifications = store.notifications().await?;
    match output {
        OutputFormat::Json => write_json(out, &notifications),
        OutputFormat::Text => {
            if notifications.is_empty() {
                writeln!(out, "No notifications.")?;
            }
            for notification in &notifications {
                writeln!(out, "{}", format_notification(notification))?;
            }
            Ok(())
        }
    }
}

pub fn community(config: &Config) -> Result<()> {
    let store = open_store(config)?;
    let snapshot = block_on(store.community())??;
    write_json(&mut std::io::stdout(), &snapshot)
}

#[cfg(test)]
#[path = "issues_tests.rs"]
mod tests;
