// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use fx_core::Category;

use crate::api::{Backend, ImageUpload};
use crate::cli::{LocationArgs, OutputFormat};
use crate::colors;
use crate::config::Config;
use crate::display::format_issue_details;
use crate::error::{Error, Result};
use crate::store::{IssueStore, ReportOutcome, ReportRequest};

use super::{block_on, http_backend, require_user, write_json};

/// Options of `fixit report` besides the image.
#[derive(Debug, Clone, Default)]
pub struct ReportArgs {
    pub location: LocationArgs,
    pub instructions: Option<String>,
    pub category: Option<Category>,
    pub wait: bool,
    pub output: OutputFormat,
}

pub fn run(config: &Config, image: &Path, args: ReportArgs) -> Result<()> {
    let user = require_user()?;
    let image = read_image(image)?;
    let store = IssueStore::new(Arc::new(http_backend(config)?), user.email)
        .with_refresh_delay(config.refresh_delay());
    block_on(run_impl(&store, image, args, &mut std::io::stdout()))?
}

/// Reads an image file, mapping a missing file to a field error.
pub(crate) fn read_image(path: &Path) -> Result<ImageUpload> {
    if !path.is_file() {
        return Err(Error::FieldRequired { field: "image file" });
    }
    Ok(ImageUpload::from_path(path)?)
}

pub(crate) async fn run_impl<B: Backend + 'static>(
    store: &IssueStore<B>,
    image: ImageUpload,
    args: ReportArgs,
    out: &mut dyn Write,
) -> Result<()> {
    let file = image.file_name.clone();
    let request = ReportRequest {
        image: Some(image),
        latitude: args.location.lat,
        longitude: args.location.lng,
        address: args.location.address,
        floor: args.location.floor,
        sector: args.location.sector,
        instructions: args.instructions,
        category: args.category,
    };

    match store.report(request).await? {
        ReportOutcome::NoIssueDetected { message } => {
            match args.output {
                OutputFormat::Json => write_json(
                    out,
                    &serde_json::json!({ "noIssueDetected": true, "message": message }),
                )?,
                OutputFormat::Text => {
                    writeln!(out, "No issue detected in {}.", file)?;
                    if let Some(message) = message {
                        writeln!(out, "  {}", message)?;
                    }
                    writeln!(out, "  Retake the photo or choose a different one.")?;
                }
            }
            Ok(())
        }
        ReportOutcome::Created {
            issue,
            message,
            refresh,
        } => {
            let mut shown = issue;
            if args.wait {
                if let Err(e) = refresh.await {
                    tracing::warn!(error = %e, "refresh task did not finish");
                }
                if let Some(fresh) = store.find(&shown.id) {
                    shown = fresh;
                }
            }
            match args.output {
                OutputFormat::Json => write_json(out, &shown)?,
                OutputFormat::Text => {
                    if let Some(message) = message {
                        writeln!(out, "{}", message)?;
                    }
                    writeln!(
                        out,
                        "{}",
                        format_issue_details(&shown, colors::should_colorize())
                    )?;
                }
            }
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
