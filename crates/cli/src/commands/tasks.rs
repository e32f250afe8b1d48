// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::PathBuf;

use serde::Serialize;
use tokio_util::sync::CancellationToken;

use fx_core::gate::accepted_phases;
use fx_core::{PhotoPhase, Task, TaskStatus, Technician};

use crate::api::{Backend, HttpBackend, ImageUpload};
use crate::cli::OutputFormat;
use crate::colors;
use crate::config::Config;
use crate::display::{format_task_details, format_task_line, format_technician, format_upload_report};
use crate::error::Result;
use crate::gate::{PhotoOutcome, TaskBoard};
use crate::validate::{validate_image, validate_length, MAX_DESCRIPTION_LENGTH};

use super::report::read_image;
use super::{block_on, http_backend, require_technician, write_json};

#[derive(Serialize)]
struct QueueJson<'a> {
    technician: &'a Technician,
    tasks: &'a [Task],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OutcomeJson<'a> {
    file: &'a str,
    result: &'static str,
    recorded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<&'a str>,
}

impl<'a> From<&'a PhotoOutcome> for OutcomeJson<'a> {
    fn from(outcome: &'a PhotoOutcome) -> Self {
        let (result, detail) = match outcome {
            PhotoOutcome::Verified { analysis, .. } => ("verified", analysis.as_deref()),
            PhotoOutcome::Unverified { analysis, .. } => ("unverified", analysis.as_deref()),
            PhotoOutcome::Failed { message, .. } => ("failed", Some(message.as_str())),
            PhotoOutcome::StatusSyncFailed { message, .. } => {
                ("status-sync-failed", Some(message.as_str()))
            }
            PhotoOutcome::Cancelled { .. } => ("cancelled", None),
        };
        OutcomeJson {
            file: outcome.file(),
            result,
            recorded: outcome.recorded(),
            detail,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UploadJson<'a> {
    task_id: &'a str,
    status: TaskStatus,
    photos: Vec<OutcomeJson<'a>>,
}

fn open_board(config: &Config) -> Result<TaskBoard<HttpBackend>> {
    let technician = require_technician()?;
    Ok(TaskBoard::new(http_backend(config)?, technician))
}

pub fn list(config: &Config, id: Option<String>, output: OutputFormat) -> Result<()> {
    let board = open_board(config)?;
    block_on(list_impl(&board, id.as_deref(), output, &mut std::io::stdout()))?
}

pub(crate) async fn list_impl<B: Backend>(
    board: &TaskBoard<B>,
    id: Option<&str>,
    output: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    board.refresh().await?;
    let color = colors::should_colorize();

    if let Some(id) = id {
        let task = board.task(id)?;
        return match output {
            OutputFormat::Json => write_json(out, &task),
            OutputFormat::Text => {
                writeln!(out, "{}", format_task_details(&task, color))?;
                Ok(())
            }
        };
    }

    let technician = board.technician();
    let tasks = board.tasks();
    match output {
        OutputFormat::Json => write_json(
            out,
            &QueueJson {
                technician: &technician,
                tasks: &tasks,
            },
        ),
        OutputFormat::Text => {
            writeln!(out, "{}", format_technician(&technician, color))?;
            if tasks.is_empty() {
                writeln!(out, "No tasks assigned.")?;
            }
            for task in &tasks {
                writeln!(out, "{}", format_task_line(task, color))?;
            }
            Ok(())
        }
    }
}

pub fn start(config: &Config, id: &str) -> Result<()> {
    let board = open_board(config)?;
    block_on(start_impl(&board, id, &mut std::io::stdout()))?
}

pub(crate) async fn start_impl<B: Backend>(
    board: &TaskBoard<B>,
    id: &str,
    out: &mut dyn Write,
) -> Result<()> {
    board.refresh().await?;
    let status = board.initiate(id).await?;
    writeln!(out, "Started {} ({})", id, status)?;
    let phases: Vec<&str> = accepted_phases(status)
        .iter()
        .map(PhotoPhase::as_str)
        .collect();
    if !phases.is_empty() {
        writeln!(
            out,
            "  Upload photos with 'fixit upload {} --phase <{}> <file>'",
            id,
            phases.join("|")
        )?;
    }
    Ok(())
}

pub fn complete(config: &Config, id: &str) -> Result<()> {
    let board = open_board(config)?;
    block_on(complete_impl(&board, id, &mut std::io::stdout()))?
}

pub(crate) async fn complete_impl<B: Backend>(
    board: &TaskBoard<B>,
    id: &str,
    out: &mut dyn Write,
) -> Result<()> {
    board.refresh().await?;
    let status = board.complete(id).await?;
    writeln!(out, "Completed {} ({})", id, status)?;
    Ok(())
}

/// Options of `fixit upload` besides the task id.
#[derive(Debug, Clone)]
pub struct UploadArgs {
    pub phase: PhotoPhase,
    pub files: Vec<PathBuf>,
    pub description: String,
    pub output: OutputFormat,
}

pub fn upload(config: &Config, id: &str, args: UploadArgs) -> Result<()> {
    let board = open_board(config)?;
    let images = read_images(&args.files)?;
    validate_length("description", &args.description, MAX_DESCRIPTION_LENGTH)?;

    block_on(async {
        let cancel = CancellationToken::new();
        let watcher = {
            let cancel = cancel.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    tracing::info!("interrupt received, cancelling upload");
                    cancel.cancel();
                }
            })
        };
        let result = upload_impl(
            &board,
            id,
            args.phase,
            images,
            &args.description,
            args.output,
            &cancel,
            &mut std::io::stdout(),
        )
        .await;
        watcher.abort();
        result
    })?
}

/// Reads every file up front so a bad path fails before anything is sent.
pub(crate) fn read_images(files: &[PathBuf]) -> Result<Vec<ImageUpload>> {
    files
        .iter()
        .map(|path| {
            let image = read_image(path)?;
            validate_image(&image)?;
            Ok(image)
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
pub(crate) async fn upload_impl<B: Backend>(
    board: &TaskBoard<B>,
    id: &str,
    phase: PhotoPhase,
    images: Vec<ImageUpload>,
    description: &str,
    output: OutputFormat,
    cancel: &CancellationToken,
    out: &mut dyn Write,
) -> Result<()> {
    board.refresh().await?;
    let report = board.upload(id, phase, images, description, cancel).await?;

    match output {
        OutputFormat::Json => write_json(
            out,
            &UploadJson {
                task_id: id,
                status: report.final_status,
                photos: report.outcomes.iter().map(OutcomeJson::from).collect(),
            },
        ),
        OutputFormat::Text => {
            writeln!(
                out,
                "{}",
                format_upload_report(id, &report, colors::should_colorize())
            )?;
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "tasks_tests.rs"]
mod tests;
