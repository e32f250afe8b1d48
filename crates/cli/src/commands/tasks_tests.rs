// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::api::mock::{network_error, verified, Call};
use crate::commands::technician_for;
use crate::commands::testing::{task, TestContext};
use crate::error::Error;
use chrono::Utc;
use fx_core::Photo;
use std::sync::Arc;
use tempfile::TempDir;

fn board(ctx: &TestContext) -> TaskBoard<Arc<crate::api::mock::MockBackend>> {
    TaskBoard::new(ctx.backend(), technician_for(&ctx.user).unwrap())
}

fn image(name: &str) -> ImageUpload {
    ImageUpload::new(name, vec![0xFF, 0xD8, 0xFF])
}

#[tokio::test]
async fn list_shows_technician_then_queue() {
    let mut ctx = TestContext::technician().with_tasks(vec![
        task("T2", TaskStatus::Completed),
        task("T1", TaskStatus::Ongoing),
    ]);
    let board = board(&ctx);

    list_impl(&board, None, OutputFormat::Text, &mut ctx.out)
        .await
        .unwrap();

    let output = ctx.output();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "Ravi (TECH-1) available, 0 completed");
    assert!(lines[1].starts_with("- [ongoing] T1"));
    assert!(lines[2].starts_with("- [completed] T2"));
}

#[tokio::test]
async fn list_json_has_technician_and_tasks() {
    let mut ctx = TestContext::technician().with_tasks(vec![task("T1", TaskStatus::Assigned)]);
    let board = board(&ctx);

    list_impl(&board, None, OutputFormat::Json, &mut ctx.out)
        .await
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&ctx.output()).unwrap();
    assert_eq!(value["technician"]["id"], "TECH-1");
    assert_eq!(value["tasks"][0]["status"], "assigned");
}

#[tokio::test]
async fn list_unknown_task_fails() {
    let mut ctx = TestContext::technician();
    let board = board(&ctx);

    let err = list_impl(&board, Some("T9"), OutputFormat::Text, &mut ctx.out)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::TaskNotFound(id) if id == "T9"));
}

#[tokio::test]
async fn start_moves_assigned_task() {
    let mut ctx = TestContext::technician().with_tasks(vec![task("T1", TaskStatus::Assigned)]);
    let board = board(&ctx);

    start_impl(&board, "T1", &mut ctx.out).await.unwrap();

    let output = ctx.output();
    assert!(output.starts_with("Started T1 (ongoing)"));
    assert!(output.contains("fixit upload T1 --phase <progress|after> <file>"));
    assert!(!output.contains("before"));
    assert_eq!(board.task("T1").unwrap().status(), TaskStatus::Ongoing);
    assert!(ctx.mock.calls().contains(&Call::Initiate("T1".into())));
}

#[tokio::test]
async fn upload_after_photo_completes_task() {
    let mut ctx = TestContext::technician().with_tasks(vec![task("T1", TaskStatus::Ongoing)]);
    ctx.mock.push_verification(verified(true));
    let board = board(&ctx);

    upload_impl(
        &board,
        "T1",
        PhotoPhase::After,
        vec![image("done.jpg")],
        "fixed",
        OutputFormat::Text,
        &CancellationToken::new(),
        &mut ctx.out,
    )
    .await
    .unwrap();

    let output = ctx.output();
    assert!(output.contains("verified done.jpg: looks right"));
    assert!(output.ends_with("T1 is completed\n"));
    assert!(ctx
        .mock
        .calls()
        .contains(&Call::UpdateStatus("T1".into(), TaskStatus::Completed)));
}

#[tokio::test]
async fn upload_json_reports_each_file() {
    let mut ctx = TestContext::technician().with_tasks(vec![task("T1", TaskStatus::Assigned)]);
    ctx.mock.push_verification(verified(false));
    ctx.mock.push_verification(Err(network_error()));
    let board = board(&ctx);

    upload_impl(
        &board,
        "T1",
        PhotoPhase::Before,
        vec![image("a.jpg"), image("b.jpg")],
        "",
        OutputFormat::Json,
        &CancellationToken::new(),
        &mut ctx.out,
    )
    .await
    .unwrap();

    let value: serde_json::Value = serde_json::from_str(&ctx.output()).unwrap();
    assert_eq!(value["taskId"], "T1");
    assert_eq!(value["status"], "assigned");
    assert_eq!(value["photos"][0]["result"], "unverified");
    assert_eq!(value["photos"][0]["recorded"], true);
    assert_eq!(value["photos"][1]["result"], "failed");
    assert_eq!(value["photos"][1]["recorded"], false);
}

#[tokio::test]
async fn upload_cancelled_before_start_sends_nothing() {
    let mut ctx = TestContext::technician().with_tasks(vec![task("T1", TaskStatus::Assigned)]);
    let board = board(&ctx);
    let cancel = CancellationToken::new();
    cancel.cancel();

    upload_impl(
        &board,
        "T1",
        PhotoPhase::Before,
        vec![image("a.jpg")],
        "",
        OutputFormat::Text,
        &cancel,
        &mut ctx.out,
    )
    .await
    .unwrap();

    assert!(ctx.output().contains("cancelled a.jpg"));
    assert!(!ctx
        .mock
        .calls()
        .iter()
        .any(|c| matches!(c, Call::Verify(..))));
}

#[tokio::test]
async fn complete_needs_verified_after_photo() {
    let mut ctx = TestContext::technician().with_tasks(vec![task("T1", TaskStatus::Ongoing)]);
    let board = board(&ctx);

    let err = complete_impl(&board, "T1", &mut ctx.out).await.unwrap_err();
    assert!(matches!(err, Error::EvidenceRequired(_)));
}

#[tokio::test]
async fn complete_with_evidence_on_server() {
    let mut evidenced = task("T1", TaskStatus::Ongoing);
    evidenced.record_photo(Photo::new(
        "T1-after-1".into(),
        PhotoPhase::After,
        "done.jpg".into(),
        true,
        Utc::now(),
    ));
    let mut ctx = TestContext::technician().with_tasks(vec![evidenced]);
    let board = board(&ctx);

    complete_impl(&board, "T1", &mut ctx.out).await.unwrap();

    assert_eq!(ctx.output(), "Completed T1 (completed)\n");
    assert_eq!(board.technician().completed_tasks(), 1);
}

#[test]
fn read_images_rejects_empty_file() {
    let dir = TempDir::new().unwrap();
    let good = dir.path().join("a.jpg");
    let empty = dir.path().join("b.jpg");
    std::fs::write(&good, [0xFF, 0xD8]).unwrap();
    std::fs::write(&empty, []).unwrap();

    assert_eq!(read_images(std::slice::from_ref(&good)).unwrap().len(), 1);
    let err = read_images(&[good, empty]).unwrap_err();
    assert!(matches!(err, Error::EmptyImage(_)));
}

#[test]
fn reporter_cannot_open_a_board() {
    let ctx = TestContext::reporter();
    let err = technician_for(&ctx.user).unwrap_err();
    assert!(matches!(err, Error::WrongRole { required: "technician", .. }));
}
