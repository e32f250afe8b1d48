// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::http::*;
use super::types::{DetectOutcome, DetectRequest, ImageUpload, ReportLocation};
use super::ApiError;
use crate::config::Config;
use reqwest::StatusCode;

fn request() -> DetectRequest {
    DetectRequest {
        image: ImageUpload::new("leak.jpg", vec![1]),
        location: ReportLocation {
            email: "ana@example.com".into(),
            ..Default::default()
        },
        floor: None,
        sector: None,
        instructions: None,
        category: None,
    }
}

fn backend(url: &str) -> HttpBackend {
    let config = Config {
        api_url: url.to_string(),
        ..Config::default()
    };
    HttpBackend::new(&config).unwrap()
}

#[test]
fn endpoint_encodes_path_segments() {
    let backend = backend("https://fix.example.com");
    let url = backend
        .endpoint(&["api", "userData", "issues", "ana smith@example.com"])
        .unwrap();
    assert_eq!(
        url.as_str(),
        "https://fix.example.com/api/userData/issues/ana%20smith@example.com"
    );
}

#[test]
fn endpoint_keeps_base_path() {
    let backend = backend("https://fix.example.com/v2/");
    let url = backend.endpoint(&["api", "technician", "tasks", "T-1"]).unwrap();
    assert_eq!(url.as_str(), "https://fix.example.com/v2/api/technician/tasks/T-1");
}

#[test]
fn rejection_uses_server_message_verbatim() {
    let err = rejection(StatusCode::CONFLICT, r#"{"message": "Task already completed"}"#);
    match err {
        ApiError::Rejected { status, message } => {
            assert_eq!(status, Some(409));
            assert_eq!(message, "Task already completed");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn rejection_reads_error_field() {
    let err = rejection(StatusCode::BAD_REQUEST, r#"{"error": "taskId missing"}"#);
    assert_eq!(err.to_string(), "taskId missing");
}

#[test]
fn rejection_falls_back_to_generic_message() {
    let err = rejection(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");
    assert_eq!(
        err.to_string(),
        "the server rejected the request (500 Internal Server Error)"
    );
}

#[test]
fn ack_accepts_empty_and_success_bodies() {
    assert!(check_ack("").is_ok());
    assert!(check_ack(r#"{"success": true, "message": "ok"}"#).is_ok());
    assert!(check_ack(r#"{"task": {"id": "T"}}"#).is_ok());
    assert!(check_ack("not json").is_ok());
}

#[test]
fn ack_refuses_success_false() {
    let err = check_ack(r#"{"success": false, "message": "Not your task"}"#).unwrap_err();
    assert_eq!(err.to_string(), "Not your task");
}

#[test]
fn detection_422_is_no_issue_detected() {
    let outcome = classify_detection(
        StatusCode::UNPROCESSABLE_ENTITY,
        r#"{"message": "No issue found in image"}"#,
        &request(),
    )
    .unwrap();
    assert_eq!(
        outcome,
        DetectOutcome::NoIssueDetected {
            message: Some("No issue found in image".into())
        }
    );
}

#[test]
fn detection_flag_is_no_issue_detected() {
    let outcome =
        classify_detection(StatusCode::OK, r#"{"noIssueDetected": true}"#, &request()).unwrap();
    assert_eq!(outcome, DetectOutcome::NoIssueDetected { message: None });
}

#[test]
fn detection_success_false_is_rejection() {
    let err = classify_detection(
        StatusCode::OK,
        r#"{"success": false, "message": "Image too dark"}"#,
        &request(),
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::Rejected { status: None, .. }));
    assert_eq!(err.to_string(), "Image too dark");
}

#[test]
fn detection_server_error_is_rejection() {
    let err = classify_detection(StatusCode::BAD_GATEWAY, "", &request()).unwrap_err();
    assert!(matches!(err, ApiError::Rejected { status: Some(502), .. }));
}

#[test]
fn detection_success() {
    let outcome = classify_detection(
        StatusCode::OK,
        r#"{"success": true, "issueDetails": {"id": "ISS-1", "title": "Leak"}}"#,
        &request(),
    )
    .unwrap();
    assert!(matches!(outcome, DetectOutcome::Detected { ref issue, .. } if issue.id == "ISS-1"));
}

#[test]
fn verification_success_false_is_rejection() {
    let err = classify_verification(r#"{"success": false, "message": "Model offline"}"#)
        .unwrap_err();
    assert_eq!(err.to_string(), "Model offline");
}

#[test]
fn verification_unverified_is_not_an_error() {
    let v = classify_verification(r#"{"success": true, "verified": false}"#).unwrap();
    assert!(!v.verified);
}

#[test]
fn verification_garbage_is_invalid_response() {
    let err = classify_verification("<html>bad gateway</html>").unwrap_err();
    assert!(matches!(err, ApiError::InvalidResponse(_)));
}
