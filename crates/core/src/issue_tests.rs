// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::TimeZone;
use yare::parameterized;

#[parameterized(
    electrical = { "electrical", Category::Electrical },
    plumbing = { "Plumbing", Category::Plumbing },
    cleaning = { "cleaning", Category::Cleaning },
    landscaping = { "landscaping", Category::Landscaping },
    hvac = { "HVAC", Category::Hvac },
    security = { "security", Category::Security },
    other = { "other", Category::Other },
)]
fn category_from_str_valid(input: &str, expected: Category) {
    assert_eq!(input.parse::<Category>().unwrap(), expected);
}

#[test]
fn category_from_str_rejects_unknown() {
    assert!("carpentry".parse::<Category>().is_err());
}

#[parameterized(
    high = { "high", Priority::High },
    medium = { "Medium", Priority::Medium },
    low = { "LOW", Priority::Low },
)]
fn priority_from_str_valid(input: &str, expected: Priority) {
    assert_eq!(input.parse::<Priority>().unwrap(), expected);
}

#[parameterized(
    urgent = { "urgent" },
    empty = { "" },
)]
fn priority_from_str_invalid(input: &str) {
    assert!(input.parse::<Priority>().is_err());
}

fn t(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

#[test]
fn canonical_status_follows_assignment() {
    let issue = Issue::new("ISS-1".into(), "Leak".into(), Priority::High, t(0));
    assert_eq!(issue.canonical_status(), CanonicalStatus::Pending);

    let assigned = issue.with_assignment(Assignment::default());
    assert_eq!(assigned.canonical_status(), CanonicalStatus::InProgress);
}

#[test]
fn deserializes_backend_issue() {
    let json = r#"{
        "_id": "ISS-100",
        "title": "Broken light",
        "description": "Corridor light flickers",
        "category": "electrical",
        "priority": "high",
        "status": "Reported",
        "floor": "2",
        "images": ["a.jpg", "b.jpg"],
        "assignedTechnician": { "technicianId": "T-9", "eta": "20 minutes" },
        "dateReported": "2026-03-01T10:00:00Z"
    }"#;
    let issue: Issue = serde_json::from_str(json).unwrap();

    assert_eq!(issue.id, "ISS-100");
    assert_eq!(issue.category, Category::Electrical);
    assert_eq!(issue.priority, Priority::High);
    assert_eq!(issue.raw_status, "Reported");
    assert_eq!(issue.images, vec!["a.jpg", "b.jpg"]);
    assert_eq!(
        issue.assignment.as_ref().and_then(|a| a.technician_id.as_deref()),
        Some("T-9")
    );
    assert_eq!(issue.canonical_status(), CanonicalStatus::InProgress);
    assert_eq!(issue.created_at, Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap());
}

#[test]
fn lenient_wire_values_fall_back() {
    let json = r#"{"id": "ISS-2", "category": "roofing", "priority": "critical"}"#;
    let issue: Issue = serde_json::from_str(json).unwrap();

    assert_eq!(issue.category, Category::Other);
    assert_eq!(issue.priority, Priority::Medium);
    assert_eq!(issue.raw_status, "reported");
    assert!(!issue.is_assigned());
}

#[parameterized(
    explicit_false = { r#"{"id": "ISS-1", "status": "reported", "assignment": {"assigned": false}}"#, false },
    explicit_null = { r#"{"id": "ISS-1", "status": "reported", "assignment": null}"#, false },
    explicit_true = { r#"{"id": "ISS-1", "status": "reported", "assignment": {"assigned": true, "technicianId": "T-2"}}"#, true },
    flag_absent = { r#"{"id": "ISS-1", "status": "reported", "assignment": {"technicianId": "T-2"}}"#, true },
)]
fn assignment_flag_decides_match(json: &str, assigned: bool) {
    let issue: Issue = serde_json::from_str(json).unwrap();
    assert_eq!(issue.is_assigned(), assigned);
    let expected = if assigned {
        CanonicalStatus::InProgress
    } else {
        CanonicalStatus::Pending
    };
    assert_eq!(issue.canonical_status(), expected);
}

#[test]
fn missing_created_at_is_stable_across_parses() {
    let json = r#"{"id": "ISS-4"}"#;
    let first: Issue = serde_json::from_str(json).unwrap();
    let second: Issue = serde_json::from_str(json).unwrap();
    assert_eq!(first.created_at, second.created_at);
    assert_eq!(first.created_at, t(0));
}

#[test]
fn serializes_raw_status_as_status() {
    let issue = Issue::new("ISS-3".into(), "Mop spill".into(), Priority::Low, t(5))
        .with_category(Category::Cleaning)
        .with_raw_status("resolved");
    let value = serde_json::to_value(&issue).unwrap();

    assert_eq!(value["status"], "resolved");
    assert_eq!(value["category"], "cleaning");
    assert_eq!(value["priority"], "low");
    assert!(value.get("assignment").is_none());
}
