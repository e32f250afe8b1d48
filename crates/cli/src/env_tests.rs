// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn test_vars_constants() {
    assert_eq!(vars::FIXIT_API_URL, "FIXIT_API_URL");
    assert_eq!(vars::FIXIT_CONFIG_DIR, "FIXIT_CONFIG_DIR");
    assert_eq!(vars::FIXIT_STATE_DIR, "FIXIT_STATE_DIR");
    assert_eq!(vars::FIXIT_LOG_FILE, "FIXIT_LOG_FILE");
    assert_eq!(vars::XDG_STATE_HOME, "XDG_STATE_HOME");
    assert_eq!(vars::NO_COLOR, "NO_COLOR");
    assert_eq!(vars::COLOR, "COLOR");
}

// Mutations of process env live in a single test to avoid races.
#[test]
fn test_api_url_and_state_dir() {
    std::env::remove_var("FIXIT_API_URL");
    assert_eq!(api_url(), None);

    std::env::set_var("FIXIT_API_URL", "   ");
    assert_eq!(api_url(), None);

    std::env::set_var("FIXIT_API_URL", "https://fix.example.com");
    assert_eq!(api_url().as_deref(), Some("https://fix.example.com"));
    std::env::remove_var("FIXIT_API_URL");

    std::env::set_var("FIXIT_STATE_DIR", "/tmp/fixit-state");
    assert_eq!(state_dir(), Some(PathBuf::from("/tmp/fixit-state")));
    std::env::remove_var("FIXIT_STATE_DIR");
    assert_eq!(state_dir(), None);
}
