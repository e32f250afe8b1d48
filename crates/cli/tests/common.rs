// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// Isolated config and state directories for one test.
pub struct Sandbox {
    pub config: TempDir,
    pub state: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Sandbox {
            config: TempDir::new().unwrap(),
            state: TempDir::new().unwrap(),
        }
    }

    /// `fixit` pointed at this sandbox and an unroutable backend.
    pub fn fixit(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("fixit");
        cmd.env("FIXIT_CONFIG_DIR", self.config.path())
            .env("FIXIT_STATE_DIR", self.state.path())
            .env("FIXIT_API_URL", "http://127.0.0.1:9")
            .env_remove("FIXIT_LOG_FILE")
            .env_remove("RUST_LOG")
            .env_remove("COLOR")
            .env("NO_COLOR", "1");
        cmd
    }

    pub fn login_reporter(&self) {
        self.fixit()
            .args(["login", "--email", "ana@example.com", "--name", "Ana"])
            .assert()
            .success();
    }

    pub fn login_technician(&self) {
        self.fixit()
            .args([
                "login",
                "--email",
                "ravi@fix.io",
                "--role",
                "technician",
                "--technician-id",
                "T-7",
            ])
            .assert()
            .success();
    }
}
