// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Test helpers for virak-cli integration tests
//!
//! Every command runs against a throwaway config directory so tests never
//! read or write the real ~/.virak-cli.

// Allow unused code - not every test file uses every helper
// Allow deprecated - cargo_bin is standard for CLI testing
#![allow(dead_code, deprecated, clippy::expect_used, clippy::unwrap_used)]

use std::fs;

use assert_cmd::Command;
use tempfile::TempDir;

pub const ZONE_ID: &str = "01ARZ3NDEKTSV4RRFFQ69G5FAV";
pub const INSTANCE_ID: &str = "01BX5ZZKBKACTAV9WEVGEMMVRY";

/// An isolated config directory for one test
pub struct Env {
    pub dir: TempDir,
}

impl Env {
    /// No config file at all
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Logged in with `token`, without a default zone
    pub fn logged_in(token: &str) -> Self {
        let env = Self::empty();
        env.write_config(&format!("auth:\n  token: \"{token}\"\n"));
        env
    }

    /// Logged in with a default zone
    pub fn with_default_zone(token: &str, zone_id: &str) -> Self {
        let env = Self::empty();
        env.write_config(&format!(
            "auth:\n  token: \"{token}\"\ndefault:\n  zoneId: \"{zone_id}\"\n  zoneName: \"Tehran\"\n"
        ));
        env
    }

    pub fn write_config(&self, yaml: &str) {
        fs::write(self.dir.path().join("config.yaml"), yaml).expect("Failed to write config");
    }

    pub fn read_config(&self) -> String {
        fs::read_to_string(self.dir.path().join("config.yaml")).unwrap_or_default()
    }

    /// The virak binary, pointed at this config dir and at `api_url`
    pub fn cmd(&self, api_url: &str) -> Command {
        let mut cmd = virak_cmd();
        cmd.env("VIRAK_CONFIG_DIR", self.dir.path())
            .env("VIRAK_API_URL", api_url)
            .env("VIRAK_TIMEOUT", "5")
            .env_remove("VIRAK_LOG");
        cmd
    }
}

/// Get a Command for running the virak CLI binary
pub fn virak_cmd() -> Command {
    Command::cargo_bin("virak").expect("Failed to find virak binary")
}

/// An API URL nothing listens on, for tests that must fail before any request
pub const UNREACHABLE_API: &str = "http://127.0.0.1:9";
