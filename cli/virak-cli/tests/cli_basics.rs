// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Basic CLI tests - help, version, completion

// Allow deprecated - cargo_bin is standard for CLI testing
#![allow(deprecated)]

mod common;

use common::virak_cmd;
use predicates::prelude::*;
use test_case::test_case;

#[test]
fn test_virak_version() {
    virak_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("virak"));
}

#[test]
fn test_virak_help() {
    virak_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("instance"))
        .stdout(predicate::str::contains("bucket"))
        .stdout(predicate::str::contains("--json"));
}

#[test_case(&["instance", "--help"], "snapshot"; "instance")]
#[test_case(&["network", "--help"], "port-forward"; "network")]
#[test_case(&["dns", "record", "--help"], "update"; "dns record")]
#[test_case(&["cluster", "scale", "--help"], "--min-cluster-size"; "cluster scale")]
#[test_case(&["bucket", "create", "--help"], "--default-zone"; "zone flags")]
fn test_subcommand_help(args: &[&str], expected: &str) {
    virak_cmd()
        .args(args)
        .assert()
        .success()
        .stdout(predicate::str::contains(expected));
}

#[test]
fn test_zone_flags_only_on_zone_scoped_commands() {
    virak_cmd()
        .args(["dns", "domain", "list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--zoneId").not());
}

#[test]
fn test_completion_bash() {
    virak_cmd()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("virak"));
}

#[test]
fn test_unknown_command_fails() {
    virak_cmd().arg("frobnicate").assert().failure();
}
