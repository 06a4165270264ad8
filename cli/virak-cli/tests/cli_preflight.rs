// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Checks that fail before any API request is made

mod common;

use common::{Env, INSTANCE_ID, UNREACHABLE_API, ZONE_ID};
use predicates::prelude::*;

#[test]
fn test_not_logged_in() {
    let env = Env::empty();
    env.cmd(UNREACHABLE_API)
        .args(["bucket", "create", "--name", "x", "--policy", "Public"])
        .args(["--zoneId", ZONE_ID])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "you must be logged in to use this command",
        ));
}

#[test]
fn test_zone_required() {
    let env = Env::logged_in("secret");
    env.cmd(UNREACHABLE_API)
        .args(["instance", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "a zone is required: pass --zoneId <id> or --default-zone",
        ));
}

#[test]
fn test_default_zone_not_configured() {
    let env = Env::logged_in("secret");
    env.cmd(UNREACHABLE_API)
        .args(["instance", "list", "--default-zone"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no default zone configured"));
}

#[test]
fn test_invalid_policy() {
    let env = Env::with_default_zone("secret", ZONE_ID);
    env.cmd(UNREACHABLE_API)
        .args(["bucket", "create", "--default-zone", "--name", "photos"])
        .args(["--policy", "Open"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "invalid value \"Open\" for --policy: must be one of Private, Public",
        ));
}

#[test]
fn test_bucket_name_too_short() {
    let env = Env::with_default_zone("secret", ZONE_ID);
    env.cmd(UNREACHABLE_API)
        .args(["bucket", "create", "--default-zone", "--name", "ab"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--name must be at least 3 characters long"));
}

#[test]
fn test_invalid_ulid() {
    let env = Env::with_default_zone("secret", ZONE_ID);
    env.cmd(UNREACHABLE_API)
        .args(["instance", "show", "--default-zone", "--instanceId", "not-an-id"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--instanceId must be a valid ULID"));
}

#[test]
fn test_cluster_scale_min_above_max() {
    let env = Env::with_default_zone("secret", ZONE_ID);
    env.cmd(UNREACHABLE_API)
        .args(["cluster", "scale", "--default-zone", "--clusterId", INSTANCE_ID])
        .args(["--auto-scaling", "--min-cluster-size", "5", "--max-cluster-size", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "min-cluster-size must be less than or equal to max-cluster-size",
        ));
}

#[test]
fn test_srv_record_requires_weight() {
    let env = Env::logged_in("secret");
    env.cmd(UNREACHABLE_API)
        .args(["dns", "record", "create", "--domain", "example.com"])
        .args(["--record", "_sip._tcp", "--type", "SRV", "--content", "sip.example.com"])
        .args(["--priority", "10", "--port", "5060"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "flag --weight is required for this combination of flags",
        ));
}

#[test]
fn test_ssh_key_create_needs_exactly_one_source() {
    let env = Env::logged_in("secret");
    env.cmd(UNREACHABLE_API)
        .args(["user", "ssh-key", "create", "--name", "laptop"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exactly one of"));
}

#[test]
fn test_show_default_zone() {
    let env = Env::with_default_zone("secret", ZONE_ID);
    env.cmd(UNREACHABLE_API)
        .args(["zone", "show-default"])
        .assert()
        .success()
        .stdout(predicate::str::contains(ZONE_ID));
}

#[test]
fn test_logout_clears_token() {
    let env = Env::with_default_zone("secret", ZONE_ID);
    env.cmd(UNREACHABLE_API)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out"));
    let config = env.read_config();
    assert!(!config.contains("secret"));
    assert!(config.contains(ZONE_ID));
}

#[test]
fn test_failure_is_written_to_json_log() {
    let env = Env::logged_in("secret");
    env.cmd(UNREACHABLE_API)
        .args(["instance", "list"])
        .assert()
        .failure();

    let log = std::fs::read_to_string(env.dir.path().join("logs").join("app.log"))
        .expect("log file should exist");
    let line = log
        .lines()
        .find(|line| line.contains("command failed"))
        .expect("failure should be logged");
    let entry: serde_json::Value = serde_json::from_str(line).expect("log lines are JSON");
    assert_eq!(entry["level"], "ERROR");
}

#[test]
fn test_disable_log_writes_no_file() {
    let env = Env::logged_in("secret");
    env.cmd(UNREACHABLE_API)
        .args(["--disable-log", "instance", "list"])
        .assert()
        .failure();
    assert!(!env.dir.path().join("logs").join("app.log").exists());
}

#[test]
fn test_record_create_rejects_content_id() {
    let env = Env::logged_in("secret");
    env.cmd(UNREACHABLE_API)
        .args(["dns", "record", "create", "--domain", "example.com"])
        .args(["--record", "www", "--type", "A", "--content", "192.0.2.1"])
        .args(["--contentId", "c1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--contentId"));
}
