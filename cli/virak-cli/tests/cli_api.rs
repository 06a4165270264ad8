// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Commands run against a mock API server

mod common;

use common::{Env, INSTANCE_ID, ZONE_ID};
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn data(value: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "data": value }))
}

async fn mock_instance(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(format!("/zone/{ZONE_ID}/instance/{INSTANCE_ID}")))
        .respond_with(data(json!({
            "id": INSTANCE_ID,
            "name": "web-1",
            "status": "UP",
            "instance_status": "RUNNING"
        })))
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_zone_list_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/zones"))
        .and(header("authorization", "Bearer secret"))
        .respond_with(data(json!([
            { "id": ZONE_ID, "name": "Tehran", "location": "IR", "is_ready": true }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let env = Env::logged_in("secret");
    env.cmd(&server.uri())
        .args(["zone", "list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Tehran\""));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_bucket_list_table() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/zone/{ZONE_ID}/object-storage/buckets")))
        .respond_with(data(json!([
            { "id": "b1", "name": "photos", "policy": "Private", "status": "Active" }
        ])))
        .mount(&server)
        .await;

    let env = Env::with_default_zone("secret", ZONE_ID);
    env.cmd(&server.uri())
        .args(["bucket", "list", "--default-zone"])
        .assert()
        .success()
        .stdout(predicate::str::contains("photos"))
        .stdout(predicate::str::contains("Private"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_empty_list_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/zone/{ZONE_ID}/instance/volumes")))
        .respond_with(data(json!([])))
        .mount(&server)
        .await;

    let env = Env::with_default_zone("secret", ZONE_ID);
    env.cmd(&server.uri())
        .args(["instance", "volume", "list", "--default-zone"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No volumes found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_api_error_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/zones"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Unauthenticated."
        })))
        .mount(&server)
        .await;

    let env = Env::logged_in("stale");
    env.cmd(&server.uri())
        .args(["zone", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unauthenticated."));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_login_saves_verified_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/profile"))
        .and(header("authorization", "Bearer fresh-token"))
        .respond_with(data(json!({ "id": "u1", "name": "Sara", "email": "s@example.com" })))
        .expect(1)
        .mount(&server)
        .await;

    let env = Env::empty();
    env.cmd(&server.uri())
        .args(["login", "--token", "fresh-token"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as Sara"));
    assert!(env.read_config().contains("fresh-token"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_login_rejected_token_is_not_saved() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/profile"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let env = Env::empty();
    env.cmd(&server.uri())
        .args(["login", "--token", "bad-token"])
        .assert()
        .failure();
    assert!(!env.read_config().contains("bad-token"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_set_default_zone() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/zones"))
        .respond_with(data(json!([{ "id": ZONE_ID, "name": "Tehran" }])))
        .mount(&server)
        .await;

    let env = Env::logged_in("secret");
    env.cmd(&server.uri())
        .args(["zone", "set-default", "--zoneId", ZONE_ID])
        .assert()
        .success()
        .stdout(predicate::str::contains("Default zone set to Tehran"));
    assert!(env.read_config().contains(ZONE_ID));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_instance_delete_with_yes() {
    let server = MockServer::start().await;
    mock_instance(&server).await;
    Mock::given(method("DELETE"))
        .and(path(format!("/zone/{ZONE_ID}/instance/{INSTANCE_ID}")))
        .and(body_json(json!({ "name": "web-1" })))
        .respond_with(data(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    let env = Env::with_default_zone("secret", ZONE_ID);
    env.cmd(&server.uri())
        .args(["instance", "delete", "--default-zone", "--instanceId", INSTANCE_ID, "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("web-1"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_instance_delete_aborts_without_confirmation() {
    let server = MockServer::start().await;
    mock_instance(&server).await;
    Mock::given(method("DELETE"))
        .respond_with(data(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let env = Env::with_default_zone("secret", ZONE_ID);
    env.cmd(&server.uri())
        .args(["instance", "delete", "--default-zone", "--instanceId", INSTANCE_ID])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aborted"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_instance_delete_confirmed_by_typing_name() {
    let server = MockServer::start().await;
    mock_instance(&server).await;
    Mock::given(method("DELETE"))
        .and(path(format!("/zone/{ZONE_ID}/instance/{INSTANCE_ID}")))
        .respond_with(data(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let env = Env::with_default_zone("secret", ZONE_ID);
    env.cmd(&server.uri())
        .args(["instance", "delete", "--default-zone", "--instanceId", INSTANCE_ID])
        .write_stdin("web-2\nweb-1\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("'web-2' does not match 'web-1'"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cluster_scale_sends_autoscaling_range() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/zone/{ZONE_ID}/kubernetes/{INSTANCE_ID}/scale")))
        .and(body_json(json!({
            "auto_scaling": true,
            "min_cluster_size": 2,
            "max_cluster_size": 5
        })))
        .respond_with(data(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let env = Env::with_default_zone("secret", ZONE_ID);
    env.cmd(&server.uri())
        .args(["cluster", "scale", "--default-zone", "--clusterId", INSTANCE_ID])
        .args(["--auto-scaling", "--min-cluster-size", "2", "--max-cluster-size", "5"])
        .assert()
        .success();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_interactive_snapshot_revert() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/zone/{ZONE_ID}/instance/{INSTANCE_ID}/snapshot")))
        .respond_with(data(json!([
            { "id": "s1", "name": "before-upgrade", "current": false },
            { "id": "s2", "name": "after-upgrade", "current": true }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("/zone/{ZONE_ID}/instance/{INSTANCE_ID}/snapshot/revert")))
        .and(body_json(json!({ "snapshot_id": "s1" })))
        .respond_with(data(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let env = Env::with_default_zone("secret", ZONE_ID);
    env.cmd(&server.uri())
        .args(["instance", "snapshot", "revert", "--default-zone"])
        .args(["--instanceId", INSTANCE_ID, "--interactive"])
        .write_stdin("9\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("reverting to snapshot s1"));
}

const OFFERING_ID: &str = "01H8XGJWBWBAQ4Z4GQ8RZ7T3AE";
const IMAGE_ID: &str = "01H8XGK3J9V6ZDN1T6B0W2Q5MC";
const NETWORK_ID: &str = "01H8XGKBZ7M4S3R2Y1X0W9V8TU";

async fn mock_instance_choices(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(format!("/zone/{ZONE_ID}/instance/service-offerings")))
        .respond_with(data(json!([
            {
                "id": OFFERING_ID,
                "name": "small",
                "is_available": true,
                "hardware": { "cpu_core": 1, "memory_mb": 1024, "root_disk_size_gB": 20 }
            },
            { "id": "retired", "name": "legacy", "is_available": false }
        ])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/zone/{ZONE_ID}/instance/vm-images")))
        .respond_with(data(json!([
            { "id": IMAGE_ID, "display_text": "Ubuntu 24.04", "is_available": true }
        ])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/zone/{ZONE_ID}/network")))
        .respond_with(data(json!([{ "id": NETWORK_ID, "name": "default" }])))
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_interactive_instance_create() {
    let server = MockServer::start().await;
    mock_instance_choices(&server).await;
    Mock::given(method("POST"))
        .and(path(format!("/zone/{ZONE_ID}/instance")))
        .and(body_json(json!({
            "name": "web-1",
            "service_offering_id": OFFERING_ID,
            "vm_image_id": IMAGE_ID,
            "network_ids": [NETWORK_ID]
        })))
        .respond_with(data(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let env = Env::with_default_zone("secret", ZONE_ID);
    env.cmd(&server.uri())
        .args(["instance", "create", "--default-zone", "--interactive"])
        .write_stdin("0\n1\n1\n1\nweb-1\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("invalid selection '0'"))
        .stderr(predicate::str::contains("legacy").not())
        .stdout(predicate::str::contains("Instance web-1 is being created"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_interactive_instance_create_aborts_on_empty_line() {
    let server = MockServer::start().await;
    mock_instance_choices(&server).await;
    Mock::given(method("POST"))
        .and(path(format!("/zone/{ZONE_ID}/instance")))
        .respond_with(data(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let env = Env::with_default_zone("secret", ZONE_ID);
    env.cmd(&server.uri())
        .args(["instance", "create", "--default-zone", "--interactive"])
        .write_stdin("1\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aborted"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_requests_carry_cli_user_agent() {
    let server = MockServer::start().await;
    let user_agent = format!("virak-cli/{}", env!("CARGO_PKG_VERSION"));
    Mock::given(method("GET"))
        .and(path("/zones"))
        .and(header("user-agent", user_agent.as_str()))
        .respond_with(data(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let env = Env::logged_in("secret");
    env.cmd(&server.uri())
        .args(["zone", "list"])
        .assert()
        .success();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_domain_value_cannot_leave_its_segment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dns/domains/..%2Fuser%2Fprofile"))
        .respond_with(data(json!({ "domain": "../user/profile", "status": "pending" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/user/profile"))
        .respond_with(data(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let env = Env::logged_in("secret");
    env.cmd(&server.uri())
        .args(["dns", "domain", "show", "--domain", "../user/profile"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pending"));
}
