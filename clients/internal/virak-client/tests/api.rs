// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

// Allow expect/unwrap in tests - they provide clear panic messages on failure
#![allow(clippy::expect_used, clippy::unwrap_used)]

//! Client tests against a mock API server

use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use virak_client::{
    BucketPolicy, Client, CreateBucketRequest, Error, ExpenseFilter, RecordRequest,
    ScaleClusterRequest,
};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "test-token";
const ZONE: &str = "01HZZZZZZZZZZZZZZZZZZZZZZZ";

async fn setup() -> (MockServer, Client) {
    let server = MockServer::start().await;
    let client = Client::new(&server.uri(), TOKEN).expect("failed to build client");
    (server, client)
}

#[tokio::test]
async fn list_zones_sends_bearer_and_unwraps_envelope() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/zones"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"id": ZONE, "name": "Tehran", "location": "IR", "is_ready": true, "is_public": true}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let zones = client.list_zones().await.unwrap();
    assert_eq!(zones.len(), 1);
    assert_eq!(zones[0].name, "Tehran");
    assert!(zones[0].is_ready);
}

#[tokio::test]
async fn missing_fields_decode_as_defaults() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path(format!("/zone/{ZONE}/object-storage/buckets")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": [{"id": "b1", "name": "logs", "unknown": 1}]})),
        )
        .mount(&server)
        .await;

    let buckets = client.list_buckets(ZONE).await.unwrap();
    assert_eq!(buckets[0].name, "logs");
    assert_eq!(buckets[0].size, 0);
    assert_eq!(buckets[0].created_at, None);
}

#[tokio::test]
async fn create_bucket_posts_json_body() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path(format!("/zone/{ZONE}/object-storage/buckets")))
        .and(body_json(json!({"name": "media", "policy": "Public"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"success": true}})))
        .expect(1)
        .mount(&server)
        .await;

    let request = CreateBucketRequest {
        name: "media".to_string(),
        policy: BucketPolicy::Public,
    };
    client.create_bucket(ZONE, &request).await.unwrap();
}

#[tokio::test]
async fn api_error_carries_status_and_message() {
    let (server, client) = setup().await;
    Mock::given(method("DELETE"))
        .and(path(format!("/zone/{ZONE}/kubernetes/k1")))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "The given data was invalid.",
            "errors": {"id": ["The selected id is invalid."]}
        })))
        .mount(&server)
        .await;

    let err = client.delete_cluster(ZONE, "k1").await.unwrap_err();
    assert_eq!(err.status(), Some(422));
    assert_eq!(
        err.to_string(),
        "The given data was invalid. (id: The selected id is invalid.) (HTTP 422)"
    );
}

#[tokio::test]
async fn unauthorized_is_detected() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/user/profile"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Unauthenticated."})),
        )
        .mount(&server)
        .await;

    let err = client.user_profile().await.unwrap_err();
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/finance/wallet"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client.wallet().await.unwrap_err();
    assert!(matches!(err, Error::Decode { ref path, .. } if path == "/finance/wallet"));
}

#[tokio::test]
async fn expense_filter_becomes_query() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/finance/expenses"))
        .and(query_param("type", "instance"))
        .and(query_param("product_id", "i-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let filter = ExpenseFilter {
        product_type: Some("instance".to_string()),
        product_id: Some("i-1".to_string()),
    };
    let expenses = client.list_expenses(&filter).await.unwrap();
    assert!(expenses.is_empty());
}

#[tokio::test]
async fn scale_cluster_sends_autoscaling_range() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path(format!("/zone/{ZONE}/kubernetes/k1/scale")))
        .and(body_json(json!({
            "auto_scaling": true,
            "min_cluster_size": 1,
            "max_cluster_size": 3
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"success": true}})))
        .expect(1)
        .mount(&server)
        .await;

    client
        .scale_cluster(ZONE, "k1", &ScaleClusterRequest::auto(1, 3))
        .await
        .unwrap();
}

#[tokio::test]
async fn update_record_targets_content_path() {
    let (server, client) = setup().await;
    Mock::given(method("PUT"))
        .and(path("/dns/domains/example.com/records/_sip._tcp/SRV/c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"success": true}})))
        .expect(1)
        .mount(&server)
        .await;

    let request = RecordRequest {
        record: "_sip._tcp".to_string(),
        record_type: "SRV".to_string(),
        content: "sip.example.com".to_string(),
        ttl: 3600,
        priority: Some(10),
        weight: Some(5),
        port: Some(5060),
        ..Default::default()
    };
    client
        .update_record("example.com", "c1", &request)
        .await
        .unwrap();
}

#[tokio::test]
async fn delete_instance_sends_name_confirmation() {
    let (server, client) = setup().await;
    Mock::given(method("DELETE"))
        .and(path(format!("/zone/{ZONE}/instance/i1")))
        .and(body_json(json!({"name": "web-1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"success": true}})))
        .expect(1)
        .mount(&server)
        .await;

    client.delete_instance(ZONE, "i1", "web-1").await.unwrap();
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;
    let client = Client::builder(&server.uri(), TOKEN)
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();
    Mock::given(method("GET"))
        .and(path("/zones"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": []}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let err = client.list_zones().await.unwrap_err();
    assert!(matches!(err, Error::Timeout { .. }), "got {err:?}");
}

#[tokio::test]
async fn record_values_are_escaped_as_one_segment() {
    let (server, client) = setup().await;
    Mock::given(method("DELETE"))
        .and(path("/dns/domains/example.com/records/..%2Fuser%2Fprofile/TXT/c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"success": true}})))
        .expect(1)
        .mount(&server)
        .await;

    client
        .delete_record("example.com", "../user/profile", "TXT", "c1")
        .await
        .unwrap();
}

#[tokio::test]
async fn dot_segment_is_refused_before_sending() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(0)
        .mount(&server)
        .await;

    let err = client.get_domain("..").await.unwrap_err();
    assert!(matches!(err, Error::InvalidPath { .. }), "got {err:?}");
}

#[tokio::test]
async fn custom_user_agent_is_sent() {
    let server = MockServer::start().await;
    let client = Client::builder(&server.uri(), TOKEN)
        .user_agent("virak-cli/9.9.9")
        .build()
        .unwrap();
    Mock::given(method("GET"))
        .and(path("/zones"))
        .and(header("user-agent", "virak-cli/9.9.9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    client.list_zones().await.unwrap();
}
