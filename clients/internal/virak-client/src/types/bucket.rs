// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Object storage types

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

/// Access policy of a bucket
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, VariantNames,
)]
pub enum BucketPolicy {
    Private,
    Public,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bucket {
    pub id: String,
    pub name: String,
    pub status: String,
    pub policy: String,
    pub url: String,
    /// Used storage in bytes
    pub size: u64,
    pub access_key: String,
    pub secret_key: String,
    pub created_at: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBucketRequest {
    pub name: String,
    pub policy: BucketPolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateBucketRequest {
    pub policy: BucketPolicy,
}

/// An object storage audit event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub content: String,
    pub product_id: String,
    pub created_at: Option<i64>,
}
