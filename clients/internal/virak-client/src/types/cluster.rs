// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Kubernetes cluster types

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KubernetesCluster {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: String,
    pub kubernetes_version: String,
    pub ha_enabled: bool,
    pub cluster_size: i64,
    pub auto_scaling: bool,
    pub min_cluster_size: Option<i64>,
    pub max_cluster_size: Option<i64>,
    pub service_offering_id: String,
    pub network_id: String,
    pub created_at: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KubernetesVersion {
    pub id: String,
    pub version: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateClusterRequest {
    pub name: String,
    pub kubernetes_version_id: String,
    pub service_offering_id: String,
    pub ssh_key_id: String,
    pub network_id: String,
    pub ha_enabled: bool,
    pub cluster_size: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_registry_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_registry_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_registry_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateClusterRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Scaling is either a fixed size or an autoscaling range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleClusterRequest {
    pub auto_scaling: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_cluster_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_cluster_size: Option<i64>,
}

impl ScaleClusterRequest {
    pub fn fixed(size: i64) -> Self {
        Self {
            auto_scaling: false,
            cluster_size: Some(size),
            min_cluster_size: None,
            max_cluster_size: None,
        }
    }

    pub fn auto(min: i64, max: i64) -> Self {
        Self {
            auto_scaling: true,
            cluster_size: None,
            min_cluster_size: Some(min),
            max_cluster_size: Some(max),
        }
    }
}
