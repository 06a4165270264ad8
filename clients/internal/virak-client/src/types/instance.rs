// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Instance, snapshot and volume types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Hardware profile of a service offering
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hardware {
    pub cpu_core: i64,
    pub memory_mb: i64,
    pub cpu_speed_mhz: i64,
    #[serde(rename = "root_disk_size_gB")]
    pub root_disk_size_gb: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceOffering {
    pub id: String,
    pub name: String,
    pub is_available: bool,
    pub is_public: bool,
    pub hardware: Hardware,
    pub hourly_price: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VmImage {
    pub id: String,
    pub name: String,
    pub display_text: String,
    pub os_type: String,
    pub os_name: String,
    pub os_version: String,
    pub is_available: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Instance {
    pub id: String,
    pub name: String,
    /// Provisioning status (e.g. "CREATED", "DELETED")
    pub status: String,
    /// Power state (e.g. "Running", "Stopped")
    pub instance_status: String,
    pub zone_id: String,
    pub service_offering: Option<ServiceOffering>,
    pub vm_image: Option<VmImage>,
    pub username: String,
    pub password: String,
    pub created_at: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateInstanceRequest {
    pub name: String,
    pub service_offering_id: String,
    pub vm_image_id: String,
    pub network_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh_key_id: Option<String>,
}

/// Delete requests repeat the instance name as a safety check
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteInstanceRequest {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StopInstanceRequest {
    pub forced: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RebuildInstanceRequest {
    pub vm_image_id: String,
}

/// Time series per metric name, as `[timestamp, value]` pairs
pub type InstanceMetrics = BTreeMap<String, Vec<(i64, f64)>>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub id: String,
    pub name: String,
    pub status: String,
    /// Snapshot the instance currently runs from
    pub current: bool,
    pub created_at: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateSnapshotRequest {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevertSnapshotRequest {
    pub snapshot_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Volume {
    pub id: String,
    pub name: String,
    /// Size in GB
    pub size: i64,
    pub status: String,
    pub attached_instance_id: Option<String>,
    pub created_at: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeServiceOffering {
    pub id: String,
    pub name: String,
    pub size: Option<i64>,
    pub is_custom: bool,
    pub hourly_price: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateVolumeRequest {
    pub name: String,
    pub size: i64,
    pub service_offering_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VolumeAttachRequest {
    pub instance_id: String,
}
