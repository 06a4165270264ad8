// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Zone types

use serde::{Deserialize, Serialize};

/// A datacenter zone
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Zone {
    pub id: String,
    pub name: String,
    pub location: String,
    /// Zone accepts new resources
    pub is_ready: bool,
    pub is_public: bool,
}

/// Collected versus total amount of one resource
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Usage {
    pub collected: u64,
    pub total: u64,
}

/// Resource usage of the customer in a zone
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneResources {
    /// Memory in MB
    pub memory: Usage,
    pub cpu_number: Usage,
    /// Data volume storage in GB
    pub data_volume: Usage,
    pub vm_limit: Usage,
}

/// Services the customer has enabled in a zone
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneServices {
    pub instance: bool,
    pub data_volume: bool,
    pub network: bool,
    pub object_storage: bool,
    pub k8s: bool,
}
