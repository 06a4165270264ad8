// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! User profile and SSH key types

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub is_verified: bool,
    pub created_at: Option<i64>,
}

/// An SSH public key registered on the account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SshKey {
    pub id: String,
    pub name: String,
    /// OpenSSH-format public key
    pub data: String,
    pub created_at: Option<i64>,
}

/// Request body for creating an SSH key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSshKeyRequest {
    pub name: String,
    pub public_key: String,
}
