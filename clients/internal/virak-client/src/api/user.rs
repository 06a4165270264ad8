// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use reqwest::Method;

use crate::endpoints;
use crate::types::{CreateSshKeyRequest, SshKey, UserProfile};
use crate::{Client, Result};

impl Client {
    pub async fn user_profile(&self) -> Result<UserProfile> {
        self.get(&endpoints::user_profile()).await
    }

    /// Abilities granted to the current API token
    pub async fn token_abilities(&self) -> Result<Vec<String>> {
        self.get(&endpoints::user_token_abilities()).await
    }

    pub async fn list_ssh_keys(&self) -> Result<Vec<SshKey>> {
        self.get(&endpoints::user_ssh_keys()).await
    }

    pub async fn create_ssh_key(&self, request: &CreateSshKeyRequest) -> Result<SshKey> {
        self.post(&endpoints::user_ssh_keys(), request).await
    }

    pub async fn delete_ssh_key(&self, id: &str) -> Result<()> {
        self.execute(Method::DELETE, &endpoints::user_ssh_key(id), None)
            .await
    }
}
