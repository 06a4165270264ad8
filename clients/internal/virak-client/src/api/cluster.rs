// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use reqwest::Method;

use crate::endpoints;
use crate::types::{
    CreateClusterRequest, KubernetesCluster, KubernetesVersion, ScaleClusterRequest, ServiceEvent,
    UpdateClusterRequest,
};
use crate::{Client, Result};

impl Client {
    pub async fn list_clusters(&self, zone_id: &str) -> Result<Vec<KubernetesCluster>> {
        self.get(&endpoints::clusters(zone_id)).await
    }

    pub async fn create_cluster(&self, zone_id: &str, request: &CreateClusterRequest) -> Result<()> {
        self.execute(
            Method::POST,
            &endpoints::clusters(zone_id),
            Some(crate::to_json(request)?),
        )
        .await
    }

    pub async fn get_cluster(&self, zone_id: &str, id: &str) -> Result<KubernetesCluster> {
        self.get(&endpoints::cluster(zone_id, id)).await
    }

    pub async fn update_cluster(
        &self,
        zone_id: &str,
        id: &str,
        request: &UpdateClusterRequest,
    ) -> Result<()> {
        self.execute(
            Method::PUT,
            &endpoints::cluster(zone_id, id),
            Some(crate::to_json(request)?),
        )
        .await
    }

    pub async fn delete_cluster(&self, zone_id: &str, id: &str) -> Result<()> {
        self.execute(Method::DELETE, &endpoints::cluster(zone_id, id), None)
            .await
    }

    pub async fn start_cluster(&self, zone_id: &str, id: &str) -> Result<()> {
        self.execute(
            Method::POST,
            &endpoints::cluster_action(zone_id, id, "start"),
            None,
        )
        .await
    }

    pub async fn stop_cluster(&self, zone_id: &str, id: &str) -> Result<()> {
        self.execute(
            Method::POST,
            &endpoints::cluster_action(zone_id, id, "stop"),
            None,
        )
        .await
    }

    pub async fn scale_cluster(
        &self,
        zone_id: &str,
        id: &str,
        request: &ScaleClusterRequest,
    ) -> Result<()> {
        self.execute(
            Method::POST,
            &endpoints::cluster_action(zone_id, id, "scale"),
            Some(crate::to_json(request)?),
        )
        .await
    }

    pub async fn cluster_versions(&self, zone_id: &str) -> Result<Vec<KubernetesVersion>> {
        self.get(&endpoints::cluster_versions(zone_id)).await
    }

    pub async fn cluster_events(&self, zone_id: &str, id: &str) -> Result<Vec<ServiceEvent>> {
        self.get(&endpoints::cluster_events(zone_id, id)).await
    }
}
