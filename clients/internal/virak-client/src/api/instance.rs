// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use reqwest::Method;

use crate::endpoints;
use crate::types::{
    CreateInstanceRequest, CreateSnapshotRequest, CreateVolumeRequest, DeleteInstanceRequest,
    Instance, InstanceMetrics, RebuildInstanceRequest, RevertSnapshotRequest, ServiceOffering,
    Snapshot, StopInstanceRequest, VmImage, Volume, VolumeAttachRequest, VolumeServiceOffering,
};
use crate::{Client, Result};

impl Client {
    pub async fn list_instances(&self, zone_id: &str) -> Result<Vec<Instance>> {
        self.get(&endpoints::instances(zone_id)).await
    }

    pub async fn create_instance(
        &self,
        zone_id: &str,
        request: &CreateInstanceRequest,
    ) -> Result<()> {
        self.execute(
            Method::POST,
            &endpoints::instances(zone_id),
            Some(crate::to_json(request)?),
        )
        .await
    }

    pub async fn get_instance(&self, zone_id: &str, id: &str) -> Result<Instance> {
        self.get(&endpoints::instance(zone_id, id)).await
    }

    /// Delete an instance. The API requires the instance name as confirmation.
    pub async fn delete_instance(&self, zone_id: &str, id: &str, name: &str) -> Result<()> {
        let body = DeleteInstanceRequest {
            name: name.to_string(),
        };
        self.execute(
            Method::DELETE,
            &endpoints::instance(zone_id, id),
            Some(crate::to_json(&body)?),
        )
        .await
    }

    pub async fn start_instance(&self, zone_id: &str, id: &str) -> Result<()> {
        self.execute(
            Method::POST,
            &endpoints::instance_action(zone_id, id, "start"),
            None,
        )
        .await
    }

    pub async fn stop_instance(&self, zone_id: &str, id: &str, forced: bool) -> Result<()> {
        let body = StopInstanceRequest { forced };
        self.execute(
            Method::POST,
            &endpoints::instance_action(zone_id, id, "stop"),
            Some(crate::to_json(&body)?),
        )
        .await
    }

    pub async fn reboot_instance(&self, zone_id: &str, id: &str) -> Result<()> {
        self.execute(
            Method::POST,
            &endpoints::instance_action(zone_id, id, "reboot"),
            None,
        )
        .await
    }

    pub async fn rebuild_instance(&self, zone_id: &str, id: &str, vm_image_id: &str) -> Result<()> {
        let body = RebuildInstanceRequest {
            vm_image_id: vm_image_id.to_string(),
        };
        self.execute(
            Method::POST,
            &endpoints::instance_action(zone_id, id, "rebuild"),
            Some(crate::to_json(&body)?),
        )
        .await
    }

    pub async fn instance_metrics(&self, zone_id: &str, id: &str) -> Result<InstanceMetrics> {
        self.get(&endpoints::instance_action(zone_id, id, "metrics"))
            .await
    }

    pub async fn instance_offerings(&self, zone_id: &str) -> Result<Vec<ServiceOffering>> {
        self.get(&endpoints::instance_offerings(zone_id)).await
    }

    pub async fn list_vm_images(&self, zone_id: &str) -> Result<Vec<VmImage>> {
        self.get(&endpoints::vm_images(zone_id)).await
    }

    // Snapshots

    pub async fn list_snapshots(&self, zone_id: &str, instance_id: &str) -> Result<Vec<Snapshot>> {
        self.get(&endpoints::snapshots(zone_id, instance_id)).await
    }

    pub async fn create_snapshot(&self, zone_id: &str, instance_id: &str, name: &str) -> Result<()> {
        let body = CreateSnapshotRequest {
            name: name.to_string(),
        };
        self.execute(
            Method::POST,
            &endpoints::snapshots(zone_id, instance_id),
            Some(crate::to_json(&body)?),
        )
        .await
    }

    pub async fn delete_snapshot(
        &self,
        zone_id: &str,
        instance_id: &str,
        snapshot_id: &str,
    ) -> Result<()> {
        let path = endpoints::snapshot(zone_id, instance_id, snapshot_id);
        self.execute(Method::DELETE, &path, None).await
    }

    pub async fn revert_snapshot(
        &self,
        zone_id: &str,
        instance_id: &str,
        snapshot_id: &str,
    ) -> Result<()> {
        let body = RevertSnapshotRequest {
            snapshot_id: snapshot_id.to_string(),
        };
        self.execute(
            Method::POST,
            &endpoints::snapshot_revert(zone_id, instance_id),
            Some(crate::to_json(&body)?),
        )
        .await
    }

    // Volumes

    pub async fn list_volumes(&self, zone_id: &str) -> Result<Vec<Volume>> {
        self.get(&endpoints::volumes(zone_id)).await
    }

    pub async fn create_volume(&self, zone_id: &str, request: &CreateVolumeRequest) -> Result<()> {
        self.execute(
            Method::POST,
            &endpoints::volumes(zone_id),
            Some(crate::to_json(request)?),
        )
        .await
    }

    pub async fn delete_volume(&self, zone_id: &str, id: &str) -> Result<()> {
        self.execute(Method::DELETE, &endpoints::volume(zone_id, id), None)
            .await
    }

    pub async fn attach_volume(&self, zone_id: &str, id: &str, instance_id: &str) -> Result<()> {
        let body = VolumeAttachRequest {
            instance_id: instance_id.to_string(),
        };
        self.execute(
            Method::POST,
            &endpoints::volume_action(zone_id, id, "attach"),
            Some(crate::to_json(&body)?),
        )
        .await
    }

    pub async fn detach_volume(&self, zone_id: &str, id: &str) -> Result<()> {
        self.execute(
            Method::POST,
            &endpoints::volume_action(zone_id, id, "detach"),
            None,
        )
        .await
    }

    pub async fn volume_offerings(&self, zone_id: &str) -> Result<Vec<VolumeServiceOffering>> {
        self.get(&endpoints::volume_offerings(zone_id)).await
    }
}
