// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use reqwest::Method;

use crate::endpoints;
use crate::types::{Bucket, CreateBucketRequest, ServiceEvent, UpdateBucketRequest};
use crate::{Client, Result};

impl Client {
    pub async fn list_buckets(&self, zone_id: &str) -> Result<Vec<Bucket>> {
        self.get(&endpoints::buckets(zone_id)).await
    }

    pub async fn create_bucket(&self, zone_id: &str, request: &CreateBucketRequest) -> Result<()> {
        self.execute(
            Method::POST,
            &endpoints::buckets(zone_id),
            Some(crate::to_json(request)?),
        )
        .await
    }

    pub async fn get_bucket(&self, zone_id: &str, id: &str) -> Result<Bucket> {
        self.get(&endpoints::bucket(zone_id, id)).await
    }

    pub async fn update_bucket(
        &self,
        zone_id: &str,
        id: &str,
        request: &UpdateBucketRequest,
    ) -> Result<()> {
        self.execute(
            Method::PUT,
            &endpoints::bucket(zone_id, id),
            Some(crate::to_json(request)?),
        )
        .await
    }

    pub async fn delete_bucket(&self, zone_id: &str, id: &str) -> Result<()> {
        self.execute(Method::DELETE, &endpoints::bucket(zone_id, id), None)
            .await
    }

    pub async fn bucket_events(&self, zone_id: &str) -> Result<Vec<ServiceEvent>> {
        self.get(&endpoints::bucket_events(zone_id)).await
    }
}
