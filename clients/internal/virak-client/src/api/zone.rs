// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use crate::endpoints;
use crate::types::{Zone, ZoneResources, ZoneServices};
use crate::{Client, Result};

impl Client {
    pub async fn list_zones(&self) -> Result<Vec<Zone>> {
        self.get(&endpoints::zones()).await
    }

    pub async fn zone_resources(&self, zone_id: &str) -> Result<ZoneResources> {
        self.get(&endpoints::zone_resources(zone_id)).await
    }

    pub async fn zone_services(&self, zone_id: &str) -> Result<ZoneServices> {
        self.get(&endpoints::zone_services(zone_id)).await
    }
}
