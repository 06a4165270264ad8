// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use reqwest::Method;

use crate::endpoints;
use crate::types::{CreateDomainRequest, DnsRecord, Domain, RecordRequest, ServiceEvent};
use crate::{Client, Result};

impl Client {
    pub async fn list_domains(&self) -> Result<Vec<Domain>> {
        self.get(&endpoints::dns_domains()).await
    }

    pub async fn create_domain(&self, domain: &str) -> Result<()> {
        let body = CreateDomainRequest {
            domain: domain.to_string(),
        };
        self.execute(
            Method::POST,
            &endpoints::dns_domains(),
            Some(crate::to_json(&body)?),
        )
        .await
    }

    pub async fn get_domain(&self, domain: &str) -> Result<Domain> {
        self.get(&endpoints::dns_domain(domain)).await
    }

    pub async fn delete_domain(&self, domain: &str) -> Result<()> {
        self.execute(Method::DELETE, &endpoints::dns_domain(domain), None)
            .await
    }

    pub async fn list_records(&self, domain: &str) -> Result<Vec<DnsRecord>> {
        self.get(&endpoints::dns_records(domain)).await
    }

    pub async fn create_record(&self, domain: &str, request: &RecordRequest) -> Result<()> {
        self.execute(
            Method::POST,
            &endpoints::dns_records(domain),
            Some(crate::to_json(request)?),
        )
        .await
    }

    /// Replace one content entry of a record set
    pub async fn update_record(
        &self,
        domain: &str,
        content_id: &str,
        request: &RecordRequest,
    ) -> Result<()> {
        let path = endpoints::dns_record(domain, &request.record, &request.record_type, content_id);
        self.execute(Method::PUT, &path, Some(crate::to_json(request)?))
            .await
    }

    pub async fn delete_record(
        &self,
        domain: &str,
        record: &str,
        record_type: &str,
        content_id: &str,
    ) -> Result<()> {
        let path = endpoints::dns_record(domain, record, record_type, content_id);
        self.execute(Method::DELETE, &path, None).await
    }

    pub async fn dns_events(&self) -> Result<Vec<ServiceEvent>> {
        self.get(&endpoints::dns_events()).await
    }
}
