// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! REST endpoint paths, relative to the API base URL

use std::fmt;

/// A request path held as its segments
///
/// Segments are percent-encoded one by one when the request URL is built, so
/// a value such as a record name can never add or remove path components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    segments: Vec<String>,
}

impl Endpoint {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }
}

/// Unescaped form, for logs and error messages
impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

// Zones
pub fn zones() -> Endpoint {
    Endpoint::new(["zones"])
}

pub fn zone_resources(zone: &str) -> Endpoint {
    Endpoint::new(["zone", zone, "resources"])
}

pub fn zone_services(zone: &str) -> Endpoint {
    Endpoint::new(["zone", zone, "services"])
}

// User
pub fn user_profile() -> Endpoint {
    Endpoint::new(["user", "profile"])
}

pub fn user_token_abilities() -> Endpoint {
    Endpoint::new(["user", "token", "abilities"])
}

pub fn user_ssh_keys() -> Endpoint {
    Endpoint::new(["user", "ssh-key"])
}

pub fn user_ssh_key(id: &str) -> Endpoint {
    Endpoint::new(["user", "ssh-key", id])
}

// Finance
pub fn finance_wallet() -> Endpoint {
    Endpoint::new(["finance", "wallet"])
}

pub fn finance_documents() -> Endpoint {
    Endpoint::new(["finance", "documents"])
}

pub fn finance_payments() -> Endpoint {
    Endpoint::new(["finance", "payments"])
}

pub fn finance_expenses() -> Endpoint {
    Endpoint::new(["finance", "expenses"])
}

// DNS
pub fn dns_domains() -> Endpoint {
    Endpoint::new(["dns", "domains"])
}

pub fn dns_events() -> Endpoint {
    Endpoint::new(["dns", "events"])
}

pub fn dns_domain(domain: &str) -> Endpoint {
    Endpoint::new(["dns", "domains", domain])
}

pub fn dns_records(domain: &str) -> Endpoint {
    Endpoint::new(["dns", "domains", domain, "records"])
}

pub fn dns_record(domain: &str, record: &str, record_type: &str, content_id: &str) -> Endpoint {
    Endpoint::new(["dns", "domains", domain, "records", record, record_type, content_id])
}

// Object storage
pub fn buckets(zone: &str) -> Endpoint {
    Endpoint::new(["zone", zone, "object-storage", "buckets"])
}

pub fn bucket(zone: &str, id: &str) -> Endpoint {
    Endpoint::new(["zone", zone, "object-storage", "buckets", id])
}

pub fn bucket_events(zone: &str) -> Endpoint {
    Endpoint::new(["zone", zone, "object-storage", "events"])
}

// Kubernetes
pub fn clusters(zone: &str) -> Endpoint {
    Endpoint::new(["zone", zone, "kubernetes"])
}

pub fn cluster(zone: &str, id: &str) -> Endpoint {
    Endpoint::new(["zone", zone, "kubernetes", id])
}

pub fn cluster_action(zone: &str, id: &str, action: &str) -> Endpoint {
    Endpoint::new(["zone", zone, "kubernetes", id, action])
}

pub fn cluster_versions(zone: &str) -> Endpoint {
    Endpoint::new(["zone", zone, "kubernetes", "versions"])
}

pub fn cluster_events(zone: &str, id: &str) -> Endpoint {
    Endpoint::new(["zone", zone, "kubernetes", id, "events"])
}

// Networks
pub fn networks(zone: &str) -> Endpoint {
    Endpoint::new(["zone", zone, "network"])
}

pub fn network(zone: &str, id: &str) -> Endpoint {
    Endpoint::new(["zone", zone, "network", id])
}

pub fn network_create(zone: &str, kind: &str) -> Endpoint {
    Endpoint::new(["zone", zone, "network", kind])
}

pub fn network_offerings(zone: &str) -> Endpoint {
    Endpoint::new(["zone", zone, "network", "service-offerings"])
}

pub fn instance_networks(zone: &str) -> Endpoint {
    Endpoint::new(["zone", zone, "network", "instance"])
}

pub fn instance_network_action(zone: &str, action: &str) -> Endpoint {
    Endpoint::new(["zone", zone, "network", "instance", action])
}

pub fn firewall_rules(zone: &str, network: &str) -> Endpoint {
    Endpoint::new(["zone", zone, "network", network, "firewall", "ipv4"])
}

pub fn firewall_rule(zone: &str, network: &str, rule: &str) -> Endpoint {
    Endpoint::new(["zone", zone, "network", network, "firewall", "ipv4", rule])
}

pub fn public_ips(zone: &str, network: &str) -> Endpoint {
    Endpoint::new(["zone", zone, "network", network, "public-ip"])
}

pub fn public_ip(zone: &str, network: &str, ip: &str) -> Endpoint {
    Endpoint::new(["zone", zone, "network", network, "public-ip", ip])
}

pub fn static_nat(zone: &str, network: &str, ip: &str) -> Endpoint {
    Endpoint::new(["zone", zone, "network", network, "public-ip", ip, "static-nat"])
}

pub fn port_forwards(zone: &str, network: &str) -> Endpoint {
    Endpoint::new(["zone", zone, "network", network, "port-forward"])
}

pub fn port_forward(zone: &str, network: &str, id: &str) -> Endpoint {
    Endpoint::new(["zone", zone, "network", network, "port-forward", id])
}

// Instances
pub fn instances(zone: &str) -> Endpoint {
    Endpoint::new(["zone", zone, "instance"])
}

pub fn instance(zone: &str, id: &str) -> Endpoint {
    Endpoint::new(["zone", zone, "instance", id])
}

pub fn instance_action(zone: &str, id: &str, action: &str) -> Endpoint {
    Endpoint::new(["zone", zone, "instance", id, action])
}

pub fn instance_offerings(zone: &str) -> Endpoint {
    Endpoint::new(["zone", zone, "instance", "service-offerings"])
}

pub fn vm_images(zone: &str) -> Endpoint {
    Endpoint::new(["zone", zone, "instance", "vm-images"])
}

pub fn snapshots(zone: &str, instance: &str) -> Endpoint {
    Endpoint::new(["zone", zone, "instance", instance, "snapshot"])
}

pub fn snapshot(zone: &str, instance: &str, id: &str) -> Endpoint {
    Endpoint::new(["zone", zone, "instance", instance, "snapshot", id])
}

pub fn snapshot_revert(zone: &str, instance: &str) -> Endpoint {
    Endpoint::new(["zone", zone, "instance", instance, "snapshot", "revert"])
}

pub fn volumes(zone: &str) -> Endpoint {
    Endpoint::new(["zone", zone, "instance", "volumes"])
}

pub fn volume(zone: &str, id: &str) -> Endpoint {
    Endpoint::new(["zone", zone, "instance", "volumes", id])
}

pub fn volume_action(zone: &str, id: &str, action: &str) -> Endpoint {
    Endpoint::new(["zone", zone, "instance", "volumes", id, action])
}

pub fn volume_offerings(zone: &str) -> Endpoint {
    Endpoint::new(["zone", zone, "instance", "volumes", "service-offerings"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dns_record_path() {
        let endpoint = dns_record("example.com", "www", "A", "c1");
        assert_eq!(endpoint.to_string(), "/dns/domains/example.com/records/www/A/c1");
    }

    #[test]
    fn test_values_stay_single_segments() {
        let endpoint = dns_domain("../user/profile");
        let segments: Vec<_> = endpoint.segments().collect();
        assert_eq!(segments, ["dns", "domains", "../user/profile"]);
    }

    #[test]
    fn test_zone_scoped_paths() {
        assert_eq!(buckets("z1").to_string(), "/zone/z1/object-storage/buckets");
        assert_eq!(cluster_action("z1", "k1", "scale").to_string(), "/zone/z1/kubernetes/k1/scale");
        assert_eq!(
            static_nat("z1", "n1", "ip1").to_string(),
            "/zone/z1/network/n1/public-ip/ip1/static-nat"
        );
        assert_eq!(
            volume_action("z1", "v1", "attach").to_string(),
            "/zone/z1/instance/volumes/v1/attach"
        );
    }
}
