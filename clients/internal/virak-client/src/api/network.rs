// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use reqwest::Method;

use crate::endpoints;
use crate::types::{
    ConnectInstanceRequest, CreateFirewallRuleRequest, CreateNetworkRequest,
    CreatePortForwardRequest, DisconnectInstanceRequest, FirewallRule, InstanceNetwork, Network,
    NetworkKind, NetworkOffering, PortForward, PublicIp, StaticNatRequest,
};
use crate::{Client, Result};

impl Client {
    pub async fn list_networks(&self, zone_id: &str) -> Result<Vec<Network>> {
        self.get(&endpoints::networks(zone_id)).await
    }

    pub async fn create_network(
        &self,
        zone_id: &str,
        kind: NetworkKind,
        request: &CreateNetworkRequest,
    ) -> Result<()> {
        let path = endpoints::network_create(zone_id, &kind.to_string());
        self.execute(Method::POST, &path, Some(crate::to_json(request)?))
            .await
    }

    pub async fn get_network(&self, zone_id: &str, id: &str) -> Result<Network> {
        self.get(&endpoints::network(zone_id, id)).await
    }

    pub async fn delete_network(&self, zone_id: &str, id: &str) -> Result<()> {
        self.execute(Method::DELETE, &endpoints::network(zone_id, id), None)
            .await
    }

    pub async fn network_offerings(&self, zone_id: &str) -> Result<Vec<NetworkOffering>> {
        self.get(&endpoints::network_offerings(zone_id)).await
    }

    /// Networks an instance is attached to
    pub async fn list_instance_networks(
        &self,
        zone_id: &str,
        instance_id: &str,
    ) -> Result<Vec<InstanceNetwork>> {
        self.get_with_query(
            &endpoints::instance_networks(zone_id),
            &[("instance_id", instance_id.to_string())],
        )
        .await
    }

    pub async fn connect_instance(
        &self,
        zone_id: &str,
        request: &ConnectInstanceRequest,
    ) -> Result<()> {
        self.execute(
            Method::POST,
            &endpoints::instance_network_action(zone_id, "connect"),
            Some(crate::to_json(request)?),
        )
        .await
    }

    pub async fn disconnect_instance(
        &self,
        zone_id: &str,
        request: &DisconnectInstanceRequest,
    ) -> Result<()> {
        self.execute(
            Method::POST,
            &endpoints::instance_network_action(zone_id, "disconnect"),
            Some(crate::to_json(request)?),
        )
        .await
    }

    pub async fn list_firewall_rules(
        &self,
        zone_id: &str,
        network_id: &str,
    ) -> Result<Vec<FirewallRule>> {
        self.get(&endpoints::firewall_rules(zone_id, network_id))
            .await
    }

    pub async fn create_firewall_rule(
        &self,
        zone_id: &str,
        network_id: &str,
        request: &CreateFirewallRuleRequest,
    ) -> Result<()> {
        self.execute(
            Method::POST,
            &endpoints::firewall_rules(zone_id, network_id),
            Some(crate::to_json(request)?),
        )
        .await
    }

    pub async fn delete_firewall_rule(
        &self,
        zone_id: &str,
        network_id: &str,
        rule_id: &str,
    ) -> Result<()> {
        let path = endpoints::firewall_rule(zone_id, network_id, rule_id);
        self.execute(Method::DELETE, &path, None).await
    }

    pub async fn list_public_ips(&self, zone_id: &str, network_id: &str) -> Result<Vec<PublicIp>> {
        self.get(&endpoints::public_ips(zone_id, network_id)).await
    }

    pub async fn associate_public_ip(&self, zone_id: &str, network_id: &str) -> Result<()> {
        self.execute(
            Method::POST,
            &endpoints::public_ips(zone_id, network_id),
            None,
        )
        .await
    }

    pub async fn disassociate_public_ip(
        &self,
        zone_id: &str,
        network_id: &str,
        ip_id: &str,
    ) -> Result<()> {
        let path = endpoints::public_ip(zone_id, network_id, ip_id);
        self.execute(Method::DELETE, &path, None).await
    }

    pub async fn enable_static_nat(
        &self,
        zone_id: &str,
        network_id: &str,
        ip_id: &str,
        instance_id: &str,
    ) -> Result<()> {
        let body = StaticNatRequest {
            instance_id: instance_id.to_string(),
        };
        let path = endpoints::static_nat(zone_id, network_id, ip_id);
        self.execute(Method::POST, &path, Some(crate::to_json(&body)?))
            .await
    }

    pub async fn disable_static_nat(
        &self,
        zone_id: &str,
        network_id: &str,
        ip_id: &str,
    ) -> Result<()> {
        let path = endpoints::static_nat(zone_id, network_id, ip_id);
        self.execute(Method::DELETE, &path, None).await
    }

    pub async fn list_port_forwards(
        &self,
        zone_id: &str,
        network_id: &str,
    ) -> Result<Vec<PortForward>> {
        self.get(&endpoints::port_forwards(zone_id, network_id))
            .await
    }

    pub async fn create_port_forward(
        &self,
        zone_id: &str,
        network_id: &str,
        request: &CreatePortForwardRequest,
    ) -> Result<()> {
        self.execute(
            Method::POST,
            &endpoints::port_forwards(zone_id, network_id),
            Some(crate::to_json(request)?),
        )
        .await
    }

    pub async fn delete_port_forward(
        &self,
        zone_id: &str,
        network_id: &str,
        rule_id: &str,
    ) -> Result<()> {
        let path = endpoints::port_forward(zone_id, network_id, rule_id);
        self.execute(Method::DELETE, &path, None).await
    }
}
