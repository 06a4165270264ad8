// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Network, firewall, public IP and port forwarding types

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

/// Network offering a network is created from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkOffering {
    pub id: String,
    pub name: String,
    pub displayname: String,
    /// "L2" or "Isolated"
    #[serde(rename = "type")]
    pub offering_type: String,
    pub hourly_started_price: f64,
    pub internet_protocol: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Network {
    pub id: String,
    pub name: String,
    pub status: String,
    pub network_offering: Option<NetworkOffering>,
    pub gateway: Option<String>,
    pub netmask: Option<String>,
    pub created_at: Option<i64>,
}

/// Network kinds that can be created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum NetworkKind {
    L2,
    L3,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateNetworkRequest {
    pub name: String,
    pub network_offering_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub netmask: Option<String>,
}

/// Attachment of an instance to a network
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceNetwork {
    pub id: String,
    pub instance_id: String,
    pub ip_address: String,
    pub mac_address: String,
    pub is_default: bool,
    pub network: Option<Network>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectInstanceRequest {
    pub network_id: String,
    pub instance_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisconnectInstanceRequest {
    pub network_id: String,
    pub instance_id: String,
    pub instance_network_id: String,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TrafficType {
    Ingress,
    Egress,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, VariantNames,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Protocol {
    Tcp,
    Udp,
    Icmp,
    All,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FirewallRule {
    pub id: String,
    pub traffic_type: String,
    pub protocol: String,
    pub ip_source: String,
    pub ip_destination: String,
    pub port_start: Option<i64>,
    pub port_end: Option<i64>,
    pub icmp_code: Option<i64>,
    pub icmp_type: Option<i64>,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateFirewallRuleRequest {
    pub traffic_type: TrafficType,
    pub protocol_type: Protocol,
    pub ip_source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_start: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_end: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icmp_code: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icmp_type: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublicIp {
    pub id: String,
    pub ip_address: String,
    pub is_source_nat: bool,
    pub static_nat_enable: bool,
    pub instance_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticNatRequest {
    pub instance_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortForward {
    pub id: String,
    pub protocol: String,
    pub public_port: i64,
    pub private_port: i64,
    pub private_ip: String,
    pub instance_id: String,
    pub public_ip_id: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePortForwardRequest {
    pub protocol: Protocol,
    pub public_port: i64,
    pub private_port: i64,
    pub instance_id: String,
    pub network_public_ip_id: String,
}
