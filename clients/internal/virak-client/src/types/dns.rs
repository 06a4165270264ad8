// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! DNS domain and record types

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

/// Supported DNS record types
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, VariantNames,
)]
#[allow(clippy::upper_case_acronyms)]
pub enum RecordType {
    A,
    AAAA,
    CNAME,
    MX,
    TXT,
    NS,
    SOA,
    SRV,
    CAA,
    TLSA,
}

impl RecordType {
    /// Record types that carry a priority
    pub fn has_priority(self) -> bool {
        matches!(self, Self::MX | Self::SRV)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Domain {
    pub domain: String,
    pub status: String,
    /// Nameserver delegation details, shape varies by registrar
    pub dns_info: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateDomainRequest {
    pub domain: String,
}

/// One value of a DNS record set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordContent {
    pub id: String,
    pub content_raw: String,
    pub is_disabled: bool,
    pub priority: Option<i64>,
    pub weight: Option<i64>,
    pub port: Option<i64>,
    pub flags: Option<i64>,
    pub tag: Option<String>,
}

/// A DNS record set: name and type with one or more contents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DnsRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub ttl: i64,
    pub content: Vec<RecordContent>,
}

/// Body for creating or updating a record.
///
/// Type-specific fields are omitted when unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordRequest {
    pub record: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
    pub ttl: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_usage: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matching_type: Option<i64>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_record_type_names() {
        assert_eq!(RecordType::from_str("SRV").unwrap(), RecordType::SRV);
        assert!(RecordType::from_str("srv").is_err());
        assert!(RecordType::VARIANTS.contains(&"AAAA"));
        assert!(RecordType::SRV.has_priority());
        assert!(!RecordType::A.has_priority());
    }

    #[test]
    fn test_record_request_omits_unset_fields() {
        let req = RecordRequest {
            record: "www".to_string(),
            record_type: "A".to_string(),
            content: "192.0.2.1".to_string(),
            ttl: 3600,
            ..Default::default()
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"record": "www", "type": "A", "content": "192.0.2.1", "ttl": 3600})
        );
    }
}
