// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! CLI command implementations

pub mod bucket;
pub mod cluster;
pub mod dns;
pub mod finance;
pub mod instance;
pub mod login;
pub mod network;
pub mod user;
pub mod zone;

pub use bucket::BucketCommand;
pub use cluster::ClusterCommand;
pub use dns::DnsCommand;
pub use finance::FinanceCommand;
pub use instance::InstanceCommand;
pub use network::NetworkCommand;
pub use user::UserCommand;
pub use zone::ZoneCommand;

use std::ops::RangeInclusive;

use anyhow::{Result, bail};
use virak_flags::rules::{self, Rule};
use virak_flags::options;

options! {
    /// Commands without flags of their own
    pub struct NoOptions {}
}

options! {
    /// Zone-scoped commands without flags of their own
    pub struct ZoneOptions: zone {}
}

/// A flag that must be given and hold a ULID
pub(crate) fn id_rules(name: &'static str) -> [Rule; 2] {
    [rules::required(name), rules::is_ulid(name)]
}

/// An explicitly given int must fall inside `range`
pub(crate) fn check_range(flag: &str, value: i64, range: RangeInclusive<i64>) -> Result<()> {
    if !range.contains(&value) {
        bail!(
            "--{flag} must be between {} and {}",
            range.start(),
            range.end()
        );
    }
    Ok(())
}

pub(crate) fn check_port(flag: &str, port: i64) -> Result<()> {
    check_range(flag, port, 1..=65535)
}

pub(crate) fn non_empty(value: String) -> Option<String> {
    (!value.trim().is_empty()).then_some(value)
}
