// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Auth and zone resolution before a command runs

use thiserror::Error;
use virak_flags::{DEFAULT_ZONE_FLAG, Flags, Options, Values, ZONE_ID_FLAG};

use crate::config::Config;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreflightError {
    #[error("you must be logged in to use this command (run 'virak login')")]
    NotLoggedIn,

    #[error("no default zone configured (run 'virak zone set-default --zoneId <id>')")]
    NoDefaultZone,

    #[error("a zone is required: pass --zoneId <id> or --default-zone")]
    ZoneRequired,
}

/// Credentials and zone resolved for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    /// Set for zone-scoped commands only
    pub zone_id: Option<String>,
}

impl Session {
    /// Zone ID of a zone-scoped command, empty otherwise
    pub fn zone(&self) -> &str {
        self.zone_id.as_deref().unwrap_or_default()
    }
}

/// Resolve the session for a command whose flags are `T`.
///
/// The token always comes from the config file. For zone-scoped commands
/// `--default-zone` selects the configured default zone, otherwise
/// `--zoneId` must be given on the command line.
pub fn preflight<T: Options>(config: &Config, flags: &Flags<T>) -> Result<Session, PreflightError> {
    if !config.is_logged_in() {
        return Err(PreflightError::NotLoggedIn);
    }
    let token = config.auth.token.trim().to_string();

    if !T::ZONE_SCOPED {
        return Ok(Session {
            token,
            zone_id: None,
        });
    }

    let zone_id = if flags.get_bool(DEFAULT_ZONE_FLAG) {
        config
            .default_zone()
            .ok_or(PreflightError::NoDefaultZone)?
            .to_string()
    } else {
        let explicit = flags.get_string(ZONE_ID_FLAG);
        if !flags.changed(ZONE_ID_FLAG) || explicit.trim().is_empty() {
            return Err(PreflightError::ZoneRequired);
        }
        explicit
    };
    tracing::debug!(zone_id, "zone resolved");

    Ok(Session {
        token,
        zone_id: Some(zone_id),
    })
}
