// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Per-invocation state shared by every command

use std::time::Duration;

use anyhow::{Context as _, Result};
use virak_client::Client;
use virak_flags::{Flags, Options, Rule, rules};

use crate::config::Config;
use crate::preflight::{Session, preflight};

const USER_AGENT: &str = concat!("virak-cli/", env!("CARGO_PKG_VERSION"));

/// Global options of the invocation
#[derive(Debug, Clone)]
pub struct Context {
    pub json: bool,
    api_url: String,
    timeout: Duration,
}

/// Everything a command body needs once its preconditions hold
pub struct Prepared<T> {
    pub session: Session,
    pub opts: T,
    pub client: Client,
}

impl<T> Prepared<T> {
    pub fn zone(&self) -> &str {
        self.session.zone()
    }
}

impl Context {
    pub fn new(json: bool, api_url: String, timeout: Duration) -> Self {
        Self {
            json,
            api_url,
            timeout,
        }
    }

    /// Run preflight, validate the flags against `checks`, load the options
    /// and build an authenticated client, in that order.
    pub fn prepare<T: Options>(&self, flags: &Flags<T>, checks: &[Rule]) -> Result<Prepared<T>> {
        let config = Config::load()?;
        let session = preflight(&config, flags)?;
        rules::validate(flags, checks)?;
        let opts = flags.load()?;
        let client = self.client(&session.token)?;
        Ok(Prepared {
            session,
            opts,
            client,
        })
    }

    /// Build a client for the given token
    pub fn client(&self, token: &str) -> Result<Client> {
        tracing::debug!(api_url = %self.api_url, timeout = ?self.timeout, "building client");
        Client::builder(&self.api_url, token)
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()
            .context("failed to create API client")
    }
}
