// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Login and logout

use anyhow::{Context as _, Result, bail};
use virak_flags::{Flags, options};

use crate::config::Config;
use crate::context::Context;

options! {
    pub struct LoginOptions {
        token: string = ("token", "", "API token (prompted for when omitted)"),
    }
}

/// Verify a token against the API and store it
pub async fn login(ctx: &Context, flags: Flags<LoginOptions>) -> Result<()> {
    let opts = flags.load()?;
    let token = if opts.token.trim().is_empty() {
        rpassword::prompt_password("API token: ").context("failed to read token")?
    } else {
        opts.token
    };
    let token = token.trim().to_string();
    if token.is_empty() {
        bail!("no token given");
    }

    let client = ctx.client(&token)?;
    let profile = client
        .user_profile()
        .await
        .context("the API rejected this token")?;

    let mut config = Config::load()?;
    config.auth.token = token;
    config.save()?;

    tracing::info!(user = %profile.email, "logged in");
    if profile.name.is_empty() {
        println!("Logged in");
    } else {
        println!("Logged in as {}", profile.name);
    }
    Ok(())
}

/// Forget the stored token. The default zone is kept.
pub fn logout() -> Result<()> {
    let mut config = Config::load()?;
    if !config.is_logged_in() {
        println!("Not logged in");
        return Ok(());
    }
    config.auth.token.clear();
    config.save()?;
    tracing::info!("logged out");
    println!("Logged out");
    Ok(())
}
