// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! User profile and SSH key commands

use anyhow::{Context as _, Result};
use clap::Subcommand;
use virak_client::CreateSshKeyRequest;
use virak_flags::{Flags, options, rules};

use super::NoOptions;
use crate::context::Context;
use crate::output::table::{create_table, print_table};
use crate::output::{format_time, print_fields, render, yes_no};

options! {
    pub struct SshKeyCreateOptions {
        name: string = ("name", "", "Key name"),
        public_key: string = ("public-key", "", "OpenSSH public key"),
        public_key_file: string = ("public-key-file", "", "Read the public key from a file"),
    }
}

options! {
    pub struct SshKeyDeleteOptions {
        ssh_key_id: string = ("sshKeyId", "", "SSH key ID"),
    }
}

#[derive(Subcommand, Clone)]
pub enum UserCommand {
    /// Show the account profile
    Profile(Flags<NoOptions>),
    /// List the abilities of the current token
    TokenAbilities(Flags<NoOptions>),
    /// Manage SSH keys
    SshKey {
        #[command(subcommand)]
        command: SshKeyCommand,
    },
}

#[derive(Subcommand, Clone)]
pub enum SshKeyCommand {
    /// List SSH keys
    #[command(alias = "ls")]
    List(Flags<NoOptions>),
    /// Add an SSH key
    Create(Flags<SshKeyCreateOptions>),
    /// Delete an SSH key
    #[command(alias = "rm")]
    Delete(Flags<SshKeyDeleteOptions>),
}

impl UserCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        match self {
            Self::Profile(flags) => profile(ctx, flags).await,
            Self::TokenAbilities(flags) => token_abilities(ctx, flags).await,
            Self::SshKey { command } => match command {
                SshKeyCommand::List(flags) => list_keys(ctx, flags).await,
                SshKeyCommand::Create(flags) => create_key(ctx, flags).await,
                SshKeyCommand::Delete(flags) => delete_key(ctx, flags).await,
            },
        }
    }
}

async fn profile(ctx: &Context, flags: Flags<NoOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &[])?;
    let profile = p.client.user_profile().await?;
    render(ctx.json, &profile, |u| {
        print_fields(&[
            ("ID", u.id.clone()),
            ("Name", u.name.clone()),
            ("Email", u.email.clone()),
            ("Phone", u.phone.clone()),
            ("Verified", yes_no(u.is_verified)),
            ("Created", format_time(u.created_at)),
        ]);
    })
}

async fn token_abilities(ctx: &Context, flags: Flags<NoOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &[])?;
    let abilities = p.client.token_abilities().await?;
    render(ctx.json, &abilities, |abilities| {
        for ability in abilities {
            println!("{ability}");
        }
    })
}

async fn list_keys(ctx: &Context, flags: Flags<NoOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &[])?;
    let keys = p.client.list_ssh_keys().await?;
    render(ctx.json, &keys, |keys| {
        let mut tbl = create_table(&["ID", "NAME", "CREATED"]);
        for k in keys {
            tbl.add_row(vec![k.id.clone(), k.name.clone(), format_time(k.created_at)]);
        }
        print_table(tbl, "SSH keys");
    })
}

async fn create_key(ctx: &Context, flags: Flags<SshKeyCreateOptions>) -> Result<()> {
    let p = ctx.prepare(
        &flags,
        &[
            rules::required("name"),
            rules::exactly_one(&["public-key", "public-key-file"]),
        ],
    )?;
    let public_key = if p.opts.public_key_file.is_empty() {
        p.opts.public_key
    } else {
        std::fs::read_to_string(&p.opts.public_key_file)
            .with_context(|| format!("failed to read {}", p.opts.public_key_file))?
    };

    let request = CreateSshKeyRequest {
        name: p.opts.name,
        public_key: public_key.trim().to_string(),
    };
    let key = p.client.create_ssh_key(&request).await?;
    tracing::info!(name = %request.name, "ssh key created");
    render(ctx.json, &key, |_| println!("Added SSH key '{}'", request.name))
}

async fn delete_key(ctx: &Context, flags: Flags<SshKeyDeleteOptions>) -> Result<()> {
    let p = ctx.prepare(
        &flags,
        &[rules::required("sshKeyId"), rules::is_ulid("sshKeyId")],
    )?;
    p.client.delete_ssh_key(&p.opts.ssh_key_id).await?;
    println!("Deleted SSH key {}", p.opts.ssh_key_id);
    Ok(())
}
