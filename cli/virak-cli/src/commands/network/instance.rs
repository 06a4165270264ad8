// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Instance network attachments

use anyhow::Result;
use clap::Subcommand;
use virak_client::{ConnectInstanceRequest, DisconnectInstanceRequest};
use virak_flags::{Flags, options};

use crate::commands::id_rules;
use crate::context::Context;
use crate::output::render;
use crate::output::table::{create_table, print_table};

options! {
    pub struct ListOptions: zone {
        instance_id: string = ("instanceId", "", "Instance ID"),
    }
}

options! {
    pub struct ConnectOptions: zone {
        network_id: string = ("networkId", "", "Network ID"),
        instance_id: string = ("instanceId", "", "Instance ID"),
    }
}

options! {
    pub struct DisconnectOptions: zone {
        network_id: string = ("networkId", "", "Network ID"),
        instance_id: string = ("instanceId", "", "Instance ID"),
        instance_network_id: string = ("instanceNetworkId", "", "Attachment ID from 'network instance list'"),
    }
}

#[derive(Subcommand, Clone)]
pub enum NetworkInstanceCommand {
    /// List the networks an instance is attached to
    #[command(alias = "ls")]
    List(Flags<ListOptions>),
    /// Attach an instance to a network
    Connect(Flags<ConnectOptions>),
    /// Detach an instance from a network
    Disconnect(Flags<DisconnectOptions>),
}

impl NetworkInstanceCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        match self {
            Self::List(flags) => list(ctx, flags).await,
            Self::Connect(flags) => connect(ctx, flags).await,
            Self::Disconnect(flags) => disconnect(ctx, flags).await,
        }
    }
}

async fn list(ctx: &Context, flags: Flags<ListOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &id_rules("instanceId"))?;
    let attachments = p
        .client
        .list_instance_networks(p.zone(), &p.opts.instance_id)
        .await?;
    render(ctx.json, &attachments, |attachments| {
        let mut tbl = create_table(&["ID", "NETWORK", "IP", "MAC", "DEFAULT"]);
        for a in attachments {
            tbl.add_row(vec![
                a.id.clone(),
                a.network
                    .as_ref()
                    .map(|n| n.name.clone())
                    .unwrap_or_default(),
                a.ip_address.clone(),
                a.mac_address.clone(),
                crate::output::yes_no(a.is_default),
            ]);
        }
        print_table(tbl, "network attachments");
    })
}

async fn connect(ctx: &Context, flags: Flags<ConnectOptions>) -> Result<()> {
    let checks: Vec<_> = id_rules("networkId")
        .into_iter()
        .chain(id_rules("instanceId"))
        .collect();
    let p = ctx.prepare(&flags, &checks)?;
    let request = ConnectInstanceRequest {
        network_id: p.opts.network_id.clone(),
        instance_id: p.opts.instance_id.clone(),
    };
    p.client.connect_instance(p.zone(), &request).await?;
    println!(
        "Instance {} connected to network {}",
        request.instance_id, request.network_id
    );
    Ok(())
}

async fn disconnect(ctx: &Context, flags: Flags<DisconnectOptions>) -> Result<()> {
    let checks: Vec<_> = id_rules("networkId")
        .into_iter()
        .chain(id_rules("instanceId"))
        .chain(id_rules("instanceNetworkId"))
        .collect();
    let p = ctx.prepare(&flags, &checks)?;
    let request = DisconnectInstanceRequest {
        network_id: p.opts.network_id.clone(),
        instance_id: p.opts.instance_id.clone(),
        instance_network_id: p.opts.instance_network_id.clone(),
    };
    p.client.disconnect_instance(p.zone(), &request).await?;
    println!(
        "Instance {} disconnected from network {}",
        request.instance_id, request.network_id
    );
    Ok(())
}
