// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Network commands
//!
//! Networks themselves live here; attachments, firewall rules, public IPs
//! and port forwarding each have a submodule.

pub mod firewall;
pub mod instance;
pub mod port_forward;
pub mod public_ip;

use anyhow::Result;
use clap::Subcommand;
use virak_client::{CreateNetworkRequest, NetworkKind};
use virak_flags::rules;
use virak_flags::{Flags, Values, options};

use super::{ZoneOptions, id_rules, non_empty};
use crate::context::Context;
use crate::output::table::{create_table, print_table};
use crate::output::{format_time, print_fields, render};

pub use firewall::FirewallCommand;
pub use instance::NetworkInstanceCommand;
pub use port_forward::PortForwardCommand;
pub use public_ip::PublicIpCommand;

options! {
    pub struct CreateL2Options: zone {
        name: string = ("name", "", "Network name"),
        offering_id: string = ("offeringId", "", "Network offering ID"),
    }
}

options! {
    pub struct CreateL3Options: zone {
        name: string = ("name", "", "Network name"),
        offering_id: string = ("offeringId", "", "Network offering ID"),
        gateway: string = ("gateway", "", "Gateway address, e.g. 10.0.0.1"),
        netmask: string = ("netmask", "", "Netmask, e.g. 255.255.255.0"),
    }
}

options! {
    pub struct NetworkOptions: zone {
        network_id: string = ("networkId", "", "Network ID"),
    }
}

#[derive(Subcommand, Clone)]
pub enum NetworkCommand {
    /// List networks
    #[command(alias = "ls")]
    List(Flags<ZoneOptions>),
    /// Create a layer 2 network
    #[command(name = "create-l2")]
    CreateL2(Flags<CreateL2Options>),
    /// Create a layer 3 (isolated) network
    #[command(name = "create-l3")]
    CreateL3(Flags<CreateL3Options>),
    /// Show a network
    Show(Flags<NetworkOptions>),
    /// Delete a network
    #[command(alias = "rm")]
    Delete(Flags<NetworkOptions>),
    /// List network offerings
    Offerings(Flags<ZoneOptions>),
    /// Attach instances to networks
    Instance {
        #[command(subcommand)]
        command: NetworkInstanceCommand,
    },
    /// Manage firewall rules of a network
    Firewall {
        #[command(subcommand)]
        command: FirewallCommand,
    },
    /// Manage public IPs of a network
    PublicIp {
        #[command(subcommand)]
        command: PublicIpCommand,
    },
    /// Manage port forwarding rules of a network
    PortForward {
        #[command(subcommand)]
        command: PortForwardCommand,
    },
}

impl NetworkCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        match self {
            Self::List(flags) => list(ctx, flags).await,
            Self::CreateL2(flags) => create_l2(ctx, flags).await,
            Self::CreateL3(flags) => create_l3(ctx, flags).await,
            Self::Show(flags) => show(ctx, flags).await,
            Self::Delete(flags) => delete(ctx, flags).await,
            Self::Offerings(flags) => offerings(ctx, flags).await,
            Self::Instance { command } => command.run(ctx).await,
            Self::Firewall { command } => command.run(ctx).await,
            Self::PublicIp { command } => command.run(ctx).await,
            Self::PortForward { command } => command.run(ctx).await,
        }
    }
}

async fn list(ctx: &Context, flags: Flags<ZoneOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &[])?;
    let networks = p.client.list_networks(p.zone()).await?;
    render(ctx.json, &networks, |networks| {
        let mut tbl = create_table(&["ID", "NAME", "TYPE", "STATUS", "GATEWAY", "CREATED"]);
        for n in networks {
            tbl.add_row(vec![
                n.id.clone(),
                n.name.clone(),
                n.network_offering
                    .as_ref()
                    .map(|o| o.offering_type.clone())
                    .unwrap_or_default(),
                n.status.clone(),
                n.gateway.clone().unwrap_or_default(),
                format_time(n.created_at),
            ]);
        }
        print_table(tbl, "networks");
    })
}

async fn create_l2(ctx: &Context, flags: Flags<CreateL2Options>) -> Result<()> {
    let mut checks = vec![rules::required("name")];
    checks.extend(id_rules("offeringId"));
    let p = ctx.prepare(&flags, &checks)?;
    let request = CreateNetworkRequest {
        name: p.opts.name.clone(),
        network_offering_id: p.opts.offering_id.clone(),
        gateway: None,
        netmask: None,
    };
    p.client
        .create_network(p.zone(), NetworkKind::L2, &request)
        .await?;
    tracing::info!(name = %request.name, "l2 network created");
    println!("Network {} created", request.name);
    Ok(())
}

async fn create_l3(ctx: &Context, flags: Flags<CreateL3Options>) -> Result<()> {
    let mut checks = vec![rules::required("name")];
    checks.extend(id_rules("offeringId"));
    checks.push(rules::required_if("netmask", |v: &dyn Values| {
        !v.get_string("gateway").is_empty()
    }));
    checks.push(rules::required_if("gateway", |v: &dyn Values| {
        !v.get_string("netmask").is_empty()
    }));
    let p = ctx.prepare(&flags, &checks)?;
    let o = p.opts;
    let request = CreateNetworkRequest {
        name: o.name,
        network_offering_id: o.offering_id,
        gateway: non_empty(o.gateway),
        netmask: non_empty(o.netmask),
    };
    p.client
        .create_network(p.session.zone(), NetworkKind::L3, &request)
        .await?;
    tracing::info!(name = %request.name, "l3 network created");
    println!("Network {} created", request.name);
    Ok(())
}

async fn show(ctx: &Context, flags: Flags<NetworkOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &id_rules("networkId"))?;
    let network = p.client.get_network(p.zone(), &p.opts.network_id).await?;
    render(ctx.json, &network, |n| {
        let offering = n.network_offering.clone().unwrap_or_default();
        print_fields(&[
            ("ID", n.id.clone()),
            ("Name", n.name.clone()),
            ("Status", n.status.clone()),
            ("Type", offering.offering_type),
            ("Offering", offering.displayname),
            ("Gateway", n.gateway.clone().unwrap_or_default()),
            ("Netmask", n.netmask.clone().unwrap_or_default()),
            ("Created", format_time(n.created_at)),
        ]);
    })
}

async fn delete(ctx: &Context, flags: Flags<NetworkOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &id_rules("networkId"))?;
    p.client.delete_network(p.zone(), &p.opts.network_id).await?;
    tracing::info!(network_id = %p.opts.network_id, "network deleted");
    println!("Network {} deleted", p.opts.network_id);
    Ok(())
}

async fn offerings(ctx: &Context, flags: Flags<ZoneOptions>) -> Result<()> {
    let p = ctx.prepare(&flags, &[])?;
    let offerings = p.client.network_offerings(p.zone()).await?;
    render(ctx.json, &offerings, |offerings| {
        let mut tbl = create_table(&["ID", "NAME", "TYPE", "PROTOCOL", "HOURLY PRICE"]);
        for o in offerings {
            tbl.add_row(vec![
                o.id.clone(),
                o.displayname.clone(),
                o.offering_type.clone(),
                o.internet_protocol.clone(),
                format!("{:.2}", o.hourly_started_price),
            ]);
        }
        print_table(tbl, "network offerings");
    })
}
